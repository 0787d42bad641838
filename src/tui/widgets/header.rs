use chrono::NaiveDate;
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph},
    Frame,
};
use tui_big_text::{BigText, PixelSize};

use crate::tui::theme;
use crate::utils::format::{long_date, week_id};

pub fn render(frame: &mut Frame, area: Rect, today: NaiveDate) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(theme::accent())
        .style(theme::base());
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(4), Constraint::Length(1)])
        .split(inner);

    let title = BigText::builder()
        .pixel_size(PixelSize::Quadrant)
        .style(theme::accent())
        .alignment(Alignment::Center)
        .lines(vec!["riyaz".into()])
        .build();
    frame.render_widget(title, rows[0]);

    let date_line = Line::from(vec![
        Span::styled(long_date(today), theme::dim()),
        Span::styled("  ·  ", theme::dim()),
        Span::styled(week_id(today), theme::amber()),
    ]);
    let paragraph = Paragraph::new(date_line).alignment(Alignment::Center);
    frame.render_widget(paragraph, rows[1]);
}
