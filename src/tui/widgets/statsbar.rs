use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph},
    Frame,
};

use crate::stats::Overview;
use crate::tui::theme;

/// The one-line strip under the header: totals everyone asks for first.
pub fn render(frame: &mut Frame, area: Rect, overview: &Overview) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(theme::border())
        .style(theme::surface());
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let cells = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Ratio(1, 4),
            Constraint::Ratio(1, 4),
            Constraint::Ratio(1, 4),
            Constraint::Ratio(1, 4),
        ])
        .split(inner);

    let week_pct = overview.week.as_ref().map(|w| w.percentage).unwrap_or(0);
    let week_style = if week_pct >= 100 {
        theme::green()
    } else {
        theme::amber()
    };

    cell(
        frame,
        cells[0],
        &overview.total_problems.to_string(),
        "problems solved",
        theme::accent(),
    );
    cell(
        frame,
        cells[1],
        &format!("{}d", overview.best_streak),
        "best streak",
        theme::green(),
    );
    cell(
        frame,
        cells[2],
        &format!("{}%", week_pct),
        "week goals",
        week_style,
    );
    cell(
        frame,
        cells[3],
        &overview.all_time.perfect_weeks.to_string(),
        "perfect weeks",
        theme::violet(),
    );
}

fn cell(frame: &mut Frame, area: Rect, value: &str, label: &str, style: Style) {
    let line = Line::from(vec![
        Span::styled(value.to_string(), style.add_modifier(Modifier::BOLD)),
        Span::styled(format!("  {}", label), theme::dim()),
    ]);
    let paragraph = Paragraph::new(line).alignment(Alignment::Center);
    frame.render_widget(paragraph, area);
}
