use ratatui::{
    layout::{Alignment, Rect},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::tui::app::View;
use crate::tui::theme;

pub fn render(frame: &mut Frame, area: Rect, view: &View, status: Option<&str>) {
    if let Some(message) = status {
        let line = Line::from(Span::styled(message.to_string(), theme::amber()));
        let paragraph = Paragraph::new(line).alignment(Alignment::Center);
        frame.render_widget(paragraph, area);
        return;
    }

    let hints: &[(&str, &str)] = match view {
        View::Dashboard | View::Help => &[
            ("[d]", " days  "),
            ("[r]", " reload  "),
            ("[?]", " help  "),
            ("[q]", " quit"),
        ],
        View::Days => &[
            ("[↑ ↓]", " move  "),
            ("[f]", " filter  "),
            ("[r]", " reload  "),
            ("[Esc]", " back"),
        ],
    };

    let mut spans = Vec::new();
    for (key, label) in hints {
        spans.push(Span::styled(*key, theme::accent()));
        spans.push(Span::styled(*label, theme::dim()));
    }

    let line = Line::from(spans);
    let paragraph = Paragraph::new(line).alignment(Alignment::Center);
    frame.render_widget(paragraph, area);
}
