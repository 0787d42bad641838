use ratatui::{
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph},
    Frame,
};
use unicode_width::UnicodeWidthStr;

use crate::stats::topics::TopicWeight;
use crate::tui::theme;

/// Tag cloud of exploring topics, flow-wrapped to the pane width.
pub fn render(frame: &mut Frame, area: Rect, topics: &[TopicWeight]) {
    let block = Block::default()
        .title(Span::styled(" Topics ", theme::accent()))
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(theme::border())
        .style(theme::surface());

    let inner_width = area.width.saturating_sub(4) as usize;

    let mut lines: Vec<Line> = vec![Line::from("")];
    if topics.is_empty() {
        lines.push(Line::from(Span::styled(
            "  Nothing explored yet",
            theme::dim(),
        )));
    }

    let mut spans: Vec<Span> = vec![Span::raw("  ")];
    let mut used = 0usize;
    for topic in topics {
        let tag = format!("{} ×{}", topic.topic, topic.count);
        let tag_width = tag.width() + 2;
        if used > 0 && used + tag_width > inner_width {
            lines.push(Line::from(std::mem::take(&mut spans)));
            spans.push(Span::raw("  "));
            used = 0;
        }
        spans.push(Span::styled(tag, theme::topic(topic.weight)));
        spans.push(Span::raw("  "));
        used += tag_width;
    }
    if spans.len() > 1 {
        lines.push(Line::from(spans));
    }

    let paragraph = Paragraph::new(lines).block(block);
    frame.render_widget(paragraph, area);
}
