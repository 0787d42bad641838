use ratatui::{
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph},
    Frame,
};

use crate::stats::reading::BookOverview;
use crate::tui::theme;
use crate::utils::format::{format_percent, progress_bar};

pub fn render(frame: &mut Frame, area: Rect, books: &[BookOverview]) {
    let block = Block::default()
        .title(Span::styled(" Reading ", theme::accent()))
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(theme::border())
        .style(theme::surface());

    let mut lines = vec![Line::from("")];
    if books.is_empty() {
        lines.push(Line::from(Span::styled(
            "  No reading logged yet",
            theme::dim(),
        )));
    }

    for book in books {
        lines.push(Line::from(Span::styled(
            format!("  {}", book.title),
            theme::bold(),
        )));

        if book.progress.total_pages > 0 {
            let done = book.percent >= 100.0;
            lines.push(Line::from(vec![
                Span::styled(
                    format!(
                        "  {}",
                        progress_bar(book.progress.pages_read, book.progress.total_pages, 14)
                    ),
                    if done { theme::green() } else { theme::amber() },
                ),
                Span::styled(
                    format!(
                        "  {} · {}/{} pages",
                        format_percent(book.percent),
                        book.progress.pages_read,
                        book.progress.total_pages
                    ),
                    theme::dim(),
                ),
            ]));
        } else {
            lines.push(Line::from(Span::styled(
                format!("  {} pages read", book.progress.pages_read),
                theme::dim(),
            )));
        }

        if let Some(current) = &book.current {
            lines.push(Line::from(vec![
                Span::styled("  → ", theme::violet()),
                Span::styled(
                    format!("ch {} · {}", current.number, current.title),
                    theme::violet(),
                ),
            ]));
        }
        lines.push(Line::from(""));
    }

    let paragraph = Paragraph::new(lines).block(block);
    frame.render_widget(paragraph, area);
}
