use chrono::NaiveDate;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::Modifier,
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, List, ListItem, Paragraph},
    Frame,
};

use crate::data::JournalData;
use crate::models::{Category, DayEntry};
use crate::stats::ScoreScheme;
use crate::tui::app::DayFilter;
use crate::tui::theme;
use crate::utils::format::long_date;

/// Day browser: a scrollable list of logged days next to the full entry
/// for the selected one.
pub fn render(
    frame: &mut Frame,
    area: Rect,
    data: &JournalData,
    days: &[NaiveDate],
    selected: usize,
    filter: DayFilter,
    scheme: ScoreScheme,
) {
    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(38), Constraint::Percentage(62)])
        .split(area);

    render_list(frame, columns[0], data, days, selected, filter, scheme);
    render_detail(frame, columns[1], data, days.get(selected).copied(), scheme);
}

fn render_list(
    frame: &mut Frame,
    area: Rect,
    data: &JournalData,
    days: &[NaiveDate],
    selected: usize,
    filter: DayFilter,
    scheme: ScoreScheme,
) {
    let block = Block::default()
        .title(Span::styled(
            format!(" Days · {} ({}) ", filter.label(), days.len()),
            theme::accent(),
        ))
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(theme::accent())
        .style(theme::surface());

    let height = area.height.saturating_sub(2) as usize;
    let offset = scroll_offset(selected, height);

    let items: Vec<ListItem> = days
        .iter()
        .enumerate()
        .skip(offset)
        .take(height)
        .map(|(i, date)| {
            let entry = data.entries.get(date);
            let level = entry
                .map(|e| scheme.intensity(scheme.score(e)))
                .unwrap_or(0);
            let preview = entry.map(|e| e.preview()).unwrap_or_default();

            let marker = if i == selected { "▸ " } else { "  " };
            let date_style = if i == selected {
                theme::accent().add_modifier(Modifier::BOLD)
            } else {
                theme::bold()
            };

            ListItem::new(Line::from(vec![
                Span::styled(marker, theme::accent()),
                Span::styled(format!("{:<11}", date.format("%Y-%m-%d")), date_style),
                Span::styled("▮ ", theme::heat(level)),
                Span::styled(preview, theme::dim()),
            ]))
        })
        .collect();

    let list = List::new(items).block(block);
    frame.render_widget(list, area);
}

/// Keep the selection visible: scroll only once it would run off the
/// bottom of the pane.
fn scroll_offset(selected: usize, height: usize) -> usize {
    selected.saturating_sub(height.saturating_sub(1))
}

fn render_detail(
    frame: &mut Frame,
    area: Rect,
    data: &JournalData,
    date: Option<NaiveDate>,
    scheme: ScoreScheme,
) {
    let title = match date {
        Some(date) => format!(" {} ", long_date(date)),
        None => " Day ".to_string(),
    };
    let block = Block::default()
        .title(Span::styled(title, theme::accent()))
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(theme::border())
        .style(theme::surface());

    let lines = match date.and_then(|d| data.entries.get(&d)) {
        None => vec![
            Line::from(""),
            Line::from(Span::styled("  Nothing logged", theme::dim())),
        ],
        Some(entry) => detail_lines(entry, scheme),
    };

    let paragraph = Paragraph::new(lines).block(block);
    frame.render_widget(paragraph, area);
}

fn section(name: &str) -> Line<'static> {
    Line::from(Span::styled(format!("  {}", name), theme::bold()))
}

fn detail_lines(entry: &DayEntry, scheme: ScoreScheme) -> Vec<Line<'static>> {
    let score = scheme.score(entry);
    let mut lines = vec![
        Line::from(""),
        Line::from(vec![
            Span::styled("  score ", theme::dim()),
            Span::styled(
                score.to_string(),
                theme::accent().add_modifier(Modifier::BOLD),
            ),
            Span::styled(format!("  ·  {}", entry.preview()), theme::dim()),
        ]),
        Line::from(""),
    ];

    for category in Category::practice() {
        let Some(items) = entry.practice_items(category) else {
            continue;
        };
        if items.is_empty() {
            continue;
        }
        lines.push(section(category.display_name()));
        for item in items {
            let mut tail = String::new();
            if let Some(difficulty) = item.difficulty {
                tail.push_str(&format!(" ({})", difficulty.as_str()));
            }
            if let Some(kind) = &item.kind {
                tail.push_str(&format!(" [{}]", kind));
            }
            lines.push(Line::from(vec![
                Span::raw(format!("    · {}", item.name)),
                Span::styled(tail, theme::dim()),
            ]));
            if let Some(insight) = item.insight.as_deref().filter(|i| !i.is_empty()) {
                lines.push(Line::from(Span::styled(
                    format!("      {}", insight),
                    theme::dim(),
                )));
            }
        }
        lines.push(Line::from(""));
    }

    if !entry.building.is_empty() {
        lines.push(section("Building"));
        for item in &entry.building {
            lines.push(Line::from(vec![
                Span::raw(format!("    · {}", item.project)),
                Span::styled(format!(" — {}", item.work), theme::dim()),
            ]));
        }
        lines.push(Line::from(""));
    }

    if !entry.reading.is_empty() {
        lines.push(section("Reading"));
        for item in &entry.reading {
            let mut text = item.book.clone();
            if let Some(chapter) = item.chapter {
                text.push_str(&format!(" · ch {}", chapter));
            }
            if let Some((start, end)) = item.page_range() {
                text.push_str(&format!(" · pp {}–{}", start, end));
            }
            lines.push(Line::from(Span::raw(format!("    · {}", text))));
            if let Some(insight) = item.insight.as_deref().filter(|i| !i.is_empty()) {
                lines.push(Line::from(Span::styled(
                    format!("      {}", insight),
                    theme::dim(),
                )));
            }
        }
        lines.push(Line::from(""));
    }

    if !entry.exploring.is_empty() {
        lines.push(section("Exploring"));
        for item in &entry.exploring {
            lines.push(Line::from(vec![
                Span::raw(format!("    · {}", item.topic)),
                Span::styled(format!(" — {}", item.content), theme::dim()),
            ]));
        }
        lines.push(Line::from(""));
    }

    if let Some(notes) = entry.notes.as_deref().filter(|n| !n.trim().is_empty()) {
        lines.push(section("Notes"));
        lines.push(Line::from(Span::styled(
            format!("    {}", notes),
            theme::dim(),
        )));
    }

    lines
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn selection_scrolls_only_past_the_bottom() {
        assert_eq!(scroll_offset(0, 10), 0);
        assert_eq!(scroll_offset(9, 10), 0);
        assert_eq!(scroll_offset(10, 10), 1);
        assert_eq!(scroll_offset(25, 10), 16);
    }

    #[test]
    fn detail_lines_cover_every_section() {
        let entry: DayEntry = serde_json::from_str(
            r#"{
                "practice": {"leetcode": [{"name": "Two Sum", "difficulty": "easy"}]},
                "building": [{"project": "riyaz", "work": "days view"}],
                "reading": [{"book": "ddia", "chapter": 3, "pages": [70, 80]}],
                "exploring": [{"topic": "io_uring", "content": "ring buffers"}],
                "notes": "good day"
            }"#,
        )
        .unwrap();
        let rendered: Vec<String> = detail_lines(&entry, ScoreScheme::Balanced)
            .iter()
            .map(|l| l.to_string())
            .collect();
        let all = rendered.join("\n");
        assert!(all.contains("Two Sum"));
        assert!(all.contains("(easy)"));
        assert!(all.contains("riyaz"));
        assert!(all.contains("ch 3"));
        assert!(all.contains("pp 70–80"));
        assert!(all.contains("io_uring"));
        assert!(all.contains("good day"));
    }
}
