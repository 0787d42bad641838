use ratatui::{
    layout::Rect,
    style::Modifier,
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph},
    Frame,
};

use crate::stats::goals::{AllTimeGoals, WeekGoals};
use crate::tui::theme;
use crate::utils::format::{format_percent, progress_bar};

pub fn render(frame: &mut Frame, area: Rect, week: Option<&WeekGoals>, all_time: &AllTimeGoals) {
    let title = match week {
        Some(week) => format!(" Goals · {} ", week.id),
        None => " Goals ".to_string(),
    };
    let block = Block::default()
        .title(Span::styled(title, theme::accent()))
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(theme::border())
        .style(theme::surface());

    let mut lines = vec![Line::from("")];
    match week {
        None => {
            lines.push(Line::from(Span::styled(
                "  No weeks recorded yet",
                theme::dim(),
            )));
        }
        Some(week) => {
            for goal in &week.goals {
                let (mark, style) = if goal.done {
                    ("✓", theme::green())
                } else {
                    ("○", theme::dim())
                };
                lines.push(Line::from(vec![
                    Span::styled(format!("  {} ", mark), style),
                    Span::styled(
                        goal.text.clone(),
                        if goal.done { theme::green() } else { theme::dim() },
                    ),
                ]));
            }
            lines.push(Line::from(""));
            let bar_style = if week.percentage >= 100 {
                theme::green().add_modifier(Modifier::BOLD)
            } else {
                theme::amber()
            };
            lines.push(Line::from(vec![
                Span::styled(
                    format!("  {}", progress_bar(week.completed, week.total, 16)),
                    bar_style,
                ),
                Span::styled(
                    format!("  {}/{} · {}%", week.completed, week.total, week.percentage),
                    theme::dim(),
                ),
            ]));
            if let Some(highlight) = &week.highlight {
                lines.push(Line::from(vec![
                    Span::styled("  ★ ", theme::amber()),
                    Span::styled(highlight.clone(), theme::amber()),
                ]));
            }
        }
    }

    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(
        format!(
            "  All-time {} · {} perfect weeks",
            format_percent(all_time.percentage),
            all_time.perfect_weeks
        ),
        theme::dim(),
    )));

    let paragraph = Paragraph::new(lines).block(block);
    frame.render_widget(paragraph, area);
}
