use ratatui::{
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph},
    Frame,
};

use crate::models::Category;
use crate::stats::streaks::CategoryStats;
use crate::tui::theme;
use crate::utils::format::progress_bar;

pub fn render(frame: &mut Frame, area: Rect, practice: &[(Category, CategoryStats)]) {
    let block = Block::default()
        .title(Span::styled(" Streaks ", theme::accent()))
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(theme::border())
        .style(theme::surface());

    let mut lines = vec![Line::from("")];
    for (category, stats) in practice {
        // Full bar = back at the personal best.
        let bar = progress_bar(stats.streak.current, stats.streak.longest.max(1), 10);
        let bar_style = if stats.streak.current > 0 {
            theme::green()
        } else {
            theme::dim()
        };

        lines.push(Line::from(vec![
            Span::styled(format!("  {:<14}", category.display_name()), theme::bold()),
            Span::styled(bar, bar_style),
            Span::styled(
                format!("  {:>3}d", stats.streak.current),
                if stats.streak.current > 0 {
                    theme::green()
                } else {
                    theme::dim()
                },
            ),
            Span::styled(format!("   best {}", stats.streak.longest), theme::dim()),
        ]));
        lines.push(Line::from(Span::styled(
            format!("    {}", tally(*category, stats)),
            theme::dim(),
        )));
    }

    let paragraph = Paragraph::new(lines).block(block);
    frame.render_widget(paragraph, area);
}

fn tally(category: Category, stats: &CategoryStats) -> String {
    if stats.hld + stats.lld > 0 {
        return format!("{} sessions · {} HLD · {} LLD", stats.items, stats.hld, stats.lld);
    }
    if stats.easy + stats.medium + stats.hard > 0 {
        return format!(
            "{} solved · {}E {}M {}H",
            stats.items, stats.easy, stats.medium, stats.hard
        );
    }
    match category {
        Category::Leetcode | Category::Sql => format!("{} solved", stats.items),
        _ => format!("{} sessions", stats.items),
    }
}
