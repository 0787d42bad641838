use ratatui::{
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph},
    Frame,
};

use crate::stats::heatmap::HeatmapGrid;
use crate::tui::theme;

const DAY_LABELS: [&str; 7] = ["", "Mon", "", "Wed", "", "Fri", ""];
const GUTTER: usize = 4;

/// One column per week, GitHub-contribution style. When the pane is
/// narrower than the grid, the oldest weeks are dropped rather than
/// wrapped.
pub fn render(frame: &mut Frame, area: Rect, grid: &HeatmapGrid) {
    let block = Block::default()
        .title(Span::styled(" Activity ", theme::accent()))
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(theme::border())
        .style(theme::surface());

    let inner_width = area.width.saturating_sub(2) as usize;
    let max_weeks = inner_width.saturating_sub(GUTTER) / 2;
    let skip = grid.weeks.len().saturating_sub(max_weeks);
    let visible = &grid.weeks[skip..];

    let mut lines = Vec::with_capacity(9);
    lines.push(Line::from(Span::styled(
        format!("{}{}", " ".repeat(GUTTER), month_row(grid, skip, visible.len() * 2)),
        theme::dim(),
    )));

    for day_idx in 0..7 {
        let mut spans = vec![Span::styled(
            format!("{:<width$}", DAY_LABELS[day_idx], width = GUTTER),
            theme::dim(),
        )];
        for week in visible {
            let cell = &week[day_idx];
            spans.push(if cell.future {
                Span::raw("  ")
            } else {
                Span::styled("██", theme::heat(cell.intensity))
            });
        }
        lines.push(Line::from(spans));
    }

    let mut legend = vec![
        Span::styled(
            format!("{}{} active days", " ".repeat(GUTTER), grid.active_days()),
            theme::dim(),
        ),
        Span::styled("   less ", theme::dim()),
    ];
    for level in 0..theme::HEAT.len() as u8 {
        legend.push(Span::styled("██", theme::heat(level)));
    }
    legend.push(Span::styled(" more", theme::dim()));
    lines.push(Line::from(legend));

    let paragraph = Paragraph::new(lines).block(block);
    frame.render_widget(paragraph, area);
}

/// Month names positioned over the week where the month changes,
/// skipping labels that would collide with the previous one.
fn month_row(grid: &HeatmapGrid, skip: usize, width: usize) -> String {
    let mut row = " ".repeat(width);
    let mut cursor = 0;
    for month in &grid.months {
        if month.week < skip {
            continue;
        }
        let pos = (month.week - skip) * 2;
        if pos < cursor || pos + month.label.len() > width {
            continue;
        }
        row.replace_range(pos..pos + month.label.len(), &month.label);
        cursor = pos + month.label.len() + 1;
    }
    row
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::EntryStore;
    use crate::stats::heatmap::build_grid;
    use crate::stats::ScoreScheme;
    use chrono::NaiveDate;

    #[test]
    fn month_row_places_labels_under_their_weeks() {
        let end = NaiveDate::from_ymd_opt(2025, 6, 15).unwrap();
        let grid = build_grid(&EntryStore::new(), end, 6, ScoreScheme::Balanced);
        // Labels at weeks 0 (May) and 3 (Jun).
        let row = month_row(&grid, 0, 12);
        assert_eq!(row, "May   Jun   ");
    }

    #[test]
    fn month_row_drops_labels_scrolled_out() {
        let end = NaiveDate::from_ymd_opt(2025, 6, 15).unwrap();
        let grid = build_grid(&EntryStore::new(), end, 6, ScoreScheme::Balanced);
        let row = month_row(&grid, 4, 4);
        assert_eq!(row, "    ");
    }
}
