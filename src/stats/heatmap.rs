use chrono::{Datelike, Duration, NaiveDate};

use crate::models::EntryStore;
use crate::stats::score::ScoreScheme;

/// One cell of the activity grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DayCell {
    pub date: NaiveDate,
    pub score: u32,
    /// 0..=4 ramp level.
    pub intensity: u8,
    /// Days after `end` that pad out the final week.
    pub future: bool,
}

/// Month label attached to the week (column) where the month changes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MonthLabel {
    pub label: String,
    pub week: usize,
}

/// A Sunday-aligned weeks × 7 grid, oldest week first.
#[derive(Debug, Clone, Default)]
pub struct HeatmapGrid {
    pub weeks: Vec<[DayCell; 7]>,
    pub months: Vec<MonthLabel>,
}

impl HeatmapGrid {
    pub fn cells(&self) -> impl Iterator<Item = &DayCell> {
        self.weeks.iter().flatten()
    }

    /// Cells on or before the grid's end date with any activity.
    pub fn active_days(&self) -> usize {
        self.cells().filter(|c| !c.future && c.score > 0).count()
    }
}

/// Build the activity grid for the `weeks` weeks ending in the week that
/// contains `end`. Rows start on Sunday; the final week keeps its
/// trailing days (flagged `future`) so the grid is always a full
/// weeks × 7 rectangle.
pub fn build_grid(
    entries: &EntryStore,
    end: NaiveDate,
    weeks: usize,
    scheme: ScoreScheme,
) -> HeatmapGrid {
    if weeks == 0 {
        return HeatmapGrid::default();
    }

    let end_sunday = end - Duration::days(end.weekday().num_days_from_sunday() as i64);
    let start = end_sunday - Duration::days((weeks as i64 - 1) * 7);

    let mut grid = HeatmapGrid {
        weeks: Vec::with_capacity(weeks),
        months: Vec::new(),
    };

    let mut current_month = None;
    for week_idx in 0..weeks {
        let sunday = start + Duration::days(week_idx as i64 * 7);
        if current_month != Some(sunday.month()) {
            current_month = Some(sunday.month());
            grid.months.push(MonthLabel {
                label: sunday.format("%b").to_string(),
                week: week_idx,
            });
        }
        let row = std::array::from_fn(|day_idx| {
            let date = sunday + Duration::days(day_idx as i64);
            let score = entries.get(&date).map(|e| scheme.score(e)).unwrap_or(0);
            DayCell {
                date,
                score,
                intensity: scheme.intensity(score),
                future: date > end,
            }
        });
        grid.weeks.push(row);
    }

    grid
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{DayEntry, ExploringItem};

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn store_with(dates: &[NaiveDate]) -> EntryStore {
        let mut entries = EntryStore::new();
        for &d in dates {
            entries.insert(
                d,
                DayEntry {
                    exploring: vec![ExploringItem::default()],
                    ..Default::default()
                },
            );
        }
        entries
    }

    #[test]
    fn grid_is_always_a_full_rectangle() {
        let grid = build_grid(&EntryStore::new(), date(2025, 6, 15), 52, ScoreScheme::Balanced);
        assert_eq!(grid.weeks.len(), 52);
        assert_eq!(grid.cells().count(), 364);
        for week in &grid.weeks {
            assert_eq!(week[0].date.weekday().num_days_from_sunday(), 0);
        }
    }

    #[test]
    fn days_after_end_are_flagged_future() {
        // 2025-06-15 is a Sunday, so its week runs through Saturday the 21st.
        let grid = build_grid(&EntryStore::new(), date(2025, 6, 15), 52, ScoreScheme::Balanced);
        let cell = |d: NaiveDate| grid.cells().find(|c| c.date == d).copied().unwrap();
        assert!(!cell(date(2025, 6, 15)).future);
        assert!(cell(date(2025, 6, 16)).future);
        assert!(cell(date(2025, 6, 21)).future);
        assert_eq!(grid.cells().filter(|c| c.future).count(), 6);
    }

    #[test]
    fn saturday_end_has_no_future_cells() {
        let grid = build_grid(&EntryStore::new(), date(2025, 6, 21), 8, ScoreScheme::Balanced);
        assert_eq!(grid.cells().filter(|c| c.future).count(), 0);
        assert_eq!(grid.weeks.last().unwrap()[6].date, date(2025, 6, 21));
    }

    #[test]
    fn scores_land_on_their_dates() {
        let active = date(2025, 6, 10);
        let entries = store_with(&[active]);
        let grid = build_grid(&entries, date(2025, 6, 15), 4, ScoreScheme::Balanced);
        let cell = grid.cells().find(|c| c.date == active).unwrap();
        assert_eq!(cell.score, 1);
        assert_eq!(cell.intensity, 1);
        assert_eq!(grid.active_days(), 1);
        // Every other cell is empty.
        assert!(grid.cells().filter(|c| c.date != active).all(|c| c.score == 0));
    }

    #[test]
    fn month_labels_mark_transitions() {
        // 6 weeks ending Jun 15: Sundays May 11..Jun 15.
        let grid = build_grid(&EntryStore::new(), date(2025, 6, 15), 6, ScoreScheme::Balanced);
        let labels: Vec<(&str, usize)> = grid
            .months
            .iter()
            .map(|m| (m.label.as_str(), m.week))
            .collect();
        assert_eq!(labels, vec![("May", 0), ("Jun", 3)]);
    }

    #[test]
    fn zero_weeks_yields_empty_grid() {
        let grid = build_grid(&EntryStore::new(), date(2025, 6, 15), 0, ScoreScheme::Balanced);
        assert!(grid.weeks.is_empty());
        assert!(grid.months.is_empty());
    }
}
