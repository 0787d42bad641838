use std::str::FromStr;

use chrono::{Duration, NaiveDate};

use crate::models::{Category, Difficulty, EntryStore, StatsSnapshot};

/// Streak numbers for one category.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StreakSummary {
    /// Run ending today or yesterday; 0 once a full day has been skipped.
    pub current: u32,
    pub longest: u32,
    /// Distinct days with activity.
    pub total: u32,
}

/// Where practice streaks come from: derived from raw entries, or
/// trusted from the pipeline's `stats.json`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum StreakSource {
    #[default]
    Recompute,
    Snapshot,
}

impl StreakSource {
    pub fn as_str(&self) -> &'static str {
        match self {
            StreakSource::Recompute => "recompute",
            StreakSource::Snapshot => "snapshot",
        }
    }
}

impl FromStr for StreakSource {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "recompute" => Ok(StreakSource::Recompute),
            "snapshot" => Ok(StreakSource::Snapshot),
            _ => Err(anyhow::anyhow!("Unknown streak source: {}", s)),
        }
    }
}

/// Streaks plus item tallies for one category's stat card.
#[derive(Debug, Clone, Copy, Default)]
pub struct CategoryStats {
    pub streak: StreakSummary,
    /// Raw item count across all days (problems solved, sessions, ...).
    pub items: u32,
    pub easy: u32,
    pub medium: u32,
    pub hard: u32,
    pub hld: u32,
    pub lld: u32,
}

/// Dates with at least one item in `category`, ascending. Entry-store
/// iteration already yields sorted distinct dates.
pub fn active_dates(entries: &EntryStore, category: Category) -> Vec<NaiveDate> {
    entries
        .iter()
        .filter(|(_, entry)| entry.count(category) > 0)
        .map(|(date, _)| *date)
        .collect()
}

/// Walk a sorted, distinct date list into a streak summary.
///
/// The current streak is the run ending at the most recent active date,
/// but only while that date is `today` or yesterday; a full missed day
/// resets it to 0 without touching `longest`.
pub fn streak_from_dates(dates: &[NaiveDate], today: NaiveDate) -> StreakSummary {
    let Some(&last) = dates.last() else {
        return StreakSummary::default();
    };

    let mut longest = 1u32;
    let mut run = 1u32;
    for pair in dates.windows(2) {
        if pair[1] == pair[0] + Duration::days(1) {
            run += 1;
            longest = longest.max(run);
        } else {
            run = 1;
        }
    }

    let current = if last == today || last + Duration::days(1) == today {
        let mut current = 1u32;
        for pair in dates.windows(2).rev() {
            if pair[1] == pair[0] + Duration::days(1) {
                current += 1;
            } else {
                break;
            }
        }
        current
    } else {
        0
    };

    StreakSummary {
        current,
        longest,
        total: dates.len() as u32,
    }
}

pub fn streaks(entries: &EntryStore, category: Category, today: NaiveDate) -> StreakSummary {
    streak_from_dates(&active_dates(entries, category), today)
}

/// Full stat card for one category: streaks, item count, and the
/// difficulty / HLD-LLD tallies that only apply to practice items.
pub fn category_stats(
    entries: &EntryStore,
    category: Category,
    today: NaiveDate,
) -> CategoryStats {
    let mut stats = CategoryStats::default();
    let mut dates = Vec::new();

    for (date, entry) in entries {
        let count = entry.count(category);
        if count == 0 {
            continue;
        }
        dates.push(*date);
        stats.items += count as u32;

        if let Some(items) = entry.practice_items(category) {
            for item in items {
                match item.difficulty {
                    Some(Difficulty::Easy) => stats.easy += 1,
                    Some(Difficulty::Medium) => stats.medium += 1,
                    Some(Difficulty::Hard) => stats.hard += 1,
                    None => {}
                }
                if let Some(kind) = item.kind.as_deref() {
                    if kind.eq_ignore_ascii_case("hld") {
                        stats.hld += 1;
                    } else if kind.eq_ignore_ascii_case("lld") {
                        stats.lld += 1;
                    }
                }
            }
        }
    }

    stats.streak = streak_from_dates(&dates, today);
    stats
}

/// Stat cards for the four practice categories, in display order.
pub fn practice_stats(entries: &EntryStore, today: NaiveDate) -> Vec<(Category, CategoryStats)> {
    Category::practice()
        .into_iter()
        .map(|category| (category, category_stats(entries, category, today)))
        .collect()
}

/// Same cards read off the pipeline snapshot instead of recomputed.
/// The snapshot stores a single `total`, so it fills both `items` and
/// the streak's day count.
pub fn practice_stats_from_snapshot(snapshot: &StatsSnapshot) -> Vec<(Category, CategoryStats)> {
    Category::practice()
        .into_iter()
        .map(|category| {
            let stats = snapshot
                .practice
                .get(category.as_str())
                .map(|s| CategoryStats {
                    streak: StreakSummary {
                        current: s.current_streak,
                        longest: s.longest_streak,
                        total: s.total,
                    },
                    items: s.total,
                    easy: s.easy,
                    medium: s.medium,
                    hard: s.hard,
                    hld: s.hld,
                    lld: s.lld,
                })
                .unwrap_or_default();
            (category, stats)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::DayEntry;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn unbroken_run_counts_current_and_longest() {
        let dates = [date(2025, 6, 10), date(2025, 6, 11), date(2025, 6, 12)];
        let summary = streak_from_dates(&dates, date(2025, 6, 12));
        assert_eq!(
            summary,
            StreakSummary {
                current: 3,
                longest: 3,
                total: 3
            }
        );
    }

    #[test]
    fn yesterday_still_counts_as_alive() {
        let dates = [date(2025, 6, 10), date(2025, 6, 11), date(2025, 6, 12)];
        let summary = streak_from_dates(&dates, date(2025, 6, 13));
        assert_eq!(summary.current, 3);
    }

    #[test]
    fn stale_run_resets_current_but_keeps_longest() {
        let dates = [date(2025, 6, 10), date(2025, 6, 11), date(2025, 6, 12)];
        let summary = streak_from_dates(&dates, date(2025, 6, 20));
        assert_eq!(summary.current, 0);
        assert_eq!(summary.longest, 3);
        assert_eq!(summary.total, 3);
    }

    #[test]
    fn gaps_split_runs() {
        let dates = [date(2025, 6, 1), date(2025, 6, 2), date(2025, 6, 10)];
        let summary = streak_from_dates(&dates, date(2025, 6, 10));
        assert_eq!(summary.longest, 2);
        assert_eq!(summary.current, 1);
        assert_eq!(summary.total, 3);
    }

    #[test]
    fn empty_dates_are_all_zero() {
        assert_eq!(
            streak_from_dates(&[], date(2025, 6, 10)),
            StreakSummary::default()
        );
    }

    #[test]
    fn category_stats_tally_difficulties() {
        let mut entries = EntryStore::new();
        let entry: DayEntry = serde_json::from_str(
            r#"{"practice": {"leetcode": [
                {"name": "Two Sum", "difficulty": "easy"},
                {"name": "LRU Cache", "difficulty": "medium"},
                {"name": "Median of Streams", "difficulty": "hard"}
            ]}}"#,
        )
        .unwrap();
        entries.insert(date(2025, 6, 11), entry);
        let entry: DayEntry = serde_json::from_str(
            r#"{"practice": {"leetcode": [{"name": "3Sum", "difficulty": "medium"}]}}"#,
        )
        .unwrap();
        entries.insert(date(2025, 6, 12), entry);

        let stats = category_stats(&entries, Category::Leetcode, date(2025, 6, 12));
        assert_eq!(stats.items, 4);
        assert_eq!((stats.easy, stats.medium, stats.hard), (1, 2, 1));
        assert_eq!(stats.streak.current, 2);
        assert_eq!(stats.streak.total, 2);
    }

    #[test]
    fn hld_lld_tags_are_case_insensitive() {
        let mut entries = EntryStore::new();
        let entry: DayEntry = serde_json::from_str(
            r#"{"practice": {"system_design": [
                {"name": "Rate limiter", "type": "HLD"},
                {"name": "Parking lot", "type": "lld"}
            ]}}"#,
        )
        .unwrap();
        entries.insert(date(2025, 6, 12), entry);

        let stats = category_stats(&entries, Category::SystemDesign, date(2025, 6, 12));
        assert_eq!((stats.hld, stats.lld), (1, 1));
    }

    #[test]
    fn snapshot_cards_keep_display_order() {
        let snapshot: StatsSnapshot = serde_json::from_str(
            r#"{"practice": {
                "ml": {"total": 9, "current_streak": 1, "longest_streak": 2},
                "leetcode": {"total": 42, "current_streak": 3, "longest_streak": 9}
            }}"#,
        )
        .unwrap();
        let cards = practice_stats_from_snapshot(&snapshot);
        assert_eq!(cards.len(), 4);
        assert_eq!(cards[0].0, Category::Leetcode);
        assert_eq!(cards[0].1.items, 42);
        assert_eq!(cards[0].1.streak.longest, 9);
        // sql has no snapshot entry and comes back zeroed
        assert_eq!(cards[1].1.items, 0);
        assert_eq!(cards[3].1.items, 9);
    }
}
