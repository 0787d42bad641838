use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::models::book::BookProgress;
use crate::models::entry::lenient_date;

/// The precomputed `stats.json` artifact written by the upstream journal
/// pipeline. Everything here can also be recomputed from raw entries;
/// the snapshot exists so the dashboard can be trusted as-published.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct StatsSnapshot {
    #[serde(default)]
    pub practice: BTreeMap<String, PracticeSnapshot>,
    #[serde(default)]
    pub reading: BTreeMap<String, BookProgress>,
    #[serde(default)]
    pub building: BuildingSnapshot,
    #[serde(default)]
    pub exploring: ExploringSnapshot,
    #[serde(default)]
    pub goals: GoalsSnapshot,
}

/// Per-category practice totals. `total` is the raw item count; the
/// pipeline does not store a distinct active-day count.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct PracticeSnapshot {
    #[serde(default)]
    pub total: u32,
    #[serde(default)]
    pub current_streak: u32,
    #[serde(default)]
    pub longest_streak: u32,
    #[serde(default)]
    pub easy: u32,
    #[serde(default)]
    pub medium: u32,
    #[serde(default)]
    pub hard: u32,
    #[serde(default)]
    pub hld: u32,
    #[serde(default)]
    pub lld: u32,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct BuildingSnapshot {
    #[serde(default)]
    pub projects: BTreeMap<String, ProjectSnapshot>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ProjectSnapshot {
    #[serde(default)]
    pub days_worked: u32,
    #[serde(default, deserialize_with = "lenient_date")]
    pub last_active: Option<NaiveDate>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ExploringSnapshot {
    #[serde(default)]
    pub topics: BTreeMap<String, u32>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GoalsSnapshot {
    #[serde(default)]
    pub current_week: GoalWindow,
    #[serde(default)]
    pub all_time: GoalWindow,
    /// Consecutive perfect weeks, per the pipeline.
    #[serde(default)]
    pub streak: u32,
}

#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct GoalWindow {
    #[serde(default)]
    pub total: u32,
    #[serde(default)]
    pub completed: u32,
    #[serde(default)]
    pub percentage: f64,
}

/// One generated week summary out of `summaries.json`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct WeekSummary {
    #[serde(default)]
    pub narrative: String,
    #[serde(default)]
    pub topics: Vec<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn snapshot_parses_with_partial_sections() {
        let snapshot: StatsSnapshot = serde_json::from_str(
            r#"{
                "practice": {
                    "leetcode": {"total": 42, "current_streak": 3, "longest_streak": 9,
                                 "easy": 12, "medium": 20, "hard": 10}
                },
                "goals": {"current_week": {"total": 4, "completed": 2, "percentage": 50.0}}
            }"#,
        )
        .unwrap();
        let lc = snapshot.practice.get("leetcode").unwrap();
        assert_eq!(lc.total, 42);
        assert_eq!(lc.longest_streak, 9);
        assert!(snapshot.reading.is_empty());
        assert_eq!(snapshot.goals.current_week.completed, 2);
        assert_eq!(snapshot.goals.streak, 0);
    }

    #[test]
    fn null_last_active_is_tolerated() {
        let project: ProjectSnapshot =
            serde_json::from_str(r#"{"days_worked": 5, "last_active": null}"#).unwrap();
        assert_eq!(project.last_active, None);
    }
}
