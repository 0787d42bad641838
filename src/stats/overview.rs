use std::collections::{BTreeMap, BTreeSet};

use chrono::NaiveDate;
use log::warn;

use crate::data::JournalData;
use crate::models::{Category, EntryStore};
use crate::stats::goals::{self, AllTimeGoals, WeekGoals};
use crate::stats::reading::{self, BookOverview};
use crate::stats::streaks::{self, CategoryStats, StreakSource};
use crate::stats::topics::{self, TopicWeight};

/// One building project's derived activity.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectActivity {
    pub name: String,
    /// Distinct days with at least one logged work item.
    pub days: u32,
    pub last_active: Option<NaiveDate>,
}

/// Everything the dashboard and `riyaz stats` show, assembled once.
#[derive(Debug, Clone)]
pub struct Overview {
    pub practice: Vec<(Category, CategoryStats)>,
    pub total_problems: u32,
    pub best_streak: u32,
    pub week: Option<WeekGoals>,
    pub all_time: AllTimeGoals,
    pub reading: Vec<BookOverview>,
    pub topics: Vec<TopicWeight>,
    pub projects: Vec<ProjectActivity>,
}

/// Distinct-day activity per project, most recently active first.
pub fn project_activity(entries: &EntryStore) -> Vec<ProjectActivity> {
    let mut days: BTreeMap<String, BTreeSet<NaiveDate>> = BTreeMap::new();
    for (date, entry) in entries {
        for item in &entry.building {
            if item.project.is_empty() {
                continue;
            }
            days.entry(item.project.clone()).or_default().insert(*date);
        }
    }
    let mut projects: Vec<ProjectActivity> = days
        .into_iter()
        .map(|(name, dates)| ProjectActivity {
            name,
            days: dates.len() as u32,
            last_active: dates.last().copied(),
        })
        .collect();
    projects.sort_by(|a, b| {
        b.last_active
            .cmp(&a.last_active)
            .then_with(|| a.name.cmp(&b.name))
    });
    projects
}

pub fn build(data: &JournalData, source: StreakSource, today: NaiveDate) -> Overview {
    let practice = match (source, data.snapshot.as_ref()) {
        (StreakSource::Snapshot, Some(snapshot)) => {
            streaks::practice_stats_from_snapshot(snapshot)
        }
        (StreakSource::Snapshot, None) => {
            warn!("streaks = \"snapshot\" but stats.json is missing; recomputing from entries");
            streaks::practice_stats(&data.entries, today)
        }
        (StreakSource::Recompute, _) => streaks::practice_stats(&data.entries, today),
    };

    let total_problems = practice.iter().map(|(_, s)| s.items).sum();
    let best_streak = practice
        .iter()
        .map(|(_, s)| s.streak.longest)
        .max()
        .unwrap_or(0);

    let mut cloud = topics::weighted(&topics::topic_counts(&data.entries));
    if cloud.is_empty() {
        if let Some(snapshot) = &data.snapshot {
            cloud = topics::weighted(&snapshot.exploring.topics);
        }
    }

    Overview {
        practice,
        total_problems,
        best_streak,
        week: goals::current_week(&data.weeks),
        all_time: goals::all_time(&data.weeks),
        reading: reading::book_overviews(data),
        topics: cloud,
        projects: project_activity(&data.entries),
    }
}
