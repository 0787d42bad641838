use crate::models::{WeekRecord, WeekStore};
use crate::utils::format::round1;

/// One goal line with its matched-completion flag.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GoalLine {
    pub text: String,
    pub done: bool,
}

/// A resolved week: checklist, counts and integer percentage.
#[derive(Debug, Clone, Default)]
pub struct WeekGoals {
    pub id: String,
    pub goals: Vec<GoalLine>,
    pub completed: u32,
    pub total: u32,
    pub percentage: u32,
    pub highlight: Option<String>,
    pub review: Option<String>,
}

/// All-time goal totals across every recorded week.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct AllTimeGoals {
    pub total: u32,
    pub completed: u32,
    /// One-decimal percentage, 0 when no goals were ever set.
    pub percentage: f64,
    /// Weeks where every listed goal was completed (empty weeks don't count).
    pub perfect_weeks: u32,
}

/// Resolve a single week record against its completions. Each goal
/// counts at most once; completions that match no goal are ignored.
pub fn week_goals(id: &str, record: &WeekRecord) -> WeekGoals {
    let goals: Vec<GoalLine> = record
        .goals
        .iter()
        .map(|goal| GoalLine {
            text: goal.clone(),
            done: record.is_goal_done(goal),
        })
        .collect();
    let total = goals.len() as u32;
    let completed = goals.iter().filter(|g| g.done).count() as u32;
    let percentage = if total == 0 {
        0
    } else {
        (completed as f64 / total as f64 * 100.0).round() as u32
    };
    WeekGoals {
        id: id.to_string(),
        goals,
        completed,
        total,
        percentage,
        highlight: record.highlight.clone(),
        review: record.review.clone(),
    }
}

/// The current week is the lexicographically last key. Week ids are
/// zero-padded, so string order is chronological order.
pub fn current_week(weeks: &WeekStore) -> Option<WeekGoals> {
    weeks
        .iter()
        .next_back()
        .map(|(id, record)| week_goals(id, record))
}

pub fn all_time(weeks: &WeekStore) -> AllTimeGoals {
    let mut totals = AllTimeGoals::default();
    for record in weeks.values() {
        let week = week_goals("", record);
        totals.total += week.total;
        totals.completed += week.completed;
        if week.total > 0 && week.completed == week.total {
            totals.perfect_weeks += 1;
        }
    }
    if totals.total > 0 {
        totals.percentage = round1(totals.completed as f64 / totals.total as f64 * 100.0);
    }
    totals
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(goals: &[&str], completed: &[&str]) -> WeekRecord {
        WeekRecord {
            goals: goals.iter().map(|s| s.to_string()).collect(),
            goals_completed: completed.iter().map(|s| s.to_string()).collect(),
            ..Default::default()
        }
    }

    #[test]
    fn one_of_three_rounds_to_33() {
        let week = week_goals("2025-W24", &record(&["a", "b", "c"], &["A"]));
        assert_eq!(week.completed, 1);
        assert_eq!(week.percentage, 33);
        assert!(week.goals[0].done);
        assert!(!week.goals[1].done);
    }

    #[test]
    fn unmatched_completions_are_ignored() {
        let week = week_goals(
            "2025-W24",
            &record(&["ship parser"], &["something else entirely"]),
        );
        assert_eq!(week.completed, 0);
        assert_eq!(week.percentage, 0);
    }

    #[test]
    fn empty_goal_list_is_zero_percent() {
        let week = week_goals("2025-W24", &record(&[], &["stray completion"]));
        assert_eq!(week.total, 0);
        assert_eq!(week.percentage, 0);
    }

    #[test]
    fn current_week_is_last_key() {
        let mut weeks = WeekStore::new();
        weeks.insert("2025-W09".to_string(), record(&["a"], &["a"]));
        weeks.insert("2025-W24".to_string(), record(&["b"], &[]));
        weeks.insert("2025-W10".to_string(), record(&["c"], &[]));
        let current = current_week(&weeks).unwrap();
        assert_eq!(current.id, "2025-W24");
    }

    #[test]
    fn all_time_counts_matched_and_perfect_weeks() {
        let mut weeks = WeekStore::new();
        weeks.insert("2025-W01".to_string(), record(&["a", "b"], &["a", "b"]));
        weeks.insert("2025-W02".to_string(), record(&["c", "d"], &["c", "junk"]));
        weeks.insert("2025-W03".to_string(), record(&[], &[]));
        let totals = all_time(&weeks);
        assert_eq!(totals.total, 4);
        assert_eq!(totals.completed, 3);
        assert_eq!(totals.percentage, 75.0);
        assert_eq!(totals.perfect_weeks, 1);
    }

    #[test]
    fn no_weeks_at_all() {
        let totals = all_time(&WeekStore::new());
        assert_eq!(totals, AllTimeGoals::default());
        assert!(current_week(&WeekStore::new()).is_none());
    }
}
