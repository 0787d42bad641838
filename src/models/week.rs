use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Week records keyed by week id ("2025-W24"), as parsed out of
/// `weeks.json`. BTreeMap ordering makes the lexicographically last
/// key the current week.
pub type WeekStore = BTreeMap<String, WeekRecord>;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct WeekRecord {
    #[serde(default)]
    pub goals: Vec<String>,
    /// Free-text completions; they only count when one matches a listed
    /// goal (case-insensitively).
    #[serde(default)]
    pub goals_completed: Vec<String>,
    #[serde(default)]
    pub highlight: Option<String>,
    #[serde(default)]
    pub review: Option<String>,
}

impl WeekRecord {
    pub fn is_goal_done(&self, goal: &str) -> bool {
        let goal = goal.to_lowercase();
        self.goals_completed
            .iter()
            .any(|done| done.to_lowercase() == goal)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn goal_matching_ignores_case() {
        let week = WeekRecord {
            goals: vec!["Finish DDIA ch 4".to_string()],
            goals_completed: vec!["finish ddia CH 4".to_string()],
            ..Default::default()
        };
        assert!(week.is_goal_done("Finish DDIA ch 4"));
        assert!(!week.is_goal_done("Ship the parser"));
    }
}
