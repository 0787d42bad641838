use std::str::FromStr;

use crate::models::{Category, DayEntry};

/// Weighted activity scoring for the heatmap.
///
/// Two weight tables shipped in different generations of the journal's
/// web dashboard; both are kept selectable. `balanced` is the newer one
/// (system design weighted up, notes ignored), `classic` the older
/// (building weighted up, a notes bonus, wider intensity tiers).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ScoreScheme {
    #[default]
    Balanced,
    Classic,
}

impl ScoreScheme {
    pub fn as_str(&self) -> &'static str {
        match self {
            ScoreScheme::Balanced => "balanced",
            ScoreScheme::Classic => "classic",
        }
    }

    fn weight(&self, category: Category) -> u32 {
        match self {
            ScoreScheme::Balanced => match category {
                Category::Leetcode => 2,
                Category::Sql => 2,
                Category::SystemDesign => 3,
                Category::Ml => 2,
                Category::Building => 2,
                Category::Reading => 2,
                Category::Exploring => 1,
            },
            ScoreScheme::Classic => match category {
                Category::Leetcode => 2,
                Category::Sql => 2,
                Category::SystemDesign => 2,
                Category::Ml => 2,
                Category::Building => 3,
                Category::Reading => 2,
                Category::Exploring => 1,
            },
        }
    }

    /// Raw activity score for a day: item counts times category weights,
    /// plus a +1 notes bonus under `classic`.
    pub fn score(&self, entry: &DayEntry) -> u32 {
        let mut score = 0;
        for category in Category::all() {
            score += entry.count(category) as u32 * self.weight(category);
        }
        if *self == ScoreScheme::Classic && entry.has_notes() {
            score += 1;
        }
        score
    }

    /// Clamp a raw score into the 0..=4 intensity ramp used by the
    /// heatmap. 0 only for score 0; everything past the top tier is 4.
    pub fn intensity(&self, score: u32) -> u8 {
        if score == 0 {
            return 0;
        }
        let tiers: [u32; 3] = match self {
            ScoreScheme::Balanced => [2, 4, 6],
            ScoreScheme::Classic => [3, 6, 10],
        };
        if score <= tiers[0] {
            1
        } else if score <= tiers[1] {
            2
        } else if score <= tiers[2] {
            3
        } else {
            4
        }
    }
}

impl std::fmt::Display for ScoreScheme {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for ScoreScheme {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "balanced" => Ok(ScoreScheme::Balanced),
            "classic" => Ok(ScoreScheme::Classic),
            _ => Err(anyhow::anyhow!("Unknown scoring scheme: {}", s)),
        }
    }
}
