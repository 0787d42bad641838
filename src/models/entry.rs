use chrono::NaiveDate;
use serde::{Deserialize, Deserializer, Serialize};
use std::collections::BTreeMap;
use std::str::FromStr;

/// Day entries keyed by date, as parsed out of `entries.json`.
pub type EntryStore = BTreeMap<NaiveDate, DayEntry>;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    Leetcode,
    Sql,
    SystemDesign,
    Ml,
    Building,
    Reading,
    Exploring,
}

impl Category {
    pub fn all() -> Vec<Category> {
        vec![
            Category::Leetcode,
            Category::Sql,
            Category::SystemDesign,
            Category::Ml,
            Category::Building,
            Category::Reading,
            Category::Exploring,
        ]
    }

    /// The four structured practice categories (the `practice` block of a day).
    pub fn practice() -> Vec<Category> {
        vec![
            Category::Leetcode,
            Category::Sql,
            Category::SystemDesign,
            Category::Ml,
        ]
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Leetcode => "leetcode",
            Category::Sql => "sql",
            Category::SystemDesign => "system_design",
            Category::Ml => "ml",
            Category::Building => "building",
            Category::Reading => "reading",
            Category::Exploring => "exploring",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            Category::Leetcode => "LeetCode",
            Category::Sql => "SQL",
            Category::SystemDesign => "System Design",
            Category::Ml => "ML",
            Category::Building => "Building",
            Category::Reading => "Reading",
            Category::Exploring => "Exploring",
        }
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

impl FromStr for Category {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "leetcode" | "lc" => Ok(Category::Leetcode),
            "sql" => Ok(Category::Sql),
            "system_design" | "system-design" | "sd" => Ok(Category::SystemDesign),
            "ml" => Ok(Category::Ml),
            "building" => Ok(Category::Building),
            "reading" => Ok(Category::Reading),
            "exploring" => Ok(Category::Exploring),
            _ => Err(anyhow::anyhow!("Unknown category: {}", s)),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
}

impl Difficulty {
    pub fn as_str(&self) -> &'static str {
        match self {
            Difficulty::Easy => "easy",
            Difficulty::Medium => "medium",
            Difficulty::Hard => "hard",
        }
    }
}

impl FromStr for Difficulty {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "easy" => Ok(Difficulty::Easy),
            "medium" | "med" => Ok(Difficulty::Medium),
            "hard" => Ok(Difficulty::Hard),
            _ => Err(anyhow::anyhow!("Unknown difficulty: {}", s)),
        }
    }
}

/// One solved problem / study session inside a day's practice block.
///
/// Entries are hand-written JSON, so every field besides the name is
/// optional and bad values degrade to `None` instead of failing the file.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PracticeItem {
    #[serde(default)]
    pub name: String,
    #[serde(default, deserialize_with = "lenient_difficulty")]
    pub difficulty: Option<Difficulty>,
    /// Free-form tag, e.g. "HLD"/"LLD" on system design sessions.
    #[serde(default, rename = "type")]
    pub kind: Option<String>,
    #[serde(default)]
    pub insight: Option<String>,
    #[serde(default)]
    pub url: Option<String>,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default, deserialize_with = "lenient_date")]
    pub date: Option<NaiveDate>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Practice {
    #[serde(default)]
    pub leetcode: Vec<PracticeItem>,
    #[serde(default)]
    pub sql: Vec<PracticeItem>,
    #[serde(default)]
    pub system_design: Vec<PracticeItem>,
    #[serde(default)]
    pub ml: Vec<PracticeItem>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct BuildingItem {
    #[serde(default)]
    pub project: String,
    #[serde(default)]
    pub work: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ReadingItem {
    #[serde(default)]
    pub book: String,
    #[serde(default)]
    pub chapter: Option<u32>,
    /// Inclusive `[start, end]` page pair. Anything that is not a pair
    /// (or has start > end) simply contributes no pages.
    #[serde(default)]
    pub pages: Vec<u32>,
    #[serde(default)]
    pub insight: Option<String>,
}

impl ReadingItem {
    pub fn page_range(&self) -> Option<(u32, u32)> {
        match self.pages.as_slice() {
            [start, end] if start <= end => Some((*start, *end)),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ExploringItem {
    #[serde(default)]
    pub topic: String,
    #[serde(default)]
    pub content: String,
}

/// Everything logged for a single day.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DayEntry {
    /// Weekday name as written upstream ("Sunday"); display-only.
    #[serde(default)]
    pub day: Option<String>,
    #[serde(default)]
    pub practice: Practice,
    #[serde(default)]
    pub building: Vec<BuildingItem>,
    #[serde(default)]
    pub reading: Vec<ReadingItem>,
    #[serde(default)]
    pub exploring: Vec<ExploringItem>,
    #[serde(default)]
    pub notes: Option<String>,
}

impl DayEntry {
    /// Number of logged items in one category.
    pub fn count(&self, category: Category) -> usize {
        match category {
            Category::Leetcode => self.practice.leetcode.len(),
            Category::Sql => self.practice.sql.len(),
            Category::SystemDesign => self.practice.system_design.len(),
            Category::Ml => self.practice.ml.len(),
            Category::Building => self.building.len(),
            Category::Reading => self.reading.len(),
            Category::Exploring => self.exploring.len(),
        }
    }

    /// The practice items for one of the four practice categories,
    /// `None` for building/reading/exploring.
    pub fn practice_items(&self, category: Category) -> Option<&[PracticeItem]> {
        match category {
            Category::Leetcode => Some(&self.practice.leetcode),
            Category::Sql => Some(&self.practice.sql),
            Category::SystemDesign => Some(&self.practice.system_design),
            Category::Ml => Some(&self.practice.ml),
            _ => None,
        }
    }

    pub fn has_notes(&self) -> bool {
        self.notes.as_deref().is_some_and(|n| !n.trim().is_empty())
    }

    pub fn is_empty(&self) -> bool {
        Category::all().iter().all(|&c| self.count(c) == 0) && !self.has_notes()
    }

    /// Short one-line summary for list views, e.g. "2 leetcode · 1 reading · notes".
    pub fn preview(&self) -> String {
        let mut parts: Vec<String> = Vec::new();
        for category in Category::all() {
            let n = self.count(category);
            if n > 0 {
                parts.push(format!("{} {}", n, category.as_str()));
            }
        }
        if self.has_notes() {
            parts.push("notes".to_string());
        }
        if parts.is_empty() {
            "empty".to_string()
        } else {
            parts.join(" · ")
        }
    }
}

/// Deserialize an optional "YYYY-MM-DD" string, mapping anything
/// unparseable to `None`.
pub(crate) fn lenient_date<'de, D>(deserializer: D) -> Result<Option<NaiveDate>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<String>::deserialize(deserializer)?;
    Ok(raw.and_then(|s| NaiveDate::parse_from_str(s.trim(), "%Y-%m-%d").ok()))
}

/// Deserialize an optional difficulty string, mapping unknown values to `None`.
fn lenient_difficulty<'de, D>(deserializer: D) -> Result<Option<Difficulty>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<String>::deserialize(deserializer)?;
    Ok(raw.and_then(|s| s.parse().ok()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn minimal_entry_fills_defaults() {
        let entry: DayEntry = serde_json::from_str(r#"{"notes": "short day"}"#).unwrap();
        assert!(entry.practice.leetcode.is_empty());
        assert!(entry.building.is_empty());
        assert!(entry.has_notes());
        assert!(!entry.is_empty());
    }

    #[test]
    fn counts_map_to_sections() {
        let entry: DayEntry = serde_json::from_str(
            r#"{
                "practice": {"leetcode": [{"name": "Two Sum"}, {"name": "3Sum"}]},
                "building": [{"project": "riyaz", "work": "heatmap widget"}],
                "reading": [{"book": "ddia", "pages": [12, 30]}]
            }"#,
        )
        .unwrap();
        assert_eq!(entry.count(Category::Leetcode), 2);
        assert_eq!(entry.count(Category::Building), 1);
        assert_eq!(entry.count(Category::Reading), 1);
        assert_eq!(entry.count(Category::Sql), 0);
        assert_eq!(entry.preview(), "2 leetcode · 1 building · 1 reading");
    }

    #[test]
    fn bad_item_date_and_difficulty_degrade_to_none() {
        let item: PracticeItem = serde_json::from_str(
            r#"{"name": "LRU Cache", "difficulty": "tricky", "date": "junk"}"#,
        )
        .unwrap();
        assert_eq!(item.difficulty, None);
        assert_eq!(item.date, None);

        let item: PracticeItem = serde_json::from_str(
            r#"{"name": "LRU Cache", "difficulty": "Medium", "date": "2025-06-15"}"#,
        )
        .unwrap();
        assert_eq!(item.difficulty, Some(Difficulty::Medium));
        assert_eq!(item.date, NaiveDate::from_ymd_opt(2025, 6, 15));
    }

    #[test]
    fn page_range_rejects_non_pairs() {
        let item = ReadingItem {
            pages: vec![72, 89],
            ..Default::default()
        };
        assert_eq!(item.page_range(), Some((72, 89)));

        let inverted = ReadingItem {
            pages: vec![89, 72],
            ..Default::default()
        };
        assert_eq!(inverted.page_range(), None);

        let single = ReadingItem {
            pages: vec![89],
            ..Default::default()
        };
        assert_eq!(single.page_range(), None);
    }

    #[test]
    fn category_roundtrip() {
        for category in Category::all() {
            assert_eq!(
                category.as_str().parse::<Category>().unwrap(),
                category
            );
        }
        assert!("pottery".parse::<Category>().is_err());
    }
}
