use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Book metadata keyed by short book id, as parsed out of
/// `config/books.json`.
pub type BookStore = BTreeMap<String, Book>;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Book {
    #[serde(default)]
    pub full_title: String,
    #[serde(default)]
    pub author: String,
    #[serde(default)]
    pub total_pages: u32,
    /// Alternate names the book may be logged under in day entries.
    #[serde(default)]
    pub aliases: Vec<String>,
    /// Chapter table keyed by chapter number; serde_json parses the
    /// JSON string keys into integers, so iteration is numeric order.
    #[serde(default)]
    pub chapters: BTreeMap<u32, Chapter>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Chapter {
    #[serde(default)]
    pub title: String,
    /// Inclusive `[start, end]` page pair.
    #[serde(default)]
    pub pages: Vec<u32>,
    #[serde(default)]
    pub themes: Vec<String>,
}

impl Chapter {
    pub fn page_range(&self) -> Option<(u32, u32)> {
        match self.pages.as_slice() {
            [start, end] if start <= end => Some((*start, *end)),
            _ => None,
        }
    }
}

/// Progress through one book, either read from `stats.json` or derived
/// from day entries.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct BookProgress {
    #[serde(default)]
    pub pages_read: u32,
    #[serde(default)]
    pub total_pages: u32,
    /// Stored percentage if the snapshot carries one; otherwise derived
    /// via `percent()`.
    #[serde(default)]
    pub percentage: Option<f64>,
    #[serde(default)]
    pub chapters_completed: Vec<u32>,
    #[serde(default)]
    pub themes_covered: Vec<String>,
}

impl BookProgress {
    /// Completion percentage: the stored field when present, else
    /// pages_read / total_pages, else 0 for books with unknown length.
    pub fn percent(&self) -> f64 {
        if let Some(pct) = self.percentage {
            return pct;
        }
        if self.total_pages == 0 {
            return 0.0;
        }
        self.pages_read as f64 / self.total_pages as f64 * 100.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn chapter_keys_parse_from_json_strings() {
        let book: Book = serde_json::from_str(
            r#"{
                "full_title": "Designing Data-Intensive Applications",
                "author": "Martin Kleppmann",
                "total_pages": 590,
                "chapters": {
                    "2": {"title": "Data Models", "pages": [27, 64]},
                    "1": {"title": "Reliable, Scalable, Maintainable", "pages": [1, 26]},
                    "10": {"title": "Batch Processing", "pages": [389, 442]}
                }
            }"#,
        )
        .unwrap();
        let keys: Vec<u32> = book.chapters.keys().copied().collect();
        assert_eq!(keys, vec![1, 2, 10]);
    }

    #[test]
    fn percent_prefers_stored_value() {
        let stored = BookProgress {
            pages_read: 100,
            total_pages: 400,
            percentage: Some(26.1),
            ..Default::default()
        };
        assert_eq!(stored.percent(), 26.1);

        let derived = BookProgress {
            pages_read: 100,
            total_pages: 400,
            percentage: None,
            ..Default::default()
        };
        assert_eq!(derived.percent(), 25.0);

        let unknown = BookProgress::default();
        assert_eq!(unknown.percent(), 0.0);
    }
}
