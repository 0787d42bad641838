use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

use chrono::NaiveDate;
use log::{debug, warn};
use serde::de::DeserializeOwned;
use thiserror::Error;

use crate::models::{BookStore, DayEntry, EntryStore, StatsSnapshot, WeekStore, WeekSummary};

#[derive(Debug, Error)]
pub enum DataError {
    #[error(
        "{file} not found in {dir:?} — run `riyaz init` to scaffold a journal, or point --data-dir at yours"
    )]
    Missing { file: &'static str, dir: PathBuf },
    #[error("failed to read {path:?}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse {path:?}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

/// Every snapshot file the journal pipeline publishes, loaded once at
/// startup. `entries.json` and `weeks.json` are the journal itself and
/// must exist; the derived artifacts are optional and degrade to
/// defaults when missing or unreadable.
#[derive(Debug, Clone)]
pub struct JournalData {
    pub dir: PathBuf,
    pub entries: EntryStore,
    pub weeks: WeekStore,
    pub books: BookStore,
    pub snapshot: Option<StatsSnapshot>,
    pub summaries: BTreeMap<String, WeekSummary>,
}

impl JournalData {
    pub fn load(dir: &Path) -> Result<Self, DataError> {
        let raw: BTreeMap<String, DayEntry> = read_required(dir, "entries.json")?;
        let mut entries = EntryStore::new();
        for (key, entry) in raw {
            match NaiveDate::parse_from_str(&key, "%Y-%m-%d") {
                Ok(date) => {
                    entries.insert(date, entry);
                }
                Err(_) => warn!("entries.json: skipping unparseable date key {:?}", key),
            }
        }

        let weeks: WeekStore = read_required(dir, "weeks.json")?;
        let books: BookStore =
            read_optional(&dir.join("config").join("books.json")).unwrap_or_default();
        let snapshot: Option<StatsSnapshot> = read_optional(&dir.join("stats.json"));
        let summaries: BTreeMap<String, WeekSummary> =
            read_optional(&dir.join("summaries.json")).unwrap_or_default();

        debug!(
            "loaded {} days, {} weeks, {} books from {:?}",
            entries.len(),
            weeks.len(),
            books.len(),
            dir
        );

        Ok(Self {
            dir: dir.to_path_buf(),
            entries,
            weeks,
            books,
            snapshot,
            summaries,
        })
    }
}

fn read_required<T: DeserializeOwned>(dir: &Path, file: &'static str) -> Result<T, DataError> {
    let path = dir.join(file);
    if !path.exists() {
        return Err(DataError::Missing {
            file,
            dir: dir.to_path_buf(),
        });
    }
    let raw = fs::read_to_string(&path).map_err(|source| DataError::Read {
        path: path.clone(),
        source,
    })?;
    serde_json::from_str(&raw).map_err(|source| DataError::Parse { path, source })
}

fn read_optional<T: DeserializeOwned>(path: &Path) -> Option<T> {
    if !path.exists() {
        debug!("{:?} not present, skipping", path);
        return None;
    }
    let raw = match fs::read_to_string(path) {
        Ok(raw) => raw,
        Err(err) => {
            warn!("ignoring unreadable {:?}: {}", path, err);
            return None;
        }
    };
    match serde_json::from_str(&raw) {
        Ok(value) => Some(value),
        Err(err) => {
            warn!("ignoring unparseable {:?}: {}", path, err);
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    fn write(dir: &Path, name: &str, contents: &str) {
        let path = dir.join(name);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).unwrap();
        }
        fs::write(path, contents).unwrap();
    }

    #[test]
    fn missing_entries_suggests_init() {
        let dir = tempfile::tempdir().unwrap();
        let err = JournalData::load(dir.path()).unwrap_err();
        assert!(matches!(err, DataError::Missing { file: "entries.json", .. }));
        assert!(err.to_string().contains("riyaz init"));
    }

    #[test]
    fn missing_weeks_is_also_fatal() {
        let dir = tempfile::tempdir().unwrap();
        write(dir.path(), "entries.json", "{}");
        let err = JournalData::load(dir.path()).unwrap_err();
        assert!(matches!(err, DataError::Missing { file: "weeks.json", .. }));
    }

    #[test]
    fn malformed_entries_is_a_parse_error() {
        let dir = tempfile::tempdir().unwrap();
        write(dir.path(), "entries.json", "{not json");
        let err = JournalData::load(dir.path()).unwrap_err();
        assert!(matches!(err, DataError::Parse { .. }));
    }

    #[test]
    fn optional_files_degrade_quietly() {
        let dir = tempfile::tempdir().unwrap();
        write(
            dir.path(),
            "entries.json",
            r#"{"2025-06-15": {"notes": "hi"}}"#,
        );
        write(dir.path(), "weeks.json", "{}");
        write(dir.path(), "stats.json", "{broken");
        let data = JournalData::load(dir.path()).unwrap();
        assert_eq!(data.entries.len(), 1);
        assert!(data.snapshot.is_none());
        assert!(data.books.is_empty());
        assert!(data.summaries.is_empty());
    }

    #[test]
    fn bad_date_keys_are_skipped_not_fatal() {
        let dir = tempfile::tempdir().unwrap();
        write(
            dir.path(),
            "entries.json",
            r#"{"2025-06-15": {"notes": "kept"}, "not-a-date": {"notes": "dropped"}}"#,
        );
        write(dir.path(), "weeks.json", "{}");
        let data = JournalData::load(dir.path()).unwrap();
        assert_eq!(data.entries.len(), 1);
        let only = data.entries.keys().next().unwrap();
        assert_eq!(*only, NaiveDate::from_ymd_opt(2025, 6, 15).unwrap());
    }

    #[test]
    fn full_layout_loads() {
        let dir = tempfile::tempdir().unwrap();
        write(
            dir.path(),
            "entries.json",
            r#"{"2025-06-15": {"practice": {"leetcode": [{"name": "Two Sum"}]}}}"#,
        );
        write(
            dir.path(),
            "weeks.json",
            r#"{"2025-W24": {"goals": ["ship it"], "goals_completed": []}}"#,
        );
        write(
            dir.path(),
            "stats.json",
            r#"{"practice": {"leetcode": {"total": 1}}}"#,
        );
        write(
            dir.path(),
            "config/books.json",
            r#"{"ddia": {"full_title": "DDIA", "total_pages": 590}}"#,
        );
        write(
            dir.path(),
            "summaries.json",
            r#"{"2025-W24": {"narrative": "a fine week", "topics": ["raft"]}}"#,
        );
        let data = JournalData::load(dir.path()).unwrap();
        assert_eq!(data.entries.len(), 1);
        assert_eq!(data.weeks.len(), 1);
        assert_eq!(data.books.get("ddia").unwrap().total_pages, 590);
        assert!(data.snapshot.is_some());
        assert_eq!(data.summaries.get("2025-W24").unwrap().narrative, "a fine week");
    }
}
