use std::collections::{BTreeMap, BTreeSet, HashMap};

use crate::data::JournalData;
use crate::models::{Book, BookProgress, BookStore, EntryStore};
use crate::utils::format::round1;

/// The chapter a reader is "on": the smallest chapter number not yet
/// completed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CurrentChapter {
    pub number: u32,
    pub title: String,
    pub pages: Option<(u32, u32)>,
}

/// Everything a reading panel row needs for one book.
#[derive(Debug, Clone)]
pub struct BookOverview {
    pub key: String,
    pub title: String,
    pub author: Option<String>,
    pub progress: BookProgress,
    pub percent: f64,
    pub current: Option<CurrentChapter>,
}

/// Map every name a book can be logged under (key, full title, aliases)
/// to its canonical key, lowercased.
fn alias_index(books: &BookStore) -> HashMap<String, String> {
    let mut index = HashMap::new();
    for (key, book) in books {
        index.insert(key.to_lowercase(), key.clone());
        if !book.full_title.is_empty() {
            index.insert(book.full_title.to_lowercase(), key.clone());
        }
        for alias in &book.aliases {
            index.insert(alias.to_lowercase(), key.clone());
        }
    }
    index
}

/// Derive book progress from raw reading items.
///
/// Pages are a set union of the inclusive ranges, so re-reading a span
/// never inflates the count. A chapter is completed once every page of
/// its configured range has been read; themes come from every chapter
/// that was touched, completed or not.
pub fn derive_progress(entries: &EntryStore, books: &BookStore) -> BTreeMap<String, BookProgress> {
    let index = alias_index(books);
    let mut pages_read: BTreeMap<String, BTreeSet<u32>> = BTreeMap::new();
    let mut chapters_touched: BTreeMap<String, BTreeSet<u32>> = BTreeMap::new();

    for entry in entries.values() {
        for item in &entry.reading {
            if item.book.is_empty() {
                continue;
            }
            let key = index
                .get(&item.book.to_lowercase())
                .cloned()
                .unwrap_or_else(|| item.book.clone());
            if let Some((start, end)) = item.page_range() {
                pages_read.entry(key.clone()).or_default().extend(start..=end);
            }
            if let Some(chapter) = item.chapter {
                chapters_touched.entry(key).or_default().insert(chapter);
            }
        }
    }

    let keys: BTreeSet<String> = pages_read
        .keys()
        .chain(chapters_touched.keys())
        .cloned()
        .collect();

    let empty = BTreeSet::new();
    let mut progress = BTreeMap::new();
    for key in keys {
        let pages = pages_read.get(&key).unwrap_or(&empty);
        let touched = chapters_touched.get(&key).unwrap_or(&empty);
        let book = books.get(&key);

        let total_pages = book.map(|b| b.total_pages).unwrap_or(0);
        let mut chapters_completed = Vec::new();
        let mut themes: BTreeSet<String> = BTreeSet::new();
        if let Some(book) = book {
            for (number, chapter) in &book.chapters {
                if let Some((start, end)) = chapter.page_range() {
                    if (start..=end).all(|p| pages.contains(&p)) {
                        chapters_completed.push(*number);
                    }
                }
                if touched.contains(number) {
                    themes.extend(chapter.themes.iter().cloned());
                }
            }
        }

        let read = pages.len() as u32;
        let percentage = if total_pages > 0 {
            Some(round1(read as f64 / total_pages as f64 * 100.0))
        } else {
            None
        };

        progress.insert(
            key,
            BookProgress {
                pages_read: read,
                total_pages,
                percentage,
                chapters_completed,
                themes_covered: themes.into_iter().collect(),
            },
        );
    }

    progress
}

/// Smallest chapter number not in `chapters_completed`; `None` when the
/// chapter table is empty or everything is done.
pub fn current_chapter(book: &Book, progress: &BookProgress) -> Option<CurrentChapter> {
    let done: BTreeSet<u32> = progress.chapters_completed.iter().copied().collect();
    book.chapters
        .iter()
        .find(|(number, _)| !done.contains(number))
        .map(|(number, chapter)| CurrentChapter {
            number: *number,
            title: chapter.title.clone(),
            pages: chapter.page_range(),
        })
}

/// Reading rows for the dashboard. Derived from entries when the books
/// config exists; otherwise the snapshot's reading map is shown as-is.
pub fn book_overviews(data: &JournalData) -> Vec<BookOverview> {
    let derived;
    let progress_map: &BTreeMap<String, BookProgress> = if !data.books.is_empty() {
        derived = derive_progress(&data.entries, &data.books);
        &derived
    } else if let Some(snapshot) = &data.snapshot {
        &snapshot.reading
    } else {
        derived = derive_progress(&data.entries, &data.books);
        &derived
    };

    progress_map
        .iter()
        .map(|(key, progress)| {
            let book = data.books.get(key);
            let title = book
                .map(|b| b.full_title.clone())
                .filter(|t| !t.is_empty())
                .unwrap_or_else(|| key.clone());
            let author = book.map(|b| b.author.clone()).filter(|a| !a.is_empty());
            BookOverview {
                key: key.clone(),
                title,
                author,
                percent: progress.percent(),
                current: book.and_then(|b| current_chapter(b, progress)),
                progress: progress.clone(),
            }
        })
        .collect()
}
