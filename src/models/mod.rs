pub mod book;
pub mod entry;
pub mod snapshot;
pub mod week;

pub use book::{Book, BookProgress, BookStore, Chapter};
pub use entry::{
    BuildingItem, Category, DayEntry, Difficulty, EntryStore, ExploringItem, Practice,
    PracticeItem, ReadingItem,
};
pub use snapshot::{
    BuildingSnapshot, ExploringSnapshot, GoalWindow, GoalsSnapshot, PracticeSnapshot,
    ProjectSnapshot, StatsSnapshot, WeekSummary,
};
pub use week::{WeekRecord, WeekStore};
