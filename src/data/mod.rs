pub mod loader;

pub use loader::{DataError, JournalData};
