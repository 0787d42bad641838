pub mod goals;
pub mod heatmap;
pub mod overview;
pub mod reading;
pub mod score;
pub mod streaks;
pub mod topics;

pub use heatmap::HeatmapGrid;
pub use overview::Overview;
pub use score::ScoreScheme;
pub use streaks::{StreakSource, StreakSummary};
