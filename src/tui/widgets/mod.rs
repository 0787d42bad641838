pub mod days;
pub mod goals;
pub mod header;
pub mod heatmap;
pub mod reading;
pub mod statsbar;
pub mod statusbar;
pub mod streaks;
pub mod topics;
