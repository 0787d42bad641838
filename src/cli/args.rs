use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "riyaz", version, author, about = "A terminal dashboard for your daily learning journal")]
pub struct Cli {
    /// Journal data directory (overrides the configured one)
    #[arg(long, global = true, value_name = "DIR")]
    pub data_dir: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Scaffold an empty journal data directory
    Init {
        /// Overwrite existing journal files
        #[arg(long)]
        force: bool,
    },
    /// One-screen summary: practice, goals, reading, projects
    Stats,
    /// Current and longest streaks per category
    Streaks,
    /// Activity heatmap, one column per week
    Heatmap {
        /// How many weeks to show (default from config)
        #[arg(long, value_name = "N")]
        weeks: Option<usize>,
    },
    /// This week's goal checklist and all-time completion
    Goals,
    /// Book progress and current chapters
    Reading,
    /// Topics explored, weighted by how often they come up
    Topics,
    /// Show one day's entry in full
    Today {
        /// Date to show instead of today (YYYY-MM-DD)
        #[arg(long, value_name = "DATE")]
        date: Option<String>,
    },
    /// Export a markdown summary of the current week to stdout
    Export,
}
