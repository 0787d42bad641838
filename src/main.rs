mod cli;
mod config;
mod data;
mod models;
mod stats;
mod tui;
mod utils;

use anyhow::{Context, Result};
use chrono::Local;
use clap::Parser;

use cli::args::{Cli, Commands};
use cli::handlers;
use config::AppConfig;
use data::JournalData;

fn main() -> Result<()> {
    env_logger::init();

    let cli = Cli::parse();
    let mut config = AppConfig::load().context("Loading config")?;

    let data_dir = config.resolve_data_dir(cli.data_dir.as_deref())?;
    let scheme = config.scheme();
    let source = config.streak_source();
    let today = Local::now().date_naive();

    match cli.command {
        // Init works on an empty directory, so it skips the load
        Some(Commands::Init { force }) => {
            handlers::handle_init(&data_dir, &mut config, force, cli.data_dir.is_some())?;
        }

        Some(cmd) => {
            let data = JournalData::load(&data_dir)?;
            match cmd {
                Commands::Stats => {
                    handlers::handle_stats(&data, source, today)?;
                }
                Commands::Streaks => {
                    handlers::handle_streaks(&data, source, today)?;
                }
                Commands::Heatmap { weeks } => {
                    let weeks = weeks.unwrap_or(config.journal.heatmap_weeks);
                    handlers::handle_heatmap(&data, scheme, weeks, today)?;
                }
                Commands::Goals => {
                    handlers::handle_goals(&data)?;
                }
                Commands::Reading => {
                    handlers::handle_reading(&data)?;
                }
                Commands::Topics => {
                    handlers::handle_topics(&data)?;
                }
                Commands::Today { date } => {
                    handlers::handle_today(&data, date.as_deref(), today)?;
                }
                Commands::Export => {
                    handlers::handle_export(&data, source, scheme, today)?;
                }
                Commands::Init { .. } => unreachable!(),
            }
        }

        // No subcommand → launch the dashboard
        None => {
            let data = JournalData::load(&data_dir)?;
            tui::app::run(data, scheme, source, config.journal.heatmap_weeks, today)?;
        }
    }

    Ok(())
}
