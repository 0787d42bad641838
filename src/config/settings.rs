use anyhow::{Context, Result};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::stats::{ScoreScheme, StreakSource};

fn default_scoring() -> String {
    "balanced".to_string()
}
fn default_streaks() -> String {
    "recompute".to_string()
}
fn default_heatmap_weeks() -> usize {
    52
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JournalConfig {
    /// Where the journal's JSON files live. Unset = the platform data dir.
    #[serde(default)]
    pub data_dir: Option<String>,
    /// Heatmap scoring scheme: "balanced" or "classic"
    #[serde(default = "default_scoring")]
    pub scoring: String,
    /// Practice streak source: "recompute" or "snapshot"
    #[serde(default = "default_streaks")]
    pub streaks: String,
    #[serde(default = "default_heatmap_weeks")]
    pub heatmap_weeks: usize,
}

impl Default for JournalConfig {
    fn default() -> Self {
        Self {
            data_dir: None,
            scoring: default_scoring(),
            streaks: default_streaks(),
            heatmap_weeks: default_heatmap_weeks(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct AppConfig {
    #[serde(default)]
    pub journal: JournalConfig,
}

impl AppConfig {
    fn project_dirs() -> Result<ProjectDirs> {
        ProjectDirs::from("", "", "riyaz").context("Could not determine project directories")
    }

    pub fn config_path() -> Result<PathBuf> {
        let dirs = Self::project_dirs()?;
        Ok(dirs.config_dir().join("config.toml"))
    }

    pub fn default_data_dir() -> Result<PathBuf> {
        let dirs = Self::project_dirs()?;
        Ok(dirs.data_dir().to_path_buf())
    }

    /// CLI flag wins, then the config file, then the platform data dir.
    pub fn resolve_data_dir(&self, cli_override: Option<&Path>) -> Result<PathBuf> {
        if let Some(dir) = cli_override {
            return Ok(dir.to_path_buf());
        }
        if let Some(dir) = &self.journal.data_dir {
            return Ok(PathBuf::from(dir));
        }
        Self::default_data_dir()
    }

    /// Parsed scoring scheme; unknown values warn and fall back to the
    /// default rather than failing startup.
    pub fn scheme(&self) -> ScoreScheme {
        match self.journal.scoring.parse() {
            Ok(scheme) => scheme,
            Err(_) => {
                log::warn!(
                    "unknown scoring scheme {:?} in config, using {}",
                    self.journal.scoring,
                    ScoreScheme::default()
                );
                ScoreScheme::default()
            }
        }
    }

    pub fn streak_source(&self) -> StreakSource {
        match self.journal.streaks.parse() {
            Ok(source) => source,
            Err(_) => {
                log::warn!(
                    "unknown streak source {:?} in config, recomputing from entries",
                    self.journal.streaks
                );
                StreakSource::default()
            }
        }
    }

    pub fn load() -> Result<Self> {
        let path = Self::config_path()?;
        if !path.exists() {
            return Ok(Self::default());
        }
        let content =
            std::fs::read_to_string(&path).with_context(|| format!("Reading {:?}", path))?;
        let config: AppConfig = toml::from_str(&content).context("Parsing config.toml")?;
        Ok(config)
    }

    pub fn save(&self) -> Result<()> {
        let path = Self::config_path()?;
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let content = toml::to_string_pretty(self).context("Serializing config")?;
        std::fs::write(&path, content).with_context(|| format!("Writing {:?}", path))?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_toml_gets_defaults() {
        let config: AppConfig = toml::from_str("").unwrap();
        assert_eq!(config.journal.scoring, "balanced");
        assert_eq!(config.journal.streaks, "recompute");
        assert_eq!(config.journal.heatmap_weeks, 52);
        assert_eq!(config.scheme(), ScoreScheme::Balanced);
        assert_eq!(config.streak_source(), StreakSource::Recompute);
    }

    #[test]
    fn explicit_values_parse() {
        let config: AppConfig = toml::from_str(
            "[journal]\nscoring = \"classic\"\nstreaks = \"snapshot\"\nheatmap_weeks = 26\n",
        )
        .unwrap();
        assert_eq!(config.scheme(), ScoreScheme::Classic);
        assert_eq!(config.streak_source(), StreakSource::Snapshot);
        assert_eq!(config.journal.heatmap_weeks, 26);
    }

    #[test]
    fn junk_values_fall_back_to_defaults() {
        let config: AppConfig =
            toml::from_str("[journal]\nscoring = \"vibes\"\nstreaks = \"guess\"\n").unwrap();
        assert_eq!(config.scheme(), ScoreScheme::Balanced);
        assert_eq!(config.streak_source(), StreakSource::Recompute);
    }

    #[test]
    fn cli_override_beats_config() {
        let config = AppConfig {
            journal: JournalConfig {
                data_dir: Some("/tmp/journal".to_string()),
                ..Default::default()
            },
        };
        let cli = PathBuf::from("/tmp/other");
        assert_eq!(
            config.resolve_data_dir(Some(&cli)).unwrap(),
            PathBuf::from("/tmp/other")
        );
        assert_eq!(
            config.resolve_data_dir(None).unwrap(),
            PathBuf::from("/tmp/journal")
        );
    }
}
