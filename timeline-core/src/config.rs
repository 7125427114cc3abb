//! Timeline configuration at ~/.config/contest-timeline/config.toml

use std::path::{Path, PathBuf};

use config::{Config, File, FileFormat};
use serde::{Deserialize, Serialize};

use crate::constants::{DEFAULT_DETAIL_URL, DEFAULT_MONTH, DEFAULT_YEAR, LABEL_MAX_CHARS};
use crate::error::{TimelineError, TimelineResult};
use crate::layout::LayoutOptions;
use crate::month_window::OverlapMode;
use crate::navigator::TimelineViewState;
use crate::timeline::TimelineOptions;

static DEFAULT_DATA_FILE: &str = "data/contests.json";

fn default_data_file() -> PathBuf {
    PathBuf::from(DEFAULT_DATA_FILE)
}

fn default_year() -> i32 {
    DEFAULT_YEAR
}

fn default_month() -> u32 {
    DEFAULT_MONTH
}

fn default_label_max_chars() -> usize {
    LABEL_MAX_CHARS
}

fn default_clamp_bars() -> bool {
    true
}

fn default_detail_url() -> String {
    DEFAULT_DETAIL_URL.to_string()
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct TimelineConfig {
    /// Schedule JSON, `~` is expanded
    #[serde(default = "default_data_file")]
    pub data_file: PathBuf,

    /// Month shown first
    #[serde(default = "default_year")]
    pub default_year: i32,
    #[serde(default = "default_month")]
    pub default_month: u32,

    #[serde(default = "default_label_max_chars")]
    pub label_max_chars: usize,

    #[serde(default = "default_clamp_bars")]
    pub clamp_bars: bool,

    #[serde(default)]
    pub overlap: OverlapMode,

    #[serde(default = "default_detail_url")]
    pub detail_url: String,
}

impl Default for TimelineConfig {
    fn default() -> Self {
        TimelineConfig {
            data_file: default_data_file(),
            default_year: DEFAULT_YEAR,
            default_month: DEFAULT_MONTH,
            label_max_chars: LABEL_MAX_CHARS,
            clamp_bars: true,
            overlap: OverlapMode::default(),
            detail_url: default_detail_url(),
        }
    }
}

impl TimelineConfig {
    pub fn config_path() -> TimelineResult<PathBuf> {
        let config_dir = dirs::config_dir()
            .ok_or_else(|| TimelineError::Config("Could not determine config directory".into()))?
            .join("contest-timeline");

        Ok(config_dir.join("config.toml"))
    }

    /// Load the user config, falling back to defaults when there is none.
    pub fn load() -> TimelineResult<Self> {
        Self::load_from(&Self::config_path()?)
    }

    pub fn load_from(path: &Path) -> TimelineResult<Self> {
        let config: TimelineConfig = Config::builder()
            .add_source(File::from(path.to_path_buf()).format(FileFormat::Toml).required(false))
            .build()
            .map_err(|e| TimelineError::Config(e.to_string()))?
            .try_deserialize()
            .map_err(|e| TimelineError::Config(e.to_string()))?;

        log::debug!("Loaded config from {}", path.display());

        Ok(config)
    }

    pub fn save(&self, path: &Path) -> TimelineResult<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content =
            toml::to_string_pretty(self).map_err(|e| TimelineError::Config(e.to_string()))?;

        std::fs::write(path, content)?;

        Ok(())
    }

    /// Create a default config file with all options commented out.
    pub fn create_default_config(path: &Path) -> TimelineResult<()> {
        let contents = format!(
            "\
# contest-timeline configuration

# Schedule data (JSON array, or an object with a \"contests\" array):
# data_file = \"{DEFAULT_DATA_FILE}\"

# Month shown when none is given:
# default_year = {DEFAULT_YEAR}
# default_month = {DEFAULT_MONTH}

# Longer contest names are cut and end in \"...\":
# label_max_chars = {LABEL_MAX_CHARS}

# Pin bars and milestones from neighbouring months to the month's edges:
# clamp_bars = true

# Which contests belong to a month:
#   \"landing\" - start, end or result date falls in the month
#   \"span\"    - any part of the contest overlaps the month
# overlap = \"landing\"

# Link target for bars and milestones:
# detail_url = \"{DEFAULT_DETAIL_URL}\"
"
        );

        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(|e| {
                TimelineError::Config(format!("Could not create config directory: {e}"))
            })?;
        }

        std::fs::write(path, contents)
            .map_err(|e| TimelineError::Config(format!("Could not write config file: {e}")))?;

        Ok(())
    }

    pub fn data_path(&self) -> PathBuf {
        PathBuf::from(shellexpand::tilde(&self.data_file.to_string_lossy()).into_owned())
    }

    pub fn initial_view(&self) -> TimelineResult<TimelineViewState> {
        TimelineViewState::new(self.default_year, self.default_month)
    }

    pub fn timeline_options(&self) -> TimelineOptions {
        TimelineOptions {
            overlap: self.overlap,
            layout: LayoutOptions {
                label_max_chars: self.label_max_chars,
                clamp: self.clamp_bars,
                detail_url: self.detail_url.clone(),
            },
        }
    }
}
