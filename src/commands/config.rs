use std::path::{Path, PathBuf};

use anyhow::Result;
use owo_colors::OwoColorize;
use timeline_core::TimelineViewState;
use timeline_core::config::TimelineConfig;

/// Settings to write back to the config file.
#[derive(Debug, Default)]
pub struct ConfigUpdate {
    pub data: Option<PathBuf>,
    pub year: Option<i32>,
    pub month: Option<u32>,
}

impl ConfigUpdate {
    fn is_empty(&self) -> bool {
        self.data.is_none() && self.year.is_none() && self.month.is_none()
    }
}

/// Apply `update` to the config at `path` and save it.
/// Returns the saved config, or None if there was nothing to change.
fn apply_update(path: &Path, update: ConfigUpdate) -> Result<Option<TimelineConfig>> {
    if update.is_empty() {
        return Ok(None);
    }

    let mut config = TimelineConfig::load_from(path).map_err(|e| anyhow::anyhow!(e))?;

    let view = TimelineViewState::new(
        update.year.unwrap_or(config.default_year),
        update.month.unwrap_or(config.default_month),
    )
    .map_err(|e| anyhow::anyhow!(e))?;
    config.default_year = view.year();
    config.default_month = view.month();

    if let Some(data) = update.data {
        config.data_file = data;
    }

    config.save(path).map_err(|e| anyhow::anyhow!(e))?;

    Ok(Some(config))
}

pub fn run(update: ConfigUpdate) -> Result<()> {
    let config_path = TimelineConfig::config_path().map_err(|e| anyhow::anyhow!(e))?;

    if !config_path.exists() {
        TimelineConfig::create_default_config(&config_path).map_err(|e| anyhow::anyhow!(e))?;
        println!("{}", format!("Created {}", config_path.display()).green());
    }

    let config = match apply_update(&config_path, update)? {
        Some(config) => {
            println!("{}", format!("Updated {}", config_path.display()).green());
            config
        }
        None => TimelineConfig::load_from(&config_path).map_err(|e| anyhow::anyhow!(e))?,
    };

    println!("{}", "Paths".bold());
    println!("  Config:     {}", config_path.display());
    println!("  Schedule:   {}", config.data_path().display());
    println!();
    println!("{}", "Timeline".bold());
    println!("  Start at:   {}/{:02}", config.default_year, config.default_month);
    println!("  Overlap:    {:?}", config.overlap);
    println!("  Clamp bars: {}", config.clamp_bars);
    println!("  Label max:  {} chars", config.label_max_chars);
    println!("  Links:      {}", config.detail_url);

    Ok(())
}
