pub mod agenda;
pub mod calendar;
pub mod config;
pub mod day_at;
pub mod days;
pub mod navigate;
pub mod timeline;

use std::path::PathBuf;

use anyhow::{Context, Result};
use owo_colors::OwoColorize;
use timeline_core::config::TimelineConfig;
use timeline_core::{Schedule, TimelineViewState};

pub fn load_config() -> Result<TimelineConfig> {
    TimelineConfig::load().map_err(|e| anyhow::anyhow!(e))
}

/// Month to work on: explicit arguments win, the rest comes from config.
pub fn resolve_view(
    config: &TimelineConfig,
    year: Option<i32>,
    month: Option<u32>,
) -> Result<TimelineViewState> {
    let year = year.unwrap_or(config.default_year);
    let month = month.unwrap_or(config.default_month);

    TimelineViewState::new(year, month).map_err(|e| anyhow::anyhow!(e))
}

/// Load the schedule, reporting entries that had to be skipped.
pub fn load_schedule(config: &TimelineConfig, data: Option<PathBuf>) -> Result<Schedule> {
    let path = data.unwrap_or_else(|| config.data_path());

    let schedule = Schedule::from_path(&path)
        .with_context(|| format!("Could not load schedule from {}", path.display()))?;

    for skipped in &schedule.skipped {
        eprintln!("{}", format!("  Skipped entry {}", skipped).yellow());
    }

    Ok(schedule)
}
