use std::path::PathBuf;

use anyhow::{Context, Result};
use chrono::{Local, NaiveDate};
use timeline_core::calendar_grid::{month_grid, schedule_dates};

use super::{load_config, load_schedule, resolve_view};
use crate::render::Render;

pub fn run(
    data: Option<PathBuf>,
    year: Option<i32>,
    month: Option<u32>,
    today: Option<String>,
) -> Result<()> {
    let config = load_config()?;
    let window = resolve_view(&config, year, month)?.window();

    let today = match today {
        Some(s) => NaiveDate::parse_from_str(&s, "%Y-%m-%d")
            .with_context(|| format!("Invalid date '{}'. Expected YYYY-MM-DD", s))?,
        None => Local::now().date_naive(),
    };

    let schedule = load_schedule(&config, data)?;
    let grid = month_grid(&window, &schedule_dates(&schedule.entities), Some(today));

    println!("{}", grid.render());

    Ok(())
}
