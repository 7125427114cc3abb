use std::path::PathBuf;

use anyhow::Result;
use owo_colors::OwoColorize;
use timeline_core::month_window::OverlapMode;
use timeline_core::timeline::{month_agenda, timeline_title};

use super::{load_config, load_schedule, resolve_view};
use crate::render::Render;

pub fn run(data: Option<PathBuf>, year: Option<i32>, month: Option<u32>, span: bool) -> Result<()> {
    let config = load_config()?;
    let window = resolve_view(&config, year, month)?.window();
    let mode = if span { OverlapMode::Span } else { config.overlap };

    let schedule = load_schedule(&config, data)?;
    let agenda = month_agenda(&window, &schedule.entities, mode);

    println!("🗓 {}", timeline_title(&window).bold());

    if agenda.is_empty() {
        println!("   {}", "No contests this month".dimmed());
    }

    for entry in &agenda {
        println!("   {}", entry.render());
    }

    Ok(())
}
