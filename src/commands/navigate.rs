use anyhow::Result;
use owo_colors::OwoColorize;
use timeline_core::navigate_month;

use super::{load_config, resolve_view};

pub fn run(year: Option<i32>, month: Option<u32>, direction: i32) -> Result<()> {
    let config = load_config()?;
    let from = resolve_view(&config, year, month)?;
    let to = navigate_month(from, direction);
    let window = to.window();

    println!(
        "{} {} {}",
        format!("{}/{:02}", from.year(), from.month()).dimmed(),
        "→".dimmed(),
        format!("{}/{:02}", window.year, window.month).bold()
    );
    println!("  {} days", window.total_days);

    Ok(())
}
