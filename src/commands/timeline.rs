use std::path::PathBuf;

use anyhow::Result;
use timeline_core::month_window::OverlapMode;
use timeline_core::navigate_month;
use timeline_core::timeline::render_window;

use super::{load_config, load_schedule, resolve_view};
use crate::OutputFormat;
use crate::html::timeline_html;
use crate::render::Render;

pub fn run(
    data: Option<PathBuf>,
    year: Option<i32>,
    month: Option<u32>,
    step: i32,
    format: OutputFormat,
    span: bool,
    no_clamp: bool,
) -> Result<()> {
    let config = load_config()?;
    let mut view = resolve_view(&config, year, month)?;
    if step != 0 {
        view = navigate_month(view, step);
    }

    let mut options = config.timeline_options();
    if span {
        options.overlap = OverlapMode::Span;
    }
    if no_clamp {
        options.layout.clamp = false;
    }

    let schedule = load_schedule(&config, data)?;
    let timeline = render_window(&view.window(), &schedule.entities, &options);

    match format {
        OutputFormat::Text => println!("{}", timeline.render()),
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&timeline)?),
        OutputFormat::Html => println!("{}", timeline_html(&timeline)),
    }

    Ok(())
}
