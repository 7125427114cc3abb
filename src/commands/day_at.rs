use anyhow::Result;
use timeline_core::HoverMapper;

use super::{load_config, resolve_view};
use crate::render::Render;

pub fn run(
    x: f64,
    left: f64,
    width: f64,
    pad_left: f64,
    pad_right: f64,
    year: Option<i32>,
    month: Option<u32>,
) -> Result<()> {
    let config = load_config()?;
    let view = resolve_view(&config, year, month)?;

    let mut mapper = HoverMapper::new(view.window());
    mapper.update_rect(left, width, pad_left, pad_right);

    if mapper.geometry().is_degenerate() {
        log::warn!(
            "Track has no usable width ({} - {} - {}), using day 1",
            width,
            pad_left,
            pad_right
        );
    }

    println!("{}", mapper.hover(x).render());

    Ok(())
}
