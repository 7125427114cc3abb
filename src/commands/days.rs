use anyhow::Result;

use super::{load_config, resolve_view};

pub fn run(year: Option<i32>, month: Option<u32>) -> Result<()> {
    let config = load_config()?;
    let window = resolve_view(&config, year, month)?.window();

    println!("{}", window.total_days);

    Ok(())
}
