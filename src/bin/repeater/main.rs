//! repeater - terminal minute repeater
//!
//! Run with: cargo run -- [HH:MM]
//!
//! Press Space to hear the time struck on the gongs. Without an argument the
//! local time is read on every press.

mod app;
mod ui;

use std::fs::File;

use app::Repeater;
use saavy_repeater::{RepeaterConfig, TimeOfDay};

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;
    init_logger()?;

    let fixed_time = std::env::args()
        .nth(1)
        .map(|arg| arg.parse::<TimeOfDay>())
        .transpose()?;

    Repeater::new()
        .config(RepeaterConfig::wire_gong())
        .fixed_time(fixed_time)
        .run()
}

/// Log to a file, the terminal belongs to the UI
fn init_logger() -> color_eyre::Result<()> {
    let path = std::env::temp_dir().join("repeater.log");
    simplelog::WriteLogger::init(
        simplelog::LevelFilter::Debug,
        simplelog::ConfigBuilder::new()
            .set_time_format_rfc3339()
            .add_filter_allow_str("saavy_repeater")
            .add_filter_allow_str("repeater")
            .build(),
        File::create(path)?,
    )?;
    Ok(())
}
