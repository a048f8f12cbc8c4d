mod animator;
mod app;
mod city;
mod config;

use anyhow::Context;
use skyline_engine::logging::init_logging;
use skyline_engine::window::Runtime;

use crate::app::Studio;
use crate::config::StudioConfig;

fn main() -> anyhow::Result<()> {
    let config = StudioConfig::default();
    init_logging(config.logging.clone());

    let city = city::build_city().context("city scene is malformed")?;
    log::info!("arrows pan, shift+up/down zoom, escape quits");

    Runtime::run(
        config.runtime.clone(),
        config.gpu.clone(),
        Studio::new(config, city),
    )
}
