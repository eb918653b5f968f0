// src/pipeline/validate.rs

use crate::error::Result;
use crate::models::{Config, Seed};

/// Validate the configuration and the seed set it points at.
pub fn run_validate(config: &Config) -> Result<Seed> {
    config.validate()?;
    log::info!("✓ Config OK");
    log::info!("  curriculum 2015: {}", config.sources.curriculum_2015);
    log::info!("  curriculum 2022: {}", config.sources.curriculum_2022);
    log::info!("  timeout: {}s", config.http.timeout_secs);

    let seed = match &config.sources.seed_file {
        Some(path) => Seed::load(path)?,
        None => Seed::default(),
    };
    seed.validate()?;
    log::info!("✓ Seed OK ({} standard(s))", seed.standards.len());

    Ok(seed)
}
