//! Calibration tool for the noise functions.
//!
//! Seeds the process-wide noise context, probes the output range of every
//! configured function and logs the result. The optional first argument is
//! the path of a JSON5 config file; without it `grain.json5` in the working
//! directory is used if present.

use std::env;
use std::path::PathBuf;

use anyhow::Context;
use grain_core::{ProbeConfig, default_context, nan_substitutions};
use tracing_subscriber::EnvFilter;

const DEFAULT_CONFIG_PATH: &str = "grain.json5";

fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();
}

fn load_config() -> anyhow::Result<ProbeConfig> {
    if let Some(path) = env::args_os().nth(1).map(PathBuf::from) {
        return ProbeConfig::load(&path)
            .with_context(|| format!("failed to load config from {}", path.display()));
    }
    ProbeConfig::load_or_default(DEFAULT_CONFIG_PATH.as_ref())
        .with_context(|| format!("failed to load config from {DEFAULT_CONFIG_PATH}"))
}

fn main() -> anyhow::Result<()> {
    init_logging();

    let config = load_config()?;
    let context = default_context();
    let seed = match config.seed {
        Some(seed) => {
            context.reseed_with(seed);
            seed
        }
        None => context.reseed(),
    };
    log::info!("Probing {} functions with seed {seed}", config.targets.len());

    for target in &config.targets {
        let range = target.probe(context, config.octaves);
        log::info!(
            "{:<24} min {:>10.6} max {:>10.6} span {:>10.6}",
            target.name(),
            range.min,
            range.max,
            range.span()
        );
    }

    let substituted = nan_substitutions();
    if substituted > 0 {
        log::warn!("{substituted} NaN noise2 results were replaced with 0");
    }
    Ok(())
}
