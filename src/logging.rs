use std::fs::OpenOptions;

use anyhow::{Context, Result};

use crate::config::{LOG_FILTER_ENV, Settings};

/// Routes `log` output to the configured file. Without one, logging stays
/// off since the terminal belongs to the UI.
pub fn init(settings: &Settings) -> Result<bool> {
    let Some(path) = &settings.log_file else {
        return Ok(false);
    };
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .with_context(|| format!("failed to open log file {}", path.display()))?;

    env_logger::Builder::from_env(env_logger::Env::default().filter_or(LOG_FILTER_ENV, "info"))
        .target(env_logger::Target::Pipe(Box::new(file)))
        .try_init()
        .context("logger already initialised")?;
    Ok(true)
}
