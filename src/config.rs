use std::env;
use std::path::PathBuf;
use std::time::Duration;

use anyhow::Result;

use crate::catalog::Catalog;

pub const CATALOG_ENV: &str = "TIPSHEET_CATALOG";
pub const LOG_FILE_ENV: &str = "TIPSHEET_LOG_FILE";
pub const LOG_FILTER_ENV: &str = "TIPSHEET_LOG";
pub const TICK_ENV: &str = "TIPSHEET_TICK_MS";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub catalog_path: Option<PathBuf>,
    pub log_file: Option<PathBuf>,
    pub tick_rate: Duration,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            catalog_path: None,
            log_file: None,
            tick_rate: Duration::from_millis(250),
        }
    }
}

impl Settings {
    /// Reads the process environment. Call after `.env` files are loaded.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let tick_ms = lookup(TICK_ENV)
            .and_then(|val| val.trim().parse::<u64>().ok())
            .unwrap_or(250)
            .max(50);
        Self {
            catalog_path: non_empty_path(lookup(CATALOG_ENV)),
            log_file: non_empty_path(lookup(LOG_FILE_ENV)),
            tick_rate: Duration::from_millis(tick_ms),
        }
    }

    pub fn load_catalog(&self) -> Result<Catalog> {
        match &self.catalog_path {
            Some(path) => match Catalog::load(path) {
                Ok(catalog) => {
                    log::info!("loaded catalog from {}", path.display());
                    Ok(catalog)
                }
                Err(err) => {
                    log::warn!("catalog {} rejected: {err:#}", path.display());
                    Err(err)
                }
            },
            None => {
                log::info!("using built-in catalog");
                Catalog::builtin().cloned()
            }
        }
    }
}

pub fn load_dotenv() {
    let _ = dotenvy::from_filename(".env.local");
    let _ = dotenvy::from_filename(".env");
}

fn non_empty_path(raw: Option<String>) -> Option<PathBuf> {
    raw.map(|val| val.trim().to_string())
        .filter(|val| !val.is_empty())
        .map(PathBuf::from)
}
