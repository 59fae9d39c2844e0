//! Environment-driven service configuration.
//!
//! Blank values are treated as unset so wrappers can export an empty variable
//! to fall back to the defaults.

use crate::catalog::CatalogSource;
use crate::logging::{LogFormat, LoggingConfig};
use anyhow::{Context, Result};
use std::env;
use std::path::PathBuf;

/// Path to a movies JSON file; unset means the bundled records.
pub const CATALOG_ENV: &str = "REELSHELF_CATALOG";
/// `EnvFilter` directive for log events.
pub const LOG_ENV: &str = "REELSHELF_LOG";
/// `text` or `json`.
pub const LOG_FORMAT_ENV: &str = "REELSHELF_LOG_FORMAT";

#[derive(Debug, Clone)]
pub struct ServiceConfig {
    pub catalog: CatalogSource,
    pub logging: LoggingConfig,
}

impl ServiceConfig {
    /// Read configuration from the process environment.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Read configuration through `lookup`, which maps a variable name to its
    /// value.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let value = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let catalog = CatalogSource::from_optional_path(value(CATALOG_ENV).map(PathBuf::from));

        let mut logging = LoggingConfig::default();
        if let Some(level) = value(LOG_ENV) {
            logging.level = level.trim().to_string();
        }
        if let Some(format) = value(LOG_FORMAT_ENV) {
            logging.format =
                LogFormat::parse(&format).with_context(|| format!("reading {LOG_FORMAT_ENV}"))?;
        }

        Ok(Self { catalog, logging })
    }
}
