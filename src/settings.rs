use config::{Config, ConfigError, Environment, Source};
use serde::Deserialize;

use crate::error::{Error, Result};

pub const DEFAULT_DATABASE_URL: &str = "reviews.db";
pub const DEFAULT_POOL_SIZE: u32 = 4;
pub const DEFAULT_MAX_DEPTH: usize = 3;
/// Hard ceiling on `max_depth`; deep serialization recurses once per level.
pub const MAX_DEPTH_LIMIT: usize = 16;
pub const DEFAULT_LOG_FILTER: &str = "review_store=info";

#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    pub database_url: String,
    pub pool_size: u32,
    /// Levels below the root that `to_dict` expands before collapsing to the shallow form.
    pub max_depth: usize,
    pub log_filter: String,
}

impl Settings {
    /// Reads settings from the process environment, after loading `.env` if present.
    pub fn new() -> Result<Self> {
        dotenv::dotenv().ok();
        Self::from_source(Environment::default())
    }

    pub fn from_source<S>(source: S) -> Result<Self>
    where
        S: Source + Send + Sync + 'static,
    {
        let settings: Settings = Config::builder()
            .set_default("database_url", DEFAULT_DATABASE_URL)?
            .set_default("pool_size", i64::from(DEFAULT_POOL_SIZE))?
            .set_default("max_depth", DEFAULT_MAX_DEPTH as i64)?
            .set_default("log_filter", DEFAULT_LOG_FILTER)?
            .add_source(source)
            .build()?
            .try_deserialize()?;

        if settings.max_depth > MAX_DEPTH_LIMIT {
            return Err(Error::Config(ConfigError::Message(format!(
                "max_depth {} exceeds the limit of {}",
                settings.max_depth, MAX_DEPTH_LIMIT
            ))));
        }

        Ok(settings)
    }
}

impl Default for Settings {
    fn default() -> Self {
        Settings {
            database_url: DEFAULT_DATABASE_URL.to_string(),
            pool_size: DEFAULT_POOL_SIZE,
            max_depth: DEFAULT_MAX_DEPTH,
            log_filter: DEFAULT_LOG_FILTER.to_string(),
        }
    }
}
