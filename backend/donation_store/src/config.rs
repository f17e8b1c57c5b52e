//! Store configuration loaded from environment variables.

use std::path::PathBuf;

use crate::errors::{Result, StoreError};

#[derive(Debug, Clone)]
pub struct Config {
    /// Directory holding the persisted blobs
    pub data_dir: PathBuf,
    /// Whether to seed a bootstrap dataset when no collection blob exists
    pub seed_on_empty: bool,
    /// Number of seeded donations
    pub seed_count: usize,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        // Load an optional .env file first (ignored if missing).
        let _ = dotenvy::dotenv();

        Ok(Config {
            data_dir: env_var("FOODSHARE_DATA_DIR")
                .unwrap_or_else(|_| "./data".to_string())
                .into(),
            seed_on_empty: env_var("FOODSHARE_SEED_ON_EMPTY")
                .unwrap_or_else(|_| "true".to_string())
                .parse()
                .map_err(|_| StoreError::Config("Invalid FOODSHARE_SEED_ON_EMPTY".to_string()))?,
            seed_count: env_var("FOODSHARE_SEED_COUNT")
                .unwrap_or_else(|_| "20".to_string())
                .parse()
                .map_err(|_| StoreError::Config("Invalid FOODSHARE_SEED_COUNT".to_string()))?,
        })
    }
}

fn env_var(key: &str) -> Result<String> {
    std::env::var(key).map_err(|_| StoreError::Config(format!("Missing env var: {key}")))
}
