//! Runtime configuration
//!
//! Read from environment variables with local-development defaults:
//! - `DATA_DIR`: directory holding the regional `*.json` files (default `data`)
//! - `BIN_COUNT`: histogram bins (default 30)
//! - `REMOVE_OUTLIERS`: `1`/`true`/`yes` filters implausible scores before ranking
//! - `CACHE_CAPACITY`: number of parsed files kept in memory (default 64)

use crate::loader::DEFAULT_CACHE_CAPACITY;
use crate::utils::DEFAULT_BIN_COUNT;
use std::path::PathBuf;

#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    pub data_dir: PathBuf,
    pub bin_count: usize,
    pub remove_outliers: bool,
    pub cache_capacity: u64,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            data_dir: PathBuf::from("data"),
            bin_count: DEFAULT_BIN_COUNT,
            remove_outliers: false,
            cache_capacity: DEFAULT_CACHE_CAPACITY,
        }
    }
}

impl AppConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from any key lookup; unparsable values fall back to defaults
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();

        Self {
            data_dir: lookup("DATA_DIR").map(PathBuf::from).unwrap_or(defaults.data_dir),
            bin_count: lookup("BIN_COUNT")
                .and_then(|v| v.trim().parse().ok())
                .filter(|&n: &usize| n > 0)
                .unwrap_or(defaults.bin_count),
            remove_outliers: lookup("REMOVE_OUTLIERS")
                .map(|v| matches!(v.trim().to_lowercase().as_str(), "1" | "true" | "yes"))
                .unwrap_or(defaults.remove_outliers),
            cache_capacity: lookup("CACHE_CAPACITY")
                .and_then(|v| v.trim().parse().ok())
                .unwrap_or(defaults.cache_capacity),
        }
    }
}
