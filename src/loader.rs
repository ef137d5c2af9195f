//! Region file loading
//!
//! Reads `<data_dir>/<file_stem>.json` for each region and memoizes the parsed
//! JSON by path in a Moka cache. Parsed values are shared as `Arc<Value>` and
//! never mutated, so normalization can borrow them directly.
//!
//! Missing or unreadable files are not errors for the caller: the region just
//! contributes no samples.

use crate::data::normalize_region_detailed;
use crate::repository::ScoreRepository;
use crate::schema::Region;
use anyhow::{Context, Result};
use moka::sync::Cache;
use serde_json::Value;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Arc;

pub const DEFAULT_CACHE_CAPACITY: u64 = 64;

/// Parsed region files, cached by path
pub struct RegionLoader {
    cache: Cache<PathBuf, Arc<Value>>,
}

impl Default for RegionLoader {
    fn default() -> Self {
        Self::new(DEFAULT_CACHE_CAPACITY)
    }
}

impl RegionLoader {
    pub fn new(capacity: u64) -> Self {
        Self {
            cache: Cache::builder().max_capacity(capacity).build(),
        }
    }

    /// Path of a region's result file inside `data_dir`
    pub fn region_path(data_dir: &Path, region: Region) -> PathBuf {
        data_dir.join(format!("{}.json", region.file_stem()))
    }

    /// Read and parse a JSON file, or return the cached parse
    pub fn load_json(&self, path: &Path) -> Result<Arc<Value>> {
        self.cache
            .try_get_with(path.to_path_buf(), || read_json(path).map(Arc::new))
            .map_err(|e| anyhow::anyhow!("{:#}", e))
    }

    /// Load and normalize every region found in `data_dir`
    pub fn load_repository(&self, data_dir: &Path) -> ScoreRepository {
        let mut repository = ScoreRepository::new();

        for region in Region::ALL {
            let path = Self::region_path(data_dir, region);
            if !path.exists() {
                tracing::debug!("No data file for {} at {:?}, skipping", region, path);
                continue;
            }

            let raw = match self.load_json(&path) {
                Ok(raw) => raw,
                Err(e) => {
                    tracing::warn!("Skipping {}: {}", region, e);
                    continue;
                }
            };

            let outcome = normalize_region_detailed(&raw, region);
            tracing::debug!(
                "{}: {} records ({} non-object entries, {} without a numeric score)",
                region,
                outcome.records.len(),
                outcome.skipped_entries,
                outcome.dropped_scores
            );
            repository.insert_region(region, outcome.records);
        }

        tracing::info!(
            "Loaded {} records from {} regions",
            repository.record_count(),
            repository.regions().len()
        );
        repository
    }

    /// Number of files currently memoized
    pub fn cached_files(&self) -> u64 {
        self.cache.run_pending_tasks();
        self.cache.entry_count()
    }

    pub fn clear(&self) {
        self.cache.invalidate_all();
    }
}

fn read_json(path: &Path) -> Result<Value> {
    let contents = fs::read_to_string(path)
        .with_context(|| format!("Failed to read data file: {:?}", path))?;

    serde_json::from_str(&contents)
        .with_context(|| format!("Failed to parse JSON in {:?}", path))
}
