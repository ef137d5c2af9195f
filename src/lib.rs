//! Fitness Ranker
//!
//! Ranks a physical-fitness test result against the pooled results of several
//! regions whose result files label the same events differently.
//!
//! Module layout:
//! - `schema/`: canonical events, regions, genders and per-region label tables
//! - `data`: record normalization (numeric coercion, permissive filtering)
//! - `repository`: pooled score queries per event and gender
//! - `loader`: cached JSON loading of the regional files
//! - `utils/`: percentile engine, histogram binning, summary statistics
//! - `scorer`: the query facade producing `ScoreAnalysis` reports

pub mod config;
pub mod data;
pub mod error;
pub mod loader;
pub mod repository;
pub mod schema;
pub mod scorer;
pub mod utils;

// Re-export commonly used types
pub use config::AppConfig;
pub use data::{normalize_region, NormalizedRecord};
pub use error::RankError;
pub use loader::RegionLoader;
pub use repository::{ScorePool, ScoreRepository};
pub use schema::{direction_of, label_for, Direction, EventKey, Gender, Region};
pub use scorer::{FitnessScorer, ScoreAnalysis};
pub use utils::{histogram, percentile_rank, top_decile_threshold, Grade, Histogram, PoolSummary};
