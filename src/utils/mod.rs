//! Numeric utilities over score pools
//!
//! - Percentile: direction-aware rank, top-decile threshold, grade bands
//! - Histogram: equal-width binning for distribution display
//! - Statistics: summary figures and outlier filtering

pub mod histogram;
pub mod percentile;
pub mod statistics;

// Re-export commonly used types
pub use histogram::{histogram, Histogram, DEFAULT_BIN_COUNT};
pub use percentile::{gap_to_threshold, percentile_rank, top_decile_threshold, Grade};
pub use statistics::{quantile, remove_outliers, PoolSummary};
