//! Descriptive statistics for a score pool
//!
//! Summary figures shown next to a ranking (mean, spread, quartiles) and the
//! optional outlier filter applied before ranking.
//!
//! Quantiles here interpolate linearly between closest ranks; they are not
//! used for the discrete rank/threshold in `percentile`.

use crate::schema::EventKey;
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PoolSummary {
    pub count: usize,
    pub mean: f64,
    /// Population standard deviation
    pub std_dev: f64,
    pub min: f64,
    pub max: f64,
    pub p25: f64,
    pub median: f64,
    pub p75: f64,
    pub p90: f64,
    pub p95: f64,
}

impl PoolSummary {
    /// Summarize an ascending pool; `None` when it is empty
    pub fn from_sorted(sorted: &[f64]) -> Option<Self> {
        let count = sorted.len();
        if count == 0 {
            return None;
        }

        let mean = sorted.iter().sum::<f64>() / count as f64;
        let variance = sorted.iter().map(|v| (v - mean).powi(2)).sum::<f64>() / count as f64;

        Some(Self {
            count,
            mean,
            std_dev: variance.sqrt(),
            min: sorted[0],
            max: sorted[count - 1],
            p25: quantile(sorted, 25.0)?,
            median: quantile(sorted, 50.0)?,
            p75: quantile(sorted, 75.0)?,
            p90: quantile(sorted, 90.0)?,
            p95: quantile(sorted, 95.0)?,
        })
    }
}

/// Linearly interpolated quantile of an ascending slice, `percent` in [0, 100]
pub fn quantile(sorted: &[f64], percent: f64) -> Option<f64> {
    if sorted.is_empty() {
        return None;
    }

    let position = (percent.clamp(0.0, 100.0) / 100.0) * (sorted.len() - 1) as f64;
    let lower = position.floor() as usize;
    let upper = position.ceil() as usize;
    let weight = position - lower as f64;

    if lower == upper {
        return Some(sorted[lower]);
    }
    Some(sorted[lower] * (1.0 - weight) + sorted[upper] * weight)
}

/// Drop implausible values from an ascending pool
///
/// Keeps values inside the 1.5 × IQR fences, further narrowed by the event's
/// plausible recording range. Quartiles are the samples at `floor(n × 0.25)`
/// and `floor(n × 0.75)`.
pub fn remove_outliers(sorted: &[f64], event: EventKey) -> Vec<f64> {
    if sorted.is_empty() {
        return Vec::new();
    }

    let n = sorted.len();
    let q1 = sorted[((n as f64 * 0.25) as usize).min(n - 1)];
    let q3 = sorted[((n as f64 * 0.75) as usize).min(n - 1)];
    let iqr = q3 - q1;

    let (event_min, event_max) = event.plausible_range();
    let lower = (q1 - 1.5 * iqr).max(event_min);
    let upper = (q3 + 1.5 * iqr).min(event_max);

    sorted
        .iter()
        .copied()
        .filter(|&score| score >= lower && score <= upper)
        .collect()
}
