//! Percentile Engine
//!
//! Direction-aware percentile rank and top-decile threshold over a pooled
//! score sample.
//!
//! Both functions are discrete: rank counts strictly beaten samples (ties are
//! not beaten), and the threshold is an actual sample picked at index
//! `floor(0.1 × n)` in best-first order. No interpolation, so the figures
//! match those already published from the same data.

use crate::schema::Direction;
use serde::Serialize;
use std::fmt;

/// Percentage of the pool strictly beaten by `score`, rounded to 2 decimals
///
/// Returns `None` for an empty pool or a non-finite score. The pool does not
/// need to be sorted.
pub fn percentile_rank(score: f64, pool: &[f64], direction: Direction) -> Option<f64> {
    if pool.is_empty() || !score.is_finite() {
        return None;
    }

    let beaten = match direction {
        Direction::HigherIsBetter => pool.iter().filter(|&&s| s < score).count(),
        Direction::LowerIsBetter => pool.iter().filter(|&&s| s > score).count(),
    };

    let percentile = beaten as f64 / pool.len() as f64 * 100.0;
    Some(round_to(percentile, 2))
}

/// Score that the top 10% of the pool meet or exceed
///
/// Pools with fewer than 10 samples return the best sample (index 0); the
/// index is clamped to the last sample so it can never run past the end.
pub fn top_decile_threshold(pool: &[f64], direction: Direction) -> Option<f64> {
    if pool.is_empty() {
        return None;
    }

    let mut best_first = pool.to_vec();
    match direction {
        Direction::HigherIsBetter => best_first.sort_by(|a, b| b.total_cmp(a)),
        Direction::LowerIsBetter => best_first.sort_by(f64::total_cmp),
    }

    let index = ((best_first.len() as f64 * 0.1) as usize).min(best_first.len() - 1);
    Some(best_first[index])
}

/// How far `score` is past the threshold; positive means better than it
pub fn gap_to_threshold(score: f64, threshold: f64, direction: Direction) -> f64 {
    match direction {
        Direction::HigherIsBetter => score - threshold,
        Direction::LowerIsBetter => threshold - score,
    }
}

/// Exact halves round to even (3.125 → 3.12), as published figures do
fn round_to(value: f64, decimals: i32) -> f64 {
    let factor = 10f64.powi(decimals);
    (value * factor).round_ties_even() / factor
}

/// Qualitative band derived from a percentile rank
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Grade {
    Excellent,
    Good,
    Average,
    NeedsImprovement,
}

impl Grade {
    /// Lower bounds are inclusive: 90, 70, 50
    pub fn from_percentile(percentile: f64) -> Self {
        if percentile >= 90.0 {
            Grade::Excellent
        } else if percentile >= 70.0 {
            Grade::Good
        } else if percentile >= 50.0 {
            Grade::Average
        } else {
            Grade::NeedsImprovement
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Grade::Excellent => "Excellent",
            Grade::Good => "Good",
            Grade::Average => "Average",
            Grade::NeedsImprovement => "Needs Improvement",
        }
    }

    pub fn korean_label(self) -> &'static str {
        match self {
            Grade::Excellent => "우수",
            Grade::Good => "양호",
            Grade::Average => "보통",
            Grade::NeedsImprovement => "미흡",
        }
    }
}

impl fmt::Display for Grade {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
