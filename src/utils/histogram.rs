//! Distribution Binner
//!
//! Equal-width histogram over the pool's observed range, for distribution
//! charts. Direction plays no part here.

use crate::error::RankError;
use serde::Serialize;

pub const DEFAULT_BIN_COUNT: usize = 30;

/// Bin midpoints and sample counts, index-aligned
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Histogram {
    pub centers: Vec<f64>,
    pub counts: Vec<usize>,
}

impl Histogram {
    /// Nothing to display
    pub fn is_empty(&self) -> bool {
        self.centers.is_empty()
    }

    pub fn total(&self) -> usize {
        self.counts.iter().sum()
    }
}

/// Bucket `pool` into `bin_count` equal-width bins spanning [min, max]
///
/// The last bin is closed on the right so the maximum is counted. An empty
/// pool gives an empty histogram; a pool with a single distinct value gives a
/// single bin centred on it.
pub fn histogram(pool: &[f64], bin_count: usize) -> Result<Histogram, RankError> {
    if bin_count == 0 {
        return Err(RankError::InvalidBinCount(bin_count));
    }

    let values: Vec<f64> = pool.iter().copied().filter(|v| v.is_finite()).collect();
    let (Some(min), Some(max)) = (
        values.iter().copied().reduce(f64::min),
        values.iter().copied().reduce(f64::max),
    ) else {
        return Ok(Histogram::default());
    };

    if min == max {
        return Ok(Histogram {
            centers: vec![min],
            counts: vec![values.len()],
        });
    }

    let width = (max - min) / bin_count as f64;
    let edges: Vec<f64> = (0..=bin_count)
        .map(|i| if i == bin_count { max } else { min + i as f64 * width })
        .collect();

    let mut counts = vec![0usize; bin_count];
    for &value in &values {
        counts[bin_index(value, &edges)] += 1;
    }

    let centers = edges.windows(2).map(|pair| (pair[0] + pair[1]) / 2.0).collect();

    Ok(Histogram { centers, counts })
}

/// Bin for `value`, with half-open bins except the last
fn bin_index(value: f64, edges: &[f64]) -> usize {
    let bins = edges.len() - 1;
    let (min, max) = (edges[0], edges[bins]);
    let mut index = (((value - min) / (max - min)) * bins as f64) as usize;
    index = index.min(bins - 1);

    // Float rounding can land one bin off near an edge
    if index > 0 && value < edges[index] {
        index -= 1;
    } else if index + 1 < bins && value >= edges[index + 1] {
        index += 1;
    }
    index
}
