//! Fitness Scorer - Main coordinator for ranking a test result
//!
//! Ties the repository to the percentile engine, binner and summary
//! statistics, producing one serializable report per query.

use crate::config::AppConfig;
use crate::error::RankError;
use crate::loader::RegionLoader;
use crate::repository::{ScorePool, ScoreRepository};
use crate::schema::{Direction, EventKey, Gender, Region};
use crate::utils::{
    gap_to_threshold, histogram, percentile_rank, remove_outliers, top_decile_threshold, Grade,
    Histogram, PoolSummary,
};
use serde::Serialize;

/// Main fitness scorer
pub struct FitnessScorer {
    repository: ScoreRepository,
    bin_count: usize,
    remove_outliers: bool,
}

/// Ranking report for one event/gender pool and an optional personal score
///
/// With an empty pool every derived field is `None` and the histogram is
/// empty; `pool_size == 0` is the "no data" signal.
#[derive(Debug, Clone, Serialize)]
pub struct ScoreAnalysis {
    pub event: EventKey,
    pub display_name: &'static str,
    pub unit: &'static str,
    pub direction: Direction,
    pub gender: Gender,
    pub pool_size: usize,
    pub regions: Vec<Region>,
    pub summary: Option<PoolSummary>,
    pub score: Option<f64>,
    pub percentile: Option<f64>,
    pub grade: Option<Grade>,
    pub grade_label: Option<&'static str>,
    pub top_decile_threshold: Option<f64>,
    pub gap_to_top_decile: Option<f64>,
    pub histogram: Histogram,
}

impl ScoreAnalysis {
    pub fn has_data(&self) -> bool {
        self.pool_size > 0
    }
}

impl FitnessScorer {
    /// Load every region under `config.data_dir` and build a scorer
    pub fn new(config: &AppConfig) -> Self {
        let loader = RegionLoader::new(config.cache_capacity);
        Self::with_loader(&loader, config)
    }

    /// Build a scorer reusing an existing (possibly warm) loader
    pub fn with_loader(loader: &RegionLoader, config: &AppConfig) -> Self {
        tracing::info!("Loading regional results from {:?}", config.data_dir);
        let repository = loader.load_repository(&config.data_dir);
        Self::from_repository(repository, config.bin_count, config.remove_outliers)
    }

    pub fn from_repository(
        repository: ScoreRepository,
        bin_count: usize,
        remove_outliers: bool,
    ) -> Self {
        Self {
            repository,
            bin_count,
            remove_outliers,
        }
    }

    pub fn repository(&self) -> &ScoreRepository {
        &self.repository
    }

    /// Reference pool for a query, outlier-filtered when configured
    pub fn pool(&self, event: EventKey, gender: Gender) -> ScorePool {
        let pool = self.repository.scores_for(event, gender);
        if self.remove_outliers {
            ScorePool::from_unsorted(remove_outliers(&pool, event))
        } else {
            pool
        }
    }

    /// Rank `score` against the pooled results for `event` and `gender`
    ///
    /// Non-finite scores are treated as absent.
    pub fn analyze(
        &self,
        event: EventKey,
        gender: Gender,
        score: Option<f64>,
    ) -> Result<ScoreAnalysis, RankError> {
        let direction = event.direction();
        let pool = self.pool(event, gender);
        let score = score.filter(|s| s.is_finite());

        if pool.is_empty() {
            tracing::debug!("No {} samples for {}", gender.label(), event);
        }

        let percentile = score.and_then(|s| percentile_rank(s, &pool, direction));
        let grade = percentile.map(Grade::from_percentile);
        let threshold = top_decile_threshold(&pool, direction);
        let gap = score
            .zip(threshold)
            .map(|(s, t)| gap_to_threshold(s, t, direction));

        Ok(ScoreAnalysis {
            event,
            display_name: event.display_name(),
            unit: event.unit(),
            direction,
            gender,
            pool_size: pool.len(),
            regions: self.repository.contributing_regions(event, gender),
            summary: PoolSummary::from_sorted(&pool),
            score,
            percentile,
            grade,
            grade_label: grade.map(Grade::korean_label),
            top_decile_threshold: threshold,
            gap_to_top_decile: gap,
            histogram: histogram(&pool, self.bin_count)?,
        })
    }
}
