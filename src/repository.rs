//! Score Repository
//!
//! Holds every region's normalized records and pools scores for one
//! (event, gender) pair on demand. Pools are never cached: they are cheap to
//! rebuild and the underlying records never change after loading.

use crate::data::{normalize_region, NormalizedRecord};
use crate::schema::{EventKey, Gender, Region};
use rustc_hash::FxHashMap;
use serde::Serialize;
use serde_json::Value;
use std::ops::Deref;

/// Ascending sequence of valid scores for one event/gender pair
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct ScorePool(Vec<f64>);

impl ScorePool {
    /// Build a pool from scores in any order; non-finite values are discarded
    pub fn from_unsorted(mut scores: Vec<f64>) -> Self {
        scores.retain(|s| s.is_finite());
        scores.sort_by(f64::total_cmp);
        Self(scores)
    }

    pub fn as_slice(&self) -> &[f64] {
        &self.0
    }

    pub fn min(&self) -> Option<f64> {
        self.0.first().copied()
    }

    pub fn max(&self) -> Option<f64> {
        self.0.last().copied()
    }
}

impl Deref for ScorePool {
    type Target = [f64];

    fn deref(&self) -> &[f64] {
        &self.0
    }
}

impl From<Vec<f64>> for ScorePool {
    fn from(scores: Vec<f64>) -> Self {
        Self::from_unsorted(scores)
    }
}

/// Normalized records for all loaded regions
#[derive(Debug, Clone, Default)]
pub struct ScoreRepository {
    records: FxHashMap<Region, Vec<NormalizedRecord>>,
}

impl ScoreRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Normalize and store one region's raw collection, replacing earlier data
    pub fn insert_raw(&mut self, region: Region, raw: &Value) {
        self.insert_region(region, normalize_region(raw, region));
    }

    pub fn insert_region(&mut self, region: Region, records: Vec<NormalizedRecord>) {
        self.records.insert(region, records);
    }

    /// Loaded regions, in canonical order
    pub fn regions(&self) -> Vec<Region> {
        Region::ALL
            .into_iter()
            .filter(|region| self.records.contains_key(region))
            .collect()
    }

    pub fn records_for(&self, region: Region) -> &[NormalizedRecord] {
        self.records.get(&region).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn record_count(&self) -> usize {
        self.records.values().map(Vec::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.record_count() == 0
    }

    /// Pool every region's scores for `event` and `gender`
    ///
    /// Regions without a label for `event` contribute nothing. Records are
    /// matched by exact text on the region's native label and gender label.
    pub fn scores_for(&self, event: EventKey, gender: Gender) -> ScorePool {
        let scores = Region::ALL
            .into_iter()
            .flat_map(|region| self.matching_scores(region, event, gender))
            .collect();

        ScorePool::from_unsorted(scores)
    }

    /// Regions that contributed at least one sample to the pool
    pub fn contributing_regions(&self, event: EventKey, gender: Gender) -> Vec<Region> {
        Region::ALL
            .into_iter()
            .filter(|&region| self.matching_scores(region, event, gender).next().is_some())
            .collect()
    }

    fn matching_scores(
        &self,
        region: Region,
        event: EventKey,
        gender: Gender,
    ) -> impl Iterator<Item = f64> + '_ {
        let label = region.label_for(event);
        let records = match label {
            Some(_) => self.records_for(region),
            None => &[],
        };

        records
            .iter()
            .filter(move |record| {
                Some(record.event_label.as_str()) == label && record.gender == gender.label()
            })
            .map(|record| record.score)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn sample_repository() -> ScoreRepository {
        let mut repo = ScoreRepository::new();
        repo.insert_raw(
            Region::Seoul,
            &json!([
                {"성별": "남", "종목": "제자리멀리뛰기", "기록": 250},
                {"성별": "남", "종목": "제자리멀리뛰기", "기록": 230},
                {"성별": "여", "종목": "제자리멀리뛰기", "기록": 190},
                {"성별": "남", "종목": "10m왕복달리기", "기록": 8.2},
                {"성별": "남", "종목": "서전트점프", "기록": 60},
            ]),
        );
        repo.insert_raw(
            Region::Gwangju,
            &json!([
                {"성별": "남", "종목": "제자리멀리뛰기 기록", "기록": "230"},
                {"성별": "남", "종목": "10M 왕복 기록", "기록": 7.9},
            ]),
        );
        repo.insert_raw(
            Region::Jeju,
            &json!([
                // Jeju has no vertical jump entry in the registry
                {"성별": "남", "종목": "서전트점프", "기록": 75},
            ]),
        );
        repo
    }

    #[test]
    fn test_scores_pool_across_regions_sorted() {
        let repo = sample_repository();
        let pool = repo.scores_for(EventKey::StandingLongJump, Gender::Male);
        // Duplicate values from different people are kept
        assert_eq!(pool.as_slice(), &[230.0, 230.0, 250.0]);

        let dash = repo.scores_for(EventKey::Dash10m, Gender::Male);
        assert_eq!(dash.as_slice(), &[7.9, 8.2]);
    }

    #[test]
    fn test_gender_filter_is_exact() {
        let repo = sample_repository();
        let pool = repo.scores_for(EventKey::StandingLongJump, Gender::Female);
        assert_eq!(pool.as_slice(), &[190.0]);
    }

    #[test]
    fn test_unmapped_region_is_excluded() {
        let repo = sample_repository();
        let pool = repo.scores_for(EventKey::VerticalJump, Gender::Male);
        assert_eq!(pool.as_slice(), &[60.0]);
        assert_eq!(
            repo.contributing_regions(EventKey::VerticalJump, Gender::Male),
            vec![Region::Seoul]
        );
    }

    #[test]
    fn test_event_without_any_region_yields_empty_pool() {
        let repo = sample_repository();
        assert!(repo.scores_for(EventKey::LongRun, Gender::Male).is_empty());
        assert!(repo.scores_for(EventKey::FrontBend, Gender::Female).is_empty());
    }

    #[test]
    fn test_repository_bookkeeping() {
        let repo = sample_repository();
        assert_eq!(repo.regions(), vec![Region::Seoul, Region::Jeju, Region::Gwangju]);
        assert_eq!(repo.record_count(), 8);
        assert!(repo.records_for(Region::Daejeon).is_empty());
    }

    #[test]
    fn test_pool_from_unsorted_discards_non_finite() {
        let pool = ScorePool::from_unsorted(vec![3.0, f64::NAN, 1.0, f64::INFINITY, 2.0]);
        assert_eq!(pool.as_slice(), &[1.0, 2.0, 3.0]);
        assert_eq!(pool.min(), Some(1.0));
        assert_eq!(pool.max(), Some(3.0));
    }
}
