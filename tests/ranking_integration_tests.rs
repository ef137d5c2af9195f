//! Ranking Integration Tests
//!
//! Writes a small set of regional result files to a temporary data directory
//! and runs the full pipeline: loading, normalization, pooling and ranking.

use fitness_ranker::{
    percentile_rank, top_decile_threshold, AppConfig, Direction, EventKey, FitnessScorer, Gender,
    Grade, Region, RegionLoader,
};
use std::fs;
use std::path::Path;
use tempfile::TempDir;

fn write_region(dir: &Path, stem: &str, contents: &str) {
    fs::write(dir.join(format!("{}.json", stem)), contents).unwrap();
}

/// Three regions, each with its own label for the same events
fn sample_data_dir() -> TempDir {
    let dir = TempDir::new().unwrap();

    write_region(
        dir.path(),
        "seoul",
        r#"[
            {"성별": "남", "종목": "제자리멀리뛰기", "기록": 210},
            {"성별": "남", "종목": "제자리멀리뛰기", "기록": "230"},
            {"성별": "남", "종목": "제자리멀리뛰기", "기록": "결시"},
            {"성별": "여", "종목": "제자리멀리뛰기", "기록": 180},
            {"성별": "남", "종목": "10m왕복달리기", "기록": 8.6},
            {"성별": "남", "종목": "서전트점프", "기록": 55}
        ]"#,
    );
    write_region(
        dir.path(),
        "kwangju",
        r#"[
            {"성별": "남", "종목": "제자리멀리뛰기 기록", "기록": 250},
            {"성별": "남", "종목": "제자리멀리뛰기 기록", "기록": 230},
            {"성별": "남", "종목": "10M 왕복 기록", "기록": "7.9"},
            "corrupted row"
        ]"#,
    );
    write_region(
        dir.path(),
        "jeju",
        r#"[
            {"성별": "남", "종목": "제자리멀리뛰기", "기록": 270},
            {"성별": "남", "종목": "서전트점프", "기록": 80}
        ]"#,
    );

    dir
}

fn scorer_for(dir: &TempDir) -> FitnessScorer {
    let config = AppConfig {
        data_dir: dir.path().to_path_buf(),
        ..AppConfig::default()
    };
    FitnessScorer::new(&config)
}

#[test]
fn test_pools_across_regions_with_different_labels() {
    let dir = sample_data_dir();
    let scorer = scorer_for(&dir);

    let pool = scorer.repository().scores_for(EventKey::StandingLongJump, Gender::Male);
    assert_eq!(pool.as_slice(), &[210.0, 230.0, 230.0, 250.0, 270.0]);

    assert_eq!(
        scorer.repository().regions(),
        vec![Region::Seoul, Region::Jeju, Region::Gwangju]
    );
}

#[test]
fn test_region_without_label_contributes_nothing() {
    let dir = sample_data_dir();
    let scorer = scorer_for(&dir);

    // Jeju's vertical jump rows have no registry entry and are ignored
    let pool = scorer.repository().scores_for(EventKey::VerticalJump, Gender::Male);
    assert_eq!(pool.as_slice(), &[55.0]);
}

#[test]
fn test_full_analysis_higher_is_better() {
    let dir = sample_data_dir();
    let analysis = scorer_for(&dir)
        .analyze(EventKey::StandingLongJump, Gender::Male, Some(250.0))
        .unwrap();

    assert_eq!(analysis.pool_size, 5);
    assert_eq!(analysis.percentile, Some(60.0));
    assert_eq!(analysis.grade, Some(Grade::Average));
    assert_eq!(analysis.top_decile_threshold, Some(270.0));
    assert_eq!(analysis.gap_to_top_decile, Some(-20.0));
    assert_eq!(
        analysis.regions,
        vec![Region::Seoul, Region::Jeju, Region::Gwangju]
    );
    assert_eq!(analysis.histogram.total(), 5);
}

#[test]
fn test_full_analysis_lower_is_better() {
    let dir = sample_data_dir();
    let analysis = scorer_for(&dir)
        .analyze(EventKey::Dash10m, Gender::Male, Some(7.5))
        .unwrap();

    assert_eq!(analysis.pool_size, 2);
    assert_eq!(analysis.percentile, Some(100.0));
    assert_eq!(analysis.grade, Some(Grade::Excellent));
    assert_eq!(analysis.top_decile_threshold, Some(7.9));
}

#[test]
fn test_missing_data_dir_gives_empty_results() {
    let dir = TempDir::new().unwrap();
    let scorer = scorer_for(&dir);

    assert!(scorer.repository().is_empty());
    let analysis = scorer
        .analyze(EventKey::GripStrength, Gender::Female, Some(100.0))
        .unwrap();
    assert!(!analysis.has_data());
    assert_eq!(analysis.percentile, None);
}

#[test]
fn test_reference_scenarios() {
    let pool = [10.0, 20.0, 20.0, 30.0, 40.0];
    assert_eq!(percentile_rank(20.0, &pool, Direction::HigherIsBetter), Some(20.0));

    let dash_times = [5.0, 4.0, 3.0, 2.0, 1.0];
    assert_eq!(
        top_decile_threshold(&dash_times, Direction::LowerIsBetter),
        Some(1.0)
    );

    assert_eq!(percentile_rank(1.0, &[], Direction::HigherIsBetter), None);
    assert_eq!(top_decile_threshold(&[], Direction::LowerIsBetter), None);
}

#[test]
fn test_repeated_queries_are_identical() {
    let dir = sample_data_dir();
    let loader = RegionLoader::default();
    let config = AppConfig {
        data_dir: dir.path().to_path_buf(),
        ..AppConfig::default()
    };

    let first = FitnessScorer::with_loader(&loader, &config)
        .analyze(EventKey::StandingLongJump, Gender::Male, Some(231.0))
        .unwrap();
    let second = FitnessScorer::with_loader(&loader, &config)
        .analyze(EventKey::StandingLongJump, Gender::Male, Some(231.0))
        .unwrap();

    assert_eq!(
        serde_json::to_value(&first).unwrap(),
        serde_json::to_value(&second).unwrap()
    );
    assert_eq!(loader.cached_files(), 3);
}
