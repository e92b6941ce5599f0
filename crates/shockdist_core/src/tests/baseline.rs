//! Tests for baseline construction
//!
//! These tests verify:
//! - The grid spans the original income range with the configured size
//! - The original curve is evaluated on exactly that grid
//! - Degenerate inputs are rejected before anything is cached

use super::{dataset_from, sample_dataset};
use crate::baseline::Baseline;
use crate::config::{DEFAULT_GRID_POINTS, EstimatorConfig};
use crate::error::DatasetError;
use crate::kde::{BandwidthRule, WeightedKde};

#[test]
fn test_grid_spans_income_range() {
    let dataset = sample_dataset(3);
    let (min, max) = dataset.income_range();

    let baseline = Baseline::new(dataset, &EstimatorConfig::default()).unwrap();

    assert_eq!(baseline.grid().len(), DEFAULT_GRID_POINTS);
    assert_eq!(baseline.grid().min(), min);
    assert_eq!(baseline.grid().max(), max);
}

#[test]
fn test_original_curve_on_grid() {
    let baseline = Baseline::new(sample_dataset(4), &EstimatorConfig::default()).unwrap();
    let original = baseline.original();

    assert_eq!(original.x, baseline.grid().points());
    assert_eq!(original.len(), baseline.grid().len());
    assert!(original.y.iter().all(|y| y.is_finite() && *y >= 0.0));
    assert!(original.max_density() > 0.0);
}

#[test]
fn test_original_matches_direct_fit() {
    let dataset = sample_dataset(5);
    let kde = WeightedKde::fit(&dataset, BandwidthRule::Scott).unwrap();
    let baseline = Baseline::new(dataset, &EstimatorConfig::default()).unwrap();

    let direct = kde.evaluate(baseline.grid()).unwrap();
    assert_eq!(&direct, baseline.original());
    assert_eq!(baseline.bandwidth(), kde.bandwidth());
}

#[test]
fn test_configured_rule_and_grid_size() {
    let config = EstimatorConfig::default()
        .with_grid_points(250)
        .with_bandwidth(BandwidthRule::Silverman);
    let baseline = Baseline::new(sample_dataset(6), &config).unwrap();

    assert_eq!(baseline.grid().len(), 250);
    assert_eq!(baseline.rule(), BandwidthRule::Silverman);
}

#[test]
fn test_rejects_degenerate_dataset() {
    let flat = dataset_from(&[(700.0, 1.0, 1), (700.0, 2.0, 2)]);
    let err = Baseline::new(flat, &EstimatorConfig::default()).unwrap_err();
    assert_eq!(err, DatasetError::DegenerateIncome);

    let single = dataset_from(&[(700.0, 1.0, 1)]);
    assert!(Baseline::new(single, &EstimatorConfig::default()).is_err());
}

#[test]
fn test_rejects_tiny_grid() {
    let config = EstimatorConfig::default().with_grid_points(1);
    let err = Baseline::new(sample_dataset(7), &config).unwrap_err();
    assert_eq!(err, DatasetError::GridTooSmall { points: 1 });
}
