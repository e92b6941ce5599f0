//! Unshocked reference distribution, computed once per process

use crate::config::EstimatorConfig;
use crate::error::DatasetError;
use crate::kde::{BandwidthRule, WeightedKde};
use crate::model::{Dataset, DensityCurve, EvaluationGrid};

/// The loaded dataset together with its evaluation grid and original curve.
///
/// Built once at startup and shared read-only afterwards (typically behind an
/// `Arc`). Nothing hands out mutable access, so concurrent requests cannot
/// disturb it.
#[derive(Debug, Clone)]
pub struct Baseline {
    dataset: Dataset,
    grid: EvaluationGrid,
    original: DensityCurve,
    rule: BandwidthRule,
    bandwidth: f64,
}

impl Baseline {
    pub fn new(dataset: Dataset, config: &EstimatorConfig) -> Result<Self, DatasetError> {
        let kde = WeightedKde::fit(&dataset, config.bandwidth)?;
        let (min, max) = dataset.income_range();
        let grid = EvaluationGrid::linspace(min, max, config.grid_points)?;
        let original = kde.evaluate(&grid)?;

        tracing::debug!(
            records = dataset.len(),
            grid_points = grid.len(),
            min_income = min,
            max_income = max,
            bandwidth = kde.bandwidth(),
            "baseline distribution computed"
        );

        Ok(Self {
            dataset,
            grid,
            original,
            rule: config.bandwidth,
            bandwidth: kde.bandwidth(),
        })
    }

    pub fn dataset(&self) -> &Dataset {
        &self.dataset
    }

    pub fn grid(&self) -> &EvaluationGrid {
        &self.grid
    }

    pub fn original(&self) -> &DensityCurve {
        &self.original
    }

    /// Rule every shocked estimate must reuse
    pub fn rule(&self) -> BandwidthRule {
        self.rule
    }

    /// Bandwidth selected for the original sample
    pub fn bandwidth(&self) -> f64 {
        self.bandwidth
    }
}
