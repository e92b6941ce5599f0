//! Weighted Gaussian kernel density estimation.
//!
//! Each record contributes a Gaussian bump centred on its income, scaled by
//! its normalised weight. The bandwidth is the weighted standard deviation
//! times a rule-of-thumb factor computed from the effective sample size
//! `n_eff = 1 / sum(w_i^2)`:
//!
//! | Rule      | Factor                  |
//! |-----------|-------------------------|
//! | Scott     | n_eff^(-1/5)            |
//! | Silverman | (3 n_eff / 4)^(-1/5)    |
//!
//! The weighted variance uses the reliability-weights correction
//! `sum(w_i (x_i - mean)^2) / (1 - sum(w_i^2))`, which reduces to the usual
//! unbiased estimator when all weights are equal. The denominator is summed
//! as `sum_{i != j} w_i w_j` so that one dominant weight does not cancel it
//! to zero.
//!
//! Comparing two curves only makes sense when both were fitted with the same
//! rule, so callers pass the rule stored in the `Baseline` for every refit.

#[cfg(feature = "parallel")]
use rayon::prelude::*;
use serde::{Deserialize, Serialize};

use crate::error::DatasetError;
use crate::model::{Dataset, DensityCurve, EvaluationGrid};

/// 1 / sqrt(2 pi)
const INV_SQRT_2PI: f64 = 0.398_942_280_401_432_7;

/// Data-driven bandwidth selector
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BandwidthRule {
    #[default]
    Scott,
    Silverman,
}

impl BandwidthRule {
    /// Multiplier applied to the weighted standard deviation
    pub fn factor(self, effective_sample_size: f64) -> f64 {
        match self {
            Self::Scott => effective_sample_size.powf(-0.2),
            Self::Silverman => (effective_sample_size * 3.0 / 4.0).powf(-0.2),
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Self::Scott => "scott",
            Self::Silverman => "silverman",
        }
    }
}

impl std::str::FromStr for BandwidthRule {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "scott" => Ok(Self::Scott),
            "silverman" => Ok(Self::Silverman),
            other => Err(format!("unknown bandwidth rule '{other}'")),
        }
    }
}

/// A fitted weighted Gaussian KDE
#[derive(Debug, Clone)]
pub struct WeightedKde {
    samples: Vec<f64>,
    /// Normalised to sum to 1
    weights: Vec<f64>,
    bandwidth: f64,
    effective_sample_size: f64,
    rule: BandwidthRule,
}

impl WeightedKde {
    /// Fit to the incomes of `dataset`.
    ///
    /// Fails when the incomes hold fewer than two distinct values or the
    /// resulting bandwidth is zero or not finite.
    pub fn fit(dataset: &Dataset, rule: BandwidthRule) -> Result<Self, DatasetError> {
        let records = dataset.records();
        let first = records.first().ok_or(DatasetError::Empty)?.income;
        if records.iter().all(|r| r.income == first) {
            return Err(DatasetError::DegenerateIncome);
        }

        let total_weight = dataset.total_weight();
        let samples: Vec<f64> = dataset.incomes().collect();
        let weights: Vec<f64> = records.iter().map(|r| r.weight / total_weight).collect();

        let sum_sq: f64 = weights.iter().map(|w| w * w).sum();
        let effective_sample_size = 1.0 / sum_sq;

        let mean: f64 = samples.iter().zip(&weights).map(|(x, w)| w * x).sum();
        let spread: f64 = samples
            .iter()
            .zip(&weights)
            .map(|(x, w)| w * (x - mean).powi(2))
            .sum();
        let variance = spread / cross_weight(&weights);

        let bandwidth = variance.sqrt() * rule.factor(effective_sample_size);
        if !bandwidth.is_finite() || bandwidth <= 0.0 {
            return Err(DatasetError::DegenerateBandwidth { bandwidth });
        }

        tracing::debug!(
            records = samples.len(),
            effective_sample_size,
            bandwidth,
            rule = rule.name(),
            "fitted weighted KDE"
        );

        Ok(Self {
            samples,
            weights,
            bandwidth,
            effective_sample_size,
            rule,
        })
    }

    pub fn bandwidth(&self) -> f64 {
        self.bandwidth
    }

    pub fn effective_sample_size(&self) -> f64 {
        self.effective_sample_size
    }

    pub fn rule(&self) -> BandwidthRule {
        self.rule
    }

    /// Density at a single point
    pub fn density_at(&self, x: f64) -> f64 {
        let inv_h = 1.0 / self.bandwidth;
        let sum: f64 = self
            .samples
            .iter()
            .zip(&self.weights)
            .map(|(xi, w)| {
                let u = (x - xi) * inv_h;
                w * (-0.5 * u * u).exp()
            })
            .sum();
        sum * INV_SQRT_2PI * inv_h
    }

    /// Evaluate on every grid point.
    ///
    /// Points are independent, so the parallel and serial paths produce
    /// identical output.
    pub fn evaluate(&self, grid: &EvaluationGrid) -> Result<DensityCurve, DatasetError> {
        #[cfg(feature = "parallel")]
        let y: Vec<f64> = grid
            .points()
            .par_iter()
            .map(|&x| self.density_at(x))
            .collect();

        #[cfg(not(feature = "parallel"))]
        let y: Vec<f64> = grid.points().iter().map(|&x| self.density_at(x)).collect();

        if let Some((x, _)) = grid
            .points()
            .iter()
            .zip(&y)
            .find(|(_, density)| !density.is_finite())
        {
            return Err(DatasetError::NonFiniteDensity { x: *x });
        }

        Ok(DensityCurve::new(grid, y))
    }
}

/// `1 - sum(w_i^2)` for normalised weights, without the subtraction.
///
/// Each weight is multiplied by the sum of all the others, built from prefix
/// and suffix sums.
fn cross_weight(weights: &[f64]) -> f64 {
    let mut suffix = vec![0.0; weights.len()];
    let mut acc = 0.0;
    for (slot, w) in suffix.iter_mut().zip(weights).rev() {
        *slot = acc;
        acc += w;
    }

    let mut prefix = 0.0;
    let mut total = 0.0;
    for (w, after) in weights.iter().zip(&suffix) {
        total += w * (prefix + after);
        prefix += w;
    }
    total
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Record, SectorId};

    fn dataset(rows: &[(f64, f64)]) -> Dataset {
        Dataset::new(
            rows.iter()
                .map(|&(income, weight)| Record::new(income, weight, SectorId(1)))
                .collect(),
        )
        .unwrap()
    }

    #[test]
    fn test_scott_bandwidth_equal_weights() {
        // Unweighted sample 1..=5: std (ddof=1) = sqrt(2.5), n = 5
        let data = dataset(&[(1.0, 1.0), (2.0, 1.0), (3.0, 1.0), (4.0, 1.0), (5.0, 1.0)]);
        let kde = WeightedKde::fit(&data, BandwidthRule::Scott).unwrap();

        let expected = 2.5_f64.sqrt() * 5.0_f64.powf(-0.2);
        assert!((kde.bandwidth() - expected).abs() < 1e-12);
        assert!((kde.effective_sample_size() - 5.0).abs() < 1e-12);
    }

    #[test]
    fn test_silverman_is_wider_than_scott() {
        let data = dataset(&[(1.0, 2.0), (4.0, 1.0), (9.0, 3.0)]);
        let scott = WeightedKde::fit(&data, BandwidthRule::Scott).unwrap();
        let silverman = WeightedKde::fit(&data, BandwidthRule::Silverman).unwrap();
        assert!(silverman.bandwidth() > scott.bandwidth());
    }

    #[test]
    fn test_weight_scale_invariance() {
        let a = dataset(&[(10.0, 1.0), (20.0, 3.0), (35.0, 2.0)]);
        let b = dataset(&[(10.0, 100.0), (20.0, 300.0), (35.0, 200.0)]);
        let ka = WeightedKde::fit(&a, BandwidthRule::Scott).unwrap();
        let kb = WeightedKde::fit(&b, BandwidthRule::Scott).unwrap();

        assert!((ka.bandwidth() - kb.bandwidth()).abs() < 1e-12);
        assert!((ka.density_at(22.0) - kb.density_at(22.0)).abs() < 1e-15);
    }

    #[test]
    fn test_density_integrates_to_one() {
        let data = dataset(&[(100.0, 5.0), (140.0, 1.0), (180.0, 2.0), (260.0, 7.0)]);
        let kde = WeightedKde::fit(&data, BandwidthRule::Scott).unwrap();
        let h = kde.bandwidth();

        let grid = EvaluationGrid::linspace(100.0 - 8.0 * h, 260.0 + 8.0 * h, 4001).unwrap();
        let curve = kde.evaluate(&grid).unwrap();
        let dx = grid.points()[1] - grid.points()[0];
        let area: f64 = curve.y.iter().sum::<f64>() * dx;

        assert!((area - 1.0).abs() < 1e-3, "area was {area}");
    }

    #[test]
    fn test_heavier_weight_pulls_mass() {
        let data = dataset(&[(0.0, 9.0), (10.0, 1.0)]);
        let kde = WeightedKde::fit(&data, BandwidthRule::Scott).unwrap();
        assert!(kde.density_at(0.0) > kde.density_at(10.0));
    }

    #[test]
    fn test_rejects_single_distinct_income() {
        let data = dataset(&[(0.0, 1.0), (0.0, 4.0), (0.0, 2.0)]);
        assert_eq!(
            WeightedKde::fit(&data, BandwidthRule::Scott).unwrap_err(),
            DatasetError::DegenerateIncome
        );
    }

    #[test]
    fn test_cross_weight_matches_closed_form() {
        let weights = [0.1, 0.2, 0.3, 0.4];
        let sum_sq: f64 = weights.iter().map(|w| w * w).sum();
        assert!((cross_weight(&weights) - (1.0 - sum_sq)).abs() < 1e-15);
        assert_eq!(cross_weight(&[1.0]), 0.0);
    }

    #[test]
    fn test_dominant_weight_keeps_finite_bandwidth() {
        let data = dataset(&[(1.0, 1e17), (2.0, 1.0), (3.0, 1.0)]);
        let kde = WeightedKde::fit(&data, BandwidthRule::Scott).unwrap();

        assert!(kde.bandwidth().is_finite());
        assert!(kde.bandwidth() > 0.0);
        assert!(kde.density_at(1.0).is_finite());
    }

    #[test]
    fn test_evaluate_matches_pointwise_density() {
        let data = dataset(&[(120.0, 3.0), (180.0, 1.0), (240.0, 5.0), (400.0, 2.0)]);
        let kde = WeightedKde::fit(&data, BandwidthRule::Silverman).unwrap();
        let grid = EvaluationGrid::linspace(100.0, 420.0, 257).unwrap();

        let curve = kde.evaluate(&grid).unwrap();
        for (x, y) in grid.points().iter().zip(&curve.y) {
            assert_eq!(*y, kde.density_at(*x), "mismatch at x={x}");
        }
    }

    #[test]
    fn test_rule_from_str() {
        assert_eq!("Scott".parse::<BandwidthRule>(), Ok(BandwidthRule::Scott));
        assert_eq!("silverman".parse::<BandwidthRule>(), Ok(BandwidthRule::Silverman));
        assert!("lscv".parse::<BandwidthRule>().is_err());
    }
}
