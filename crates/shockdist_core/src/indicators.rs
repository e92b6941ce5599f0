//! Poverty and inequality indicators before and after a shock.
//!
//! All statistics are weighted by the sampling weight of each record.

use serde::{Deserialize, Serialize};

use crate::baseline::Baseline;
use crate::model::{Dataset, MarkerCatalog, ReferenceLine, ShockSpec};
use crate::shock::apply_shock;

/// Weighted share of the population strictly below a reference threshold
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ThresholdShare {
    pub line: ReferenceLine,
    pub threshold: f64,
    pub share: f64,
}

/// Summary statistics of one income distribution
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DistributionIndicators {
    pub mean_income: f64,
    /// `None` when total income is not positive
    pub gini: Option<f64>,
    /// One entry per reference line, in `ReferenceLine::ALL` order
    pub below_threshold: Vec<ThresholdShare>,
}

impl DistributionIndicators {
    pub fn compute(dataset: &Dataset, catalog: &MarkerCatalog) -> Self {
        let total_weight = dataset.total_weight();
        let mean_income = dataset.iter().map(|r| r.weight * r.income).sum::<f64>() / total_weight;

        let below_threshold = ReferenceLine::ALL
            .into_iter()
            .map(|line| {
                let threshold = catalog.threshold(line);
                let below: f64 = dataset
                    .iter()
                    .filter(|r| r.income < threshold)
                    .map(|r| r.weight)
                    .sum();
                ThresholdShare {
                    line,
                    threshold,
                    share: below / total_weight,
                }
            })
            .collect();

        Self {
            mean_income,
            gini: weighted_gini(dataset),
            below_threshold,
        }
    }

    pub fn share_below(&self, line: ReferenceLine) -> Option<f64> {
        self.below_threshold
            .iter()
            .find(|s| s.line == line)
            .map(|s| s.share)
    }
}

/// Weighted Gini coefficient from the Lorenz curve.
///
/// `G = 1 - sum((p_i - p_{i-1}) * (L_i + L_{i-1}))` over records sorted by
/// income, where `p` is the cumulative population share and `L` the
/// cumulative income share.
pub fn weighted_gini(dataset: &Dataset) -> Option<f64> {
    let mut pairs: Vec<(f64, f64)> = dataset.iter().map(|r| (r.income, r.weight)).collect();
    pairs.sort_by(|a, b| a.0.total_cmp(&b.0));

    let total_weight: f64 = pairs.iter().map(|(_, w)| w).sum();
    let total_income: f64 = pairs.iter().map(|(x, w)| x * w).sum();
    if total_income <= 0.0 {
        return None;
    }

    let mut area = 0.0;
    let mut prev_lorenz = 0.0;
    let mut cum_income = 0.0;
    for (income, weight) in pairs {
        cum_income += income * weight;
        let lorenz = cum_income / total_income;
        area += (weight / total_weight) * (lorenz + prev_lorenz);
        prev_lorenz = lorenz;
    }
    Some(1.0 - area)
}

/// Shocked minus original, per indicator
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IndicatorChange {
    pub mean_income: f64,
    pub gini: Option<f64>,
    pub below_threshold: Vec<ThresholdShare>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IndicatorComparison {
    pub original: DistributionIndicators,
    pub shocked: DistributionIndicators,
    pub change: IndicatorChange,
}

pub fn compare_indicators(
    original: &Dataset,
    shocked: &Dataset,
    catalog: &MarkerCatalog,
) -> IndicatorComparison {
    let before = DistributionIndicators::compute(original, catalog);
    let after = DistributionIndicators::compute(shocked, catalog);

    let change = IndicatorChange {
        mean_income: after.mean_income - before.mean_income,
        gini: before.gini.zip(after.gini).map(|(b, a)| a - b),
        below_threshold: before
            .below_threshold
            .iter()
            .zip(&after.below_threshold)
            .map(|(b, a)| ThresholdShare {
                share: a.share - b.share,
                ..*b
            })
            .collect(),
    };

    IndicatorComparison {
        original: before,
        shocked: after,
        change,
    }
}

/// Apply `spec` to the baseline dataset and compare indicators
pub fn indicators_for_shock(
    baseline: &Baseline,
    catalog: &MarkerCatalog,
    spec: &ShockSpec,
) -> IndicatorComparison {
    let shocked = apply_shock(baseline.dataset(), spec);
    compare_indicators(baseline.dataset(), &shocked, catalog)
}
