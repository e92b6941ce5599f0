//! Simulated survey data for demos and tests.
//!
//! Incomes are drawn from a normal distribution, weights are integer
//! expansion factors drawn uniformly, and each individual is assigned to a
//! sector uniformly at random.

use rand::{Rng, SeedableRng, rngs::SmallRng};
use rand_distr::{Distribution, Normal};
use serde::{Deserialize, Serialize};

use crate::error::SyntheticError;
use crate::model::{Dataset, Record, SectorId};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SyntheticConfig {
    pub records: usize,
    pub income_mean: f64,
    pub income_std_dev: f64,
    /// Weights are drawn from `1..max_weight`
    pub max_weight: u32,
    /// Sectors are numbered `1..=sectors`
    pub sectors: u32,
}

impl Default for SyntheticConfig {
    fn default() -> Self {
        Self {
            records: 10_000,
            income_mean: 800.0,
            income_std_dev: 200.0,
            max_weight: 10_000,
            sectors: 3,
        }
    }
}

/// Generate a dataset; the same seed always yields the same records
pub fn generate(config: &SyntheticConfig, seed: u64) -> Result<Dataset, SyntheticError> {
    if config.records == 0 {
        return Err(SyntheticError::InvalidConfig("records must be positive"));
    }
    if config.sectors == 0 {
        return Err(SyntheticError::InvalidConfig("sectors must be positive"));
    }
    if config.max_weight < 2 {
        return Err(SyntheticError::InvalidConfig("max_weight must be at least 2"));
    }

    let invalid = SyntheticError::InvalidDistributionParameters {
        mean: config.income_mean,
        std_dev: config.income_std_dev,
        reason: "mean must be finite and std_dev finite and non-negative",
    };
    if !config.income_mean.is_finite()
        || !config.income_std_dev.is_finite()
        || config.income_std_dev < 0.0
    {
        return Err(invalid);
    }
    let income = Normal::new(config.income_mean, config.income_std_dev).map_err(|_| invalid)?;

    let mut rng = SmallRng::seed_from_u64(seed);
    let records = (0..config.records)
        .map(|_| {
            let value = income.sample(&mut rng);
            let weight = rng.random_range(1..config.max_weight);
            let sector = rng.random_range(1..=config.sectors);
            Record::new(value, f64::from(weight), SectorId(sector))
        })
        .collect();

    Ok(Dataset::new(records)?)
}
