//! Integration tests for the shock pipeline
//!
//! Tests are organized by topic:
//! - `baseline` - Grid construction and the original curve
//! - `pipeline` - Shock application and re-estimation through `compute_result`
//! - `scenarios` - Small hand-checked datasets
//! - `concurrency` - Sharing one baseline across threads

mod baseline;

use crate::model::{Dataset, Record, SectorId};
use crate::synthetic::{SyntheticConfig, generate};

/// Synthetic dataset small enough to keep tests fast
pub(crate) fn sample_dataset(seed: u64) -> Dataset {
    let config = SyntheticConfig {
        records: 400,
        ..Default::default()
    };
    generate(&config, seed).unwrap()
}

pub(crate) fn dataset_from(rows: &[(f64, f64, u32)]) -> Dataset {
    Dataset::new(
        rows.iter()
            .map(|&(income, weight, sector)| Record::new(income, weight, SectorId(sector)))
            .collect(),
    )
    .unwrap()
}
