//! Applying sector shocks to a dataset

use rustc_hash::FxHashMap;

use crate::model::{Dataset, Record, SectorId, ShockSpec};

/// Return a copy of `dataset` with every shocked sector's incomes scaled by its factor.
///
/// Records in sectors absent from `spec` are copied unchanged; weights and
/// sectors are never touched. `dataset` itself is left as it was.
pub fn apply_shock(dataset: &Dataset, spec: &ShockSpec) -> Dataset {
    if spec.is_empty() {
        return dataset.clone();
    }

    let factors: FxHashMap<SectorId, f64> = spec
        .iter()
        .map(|(sector, factor)| (sector, factor.fraction()))
        .collect();

    let records = dataset
        .iter()
        .map(|record| match factors.get(&record.sector) {
            Some(&factor) => Record {
                income: record.income * factor,
                ..*record
            },
            None => *record,
        })
        .collect();

    // Scaling a finite income by a factor in [0, 1] keeps it finite
    Dataset::from_validated(records)
}
