//! Per-request shock pipeline.
//!
//! `compute_result` is a pure function of the baseline, the shock
//! specification and the selected reference lines. It either returns a
//! complete `ResultBundle` or an error; the baseline is only ever read.

use crate::baseline::Baseline;
use crate::error::{DatasetError, PipelineError};
use crate::kde::{BandwidthRule, WeightedKde};
use crate::markers::assemble_markers_with;
use crate::model::{
    Dataset, DensityCurve, EvaluationGrid, MarkerCatalog, ReferenceLine, ResultBundle, ShockSpec,
};
use crate::shock::apply_shock;

/// Re-estimate the density of `dataset` on an existing grid.
///
/// Must be called with the grid and rule of the baseline so the result is
/// comparable with the original curve.
pub fn estimate(
    dataset: &Dataset,
    grid: &EvaluationGrid,
    rule: BandwidthRule,
) -> Result<DensityCurve, DatasetError> {
    WeightedKde::fit(dataset, rule)?.evaluate(grid)
}

/// Shock the baseline dataset and assemble the comparison with the default markers
pub fn compute_result(
    baseline: &Baseline,
    spec: &ShockSpec,
    lines: &[ReferenceLine],
) -> Result<ResultBundle, PipelineError> {
    compute_result_with(baseline, &MarkerCatalog::default(), spec, lines)
}

pub fn compute_result_with(
    baseline: &Baseline,
    catalog: &MarkerCatalog,
    spec: &ShockSpec,
    lines: &[ReferenceLine],
) -> Result<ResultBundle, PipelineError> {
    let shocked_data = apply_shock(baseline.dataset(), spec);
    let shocked = estimate(&shocked_data, baseline.grid(), baseline.rule()).inspect_err(|e| {
        tracing::debug!(error = %e, shocked_sectors = spec.len(), "shocked estimate failed");
    })?;

    Ok(ResultBundle {
        original: baseline.original().clone(),
        shocked,
        markers: assemble_markers_with(catalog, lines, baseline.original()),
    })
}
