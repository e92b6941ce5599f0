use crate::error::ApiResult;
use crate::models::ComputeRequest;
use shockdist_core::ShockRequest;
use shockdist_core::model::{ReferenceLine, SectorId, ShockSpec};

/// Validate a compute request against the loaded sectors.
///
/// Returns the shock specification and the recognised reference lines.
pub fn validate_compute_request(
    req: &ComputeRequest,
    known_sectors: &[SectorId],
) -> ApiResult<(ShockSpec, Vec<ReferenceLine>)> {
    let shock = ShockRequest {
        selected_sectors: req.selected_sectors.clone(),
        shock_percent: req.shock_percent.clone(),
    };
    let spec = shock.into_spec(known_sectors)?;
    let lines = ReferenceLine::parse_selection(&req.reference_lines);
    Ok((spec, lines))
}
