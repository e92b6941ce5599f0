use serde::{Deserialize, Serialize};
use shockdist_core::BandwidthRule;
use shockdist_core::model::{DensityCurve, SectorId};
use std::collections::BTreeMap;

// ============================================================================
// Request Types
// ============================================================================

/// Widget state sent by the front end on every "apply" click
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ComputeRequest {
    /// Sectors whose checkbox is ticked
    #[serde(default)]
    pub selected_sectors: Vec<SectorId>,
    /// Percentage of income retained, per sector input box
    #[serde(default)]
    pub shock_percent: BTreeMap<SectorId, f64>,
    /// Reference line identifiers; unknown ones are ignored
    #[serde(default)]
    pub reference_lines: Vec<String>,
}

// ============================================================================
// Response Types
// ============================================================================

#[derive(Debug, Serialize)]
pub struct BaselineResponse {
    pub records: usize,
    pub sectors: Vec<SectorId>,
    pub grid_points: usize,
    pub bandwidth_rule: BandwidthRule,
    pub bandwidth: f64,
    pub original: DensityCurve,
}

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
}
