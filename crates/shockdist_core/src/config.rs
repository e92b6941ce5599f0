//! Estimator configuration

use serde::{Deserialize, Serialize};

use crate::kde::BandwidthRule;

/// Number of evaluation points used when nothing else is configured
pub const DEFAULT_GRID_POINTS: usize = 1000;

fn default_grid_points() -> usize {
    DEFAULT_GRID_POINTS
}

/// Settings fixed for the lifetime of a `Baseline`.
///
/// Both apply to the original curve and to every shocked curve derived from
/// it; neither can be changed per request.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EstimatorConfig {
    #[serde(default = "default_grid_points")]
    pub grid_points: usize,
    #[serde(default)]
    pub bandwidth: BandwidthRule,
}

impl Default for EstimatorConfig {
    fn default() -> Self {
        Self {
            grid_points: DEFAULT_GRID_POINTS,
            bandwidth: BandwidthRule::default(),
        }
    }
}

impl EstimatorConfig {
    #[must_use]
    pub fn with_grid_points(mut self, grid_points: usize) -> Self {
        self.grid_points = grid_points;
        self
    }

    #[must_use]
    pub fn with_bandwidth(mut self, bandwidth: BandwidthRule) -> Self {
        self.bandwidth = bandwidth;
        self
    }
}
