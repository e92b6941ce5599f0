//! Pipeline output

use serde::{Deserialize, Serialize};

use super::curve::DensityCurve;
use super::markers::ReferenceMarker;

/// Everything a front end needs to draw one before/after comparison.
///
/// `markers` is always present; an empty selection yields an empty list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResultBundle {
    pub original: DensityCurve,
    pub shocked: DensityCurve,
    pub markers: Vec<ReferenceMarker>,
}
