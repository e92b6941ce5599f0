mod curve;
mod ids;
mod markers;
mod records;
mod results;
mod shock;

pub use curve::{DensityCurve, EvaluationGrid};
pub use ids::SectorId;
pub use markers::{LineDash, MarkerCatalog, MarkerDefinition, MarkerStyle, ReferenceLine, ReferenceMarker};
pub use records::{Dataset, Record};
pub use results::ResultBundle;
pub use shock::{ShockFactor, ShockSpec};
