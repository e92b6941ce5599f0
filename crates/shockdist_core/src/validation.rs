//! Turning raw UI input into a validated `ShockSpec`

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::error::ShockSpecError;
use crate::model::{SectorId, ShockFactor, ShockSpec};

/// Shock input as a front end collects it: which sector boxes are checked and
/// what percentage sits in each sector's input field.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ShockRequest {
    #[serde(default)]
    pub selected_sectors: Vec<SectorId>,
    /// Percentage of original income retained, keyed by sector
    #[serde(default)]
    pub shock_percent: BTreeMap<SectorId, f64>,
}

impl ShockRequest {
    /// Validate against the sectors present in the dataset.
    ///
    /// Only selected sectors are shocked; percentages entered for unselected
    /// sectors are ignored. Repeated selections collapse to one entry.
    pub fn into_spec(&self, known_sectors: &[SectorId]) -> Result<ShockSpec, ShockSpecError> {
        let mut spec = ShockSpec::new();
        for &sector in &self.selected_sectors {
            if !known_sectors.contains(&sector) {
                return Err(ShockSpecError::UnknownSector { sector });
            }
            let percent = *self
                .shock_percent
                .get(&sector)
                .ok_or(ShockSpecError::MissingFactor { sector })?;
            let factor = ShockFactor::from_percent(percent)
                .ok_or(ShockSpecError::FactorOutOfRange { sector, percent })?;
            spec.insert(sector, factor);
        }
        Ok(spec)
    }
}
