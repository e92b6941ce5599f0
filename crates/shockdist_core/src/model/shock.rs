//! Shock factors and the per-sector shock specification

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::ids::SectorId;

/// Fraction of original income a shocked individual retains, in `[0, 1]`
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize)]
#[serde(try_from = "f64", into = "f64")]
pub struct ShockFactor(f64);

impl ShockFactor {
    /// Income left untouched
    pub const NONE: ShockFactor = ShockFactor(1.0);

    /// Build from a percentage in `[0, 100]` (100 = unchanged, 0 = income wiped out)
    pub fn from_percent(percent: f64) -> Option<Self> {
        if percent.is_finite() && (0.0..=100.0).contains(&percent) {
            Some(Self(percent / 100.0))
        } else {
            None
        }
    }

    /// Build from a fraction in `[0, 1]`
    pub fn from_fraction(fraction: f64) -> Option<Self> {
        if fraction.is_finite() && (0.0..=1.0).contains(&fraction) {
            Some(Self(fraction))
        } else {
            None
        }
    }

    pub fn fraction(self) -> f64 {
        self.0
    }

    pub fn percent(self) -> f64 {
        self.0 * 100.0
    }
}

impl TryFrom<f64> for ShockFactor {
    type Error = String;

    fn try_from(value: f64) -> Result<Self, Self::Error> {
        Self::from_fraction(value).ok_or_else(|| format!("shock factor {value} is outside [0, 1]"))
    }
}

impl From<ShockFactor> for f64 {
    fn from(factor: ShockFactor) -> Self {
        factor.0
    }
}

/// Mapping from sector to the factor applied to its incomes.
///
/// A sector missing from the map is not shocked. The map guarantees at most
/// one factor per sector.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ShockSpec {
    factors: BTreeMap<SectorId, ShockFactor>,
}

impl ShockSpec {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style insert
    #[must_use]
    pub fn with(mut self, sector: SectorId, factor: ShockFactor) -> Self {
        self.factors.insert(sector, factor);
        self
    }

    /// Set the factor for a sector, returning the one it replaced
    pub fn insert(&mut self, sector: SectorId, factor: ShockFactor) -> Option<ShockFactor> {
        self.factors.insert(sector, factor)
    }

    pub fn factor(&self, sector: SectorId) -> Option<ShockFactor> {
        self.factors.get(&sector).copied()
    }

    pub fn is_empty(&self) -> bool {
        self.factors.is_empty()
    }

    pub fn len(&self) -> usize {
        self.factors.len()
    }

    pub fn sectors(&self) -> impl Iterator<Item = SectorId> + '_ {
        self.factors.keys().copied()
    }

    pub fn iter(&self) -> impl Iterator<Item = (SectorId, ShockFactor)> + '_ {
        self.factors.iter().map(|(s, f)| (*s, *f))
    }
}

impl FromIterator<(SectorId, ShockFactor)> for ShockSpec {
    fn from_iter<T: IntoIterator<Item = (SectorId, ShockFactor)>>(iter: T) -> Self {
        Self {
            factors: iter.into_iter().collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_factor_bounds() {
        assert_eq!(ShockFactor::from_percent(60.0).map(ShockFactor::fraction), Some(0.6));
        assert!(ShockFactor::from_percent(0.0).is_some());
        assert!(ShockFactor::from_percent(100.0).is_some());
        assert!(ShockFactor::from_percent(-1.0).is_none());
        assert!(ShockFactor::from_percent(100.5).is_none());
        assert!(ShockFactor::from_percent(f64::NAN).is_none());
        assert!(ShockFactor::from_fraction(1.2).is_none());
    }

    #[test]
    fn test_spec_keeps_one_factor_per_sector() {
        let mut spec = ShockSpec::new().with(SectorId(1), ShockFactor::from_percent(50.0).unwrap());
        let replaced = spec.insert(SectorId(1), ShockFactor::from_percent(80.0).unwrap());

        assert_eq!(replaced.map(ShockFactor::percent), Some(50.0));
        assert_eq!(spec.len(), 1);
        assert_eq!(spec.factor(SectorId(1)).map(ShockFactor::percent), Some(80.0));
        assert_eq!(spec.factor(SectorId(2)), None);
    }

    #[test]
    fn test_factor_deserialize_rejects_out_of_range() {
        let ok: ShockSpec = serde_json::from_str(r#"{"1": 0.5, "3": 1.0}"#).unwrap();
        assert_eq!(ok.len(), 2);

        let bad: Result<ShockSpec, _> = serde_json::from_str(r#"{"1": 1.5}"#);
        assert!(bad.is_err());
    }
}
