//! Identifiers for dataset entities

use std::fmt;

use serde::{Deserialize, Serialize};

/// Productive sector an individual's income comes from (1 = transport, 2 = construction, ...)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SectorId(pub u32);

impl fmt::Display for SectorId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
