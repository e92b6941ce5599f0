//! Sector income shocks and their effect on a weighted income distribution
//!
//! This crate takes a survey-style dataset (income, sampling weight, sector),
//! applies multiplicative shocks to selected sectors and re-estimates the
//! income density with a weighted Gaussian KDE. It supports:
//! - A `Baseline` computed once: evaluation grid plus original density curve
//! - Pure, per-request shock application and re-estimation on the same grid
//! - Policy reference markers (minimum wage, poverty and vulnerability lines)
//! - Poverty headcount and Gini indicators before and after a shock
//! - CSV loading/writing and synthetic data generation
//!
//! # Example
//!
//! ```ignore
//! use shockdist_core::{Baseline, EstimatorConfig, compute_result};
//! use shockdist_core::model::{ReferenceLine, SectorId, ShockFactor, ShockSpec};
//!
//! let dataset = shockdist_core::io::load_csv("income_data.csv".as_ref())?;
//! let baseline = Baseline::new(dataset, &EstimatorConfig::default())?;
//!
//! let spec = ShockSpec::new().with(SectorId(1), ShockFactor::from_percent(60.0).unwrap());
//! let bundle = compute_result(&baseline, &spec, &[ReferenceLine::PovertyLine])?;
//! ```

#![warn(clippy::all)]

// ============================================================================
// Core modules
// ============================================================================

pub mod baseline;
pub mod config;
pub mod error;
pub mod indicators;
pub mod kde;
pub mod markers;
pub mod pipeline;
pub mod shock;
pub mod validation;

// ============================================================================
// Data sources
// ============================================================================

pub mod io;
pub mod synthetic;

// ============================================================================
// Type definition modules
// ============================================================================

pub mod model;

// ============================================================================
// Test modules
// ============================================================================

#[cfg(test)]
mod tests;

// ============================================================================
// Public re-exports for convenience
// ============================================================================

pub use baseline::Baseline;
pub use config::EstimatorConfig;
pub use kde::BandwidthRule;
pub use pipeline::{compute_result, compute_result_with, estimate};
pub use shock::apply_shock;
pub use validation::ShockRequest;
