//! Evaluation grid and density curves

use serde::{Deserialize, Serialize};

use crate::error::DatasetError;

/// Evenly spaced x positions at which every density curve is evaluated.
///
/// Derived once from the unshocked dataset so the original and shocked curves
/// always share the same x axis.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EvaluationGrid {
    points: Vec<f64>,
}

impl EvaluationGrid {
    /// `points` values from `min` to `max`, both endpoints included
    pub fn linspace(min: f64, max: f64, points: usize) -> Result<Self, DatasetError> {
        if points < 2 {
            return Err(DatasetError::GridTooSmall { points });
        }
        let step = (max - min) / (points - 1) as f64;
        let mut values: Vec<f64> = (0..points).map(|i| min + step * i as f64).collect();
        // Pin the last point so rounding never moves it off `max`
        values[points - 1] = max;
        Ok(Self { points: values })
    }

    pub fn points(&self) -> &[f64] {
        &self.points
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn min(&self) -> f64 {
        self.points.first().copied().unwrap_or(f64::NAN)
    }

    pub fn max(&self) -> f64 {
        self.points.last().copied().unwrap_or(f64::NAN)
    }
}

/// Density values paired with the grid they were evaluated on
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DensityCurve {
    pub x: Vec<f64>,
    pub y: Vec<f64>,
}

impl DensityCurve {
    pub fn new(grid: &EvaluationGrid, y: Vec<f64>) -> Self {
        debug_assert_eq!(grid.len(), y.len());
        Self {
            x: grid.points().to_vec(),
            y,
        }
    }

    pub fn len(&self) -> usize {
        self.y.len()
    }

    pub fn is_empty(&self) -> bool {
        self.y.is_empty()
    }

    /// Highest density value, 0 for an empty curve
    pub fn max_density(&self) -> f64 {
        self.y.iter().copied().fold(0.0, f64::max)
    }

    pub fn points(&self) -> impl Iterator<Item = (f64, f64)> + '_ {
        self.x.iter().copied().zip(self.y.iter().copied())
    }

    /// Largest pointwise |y - other.y|; curves must share a grid
    pub fn max_abs_diff(&self, other: &DensityCurve) -> f64 {
        self.y
            .iter()
            .zip(&other.y)
            .map(|(a, b)| (a - b).abs())
            .fold(0.0, f64::max)
    }
}
