//! Configuration constants and settings for the optimizer.

use crate::error::{OptimizeError, Result};
use serde::{Deserialize, Serialize};

/// Floating-point comparison epsilon (mm).
pub const EPS: f64 = 0.0001;

/// Default stock bar length in mm.
pub const DEFAULT_STOCK_LENGTH_MM: f64 = 6000.0;

/// Default kerf (blade width allowance per cut) in mm.
pub const DEFAULT_KERF_MM: f64 = 3.0;

/// Conversion factor: mm to m.
pub const CONV_MM_M: f64 = 1000.0;

/// Bin packing heuristic used to assign pieces to bars.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum PackingStrategy {
    /// First bar with enough room, scanning bars in creation order.
    #[default]
    FirstFitDecreasing,
    /// Bar left with the least remaining length after placement.
    BestFitDecreasing,
}

impl std::str::FromStr for PackingStrategy {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "first-fit" | "ffd" | "first-fit-decreasing" => Ok(PackingStrategy::FirstFitDecreasing),
            "best-fit" | "bfd" | "best-fit-decreasing" => Ok(PackingStrategy::BestFitDecreasing),
            other => Err(format!(
                "unknown strategy '{}' (expected first-fit or best-fit)",
                other
            )),
        }
    }
}

impl std::fmt::Display for PackingStrategy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PackingStrategy::FirstFitDecreasing => write!(f, "first-fit"),
            PackingStrategy::BestFitDecreasing => write!(f, "best-fit"),
        }
    }
}

/// Optimizer configuration.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct OptimizerConfig {
    /// Stock bar length in mm.
    pub stock_length: f64,
    /// Extra length consumed per cut in mm.
    pub kerf: f64,
    /// Packing heuristic.
    pub strategy: PackingStrategy,
}

impl Default for OptimizerConfig {
    fn default() -> Self {
        Self {
            stock_length: DEFAULT_STOCK_LENGTH_MM,
            kerf: DEFAULT_KERF_MM,
            strategy: PackingStrategy::default(),
        }
    }
}

impl OptimizerConfig {
    /// Create a configuration with the given stock length and kerf.
    pub fn new(stock_length: f64, kerf: f64) -> Self {
        Self {
            stock_length,
            kerf,
            ..Default::default()
        }
    }

    /// Check that stock length is positive and kerf is non-negative.
    pub fn validate(&self) -> Result<()> {
        if !self.stock_length.is_finite() || self.stock_length <= 0.0 {
            return Err(OptimizeError::InvalidStockLength {
                value: self.stock_length,
            });
        }
        if !self.kerf.is_finite() || self.kerf < 0.0 {
            return Err(OptimizeError::InvalidKerf { value: self.kerf });
        }
        Ok(())
    }
}

/// Utility functions for floating-point comparisons.
pub mod float_cmp {
    use super::EPS;

    /// Check if `room` can hold `length`. No tolerance upward.
    #[inline]
    pub fn fits(room: f64, length: f64) -> bool {
        room >= length
    }

    /// Check if a float is approximately zero.
    #[inline]
    pub fn approx_zero(a: f64) -> bool {
        a.abs() < EPS
    }
}
