//! CuttingPlan - Result of one optimization run.

use super::Bar;
use crate::config::{OptimizerConfig, PackingStrategy};
use serde::{Deserialize, Serialize};

/// Bars produced by the optimizer plus plan-level totals.
///
/// A plan that failed validation carries `error` and no bars; check
/// [`CuttingPlan::is_ok`] before reading the other fields.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CuttingPlan {
    /// Bars in creation order.
    pub bars: Vec<Bar>,
    /// Number of bars.
    pub total_bars: usize,
    /// Sum of remaining length over all bars.
    pub total_waste_length: f64,
    /// Share of the consumed stock that ended up in pieces.
    pub global_efficiency_percent: f64,
    /// Stock length the plan was computed for.
    pub stock_length: f64,
    /// Kerf added to each piece.
    pub kerf: f64,
    /// Heuristic that produced the plan.
    pub strategy: PackingStrategy,
    /// Reason the plan could not be computed.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl CuttingPlan {
    /// Build a plan from packed bars, computing the totals.
    pub fn from_bars(bars: Vec<Bar>, config: &OptimizerConfig) -> Self {
        let total_bars = bars.len();
        let total_waste_length: f64 = bars.iter().map(|b| b.remaining_length).sum();
        let total_material = total_bars as f64 * config.stock_length;
        let global_efficiency_percent = if total_material > 0.0 {
            (total_material - total_waste_length) / total_material * 100.0
        } else {
            0.0
        };

        Self {
            bars,
            total_bars,
            total_waste_length,
            global_efficiency_percent,
            stock_length: config.stock_length,
            kerf: config.kerf,
            strategy: config.strategy,
            error: None,
        }
    }

    /// Degenerate plan reporting why optimization failed.
    pub fn failed(message: impl Into<String>, config: &OptimizerConfig) -> Self {
        Self {
            bars: Vec::new(),
            total_bars: 0,
            total_waste_length: 0.0,
            global_efficiency_percent: 0.0,
            stock_length: config.stock_length,
            kerf: config.kerf,
            strategy: config.strategy,
            error: Some(message.into()),
        }
    }

    /// Check if the plan was computed successfully.
    pub fn is_ok(&self) -> bool {
        self.error.is_none()
    }

    /// Total number of pieces placed.
    pub fn piece_count(&self) -> usize {
        self.bars.iter().map(|b| b.pieces.len()).sum()
    }

    /// Total waste in meters.
    pub fn total_waste_meters(&self) -> f64 {
        self.total_waste_length / crate::config::CONV_MM_M
    }
}
