//! CutOptimizer - Stock length and kerf settings plus the optimize entry points.

use crate::config::{OptimizerConfig, PackingStrategy};
use crate::error::{OptimizeError, Result};
use crate::generator::{generate_cut_layout, generate_cut_report, VisualBar};
use crate::model::{CuttingPlan, PieceRequest};
use tracing::{debug, info, warn};

use super::packing::{check_requests, expand_requests, pack, sort_decreasing};

/// Cutting-stock optimizer for one stock length and kerf.
///
/// Each call to [`CutOptimizer::optimize`] builds a fresh plan; the optimizer
/// itself only holds its configuration.
#[derive(Debug, Clone, Default)]
pub struct CutOptimizer {
    config: OptimizerConfig,
}

impl CutOptimizer {
    /// Create an optimizer with the default 6000 mm stock and 3 mm kerf.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an optimizer from an explicit configuration.
    pub fn with_config(config: OptimizerConfig) -> Self {
        Self { config }
    }

    /// Current configuration.
    pub fn config(&self) -> &OptimizerConfig {
        &self.config
    }

    pub fn stock_length(&self) -> f64 {
        self.config.stock_length
    }

    pub fn kerf(&self) -> f64 {
        self.config.kerf
    }

    /// Set the stock bar length in mm. Checked when optimizing.
    pub fn set_stock_length(&mut self, value: f64) {
        self.config.stock_length = value;
    }

    /// Set the kerf in mm. Checked when optimizing.
    pub fn set_kerf(&mut self, value: f64) {
        self.config.kerf = value;
    }

    /// Select the packing heuristic.
    pub fn set_strategy(&mut self, strategy: PackingStrategy) {
        self.config.strategy = strategy;
    }

    /// Optimize, reporting failures through the plan's `error` field.
    pub fn optimize(&self, pieces: &[PieceRequest]) -> CuttingPlan {
        match self.try_optimize(pieces) {
            Ok(plan) => plan,
            Err(e) => {
                warn!("Optimization failed: {}", e);
                CuttingPlan::failed(e.to_string(), &self.config)
            }
        }
    }

    /// Optimize, returning a typed error for invalid input or configuration.
    pub fn try_optimize(&self, pieces: &[PieceRequest]) -> Result<CuttingPlan> {
        if pieces.is_empty() {
            return Err(OptimizeError::EmptyPieceList);
        }

        self.config.validate()?;
        check_requests(pieces, self.config.stock_length, self.config.kerf)?;

        let mut expanded = expand_requests(pieces, self.config.kerf);
        if expanded.is_empty() {
            return Err(OptimizeError::NoPieces);
        }

        debug!(
            "Packing {} piece(s) from {} request(s) with {}",
            expanded.len(),
            pieces.len(),
            self.config.strategy
        );

        sort_decreasing(&mut expanded);
        let bars = pack(expanded, self.config.stock_length, self.config.strategy)?;
        let plan = CuttingPlan::from_bars(bars, &self.config);

        info!(
            "{} bar(s) of {}mm, efficiency {:.2}%, waste {}mm",
            plan.total_bars,
            self.config.stock_length,
            plan.global_efficiency_percent,
            plan.total_waste_length
        );

        Ok(plan)
    }

    /// Visual layout of a plan.
    pub fn generate_cut_layout(&self, plan: &CuttingPlan) -> Vec<VisualBar> {
        generate_cut_layout(plan)
    }

    /// Text report of a plan.
    pub fn generate_cut_report(&self, plan: &CuttingPlan) -> String {
        generate_cut_report(plan)
    }
}
