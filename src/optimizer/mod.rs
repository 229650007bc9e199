//! Cutting-stock optimization.

mod cut_optimizer;
mod packing;

pub use cut_optimizer::CutOptimizer;
