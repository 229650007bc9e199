//! barcut-rs - Cutting-stock optimizer for profile and tube bars.
//!
//! Assigns required pieces to fixed-length stock bars with First-Fit
//! Decreasing bin packing, accounting for the kerf consumed by each cut, and
//! derives a visual cut layout and a text report from the resulting plan.
//!
//! # Example
//!
//! ```
//! use barcut_rs::{CutOptimizer, PieceRequest};
//!
//! let optimizer = CutOptimizer::new();
//! let plan = optimizer.optimize(&[PieceRequest::new(4000.0, 2, "A")]);
//! assert_eq!(plan.total_bars, 2);
//! println!("{}", optimizer.generate_cut_report(&plan));
//! ```

pub mod config;
pub mod error;
pub mod generator;
pub mod model;
pub mod optimizer;
pub mod parser;
pub mod validation;

// Re-exports for convenience
pub use config::{OptimizerConfig, PackingStrategy};
pub use error::{OptimizeError, Result};
pub use generator::{generate_cut_layout, generate_cut_report, VisualBar, VisualSegment};
pub use model::{Bar, CuttingPlan, ExpandedPiece, PieceRequest};
pub use optimizer::CutOptimizer;
pub use parser::{parse_piece_file, PieceList};
pub use validation::{quick_validate, validate_requests, ValidationResult};

/// Optimize the piece list stored in a file.
///
/// Stock length and kerf found in the file override the defaults. Validation
/// findings are logged, and any validation error fails with `ValidationFailed`.
pub fn optimize_piece_file(input_path: &std::path::Path) -> Result<CuttingPlan> {
    let list = parse_piece_file(input_path)?;

    let mut config = OptimizerConfig::default();
    list.apply_to(&mut config);

    quick_validate(&list.pieces, &config)?;

    CutOptimizer::with_config(config).try_optimize(&list.pieces)
}
