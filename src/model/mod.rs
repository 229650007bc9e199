//! Data model types for cut optimization.

mod bar;
mod piece;
mod plan;

pub use bar::Bar;
pub use piece::{ExpandedPiece, PieceRequest};
pub use plan::CuttingPlan;
