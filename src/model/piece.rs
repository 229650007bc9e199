//! Piece requests and the per-unit pieces expanded from them.

use serde::{Deserialize, Serialize};

fn default_quantity() -> u32 {
    1
}

/// A class of required cut pieces: `quantity` copies of `length`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PieceRequest {
    /// Nominal piece length in mm.
    pub length: f64,
    /// Number of copies required.
    #[serde(default = "default_quantity")]
    pub quantity: u32,
    /// Free-form description shown in reports.
    #[serde(default)]
    pub label: String,
}

impl PieceRequest {
    /// Create a new piece request.
    pub fn new(length: f64, quantity: u32, label: impl Into<String>) -> Self {
        Self {
            length,
            quantity,
            label: label.into(),
        }
    }

    /// Expand into one piece per required unit.
    ///
    /// Ids are `"{label}-{n}"` with `n` counting from 1 within this request.
    pub fn expand(&self, request_index: usize, kerf: f64) -> Vec<ExpandedPiece> {
        (1..=self.quantity)
            .map(|n| ExpandedPiece {
                id: format!("{}-{}", self.label, n),
                label: self.label.clone(),
                length: self.length,
                effective_length: self.length + kerf,
                request_index,
            })
            .collect()
    }
}

/// One physical piece to cut, with its kerf allowance included.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExpandedPiece {
    /// Per-instance identifier (`label-n`).
    pub id: String,
    /// Label copied from the request.
    pub label: String,
    /// Nominal length in mm.
    pub length: f64,
    /// Length reserved on the bar: nominal length plus kerf.
    pub effective_length: f64,
    /// Index of the originating request in the input list.
    pub request_index: usize,
}
