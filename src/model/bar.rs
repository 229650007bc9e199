//! Bar - One stock bar and the pieces cut from it.

use super::ExpandedPiece;
use crate::config::{float_cmp, EPS};
use crate::error::{OptimizeError, Result};
use serde::{Deserialize, Serialize};

/// A stock bar with its assigned pieces in placement order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Bar {
    /// Sequential bar number, starting at 1.
    pub id: usize,
    /// Stock length of the bar.
    pub capacity: f64,
    /// Pieces in cutting order.
    pub pieces: Vec<ExpandedPiece>,
    /// Sum of effective lengths of assigned pieces.
    pub used_length: f64,
    /// Capacity minus used length (the offcut).
    pub remaining_length: f64,
    /// Used length as a percentage of capacity.
    pub utilization_percent: f64,
}

impl Bar {
    /// Create an empty bar.
    pub fn new(id: usize, capacity: f64) -> Self {
        Self {
            id,
            capacity,
            pieces: Vec::new(),
            used_length: 0.0,
            remaining_length: capacity,
            utilization_percent: 0.0,
        }
    }

    /// Check whether the piece fits in the remaining length.
    pub fn can_fit(&self, piece: &ExpandedPiece) -> bool {
        float_cmp::fits(self.remaining_length, piece.effective_length)
    }

    /// Append a piece, refusing it if it does not fit.
    ///
    /// An offcut below `EPS` counts as none: `remaining_length` becomes 0 and
    /// `used_length` becomes `capacity`.
    pub fn push(&mut self, piece: ExpandedPiece) -> Result<()> {
        if !self.can_fit(&piece) {
            return Err(OptimizeError::BarOverflow {
                id: piece.id,
                bar: self.id,
                effective_length: piece.effective_length,
                remaining_length: self.remaining_length,
            });
        }

        self.used_length += piece.effective_length;
        self.remaining_length = self.capacity - self.used_length;
        if self.remaining_length < EPS {
            self.used_length = self.capacity;
            self.remaining_length = 0.0;
        }
        self.utilization_percent = self.used_length / self.capacity * 100.0;
        self.pieces.push(piece);
        Ok(())
    }

    /// Remaining length left after placing the piece.
    pub fn remaining_after(&self, piece: &ExpandedPiece) -> f64 {
        self.remaining_length - piece.effective_length
    }

    /// Number of pieces on this bar.
    pub fn piece_count(&self) -> usize {
        self.pieces.len()
    }

    /// Check if the bar has no offcut.
    pub fn is_full(&self) -> bool {
        float_cmp::approx_zero(self.remaining_length)
    }
}
