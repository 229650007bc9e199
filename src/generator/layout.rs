//! Visual cut layout: contiguous segments along each bar.

use crate::model::CuttingPlan;
use serde::{Deserialize, Serialize};

/// Label of the trailing offcut segment.
pub const REMAINDER_LABEL: &str = "Remainder";

/// One segment drawn along a bar.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VisualSegment {
    /// Piece id, or `remainder-{bar}` for the offcut.
    pub id: String,
    /// Piece label, or [`REMAINDER_LABEL`].
    pub label: String,
    /// Length shown to the operator (without kerf).
    pub display_length: f64,
    /// Length occupied on the bar (with kerf).
    pub actual_length: f64,
    /// Offset of the segment start from the bar start.
    pub start_position: f64,
    /// Offset of the segment end from the bar start.
    pub end_position: f64,
    /// Whether this segment is the offcut.
    pub is_remainder: bool,
}

/// Layout of a single bar.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VisualBar {
    /// Bar number.
    pub id: usize,
    /// Stock length.
    pub capacity: f64,
    /// Used length as a percentage of capacity.
    pub utilization_percent: f64,
    /// Segments in cutting order, offcut last.
    pub segments: Vec<VisualSegment>,
}

impl VisualBar {
    /// Segments that are actual pieces.
    pub fn piece_segments(&self) -> impl Iterator<Item = &VisualSegment> {
        self.segments.iter().filter(|s| !s.is_remainder)
    }

    /// The offcut segment, if the bar has one.
    pub fn remainder(&self) -> Option<&VisualSegment> {
        self.segments.iter().find(|s| s.is_remainder)
    }
}

/// Derive the visual layout of a plan.
///
/// Returns an empty layout for a plan that carries an error.
pub fn generate_cut_layout(plan: &CuttingPlan) -> Vec<VisualBar> {
    if !plan.is_ok() {
        return Vec::new();
    }

    plan.bars
        .iter()
        .map(|bar| {
            let mut segments = Vec::with_capacity(bar.pieces.len() + 1);
            let mut position = 0.0;

            for piece in &bar.pieces {
                segments.push(VisualSegment {
                    id: piece.id.clone(),
                    label: piece.label.clone(),
                    display_length: piece.length,
                    actual_length: piece.effective_length,
                    start_position: position,
                    end_position: position + piece.effective_length,
                    is_remainder: false,
                });
                position += piece.effective_length;
            }

            if bar.remaining_length > 0.0 {
                segments.push(VisualSegment {
                    id: format!("remainder-{}", bar.id),
                    label: REMAINDER_LABEL.to_string(),
                    display_length: bar.remaining_length,
                    actual_length: bar.remaining_length,
                    start_position: position,
                    end_position: plan.stock_length,
                    is_remainder: true,
                });
            }

            VisualBar {
                id: bar.id,
                capacity: plan.stock_length,
                utilization_percent: bar.utilization_percent,
                segments,
            }
        })
        .collect()
}
