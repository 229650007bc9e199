//! One-dimensional bin packing of pieces into stock bars.

use crate::config::{PackingStrategy, EPS};
use crate::error::{OptimizeError, Result};
use crate::model::{Bar, ExpandedPiece, PieceRequest};
use tracing::debug;

/// Expand requests into one piece per unit, in input order.
pub(crate) fn expand_requests(requests: &[PieceRequest], kerf: f64) -> Vec<ExpandedPiece> {
    requests
        .iter()
        .enumerate()
        .flat_map(|(idx, request)| request.expand(idx, kerf))
        .collect()
}

/// Check every request against the stock length.
///
/// Rejects non-positive or non-finite lengths, and any piece that cannot fit
/// on an empty bar once kerf is added.
pub(crate) fn check_requests(
    requests: &[PieceRequest],
    stock_length: f64,
    kerf: f64,
) -> Result<()> {
    for request in requests {
        if !request.length.is_finite() || request.length <= 0.0 {
            return Err(OptimizeError::InvalidLength {
                label: request.label.clone(),
                length: request.length,
            });
        }

        let effective_length = request.length + kerf;
        if request.quantity > 0 && effective_length > stock_length {
            return Err(OptimizeError::PieceTooLong {
                label: request.label.clone(),
                length: request.length,
                effective_length,
                stock_length,
            });
        }
    }
    Ok(())
}

/// Order pieces by effective length, longest first.
///
/// The sort is stable: equal lengths keep their expansion order.
pub(crate) fn sort_decreasing(pieces: &mut [ExpandedPiece]) {
    pieces.sort_by(|a, b| b.effective_length.total_cmp(&a.effective_length));
}

/// Pack pieces (already sorted) into bars with the given strategy.
///
/// Fails with `PieceTooLong` if a piece does not fit on an empty bar.
pub(crate) fn pack(
    pieces: Vec<ExpandedPiece>,
    stock_length: f64,
    strategy: PackingStrategy,
) -> Result<Vec<Bar>> {
    let mut bars: Vec<Bar> = Vec::new();

    for piece in pieces {
        let target = match strategy {
            PackingStrategy::FirstFitDecreasing => first_fit(&bars, &piece),
            PackingStrategy::BestFitDecreasing => best_fit(&bars, &piece),
        };

        match target {
            Some(idx) => {
                debug!("{} -> bar #{}", piece.id, bars[idx].id);
                bars[idx].push(piece)?;
            }
            None => {
                let mut bar = Bar::new(bars.len() + 1, stock_length);
                if !bar.can_fit(&piece) {
                    return Err(OptimizeError::PieceTooLong {
                        label: piece.label,
                        length: piece.length,
                        effective_length: piece.effective_length,
                        stock_length,
                    });
                }
                debug!("{} -> new bar #{}", piece.id, bar.id);
                bar.push(piece)?;
                bars.push(bar);
            }
        }
    }

    Ok(bars)
}

/// Index of the first bar, in creation order, with room for the piece.
fn first_fit(bars: &[Bar], piece: &ExpandedPiece) -> Option<usize> {
    bars.iter().position(|bar| bar.can_fit(piece))
}

/// Index of the bar that would be left with the smallest offcut.
///
/// Ties go to the earliest bar.
fn best_fit(bars: &[Bar], piece: &ExpandedPiece) -> Option<usize> {
    let mut best: Option<(usize, f64)> = None;

    for (idx, bar) in bars.iter().enumerate() {
        if !bar.can_fit(piece) {
            continue;
        }
        let left = bar.remaining_after(piece);
        match best {
            Some((_, best_left)) if left >= best_left - EPS => {}
            _ => best = Some((idx, left)),
        }
    }

    best.map(|(idx, _)| idx)
}
