//! Piece list parser module.

mod pieces;

pub use pieces::{parse_json, parse_piece_file, parse_text, PieceList};
