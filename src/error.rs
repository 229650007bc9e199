//! Error types for cut optimization.

use std::path::PathBuf;
use thiserror::Error;

/// Error codes for optimizer failures.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCode {
    /// Input file not found (-1)
    FileNotFound = -1,
    /// Piece list is empty (-2)
    EmptyPieceList = -2,
    /// General parse error (-3)
    ParseError = -3,
    /// Every request has zero quantity (-4)
    NoPieces = -4,
    /// Validation reported errors (-5)
    ValidationFailed = -5,
    /// Non-positive or non-finite piece length (E100)
    InvalidLength = 100,
    /// Piece longer than the stock bar (E101)
    PieceTooLong = 101,
    /// Piece placed on a bar without enough room (E102)
    BarOverflow = 102,
    /// Non-positive or non-finite stock length (E200)
    InvalidStockLength = 200,
    /// Negative or non-finite kerf (E201)
    InvalidKerf = 201,
}

/// Main error type for the optimizer.
#[derive(Debug, Error)]
pub enum OptimizeError {
    #[error("File not found: {path}")]
    FileNotFound { path: PathBuf },

    #[error("Piece list is empty or invalid")]
    EmptyPieceList,

    #[error("No pieces to cut: every request has zero quantity")]
    NoPieces,

    #[error("Invalid length for piece '{label}': {length}")]
    InvalidLength { label: String, length: f64 },

    #[error("Piece '{label}' exceeds stock length: {length}mm + kerf = {effective_length}mm > {stock_length}mm")]
    PieceTooLong {
        label: String,
        length: f64,
        effective_length: f64,
        stock_length: f64,
    },

    #[error("Piece '{id}' does not fit on bar #{bar}: {effective_length}mm > {remaining_length}mm left")]
    BarOverflow {
        id: String,
        bar: usize,
        effective_length: f64,
        remaining_length: f64,
    },

    #[error("Invalid stock length: {value}")]
    InvalidStockLength { value: f64 },

    #[error("Invalid kerf: {value}")]
    InvalidKerf { value: f64 },

    #[error("Parse error at line {line}: {message}")]
    ParseError { line: usize, message: String },

    #[error("Validation failed: {0}")]
    ValidationFailed(String),

    #[error("Invalid JSON piece list: {0}")]
    InvalidJson(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl OptimizeError {
    /// Get the error code for this error.
    pub fn code(&self) -> ErrorCode {
        match self {
            OptimizeError::FileNotFound { .. } => ErrorCode::FileNotFound,
            OptimizeError::EmptyPieceList => ErrorCode::EmptyPieceList,
            OptimizeError::NoPieces => ErrorCode::NoPieces,
            OptimizeError::InvalidLength { .. } => ErrorCode::InvalidLength,
            OptimizeError::PieceTooLong { .. } => ErrorCode::PieceTooLong,
            OptimizeError::BarOverflow { .. } => ErrorCode::BarOverflow,
            OptimizeError::InvalidStockLength { .. } => ErrorCode::InvalidStockLength,
            OptimizeError::InvalidKerf { .. } => ErrorCode::InvalidKerf,
            OptimizeError::ParseError { .. } => ErrorCode::ParseError,
            OptimizeError::ValidationFailed(_) => ErrorCode::ValidationFailed,
            OptimizeError::InvalidJson(_) => ErrorCode::ParseError,
            OptimizeError::Io(_) => ErrorCode::FileNotFound,
        }
    }

    /// Get the numeric error code value.
    pub fn code_value(&self) -> i32 {
        self.code() as i32
    }
}

/// Result type alias for optimizer operations.
pub type Result<T> = std::result::Result<T, OptimizeError>;
