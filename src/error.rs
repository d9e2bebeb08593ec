//! Structured error types for every fallible subsystem in this crate.
//!
//! These replace the teacher's `failure`-crate `#[fail(display = "...")]`
//! derives with `thiserror`, its direct modern successor.

use thiserror::Error;

/// Errors from magic-multiplier discovery.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum MagicError {
    #[error("relevant-occupancy mask has {bits} set bits, outside the required [5,12] range")]
    MaskBitsOutOfRange { bits: u32 },
    #[error("no collision-free magic multiplier found within the iteration budget")]
    MagicNotFound,
}

/// Per-field FEN parsing errors.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum FenError {
    #[error("FEN is missing field {index} ({name})")]
    MissingField { index: usize, name: &'static str },
    #[error("piece placement row {row} is malformed")]
    InvalidRow { row: u8 },
    #[error("unrecognised piece character '{ch}'")]
    InvalidPieceChar { ch: char },
    #[error("piece placement row {row} does not cover exactly 8 files")]
    PieceRowInconsistent { row: u8 },
    #[error("active colour field must be 'w' or 'b', got '{found}'")]
    InvalidColor { found: String },
    #[error("castling rights field '{found}' is not '-' or a subset of KQkq")]
    InvalidCastling { found: String },
    #[error("en passant target '{found}' is not '-' or a valid algebraic square")]
    InvalidEnPassant { found: String },
    #[error("half-move clock '{found}' is not a valid non-negative integer")]
    InvalidHalfMove { found: String },
    #[error("full-move number '{found}' is not a valid positive integer")]
    InvalidFullMove { found: String },
    #[error("white piece set violates position invariants: {0}")]
    WhiteNotLogical(&'static str),
    #[error("black piece set violates position invariants: {0}")]
    BlackNotLogical(&'static str),
}

/// Errors from `BoardBuilder::build`.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum BoardBuildError {
    #[error("white piece set violates position invariants")]
    White,
    #[error("black piece set violates position invariants")]
    Black,
    #[error("half-move clock out of range")]
    HalfMove,
    #[error("en passant file out of range")]
    EnPassantFile,
}

/// Errors from the work queue.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum QueueError {
    #[error("work queue was constructed with zero workers")]
    NullQueue,
}
