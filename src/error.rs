use thiserror::Error;

/// Invalid-argument errors shared by every module in this crate.
///
/// All of these are raised synchronously, before any computation or
/// allocation happens, and each message carries the offending value. Invalid
/// input is a programming error on the caller's side, so nothing here is
/// retried or recovered internally.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum Error {
    #[error("bound cannot be negative: {0}")]
    NegativeBound(i64),

    #[error("number must be positive: {0}")]
    NonPositive(i64),

    #[error("input cannot be empty")]
    EmptyInput,

    #[error("inputs must have equal length, got {left} and {right}")]
    LengthMismatch { left: usize, right: usize },

    #[error("selection count must be between 1 and {len}, got {n}")]
    SelectionOutOfRange { n: usize, len: usize },

    #[error("rotation amount must be less than {len}, got {positions}")]
    RotationOutOfRange { positions: usize, len: usize },

    #[error("min {min} cannot be greater than max {max}")]
    InvalidRange { min: i64, max: i64 },

    #[error("index {index} out of bounds for length {len}")]
    IndexOutOfBounds { index: usize, len: usize },

    #[error("start index {start} cannot be greater than end index {end}")]
    InvertedRange { start: usize, end: usize },

    #[error("matrix must be square: expected {expected} columns, row {row} has {actual}")]
    NotSquare {
        row: usize,
        expected: usize,
        actual: usize,
    },
}

pub type Result<T> = std::result::Result<T, Error>;
