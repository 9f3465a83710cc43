//! Error types for the settlement importer.
//!
//! Decode and validation errors are per-line values recovered into the run's
//! counters; `ImportError` covers the failures that abort a whole run.

use thiserror::Error;

/// Result type alias for whole-run import operations
pub type Result<T> = std::result::Result<T, ImportError>;

/// A field-level decoding failure on a single detail line.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DecodeError {
    /// The line is too short to contain the requested field.
    #[error("field at position {start} (length {len}) lies past the end of a {line_len}-character line")]
    OutOfRange {
        start: usize,
        len: usize,
        line_len: usize,
    },

    /// The date field is not 8 digits forming a valid `YYYYMMDD` date.
    #[error("invalid event date {0:?}: expected 8 digits in YYYYMMDD form")]
    InvalidDate(String),

    /// The time field is neither blank nor 6 digits forming a valid `HHMMSS` time.
    #[error("invalid event time {0:?}: expected 6 digits in HHMMSS form")]
    InvalidTime(String),
}

/// A business-rule failure on a decoded record.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// A required field is empty after trimming.
    #[error("{0} is required")]
    MissingField(&'static str),

    /// An amount field is negative.
    #[error("{0} cannot be negative")]
    NegativeAmount(&'static str),

    /// The transaction code does not trim to exactly 32 characters.
    #[error("transaction_code must be exactly 32 characters, got {0}")]
    WrongCodeLength(usize),
}

/// A failure that aborts the whole import run.
#[derive(Error, Debug)]
pub enum ImportError {
    /// Failed to open or read the input
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The input yielded no lines at all
    #[error("input is empty")]
    EmptySource,

    /// The batch sink rejected the accepted records
    #[error("failed to persist batch: {0}")]
    Persistence(Box<dyn std::error::Error + Send + Sync>),

    /// CSV output error
    #[error("CSV output error: {0}")]
    Csv(#[from] csv::Error),

    /// Missing input file argument
    #[error("Missing input file argument. Usage: settlement-import <settlement.txt>")]
    MissingArgument,
}
