//! # Settlement Import
//!
//! Imports bulk transaction-settlement files in a fixed-width positional
//! format. Each detail line is decoded into a structured record, validated
//! against business rules, and accumulated into a batch handed to a
//! persistence sink; a run summary reports how many lines were seen,
//! accepted, ignored, or rejected.
//!
//! ## Design Principles
//!
//! - **Centralized layout**: every field offset lives in one table
//! - **Minor-unit money**: amounts decode as scaled integers via `rust_decimal`
//! - **Partial-failure tolerance**: a bad line is counted, never fatal
//! - **Single sink call**: the accepted batch persists atomically, in file order
//!
//! ## Example
//!
//! ```no_run
//! use settlement_import::{CsvSink, ImportEngine};
//! use std::io::Cursor;
//!
//! let file = "0HEADER\n1...detail...\n9TRAILER\n";
//! let mut sink = CsvSink::new(std::io::stdout());
//! let result = ImportEngine::new().run(Cursor::new(file), &mut sink).unwrap();
//! eprintln!("saved {} of {} detail lines", result.saved, result.detail_lines);
//! ```

pub mod decimal;
pub mod decoder;
pub mod engine;
pub mod error;
pub mod layout;
pub mod record;
pub mod sink;
pub mod validate;

pub use decimal::Decimal2;
pub use engine::{ImportEngine, ImportResult, LineError, DEFAULT_MAX_ERRORS};
pub use error::{DecodeError, ImportError, Result, ValidationError};
pub use record::{RecordKind, SettlementRecord};
pub use sink::{BatchSink, CsvSink, SinkError};
