//! Import orchestration.
//!
//! Streams lines from a reader, routes detail lines through decode and
//! validation, and hands the accepted batch to the sink in a single call.
//! One bad line never aborts a run; only an unreadable source, an empty
//! source, or a sink failure does.

use crate::decoder;
use crate::error::{ImportError, Result};
use crate::layout;
use crate::record::{RecordKind, SettlementRecord};
use crate::sink::BatchSink;
use crate::validate;
use log::{debug, warn};
use serde::Serialize;
use std::borrow::Cow;
use std::io::BufRead;

/// Default cap on the number of per-line errors carried in a result.
pub const DEFAULT_MAX_ERRORS: usize = 10;

/// Summary of one import run.
///
/// `total_lines == ignored + detail_lines` and
/// `detail_lines == saved + invalid` hold for every returned result.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ImportResult {
    /// Lines read from the source.
    pub total_lines: usize,

    /// Lines classified as detail records.
    pub detail_lines: usize,

    /// Detail lines accepted and handed to the sink.
    pub saved: usize,

    /// Blank, header, trailer, and unrecognized lines.
    pub ignored: usize,

    /// Detail lines that failed decode or validation.
    pub invalid: usize,

    /// Per-line failure reasons, truncated at the engine's error cap.
    /// `invalid` always reflects the true total.
    pub errors: Vec<LineError>,
}

/// One rejected line: 1-based source line number and the failure reason.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LineError {
    pub line: usize,
    pub reason: String,
}

/// The settlement import engine.
///
/// Stateless across runs; every call to [`ImportEngine::run`] owns its own
/// counters, batch, and error list.
pub struct ImportEngine {
    /// Maximum number of error entries retained per run.
    max_errors: usize,
}

impl ImportEngine {
    /// Creates an engine with the default error cap.
    pub fn new() -> Self {
        ImportEngine {
            max_errors: DEFAULT_MAX_ERRORS,
        }
    }

    /// Creates an engine retaining at most `max_errors` error entries per run.
    pub fn with_max_errors(max_errors: usize) -> Self {
        ImportEngine { max_errors }
    }

    /// Imports a settlement file in a single forward pass.
    ///
    /// Accepted records are handed to `sink` once, in file order, after the
    /// stream is exhausted. Fails without calling the sink if the source
    /// cannot be read or yields no lines; a sink failure fails the whole run.
    pub fn run<R: BufRead, S: BatchSink>(&self, reader: R, sink: &mut S) -> Result<ImportResult> {
        let mut result = ImportResult::default();
        let mut batch: Vec<SettlementRecord> = Vec::new();

        for (idx, read) in reader.lines().enumerate() {
            let line_number = idx + 1;
            let line = read?;
            result.total_lines += 1;

            if !RecordKind::of(&line).is_detail() {
                result.ignored += 1;
                continue;
            }
            result.detail_lines += 1;

            let padded = pad_to_min_length(&line);
            let outcome = decoder::decode(&padded)
                .map_err(|e| e.to_string())
                .and_then(|record| match validate::validate(&record) {
                    Ok(()) => Ok(record),
                    Err(e) => Err(e.to_string()),
                });

            match outcome {
                Ok(record) => {
                    debug!(
                        "line {}: accepted transaction {} for establishment {}",
                        line_number, record.transaction_code, record.establishment_code
                    );
                    batch.push(record);
                }
                Err(reason) => {
                    warn!("line {}: {}", line_number, reason);
                    result.invalid += 1;
                    if result.errors.len() < self.max_errors {
                        result.errors.push(LineError {
                            line: line_number,
                            reason,
                        });
                    }
                }
            }
        }

        if result.total_lines == 0 {
            return Err(ImportError::EmptySource);
        }

        sink.persist_all(&batch).map_err(ImportError::Persistence)?;
        result.saved = batch.len();

        Ok(result)
    }
}

impl Default for ImportEngine {
    fn default() -> Self {
        Self::new()
    }
}

/// Right-pads a line with spaces up to the detail layout's minimum length.
///
/// Upstream producers sometimes emit detail lines with trailing blanks
/// stripped. Padding only appends spaces; existing bytes are never touched,
/// and the appended fields decode per their own blank rules.
fn pad_to_min_length(line: &str) -> Cow<'_, str> {
    if line.len() >= layout::DETAIL_MIN_LENGTH {
        return Cow::Borrowed(line);
    }

    let mut padded = String::with_capacity(layout::DETAIL_MIN_LENGTH);
    padded.push_str(line);
    padded.extend(std::iter::repeat(' ').take(layout::DETAIL_MIN_LENGTH - line.len()));
    Cow::Owned(padded)
}
