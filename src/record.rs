//! Settlement record model and line classification.

use crate::decimal::Decimal2;
use crate::layout;
use chrono::{NaiveDate, NaiveTime};
use serde::Serialize;

/// A decoded detail record from a settlement file.
///
/// Created by the decoder, checked once by the validator, and handed to the
/// batch sink unchanged. Never mutated after validation.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SettlementRecord {
    /// Merchant establishment identifier, trimmed. Required.
    pub establishment_code: String,

    /// Calendar date of the transaction event.
    pub event_date: NaiveDate,

    /// Time of day of the event; `None` when the source field is blank.
    pub event_time: Option<NaiveTime>,

    /// Card network / issuer label; `None` when blank after trim.
    pub brand: Option<String>,

    /// Gross amount, decoded from minor currency units.
    pub total_amount: Decimal2,

    /// Opaque 32-character transaction identifier, trimmed.
    pub transaction_code: String,

    /// Net amount after fees; zero when the source field is blank.
    pub net_amount: Decimal2,
}

/// Classification of a raw input line.
///
/// Only `Detail` lines are routed to the decoder. Classification inspects at
/// most the first character and never requires a minimum line length.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RecordKind {
    /// A transaction detail line, marked by a leading `'1'`.
    Detail,

    /// An empty or all-whitespace line.
    Blank,

    /// A header, trailer, or unrecognized line.
    Other,
}

impl RecordKind {
    /// Classifies a raw line by its first character.
    pub fn of(line: &str) -> RecordKind {
        let trimmed = line.trim();
        if trimmed.is_empty() {
            return RecordKind::Blank;
        }

        match line.chars().next() {
            Some(layout::DETAIL_MARKER) => RecordKind::Detail,
            _ => RecordKind::Other,
        }
    }

    /// Returns `true` for lines that should be decoded.
    pub fn is_detail(&self) -> bool {
        matches!(self, RecordKind::Detail)
    }
}
