//! Field extraction and decoding of detail lines.
//!
//! Extraction slices the line by the 1-based offsets declared in [`crate::layout`].
//! The layout is ASCII-only; offsets are byte offsets, and a slice that would
//! split a multi-byte character fails the same way as one past the end.

use crate::decimal::Decimal2;
use crate::error::DecodeError;
use crate::layout::{self, Field};
use crate::record::SettlementRecord;
use chrono::{NaiveDate, NaiveTime};

/// Returns the substring occupied by `field`, or `OutOfRange` if the line
/// cannot contain it.
pub fn extract(line: &str, field: Field) -> Result<&str, DecodeError> {
    let start = field.start - 1;
    line.get(start..start + field.len)
        .ok_or(DecodeError::OutOfRange {
            start: field.start,
            len: field.len,
            line_len: line.len(),
        })
}

/// Decodes one detail line into a [`SettlementRecord`].
///
/// The line must already be at least [`layout::DETAIL_MIN_LENGTH`] long; the
/// orchestrator pads shorter lines before calling this.
pub fn decode(line: &str) -> Result<SettlementRecord, DecodeError> {
    let establishment_code = extract(line, layout::ESTABLISHMENT_CODE)?.trim().to_string();
    let event_date = decode_date(extract(line, layout::EVENT_DATE)?)?;
    let event_time = decode_time(extract(line, layout::EVENT_TIME)?)?;
    let transaction_code = extract(line, layout::TRANSACTION_CODE)?.trim().to_string();
    let total_amount = decode_money(extract(line, layout::TOTAL_AMOUNT)?);
    let net_amount = decode_money(extract(line, layout::NET_AMOUNT)?);
    let brand = match extract(line, layout::BRAND)?.trim() {
        "" => None,
        label => Some(label.to_string()),
    };

    Ok(SettlementRecord {
        establishment_code,
        event_date,
        event_time,
        brand,
        total_amount,
        transaction_code,
        net_amount,
    })
}

/// Decodes an 8-character `YYYYMMDD` field. The field must be exactly 8 ASCII
/// digits forming a real calendar date.
fn decode_date(raw: &str) -> Result<NaiveDate, DecodeError> {
    if raw.len() != 8 || !raw.bytes().all(|b| b.is_ascii_digit()) {
        return Err(DecodeError::InvalidDate(raw.to_string()));
    }

    NaiveDate::parse_from_str(raw, "%Y%m%d")
        .map_err(|_| DecodeError::InvalidDate(raw.to_string()))
}

/// Decodes a 6-character `HHMMSS` field. Blank means no time; anything else
/// must be exactly 6 ASCII digits forming a real time of day.
fn decode_time(raw: &str) -> Result<Option<NaiveTime>, DecodeError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Ok(None);
    }

    if trimmed.len() != 6 || !trimmed.bytes().all(|b| b.is_ascii_digit()) {
        return Err(DecodeError::InvalidTime(raw.to_string()));
    }

    NaiveTime::parse_from_str(trimmed, "%H%M%S")
        .map(Some)
        .map_err(|_| DecodeError::InvalidTime(raw.to_string()))
}

/// Decodes a 13-character minor-unit amount field.
///
/// Non-digit characters are stripped; a field with no digits decodes to zero.
/// The remaining digits are read as an integer count of minor units and
/// scaled by 100. At most 13 digits fit the field, well inside `i64` range.
fn decode_money(raw: &str) -> Decimal2 {
    let mut units: i64 = 0;
    let mut any_digit = false;

    for b in raw.bytes() {
        if b.is_ascii_digit() {
            units = units * 10 + i64::from(b - b'0');
            any_digit = true;
        }
    }

    if any_digit {
        Decimal2::from_minor_units(units)
    } else {
        Decimal2::ZERO
    }
}
