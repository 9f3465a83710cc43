//! Positional layout of a detail record.
//!
//! Every field is addressed by a 1-based start offset and a length, matching
//! the settlement file documentation. All offsets live here so a layout
//! revision is a one-place edit.

/// A fixed-width field position: 1-based start offset and length in bytes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Field {
    /// 1-based offset of the first byte of the field.
    pub start: usize,

    /// Field width in bytes.
    pub len: usize,
}

impl Field {
    /// 1-based offset of the last byte of the field.
    pub const fn end(&self) -> usize {
        self.start - 1 + self.len
    }
}

/// Record type marker, `'1'` for detail lines.
pub const RECORD_TYPE: Field = Field { start: 1, len: 1 };

/// Merchant establishment identifier.
pub const ESTABLISHMENT_CODE: Field = Field { start: 2, len: 10 };

/// Event date, `YYYYMMDD`.
pub const EVENT_DATE: Field = Field { start: 20, len: 8 };

/// Event time, `HHMMSS`, may be blank.
pub const EVENT_TIME: Field = Field { start: 28, len: 6 };

/// Opaque 32-character transaction identifier.
pub const TRANSACTION_CODE: Field = Field { start: 46, len: 32 };

/// Gross amount in minor currency units (cents).
pub const TOTAL_AMOUNT: Field = Field { start: 98, len: 13 };

/// Net amount in minor currency units, may be blank.
pub const NET_AMOUNT: Field = Field { start: 243, len: 13 };

/// Card network / issuer label.
pub const BRAND: Field = Field { start: 262, len: 30 };

/// Minimum line length able to contain every field without truncation.
pub const DETAIL_MIN_LENGTH: usize = BRAND.end();

/// First character of a detail line.
pub const DETAIL_MARKER: char = '1';

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_min_length_covers_last_field() {
        assert_eq!(DETAIL_MIN_LENGTH, 291);
        assert_eq!(BRAND.end(), DETAIL_MIN_LENGTH);
    }

    #[test]
    fn test_fields_are_in_ascending_order() {
        let fields = [
            RECORD_TYPE,
            ESTABLISHMENT_CODE,
            EVENT_DATE,
            EVENT_TIME,
            TRANSACTION_CODE,
            TOTAL_AMOUNT,
            NET_AMOUNT,
            BRAND,
        ];

        for pair in fields.windows(2) {
            assert!(
                pair[0].end() < pair[1].start,
                "field at {} overlaps field at {}",
                pair[0].start,
                pair[1].start
            );
        }
    }

    #[test]
    fn test_known_offsets() {
        assert_eq!(ESTABLISHMENT_CODE.end(), 11);
        assert_eq!(EVENT_DATE.end(), 27);
        assert_eq!(EVENT_TIME.end(), 33);
        assert_eq!(TRANSACTION_CODE.end(), 77);
        assert_eq!(TOTAL_AMOUNT.end(), 110);
        assert_eq!(NET_AMOUNT.end(), 255);
    }
}
