//! Business-rule validation of decoded records.
//!
//! Checks run in a fixed order and short-circuit on the first failure, so a
//! record with several problems always reports the same reason. Presence of
//! `event_date` and `total_amount` is already guaranteed by the decoder's
//! types; the checks here cover what the type system cannot.

use crate::error::ValidationError;
use crate::record::SettlementRecord;

/// Expected trimmed length of a transaction code.
pub const TRANSACTION_CODE_LENGTH: usize = 32;

/// Validates a decoded record against the import business rules.
pub fn validate(record: &SettlementRecord) -> Result<(), ValidationError> {
    if record.establishment_code.trim().is_empty() {
        return Err(ValidationError::MissingField("establishment_code"));
    }

    if record.total_amount.is_negative() {
        return Err(ValidationError::NegativeAmount("total_amount"));
    }

    let code = record.transaction_code.trim();
    if code.is_empty() {
        return Err(ValidationError::MissingField("transaction_code"));
    }
    if code.chars().count() != TRANSACTION_CODE_LENGTH {
        return Err(ValidationError::WrongCodeLength(code.chars().count()));
    }

    if record.net_amount.is_negative() {
        return Err(ValidationError::NegativeAmount("net_amount"));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::decimal::Decimal2;
    use chrono::NaiveDate;

    fn valid_record() -> SettlementRecord {
        SettlementRecord {
            establishment_code: "1234567891".to_string(),
            event_date: NaiveDate::from_ymd_opt(2018, 9, 25).unwrap(),
            event_time: None,
            brand: Some("MASTERCARD".to_string()),
            total_amount: Decimal2::from_minor_units(13050),
            transaction_code: "A".repeat(32),
            net_amount: Decimal2::from_minor_units(12790),
        }
    }

    #[test]
    fn test_valid_record_passes() {
        assert_eq!(validate(&valid_record()), Ok(()));
    }

    #[test]
    fn test_missing_establishment_code() {
        let mut record = valid_record();
        record.establishment_code = "   ".to_string();
        assert_eq!(
            validate(&record),
            Err(ValidationError::MissingField("establishment_code"))
        );
    }

    #[test]
    fn test_negative_total_amount() {
        let mut record = valid_record();
        record.total_amount = Decimal2::from_minor_units(-1);
        assert_eq!(
            validate(&record),
            Err(ValidationError::NegativeAmount("total_amount"))
        );
    }

    #[test]
    fn test_missing_transaction_code() {
        let mut record = valid_record();
        record.transaction_code = String::new();
        assert_eq!(
            validate(&record),
            Err(ValidationError::MissingField("transaction_code"))
        );
    }

    #[test]
    fn test_transaction_code_length_boundary() {
        for (len, expected) in [
            (31, Err(ValidationError::WrongCodeLength(31))),
            (32, Ok(())),
            (33, Err(ValidationError::WrongCodeLength(33))),
        ] {
            let mut record = valid_record();
            record.transaction_code = "B".repeat(len);
            assert_eq!(validate(&record), expected, "length {}", len);
        }
    }

    #[test]
    fn test_code_length_counts_trimmed_chars() {
        let mut record = valid_record();
        record.transaction_code = format!("  {}  ", "C".repeat(32));
        assert_eq!(validate(&record), Ok(()));
    }

    #[test]
    fn test_negative_net_amount() {
        let mut record = valid_record();
        record.net_amount = Decimal2::from_minor_units(-100);
        assert_eq!(
            validate(&record),
            Err(ValidationError::NegativeAmount("net_amount"))
        );
    }

    #[test]
    fn test_zero_amounts_pass() {
        let mut record = valid_record();
        record.total_amount = Decimal2::ZERO;
        record.net_amount = Decimal2::ZERO;
        assert_eq!(validate(&record), Ok(()));
    }

    #[test]
    fn test_check_order_is_stable() {
        // A record failing several checks reports the first one.
        let mut record = valid_record();
        record.establishment_code = String::new();
        record.transaction_code = "short".to_string();
        record.net_amount = Decimal2::from_minor_units(-1);

        assert_eq!(
            validate(&record),
            Err(ValidationError::MissingField("establishment_code"))
        );
    }
}
