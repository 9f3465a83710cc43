//! Batch persistence seam.

use crate::record::SettlementRecord;
use std::io::Write;

/// Error type a sink may fail a batch with.
pub type SinkError = Box<dyn std::error::Error + Send + Sync>;

/// Destination for a run's accepted records.
///
/// The orchestrator makes exactly one call per run, passing the batch in
/// original file order. A sink persists the whole batch or fails it
/// atomically; the orchestrator never retries or splits a batch.
pub trait BatchSink {
    /// Persists every record in the batch.
    fn persist_all(&mut self, batch: &[SettlementRecord]) -> Result<(), SinkError>;
}

/// Writes accepted records as CSV with a header row.
///
/// Column order follows the record's field order. Monetary values carry
/// exactly 2 decimal places; an absent time or brand serializes as an empty
/// cell.
pub struct CsvSink<W: Write> {
    writer: csv::Writer<W>,
}

impl<W: Write> CsvSink<W> {
    /// Creates a sink writing CSV to `writer`.
    pub fn new(writer: W) -> Self {
        CsvSink {
            writer: csv::Writer::from_writer(writer),
        }
    }
}

impl<W: Write> BatchSink for CsvSink<W> {
    fn persist_all(&mut self, batch: &[SettlementRecord]) -> Result<(), SinkError> {
        for record in batch {
            self.writer.serialize(record)?;
        }
        self.writer.flush()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::decimal::Decimal2;
    use chrono::{NaiveDate, NaiveTime};

    fn record(code: &str) -> SettlementRecord {
        SettlementRecord {
            establishment_code: "1234567891".to_string(),
            event_date: NaiveDate::from_ymd_opt(2018, 9, 25).unwrap(),
            event_time: NaiveTime::from_hms_opt(13, 18, 34),
            brand: Some("MASTERCARD".to_string()),
            total_amount: Decimal2::from_minor_units(13050),
            transaction_code: code.repeat(32),
            net_amount: Decimal2::from_minor_units(12790),
        }
    }

    #[test]
    fn test_csv_sink_writes_header_and_rows() {
        let mut out = Vec::new();
        {
            let mut sink = CsvSink::new(&mut out);
            sink.persist_all(&[record("A"), record("B")]).unwrap();
        }

        let csv = String::from_utf8(out).unwrap();
        let mut lines = csv.lines();

        assert_eq!(
            lines.next().unwrap(),
            "establishment_code,event_date,event_time,brand,total_amount,transaction_code,net_amount"
        );

        let first = lines.next().unwrap();
        assert!(first.contains("2018-09-25"));
        assert!(first.contains("130.50"));
        assert!(first.contains(&"A".repeat(32)));
        assert!(lines.next().unwrap().contains(&"B".repeat(32)));
        assert_eq!(lines.next(), None);
    }

    #[test]
    fn test_csv_sink_serializes_absent_fields_as_empty() {
        let mut row = record("A");
        row.event_time = None;
        row.brand = None;

        let mut out = Vec::new();
        {
            let mut sink = CsvSink::new(&mut out);
            sink.persist_all(&[row]).unwrap();
        }

        let csv = String::from_utf8(out).unwrap();
        let data_line = csv.lines().nth(1).unwrap();
        assert!(data_line.contains("2018-09-25,,,130.50"));
    }

    #[test]
    fn test_empty_batch_writes_nothing() {
        // The header only appears alongside the first serialized row.
        let mut out = Vec::new();
        {
            let mut sink = CsvSink::new(&mut out);
            sink.persist_all(&[]).unwrap();
        }

        assert!(out.is_empty());
    }
}
