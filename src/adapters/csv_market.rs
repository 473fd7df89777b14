//! CSV market file ingestion.
//!
//! Reads `name,rate,available` rows into the lender store. A field that
//! fails to parse is defaulted (name absent, rate 0, available 0) and
//! recorded; a row is saved only when the name is present and available
//! is positive, so a header line falls out as an ordinary skipped row.
//! Ids follow row order starting at 1, skipped rows included.

use crate::domain::error::RatequoteError;
use crate::domain::lender::Lender;
use crate::ports::lender_store::LenderStore;
use std::fs;
use std::path::Path;

#[derive(Debug, Default)]
pub struct IngestReport {
    pub rows: usize,
    pub saved: usize,
    pub skipped: Vec<SkippedRow>,
    pub defaulted: Vec<DefaultedField>,
}

#[derive(Debug, Clone)]
pub struct SkippedRow {
    pub row: usize,
    pub reason: SkipReason,
}

#[derive(Debug, Clone, PartialEq)]
pub enum SkipReason {
    MissingName,
    NoCapacity,
}

/// A field that failed to parse and fell back to its default.
#[derive(Debug, Clone)]
pub struct DefaultedField {
    pub row: usize,
    pub field: &'static str,
    pub value: String,
}

pub fn load_market(
    path: &Path,
    store: &mut dyn LenderStore,
) -> Result<IngestReport, RatequoteError> {
    let content = fs::read_to_string(path).map_err(|e| RatequoteError::Market {
        reason: format!("failed to read {}: {}", path.display(), e),
    })?;
    ingest(&content, store)
}

/// Ingest delimited market data into the store. Row-level problems are
/// collected in the report rather than aborting the batch; only an
/// unreadable record stream is an error.
pub fn ingest(content: &str, store: &mut dyn LenderStore) -> Result<IngestReport, RatequoteError> {
    let mut rdr = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_reader(content.as_bytes());

    let mut report = IngestReport::default();

    for result in rdr.records() {
        let record = result.map_err(|e| RatequoteError::Market {
            reason: format!("CSV parse error: {}", e),
        })?;
        report.rows += 1;
        let row = report.rows;

        let name = record
            .get(0)
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(str::to_string);

        let rate = parse_field(&record, 1, "rate", row, &mut report.defaulted);
        let available = parse_field(&record, 2, "available", row, &mut report.defaulted);

        match name {
            None => report.skipped.push(SkippedRow {
                row,
                reason: SkipReason::MissingName,
            }),
            Some(name) if available > 0.0 => {
                store.save(Lender::new(row as u32, name, rate, available));
                report.saved += 1;
            }
            Some(_) => report.skipped.push(SkippedRow {
                row,
                reason: SkipReason::NoCapacity,
            }),
        }
    }

    Ok(report)
}

fn parse_field(
    record: &csv::StringRecord,
    index: usize,
    field: &'static str,
    row: usize,
    defaulted: &mut Vec<DefaultedField>,
) -> f64 {
    let raw = record.get(index).map(str::trim).unwrap_or("");
    match raw.parse::<f64>() {
        Ok(value) => value,
        Err(_) => {
            defaulted.push(DefaultedField {
                row,
                field,
                value: raw.to_string(),
            });
            0.0
        }
    }
}
