//! CSV dataset loading.
//!
//! The chart consumes a tabular file with at least the columns
//! `state,abbr,poverty,healthcare`. The two percentage columns arrive as
//! text and are coerced to `f64` here, under an explicit policy instead of
//! silently producing unusable sentinel values.

use std::fs::File;
use std::io::Read;
use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::error::{ChartError, ChartResult};

/// One dataset row after numeric coercion. Immutable once loaded.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StateRecord {
    pub state: String,
    pub abbr: String,
    pub poverty: f64,
    pub healthcare: f64,
}

impl StateRecord {
    #[must_use]
    pub fn new(
        state: impl Into<String>,
        abbr: impl Into<String>,
        poverty: f64,
        healthcare: f64,
    ) -> Self {
        Self {
            state: state.into(),
            abbr: abbr.into(),
            poverty,
            healthcare,
        }
    }
}

/// Wire-format row before coercion; percentages are still text.
#[derive(Debug, Deserialize)]
struct RawRecord {
    state: String,
    abbr: String,
    poverty: String,
    healthcare: String,
}

/// What to do with a row whose numeric cell does not parse.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum CoercionPolicy {
    /// Drop the offending row, log it, and keep loading.
    #[default]
    SkipRecord,
    /// Fail the whole load at the first offending cell.
    FailDataset,
}

/// Load outcome: kept records plus row accounting for diagnostics.
#[derive(Debug, Clone, PartialEq)]
pub struct LoadedDataset {
    pub records: Vec<StateRecord>,
    pub rows_read: usize,
    pub rows_skipped: usize,
}

/// Reads and coerces records from any CSV byte source.
pub fn read_records<R: Read>(reader: R, policy: CoercionPolicy) -> ChartResult<LoadedDataset> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(reader);

    let mut records = Vec::new();
    let mut rows_read = 0usize;
    let mut rows_skipped = 0usize;

    for (index, result) in csv_reader.deserialize::<RawRecord>().enumerate() {
        // Row 1 is the header line.
        let row = index + 2;
        rows_read += 1;

        let raw = match result {
            Ok(raw) => raw,
            Err(err) => match policy {
                CoercionPolicy::SkipRecord => {
                    warn!(row, error = %err, "skipping malformed dataset row");
                    rows_skipped += 1;
                    continue;
                }
                CoercionPolicy::FailDataset => return Err(ChartError::DatasetFormat(err)),
            },
        };

        match coerce_record(&raw, row) {
            Ok(record) => records.push(record),
            Err(err) => match policy {
                CoercionPolicy::SkipRecord => {
                    warn!(row, error = %err, "skipping non-numeric dataset row");
                    rows_skipped += 1;
                }
                CoercionPolicy::FailDataset => return Err(err),
            },
        }
    }

    Ok(LoadedDataset {
        records,
        rows_read,
        rows_skipped,
    })
}

/// Reads records from a CSV file on disk.
pub fn read_records_from_path(
    path: impl AsRef<Path>,
    policy: CoercionPolicy,
) -> ChartResult<LoadedDataset> {
    let file = File::open(path.as_ref())?;
    read_records(file, policy)
}

fn coerce_record(raw: &RawRecord, row: usize) -> ChartResult<StateRecord> {
    let poverty = coerce_field(&raw.poverty, "poverty", row)?;
    let healthcare = coerce_field(&raw.healthcare, "healthcare", row)?;
    Ok(StateRecord {
        state: raw.state.clone(),
        abbr: raw.abbr.clone(),
        poverty,
        healthcare,
    })
}

fn coerce_field(value: &str, field: &'static str, row: usize) -> ChartResult<f64> {
    match value.parse::<f64>() {
        Ok(parsed) if parsed.is_finite() => Ok(parsed),
        _ => Err(ChartError::NonNumericField {
            row,
            field,
            value: value.to_owned(),
        }),
    }
}
