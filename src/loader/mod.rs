//! Record loading: raw tabular rows in, validated [`Dataset`] out.
//!
//! Invalid rows are dropped and counted, never surfaced as errors. A source
//! that cannot be read at all yields an empty dataset so the chart always has
//! something valid to display.

mod row;
mod sequencer;
mod source;

pub use row::{ColumnMapping, RawRow, RowRejection, normalize_row};
pub use sequencer::{LoadOutcome, LoadSequencer, LoadTicket};
pub use source::{CsvFileSource, CsvTextSource, LoadError, RecordSource, parse_csv_rows};

use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

use crate::core::{Dataset, Record};

/// Per-reason rejection tally for one load.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct RejectionCounts {
    pub empty_name: usize,
    pub non_finite_magnitude: usize,
    pub unknown_category: usize,
}

impl RejectionCounts {
    fn record(&mut self, rejection: RowRejection) {
        match rejection {
            RowRejection::EmptyName => self.empty_name += 1,
            RowRejection::NonFiniteMagnitude => self.non_finite_magnitude += 1,
            RowRejection::UnknownCategory => self.unknown_category += 1,
        }
    }

    #[must_use]
    pub fn total(self) -> usize {
        self.empty_name + self.non_finite_magnitude + self.unknown_category
    }
}

/// Result of one load cycle.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct LoadReport {
    pub dataset: Dataset,
    pub rejections: RejectionCounts,
    /// Set when the source itself could not be read.
    pub source_failed: bool,
}

impl LoadReport {
    #[must_use]
    pub fn accepted(&self) -> usize {
        self.dataset.len()
    }

    #[must_use]
    pub fn rejected(&self) -> usize {
        self.rejections.total()
    }

    fn failed() -> Self {
        Self {
            source_failed: true,
            ..Self::default()
        }
    }
}

/// Normalizes raw rows, keeping accepted rows in input order.
///
/// Duplicate names are kept as-is.
#[must_use]
pub fn normalize_rows<'a, I>(rows: I, mapping: &ColumnMapping) -> LoadReport
where
    I: IntoIterator<Item = &'a RawRow>,
{
    let mut records: Vec<Record> = Vec::new();
    let mut rejections = RejectionCounts::default();

    for (index, row) in rows.into_iter().enumerate() {
        match normalize_row(row, mapping) {
            Ok(record) => records.push(record),
            Err(reason) => {
                debug!(row = index, %reason, "dropping row");
                rejections.record(reason);
            }
        }
    }

    LoadReport {
        dataset: Dataset::from(records),
        rejections,
        source_failed: false,
    }
}

/// Fetches and normalizes rows from `source`.
///
/// Transport and parse failures are logged and replaced by an empty report.
pub fn load_dataset<S>(source: &S, mapping: &ColumnMapping) -> LoadReport
where
    S: RecordSource + ?Sized,
{
    let origin = source.describe();
    let rows = match source.fetch_rows() {
        Ok(rows) => rows,
        Err(err) => {
            warn!(source = %origin, error = %err, "failed to load records, using empty dataset");
            return LoadReport::failed();
        }
    };

    let report = normalize_rows(&rows, mapping);
    info!(
        source = %origin,
        accepted = report.accepted(),
        rejected = report.rejected(),
        "loaded rows after parsing/filtering"
    );
    report
}
