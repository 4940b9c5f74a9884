use std::fs::File;
use std::io::Read;
use std::path::{Path, PathBuf};

use thiserror::Error;

use super::RawRow;

/// Failure to obtain the tabular resource at all.
///
/// Only visible to callers of [`RecordSource::fetch_rows`]; the dataset loader
/// downgrades it to an empty dataset.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("failed to read `{path}`: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("csv parse error: {0}")]
    Csv(#[from] csv::Error),

    #[error("tabular input has no header row")]
    MissingHeader,
}

/// Transport that produces raw rows for one load request.
pub trait RecordSource {
    /// Human-readable origin used in diagnostics.
    fn describe(&self) -> String;

    fn fetch_rows(&self) -> Result<Vec<RawRow>, LoadError>;
}

/// CSV held in memory, first line is the header.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CsvTextSource {
    label: String,
    text: String,
}

impl CsvTextSource {
    #[must_use]
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            label: "inline csv".to_owned(),
            text: text.into(),
        }
    }

    #[must_use]
    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = label.into();
        self
    }
}

impl RecordSource for CsvTextSource {
    fn describe(&self) -> String {
        self.label.clone()
    }

    fn fetch_rows(&self) -> Result<Vec<RawRow>, LoadError> {
        parse_csv_rows(self.text.as_bytes())
    }
}

/// CSV file addressed by a stable path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CsvFileSource {
    path: PathBuf,
}

impl CsvFileSource {
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl RecordSource for CsvFileSource {
    fn describe(&self) -> String {
        self.path.display().to_string()
    }

    fn fetch_rows(&self) -> Result<Vec<RawRow>, LoadError> {
        let file = File::open(&self.path).map_err(|source| LoadError::Io {
            path: self.path.clone(),
            source,
        })?;
        parse_csv_rows(file)
    }
}

/// Reads CSV into header-keyed rows.
///
/// Rows may be shorter or longer than the header: missing trailing cells are
/// simply absent from the row and surplus cells are dropped.
pub fn parse_csv_rows<R: Read>(reader: R) -> Result<Vec<RawRow>, LoadError> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .flexible(true)
        .trim(csv::Trim::Headers)
        .from_reader(reader);

    let headers = csv_reader.headers()?.clone();
    if headers.is_empty() || headers.iter().all(str::is_empty) {
        return Err(LoadError::MissingHeader);
    }

    let mut rows = Vec::new();
    for record in csv_reader.records() {
        let record = record?;
        let row: RawRow = headers
            .iter()
            .zip(record.iter())
            .map(|(column, cell)| (column.to_owned(), cell.to_owned()))
            .collect();
        rows.push(row);
    }
    Ok(rows)
}
