//! Errors raised while opening or reading a playlist export.

use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum TracklistError {
    /// Input file could not be opened (kind `NotFound` when the path does not exist).
    #[error("cannot open {}: {source}", .path.display())]
    Open {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    /// Header row lacks a required column.
    #[error("missing required column {column:?} in header")]
    MissingColumn { column: &'static str },
    /// A data row is too short to contain a required column.
    #[error("row {line}: missing field {column:?}")]
    MissingField { line: u64, column: &'static str },
    /// Malformed CSV or invalid UTF-8.
    #[error("malformed input: {0}")]
    Csv(#[from] csv::Error),
}

impl TracklistError {
    /// True when the input path does not exist.
    pub fn is_not_found(&self) -> bool {
        matches!(
            self,
            TracklistError::Open { source, .. } if source.kind() == std::io::ErrorKind::NotFound
        )
    }
}
