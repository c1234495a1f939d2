//! Header-checked, single-pass reader over a playlist CSV.

use std::fs::File;
use std::io::Read;
use std::path::Path;

use csv::StringRecord;

use super::error::TracklistError;
use super::record::Record;

pub const TRACK_COLUMN: &str = "Track Name";
pub const ARTIST_COLUMN: &str = "Artist Name(s)";

/// Reader over a playlist export. Owns the underlying handle until dropped.
pub struct TrackReader<R> {
    inner: csv::Reader<R>,
    track_idx: usize,
    artist_idx: usize,
}

impl TrackReader<File> {
    /// Open `path` and validate its header row.
    pub fn open(path: &Path) -> Result<Self, TracklistError> {
        let file = File::open(path).map_err(|source| TracklistError::Open {
            path: path.to_path_buf(),
            source,
        })?;
        tracing::debug!(path = %path.display(), "opened track list");
        Self::from_reader(file)
    }
}

impl<R: Read> TrackReader<R> {
    /// Build a reader over any byte source and validate its header row.
    pub fn from_reader(rdr: R) -> Result<Self, TracklistError> {
        // Short rows are reported as MissingField rather than a csv length error.
        let mut inner = csv::ReaderBuilder::new()
            .has_headers(true)
            .flexible(true)
            .from_reader(rdr);
        let headers = inner.headers()?;
        let track_idx = column_index(headers, TRACK_COLUMN)?;
        let artist_idx = column_index(headers, ARTIST_COLUMN)?;
        Ok(Self {
            inner,
            track_idx,
            artist_idx,
        })
    }

    /// Lazy sequence of records in file order. Consumes the reader.
    pub fn records(self) -> Records<R> {
        Records {
            rows: self.inner.into_records(),
            track_idx: self.track_idx,
            artist_idx: self.artist_idx,
            line: 0,
        }
    }
}

fn column_index(headers: &StringRecord, column: &'static str) -> Result<usize, TracklistError> {
    headers
        .iter()
        .position(|h| h == column)
        .ok_or(TracklistError::MissingColumn { column })
}

/// Iterator returned by [`TrackReader::records`].
pub struct Records<R> {
    rows: csv::StringRecordsIntoIter<R>,
    track_idx: usize,
    artist_idx: usize,
    line: u64,
}

impl<R: Read> Records<R> {
    fn to_record(&self, row: &StringRecord) -> Result<Record, TracklistError> {
        let field = |idx: usize, column: &'static str| {
            row.get(idx).ok_or(TracklistError::MissingField {
                line: self.line,
                column,
            })
        };
        let track_name = field(self.track_idx, TRACK_COLUMN)?;
        let artist_names = field(self.artist_idx, ARTIST_COLUMN)?;
        if track_name.is_empty() || artist_names.is_empty() {
            tracing::warn!(line = self.line, "row has an empty track or artist field");
        }
        Ok(Record::new(self.line, track_name, artist_names))
    }
}

impl<R: Read> Iterator for Records<R> {
    type Item = Result<Record, TracklistError>;

    fn next(&mut self) -> Option<Self::Item> {
        let row = self.rows.next()?;
        self.line += 1;
        Some(row.map_err(TracklistError::from).and_then(|row| self.to_record(&row)))
    }
}
