/// One parsed row of the playlist export.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Record {
    /// 1-based data row number (header excluded), for diagnostics.
    pub line: u64,
    pub track_name: String,
    pub artist_names: String,
}

impl Record {
    pub fn new(line: u64, track_name: impl Into<String>, artist_names: impl Into<String>) -> Self {
        Self {
            line,
            track_name: track_name.into(),
            artist_names: artist_names.into(),
        }
    }
}
