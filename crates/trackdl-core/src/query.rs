//! Search query construction and per-row download jobs.

use crate::options::{AudioCodec, DownloadOptions};
use crate::tracklist::Record;

/// Free-text search query for a record: `"<artists> <track>"`.
pub fn build_query(record: &Record) -> String {
    format!("{} {}", record.artist_names, record.track_name)
}

/// Everything the fetcher needs for one row. Consumed by a single fetch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DownloadJob {
    pub query: String,
    pub output_template: String,
    pub target_codec: AudioCodec,
}

impl DownloadJob {
    pub fn new(record: &Record, options: &DownloadOptions) -> Self {
        Self {
            query: build_query(record),
            output_template: options.output_template.clone(),
            target_codec: options.target_codec(),
        }
    }
}
