//! Seam over the external search-download-transcode capability.
//!
//! The batch runner only sees [`Fetcher`]; [`YtDlp`] is the production
//! backend. Tests substitute a recording fake.

mod error;
mod ytdlp;

pub use error::FetchError;
pub use ytdlp::{YtDlp, DEFAULT_PROGRAM, DEFAULT_SEARCH_PREFIX};

use crate::query::DownloadJob;
use std::path::PathBuf;

/// What the downloader reported for a finished job.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DownloadOutcome {
    /// Final file after transcoding.
    pub path: PathBuf,
}

/// Search the remote catalog for `job.query`, fetch the best audio stream and
/// transcode it. Blocks until the file is written or the attempt fails.
pub trait Fetcher {
    fn fetch(&mut self, job: &DownloadJob) -> Result<DownloadOutcome, FetchError>;
}
