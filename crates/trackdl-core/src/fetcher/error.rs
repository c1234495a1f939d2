use std::path::PathBuf;
use std::process::ExitStatus;

#[derive(Debug, thiserror::Error)]
pub enum FetchError {
    /// Downloader binary missing or not executable.
    #[error("failed to run {}: {source}", .program.display())]
    Spawn {
        program: PathBuf,
        #[source]
        source: std::io::Error,
    },
    /// Downloader exited unsuccessfully (network, extraction or transcode failure).
    #[error("download of {query:?} failed: downloader {status}")]
    Exit { query: String, status: ExitStatus },
    /// Downloader succeeded but wrote no file: the search had no result.
    #[error("no match found for {query:?}")]
    NoMatch { query: String },
    #[error(transparent)]
    Io(#[from] std::io::Error),
}
