//! Sequential batch runner: one record, one job, one fetch, in file order.
//!
//! The first failure ends the batch. Rows after a failed read or a failed
//! download are never attempted.

use std::io::Write;

use crate::fetcher::{FetchError, Fetcher};
use crate::options::DownloadOptions;
use crate::query::DownloadJob;
use crate::tracklist::{Record, TracklistError};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RunSummary {
    pub downloaded: usize,
}

#[derive(Debug, thiserror::Error)]
pub enum BatchError {
    #[error(transparent)]
    Read(#[from] TracklistError),
    #[error("row {line}: {source}")]
    Fetch {
        line: u64,
        #[source]
        source: FetchError,
    },
    #[error("writing progress: {0}")]
    Console(#[source] std::io::Error),
}

/// Download every record in order, printing `Downloading: <artists> - <track>`
/// to `out` before each fetch.
pub fn run_batch<I, F, W>(
    records: I,
    fetcher: &mut F,
    options: &DownloadOptions,
    out: &mut W,
) -> Result<RunSummary, BatchError>
where
    I: IntoIterator<Item = Result<Record, TracklistError>>,
    F: Fetcher + ?Sized,
    W: Write,
{
    let mut summary = RunSummary::default();
    for record in records {
        let record = record?;
        writeln!(
            out,
            "Downloading: {} - {}",
            record.artist_names, record.track_name
        )
        .and_then(|()| out.flush())
        .map_err(BatchError::Console)?;

        let job = DownloadJob::new(&record, options);
        let outcome = fetcher.fetch(&job).map_err(|source| BatchError::Fetch {
            line: record.line,
            source,
        })?;
        tracing::info!(
            line = record.line,
            query = %job.query,
            path = %outcome.path.display(),
            "downloaded"
        );
        summary.downloaded += 1;
    }
    tracing::info!("batch completed {} download(s)", summary.downloaded);
    Ok(summary)
}

#[cfg(test)]
mod tests;
