use super::*;
use crate::fetcher::DownloadOutcome;
use crate::tracklist::TrackReader;
use std::path::PathBuf;

/// Records every job; fails the calls whose 1-based index is in `fail_on`.
#[derive(Default)]
struct RecordingFetcher {
    jobs: Vec<DownloadJob>,
    fail_on: Vec<usize>,
}

impl Fetcher for RecordingFetcher {
    fn fetch(&mut self, job: &DownloadJob) -> Result<DownloadOutcome, FetchError> {
        self.jobs.push(job.clone());
        if self.fail_on.contains(&self.jobs.len()) {
            return Err(FetchError::NoMatch {
                query: job.query.clone(),
            });
        }
        Ok(DownloadOutcome {
            path: PathBuf::from(format!("/music/{}.mp3", job.query)),
        })
    }
}

fn run(input: &str, fetcher: &mut RecordingFetcher) -> (Result<RunSummary, BatchError>, String) {
    let mut out = Vec::new();
    let result = TrackReader::from_reader(input.as_bytes())
        .map_err(BatchError::from)
        .and_then(|reader| {
            run_batch(
                reader.records(),
                fetcher,
                &DownloadOptions::default(),
                &mut out,
            )
        });
    (result, String::from_utf8(out).unwrap())
}

#[test]
fn one_fetch_per_row_in_order() {
    let input = "Track Name,Artist Name(s)\nImagine,John Lennon\nHeroes,David Bowie\nJolene,Dolly Parton\n";
    let mut fetcher = RecordingFetcher::default();
    let (result, console) = run(input, &mut fetcher);
    assert_eq!(result.unwrap(), RunSummary { downloaded: 3 });
    let queries: Vec<_> = fetcher.jobs.iter().map(|j| j.query.as_str()).collect();
    assert_eq!(
        queries,
        vec!["John Lennon Imagine", "David Bowie Heroes", "Dolly Parton Jolene"]
    );
    assert_eq!(
        console,
        "Downloading: John Lennon - Imagine\nDownloading: David Bowie - Heroes\nDownloading: Dolly Parton - Jolene\n"
    );
}

#[test]
fn header_only_makes_no_calls() {
    let mut fetcher = RecordingFetcher::default();
    let (result, console) = run("Track Name,Artist Name(s)\n", &mut fetcher);
    assert_eq!(result.unwrap(), RunSummary { downloaded: 0 });
    assert!(fetcher.jobs.is_empty());
    assert!(console.is_empty());
}

#[test]
fn missing_track_column_fails_before_any_call() {
    let mut fetcher = RecordingFetcher::default();
    let (result, _) = run("Title,Artist Name(s)\nImagine,John Lennon\n", &mut fetcher);
    assert!(matches!(
        result,
        Err(BatchError::Read(TracklistError::MissingColumn { .. }))
    ));
    assert!(fetcher.jobs.is_empty());
}

#[test]
fn first_failure_stops_the_batch() {
    let input = "Track Name,Artist Name(s)\nImagine,John Lennon\nHeroes,David Bowie\n";
    let mut fetcher = RecordingFetcher {
        fail_on: vec![1],
        ..Default::default()
    };
    let (result, console) = run(input, &mut fetcher);
    match result {
        Err(BatchError::Fetch { line, source }) => {
            assert_eq!(line, 1);
            assert!(matches!(source, FetchError::NoMatch { .. }));
        }
        other => panic!("expected Fetch error, got {:?}", other),
    }
    assert_eq!(fetcher.jobs.len(), 1);
    assert_eq!(console, "Downloading: John Lennon - Imagine\n");
}

#[test]
fn malformed_row_stops_the_batch() {
    let input = "Track Name,Artist Name(s)\nImagine,John Lennon\nOrphan\nHeroes,David Bowie\n";
    let mut fetcher = RecordingFetcher::default();
    let (result, _) = run(input, &mut fetcher);
    assert!(matches!(
        result,
        Err(BatchError::Read(TracklistError::MissingField { line: 2, .. }))
    ));
    assert_eq!(fetcher.jobs.len(), 1);
}
