//! `yt-dlp` backend.
//!
//! Runs the downloader once per job with stdout/stderr inherited, so its own
//! progress output reaches the console. The final path is read back from a
//! `--print-to-file` report written after post-processing; an empty report
//! on a successful exit means the search returned nothing.

use std::ffi::OsString;
use std::fs;
use std::path::{Path, PathBuf};
use std::process::{Command, Stdio};

use tempfile::NamedTempFile;

use super::{DownloadOutcome, FetchError, Fetcher};
use crate::options::{DownloadOptions, PostProcessor};
use crate::query::DownloadJob;

pub const DEFAULT_PROGRAM: &str = "yt-dlp";
/// Best single match on the video platform.
pub const DEFAULT_SEARCH_PREFIX: &str = "ytsearch";

#[derive(Debug, Clone)]
pub struct YtDlp {
    program: PathBuf,
    search_prefix: String,
    output_dir: PathBuf,
    options: DownloadOptions,
}

impl YtDlp {
    /// `options` should already be validated.
    pub fn new(
        program: impl Into<PathBuf>,
        search_prefix: impl Into<String>,
        output_dir: impl Into<PathBuf>,
        options: DownloadOptions,
    ) -> Self {
        Self {
            program: program.into(),
            search_prefix: search_prefix.into(),
            output_dir: output_dir.into(),
            options,
        }
    }

    pub fn output_dir(&self) -> &Path {
        &self.output_dir
    }

    /// Search target understood by the downloader, e.g. `ytsearch:John Lennon Imagine`.
    pub fn search_target(&self, query: &str) -> String {
        format!("{}:{}", self.search_prefix, query)
    }

    /// Full argument list for one job; `report` receives the final file path.
    pub fn args(&self, job: &DownloadJob, report: &Path) -> Vec<OsString> {
        let mut args: Vec<OsString> = vec![
            "--no-playlist".into(),
            "--format".into(),
            self.options.format.clone().into(),
        ];

        for step in &self.options.postprocessors {
            match step {
                PostProcessor::ExtractAudio {
                    preferred_quality, ..
                } => {
                    args.push("--extract-audio".into());
                    args.push("--audio-format".into());
                    args.push(job.target_codec.as_str().into());
                    if let Some(q) = preferred_quality {
                        args.push("--audio-quality".into());
                        args.push(q.into());
                    }
                }
                PostProcessor::EmbedMetadata => args.push("--embed-metadata".into()),
                PostProcessor::EmbedThumbnail => args.push("--embed-thumbnail".into()),
            }
        }

        args.push("--paths".into());
        args.push(self.output_dir.clone().into_os_string());
        args.push("--output".into());
        args.push(job.output_template.clone().into());

        args.push("--no-simulate".into());
        args.push("--print-to-file".into());
        args.push("after_move:filepath".into());
        args.push(report.as_os_str().to_owned());

        // Queries starting with '-' must not be read as options.
        args.push("--".into());
        args.push(self.search_target(&job.query).into());
        args
    }
}

impl Fetcher for YtDlp {
    fn fetch(&mut self, job: &DownloadJob) -> Result<DownloadOutcome, FetchError> {
        fs::create_dir_all(&self.output_dir)?;
        let report = NamedTempFile::new()?;

        tracing::debug!(
            program = %self.program.display(),
            query = %job.query,
            codec = %job.target_codec,
            "invoking downloader"
        );
        let status = Command::new(&self.program)
            .args(self.args(job, report.path()))
            .stdin(Stdio::null())
            .status()
            .map_err(|source| FetchError::Spawn {
                program: self.program.clone(),
                source,
            })?;

        if !status.success() {
            return Err(FetchError::Exit {
                query: job.query.clone(),
                status,
            });
        }

        let reported = fs::read_to_string(report.path())?;
        match reported.lines().map(str::trim).filter(|l| !l.is_empty()).last() {
            Some(path) => Ok(DownloadOutcome {
                path: PathBuf::from(path),
            }),
            None => Err(FetchError::NoMatch {
                query: job.query.clone(),
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::options::AudioCodec;
    use crate::tracklist::Record;

    fn job(options: &DownloadOptions) -> DownloadJob {
        DownloadJob::new(&Record::new(1, "Imagine", "John Lennon"), options)
    }

    fn strings(args: &[OsString]) -> Vec<String> {
        args.iter().map(|a| a.to_string_lossy().into_owned()).collect()
    }

    #[test]
    fn default_args() {
        let opts = DownloadOptions::default();
        let ytdlp = YtDlp::new("yt-dlp", "ytsearch", "/music", opts.clone());
        let args = strings(&ytdlp.args(&job(&opts), Path::new("/tmp/report")));
        assert_eq!(
            args,
            vec![
                "--no-playlist",
                "--format",
                "bestaudio/best",
                "--extract-audio",
                "--audio-format",
                "mp3",
                "--paths",
                "/music",
                "--output",
                "%(title)s.%(ext)s",
                "--no-simulate",
                "--print-to-file",
                "after_move:filepath",
                "/tmp/report",
                "--",
                "ytsearch:John Lennon Imagine",
            ]
        );
    }

    #[test]
    fn postprocessor_chain_in_order() {
        let opts = DownloadOptions {
            postprocessors: vec![
                PostProcessor::ExtractAudio {
                    preferred_codec: AudioCodec::Opus,
                    preferred_quality: Some("0".into()),
                },
                PostProcessor::EmbedMetadata,
                PostProcessor::EmbedThumbnail,
            ],
            ..Default::default()
        };
        let ytdlp = YtDlp::new("yt-dlp", "ytsearch", "/music", opts.clone());
        let args = strings(&ytdlp.args(&job(&opts), Path::new("/tmp/report")));
        let start = args.iter().position(|a| a == "--extract-audio").unwrap();
        assert_eq!(
            &args[start..start + 7],
            &[
                "--extract-audio",
                "--audio-format",
                "opus",
                "--audio-quality",
                "0",
                "--embed-metadata",
                "--embed-thumbnail",
            ]
        );
    }

    #[test]
    fn custom_search_prefix() {
        let ytdlp = YtDlp::new("yt-dlp", "ytsearch3", "/music", DownloadOptions::default());
        assert_eq!(ytdlp.search_target("a b"), "ytsearch3:a b");
    }

    #[test]
    fn missing_program_is_spawn_error() {
        let dir = tempfile::tempdir().unwrap();
        let opts = DownloadOptions::default();
        let mut ytdlp = YtDlp::new(
            dir.path().join("no-such-downloader"),
            "ytsearch",
            dir.path().join("out"),
            opts.clone(),
        );
        let err = ytdlp.fetch(&job(&opts)).unwrap_err();
        assert!(matches!(err, FetchError::Spawn { .. }));
        assert!(dir.path().join("out").is_dir());
    }

    #[cfg(unix)]
    #[test]
    fn failing_program_is_exit_error() {
        let dir = tempfile::tempdir().unwrap();
        let opts = DownloadOptions::default();
        let mut ytdlp = YtDlp::new("false", "ytsearch", dir.path(), opts.clone());
        let err = ytdlp.fetch(&job(&opts)).unwrap_err();
        assert!(matches!(err, FetchError::Exit { .. }));
    }

    #[cfg(unix)]
    #[test]
    fn silent_success_is_no_match() {
        let dir = tempfile::tempdir().unwrap();
        let opts = DownloadOptions::default();
        let mut ytdlp = YtDlp::new("true", "ytsearch", dir.path(), opts.clone());
        match ytdlp.fetch(&job(&opts)).unwrap_err() {
            FetchError::NoMatch { query } => assert_eq!(query, "John Lennon Imagine"),
            other => panic!("expected NoMatch, got {:?}", other),
        }
    }
}
