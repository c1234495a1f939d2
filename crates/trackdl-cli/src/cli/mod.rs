//! CLI for trackdl.

use anyhow::{Context, Result};
use clap::Parser;
use std::io;
use std::path::{Path, PathBuf};
use trackdl_core::batch;
use trackdl_core::config::{self, TrackdlConfig};
use trackdl_core::fetcher::YtDlp;
use trackdl_core::tracklist::TrackReader;

/// Download every track of a playlist export as audio via yt-dlp.
#[derive(Debug, Parser)]
#[command(name = "trackdl", version)]
#[command(about = "Download the tracks of a playlist CSV export as audio files", long_about = None)]
pub struct Cli {
    /// CSV export with "Track Name" and "Artist Name(s)" columns.
    pub input: PathBuf,
}

impl Cli {
    pub fn run_from_args() -> Result<()> {
        let cli = Cli::parse();
        let cfg = config::load_or_init()?;
        tracing::debug!("loaded config: {:?}", cfg);
        run(&cli.input, &cfg)
    }
}

/// Validate config, then fetch every row of `input` in order.
fn run(input: &Path, cfg: &TrackdlConfig) -> Result<()> {
    cfg.validate()?;
    let output_dir = cfg.output_dir()?;

    let reader =
        TrackReader::open(input).with_context(|| format!("reading {}", input.display()))?;
    let mut fetcher = YtDlp::new(
        &cfg.ytdlp.program,
        &cfg.ytdlp.search_prefix,
        output_dir,
        cfg.options.clone(),
    );
    tracing::info!(
        input = %input.display(),
        output_dir = %fetcher.output_dir().display(),
        "starting batch"
    );

    let stdout = io::stdout();
    let summary = batch::run_batch(
        reader.records(),
        &mut fetcher,
        &cfg.options,
        &mut stdout.lock(),
    )
    .with_context(|| format!("processing {}", input.display()))?;

    if summary.downloaded == 0 {
        println!("No tracks in {}.", input.display());
    }
    Ok(())
}
