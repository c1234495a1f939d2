use anyhow::{ensure, Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::fetcher::{DEFAULT_PROGRAM, DEFAULT_SEARCH_PREFIX};
use crate::options::DownloadOptions;

/// How to invoke the external downloader (`[ytdlp]` section in config.toml).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct YtDlpConfig {
    /// Program name or path of the downloader.
    pub program: PathBuf,
    /// Search extractor prefix; `ytsearch` picks the best single match.
    pub search_prefix: String,
}

impl Default for YtDlpConfig {
    fn default() -> Self {
        Self {
            program: PathBuf::from(DEFAULT_PROGRAM),
            search_prefix: DEFAULT_SEARCH_PREFIX.to_string(),
        }
    }
}

/// Global configuration loaded from `~/.config/trackdl/config.toml`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrackdlConfig {
    /// Directory downloads are written to. Defaults to `~/Music`; a leading `~` is expanded.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub output_dir: Option<PathBuf>,
    #[serde(default)]
    pub ytdlp: YtDlpConfig,
    /// Format selection, post-processing chain and output template.
    #[serde(default)]
    pub options: DownloadOptions,
}

impl TrackdlConfig {
    /// Reject settings the downloader would choke on.
    pub fn validate(&self) -> Result<()> {
        let prefix = &self.ytdlp.search_prefix;
        ensure!(
            !prefix.is_empty() && !prefix.contains(':'),
            "invalid search_prefix {:?}: expected an extractor name such as \"ytsearch\"",
            prefix
        );
        ensure!(
            !self.ytdlp.program.as_os_str().is_empty(),
            "ytdlp.program must not be empty"
        );
        self.options.validate().context("invalid [options]")?;
        Ok(())
    }

    /// Resolved output directory.
    pub fn output_dir(&self) -> Result<PathBuf> {
        match &self.output_dir {
            Some(dir) => expand_home(dir),
            None => Ok(home_dir()?.join("Music")),
        }
    }
}

fn home_dir() -> Result<PathBuf> {
    dirs::home_dir().context("cannot determine home directory")
}

fn expand_home(path: &Path) -> Result<PathBuf> {
    match path.strip_prefix("~") {
        Ok(rest) => Ok(home_dir()?.join(rest)),
        Err(_) => Ok(path.to_path_buf()),
    }
}

pub fn config_path() -> Result<PathBuf> {
    let xdg_dirs = xdg::BaseDirectories::with_prefix("trackdl")?;
    Ok(xdg_dirs.place_config_file("config.toml")?)
}

/// Load configuration from disk, creating a default file if none exists.
pub fn load_or_init() -> Result<TrackdlConfig> {
    let path = config_path()?;
    if !path.exists() {
        let default_cfg = TrackdlConfig::default();
        let toml = toml::to_string_pretty(&default_cfg)?;
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&path, toml)?;
        tracing::info!("created default config at {}", path.display());
        return Ok(default_cfg);
    }
    load_from_path(&path)
}

pub fn load_from_path(path: &Path) -> Result<TrackdlConfig> {
    let data = fs::read_to_string(path).with_context(|| format!("read {}", path.display()))?;
    let cfg: TrackdlConfig =
        toml::from_str(&data).with_context(|| format!("parse {}", path.display()))?;
    Ok(cfg)
}
