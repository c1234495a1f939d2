//! Options handed to the external downloader.
//!
//! Mirrors the three knobs the downloader recognizes for this tool: the
//! stream-selection `format`, the ordered `postprocessors` chain, and the
//! `output_template` used to name files. Loaded from `config.toml` and
//! checked with [`DownloadOptions::validate`] before any row is processed.

mod codec;
mod error;
mod postprocess;

pub use codec::AudioCodec;
pub use error::OptionsError;
pub use postprocess::PostProcessor;

use serde::{Deserialize, Serialize};
use std::path::Path;

/// Stream selection used when none is configured: best audio-only stream,
/// falling back to the best combined stream.
pub const DEFAULT_FORMAT: &str = "bestaudio/best";
/// File name pattern relative to the output directory.
pub const DEFAULT_OUTPUT_TEMPLATE: &str = "%(title)s.%(ext)s";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DownloadOptions {
    #[serde(default = "default_format")]
    pub format: String,
    #[serde(default = "default_postprocessors")]
    pub postprocessors: Vec<PostProcessor>,
    #[serde(default = "default_output_template")]
    pub output_template: String,
}

fn default_format() -> String {
    DEFAULT_FORMAT.to_string()
}

fn default_postprocessors() -> Vec<PostProcessor> {
    vec![PostProcessor::ExtractAudio {
        preferred_codec: AudioCodec::Mp3,
        preferred_quality: None,
    }]
}

fn default_output_template() -> String {
    DEFAULT_OUTPUT_TEMPLATE.to_string()
}

impl Default for DownloadOptions {
    fn default() -> Self {
        Self {
            format: default_format(),
            postprocessors: default_postprocessors(),
            output_template: default_output_template(),
        }
    }
}

impl DownloadOptions {
    /// Check that the options describe a runnable extraction.
    pub fn validate(&self) -> Result<(), OptionsError> {
        if self.format.trim().is_empty() {
            return Err(OptionsError::EmptyFormat);
        }

        let extract_steps = self
            .postprocessors
            .iter()
            .filter(|p| matches!(p, PostProcessor::ExtractAudio { .. }))
            .count();
        match extract_steps {
            0 => return Err(OptionsError::NoAudioExtraction),
            1 => {}
            n => return Err(OptionsError::DuplicateAudioExtraction(n)),
        }
        for step in &self.postprocessors {
            step.validate()?;
        }

        let template = self.output_template.trim();
        if template.is_empty() {
            return Err(OptionsError::EmptyOutputTemplate);
        }
        if Path::new(template).is_absolute() {
            return Err(OptionsError::AbsoluteOutputTemplate(
                self.output_template.clone(),
            ));
        }
        if !template.contains("%(ext)s") {
            return Err(OptionsError::TemplateWithoutExtension(
                self.output_template.clone(),
            ));
        }
        Ok(())
    }

    /// Codec of the audio extraction step. Falls back to mp3 for unvalidated options.
    pub fn target_codec(&self) -> AudioCodec {
        self.postprocessors
            .iter()
            .find_map(|p| match p {
                PostProcessor::ExtractAudio {
                    preferred_codec, ..
                } => Some(*preferred_codec),
                _ => None,
            })
            .unwrap_or(AudioCodec::Mp3)
    }
}
