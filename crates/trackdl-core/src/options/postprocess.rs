//! Ordered post-processing steps run by the downloader after fetching.

use serde::{Deserialize, Serialize};

use super::codec::AudioCodec;
use super::error::OptionsError;

/// One post-processing step, tagged by `key` in `config.toml`:
///
/// ```toml
/// [[download.postprocessors]]
/// key = "FFmpegExtractAudio"
/// preferred_codec = "mp3"
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "key")]
pub enum PostProcessor {
    /// Transcode the fetched stream to an audio-only file.
    #[serde(rename = "FFmpegExtractAudio")]
    ExtractAudio {
        #[serde(default)]
        preferred_codec: AudioCodec,
        /// VBR level `0` (best) to `10`, or a bitrate such as `192K`.
        #[serde(default, skip_serializing_if = "Option::is_none")]
        preferred_quality: Option<String>,
    },
    /// Write title/artist tags from the remote metadata.
    #[serde(rename = "FFmpegMetadata")]
    EmbedMetadata,
    /// Attach the remote thumbnail as cover art.
    #[serde(rename = "EmbedThumbnail")]
    EmbedThumbnail,
}

impl PostProcessor {
    pub(super) fn validate(&self) -> Result<(), OptionsError> {
        if let PostProcessor::ExtractAudio {
            preferred_quality: Some(q),
            ..
        } = self
        {
            if !is_valid_quality(q) {
                return Err(OptionsError::InvalidQuality(q.clone()));
            }
        }
        Ok(())
    }
}

fn is_valid_quality(q: &str) -> bool {
    if let Ok(level) = q.parse::<u8>() {
        return level <= 10;
    }
    let digits = q
        .strip_suffix('K')
        .or_else(|| q.strip_suffix('k'))
        .unwrap_or("");
    !digits.is_empty() && digits.bytes().all(|b| b.is_ascii_digit())
}
