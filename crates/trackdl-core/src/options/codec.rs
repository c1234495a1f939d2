use serde::{Deserialize, Serialize};
use std::fmt;

/// Audio codecs accepted by the downloader's audio extraction step.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AudioCodec {
    /// Keep the source codec when possible.
    Best,
    Aac,
    Alac,
    Flac,
    M4a,
    #[default]
    Mp3,
    Opus,
    Vorbis,
    Wav,
}

impl AudioCodec {
    pub fn as_str(self) -> &'static str {
        match self {
            AudioCodec::Best => "best",
            AudioCodec::Aac => "aac",
            AudioCodec::Alac => "alac",
            AudioCodec::Flac => "flac",
            AudioCodec::M4a => "m4a",
            AudioCodec::Mp3 => "mp3",
            AudioCodec::Opus => "opus",
            AudioCodec::Vorbis => "vorbis",
            AudioCodec::Wav => "wav",
        }
    }
}

impl fmt::Display for AudioCodec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
