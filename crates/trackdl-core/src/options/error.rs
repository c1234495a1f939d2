#[derive(Debug, thiserror::Error)]
pub enum OptionsError {
    #[error("download format must not be empty")]
    EmptyFormat,
    #[error("postprocessors must include a FFmpegExtractAudio step")]
    NoAudioExtraction,
    #[error("postprocessors include {0} FFmpegExtractAudio steps; expected exactly one")]
    DuplicateAudioExtraction(usize),
    #[error("invalid audio quality {0:?}: expected 0-10 or a bitrate like 192K")]
    InvalidQuality(String),
    #[error("output template must not be empty")]
    EmptyOutputTemplate,
    #[error("output template {0:?} must be relative to the output directory")]
    AbsoluteOutputTemplate(String),
    #[error("output template {0:?} must contain %(ext)s")]
    TemplateWithoutExtension(String),
}
