use std::fmt;

use thiserror::Error;

/// The per-source step of a batch conversion that produced an error.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConversionStage {
    PixelFormatResolution,
    ImageDecode,
    SourceResolution,
}

impl fmt::Display for ConversionStage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ConversionStage::PixelFormatResolution => "pixel format resolution",
            ConversionStage::ImageDecode => "image decode",
            ConversionStage::SourceResolution => "image source resolution",
        };
        f.write_str(name)
    }
}

#[derive(Error, Debug)]
pub enum ConversionError {
    #[error("Unknown pixel format: {0}")]
    UnknownPixelFormat(i32),

    #[error("Conversion from {0} is not yet implemented")]
    UnsupportedEncoding(String),

    #[error("Unknown image format: {0}")]
    UnknownEncoding(i32),

    #[error("Failed to decode image: {0}")]
    DecodeFailed(String),

    #[error("Unknown image source name: {0}")]
    UnknownSource(String),

    #[error("Image source {0} appears more than once in one response")]
    DuplicateSource(String),

    #[error("Failed to get latest clock skew: {0}")]
    ClockSkewUnavailable(String),

    #[error("Failed to get images: {0}")]
    TransportFailure(String),

    #[error("Failed to read input file: {0}")]
    InputReadError(String),

    #[error("{stage} failed for image source '{source_name}': {cause}")]
    Stage {
        stage: ConversionStage,
        source_name: String,
        #[source]
        cause: Box<ConversionError>,
    },
}

impl ConversionError {
    pub(crate) fn at_stage(self, stage: ConversionStage, source_name: &str) -> Self {
        ConversionError::Stage {
            stage,
            source_name: source_name.to_string(),
            cause: Box::new(self),
        }
    }

    /// Returns the underlying error kind with any stage context peeled off.
    pub fn root(&self) -> &ConversionError {
        match self {
            ConversionError::Stage { cause, .. } => cause.root(),
            other => other,
        }
    }

    /// The stage a batch conversion failed in, if this error came from one.
    pub fn stage(&self) -> Option<ConversionStage> {
        match self {
            ConversionError::Stage { stage, .. } => Some(*stage),
            _ => None,
        }
    }
}

pub type Result<T> = std::result::Result<T, ConversionError>;
