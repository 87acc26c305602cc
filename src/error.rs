//! Error kinds surfaced by the library.

use std::path::PathBuf;

use thiserror::Error;

/// The image resource could not be loaded or rendered into pixels.
#[derive(Error, Debug)]
pub enum DecodeError {
    #[error("file not found: {}", path.display())]
    NotFound { path: PathBuf },

    #[error("failed to read {}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("unsupported or corrupt image. Supported formats: PNG, JPEG, WebP, BMP, TIFF, GIF")]
    Unsupported {
        #[source]
        source: image::ImageError,
    },

    #[error("image has no pixels")]
    Empty,

    #[error("image decoding was interrupted")]
    Interrupted,
}

/// A color string that is not valid CSS color syntax.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("invalid color {input:?}: {reason}")]
pub struct ParseError {
    pub input: String,
    pub reason: String,
}

impl ParseError {
    pub(crate) fn new(input: &str, reason: impl Into<String>) -> Self {
        Self {
            input: input.to_string(),
            reason: reason.into(),
        }
    }
}

/// A shared palette reference that does not describe a usable palette.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("expected {expected} colors, got {actual}")]
    WrongLength { expected: usize, actual: usize },

    #[error("segment {index} is not a 6-digit hex color: {segment:?}")]
    BadSegment { index: usize, segment: String },
}
