//! Library error type

use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum OverlayError {
    #[error("image has zero size ({width}x{height})")]
    EmptyImage { width: usize, height: usize },

    #[error("image data is {actual} bytes, expected {expected} for {width}x{height} RGBA")]
    ImageDataMismatch {
        width: usize,
        height: usize,
        expected: usize,
        actual: usize,
    },

    #[error("failed to load image {path:?}: {source}")]
    ImageLoad {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },

    #[error("invalid overlay setting `{field}`: {reason}")]
    InvalidSetting { field: &'static str, reason: String },
}

pub type Result<T> = std::result::Result<T, OverlayError>;
