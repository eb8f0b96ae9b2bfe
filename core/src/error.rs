use thiserror::Error;

use crate::notice::Notice;

/// linkqr error types
#[derive(Error, Debug)]
pub enum Error {
    /// Blank input; the notice is meant to be shown to the user as-is
    #[error("{}: {}", .0.title, .0.description)]
    Validation(Notice),

    #[error("Invalid color: {0}")]
    InvalidColor(String),

    #[error("QR code size {0} is outside the supported range")]
    InvalidSize(u32),

    #[error("Unknown error correction level: {0}")]
    InvalidLevel(String),

    #[error("Unknown frame style: {0}")]
    InvalidFrame(String),

    #[error("QR encoding failed: {0}")]
    Encode(String),

    #[error("Image error: {0}")]
    Image(#[from] image::ImageError),

    #[error("Invalid data URL: {0}")]
    DataUrl(String),

    #[error("Clipboard error: {0}")]
    Clipboard(String),

    #[error("Share not supported")]
    ShareUnsupported,

    #[error("Failed to serialize/deserialize: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
