//! Error types for fixture generation

use thiserror::Error;

/// Result type alias for fixture operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while rendering or persisting the fixture.
///
/// A missing or unreadable font is deliberately absent here: font acquisition
/// always succeeds by substituting the built-in bitmap font.
#[derive(Error, Debug)]
pub enum Error {
    /// Canvas dimensions cannot hold any pixels
    #[error("Invalid canvas size: width={width}, height={height}")]
    InvalidCanvas { width: u32, height: u32 },

    /// Failed to encode the canvas
    #[error("PNG encoding failed: {0}")]
    EncodeError(String),

    /// Failed to write the output file
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl From<image::ImageError> for Error {
    fn from(err: image::ImageError) -> Self {
        Error::EncodeError(err.to_string())
    }
}
