//! Rendering pipeline: layout -> paint commands -> raster -> PNG

pub mod layout;
pub mod paint;
pub mod raster;

use image::RgbImage;
use sha2::{Digest, Sha256};

/// An encoded fixture image.
#[derive(Debug, Clone)]
pub struct Screenshot {
    pub width: u32,
    pub height: u32,
    pub png_data: Vec<u8>,
}

impl Screenshot {
    /// Lowercase hex SHA-256 of the PNG bytes; equal digests mean identical files.
    pub fn digest_hex(&self) -> String {
        hex::encode(Sha256::digest(&self.png_data))
    }
}

/// Lowercase hex SHA-256 of the raw RGB8 pixels, row-major.
///
/// Unlike `Screenshot::digest_hex` this does not change when the PNG encoder's
/// compression output changes.
pub fn pixel_digest_hex(canvas: &RgbImage) -> String {
    hex::encode(Sha256::digest(canvas.as_raw()))
}
