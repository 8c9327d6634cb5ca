//! testdoc
//!
//! Generates a synthetic raster image resembling an official document (a
//! police leave application with a header band, label/value lines, a red
//! stamp and a signature footer) for use as an OCR / document-pipeline test
//! fixture.
//!
//! Output is deterministic: with the same font files available, two runs
//! produce byte-identical PNGs. When the preferred Liberation Sans faces are
//! missing, a built-in bitmap font is used instead and generation still
//! succeeds.
//!
//! # Example
//!
//! ```no_run
//! use testdoc::FixtureConfig;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let config = FixtureConfig::default();
//! let shot = testdoc::generate(&config)?;
//! println!("{}x{} sha256={}", shot.width, shot.height, shot.digest_hex());
//! # Ok(())
//! # }
//! ```

use std::fs;
use std::path::{Path, PathBuf};

use image::RgbImage;
use log::info;

pub mod document;
pub mod error;
pub mod fonts;
pub mod rendering;

pub use error::{Error, Result};
pub use rendering::Screenshot;

use document::DocumentContent;
use rendering::{layout, raster};

pub const DEFAULT_OUTPUT_PATH: &str = "test_document.png";
pub const DEFAULT_TITLE_FONT: &str = "/usr/share/fonts/truetype/liberation/LiberationSans-Bold.ttf";
pub const DEFAULT_BODY_FONT: &str = "/usr/share/fonts/truetype/liberation/LiberationSans-Regular.ttf";

/// Parameters of a fixture run
///
/// The defaults are the literal values the `testdoc` binary always uses;
/// there is no flag or file that changes them. Tests override individual
/// fields to redirect output or to force the font fallback.
///
/// # Examples
///
/// ```
/// let cfg = testdoc::FixtureConfig::default();
/// assert_eq!(cfg.viewport.width, 800);
/// assert_eq!(cfg.output_path.to_str(), Some("test_document.png"));
/// ```
#[derive(Debug, Clone)]
pub struct FixtureConfig {
    /// Canvas dimensions
    pub viewport: Viewport,
    /// Canvas background
    pub background: (u8, u8, u8),
    /// Preferred face for the department name and section title
    pub title_font_path: PathBuf,
    /// Preferred face for everything else
    pub body_font_path: PathBuf,
    pub title_font_px: f32,
    pub body_font_px: f32,
    /// Where the PNG is written; an existing file is overwritten
    pub output_path: PathBuf,
}

impl Default for FixtureConfig {
    fn default() -> Self {
        Self {
            viewport: Viewport::default(),
            background: (255, 255, 255),
            title_font_path: PathBuf::from(DEFAULT_TITLE_FONT),
            body_font_path: PathBuf::from(DEFAULT_BODY_FONT),
            title_font_px: 24.0,
            body_font_px: 16.0,
            output_path: PathBuf::from(DEFAULT_OUTPUT_PATH),
        }
    }
}

/// Canvas dimensions
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    pub width: u32,
    pub height: u32,
}

impl Default for Viewport {
    fn default() -> Self {
        Self {
            width: 800,
            height: 600,
        }
    }
}

/// Draw the fixture onto a fresh canvas without encoding it.
pub fn render_canvas(config: &FixtureConfig) -> Result<RgbImage> {
    let fonts = fonts::load_font_pair(config);
    let commands = layout::layout_document(&DocumentContent::default(), config.viewport);
    raster::rasterize(config.viewport, config.background, &commands, &fonts)
}

/// Render the fixture in memory and return the encoded PNG.
pub fn render_fixture(config: &FixtureConfig) -> Result<Screenshot> {
    raster::encode_png(&render_canvas(config)?)
}

/// Render the fixture and write it to `config.output_path`, replacing any
/// existing file. The caller reports success only after this returns `Ok`.
pub fn generate(config: &FixtureConfig) -> Result<Screenshot> {
    let shot = render_fixture(config)?;
    fs::write(&config.output_path, &shot.png_data)?;
    info!(
        "wrote {} ({}x{}, {} bytes)",
        config.output_path.display(),
        shot.width,
        shot.height,
        shot.png_data.len()
    );
    Ok(shot)
}

/// The confirmation line printed after a successful write.
pub fn confirmation_message(path: &Path) -> String {
    format!("Test document image created: {}", path.display())
}
