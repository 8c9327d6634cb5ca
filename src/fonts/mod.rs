//! Font handle acquisition.
//!
//! Loading never fails: when a preferred TrueType face cannot be read or
//! parsed, the built-in bitmap font is substituted. The substitution is
//! logged at debug level only.

pub mod bitmap;

use std::fmt;
use std::fs;
use std::path::Path;

use ab_glyph::FontVec;
use log::debug;

use crate::FixtureConfig;

/// Which of the two font handles a piece of text uses.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FontRole {
    Title,
    Body,
}

/// A typeface ready to rasterize text at a fixed size.
pub enum FontHandle {
    /// A TrueType/OpenType face at `px` pixels
    TrueType { font: FontVec, px: f32 },
    /// The built-in bitmap font; ignores the requested size
    Builtin,
}

impl FontHandle {
    pub fn builtin() -> Self {
        FontHandle::Builtin
    }

    pub fn is_builtin(&self) -> bool {
        matches!(self, FontHandle::Builtin)
    }
}

impl fmt::Debug for FontHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FontHandle::TrueType { px, .. } => f.debug_struct("TrueType").field("px", px).finish(),
            FontHandle::Builtin => f.write_str("Builtin"),
        }
    }
}

/// Title and body handles used for one render.
#[derive(Debug)]
pub struct FontPair {
    pub title: FontHandle,
    pub body: FontHandle,
}

impl FontPair {
    /// Both roles backed by the built-in font.
    pub fn builtin() -> Self {
        Self {
            title: FontHandle::builtin(),
            body: FontHandle::builtin(),
        }
    }

    pub fn get(&self, role: FontRole) -> &FontHandle {
        match role {
            FontRole::Title => &self.title,
            FontRole::Body => &self.body,
        }
    }
}

/// Try to load a TrueType face from `path` at `px` pixels.
pub fn load_font(path: &Path, px: f32) -> Option<FontHandle> {
    let bytes = match fs::read(path) {
        Ok(b) => b,
        Err(e) => {
            debug!("font {} unavailable: {}", path.display(), e);
            return None;
        }
    };
    match FontVec::try_from_vec(bytes) {
        Ok(font) => Some(FontHandle::TrueType { font, px }),
        Err(e) => {
            debug!("font {} could not be parsed: {}", path.display(), e);
            None
        }
    }
}

/// Acquire the title and body handles named by `config`.
///
/// If either face fails to load, both roles fall back to the built-in font,
/// so title and body text look identical in the degraded output.
pub fn load_font_pair(config: &FixtureConfig) -> FontPair {
    let title = load_font(&config.title_font_path, config.title_font_px);
    let body = load_font(&config.body_font_path, config.body_font_px);
    match (title, body) {
        (Some(title), Some(body)) => FontPair { title, body },
        _ => {
            debug!("falling back to built-in font for title and body");
            FontPair::builtin()
        }
    }
}
