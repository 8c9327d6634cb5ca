/// Paint command set for the fixture display list

use crate::fonts::FontRole;
use crate::rendering::layout::Rect;

#[derive(Debug, Clone, PartialEq)]
pub enum PaintCommand {
    SolidRect {
        rect: Rect,
        rgb: (u8, u8, u8),
    },
    /// Rectangle outline; the stroke grows inward from `rect`'s edge.
    OutlineRect {
        rect: Rect,
        stroke: u32,
        rgb: (u8, u8, u8),
    },
    /// Text with its top-left corner at (x, y)
    Text {
        x: i32,
        y: i32,
        text: String,
        role: FontRole,
        rgb: (u8, u8, u8),
    },
}

impl PaintCommand {
    pub fn text(x: i32, y: i32, text: &str, role: FontRole, rgb: (u8, u8, u8)) -> Self {
        PaintCommand::Text {
            x,
            y,
            text: text.to_string(),
            role,
            rgb,
        }
    }
}
