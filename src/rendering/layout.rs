/// Fixed-coordinate layout of the mock document

use crate::document::DocumentContent;
use crate::fonts::FontRole;
use crate::rendering::paint::PaintCommand;
use crate::Viewport;

pub const HEADER_HEIGHT: i32 = 80;
pub const HEADER_RGB: (u8, u8, u8) = (0x1e, 0x3a, 0x8a);
pub const WHITE: (u8, u8, u8) = (255, 255, 255);
pub const BLACK: (u8, u8, u8) = (0, 0, 0);
pub const RED: (u8, u8, u8) = (255, 0, 0);

pub const SECTION_TITLE_Y: i32 = 120;
/// Gap between the section title and the first content line
pub const SECTION_GAP: i32 = 50;
pub const LINE_STEP: i32 = 30;
pub const CONTENT_X: i32 = 50;

pub const STAMP_STROKE: u32 = 3;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rect {
    pub x: i32,
    pub y: i32,
    pub width: u32,
    pub height: u32,
}

impl Rect {
    /// Rectangle spanning two corners, both inclusive.
    pub fn from_corners(x0: i32, y0: i32, x1: i32, y1: i32) -> Self {
        let (left, right) = (x0.min(x1), x0.max(x1));
        let (top, bottom) = (y0.min(y1), y0.max(y1));
        Self {
            x: left,
            y: top,
            width: (right - left) as u32 + 1,
            height: (bottom - top) as u32 + 1,
        }
    }

    /// The rectangle shrunk by `by` pixels on every side, if anything is left.
    pub fn inset(&self, by: u32) -> Option<Rect> {
        let width = self.width.checked_sub(by * 2).filter(|w| *w > 0)?;
        let height = self.height.checked_sub(by * 2).filter(|h| *h > 0)?;
        Some(Rect {
            x: self.x + by as i32,
            y: self.y + by as i32,
            width,
            height,
        })
    }
}

/// Stamp outline anchored to the bottom-right corner of the viewport.
pub fn stamp_rect(viewport: Viewport) -> Rect {
    let (w, h) = (viewport.width as i32, viewport.height as i32);
    Rect::from_corners(w - 150, h - 120, w - 20, h - 50)
}

/// Build the display list for `doc` in paint order.
///
/// Content lines advance a cursor by `LINE_STEP` with no wrapping; a long list
/// runs into the footer or off the canvas.
pub fn layout_document(doc: &DocumentContent, viewport: Viewport) -> Vec<PaintCommand> {
    let (w, h) = (viewport.width as i32, viewport.height as i32);
    let mut cmds = Vec::with_capacity(doc.lines.len() + 10);

    // Header band
    cmds.push(PaintCommand::SolidRect {
        rect: Rect::from_corners(0, 0, w, HEADER_HEIGHT),
        rgb: HEADER_RGB,
    });
    cmds.push(PaintCommand::text(20, 20, doc.department, FontRole::Title, WHITE));
    cmds.push(PaintCommand::text(20, 50, doc.subtitle, FontRole::Body, WHITE));

    // Section title and label/value lines
    let mut y = SECTION_TITLE_Y;
    cmds.push(PaintCommand::text(CONTENT_X, y, doc.section_title, FontRole::Title, BLACK));
    y += SECTION_GAP;
    for line in doc.lines {
        cmds.push(PaintCommand::text(CONTENT_X, y, line, FontRole::Body, BLACK));
        y += LINE_STEP;
    }

    // Stamp
    cmds.push(PaintCommand::OutlineRect {
        rect: stamp_rect(viewport),
        stroke: STAMP_STROKE,
        rgb: RED,
    });
    cmds.push(PaintCommand::text(w - 140, h - 110, doc.stamp_lines[0], FontRole::Body, RED));
    cmds.push(PaintCommand::text(w - 140, h - 90, doc.stamp_lines[1], FontRole::Body, RED));

    // Signature area
    cmds.push(PaintCommand::text(CONTENT_X, h - 50, doc.signature_line, FontRole::Body, BLACK));
    cmds.push(PaintCommand::text(CONTENT_X, h - 25, doc.date_line, FontRole::Body, BLACK));

    cmds
}

#[cfg(test)]
mod tests {
    use super::*;

    fn text_ys(cmds: &[PaintCommand]) -> Vec<(i32, String)> {
        cmds.iter()
            .filter_map(|c| match c {
                PaintCommand::Text { y, text, .. } => Some((*y, text.clone())),
                _ => None,
            })
            .collect()
    }

    #[test]
    fn corners_are_inclusive() {
        let r = Rect::from_corners(0, 0, 800, 80);
        assert_eq!(r.width, 801);
        assert_eq!(r.height, 81);
        assert_eq!(r.y + r.height as i32 - 1, 80);

        let swapped = Rect::from_corners(780, 550, 650, 480);
        assert_eq!(swapped, Rect::from_corners(650, 480, 780, 550));
    }

    #[test]
    fn inset_collapses_to_none() {
        let r = Rect::from_corners(0, 0, 3, 3);
        assert_eq!(r.inset(1), Some(Rect { x: 1, y: 1, width: 2, height: 2 }));
        assert_eq!(r.inset(2), None);
    }

    #[test]
    fn layout_document_orders_header_body_stamp_footer() {
        let doc = DocumentContent::default();
        let cmds = layout_document(&doc, Viewport::default());
        // band + 2 header lines + title + 8 lines + stamp outline + 2 stamp lines + 2 footer lines
        assert_eq!(cmds.len(), 17);
        assert!(matches!(cmds[0], PaintCommand::SolidRect { rgb: HEADER_RGB, .. }));
        assert!(matches!(cmds[12], PaintCommand::OutlineRect { stroke: 3, rgb: RED, .. }));

        let texts = text_ys(&cmds);
        assert_eq!(texts[0], (20, doc.department.to_string()));
        assert_eq!(texts[2], (120, "LEAVE APPLICATION".to_string()));
        for (i, line) in doc.lines.iter().enumerate() {
            assert_eq!(texts[3 + i], (170 + 30 * i as i32, line.to_string()));
        }
        assert_eq!(texts.last().unwrap(), &(575, "Date: 2024-01-10".to_string()));
    }

    #[test]
    fn stamp_is_anchored_bottom_right() {
        let r = stamp_rect(Viewport::default());
        assert_eq!((r.x, r.y), (650, 480));
        assert_eq!((r.width, r.height), (131, 71));

        let r = stamp_rect(Viewport { width: 400, height: 300 });
        assert_eq!((r.x, r.y), (250, 180));
    }

    #[test]
    fn header_text_uses_roles() {
        let cmds = layout_document(&DocumentContent::default(), Viewport::default());
        let roles: Vec<FontRole> = cmds
            .iter()
            .filter_map(|c| match c {
                PaintCommand::Text { role, .. } => Some(*role),
                _ => None,
            })
            .collect();
        assert_eq!(roles[0], FontRole::Title);
        assert_eq!(roles[1], FontRole::Body);
        assert_eq!(roles[2], FontRole::Title);
        assert!(roles[3..].iter().all(|r| *r == FontRole::Body));
    }
}
