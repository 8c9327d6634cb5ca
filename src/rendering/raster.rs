/// Rasterizer: executes paint commands on an RGB canvas and encodes PNG

use ab_glyph::PxScale;
use image::codecs::png::PngEncoder;
use image::{ExtendedColorType, ImageEncoder, Rgb, RgbImage};
use imageproc::drawing::{draw_filled_rect_mut, draw_hollow_rect_mut, draw_text_mut};

use crate::fonts::{bitmap, FontHandle, FontPair};
use crate::rendering::layout::Rect;
use crate::rendering::paint::PaintCommand;
use crate::rendering::Screenshot;
use crate::{Error, Result, Viewport};

fn rgb(c: (u8, u8, u8)) -> Rgb<u8> {
    Rgb([c.0, c.1, c.2])
}

fn to_imageproc(r: Rect) -> imageproc::rect::Rect {
    imageproc::rect::Rect::at(r.x, r.y).of_size(r.width, r.height)
}

/// Allocate a canvas filled with `background`.
pub fn new_canvas(viewport: Viewport, background: (u8, u8, u8)) -> Result<RgbImage> {
    if viewport.width == 0 || viewport.height == 0 {
        return Err(Error::InvalidCanvas {
            width: viewport.width,
            height: viewport.height,
        });
    }
    Ok(RgbImage::from_pixel(viewport.width, viewport.height, rgb(background)))
}

/// Draw `text` with its top-left corner at (x, y) using `font`.
pub fn draw_text(canvas: &mut RgbImage, font: &FontHandle, x: i32, y: i32, text: &str, color: Rgb<u8>) {
    match font {
        FontHandle::TrueType { font, px } => {
            draw_text_mut(canvas, color, x, y, PxScale::from(*px), font, text);
        }
        FontHandle::Builtin => bitmap::draw_text(canvas, x, y, text, color),
    }
}

/// Execute one command. Anything outside the canvas is clipped.
pub fn paint(canvas: &mut RgbImage, cmd: &PaintCommand, fonts: &FontPair) {
    match cmd {
        PaintCommand::SolidRect { rect, rgb: c } => {
            if rect.width > 0 && rect.height > 0 {
                draw_filled_rect_mut(canvas, to_imageproc(*rect), rgb(*c));
            }
        }
        PaintCommand::OutlineRect { rect, stroke, rgb: c } => {
            for i in 0..*stroke {
                match rect.inset(i) {
                    Some(r) => draw_hollow_rect_mut(canvas, to_imageproc(r), rgb(*c)),
                    None => break,
                }
            }
        }
        PaintCommand::Text { x, y, text, role, rgb: c } => {
            draw_text(canvas, fonts.get(*role), *x, *y, text, rgb(*c));
        }
    }
}

/// Paint `commands` in order onto a fresh canvas.
pub fn rasterize(
    viewport: Viewport,
    background: (u8, u8, u8),
    commands: &[PaintCommand],
    fonts: &FontPair,
) -> Result<RgbImage> {
    let mut canvas = new_canvas(viewport, background)?;
    for cmd in commands {
        paint(&mut canvas, cmd, fonts);
    }
    Ok(canvas)
}

/// Encode the canvas as an 8-bit RGB PNG.
pub fn encode_png(canvas: &RgbImage) -> Result<Screenshot> {
    let (width, height) = canvas.dimensions();
    let mut png_data = Vec::new();
    PngEncoder::new(&mut png_data).write_image(
        canvas.as_raw(),
        width,
        height,
        ExtendedColorType::Rgb8,
    )?;
    Ok(Screenshot {
        width,
        height,
        png_data,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fonts::FontRole;

    const WHITE: (u8, u8, u8) = (255, 255, 255);

    #[test]
    fn zero_sized_canvas_is_rejected() {
        let err = new_canvas(Viewport { width: 0, height: 10 }, WHITE).unwrap_err();
        assert!(matches!(err, Error::InvalidCanvas { width: 0, height: 10 }));
    }

    #[test]
    fn outline_stroke_grows_inward() {
        let fonts = FontPair::builtin();
        let cmds = vec![PaintCommand::OutlineRect {
            rect: Rect::from_corners(2, 2, 17, 17),
            stroke: 3,
            rgb: (255, 0, 0),
        }];
        let img = rasterize(Viewport { width: 20, height: 20 }, WHITE, &cmds, &fonts).unwrap();
        let red = Rgb([255, 0, 0]);
        let white = Rgb([255, 255, 255]);
        assert_eq!(*img.get_pixel(1, 10), white);
        assert_eq!(*img.get_pixel(2, 10), red);
        assert_eq!(*img.get_pixel(4, 10), red);
        assert_eq!(*img.get_pixel(5, 10), white);
        assert_eq!(*img.get_pixel(17, 10), red);
        assert_eq!(*img.get_pixel(18, 10), white);
    }

    #[test]
    fn off_canvas_commands_are_clipped() {
        let fonts = FontPair::builtin();
        let cmds = vec![
            PaintCommand::SolidRect {
                rect: Rect::from_corners(0, 0, 100, 4),
                rgb: (0, 0, 255),
            },
            PaintCommand::text(5, 500, "off the bottom", FontRole::Body, (0, 0, 0)),
        ];
        let img = rasterize(Viewport { width: 10, height: 10 }, WHITE, &cmds, &fonts).unwrap();
        assert_eq!(*img.get_pixel(9, 4), Rgb([0, 0, 255]));
        assert_eq!(*img.get_pixel(9, 5), Rgb([255, 255, 255]));
    }

    #[test]
    fn encode_png_writes_signature_and_dimensions() {
        let canvas = new_canvas(Viewport { width: 32, height: 16 }, WHITE).unwrap();
        let shot = encode_png(&canvas).unwrap();
        assert_eq!((shot.width, shot.height), (32, 16));
        assert_eq!(&shot.png_data[0..8], b"\x89PNG\r\n\x1a\n");
        let decoded = image::load_from_memory(&shot.png_data).unwrap();
        assert_eq!(decoded.width(), 32);
        assert_eq!(decoded.height(), 16);
    }
}
