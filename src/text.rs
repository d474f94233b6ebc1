//! Title placement and drawing.

use image::{Rgba, RgbaImage};

use crate::font::Typeface;

const TITLE_COLOR: Rgba<u8> = Rgba([0, 0, 0, 255]);

/// How the vertical title position was derived.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Centering {
    /// From the exact ink bounds of the title.
    InkBounds,
    /// From the face's nominal line height.
    LineHeight,
    /// From half the font size.
    Approximate,
}

/// Compute the draw-origin y that centers `title`'s visible ink on a canvas
/// of `canvas_height`.
///
/// Subtracting the ink's top offset cancels whatever space the face leaves
/// above the glyphs, so the ink itself is centered rather than the line box.
#[must_use]
pub fn centered_y(face: &dyn Typeface, title: &str, canvas_height: u32, font_size: u32) -> (i32, Centering) {
    let half = canvas_height as i32 / 2;
    if let Some(bounds) = face.ink_bounds(title) {
        return (half - bounds.height().div_euclid(2) - bounds.top, Centering::InkBounds);
    }
    if let Some(line) = face.line_height() {
        return (half - line.div_euclid(2), Centering::LineHeight);
    }
    (half - font_size as i32 / 2, Centering::Approximate)
}

/// Draw `title` in black with its origin at `(x, y)`.
pub fn draw_title(img: &mut RgbaImage, face: &dyn Typeface, title: &str, x: i32, y: i32) {
    face.draw(img, x, y, title, TITLE_COLOR);
}
