//! Built-in 5x7 bitmap face, used when no outline font can be loaded.

use image::{Rgba, RgbaImage};

use super::{InkBounds, Typeface};
use crate::composite::blend_pixel;

const GLYPH_COLS: u32 = 5;
const GLYPH_ROWS: u32 = 7;
/// Advance per character in cells: glyph columns plus one column of spacing.
const ADVANCE: u32 = GLYPH_COLS + 1;
/// Rows in the line box: one blank row above and one below the glyph grid.
const LINE_ROWS: u32 = GLYPH_ROWS + 2;

/// Printable ASCII from `' '` to `'~'`, column-major, bit 0 is the top row.
const GLYPHS: [[u8; 5]; 95] = [
    [0x00, 0x00, 0x00, 0x00, 0x00], // ' '
    [0x00, 0x00, 0x5F, 0x00, 0x00], // !
    [0x00, 0x07, 0x00, 0x07, 0x00], // "
    [0x14, 0x7F, 0x14, 0x7F, 0x14], // #
    [0x24, 0x2A, 0x7F, 0x2A, 0x12], // $
    [0x23, 0x13, 0x08, 0x64, 0x62], // %
    [0x36, 0x49, 0x55, 0x22, 0x50], // &
    [0x00, 0x05, 0x03, 0x00, 0x00], // '
    [0x00, 0x1C, 0x22, 0x41, 0x00], // (
    [0x00, 0x41, 0x22, 0x1C, 0x00], // )
    [0x08, 0x2A, 0x1C, 0x2A, 0x08], // *
    [0x08, 0x08, 0x3E, 0x08, 0x08], // +
    [0x00, 0x50, 0x30, 0x00, 0x00], // ,
    [0x08, 0x08, 0x08, 0x08, 0x08], // -
    [0x00, 0x60, 0x60, 0x00, 0x00], // .
    [0x20, 0x10, 0x08, 0x04, 0x02], // /
    [0x3E, 0x51, 0x49, 0x45, 0x3E], // 0
    [0x00, 0x42, 0x7F, 0x40, 0x00], // 1
    [0x42, 0x61, 0x51, 0x49, 0x46], // 2
    [0x21, 0x41, 0x45, 0x4B, 0x31], // 3
    [0x18, 0x14, 0x12, 0x7F, 0x10], // 4
    [0x27, 0x45, 0x45, 0x45, 0x39], // 5
    [0x3C, 0x4A, 0x49, 0x49, 0x30], // 6
    [0x01, 0x71, 0x09, 0x05, 0x03], // 7
    [0x36, 0x49, 0x49, 0x49, 0x36], // 8
    [0x06, 0x49, 0x49, 0x29, 0x1E], // 9
    [0x00, 0x36, 0x36, 0x00, 0x00], // :
    [0x00, 0x56, 0x36, 0x00, 0x00], // ;
    [0x08, 0x14, 0x22, 0x41, 0x00], // <
    [0x14, 0x14, 0x14, 0x14, 0x14], // =
    [0x00, 0x41, 0x22, 0x14, 0x08], // >
    [0x02, 0x01, 0x51, 0x09, 0x06], // ?
    [0x32, 0x49, 0x79, 0x41, 0x3E], // @
    [0x7E, 0x11, 0x11, 0x11, 0x7E], // A
    [0x7F, 0x49, 0x49, 0x49, 0x36], // B
    [0x3E, 0x41, 0x41, 0x41, 0x22], // C
    [0x7F, 0x41, 0x41, 0x22, 0x1C], // D
    [0x7F, 0x49, 0x49, 0x49, 0x41], // E
    [0x7F, 0x09, 0x09, 0x09, 0x01], // F
    [0x3E, 0x41, 0x49, 0x49, 0x7A], // G
    [0x7F, 0x08, 0x08, 0x08, 0x7F], // H
    [0x00, 0x41, 0x7F, 0x41, 0x00], // I
    [0x20, 0x40, 0x41, 0x3F, 0x01], // J
    [0x7F, 0x08, 0x14, 0x22, 0x41], // K
    [0x7F, 0x40, 0x40, 0x40, 0x40], // L
    [0x7F, 0x02, 0x0C, 0x02, 0x7F], // M
    [0x7F, 0x04, 0x08, 0x10, 0x7F], // N
    [0x3E, 0x41, 0x41, 0x41, 0x3E], // O
    [0x7F, 0x09, 0x09, 0x09, 0x06], // P
    [0x3E, 0x41, 0x51, 0x21, 0x5E], // Q
    [0x7F, 0x09, 0x19, 0x29, 0x46], // R
    [0x46, 0x49, 0x49, 0x49, 0x31], // S
    [0x01, 0x01, 0x7F, 0x01, 0x01], // T
    [0x3F, 0x40, 0x40, 0x40, 0x3F], // U
    [0x1F, 0x20, 0x40, 0x20, 0x1F], // V
    [0x3F, 0x40, 0x38, 0x40, 0x3F], // W
    [0x63, 0x14, 0x08, 0x14, 0x63], // X
    [0x07, 0x08, 0x70, 0x08, 0x07], // Y
    [0x61, 0x51, 0x49, 0x45, 0x43], // Z
    [0x00, 0x7F, 0x41, 0x41, 0x00], // [
    [0x02, 0x04, 0x08, 0x10, 0x20], // backslash
    [0x00, 0x41, 0x41, 0x7F, 0x00], // ]
    [0x04, 0x02, 0x01, 0x02, 0x04], // ^
    [0x40, 0x40, 0x40, 0x40, 0x40], // _
    [0x00, 0x01, 0x02, 0x04, 0x00], // `
    [0x20, 0x54, 0x54, 0x54, 0x78], // a
    [0x7F, 0x48, 0x44, 0x44, 0x38], // b
    [0x38, 0x44, 0x44, 0x44, 0x20], // c
    [0x38, 0x44, 0x44, 0x48, 0x7F], // d
    [0x38, 0x54, 0x54, 0x54, 0x18], // e
    [0x08, 0x7E, 0x09, 0x01, 0x02], // f
    [0x0C, 0x52, 0x52, 0x52, 0x3E], // g
    [0x7F, 0x08, 0x04, 0x04, 0x78], // h
    [0x00, 0x44, 0x7D, 0x40, 0x00], // i
    [0x20, 0x40, 0x44, 0x3D, 0x00], // j
    [0x7F, 0x10, 0x28, 0x44, 0x00], // k
    [0x00, 0x41, 0x7F, 0x40, 0x00], // l
    [0x7C, 0x04, 0x18, 0x04, 0x78], // m
    [0x7C, 0x08, 0x04, 0x04, 0x78], // n
    [0x38, 0x44, 0x44, 0x44, 0x38], // o
    [0x7C, 0x14, 0x14, 0x14, 0x08], // p
    [0x08, 0x14, 0x14, 0x18, 0x7C], // q
    [0x7C, 0x08, 0x04, 0x04, 0x08], // r
    [0x48, 0x54, 0x54, 0x54, 0x20], // s
    [0x04, 0x3F, 0x44, 0x40, 0x20], // t
    [0x3C, 0x40, 0x40, 0x20, 0x7C], // u
    [0x1C, 0x20, 0x40, 0x20, 0x1C], // v
    [0x3C, 0x40, 0x30, 0x40, 0x3C], // w
    [0x44, 0x28, 0x10, 0x28, 0x44], // x
    [0x0C, 0x50, 0x50, 0x50, 0x3C], // y
    [0x44, 0x64, 0x54, 0x4C, 0x44], // z
    [0x00, 0x08, 0x36, 0x41, 0x00], // {
    [0x00, 0x00, 0x7F, 0x00, 0x00], // |
    [0x00, 0x41, 0x36, 0x08, 0x00], // }
    [0x10, 0x08, 0x08, 0x10, 0x08], // ~
];

/// Shown for characters outside printable ASCII.
const REPLACEMENT: [u8; 5] = [0x7F, 0x41, 0x41, 0x41, 0x7F];

fn glyph(ch: char) -> &'static [u8; 5] {
    let code = ch as u32;
    if (0x20..0x7F).contains(&code) {
        &GLYPHS[(code - 0x20) as usize]
    } else {
        &REPLACEMENT
    }
}

/// The fallback face. Each bitmap dot is drawn as a `cell x cell` square.
pub struct BitmapFace {
    cell: u32,
}

impl BitmapFace {
    /// A face whose line box is roughly `size` pixels tall.
    #[must_use]
    pub fn for_size(size: u32) -> Self {
        Self { cell: (size / LINE_ROWS).max(1) }
    }

    /// Every inked dot of `text` as `(column, row)` in cell units, relative to
    /// the line-box origin.
    fn dots(text: &str) -> impl Iterator<Item = (u32, u32)> + '_ {
        text.chars().enumerate().flat_map(|(i, ch)| {
            let base = i as u32 * ADVANCE;
            glyph(ch).iter().enumerate().flat_map(move |(col, bits)| {
                (0..GLYPH_ROWS)
                    .filter(move |&row| (*bits >> row) & 1 == 1)
                    .map(move |row| (base + col as u32, row + 1))
            })
        })
    }
}

impl Typeface for BitmapFace {
    fn describe(&self) -> String {
        format!("built-in 5x7 bitmap, {}px cells", self.cell)
    }

    fn ink_bounds(&self, text: &str) -> Option<InkBounds> {
        let c = self.cell as i32;
        Self::dots(text)
            .map(|(col, row)| {
                let (x, y) = (col as i32 * c, row as i32 * c);
                InkBounds { left: x, top: y, right: x + c, bottom: y + c }
            })
            .reduce(InkBounds::union)
    }

    fn line_height(&self) -> Option<i32> {
        Some((LINE_ROWS * self.cell) as i32)
    }

    fn draw(&self, img: &mut RgbaImage, x: i32, y: i32, text: &str, color: Rgba<u8>) {
        let (w, h) = (img.width() as i32, img.height() as i32);
        let c = self.cell as i32;
        for (col, row) in Self::dots(text) {
            let (ox, oy) = (x.saturating_add(col as i32 * c), y.saturating_add(row as i32 * c));
            for py in oy.max(0)..oy.saturating_add(c).min(h) {
                for px in ox.max(0)..ox.saturating_add(c).min(w) {
                    blend_pixel(img.get_pixel_mut(px as u32, py as u32), color, 255);
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cell_scales_with_size() {
        assert_eq!(BitmapFace::for_size(50).cell, 5);
        assert_eq!(BitmapFace::for_size(4).cell, 1);
    }

    #[test]
    fn blank_text_has_no_ink() {
        let face = BitmapFace::for_size(18);
        assert_eq!(face.ink_bounds("   "), None);
        assert_eq!(face.ink_bounds(""), None);
    }

    #[test]
    fn capital_h_fills_glyph_grid() {
        let face = BitmapFace::for_size(9);
        let b = face.ink_bounds("H").unwrap();
        assert_eq!(b, InkBounds { left: 0, top: 1, right: 5, bottom: 8 });
    }

    #[test]
    fn draw_far_off_canvas_is_clipped() {
        let face = BitmapFace::for_size(18);
        let mut img = RgbaImage::from_pixel(10, 10, Rgba([255, 255, 255, 255]));
        face.draw(&mut img, i32::MAX - 3, 0, "WWW", Rgba([0, 0, 0, 255]));
        assert!(img.pixels().all(|p| p.0[0] == 255));
    }

    #[test]
    fn draw_matches_bounds() {
        let face = BitmapFace::for_size(18);
        let mut img = RgbaImage::from_pixel(40, 30, Rgba([255, 255, 255, 255]));
        face.draw(&mut img, 3, 4, "I", Rgba([0, 0, 0, 255]));
        let b = face.ink_bounds("I").unwrap();
        let inked: Vec<_> = img
            .enumerate_pixels()
            .filter(|(_, _, p)| p.0[0] == 0)
            .map(|(x, y, _)| (x as i32, y as i32))
            .collect();
        let min_y = inked.iter().map(|p| p.1).min().unwrap();
        let max_y = inked.iter().map(|p| p.1).max().unwrap();
        assert_eq!(min_y, 4 + b.top);
        assert_eq!(max_y + 1, 4 + b.bottom);
    }
}
