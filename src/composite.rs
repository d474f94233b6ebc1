//! Pixel-level compositing and ellipse rasterization.
//!
//! Pastes here follow the "paste through a mask" model: every channel of the
//! destination, alpha included, is interpolated toward the source by the mask
//! weight. Ellipses are rasterized with a hard pixel-center test, so edges are
//! never antialiased.

use image::{GrayImage, Luma, Rgba, RgbaImage};

/// Interpolate `dst` toward `src` by `weight` (0 keeps `dst`, 255 takes `src`).
#[inline]
fn lerp(dst: u8, src: u8, weight: u8) -> u8 {
    let w = u32::from(weight);
    ((u32::from(src) * w + u32::from(dst) * (255 - w) + 127) / 255) as u8
}

/// Blend `color` into `dst` with the given coverage, on all four channels.
pub fn blend_pixel(dst: &mut Rgba<u8>, color: Rgba<u8>, coverage: u8) {
    if coverage == 0 {
        return;
    }
    for c in 0..4 {
        dst.0[c] = lerp(dst.0[c], color.0[c], coverage);
    }
}

/// Paste `src` onto `dst` with its top-left at `(x, y)`, using `src`'s own
/// alpha as the paste mask. Pixels falling outside `dst` are clipped.
pub fn paste_with_alpha(dst: &mut RgbaImage, src: &RgbaImage, x: i64, y: i64) {
    let (dw, dh) = (i64::from(dst.width()), i64::from(dst.height()));
    for (sx, sy, p) in src.enumerate_pixels() {
        let tx = x + i64::from(sx);
        let ty = y + i64::from(sy);
        if tx < 0 || ty < 0 || tx >= dw || ty >= dh {
            continue;
        }
        blend_pixel(dst.get_pixel_mut(tx as u32, ty as u32), *p, p.0[3]);
    }
}

/// Replace the alpha channel of `img` with `mask`. Both must be the same size.
pub fn put_alpha(img: &mut RgbaImage, mask: &GrayImage) {
    debug_assert_eq!(img.dimensions(), mask.dimensions());
    for (p, m) in img.pixels_mut().zip(mask.pixels()) {
        p.0[3] = m.0[0];
    }
}

/// Whether the center of pixel `(x, y)` lies inside the ellipse inscribed in
/// the box `[x0, x1) x [y0, y1)`.
#[must_use]
pub fn in_ellipse(x: u32, y: u32, x0: f32, y0: f32, x1: f32, y1: f32) -> bool {
    let rx = (x1 - x0) / 2.0;
    let ry = (y1 - y0) / 2.0;
    if rx <= 0.0 || ry <= 0.0 {
        return false;
    }
    let dx = (x as f32 + 0.5 - (x0 + rx)) / rx;
    let dy = (y as f32 + 0.5 - (y0 + ry)) / ry;
    dx * dx + dy * dy <= 1.0
}

/// A single-channel mask, 255 inside the ellipse spanning the whole
/// `width x height` area and 0 outside.
#[must_use]
pub fn ellipse_mask(width: u32, height: u32) -> GrayImage {
    let (w, h) = (width as f32, height as f32);
    GrayImage::from_fn(width, height, |x, y| {
        if in_ellipse(x, y, 0.0, 0.0, w, h) {
            Luma([255])
        } else {
            Luma([0])
        }
    })
}

/// Fill the ellipse inscribed in the whole of `img` with `color`.
pub fn fill_ellipse(img: &mut RgbaImage, color: Rgba<u8>) {
    let (w, h) = (img.width() as f32, img.height() as f32);
    for (x, y, p) in img.enumerate_pixels_mut() {
        if in_ellipse(x, y, 0.0, 0.0, w, h) {
            *p = color;
        }
    }
}

/// Stroke the outline of the ellipse inscribed in the whole of `img`. The
/// stroke grows inward from the bounding box by `width` pixels.
pub fn stroke_ellipse(img: &mut RgbaImage, color: Rgba<u8>, width: u32) {
    if width == 0 {
        return;
    }
    let (w, h) = (img.width() as f32, img.height() as f32);
    let inset = width as f32;
    for (x, y, p) in img.enumerate_pixels_mut() {
        let outer = in_ellipse(x, y, 0.0, 0.0, w, h);
        let inner = in_ellipse(x, y, inset, inset, w - inset, h - inset);
        if outer && !inner {
            *p = color;
        }
    }
}
