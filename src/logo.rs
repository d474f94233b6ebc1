//! Turning an arbitrary logo into a fixed-size circular badge.

use image::imageops::{self, FilterType};
use image::{Rgba, RgbaImage};

use crate::composite::{ellipse_mask, fill_ellipse, paste_with_alpha, put_alpha, stroke_ellipse};

const OPAQUE_WHITE: Rgba<u8> = Rgba([255, 255, 255, 255]);
const CLEAR: Rgba<u8> = Rgba([0, 0, 0, 0]);

/// Styling applied around the circular logo.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BadgeStyle {
    /// Circle radius in pixels; the badge is `2 * radius` square.
    pub radius: u32,
    /// Outline width in pixels; 0 disables the outline.
    pub border_width: u32,
    /// Outline color.
    pub border_color: Rgba<u8>,
    /// Fill laid down under the logo, if any.
    pub fill: Option<Rgba<u8>>,
}

/// The crop box `(x, y, side, side)` that takes the centered square of a
/// `width x height` image.
#[must_use]
pub fn center_square(width: u32, height: u32) -> (u32, u32, u32, u32) {
    let side = width.min(height);
    ((width - side) / 2, (height - side) / 2, side, side)
}

/// Build the circular badge for `logo`.
///
/// `has_alpha` tells whether the decoded logo carried an alpha channel; only
/// then is it blended over white, otherwise it is resized as-is.
#[must_use]
pub fn circular_badge(logo: &RgbaImage, has_alpha: bool, style: &BadgeStyle) -> RgbaImage {
    let size = style.radius.saturating_mul(2);

    let (x, y, w, h) = center_square(logo.width(), logo.height());
    let mut square = if w == logo.width() && h == logo.height() {
        logo.clone()
    } else {
        imageops::crop_imm(logo, x, y, w, h).to_image()
    };
    log::debug!("logo {}x{} squared to {w}x{w} at ({x}, {y})", logo.width(), logo.height());

    // Flatten before resampling so transparent pixels resample as white.
    if has_alpha {
        let mut backed = RgbaImage::from_pixel(w, h, OPAQUE_WHITE);
        paste_with_alpha(&mut backed, &square, 0, 0);
        square = backed;
    }

    let mut flat = imageops::resize(&square, size, size, FilterType::Lanczos3);

    put_alpha(&mut flat, &ellipse_mask(size, size));

    let mut badge = RgbaImage::from_pixel(size, size, CLEAR);
    if let Some(fill) = style.fill {
        fill_ellipse(&mut badge, fill);
    }
    paste_with_alpha(&mut badge, &flat, 0, 0);

    if style.border_width > 0 {
        stroke_ellipse(&mut badge, style.border_color, style.border_width);
    }

    badge
}
