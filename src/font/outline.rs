//! TrueType/OpenType faces rasterized with rusttype.

use std::path::{Path, PathBuf};

use image::{Rgba, RgbaImage};
use rusttype::{point, Font, PositionedGlyph, Scale};

use super::{InkBounds, Typeface};
use crate::composite::blend_pixel;
use crate::error::FontError;

/// An outline font loaded from disk at a fixed em size.
pub struct OutlineFace {
    font: Font<'static>,
    scale: Scale,
    source: PathBuf,
}

impl OutlineFace {
    /// Load the font at `path`, sized so its em square is `size` pixels.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed.
    pub fn load(path: &Path, size: u32) -> Result<Self, FontError> {
        let data = std::fs::read(path)
            .map_err(|source| FontError::Io { path: path.to_path_buf(), source })?;
        let font = Font::try_from_vec(data).ok_or_else(|| FontError::Parse(path.to_path_buf()))?;
        let scale = em_scale(&font, size as f32);
        Ok(Self { font, scale, source: path.to_path_buf() })
    }

    fn layout(&self, text: &str) -> Vec<PositionedGlyph<'static>> {
        let ascent = self.font.v_metrics(self.scale).ascent;
        self.font.layout(text, self.scale, point(0.0, ascent)).collect()
    }
}

/// rusttype scales by ascent-to-descent height; convert an em size to that.
fn em_scale(font: &Font<'_>, em_px: f32) -> Scale {
    let units_per_em = f32::from(font.units_per_em());
    let vm = font.v_metrics_unscaled();
    let height = vm.ascent - vm.descent;
    if units_per_em <= 0.0 || height <= 0.0 {
        return Scale::uniform(em_px);
    }
    Scale::uniform(em_px * height / units_per_em)
}

impl Typeface for OutlineFace {
    fn describe(&self) -> String {
        format!("{} at {:.1}px", self.source.display(), self.scale.y)
    }

    fn ink_bounds(&self, text: &str) -> Option<InkBounds> {
        self.layout(text)
            .iter()
            .filter_map(PositionedGlyph::pixel_bounding_box)
            .map(|bb| InkBounds { left: bb.min.x, top: bb.min.y, right: bb.max.x, bottom: bb.max.y })
            .reduce(InkBounds::union)
    }

    fn line_height(&self) -> Option<i32> {
        let vm = self.font.v_metrics(self.scale);
        let height = (vm.ascent - vm.descent).round() as i32;
        (height > 0).then_some(height)
    }

    fn draw(&self, img: &mut RgbaImage, x: i32, y: i32, text: &str, color: Rgba<u8>) {
        let (w, h) = (img.width() as i32, img.height() as i32);
        for glyph in self.layout(text) {
            let Some(bb) = glyph.pixel_bounding_box() else {
                continue;
            };
            glyph.draw(|gx, gy, v| {
                let px = x.saturating_add(bb.min.x + gx as i32);
                let py = y.saturating_add(bb.min.y + gy as i32);
                if px < 0 || py < 0 || px >= w || py >= h {
                    return;
                }
                let coverage = (v.clamp(0.0, 1.0) * 255.0).round() as u8;
                blend_pixel(img.get_pixel_mut(px as u32, py as u32), color, coverage);
            });
        }
    }
}
