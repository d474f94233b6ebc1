//! Typefaces used to draw the title.

pub mod bitmap;
pub mod outline;
pub mod resolve;

use image::{Rgba, RgbaImage};

pub use resolve::{resolve_typeface, FontRequest, FontWeight, ResolvedFace};

/// Pixel-space box of rendered ink, relative to the draw origin.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InkBounds {
    /// Leftmost inked column.
    pub left: i32,
    /// Topmost inked row.
    pub top: i32,
    /// One past the rightmost inked column.
    pub right: i32,
    /// One past the bottommost inked row.
    pub bottom: i32,
}

impl InkBounds {
    /// Height of the inked area.
    #[must_use]
    pub fn height(&self) -> i32 {
        self.bottom - self.top
    }

    fn union(self, other: Self) -> Self {
        Self {
            left: self.left.min(other.left),
            top: self.top.min(other.top),
            right: self.right.max(other.right),
            bottom: self.bottom.max(other.bottom),
        }
    }
}

/// A face that can measure and draw a single line of text.
///
/// The draw origin is the top of the line box: text drawn at `(x, y)` has its
/// ascender line at `y`.
pub trait Typeface {
    /// Short human-readable description, for logging.
    fn describe(&self) -> String;

    /// Exact ink bounds of `text` drawn at the origin, or `None` if nothing
    /// would be inked.
    fn ink_bounds(&self, text: &str) -> Option<InkBounds>;

    /// Nominal line height, or `None` if the face has no usable metrics.
    fn line_height(&self) -> Option<i32>;

    /// Draw `text` onto `img` with its origin at `(x, y)`.
    fn draw(&self, img: &mut RgbaImage, x: i32, y: i32, text: &str, color: Rgba<u8>);
}
