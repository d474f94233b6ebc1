//! Output file naming and saving.

use std::path::{Path, PathBuf};

use image::{DynamicImage, RgbaImage};

use crate::error::CardError;

/// Turn a title into a file stem.
///
/// Keeps alphanumerics, spaces, hyphens and underscores, trims trailing
/// whitespace, then replaces spaces with underscores.
#[must_use]
pub fn sanitize_title(title: &str) -> String {
    let kept: String =
        title.chars().filter(|c| c.is_alphanumeric() || matches!(c, ' ' | '-' | '_')).collect();
    kept.trim_end().replace(' ', "_")
}

/// Resolve the output path: use explicit path or derive one from the title.
#[must_use]
pub fn resolve_output_path(explicit: Option<&Path>, title: &str, output_dir: &Path) -> PathBuf {
    match explicit {
        Some(p) => p.to_path_buf(),
        None => output_dir.join(format!("{}.png", sanitize_title(title))),
    }
}

/// Whether the path names a format without an alpha channel.
#[must_use]
pub fn is_jpeg_path(path: &Path) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .is_some_and(|e| e.eq_ignore_ascii_case("jpg") || e.eq_ignore_ascii_case("jpeg"))
}

/// Save the finished card, dropping alpha for JPEG output. Missing parent
/// directories are created.
///
/// # Errors
///
/// Returns an error if the directory cannot be created or encoding fails.
pub fn save_card(card: RgbaImage, path: &Path) -> Result<(), CardError> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)?;
    }

    let img = DynamicImage::ImageRgba8(card);
    let result = if is_jpeg_path(path) {
        DynamicImage::ImageRgb8(img.to_rgb8()).save(path)
    } else {
        img.save(path)
    };
    result.map_err(|source| CardError::Save { path: path.to_path_buf(), source })
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{ColorType, Rgba};

    #[test]
    fn sanitize_basic() {
        assert_eq!(sanitize_title("Qwen Model"), "Qwen_Model");
    }

    #[test]
    fn sanitize_strips_punctuation() {
        assert_eq!(sanitize_title("GPT-4: Test!"), "GPT-4_Test");
    }

    #[test]
    fn sanitize_trailing_whitespace() {
        assert_eq!(sanitize_title("Llama 3 ?? "), "Llama_3");
        assert_eq!(sanitize_title("  lead"), "__lead");
    }

    #[test]
    fn resolve_explicit() {
        let path = resolve_output_path(Some(Path::new("card.jpg")), "ignored", Path::new("./results"));
        assert_eq!(path, PathBuf::from("card.jpg"));
    }

    #[test]
    fn resolve_auto() {
        let path = resolve_output_path(None, "GPT-4: Test!", Path::new("./results"));
        assert_eq!(path, PathBuf::from("./results/GPT-4_Test.png"));
    }

    #[test]
    fn jpeg_detection() {
        assert!(is_jpeg_path(Path::new("a.jpg")));
        assert!(is_jpeg_path(Path::new("a.JPEG")));
        assert!(!is_jpeg_path(Path::new("a.png")));
        assert!(!is_jpeg_path(Path::new("jpg")));
    }

    #[test]
    fn alpha_kept_for_png_dropped_for_jpeg() {
        let dir = std::env::temp_dir().join("modelcard_output_test");
        let card = RgbaImage::from_pixel(8, 8, Rgba([10, 20, 30, 128]));

        let png = dir.join("nested").join("card.png");
        save_card(card.clone(), &png).unwrap();
        assert_eq!(image::open(&png).unwrap().color(), ColorType::Rgba8);

        let jpg = dir.join("card.jpg");
        save_card(card, &jpg).unwrap();
        assert!(!image::open(&jpg).unwrap().color().has_alpha());

        let _ = std::fs::remove_dir_all(&dir);
    }
}
