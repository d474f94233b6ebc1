//! Card rendering: circular logo and centered title over a background.

use std::path::{Path, PathBuf};

use image::{DynamicImage, Rgba, RgbaImage};

use crate::composite::paste_with_alpha;
use crate::error::{CardError, InputRole};
use crate::font::{resolve_typeface, FontRequest, FontWeight, ResolvedFace};
use crate::logo::{circular_badge, BadgeStyle};
use crate::output::save_card;
use crate::text::{centered_y, draw_title};

/// Everything needed for one render.
#[derive(Debug, Clone)]
pub struct RenderConfig {
    /// Background image path.
    pub background: PathBuf,
    /// Logo image path.
    pub logo: PathBuf,
    /// Title text.
    pub title: String,
    /// Where the card is written.
    pub output: PathBuf,
    /// X coordinate of the logo circle's center.
    pub circle_center_x: i32,
    /// Radius of the logo circle.
    pub circle_radius: u32,
    /// Width of the logo outline; 0 for none.
    pub logo_border_width: u32,
    /// Color of the logo outline.
    pub logo_border_color: Rgba<u8>,
    /// Fill under the logo, if any.
    pub logo_bg_color: Option<Rgba<u8>>,
    /// X coordinate the title starts at.
    pub title_position_x: i32,
    /// Title em size in pixels.
    pub title_font_size: u32,
    /// Title weight.
    pub font_weight: FontWeight,
    /// Explicit font file.
    pub font_path: Option<PathBuf>,
    /// Extra directories searched for fallback fonts.
    pub font_search_dirs: Vec<PathBuf>,
}

/// Where things ended up on the card.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderReport {
    /// The written file.
    pub output: PathBuf,
    /// Card size in pixels.
    pub size: (u32, u32),
    /// Top-left corner the logo badge was pasted at.
    pub logo_origin: (i64, i64),
    /// Draw origin of the title.
    pub title_origin: (i32, i32),
}

/// Top-left corner for the badge: centered at `center_x` horizontally and on
/// the background's middle row vertically.
#[must_use]
pub fn logo_origin(center_x: i32, radius: u32, background_height: u32) -> (i64, i64) {
    let r = i64::from(radius);
    (i64::from(center_x) - r, i64::from(background_height / 2) - r)
}

/// A finished card buffer and where its parts were placed.
pub struct Composed {
    /// The card, background size, RGBA.
    pub card: RgbaImage,
    /// Top-left corner of the logo badge.
    pub logo_origin: (i64, i64),
    /// Draw origin of the title.
    pub title_origin: (i32, i32),
}

fn load_input(path: &Path, role: InputRole) -> Result<DynamicImage, CardError> {
    if !path.is_file() {
        return Err(CardError::MissingInput { role, path: path.to_path_buf() });
    }
    image::open(path).map_err(|source| CardError::Decode { role, path: path.to_path_buf(), source })
}

/// Compose the card into a buffer without saving it.
///
/// # Errors
///
/// Returns an error if either input is missing or cannot be decoded.
pub fn compose(config: &RenderConfig) -> Result<Composed, CardError> {
    let mut background = load_input(&config.background, InputRole::Background)?.to_rgba8();
    let logo = load_input(&config.logo, InputRole::Logo)?;
    let has_alpha = logo.color().has_alpha();
    let logo = logo.to_rgba8();

    let badge = circular_badge(
        &logo,
        has_alpha,
        &BadgeStyle {
            radius: config.circle_radius,
            border_width: config.logo_border_width,
            border_color: config.logo_border_color,
            fill: config.logo_bg_color,
        },
    );

    let (lx, ly) = logo_origin(config.circle_center_x, config.circle_radius, background.height());
    paste_with_alpha(&mut background, &badge, lx, ly);
    log::debug!("logo badge {}x{} pasted at ({lx}, {ly})", badge.width(), badge.height());

    let ResolvedFace { face, notices } = resolve_typeface(&FontRequest {
        path: config.font_path.clone(),
        size: config.title_font_size,
        weight: config.font_weight,
        search_dirs: config.font_search_dirs.clone(),
    });
    for notice in &notices {
        println!("{notice}");
    }
    let (ty, how) = centered_y(face.as_ref(), &config.title, background.height(), config.title_font_size);
    log::debug!("title at ({}, {ty}) via {how:?} with {}", config.title_position_x, face.describe());
    draw_title(&mut background, face.as_ref(), &config.title, config.title_position_x, ty);

    Ok(Composed {
        card: background,
        logo_origin: (lx, ly),
        title_origin: (config.title_position_x, ty),
    })
}

/// Render the card and write it to `config.output`.
///
/// # Errors
///
/// Returns an error if an input is missing or undecodable, or the output
/// cannot be written. Nothing is written when an input is missing.
pub fn render(config: &RenderConfig) -> Result<RenderReport, CardError> {
    let Composed { card, logo_origin, title_origin } = compose(config)?;
    let size = card.dimensions();
    save_card(card, &config.output)?;
    Ok(RenderReport { output: config.output.clone(), size, logo_origin, title_origin })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fixture_dir(name: &str) -> PathBuf {
        let dir = std::env::temp_dir().join(name);
        std::fs::create_dir_all(&dir).unwrap();
        dir
    }

    fn config_in(dir: &Path) -> RenderConfig {
        let background = dir.join("bg.png");
        let logo = dir.join("logo.png");
        RgbaImage::from_pixel(800, 400, Rgba([40, 90, 160, 255])).save(&background).unwrap();
        RgbaImage::from_fn(300, 200, |x, _| {
            if x < 150 {
                Rgba([200, 0, 0, 255])
            } else {
                Rgba([0, 0, 0, 0])
            }
        })
        .save(&logo)
        .unwrap();

        RenderConfig {
            background,
            logo,
            title: "Qwen Model".to_string(),
            output: dir.join("out").join("card.png"),
            circle_center_x: 83,
            circle_radius: 45,
            logo_border_width: 0,
            logo_border_color: Rgba([255, 255, 255, 255]),
            logo_bg_color: Some(Rgba([255, 255, 255, 255])),
            title_position_x: 158,
            title_font_size: 50,
            font_weight: FontWeight::Bold,
            font_path: None,
            font_search_dirs: Vec::new(),
        }
    }

    #[test]
    fn logo_origin_formula() {
        assert_eq!(logo_origin(83, 45, 400), (38, 155));
        assert_eq!(logo_origin(10, 45, 401), (-35, 155));
    }

    #[test]
    fn renders_card_with_circular_logo() {
        let dir = fixture_dir("modelcard_render_test");
        let config = config_in(&dir);

        let report = render(&config).unwrap();
        assert_eq!(report.size, (800, 400));
        assert_eq!(report.logo_origin, (38, 155));

        let out = image::open(&config.output).unwrap().to_rgba8();
        assert_eq!(out.dimensions(), (800, 400));
        // Corner of the badge box stays background, circle interior is logo.
        assert_eq!(*out.get_pixel(38, 155), Rgba([40, 90, 160, 255]));
        assert_ne!(*out.get_pixel(83, 200), Rgba([40, 90, 160, 255]));
        // Just outside the circle on the left edge of its row.
        assert_eq!(*out.get_pixel(37, 200), Rgba([40, 90, 160, 255]));

        let _ = std::fs::remove_dir_all(&dir);
    }

    #[test]
    fn missing_logo_writes_nothing() {
        let dir = fixture_dir("modelcard_render_missing_test");
        let mut config = config_in(&dir);
        config.logo = dir.join("absent.png");

        let err = render(&config).unwrap_err();
        assert!(matches!(err, CardError::MissingInput { role: InputRole::Logo, .. }));
        assert!(!config.output.exists());

        let _ = std::fs::remove_dir_all(&dir);
    }

    #[test]
    fn rendering_is_deterministic() {
        let dir = fixture_dir("modelcard_render_repeat_test");
        let config = config_in(&dir);

        render(&config).unwrap();
        let first = std::fs::read(&config.output).unwrap();
        render(&config).unwrap();
        let second = std::fs::read(&config.output).unwrap();
        assert_eq!(first, second);

        let _ = std::fs::remove_dir_all(&dir);
    }

    #[test]
    fn jpeg_output_without_fill() {
        let dir = fixture_dir("modelcard_render_nofill_test");
        let mut config = config_in(&dir);
        config.logo_bg_color = None;
        config.output = dir.join("card.jpg");

        let report = render(&config).unwrap();
        let out = image::open(&report.output).unwrap();
        assert!(!out.color().has_alpha());
        assert_eq!(out.to_rgb8().dimensions(), (800, 400));

        let _ = std::fs::remove_dir_all(&dir);
    }
}
