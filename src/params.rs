//! Merging CLI flags with config defaults into a render configuration.

use std::path::Path;

use crate::cli::Cli;
use crate::color::{parse_color, parse_optional_color};
use crate::config::Config;
use crate::error::{CardError, InputRole};
use crate::font::FontWeight;
use crate::output::resolve_output_path;
use crate::render::RenderConfig;

/// Horizontal gap between the logo circle and the title.
pub const TITLE_GAP: i32 = 30;

/// Largest accepted circle radius; the badge is `2 * radius` pixels square.
pub const MAX_RADIUS: u32 = 8192;

/// Largest accepted title font size.
pub const MAX_FONT_SIZE: u32 = 4096;

/// Default title x: just right of the logo circle.
///
/// # Errors
///
/// Returns an error if the position does not fit in an `i32`.
pub fn default_title_x(center_x: i32, radius: u32) -> Result<i32, String> {
    i32::try_from(radius)
        .ok()
        .and_then(|r| center_x.checked_add(r))
        .and_then(|x| x.checked_add(TITLE_GAP))
        .ok_or_else(|| format!("default title x overflows for --circle-center-x {center_x}"))
}

/// Validate the circle radius.
///
/// # Errors
///
/// Returns an error if the radius is zero or above [`MAX_RADIUS`].
pub fn validate_radius(radius: u32) -> Result<(), String> {
    if radius == 0 {
        Err("--circle-radius must be at least 1".to_string())
    } else if radius > MAX_RADIUS {
        Err(format!("--circle-radius must be at most {MAX_RADIUS}"))
    } else {
        Ok(())
    }
}

/// Validate the title font size.
///
/// # Errors
///
/// Returns an error if the size is zero or above [`MAX_FONT_SIZE`].
pub fn validate_font_size(size: u32) -> Result<(), String> {
    if size == 0 {
        Err("--title-font-size must be at least 1".to_string())
    } else if size > MAX_FONT_SIZE {
        Err(format!("--title-font-size must be at most {MAX_FONT_SIZE}"))
    } else {
        Ok(())
    }
}

/// Check that both inputs exist, background first.
///
/// # Errors
///
/// Returns [`CardError::MissingInput`] for the first missing path.
pub fn check_inputs(background: &Path, logo: &Path) -> Result<(), CardError> {
    for (path, role) in [(background, InputRole::Background), (logo, InputRole::Logo)] {
        if !path.exists() {
            return Err(CardError::MissingInput { role, path: path.to_path_buf() });
        }
    }
    Ok(())
}

/// Build the render configuration: flags win over config defaults, which win
/// over built-in defaults. The title is always bold on this path.
///
/// # Errors
///
/// Returns an error if a numeric value is out of range or a color is invalid.
pub fn build_render_config(cli: &Cli, config: &Config) -> Result<RenderConfig, CardError> {
    let d = &config.defaults;

    let circle_center_x = cli.circle_center_x.unwrap_or(d.circle_center_x);
    let circle_radius = cli.circle_radius.unwrap_or(d.circle_radius);
    let title_font_size = cli.title_font_size.unwrap_or(d.title_font_size);
    validate_radius(circle_radius).map_err(CardError::InvalidArgument)?;
    validate_font_size(title_font_size).map_err(CardError::InvalidArgument)?;

    let border_color = cli.logo_border_color.as_deref().unwrap_or(&d.logo_border_color);
    let bg_color = cli.logo_bg_color.as_deref().unwrap_or(&d.logo_bg_color);

    Ok(RenderConfig {
        background: cli.background.clone(),
        logo: cli.logo.clone(),
        title: cli.title.clone(),
        output: resolve_output_path(cli.output.as_deref(), &cli.title, &d.output_dir),
        circle_center_x,
        circle_radius,
        logo_border_width: cli.logo_border_width.unwrap_or(d.logo_border_width),
        logo_border_color: parse_color(border_color).map_err(CardError::InvalidArgument)?,
        logo_bg_color: parse_optional_color(bg_color).map_err(CardError::InvalidArgument)?,
        title_position_x: match cli.title_position_x {
            Some(x) => x,
            None => default_title_x(circle_center_x, circle_radius).map_err(CardError::InvalidArgument)?,
        },
        title_font_size,
        font_weight: FontWeight::Bold,
        font_path: cli.font_path.clone().or_else(|| d.font_path.clone()),
        font_search_dirs: config.fonts.search_dirs.clone(),
    })
}

#[cfg(test)]
mod tests {
    use std::path::PathBuf;

    use clap::Parser;
    use image::Rgba;

    use super::*;

    fn parse(args: &[&str]) -> Cli {
        let mut full = vec!["modelcard", "-t", "Qwen Model", "-b", "bg.png", "-l", "logo.png"];
        full.extend_from_slice(args);
        Cli::parse_from(full)
    }

    #[test]
    fn builtin_defaults() {
        let rc = build_render_config(&parse(&[]), &Config::default()).unwrap();
        assert_eq!(rc.output, PathBuf::from("./results/Qwen_Model.png"));
        assert_eq!(rc.circle_center_x, 83);
        assert_eq!(rc.circle_radius, 45);
        assert_eq!(rc.logo_border_width, 0);
        assert_eq!(rc.logo_border_color, Rgba([255, 255, 255, 255]));
        assert_eq!(rc.logo_bg_color, Some(Rgba([255, 255, 255, 255])));
        assert_eq!(rc.title_position_x, 158);
        assert_eq!(rc.title_font_size, 50);
        assert_eq!(rc.font_weight, FontWeight::Bold);
        assert!(rc.font_path.is_none());
    }

    #[test]
    fn title_x_follows_circle() {
        let rc = build_render_config(&parse(&["--circle-center-x", "100", "--circle-radius", "50"]), &Config::default())
            .unwrap();
        assert_eq!(rc.title_position_x, 180);

        let rc = build_render_config(&parse(&["--title-position-x", "0"]), &Config::default()).unwrap();
        assert_eq!(rc.title_position_x, 0);
    }

    #[test]
    fn config_defaults_then_flags() {
        let mut config = Config::default();
        config.defaults.circle_radius = 60;
        config.defaults.logo_bg_color = "none".into();
        config.defaults.output_dir = PathBuf::from("cards");

        let rc = build_render_config(&parse(&[]), &config).unwrap();
        assert_eq!(rc.circle_radius, 60);
        assert_eq!(rc.logo_bg_color, None);
        assert_eq!(rc.output, PathBuf::from("cards/Qwen_Model.png"));

        let rc = build_render_config(&parse(&["--circle-radius", "20", "--logo-bg-color", "black"]), &config)
            .unwrap();
        assert_eq!(rc.circle_radius, 20);
        assert_eq!(rc.logo_bg_color, Some(Rgba([0, 0, 0, 255])));
    }

    #[test]
    fn rejects_bad_values() {
        let err = build_render_config(&parse(&["--circle-radius", "0"]), &Config::default()).unwrap_err();
        assert!(matches!(err, CardError::InvalidArgument(_)));

        let err =
            build_render_config(&parse(&["--logo-border-color", "not-a-color"]), &Config::default()).unwrap_err();
        assert!(matches!(err, CardError::InvalidArgument(_)));
    }

    #[test]
    fn oversized_values_are_rejected() {
        assert!(validate_radius(MAX_RADIUS).is_ok());
        assert!(validate_radius(2_147_483_648).is_err());
        assert!(validate_font_size(MAX_FONT_SIZE + 1).is_err());

        let err = build_render_config(&parse(&["--circle-radius", "2147483648"]), &Config::default()).unwrap_err();
        assert!(matches!(err, CardError::InvalidArgument(_)));
    }

    #[test]
    fn default_title_x_overflow_is_an_error() {
        assert_eq!(default_title_x(83, 45), Ok(158));
        assert!(default_title_x(i32::MAX - 10, 45).is_err());

        let err = build_render_config(&parse(&["--circle-center-x", "2147483640"]), &Config::default()).unwrap_err();
        assert!(matches!(err, CardError::InvalidArgument(_)));
    }

    #[test]
    fn check_inputs_reports_background_first() {
        let err = check_inputs(Path::new("/nonexistent/bg.png"), Path::new("/nonexistent/logo.png")).unwrap_err();
        assert!(matches!(err, CardError::MissingInput { role: InputRole::Background, .. }));
    }
}
