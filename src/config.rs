//! Optional TOML configuration supplying defaults for the CLI flags.

use std::path::{Path, PathBuf};

use serde::Deserialize;

/// Config file looked up in the working directory when `--config` is absent.
pub const DEFAULT_CONFIG_FILE: &str = "modelcard.toml";

/// Top-level configuration.
#[derive(Debug, Default, Deserialize)]
pub struct Config {
    /// Default values used when a flag is not given.
    #[serde(default)]
    pub defaults: DefaultsConfig,

    /// Font lookup settings.
    #[serde(default)]
    pub fonts: FontsConfig,
}

/// Default parameter values from config file.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct DefaultsConfig {
    /// X coordinate of the logo circle's center.
    pub circle_center_x: i32,
    /// Radius of the logo circle.
    pub circle_radius: u32,
    /// Width of the logo outline.
    pub logo_border_width: u32,
    /// Color of the logo outline.
    pub logo_border_color: String,
    /// Fill under the logo; `none` disables it.
    pub logo_bg_color: String,
    /// Title em size in pixels.
    pub title_font_size: u32,
    /// Font file to use for the title.
    pub font_path: Option<PathBuf>,
    /// Directory for auto-named output files.
    pub output_dir: PathBuf,
}

impl Default for DefaultsConfig {
    fn default() -> Self {
        Self {
            circle_center_x: 83,
            circle_radius: 45,
            logo_border_width: 0,
            logo_border_color: "white".to_string(),
            logo_bg_color: "white".to_string(),
            title_font_size: 50,
            font_path: None,
            output_dir: PathBuf::from("./results"),
        }
    }
}

/// Font lookup settings.
#[derive(Debug, Default, Deserialize)]
pub struct FontsConfig {
    /// Directories searched for fallback fonts before the system ones.
    #[serde(default)]
    pub search_dirs: Vec<PathBuf>,
}

impl Config {
    /// Load configuration from the given path, or return defaults.
    ///
    /// # Errors
    ///
    /// Returns an error if the file exists but cannot be parsed.
    pub fn load(path: &Path) -> Result<Self, String> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let contents = std::fs::read_to_string(path)
            .map_err(|e| format!("Failed to read config {}: {e}", path.display()))?;
        toml::from_str(&contents)
            .map_err(|e| format!("Failed to parse config {}: {e}", path.display()))
    }
}

/// Discover the config file path: the explicit `--config` value, else
/// `modelcard.toml` in the working directory.
#[must_use]
pub fn discover_config_path(explicit: Option<&Path>) -> PathBuf {
    explicit.map_or_else(|| PathBuf::from(DEFAULT_CONFIG_FILE), Path::to_path_buf)
}
