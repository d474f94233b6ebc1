//! CLI argument parsing with clap.

use std::path::PathBuf;

use clap::Parser;

/// Create a model card image: a circular logo and a title over a background.
#[derive(Parser, Debug)]
#[command(
    name = "modelcard",
    version,
    about,
    after_help = "Examples:\n  \
        modelcard --title \"My Model\" --background bg.png --logo logo.png\n  \
        modelcard --title \"Qwen Model\" --background bg.png --logo qwen.png --circle-radius 50\n  \
        modelcard --title \"GPT Model\" --background bg.png --logo gpt.png --title-font-size 60"
)]
pub struct Cli {
    /// Title text for the model card.
    #[arg(short, long)]
    pub title: String,

    /// Path to background image.
    #[arg(short, long)]
    pub background: PathBuf,

    /// Path to logo image.
    #[arg(short, long)]
    pub logo: PathBuf,

    /// Output file path (default: ./results/<title>.png).
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// X coordinate of circle center (default: 83).
    #[arg(long, allow_negative_numbers = true)]
    pub circle_center_x: Option<i32>,

    /// Radius of logo circle (default: 45).
    #[arg(long)]
    pub circle_radius: Option<u32>,

    /// Width of logo border (default: 0).
    #[arg(long)]
    pub logo_border_width: Option<u32>,

    /// Color of logo border (default: white).
    #[arg(long)]
    pub logo_border_color: Option<String>,

    /// Background color of logo circle, or `none` (default: white).
    #[arg(long)]
    pub logo_bg_color: Option<String>,

    /// X position of title (default: circle center x + circle radius + 30).
    #[arg(long, allow_negative_numbers = true)]
    pub title_position_x: Option<i32>,

    /// Font size of title (default: 50).
    #[arg(long)]
    pub title_font_size: Option<u32>,

    /// Path to custom font file (.ttf).
    #[arg(long)]
    pub font_path: Option<PathBuf>,

    /// Config file path override (default: ./modelcard.toml if present).
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Verbose output.
    #[arg(short, long)]
    pub verbose: bool,
}
