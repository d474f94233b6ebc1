//! Unified error type for modelcard.

use std::fmt;
use std::path::PathBuf;

use thiserror::Error;

/// Which of the two input images an error refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputRole {
    /// The page the logo and title are drawn onto.
    Background,
    /// The logo cropped into the circle.
    Logo,
}

impl fmt::Display for InputRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Background => f.write_str("Background"),
            Self::Logo => f.write_str("Logo"),
        }
    }
}

/// Errors that can occur while rendering a model card.
#[derive(Debug, Error)]
pub enum CardError {
    /// An input image path does not exist.
    #[error("{role} image '{}' not found.", path.display())]
    MissingInput {
        /// Which input is missing.
        role: InputRole,
        /// The path as given.
        path: PathBuf,
    },

    /// An input image exists but could not be decoded.
    #[error("Failed to decode {role} image {}: {source}", path.display())]
    Decode {
        /// Which input failed.
        role: InputRole,
        /// The path as given.
        path: PathBuf,
        /// Underlying decoder error.
        source: image::ImageError,
    },

    /// The rendered card could not be encoded or written.
    #[error("Failed to save {}: {source}", path.display())]
    Save {
        /// The output path.
        path: PathBuf,
        /// Underlying encoder error.
        source: image::ImageError,
    },

    /// An I/O error occurred.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Configuration error.
    #[error("Config error: {0}")]
    Config(String),

    /// Invalid argument.
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),
}

/// Errors raised while loading a font file. Never fatal to a render.
#[derive(Debug, Error)]
pub enum FontError {
    /// The font file could not be read.
    #[error("cannot read {}: {source}", path.display())]
    Io {
        /// The font file.
        path: PathBuf,
        /// Underlying read error.
        source: std::io::Error,
    },

    /// The file was read but is not a usable TrueType/OpenType font.
    #[error("{} is not a valid font file", .0.display())]
    Parse(PathBuf),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_input_message_names_role_and_path() {
        let err = CardError::MissingInput { role: InputRole::Logo, path: PathBuf::from("qwen.png") };
        assert_eq!(err.to_string(), "Logo image 'qwen.png' not found.");
    }

    #[test]
    fn font_parse_message() {
        let err = FontError::Parse(PathBuf::from("broken.ttf"));
        assert_eq!(err.to_string(), "broken.ttf is not a valid font file");
    }
}
