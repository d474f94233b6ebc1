//! Color strings as accepted on the command line.

use image::Rgba;

/// Named colors understood in addition to hex notation.
const NAMED: &[(&str, [u8; 3])] = &[
    ("black", [0, 0, 0]),
    ("white", [255, 255, 255]),
    ("red", [255, 0, 0]),
    ("green", [0, 128, 0]),
    ("lime", [0, 255, 0]),
    ("blue", [0, 0, 255]),
    ("navy", [0, 0, 128]),
    ("yellow", [255, 255, 0]),
    ("orange", [255, 165, 0]),
    ("purple", [128, 0, 128]),
    ("magenta", [255, 0, 255]),
    ("cyan", [0, 255, 255]),
    ("teal", [0, 128, 128]),
    ("gray", [128, 128, 128]),
    ("grey", [128, 128, 128]),
    ("silver", [192, 192, 192]),
    ("lightgray", [211, 211, 211]),
    ("lightgrey", [211, 211, 211]),
    ("darkgray", [169, 169, 169]),
    ("darkgrey", [169, 169, 169]),
];

/// Parse a color name or `#rgb` / `#rrggbb` / `#rrggbbaa` string.
///
/// # Errors
///
/// Returns an error if the string is neither a known name nor valid hex.
pub fn parse_color(input: &str) -> Result<Rgba<u8>, String> {
    let s = input.trim();
    let lower = s.to_ascii_lowercase();

    if let Some(&(_, [r, g, b])) = NAMED.iter().find(|(name, _)| *name == lower) {
        return Ok(Rgba([r, g, b, 255]));
    }

    let Some(digits) = lower.strip_prefix('#') else {
        return Err(format!("Unknown color '{input}'. Use a name like 'white' or hex like '#1a2b3c'"));
    };

    let expanded = match digits.len() {
        3 => digits.chars().flat_map(|c| [c, c]).collect::<String>(),
        6 | 8 => digits.to_string(),
        _ => return Err(format!("Invalid hex color '{input}'")),
    };
    let bytes = hex::decode(&expanded).map_err(|_| format!("Invalid hex color '{input}'"))?;

    Ok(Rgba([bytes[0], bytes[1], bytes[2], bytes.get(3).copied().unwrap_or(255)]))
}

/// Parse an optional fill color, where `none` or `transparent` disables the fill.
///
/// # Errors
///
/// Returns an error if the string is not `none`, `transparent`, or a valid color.
pub fn parse_optional_color(input: &str) -> Result<Option<Rgba<u8>>, String> {
    match input.trim().to_ascii_lowercase().as_str() {
        "none" | "transparent" | "" => Ok(None),
        _ => parse_color(input).map(Some),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn named_colors() {
        assert_eq!(parse_color("white").unwrap(), Rgba([255, 255, 255, 255]));
        assert_eq!(parse_color("Black").unwrap(), Rgba([0, 0, 0, 255]));
        assert_eq!(parse_color(" grey ").unwrap(), Rgba([128, 128, 128, 255]));
    }

    #[test]
    fn hex_forms() {
        assert_eq!(parse_color("#ff8000").unwrap(), Rgba([255, 128, 0, 255]));
        assert_eq!(parse_color("#F80").unwrap(), Rgba([255, 136, 0, 255]));
        assert_eq!(parse_color("#00000080").unwrap(), Rgba([0, 0, 0, 128]));
    }

    #[test]
    fn rejects_garbage() {
        assert!(parse_color("chartreuse-ish").is_err());
        assert!(parse_color("#12345").is_err());
        assert!(parse_color("#gggggg").is_err());
    }

    #[test]
    fn optional_fill() {
        assert_eq!(parse_optional_color("none").unwrap(), None);
        assert_eq!(parse_optional_color("Transparent").unwrap(), None);
        assert_eq!(parse_optional_color("white").unwrap(), Some(Rgba([255, 255, 255, 255])));
        assert!(parse_optional_color("nope").is_err());
    }
}
