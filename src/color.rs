//! Color utilities: random sampling and contrast selection.

use rand::RngExt;

/// Text color for light backgrounds.
pub const TEXT_DARK: &str = "#000000";
/// Text color for dark backgrounds.
pub const TEXT_LIGHT: &str = "#ffffff";

/// Validate if a string is a valid hex color (e.g., #RRGGBB).
pub fn is_valid_hex(s: &str) -> bool {
    s.starts_with('#') && s.len() == 7 && s[1..].chars().all(|c| c.is_ascii_hexdigit())
}

/// Generates a random color sampled uniformly from the full RGB cube.
///
/// The result is always `#` followed by six lowercase hex digits.
pub fn random_hex_color() -> String {
    let mut rng = rand::rng();
    let hex = format!("#{:06x}", rng.random_range(0..=0xFF_FF_FFu32));
    debug_assert!(is_valid_hex(&hex));
    hex
}

/// Parses a `#RRGGBB` string into its byte components.
///
/// Accepts upper- or lowercase digits. Returns None for anything else.
pub fn parse_hex(hex: &str) -> Option<(u8, u8, u8)> {
    let digits = hex.strip_prefix('#')?;
    if digits.len() != 6 || !digits.chars().all(|c| c.is_ascii_hexdigit()) {
        return None;
    }
    let r = u8::from_str_radix(&digits[0..2], 16).ok()?;
    let g = u8::from_str_radix(&digits[2..4], 16).ok()?;
    let b = u8::from_str_radix(&digits[4..6], 16).ok()?;
    Some((r, g, b))
}

/// Picks black or white text for the given background color.
///
/// Perceived luminance with the classic 0.299/0.587/0.114 weights;
/// backgrounds above the 0.5 threshold get black text, everything else
/// (ties included) white. Unparseable input falls back to white.
pub fn contrast_text_color(hex: &str) -> &'static str {
    let Some((r, g, b)) = parse_hex(hex) else {
        return TEXT_LIGHT;
    };
    let luminance =
        (0.299 * f64::from(r) + 0.587 * f64::from(g) + 0.114 * f64::from(b)) / 255.0;
    if luminance > 0.5 {
        TEXT_DARK
    } else {
        TEXT_LIGHT
    }
}
