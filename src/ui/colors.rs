//! Color theme definitions for the UI chrome.
//!
//! Swatches are painted with their own palette colors; everything around
//! them uses these constants.

use ratatui::style::Color;

/// Primary accent color (used for titles, highlights)
pub const PRIMARY: Color = Color::Rgb(167, 139, 250); // Soft violet
/// Secondary accent color (counts, positive accents)
pub const SECONDARY: Color = Color::Rgb(45, 212, 191); // Teal
/// Border color of the selected swatch
pub const SELECTION: Color = Color::Rgb(250, 204, 21); // Amber yellow
/// Muted text color
pub const MUTED: Color = Color::Rgb(148, 163, 184); // Gray
/// Error/danger color
pub const ERROR: Color = Color::Rgb(251, 113, 133); // Bright rose
/// Warning color (lock markers)
pub const WARNING: Color = Color::Rgb(251, 191, 36); // Bright amber
/// Success color
pub const SUCCESS: Color = Color::Rgb(74, 222, 128); // Bright green
/// Border color
pub const BORDER: Color = Color::Rgb(139, 92, 246); // Violet
/// Key highlight color (for keyboard shortcuts)
pub const KEY: Color = Color::Rgb(244, 114, 182); // Bright pink
/// Accent color for icons and decorations
pub const ACCENT: Color = Color::Rgb(192, 132, 252); // Bright purple
