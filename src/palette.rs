//! Palette state: swatch records and regeneration.

use crate::color::random_hex_color;

/// Number of swatches in a palette. Fixed for the lifetime of the session.
pub const PALETTE_SIZE: usize = 5;

/// Colors every palette starts from, all unlocked.
pub const SEED_COLORS: [&str; PALETTE_SIZE] =
    ["#B31FF2", "#4A90E2", "#F39C12", "#E74C3C", "#2ECC71"];

/// One color cell in the palette.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Swatch {
    /// `#RRGGBB` color value. Rendered uppercase for display.
    pub hex: String,
    /// Locked swatches survive regeneration until unlocked.
    pub locked: bool,
}

/// Ordered sequence of exactly [`PALETTE_SIZE`] swatches.
///
/// Position is significant: swatches are labeled "Color 1" through
/// "Color 5" in display order.
#[derive(Debug, Clone)]
pub struct Palette {
    swatches: Vec<Swatch>,
}

impl Palette {
    /// Creates a palette holding the seed colors, all unlocked.
    pub fn new() -> Self {
        Self {
            swatches: SEED_COLORS
                .iter()
                .map(|hex| Swatch {
                    hex: hex.to_string(),
                    locked: false,
                })
                .collect(),
        }
    }

    /// Replaces every unlocked swatch with a fresh random color.
    ///
    /// Locked swatches keep their color byte for byte; lock flags never
    /// change here.
    pub fn regenerate(&mut self) {
        for swatch in &mut self.swatches {
            if !swatch.locked {
                swatch.hex = random_hex_color();
            }
        }
    }

    /// Flips the lock flag of the swatch at `index`; its color is untouched.
    ///
    /// `index` must be below [`PALETTE_SIZE`]; the selection cursor is the
    /// only caller and cannot leave that range.
    pub fn toggle_lock(&mut self, index: usize) {
        self.swatches[index].locked = !self.swatches[index].locked;
    }

    /// All swatches in display order.
    pub fn swatches(&self) -> &[Swatch] {
        &self.swatches
    }

    /// The swatch at `index` (must be below [`PALETTE_SIZE`]).
    pub fn get(&self, index: usize) -> &Swatch {
        &self.swatches[index]
    }

    /// How many swatches are currently locked.
    pub fn locked_count(&self) -> usize {
        self.swatches.iter().filter(|s| s.locked).count()
    }
}

impl Default for Palette {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::is_valid_hex;

    #[test]
    fn test_new_palette_holds_seed_colors_unlocked() {
        let palette = Palette::new();
        assert_eq!(palette.swatches().len(), PALETTE_SIZE);
        for (swatch, seed) in palette.swatches().iter().zip(SEED_COLORS) {
            assert_eq!(swatch.hex, seed);
            assert!(!swatch.locked);
        }
    }

    #[test]
    fn test_regenerate_replaces_all_unlocked() {
        let mut palette = Palette::new();
        let before: Vec<String> = palette.swatches().iter().map(|s| s.hex.clone()).collect();

        palette.regenerate();

        for (swatch, old) in palette.swatches().iter().zip(&before) {
            // Collision with the previous color is possible but has
            // negligible probability over the full RGB cube.
            assert_ne!(&swatch.hex, old);
            assert!(is_valid_hex(&swatch.hex));
            assert!(!swatch.locked);
        }
    }

    #[test]
    fn test_regenerate_keeps_locked_swatch() {
        let mut palette = Palette::new();
        palette.toggle_lock(2);
        let locked_hex = palette.get(2).hex.clone();

        palette.regenerate();

        assert_eq!(palette.get(2).hex, locked_hex);
        assert!(palette.get(2).locked);
        for (idx, swatch) in palette.swatches().iter().enumerate() {
            if idx != 2 {
                assert_ne!(swatch.hex, SEED_COLORS[idx]);
            }
        }
    }

    #[test]
    fn test_toggle_lock_flips_only_target() {
        let mut palette = Palette::new();
        let before: Vec<Swatch> = palette.swatches().to_vec();

        palette.toggle_lock(3);

        for (idx, swatch) in palette.swatches().iter().enumerate() {
            assert_eq!(swatch.hex, before[idx].hex);
            assert_eq!(swatch.locked, idx == 3);
        }

        palette.toggle_lock(3);
        assert!(!palette.get(3).locked);
    }

    #[test]
    fn test_locked_count() {
        let mut palette = Palette::new();
        assert_eq!(palette.locked_count(), 0);
        palette.toggle_lock(0);
        palette.toggle_lock(4);
        assert_eq!(palette.locked_count(), 2);
    }
}
