//! Fill paints: solid colors and the checkerboard pattern.

use crate::color::Rgba;

/// Checkerboard tile edge length in pixels.
pub const PATTERN_TILE: i32 = 8;

/// Alternate pattern color used by the scanline filler.
pub const SCANLINE_PATTERN_COLOR: Rgba = Rgba::BLACK;

/// Alternate pattern color used by the seed filler.
pub const SEED_PATTERN_COLOR: Rgba = Rgba::CYAN;

/// How interior pixels are colored.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Paint {
    /// Every pixel gets the same color.
    Solid(Rgba),
    /// Tiles alternate between `primary` and `secondary`.
    Checkerboard {
        /// Color of tiles where `(⌊x/8⌋ + ⌊y/8⌋)` is even.
        primary: Rgba,
        /// Color of the remaining tiles.
        secondary: Rgba,
    },
}

impl Paint {
    /// Solid `color`, or a checkerboard of `color` and `alternate` when
    /// `use_pattern` is set.
    #[must_use]
    pub const fn new(color: Rgba, alternate: Rgba, use_pattern: bool) -> Self {
        if use_pattern {
            Self::Checkerboard {
                primary: color,
                secondary: alternate,
            }
        } else {
            Self::Solid(color)
        }
    }

    /// Color for pixel `(x, y)`.
    #[inline]
    #[must_use]
    pub fn color_at(self, x: i32, y: i32) -> Rgba {
        match self {
            Self::Solid(color) => color,
            Self::Checkerboard { primary, secondary } => {
                let tile = x.div_euclid(PATTERN_TILE) + y.div_euclid(PATTERN_TILE);
                if tile.rem_euclid(2) == 0 {
                    primary
                } else {
                    secondary
                }
            }
        }
    }
}
