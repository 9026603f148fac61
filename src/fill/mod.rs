//! Region filling.
//!
//! # Algorithms
//!
//! - **Scanline**: even-odd parity fill over the polygon's active edges
//! - **Seed (background)**: 4-connected flood fill replacing the seed's color
//! - **Seed (border)**: 4-connected flood fill bounded by a border color
//!
//! Both seed variants use an explicit stack, so region size is bounded by heap
//! memory rather than call depth.

mod pattern;
mod scanline;
mod seed;

pub use pattern::{Paint, PATTERN_TILE, SCANLINE_PATTERN_COLOR, SEED_PATTERN_COLOR};
pub use scanline::ScanLine;
pub use seed::{SeedFill, SeedMode};

use crate::error::Error;
use crate::raster::Raster;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A fill operation bound to its parameters, ready to run against a raster.
pub trait Filler {
    /// Paint into `raster`.
    fn fill<R: Raster + ?Sized>(&self, raster: &mut R);
}

/// Fill strategy chosen in the render settings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum FillMode {
    /// Even-odd scanline fill of a polygon.
    #[default]
    Scanline,
    /// Seed fill bounded by any color change.
    SeedBackground,
    /// Seed fill bounded by the border color.
    SeedBorder,
}

impl FillMode {
    /// All modes, in menu order.
    pub const ALL: [Self; 3] = [Self::Scanline, Self::SeedBackground, Self::SeedBorder];

    /// Settings name of the mode.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Scanline => "scanline",
            Self::SeedBackground => "seed-background",
            Self::SeedBorder => "seed-border",
        }
    }

    /// Whether the mode starts from a seed pixel rather than a polygon.
    #[must_use]
    pub const fn is_seed(self) -> bool {
        matches!(self, Self::SeedBackground | Self::SeedBorder)
    }
}

impl fmt::Display for FillMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for FillMode {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|mode| mode.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| Error::UnknownFillMode(s.to_string()))
    }
}
