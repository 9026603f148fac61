//! Stack-based 4-connected seed fill.

use super::pattern::{Paint, SEED_PATTERN_COLOR};
use super::Filler;
use crate::color::Rgba;
use crate::geometry::Point;
use crate::raster::Raster;

/// Stopping rule for a seed fill.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SeedMode {
    /// Spread while pixels match the color found under the seed.
    Background,
    /// Spread while pixels match the seed color and are not the border color.
    Border(Rgba),
}

/// Flood fill from a seed pixel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SeedFill {
    seed: Point,
    fill_color: Rgba,
    mode: SeedMode,
    use_pattern: bool,
}

impl SeedFill {
    /// Fill the region of the seed's color.
    #[must_use]
    pub const fn background(seed: Point, fill_color: Rgba, use_pattern: bool) -> Self {
        Self {
            seed,
            fill_color,
            mode: SeedMode::Background,
            use_pattern,
        }
    }

    /// Fill the region of the seed's color, never crossing `border`.
    #[must_use]
    pub const fn border(seed: Point, fill_color: Rgba, border: Rgba, use_pattern: bool) -> Self {
        Self {
            seed,
            fill_color,
            mode: SeedMode::Border(border),
            use_pattern,
        }
    }

    /// Stopping rule in use.
    #[must_use]
    pub const fn mode(&self) -> SeedMode {
        self.mode
    }

    fn accepts(&self, current: Rgba, target: Rgba) -> bool {
        match self.mode {
            SeedMode::Background => current == target,
            SeedMode::Border(border) => current != border && current == target,
        }
    }
}

impl Filler for SeedFill {
    fn fill<R: Raster + ?Sized>(&self, raster: &mut R) {
        let Some(target) = raster.pixel_at(self.seed.x, self.seed.y) else {
            log::debug!(
                "seed fill skipped: seed ({}, {}) is off the raster",
                self.seed.x,
                self.seed.y
            );
            return;
        };

        if self.mode == SeedMode::Border(target) {
            log::debug!("seed fill skipped: seed pixel is the border color");
            return;
        }

        log::debug!(
            "seed fill from ({}, {}) mode={:?} pattern={}",
            self.seed.x,
            self.seed.y,
            self.mode,
            self.use_pattern
        );

        let width = raster.width() as usize;
        let paint = Paint::new(self.fill_color, SEED_PATTERN_COLOR, self.use_pattern);

        // Tracks written pixels so a fill color equal to the target cannot loop
        let mut painted = vec![false; width * raster.height() as usize];
        let mut stack = vec![self.seed];
        let mut count = 0usize;

        while let Some(Point { x, y }) = stack.pop() {
            let Some(current) = raster.pixel_at(x, y) else {
                continue;
            };
            let index = y as usize * width + x as usize;
            if painted[index] || !self.accepts(current, target) {
                continue;
            }

            raster.plot(x, y, paint.color_at(x, y));
            painted[index] = true;
            count += 1;

            stack.extend([
                Point::new(x + 1, y),
                Point::new(x - 1, y),
                Point::new(x, y + 1),
                Point::new(x, y - 1),
            ]);
        }

        log::debug!("seed fill painted {count} pixels");
    }
}
