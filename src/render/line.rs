//! Line rasterization strategies.
//!
//! Both strategies walk the dominant axis one pixel per unit step, computing
//! the secondary coordinate from the line equation, and interpolate the color
//! by step index. They differ only in how the real-valued secondary coordinate
//! becomes pixels.

use crate::color::Rgba;
use crate::geometry::{Line, Point, Polygon};
use crate::raster::Raster;

/// Line rasterization strategy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LineRasterizer {
    /// One pixel per step at the nearest secondary coordinate.
    #[default]
    Trivial,
    /// Xiaolin Wu style coverage splitting: two pixels per step, weighted by
    /// how close the ideal line passes to each.
    Antialiased,
}

impl LineRasterizer {
    /// Pick the strategy for an antialiasing flag.
    #[must_use]
    pub const fn from_antialiasing(enabled: bool) -> Self {
        if enabled {
            Self::Antialiased
        } else {
            Self::Trivial
        }
    }

    /// Rasterize the segment `(x1, y1) → (x2, y2)` with a color gradient.
    ///
    /// Pixels off the raster are skipped. A zero-length segment writes a single
    /// pixel in `start_color`.
    pub fn rasterize<R: Raster + ?Sized>(
        self,
        raster: &mut R,
        (x1, y1): (i32, i32),
        (x2, y2): (i32, i32),
        start_color: Rgba,
        end_color: Rgba,
    ) {
        if x1 == x2 && y1 == y2 {
            raster.plot(x1, y1, start_color);
            return;
        }

        let walk = Walk::new((x1, y1), (x2, y2), start_color, end_color);
        let extent = if walk.steep {
            raster.height()
        } else {
            raster.width()
        };

        for step in walk.visible_steps(extent) {
            match self {
                Self::Trivial => {
                    let secondary = step.secondary.round() as i32;
                    walk.plot(raster, step.dominant, secondary, step.color);
                }
                Self::Antialiased => {
                    for (secondary, weight) in coverage(step.secondary) {
                        walk.plot(raster, step.dominant, secondary, step.color.scale(weight));
                    }
                }
            }
        }
    }

    /// Rasterize a [`Line`] using its own gradient.
    pub fn rasterize_line<R: Raster + ?Sized>(self, raster: &mut R, line: &Line) {
        self.rasterize(
            raster,
            (line.start.x, line.start.y),
            (line.end.x, line.end.y),
            line.start_color,
            line.end_color,
        );
    }

    /// Rasterize a white segment between two points.
    pub fn rasterize_points<R: Raster + ?Sized>(self, raster: &mut R, p1: Point, p2: Point) {
        self.rasterize(raster, (p1.x, p1.y), (p2.x, p2.y), Rgba::WHITE, Rgba::WHITE);
    }

    /// Rasterize the closed outline of a polygon, each edge carrying the same
    /// gradient.
    pub fn rasterize_polygon<R: Raster + ?Sized>(
        self,
        raster: &mut R,
        polygon: &Polygon,
        start_color: Rgba,
        end_color: Rgba,
    ) {
        for edge in polygon.edges() {
            self.rasterize(
                raster,
                (edge.p1.x, edge.p1.y),
                (edge.p2.x, edge.p2.y),
                start_color,
                end_color,
            );
        }
    }

    /// Rasterize an open chain of vertices (no closing edge).
    pub fn rasterize_polyline<R: Raster + ?Sized>(
        self,
        raster: &mut R,
        points: &[Point],
        start_color: Rgba,
        end_color: Rgba,
    ) {
        for pair in points.windows(2) {
            self.rasterize(
                raster,
                (pair[0].x, pair[0].y),
                (pair[1].x, pair[1].y),
                start_color,
                end_color,
            );
        }
    }
}

/// Split a real-valued secondary coordinate between the two nearest pixels.
///
/// Returns `[(floor, 1 - frac), (floor + 1, frac)]`; the weights always sum to
/// one.
#[must_use]
pub fn coverage(secondary: f64) -> [(i32, f32); 2] {
    let floor = secondary.floor();
    let frac = (secondary - floor) as f32;
    let base = floor as i32;
    [(base, 1.0 - frac), (base.saturating_add(1), frac)]
}

/// One step along the dominant axis.
#[derive(Debug, Clone, Copy)]
struct Step {
    dominant: i32,
    secondary: f64,
    color: Rgba,
}

/// A segment normalized to run from low to high along its dominant axis.
#[derive(Debug, Clone, Copy)]
struct Walk {
    /// `y` is the dominant axis.
    steep: bool,
    start_dominant: i64,
    start_secondary: f64,
    slope: f64,
    steps: i64,
    start_color: Rgba,
    end_color: Rgba,
}

impl Walk {
    fn new(
        (x1, y1): (i32, i32),
        (x2, y2): (i32, i32),
        start_color: Rgba,
        end_color: Rgba,
    ) -> Self {
        let dx = i64::from(x2) - i64::from(x1);
        let dy = i64::from(y2) - i64::from(y1);
        let steep = dy.abs() > dx.abs();

        // (dominant, secondary) per endpoint
        let (mut a, mut b) = if steep {
            ((y1, x1), (y2, x2))
        } else {
            ((x1, y1), (x2, y2))
        };
        let (mut c1, mut c2) = (start_color, end_color);
        if a.0 > b.0 {
            std::mem::swap(&mut a, &mut b);
            std::mem::swap(&mut c1, &mut c2);
        }

        let steps = i64::from(b.0) - i64::from(a.0);
        let slope = (f64::from(b.1) - f64::from(a.1)) / steps as f64;

        Self {
            steep,
            start_dominant: i64::from(a.0),
            start_secondary: f64::from(a.1),
            slope,
            steps,
            start_color: c1,
            end_color: c2,
        }
    }

    /// Steps whose dominant coordinate lands inside `[0, extent)`.
    ///
    /// Steps outside that range could only produce off-raster writes, so
    /// skipping them leaves the output unchanged.
    fn visible_steps(&self, extent: u32) -> impl Iterator<Item = Step> + '_ {
        let first = (-self.start_dominant).clamp(0, self.steps + 1);
        let last = (i64::from(extent) - 1 - self.start_dominant).min(self.steps);

        (first..=last).map(move |i| Step {
            dominant: (self.start_dominant + i) as i32,
            secondary: self.slope * i as f64 + self.start_secondary,
            color: self
                .start_color
                .lerp(self.end_color, (i as f64 / self.steps as f64) as f32),
        })
    }

    #[inline]
    fn plot<R: Raster + ?Sized>(&self, raster: &mut R, dominant: i32, secondary: i32, color: Rgba) {
        if self.steep {
            raster.plot(secondary, dominant, color);
        } else {
            raster.plot(dominant, secondary, color);
        }
    }
}
