//! Even-odd scanline polygon fill.

use super::pattern::{Paint, SCANLINE_PATTERN_COLOR};
use super::Filler;
use crate::color::Rgba;
use crate::geometry::{Edge, Polygon};
use crate::raster::Raster;
use crate::render::LineRasterizer;

/// Scanline fill of a polygon's interior and boundary.
///
/// The boundary is drawn first in the flat fill color so seams between
/// adjacent polygons are always covered; interior spans are then painted
/// between each pair of sorted edge crossings.
#[derive(Debug, Clone, Copy)]
pub struct ScanLine<'a> {
    polygon: &'a Polygon,
    fill_color: Rgba,
    use_pattern: bool,
    outline: LineRasterizer,
}

impl<'a> ScanLine<'a> {
    /// Create a scanline fill. The boundary is drawn with the trivial
    /// rasterizer.
    #[must_use]
    pub const fn new(polygon: &'a Polygon, fill_color: Rgba, use_pattern: bool) -> Self {
        Self {
            polygon,
            fill_color,
            use_pattern,
            outline: LineRasterizer::Trivial,
        }
    }

    /// Use a different rasterizer for the boundary.
    #[must_use]
    pub const fn with_outline(mut self, outline: LineRasterizer) -> Self {
        self.outline = outline;
        self
    }

    /// Non-horizontal edges, oriented so `p1.y < p2.y`.
    fn active_edges(&self) -> Vec<Edge> {
        self.polygon
            .edges()
            .filter(|edge| !edge.is_horizontal())
            .map(Edge::oriented)
            .collect()
    }
}

impl Filler for ScanLine<'_> {
    fn fill<R: Raster + ?Sized>(&self, raster: &mut R) {
        if !self.polygon.is_renderable() {
            log::debug!("scanline fill skipped: {} vertices", self.polygon.len());
            return;
        }

        let edges = self.active_edges();
        if edges.is_empty() {
            log::debug!("scanline fill skipped: polygon has no non-horizontal edges");
            return;
        }

        for edge in &edges {
            self.outline.rasterize(
                raster,
                (edge.p1.x, edge.p1.y),
                (edge.p2.x, edge.p2.y),
                self.fill_color,
                self.fill_color,
            );
        }

        let y_min = edges.iter().map(|e| e.p1.y).min().unwrap_or(0);
        let y_max = edges.iter().map(|e| e.p2.y).max().unwrap_or(-1);

        // Rows off the raster would only produce dropped writes
        let first_row = y_min.max(0);
        let last_row = y_max.min(raster.height().saturating_sub(1) as i32);
        let last_col = raster.width().saturating_sub(1) as i32;

        log::debug!(
            "scanline fill: {} active edges, rows {}..={}, pattern={}",
            edges.len(),
            y_min,
            y_max,
            self.use_pattern
        );

        let paint = Paint::new(self.fill_color, SCANLINE_PATTERN_COLOR, self.use_pattern);
        let mut crossings = Vec::with_capacity(edges.len());

        for y in first_row..=last_row {
            crossings.clear();
            crossings.extend(
                edges
                    .iter()
                    .filter(|edge| edge.crosses(y))
                    .map(|edge| edge.intersection_x(y)),
            );
            crossings.sort_unstable();

            // An odd trailing crossing has no partner and is dropped
            for span in crossings.chunks_exact(2) {
                let start = span[0].max(0);
                let end = span[1].min(last_col);
                for x in start..=end {
                    raster.plot(x, y, paint.color_at(x, y));
                }
            }
        }
    }
}
