//! Scene composition.
//!
//! A [`Scene`] collects the primitives and fill requests an editor produces
//! and replays them onto a raster in a fixed order:
//!
//! 1. clear to the background color
//! 2. polygon outlines
//! 3. lines
//! 4. clip boundary and subject outlines
//! 5. scanline fills
//! 6. seed fills
//!
//! Seed fills run last because they depend on the pixels already drawn.

use crate::clip::clip_polygon;
use crate::color::Rgba;
use crate::config::RenderSettings;
use crate::fill::{FillMode, Filler, ScanLine, SeedFill};
use crate::geometry::{Line, Point, Polygon};
use crate::raster::Raster;

/// Outline color of the clip boundary.
pub const CLIP_BOUNDARY_COLOR: Rgba = Rgba::new(255, 0, 0, 150);

/// Outline color of the polygon waiting to be clipped.
pub const CLIP_SUBJECT_COLOR: Rgba = Rgba::new(0, 255, 0, 150);

/// A queued scanline fill.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScanlineRequest {
    /// Polygon to fill.
    pub polygon: Polygon,
    /// Fill color.
    pub color: Rgba,
    /// Checkerboard instead of solid.
    pub pattern: bool,
}

impl ScanlineRequest {
    fn filler(&self) -> ScanLine<'_> {
        ScanLine::new(&self.polygon, self.color, self.pattern)
    }
}

/// Everything drawn on the canvas.
#[derive(Debug, Clone, Default)]
pub struct Scene {
    lines: Vec<Line>,
    polygons: Vec<Polygon>,
    clip_boundary: Option<Polygon>,
    clip_subject: Option<Polygon>,
    scanline_fills: Vec<ScanlineRequest>,
    seed_fills: Vec<SeedFill>,
}

impl Scene {
    /// Empty scene.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a line with its own endpoint colors.
    pub fn add_line(&mut self, line: Line) {
        self.lines.push(line);
    }

    /// Add a polygon outline.
    pub fn add_polygon(&mut self, polygon: Polygon) {
        self.polygons.push(polygon);
    }

    /// Add the rectangle spanned by `p1 → p2` and the height towards `p3`.
    ///
    /// Returns `false` when the points do not define a rectangle.
    pub fn add_rectangle(&mut self, p1: Point, p2: Point, p3: Point) -> bool {
        match Polygon::rectangle(p1, p2, p3) {
            Some(rect) => {
                self.polygons.push(rect);
                true
            }
            None => false,
        }
    }

    /// Set the convex clip boundary.
    pub fn set_clip_boundary(&mut self, boundary: Polygon) {
        self.clip_boundary = Some(boundary);
    }

    /// Set the polygon to clip against the boundary.
    pub fn set_clip_subject(&mut self, subject: Polygon) {
        self.clip_subject = Some(subject);
    }

    /// Queue a scanline fill.
    pub fn add_scanline_fill(&mut self, polygon: Polygon, color: Rgba, pattern: bool) {
        self.scanline_fills.push(ScanlineRequest {
            polygon,
            color,
            pattern,
        });
    }

    /// Queue a seed fill.
    pub fn add_seed_fill(&mut self, fill: SeedFill) {
        self.seed_fills.push(fill);
    }

    /// Queue a seed fill at `seed` using the mode and colors in `settings`.
    ///
    /// Returns `false` when the settings select the scanline mode.
    pub fn seed_fill_at(&mut self, seed: Point, settings: &RenderSettings) -> bool {
        let fill = match settings.fill_mode {
            FillMode::Scanline => return false,
            FillMode::SeedBackground => {
                SeedFill::background(seed, settings.fill_color, settings.pattern_enabled)
            }
            FillMode::SeedBorder => SeedFill::border(
                seed,
                settings.fill_color,
                settings.border_color,
                settings.pattern_enabled,
            ),
        };
        self.seed_fills.push(fill);
        true
    }

    /// Clip the subject against the boundary.
    ///
    /// Needs both polygons with at least three vertices; otherwise nothing
    /// changes, the subject stays pending and `None` is returned. Once both
    /// qualify the subject is consumed, whether or not the result is
    /// visible. A visible result is queued for a scanline fill with the fill
    /// color and pattern from `settings`.
    pub fn apply_clip(&mut self, settings: &RenderSettings) -> Option<Polygon> {
        let boundary = self.clip_boundary.as_ref().filter(|b| b.is_renderable())?;
        if !self.clip_subject.as_ref().is_some_and(Polygon::is_renderable) {
            return None;
        }
        let subject = self.clip_subject.take()?;

        let result = clip_polygon(&subject, boundary);
        if !result.is_renderable() {
            log::debug!("clip produced {} vertices; nothing visible", result.len());
            return None;
        }

        self.add_scanline_fill(result.clone(), settings.fill_color, settings.pattern_enabled);
        Some(result)
    }

    /// Remove everything.
    pub fn clear(&mut self) {
        *self = Self::default();
    }

    /// Lines in insertion order.
    #[must_use]
    pub fn lines(&self) -> &[Line] {
        &self.lines
    }

    /// Polygon outlines in insertion order.
    #[must_use]
    pub fn polygons(&self) -> &[Polygon] {
        &self.polygons
    }

    /// Current clip boundary.
    #[must_use]
    pub fn clip_boundary(&self) -> Option<&Polygon> {
        self.clip_boundary.as_ref()
    }

    /// Polygon waiting to be clipped.
    #[must_use]
    pub fn clip_subject(&self) -> Option<&Polygon> {
        self.clip_subject.as_ref()
    }

    /// Queued scanline fills.
    #[must_use]
    pub fn scanline_fills(&self) -> &[ScanlineRequest] {
        &self.scanline_fills
    }

    /// Queued seed fills.
    #[must_use]
    pub fn seed_fills(&self) -> &[SeedFill] {
        &self.seed_fills
    }

    /// Whether nothing has been added.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
            && self.polygons.is_empty()
            && self.clip_boundary.is_none()
            && self.clip_subject.is_none()
            && self.scanline_fills.is_empty()
            && self.seed_fills.is_empty()
    }

    /// Redraw the whole scene onto `raster`.
    pub fn render<R: Raster + ?Sized>(&self, raster: &mut R, settings: &RenderSettings) {
        let rasterizer = settings.line_rasterizer();
        log::debug!(
            "rendering scene: {} lines, {} polygons, {} scanline fills, {} seed fills ({:?})",
            self.lines.len(),
            self.polygons.len(),
            self.scanline_fills.len(),
            self.seed_fills.len(),
            rasterizer
        );

        raster.clear(settings.background);

        for polygon in &self.polygons {
            rasterizer.rasterize_polygon(
                raster,
                polygon,
                settings.line_start_color,
                settings.line_end_color,
            );
        }

        for line in &self.lines {
            rasterizer.rasterize_line(raster, line);
        }

        if let Some(boundary) = &self.clip_boundary {
            rasterizer.rasterize_polygon(raster, boundary, CLIP_BOUNDARY_COLOR, CLIP_BOUNDARY_COLOR);
        }
        if let Some(subject) = &self.clip_subject {
            rasterizer.rasterize_polygon(raster, subject, CLIP_SUBJECT_COLOR, CLIP_SUBJECT_COLOR);
        }

        for request in &self.scanline_fills {
            request.filler().fill(raster);
        }

        for fill in &self.seed_fills {
            fill.fill(raster);
        }
    }
}
