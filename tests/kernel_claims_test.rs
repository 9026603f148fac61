#![allow(clippy::unwrap_used)]
//! Falsifiable claims about the geometry kernel.
//!
//! Each test states one observable property of the rasterizers, the clipper
//! or the fillers, checked against a recording raster or a framebuffer.

use raster_kernel::fill::{SCANLINE_PATTERN_COLOR, SEED_PATTERN_COLOR};
use raster_kernel::prelude::*;
use raster_kernel::render::coverage;
use std::collections::HashSet;

/// Raster that keeps every accepted write in order.
struct Recorder {
    width: u32,
    height: u32,
    writes: Vec<(u32, u32, Rgba)>,
}

impl Recorder {
    fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            writes: Vec::new(),
        }
    }
}

impl Raster for Recorder {
    fn width(&self) -> u32 {
        self.width
    }

    fn height(&self) -> u32 {
        self.height
    }

    fn get_pixel(&self, x: u32, y: u32) -> Option<Rgba> {
        (x < self.width && y < self.height).then_some(Rgba::TRANSPARENT)
    }

    fn set_pixel(&mut self, x: u32, y: u32, color: Rgba) {
        if x < self.width && y < self.height {
            self.writes.push((x, y, color));
        }
    }
}

fn polygon(coords: &[(i32, i32)]) -> Polygon {
    coords.iter().copied().map(Point::from).collect()
}

// ============================================================================
// Line rasterizer
// ============================================================================

/// Claim 1: a zero-length line writes exactly one pixel in the start color
#[test]
fn test_degenerate_line_single_pixel() {
    for rasterizer in [LineRasterizer::Trivial, LineRasterizer::Antialiased] {
        let mut raster = Recorder::new(20, 20);
        rasterizer.rasterize(&mut raster, (7, 9), (7, 9), Rgba::RED, Rgba::BLUE);
        assert_eq!(raster.writes, vec![(7, 9, Rgba::RED)], "{rasterizer:?}");
    }
}

/// Claim 2: shallow trivial lines write |dx|+1 pixels, one per column, in order
#[test]
fn test_shallow_line_one_pixel_per_column() {
    let cases = [((0, 0), (30, 7)), ((30, 20), (2, 5)), ((5, 5), (25, 5)), ((0, 30), (30, 0))];

    for ((x1, y1), (x2, y2)) in cases {
        let mut raster = Recorder::new(40, 40);
        LineRasterizer::Trivial.rasterize(&mut raster, (x1, y1), (x2, y2), Rgba::WHITE, Rgba::WHITE);

        let dx = (x2 - x1).unsigned_abs();
        assert_eq!(raster.writes.len() as u32, dx + 1);

        let xs: Vec<u32> = raster.writes.iter().map(|&(x, _, _)| x).collect();
        let lo = x1.min(x2) as u32;
        assert_eq!(xs, (lo..=lo + dx).collect::<Vec<_>>());
    }
}

/// Claim 3: antialiased lines write two pixels per step whose weights sum to 1
#[test]
fn test_antialiased_two_pixels_per_step() {
    let mut raster = Recorder::new(50, 50);
    LineRasterizer::Antialiased.rasterize(&mut raster, (3, 4), (40, 17), Rgba::WHITE, Rgba::WHITE);

    assert_eq!(raster.writes.len(), 2 * 38);
    for pair in raster.writes.chunks_exact(2) {
        let (x_a, y_a, a) = pair[0];
        let (x_b, y_b, b) = pair[1];
        assert_eq!(x_a, x_b);
        assert_eq!(y_b, y_a + 1);
        // Scaled white channels add back up to full intensity, give or take rounding
        let total = u16::from(a.r) + u16::from(b.r);
        assert!((254..=256).contains(&total), "total {total}");
    }

    for secondary in [0.0, 0.25, 3.5, -1.75, 12.999] {
        let [(_, w0), (_, w1)] = coverage(secondary);
        approx::assert_relative_eq!(w0 + w1, 1.0, epsilon = 1e-6);
    }
}

/// Claim 4: the gradient hits both endpoint colors exactly
#[test]
fn test_gradient_endpoints_exact() {
    let colors = [Rgba::new(13, 200, 77, 255), Rgba::new(250, 1, 128, 9)];
    let mut raster = Recorder::new(40, 40);
    LineRasterizer::Trivial.rasterize(&mut raster, (1, 1), (33, 20), colors[0], colors[1]);

    assert_eq!(raster.writes.first().map(|w| w.2), Some(colors[0]));
    assert_eq!(raster.writes.last().map(|w| w.2), Some(colors[1]));
    assert_eq!(colors[0].lerp(colors[1], 0.0), colors[0]);
    assert_eq!(colors[0].lerp(colors[1], 1.0), colors[1]);
}

// ============================================================================
// Polygon clipper
// ============================================================================

/// Claim 5: clipping a convex polygon by itself returns the same polygon
#[test]
fn test_self_clip_identity() {
    let hexagon = polygon(&[(20, 0), (40, 10), (40, 30), (20, 40), (0, 30), (0, 10)]);
    let boundary = hexagon.oriented_for_clipping();

    let result = clip_polygon(&hexagon, &boundary);

    let expected: HashSet<Point> = hexagon.points().iter().copied().collect();
    let actual: HashSet<Point> = result.points().iter().copied().collect();
    assert_eq!(result.len(), hexagon.len());
    assert_eq!(actual, expected);
    approx::assert_relative_eq!(result.area(), hexagon.area());
}

/// Claim 6: a boundary with fewer than two vertices leaves the subject alone
#[test]
fn test_degenerate_boundary_identity() {
    let square = polygon(&[(0, 0), (10, 0), (10, 10), (0, 10)]);
    assert_eq!(clip(square.points(), &[Point::new(5, 5)]), square.points().to_vec());
}

/// Claim 7: a triangle covering the left half keeps half the square's area
#[test]
fn test_half_square_clip() {
    let square = polygon(&[(0, 0), (10, 0), (10, 10), (0, 10)]);
    let triangle = polygon(&[(5, -20), (-30, 5), (5, 30)]).oriented_for_clipping();

    let result = clip_polygon(&square, &triangle);

    assert!(result.is_renderable());
    assert!((result.area() - square.area() / 2.0).abs() <= 1.0, "area {}", result.area());
}

// ============================================================================
// Fillers
// ============================================================================

/// Claim 8: scanline fill covers pixels strictly between the slanted edges
#[test]
fn test_scanline_triangle_interior() {
    let mut fb = Framebuffer::new(16, 16).unwrap();
    let triangle = polygon(&[(0, 0), (10, 0), (5, 10)]);
    ScanLine::new(&triangle, Rgba::RED, false).fill(&mut fb);

    for (x, y, color) in fb.iter_pixels() {
        let (xf, yf) = (f64::from(x), f64::from(y));
        let left = yf / 2.0;
        let right = 10.0 - yf / 2.0;

        if y <= 10 && xf > left && xf < right {
            assert_eq!(color, Rgba::RED, "interior pixel ({x}, {y})");
        }
        if y > 10 || xf < left - 1.0 || xf > right + 1.0 {
            assert_ne!(color, Rgba::RED, "exterior pixel ({x}, {y})");
        }
    }
}

/// 30x30 black canvas with a white 12x12 outline around a 10x10 interior at 10..=19.
fn outlined_square() -> Framebuffer {
    let mut fb = Framebuffer::new(30, 30).unwrap();
    fb.clear(Rgba::BLACK);
    let outline = polygon(&[(9, 9), (20, 9), (20, 20), (9, 20)]);
    LineRasterizer::Trivial.rasterize_polygon(&mut fb, &outline, Rgba::WHITE, Rgba::WHITE);
    fb
}

/// Claim 9: background seed fill covers exactly the enclosed square
#[test]
fn test_seed_background_exact_region() {
    let mut fb = outlined_square();
    SeedFill::background(Point::new(14, 14), Rgba::GREEN, false).fill(&mut fb);

    for (x, y, color) in fb.iter_pixels() {
        let inside = (10..=19).contains(&x) && (10..=19).contains(&y);
        assert_eq!(color == Rgba::GREEN, inside, "pixel ({x}, {y})");
    }
}

/// Claim 10: border seed fill never overwrites border-colored pixels
#[test]
fn test_seed_border_preserves_border_pixels() {
    let mut fb = outlined_square();
    // Border-colored islands inside the reachable region
    let islands = [(12, 12), (17, 15), (10, 19)];
    for &(x, y) in &islands {
        fb.set_pixel(x, y, Rgba::BLUE);
    }

    SeedFill::border(Point::new(14, 14), Rgba::GREEN, Rgba::BLUE, true).fill(&mut fb);

    for &(x, y) in &islands {
        assert_eq!(fb.get_pixel(x, y), Some(Rgba::BLUE));
    }
    assert_eq!(fb.count_color(Rgba::BLUE), islands.len());
    assert_eq!(fb.count_color(Rgba::GREEN) + fb.count_color(SEED_PATTERN_COLOR), 100 - islands.len());
}

/// Claim 11: pattern fill uses two colors over the solid fill's pixel set
#[test]
fn test_pattern_same_coverage_two_colors() {
    let shape = polygon(&[(3, 1), (37, 9), (30, 38), (6, 27)]);

    let mut solid = Framebuffer::new(40, 40).unwrap();
    ScanLine::new(&shape, Rgba::RED, false).fill(&mut solid);
    let mut patterned = Framebuffer::new(40, 40).unwrap();
    ScanLine::new(&shape, Rgba::RED, true).fill(&mut patterned);

    let mut colors = HashSet::new();
    for (x, y, color) in patterned.iter_pixels() {
        let covered = solid.get_pixel(x, y) == Some(Rgba::RED);
        assert_eq!(color != Rgba::TRANSPARENT, covered, "pixel ({x}, {y})");
        if covered {
            colors.insert(color);
        }
    }
    assert_eq!(colors, HashSet::from([Rgba::RED, SCANLINE_PATTERN_COLOR]));
}

// ============================================================================
// Scene and export
// ============================================================================

/// Claim 12: a rendered scene round-trips through a PNG file
#[test]
fn test_scene_render_to_png() {
    let settings = RenderSettings::parse("fill_mode: seed-background\npattern_enabled: true").unwrap();

    let mut scene = Scene::new();
    scene.add_polygon(polygon(&[(4, 4), (28, 4), (28, 28), (4, 28)]));
    scene.seed_fill_at(Point::new(16, 16), &settings);
    scene.add_line(Line::new(Point::new(0, 31), Point::new(31, 31), Rgba::RED, Rgba::BLUE));

    let mut fb = Framebuffer::new(32, 32).unwrap();
    scene.render(&mut fb, &settings);

    assert_eq!(fb.get_pixel(4, 16), Some(settings.line_start_color));
    assert_eq!(fb.get_pixel(5, 5), Some(settings.fill_color));
    assert_eq!(fb.get_pixel(8, 5), Some(SEED_PATTERN_COLOR));
    assert_eq!(fb.get_pixel(0, 31), Some(Rgba::RED));
    assert_eq!(fb.get_pixel(31, 31), Some(Rgba::BLUE));

    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("scene.png");
    PngEncoder::write_to_file(&fb, &path).unwrap();
    assert_eq!(std::fs::read(&path).unwrap(), PngEncoder::to_bytes(&fb).unwrap());
}
