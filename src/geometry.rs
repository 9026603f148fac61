//! Geometric primitives for rasterization.
//!
//! All coordinates are integer pixel positions. Points, lines, edges and
//! polygons are cheap transient values built per operation.

use crate::color::Rgba;

/// A 2D point with integer pixel coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Point {
    /// X coordinate.
    pub x: i32,
    /// Y coordinate.
    pub y: i32,
}

impl Point {
    /// Origin point (0, 0).
    pub const ORIGIN: Self = Self::new(0, 0);

    /// Create a new point.
    #[must_use]
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Euclidean distance to another point.
    #[must_use]
    pub fn distance(self, other: Self) -> f64 {
        let dx = f64::from(self.x) - f64::from(other.x);
        let dy = f64::from(self.y) - f64::from(other.y);
        dx.hypot(dy)
    }
}

impl From<(i32, i32)> for Point {
    fn from((x, y): (i32, i32)) -> Self {
        Self::new(x, y)
    }
}

/// A line segment with a color gradient from start to end.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Line {
    /// Start point.
    pub start: Point,
    /// End point.
    pub end: Point,
    /// Color at the start point.
    pub start_color: Rgba,
    /// Color at the end point.
    pub end_color: Rgba,
}

impl Line {
    /// Create a line with a gradient between two colors.
    #[must_use]
    pub const fn new(start: Point, end: Point, start_color: Rgba, end_color: Rgba) -> Self {
        Self {
            start,
            end,
            start_color,
            end_color,
        }
    }

    /// Create a single-colored line.
    #[must_use]
    pub const fn solid(start: Point, end: Point, color: Rgba) -> Self {
        Self::new(start, end, color, color)
    }

    /// Create a white line from coordinates.
    #[must_use]
    pub const fn from_coords(x0: i32, y0: i32, x1: i32, y1: i32) -> Self {
        Self::solid(Point::new(x0, y0), Point::new(x1, y1), Rgba::WHITE)
    }

    /// A line whose endpoints coincide.
    #[must_use]
    pub fn is_degenerate(&self) -> bool {
        self.start == self.end
    }

    /// Get the length of the line.
    #[must_use]
    pub fn length(&self) -> f64 {
        self.start.distance(self.end)
    }
}

/// An ordered pair of polygon vertices used by the scanline filler.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Edge {
    /// First endpoint (smaller `y` once oriented).
    pub p1: Point,
    /// Second endpoint.
    pub p2: Point,
}

impl Edge {
    /// Create an edge between two points.
    #[must_use]
    pub const fn new(p1: Point, p2: Point) -> Self {
        Self { p1, p2 }
    }

    /// Horizontal edges contribute no scanline crossings.
    #[must_use]
    pub const fn is_horizontal(&self) -> bool {
        self.p1.y == self.p2.y
    }

    /// Return the edge with its endpoints ordered so that `p1.y <= p2.y`.
    #[must_use]
    pub const fn oriented(self) -> Self {
        if self.p1.y > self.p2.y {
            Self::new(self.p2, self.p1)
        } else {
            self
        }
    }

    /// Half-open crossing test `p1.y <= y < p2.y` for an oriented edge.
    ///
    /// Excluding the lower endpoint keeps a vertex shared by two edges from
    /// being counted twice on the same scanline.
    #[must_use]
    pub const fn crosses(&self, y: i32) -> bool {
        self.p1.y <= y && y < self.p2.y
    }

    /// X coordinate where the edge meets scanline `y`, rounded to the nearest
    /// pixel.
    #[must_use]
    pub fn intersection_x(&self, y: i32) -> i32 {
        let dy = i64::from(self.p2.y) - i64::from(self.p1.y);
        if dy == 0 {
            return self.p1.x;
        }

        let dx = i64::from(self.p2.x) - i64::from(self.p1.x);
        let t = (i64::from(y) - i64::from(self.p1.y)) as f64 / dy as f64;
        (f64::from(self.p1.x) + t * dx as f64).round() as i32
    }
}

/// A closed polygon: the last vertex connects back to the first.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Polygon {
    points: Vec<Point>,
}

impl Polygon {
    /// Create an empty polygon.
    #[must_use]
    pub const fn new() -> Self {
        Self { points: Vec::new() }
    }

    /// Create a polygon from its vertices.
    #[must_use]
    pub fn from_points(points: impl Into<Vec<Point>>) -> Self {
        Self {
            points: points.into(),
        }
    }

    /// Create a rectangle from two corners of its first side and a third point
    /// fixing its height.
    ///
    /// The side `p1 → p2` is kept; the height is the component of `p3 − p1`
    /// perpendicular to that side. Returns `None` when `p1 == p2`.
    #[must_use]
    pub fn rectangle(p1: Point, p2: Point, p3: Point) -> Option<Self> {
        let side_x = f64::from(p2.x) - f64::from(p1.x);
        let side_y = f64::from(p2.y) - f64::from(p1.y);
        let len_sq = side_x * side_x + side_y * side_y;
        if len_sq == 0.0 {
            return None;
        }

        let to_x = f64::from(p3.x) - f64::from(p1.x);
        let to_y = f64::from(p3.y) - f64::from(p1.y);
        let projection = (to_x * side_x + to_y * side_y) / len_sq;

        let height_x = to_x - projection * side_x;
        let height_y = to_y - projection * side_y;

        let offset = |p: Point| {
            Point::new(
                (f64::from(p.x) + height_x).round() as i32,
                (f64::from(p.y) + height_y).round() as i32,
            )
        };

        Some(Self::from_points(vec![p1, p2, offset(p2), offset(p1)]))
    }

    /// Append a vertex.
    pub fn push(&mut self, point: Point) {
        self.points.push(point);
    }

    /// The vertices in order.
    #[must_use]
    pub fn points(&self) -> &[Point] {
        &self.points
    }

    /// Consume the polygon, returning its vertices.
    #[must_use]
    pub fn into_points(self) -> Vec<Point> {
        self.points
    }

    /// Number of vertices.
    #[must_use]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Whether the polygon has no vertices.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Last vertex, if any.
    #[must_use]
    pub fn last(&self) -> Option<Point> {
        self.points.last().copied()
    }

    /// Whether the polygon encloses any area at all (three or more vertices).
    #[must_use]
    pub fn is_renderable(&self) -> bool {
        self.points.len() >= 3
    }

    /// Consecutive vertex pairs, including the closing edge from last to first.
    pub fn edges(&self) -> impl Iterator<Item = Edge> + '_ {
        let n = self.points.len();
        (0..n).map(move |i| Edge::new(self.points[i], self.points[(i + 1) % n]))
    }

    /// Shoelace signed area.
    ///
    /// On a y-down raster a negative value means the vertices run
    /// counter-clockwise on screen, which is the winding the clipper treats as
    /// enclosing its interior.
    #[must_use]
    pub fn signed_area(&self) -> f64 {
        let twice: i128 = self
            .edges()
            .map(|e| {
                i128::from(e.p1.x) * i128::from(e.p2.y) - i128::from(e.p2.x) * i128::from(e.p1.y)
            })
            .sum();
        twice as f64 / 2.0
    }

    /// Absolute enclosed area.
    #[must_use]
    pub fn area(&self) -> f64 {
        self.signed_area().abs()
    }

    /// The same polygon with its vertex order reversed.
    #[must_use]
    pub fn reversed(&self) -> Self {
        Self::from_points(self.points.iter().rev().copied().collect::<Vec<_>>())
    }

    /// The polygon in clip winding (non-positive signed area), reversing it if
    /// needed. Callers opt into this explicitly; the clipper never reorders.
    #[must_use]
    pub fn oriented_for_clipping(&self) -> Self {
        if self.signed_area() > 0.0 {
            self.reversed()
        } else {
            self.clone()
        }
    }
}

impl From<Vec<Point>> for Polygon {
    fn from(points: Vec<Point>) -> Self {
        Self::from_points(points)
    }
}

impl FromIterator<Point> for Polygon {
    fn from_iter<I: IntoIterator<Item = Point>>(iter: I) -> Self {
        Self::from_points(iter.into_iter().collect::<Vec<_>>())
    }
}
