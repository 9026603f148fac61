//! Sutherland–Hodgman polygon clipping against a convex boundary.
//!
//! The subject is clipped against each boundary edge in turn; the output of
//! one pass is the input of the next.
//!
//! # Winding
//!
//! A point is inside a boundary edge `p1 → p2` when it lies strictly on the
//! side where `(-dy, dx) · (v - p1) < 0`. On a y-down raster that selects the
//! interior of a boundary listed counter-clockwise on screen (negative
//! [`Polygon::signed_area`]). A boundary with the opposite winding clips
//! everything away. The clipper never reorders the boundary; use
//! [`Polygon::oriented_for_clipping`] to normalize it first.

use crate::geometry::{Point, Polygon};

/// Determinant magnitude below which two lines are treated as parallel.
pub const PARALLEL_EPSILON: f64 = 1e-9;

/// One oriented edge of the clip boundary.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ClipEdge {
    /// Edge start.
    pub p1: Point,
    /// Edge end.
    pub p2: Point,
}

impl ClipEdge {
    /// Create a boundary edge.
    #[must_use]
    pub const fn new(p1: Point, p2: Point) -> Self {
        Self { p1, p2 }
    }

    /// Half-plane test against the edge's left normal.
    #[must_use]
    pub fn inside(&self, v: Point) -> bool {
        let dx = i128::from(self.p2.x) - i128::from(self.p1.x);
        let dy = i128::from(self.p2.y) - i128::from(self.p1.y);
        let wx = i128::from(v.x) - i128::from(self.p1.x);
        let wy = i128::from(v.y) - i128::from(self.p1.y);

        // normal = (-dy, dx); each product can reach 2^64
        -dy * wx + dx * wy < 0
    }

    /// Intersection of the infinite line through this edge with the infinite
    /// line through `v1` and `v2`, rounded to the nearest pixel.
    ///
    /// Returns `None` for parallel or coincident lines.
    #[must_use]
    pub fn intersection(&self, v1: Point, v2: Point) -> Option<Point> {
        let (x1, y1) = (f64::from(self.p1.x), f64::from(self.p1.y));
        let (x2, y2) = (f64::from(self.p2.x), f64::from(self.p2.y));
        let (x3, y3) = (f64::from(v1.x), f64::from(v1.y));
        let (x4, y4) = (f64::from(v2.x), f64::from(v2.y));

        let den = (x3 - x4) * (y1 - y2) - (x1 - x2) * (y3 - y4);
        if den.abs() < PARALLEL_EPSILON {
            return None;
        }

        let subject_cross = x3 * y4 - y3 * x4;
        let edge_cross = x1 * y2 - y1 * x2;

        let px = (subject_cross * (x1 - x2) - edge_cross * (x3 - x4)) / den;
        let py = (subject_cross * (y1 - y2) - edge_cross * (y3 - y4)) / den;

        Some(Point::new(px.round() as i32, py.round() as i32))
    }

    /// Clip a vertex list against this single edge.
    ///
    /// Lists with fewer than two vertices pass through unchanged.
    #[must_use]
    pub fn clip(&self, points: &[Point]) -> Vec<Point> {
        let Some(&last) = points.last() else {
            return Vec::new();
        };
        if points.len() < 2 {
            return points.to_vec();
        }

        let mut out = Vec::with_capacity(points.len() + 1);
        let mut prev = last;
        let mut prev_inside = self.inside(prev);

        for &cur in points {
            let cur_inside = self.inside(cur);
            if cur_inside {
                if !prev_inside {
                    out.extend(self.intersection(prev, cur));
                }
                out.push(cur);
            } else if prev_inside {
                out.extend(self.intersection(prev, cur));
            }
            prev = cur;
            prev_inside = cur_inside;
        }

        out
    }
}

/// Clip `subject` against the convex `boundary`.
///
/// A boundary with fewer than two vertices leaves the subject unchanged. A
/// result with fewer than three vertices has no visible area.
///
/// # Example
///
/// ```
/// use raster_kernel::clip::clip;
/// use raster_kernel::geometry::Point;
///
/// let square = [
///     Point::new(0, 0),
///     Point::new(10, 0),
///     Point::new(10, 10),
///     Point::new(0, 10),
/// ];
/// assert_eq!(clip(&square, &[Point::new(5, 5)]), square.to_vec());
/// ```
#[must_use]
pub fn clip(subject: &[Point], boundary: &[Point]) -> Vec<Point> {
    let Some(&last) = boundary.last() else {
        return subject.to_vec();
    };
    if boundary.len() < 2 {
        return subject.to_vec();
    }

    log::debug!(
        "clipping {} vertices against a {}-vertex boundary",
        subject.len(),
        boundary.len()
    );

    let mut points = subject.to_vec();
    let mut p1 = last;
    for &p2 in boundary {
        points = ClipEdge::new(p1, p2).clip(&points);
        log::trace!("edge ({},{})->({},{}): {} vertices", p1.x, p1.y, p2.x, p2.y, points.len());
        p1 = p2;
    }

    points
}

/// Clip one polygon against another, see [`clip`].
#[must_use]
pub fn clip_polygon(subject: &Polygon, boundary: &Polygon) -> Polygon {
    Polygon::from_points(clip(subject.points(), boundary.points()))
}


#[cfg(test)]
mod proptests {
    use super::tests::same_cycle;
    use super::*;
    use proptest::prelude::*;

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(256))]

        /// Clipping an axis-aligned rectangle by itself (in clip winding)
        /// reproduces its vertices.
        #[test]
        fn prop_self_clip_is_identity(
            x in -500i32..500, y in -500i32..500, w in 1i32..300, h in 1i32..300
        ) {
            let rect = Polygon::from_points(vec![
                Point::new(x, y),
                Point::new(x + w, y),
                Point::new(x + w, y + h),
                Point::new(x, y + h),
            ]);
            let boundary = rect.oriented_for_clipping();
            let result = clip(rect.points(), boundary.points());
            prop_assert!(same_cycle(&result, rect.points()), "got {:?}", result);
        }

        /// Clipping never grows the enclosed area beyond either polygon.
        #[test]
        fn prop_clip_area_bounded(
            bx in -50i32..50, by in -50i32..50, bw in 1i32..100, bh in 1i32..100
        ) {
            let subject = Polygon::from_points(vec![
                Point::new(0, 0), Point::new(40, 0), Point::new(40, 40), Point::new(0, 40),
            ]);
            let boundary = Polygon::from_points(vec![
                Point::new(bx, by), Point::new(bx + bw, by),
                Point::new(bx + bw, by + bh), Point::new(bx, by + bh),
            ]).oriented_for_clipping();

            let result = clip_polygon(&subject, &boundary);
            prop_assert!(result.area() <= subject.area() + 1e-9);
            prop_assert!(result.area() <= boundary.area() + 1e-9);
        }
    }
}
