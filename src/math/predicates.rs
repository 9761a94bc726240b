//! Orientation, containment and degeneracy predicates.
//!
//! All predicates use plain floating-point arithmetic. Their sign
//! conventions are shared by the clipping code, so a point that is
//! "on the boundary" here is also a touch there.

use super::Point2;

/// Winding of three points.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Orientation {
    CounterClockwise,
    Clockwise,
    Collinear,
}

/// Cross product of `(p1 - p3)` and `(p2 - p3)`.
///
/// Positive when `p1, p2, p3` turn counter-clockwise, negative when they
/// turn clockwise and zero when they are collinear.
#[inline]
#[must_use]
pub fn orient_2d(p1: &Point2, p2: &Point2, p3: &Point2) -> f64 {
    (p1.x - p3.x) * (p2.y - p3.y) - (p2.x - p3.x) * (p1.y - p3.y)
}

/// Classifies the winding of `p1, p2, p3`.
#[must_use]
pub fn orientation(p1: &Point2, p2: &Point2, p3: &Point2) -> Orientation {
    let det = orient_2d(p1, p2, p3);
    if det > 0.0 {
        Orientation::CounterClockwise
    } else if det < 0.0 {
        Orientation::Clockwise
    } else {
        Orientation::Collinear
    }
}

/// Returns `true` if `p` lies inside or on the boundary of `(v1, v2, v3)`.
///
/// Works for either winding of the triangle.
#[must_use]
pub fn point_in_triangle(p: &Point2, v1: &Point2, v2: &Point2, v3: &Point2) -> bool {
    let d1 = orient_2d(p, v1, v2);
    let d2 = orient_2d(p, v2, v3);
    let d3 = orient_2d(p, v3, v1);

    let has_neg = d1 < 0.0 || d2 < 0.0 || d3 < 0.0;
    let has_pos = d1 > 0.0 || d2 > 0.0 || d3 > 0.0;

    !(has_neg && has_pos)
}

/// Twice the signed area of `(a, b, c)`, expanded per vertex.
#[inline]
#[must_use]
pub fn triangle_area_x2(a: &Point2, b: &Point2, c: &Point2) -> f64 {
    a.x * (b.y - c.y) + b.x * (c.y - a.y) + c.x * (a.y - b.y)
}

/// Returns `true` if `(a, b, c)` has `|2 * area| <= eps`.
#[must_use]
pub fn is_triangle_degenerate(a: &Point2, b: &Point2, c: &Point2, eps: f64) -> bool {
    triangle_area_x2(a, b, c).abs() <= eps
}
