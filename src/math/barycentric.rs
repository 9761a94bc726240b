use super::Point2;

/// Barycentric coordinates `(u, v)` of `p` in the triangle `(a1, a2, a3)`.
///
/// `u` weighs the edge `a3 - a1` and `v` the edge `a2 - a1`, so
/// `p == a1 + u * (a3 - a1) + v * (a2 - a1)`. The point is inside when
/// `u >= 0`, `v >= 0` and `u + v <= 1`.
///
/// Returns `None` for a degenerate triangle.
#[allow(clippy::float_cmp)]
#[must_use]
pub fn barycentric_2d(a1: &Point2, a2: &Point2, a3: &Point2, p: &Point2) -> Option<(f64, f64)> {
    let v0 = a3 - a1;
    let v1 = a2 - a1;
    let v2 = p - a1;

    let dot00 = v0.dot(&v0);
    let dot01 = v0.dot(&v1);
    let dot02 = v0.dot(&v2);
    let dot11 = v1.dot(&v1);
    let dot12 = v1.dot(&v2);

    let denom = dot00 * dot11 - dot01 * dot01;
    if denom == 0.0 {
        return None;
    }
    let inv = 1.0 / denom;
    let u = (dot11 * dot02 - dot01 * dot12) * inv;
    let v = (dot00 * dot12 - dot01 * dot02) * inv;
    Some((u, v))
}
