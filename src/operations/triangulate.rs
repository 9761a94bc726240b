use tracing::trace;

use crate::error::{GeometryError, OperationError, Result};
use crate::geometry::Triangle;
use crate::math::barycentric::barycentric_2d;
use crate::math::Point2;

/// Splits a convex polygon into triangles by ear clipping.
///
/// Intended for overlap polygons, which are convex and have at most six
/// vertices. The polygon is given without a closing duplicate.
pub struct TriangulateConvex<'a> {
    polygon: &'a [Point2],
}

impl<'a> TriangulateConvex<'a> {
    /// Creates a new `TriangulateConvex` operation.
    #[must_use]
    pub fn new(polygon: &'a [Point2]) -> Self {
        Self { polygon }
    }

    /// Executes the triangulation.
    ///
    /// Returns `n - 2` triangles for a polygon with `n` vertices, keeping
    /// the polygon's winding.
    ///
    /// # Errors
    ///
    /// Returns `GeometryError::NotEnoughPoints` for fewer than three points
    /// and `OperationError::NoEar` if a full pass finds no ear.
    pub fn execute(&self) -> Result<Vec<Triangle>> {
        if self.polygon.len() < 3 {
            return Err(GeometryError::NotEnoughPoints(self.polygon.len()).into());
        }

        let mut remaining = self.polygon.to_vec();
        let mut triangles = Vec::with_capacity(remaining.len() - 2);
        let mut i = 0;
        let mut misses = 0;

        while remaining.len() > 3 {
            let n = remaining.len();
            let (a, b, c) = (remaining[i % n], remaining[(i + 1) % n], remaining[(i + 2) % n]);
            if is_ear(&a, &b, &c, &remaining) {
                trace!(i, n, "clipping ear");
                triangles.push(Triangle::new(a, b, c));
                remaining.remove((i + 1) % n);
                misses = 0;
            } else {
                misses += 1;
                if misses >= n {
                    return Err(OperationError::NoEar { remaining: n }.into());
                }
                i += 1;
            }
            i %= remaining.len();
        }

        triangles.push(Triangle::new(remaining[0], remaining[1], remaining[2]));
        Ok(triangles)
    }
}

/// No other polygon point may lie strictly inside the candidate ear.
fn is_ear(a: &Point2, b: &Point2, c: &Point2, polygon: &[Point2]) -> bool {
    polygon
        .iter()
        .filter(|p| *p != a && *p != b && *p != c)
        .all(|p| match barycentric_2d(a, b, c, p) {
            Some((u, v)) => !(u >= 0.0 && v >= 0.0 && u + v < 1.0),
            None => false,
        })
}
