use crate::error::{GeometryError, Result};
use crate::math::predicates::{
    is_triangle_degenerate, orientation, point_in_triangle, triangle_area_x2, Orientation,
};
use crate::math::{Point2, Vector2};

/// A directed boundary edge of a triangle.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Edge {
    pub start: Point2,
    pub end: Point2,
}

impl Edge {
    /// Creates an edge running from `start` to `end`.
    #[must_use]
    pub fn new(start: Point2, end: Point2) -> Self {
        Self { start, end }
    }

    /// Returns `end - start` (not normalized).
    #[must_use]
    pub fn direction(&self) -> Vector2 {
        self.end - self.start
    }

    /// Returns `true` if `p` is within `tolerance` of either endpoint.
    ///
    /// A zero tolerance means exact equality.
    #[must_use]
    pub fn has_endpoint(&self, p: &Point2, tolerance: f64) -> bool {
        nalgebra::distance(&self.start, p) <= tolerance
            || nalgebra::distance(&self.end, p) <= tolerance
    }
}

/// A triangle in the plane, given by three ordered vertices.
///
/// The vertex order defines the winding but the triangle may be
/// re-oriented with [`Triangle::to_ccw`]. No validation happens on
/// construction; see [`Triangle::validated`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Triangle {
    vertices: [Point2; 3],
}

impl Triangle {
    /// Creates a triangle from three vertices.
    #[must_use]
    pub fn new(v1: Point2, v2: Point2, v3: Point2) -> Self {
        Self {
            vertices: [v1, v2, v3],
        }
    }

    /// Creates a triangle from raw `[x, y]` pairs.
    #[must_use]
    pub fn from_coords(coords: [[f64; 2]; 3]) -> Self {
        let [a, b, c] = coords;
        Self::new(
            Point2::new(a[0], a[1]),
            Point2::new(b[0], b[1]),
            Point2::new(c[0], c[1]),
        )
    }

    /// Returns the three vertices in their current order.
    #[must_use]
    pub fn vertices(&self) -> &[Point2; 3] {
        &self.vertices
    }

    /// Returns the three cyclic edges `v1 -> v2`, `v2 -> v3`, `v3 -> v1`.
    #[must_use]
    pub fn edges(&self) -> [Edge; 3] {
        let [a, b, c] = self.vertices;
        [Edge::new(a, b), Edge::new(b, c), Edge::new(c, a)]
    }

    /// Returns the signed area. Positive for counter-clockwise winding.
    #[must_use]
    pub fn signed_area(&self) -> f64 {
        let [a, b, c] = &self.vertices;
        triangle_area_x2(a, b, c) * 0.5
    }

    /// Returns the winding of the vertices.
    #[must_use]
    pub fn orientation(&self) -> Orientation {
        let [a, b, c] = &self.vertices;
        orientation(a, b, c)
    }

    /// Returns `true` if twice the area is not larger than `eps`.
    #[must_use]
    pub fn is_degenerate(&self, eps: f64) -> bool {
        let [a, b, c] = &self.vertices;
        is_triangle_degenerate(a, b, c, eps)
    }

    /// Returns the triangle unchanged if it is not degenerate.
    ///
    /// # Errors
    ///
    /// Returns `GeometryError::Degenerate` if twice the area is not larger
    /// than `eps`.
    pub fn validated(self, eps: f64) -> Result<Self> {
        if self.is_degenerate(eps) {
            let [a, b, c] = self.vertices;
            return Err(GeometryError::Degenerate(format!(
                "triangle ({}, {}), ({}, {}), ({}, {}) has no area",
                a.x, a.y, b.x, b.y, c.x, c.y
            ))
            .into());
        }
        Ok(self)
    }

    /// Returns the same triangle with counter-clockwise winding.
    ///
    /// Clockwise triangles get their first and last vertex swapped.
    #[must_use]
    pub fn to_ccw(self) -> Self {
        match self.orientation() {
            Orientation::Clockwise => self.reversed(),
            Orientation::CounterClockwise | Orientation::Collinear => self,
        }
    }

    /// Returns the triangle with its vertex order reversed.
    #[must_use]
    pub fn reversed(self) -> Self {
        let [a, b, c] = self.vertices;
        Self::new(c, b, a)
    }

    /// Returns `true` if `p` lies inside or on the boundary.
    #[must_use]
    pub fn contains(&self, p: &Point2) -> bool {
        let [a, b, c] = &self.vertices;
        point_in_triangle(p, a, b, c)
    }

    /// Returns `true` if every vertex of `other` lies inside or on the
    /// boundary of `self`, i.e. `other` is fully covered.
    #[must_use]
    pub fn contains_triangle(&self, other: &Triangle) -> bool {
        other.vertices.iter().all(|v| self.contains(v))
    }
}
