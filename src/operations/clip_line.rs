use crate::geometry::Triangle;
use crate::math::intersect_2d::line_segment_intersect_2d;
use crate::math::Point2;

/// Computes the chord cut from a triangle by an infinite line.
///
/// The line runs through `from` and `to`; only the triangle's edges are
/// bounded.
pub struct LineTriangleIntersect {
    from: Point2,
    to: Point2,
    triangle: Triangle,
}

impl LineTriangleIntersect {
    /// Creates a new `LineTriangleIntersect` query.
    #[must_use]
    pub fn new(from: Point2, to: Point2, triangle: Triangle) -> Self {
        Self { from, to, triangle }
    }

    /// Returns every distinct point where the line meets an edge, in edge
    /// order.
    ///
    /// A point hit again by a later edge (a vertex) moves to the end.
    #[must_use]
    pub fn hits(&self) -> Vec<Point2> {
        let mut hits: Vec<Point2> = Vec::with_capacity(3);
        for edge in self.triangle.edges() {
            let Some(hit) = line_segment_intersect_2d(&self.from, &self.to, &edge.start, &edge.end)
            else {
                continue;
            };
            if let Some(i) = hits.iter().position(|p| *p == hit.point) {
                hits.remove(i);
            }
            hits.push(hit.point);
        }
        hits
    }

    /// Executes the query, returning the two ends of the chord.
    ///
    /// Returns `None` if the line misses the triangle or only touches a
    /// vertex.
    #[must_use]
    pub fn execute(&self) -> Option<(Point2, Point2)> {
        match self.hits().as_slice() {
            [first, second, ..] => Some((*first, *second)),
            _ => None,
        }
    }
}
