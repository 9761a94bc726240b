use tracing::trace;

use crate::geometry::{Edge, Triangle};
use crate::math::intersect_2d::{segment_segment_intersect_2d, SegmentHit};
use crate::math::{cross_2d, Point2, Vector2};

use super::{EntryRule, OverlapParams};

pub(crate) type CrossingId = usize;

/// A point where B's boundary passes into or out of A.
///
/// Mostly a genuine crossing of two edges. A touch at a vertex also
/// becomes one when B's boundary changes side there.
#[derive(Debug, Clone, Copy)]
pub(crate) struct Crossing {
    pub id: CrossingId,
    pub point: Point2,
    /// Edge index in A and in B.
    pub edges: [usize; 2],
    /// Parameter along the A edge (`ua`) and along the B edge (`ub`).
    pub params: [f64; 2],
    /// The B edge runs into A at this point.
    pub entering: bool,
}

/// Where a touch sits on one triangle's perimeter.
#[derive(Debug, Clone, Copy, PartialEq)]
enum Place {
    Vertex(usize),
    Edge { index: usize, t: f64 },
}

/// Heading of a ray that leaves a boundary point of a triangle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Ray {
    Inside,
    Outside,
    /// Along the boundary, with its winding.
    Forward,
    /// Along the boundary, against its winding.
    Backward,
}

impl Place {
    #[allow(clippy::float_cmp)]
    fn locate(t: f64, index: usize, edge: &Edge, point: &Point2, tolerance: f64) -> Self {
        if t == 0.0 || nalgebra::distance(&edge.start, point) <= tolerance {
            Self::Vertex(index)
        } else if t == 1.0 || nalgebra::distance(&edge.end, point) <= tolerance {
            Self::Vertex((index + 1) % 3)
        } else {
            Self::Edge { index, t }
        }
    }

    /// Same vertex, or same edge at any parameter.
    fn same_as(self, other: Self) -> bool {
        match (self, other) {
            (Self::Vertex(i), Self::Vertex(j)) => i == j,
            (Self::Edge { index: i, .. }, Self::Edge { index: j, .. }) => i == j,
            _ => false,
        }
    }

    /// Edge and parameter under which the place joins a boundary sequence.
    fn slot(self) -> (usize, f64) {
        match self {
            Self::Vertex(i) => (i, 0.0),
            Self::Edge { index, t } => (index, t),
        }
    }

    /// Directions in which the boundary of `triangle` arrives at and
    /// leaves this place, both pointing away from it.
    fn boundary_rays(self, triangle: &Triangle) -> (Vector2, Vector2) {
        let edges = triangle.edges();
        match self {
            Self::Vertex(i) => (-edges[(i + 2) % 3].direction(), edges[i].direction()),
            Self::Edge { index, .. } => {
                let d = edges[index].direction();
                (-d, d)
            }
        }
    }

    /// Classifies a ray from this place against counter-clockwise `triangle`.
    #[allow(clippy::float_cmp)]
    fn heading(self, triangle: &Triangle, d: &Vector2) -> Ray {
        let edges = triangle.edges();
        match self {
            Self::Edge { index, .. } => {
                let e = edges[index].direction();
                let side = cross_2d(&e, d);
                if side > 0.0 {
                    Ray::Inside
                } else if side < 0.0 {
                    Ray::Outside
                } else if e.dot(d) > 0.0 {
                    Ray::Forward
                } else {
                    Ray::Backward
                }
            }
            Self::Vertex(i) => {
                let next = edges[i].direction();
                let prev = edges[(i + 2) % 3].direction();
                let (left_of_next, left_of_prev) = (cross_2d(&next, d), cross_2d(&prev, d));
                if left_of_next > 0.0 && left_of_prev > 0.0 {
                    Ray::Inside
                } else if left_of_next == 0.0 && next.dot(d) > 0.0 {
                    Ray::Forward
                } else if left_of_prev == 0.0 && prev.dot(d) < 0.0 {
                    Ray::Backward
                } else {
                    Ray::Outside
                }
            }
        }
    }
}

fn is_touch(hit: &SegmentHit, edge_a: &Edge, edge_b: &Edge, tolerance: f64) -> bool {
    hit.at_endpoint()
        || edge_a.has_endpoint(&hit.point, tolerance)
        || edge_b.has_endpoint(&hit.point, tolerance)
}

fn is_entering(
    rule: EntryRule,
    point: &Point2,
    edge_a: &Edge,
    edge_b: &Edge,
    a: &Triangle,
) -> bool {
    match rule {
        EntryRule::Orientation => cross_2d(&edge_a.direction(), &edge_b.direction()) > 0.0,
        EntryRule::Probe { step } => a.contains(&(*point + edge_b.direction() * step)),
    }
}

/// Side change of B's boundary at a touch.
///
/// `Some(true)` when B arrives from outside A and leaves into it,
/// `Some(false)` for the reverse, `None` when B stays on one side.
/// Boundary shared in the same direction counts as inside.
fn touch_transition(a: &Triangle, on_a: Place, b: &Triangle, on_b: Place) -> Option<bool> {
    let (back, out) = on_b.boundary_rays(b);
    let arrives_inside = matches!(on_a.heading(a, &back), Ray::Inside | Ray::Backward);
    let leaves_inside = matches!(on_a.heading(a, &out), Ray::Inside | Ray::Forward);
    match (arrives_inside, leaves_inside) {
        (false, true) => Some(true),
        (true, false) => Some(false),
        _ => None,
    }
}

/// Collects the crossings of two counter-clockwise triangles.
///
/// Edge pairs are visited with A's edges outer and B's edges inner, so
/// crossing ids follow that order. A touch (a hit on a vertex of either
/// triangle) is kept only where B's boundary changes side; it is then
/// pinned to the exact vertex and classified from the edge directions
/// around it, whatever the entry rule.
pub(crate) fn find_crossings(a: &Triangle, b: &Triangle, params: &OverlapParams) -> Vec<Crossing> {
    let mut crossings = Vec::new();
    let mut touched: Vec<(Place, Place)> = Vec::new();

    for (ia, edge_a) in a.edges().iter().enumerate() {
        for (ib, edge_b) in b.edges().iter().enumerate() {
            let Some(hit) =
                segment_segment_intersect_2d(&edge_a.start, &edge_a.end, &edge_b.start, &edge_b.end)
            else {
                continue;
            };

            if is_touch(&hit, edge_a, edge_b, params.touch_tolerance) {
                let on_a = Place::locate(hit.ua, ia, edge_a, &hit.point, params.touch_tolerance);
                let on_b = Place::locate(hit.ub, ib, edge_b, &hit.point, params.touch_tolerance);
                if touched.iter().any(|(pa, pb)| pa.same_as(on_a) && pb.same_as(on_b)) {
                    continue;
                }
                touched.push((on_a, on_b));

                let Some(entering) = touch_transition(a, on_a, b, on_b) else {
                    trace!(ia, ib, x = hit.point.x, y = hit.point.y, "touch ignored");
                    continue;
                };
                let point = match (on_a, on_b) {
                    (_, Place::Vertex(i)) => b.vertices()[i],
                    (Place::Vertex(i), _) => a.vertices()[i],
                    _ => hit.point,
                };
                let ((ea, ta), (eb, tb)) = (on_a.slot(), on_b.slot());
                trace!(ia, ib, x = point.x, y = point.y, entering, "touch changes side");
                crossings.push(Crossing {
                    id: crossings.len(),
                    point,
                    edges: [ea, eb],
                    params: [ta, tb],
                    entering,
                });
                continue;
            }

            let entering = is_entering(params.entry_rule, &hit.point, edge_a, edge_b, a);
            trace!(
                ia,
                ib,
                x = hit.point.x,
                y = hit.point.y,
                ua = hit.ua,
                ub = hit.ub,
                entering,
                "crossing"
            );
            crossings.push(Crossing {
                id: crossings.len(),
                point: hit.point,
                edges: [ia, ib],
                params: [hit.ua, hit.ub],
                entering,
            });
        }
    }

    crossings
}
