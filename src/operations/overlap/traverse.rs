use tracing::warn;

use crate::error::{OperationError, Result};
use crate::geometry::Triangle;
use crate::math::Point2;

use super::boundary::{BoundarySequence, Node};
use super::crossing::{Crossing, CrossingId};

/// Which boundary the walk currently follows.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Walking {
    A,
    B,
}

impl Walking {
    fn flip(self) -> Self {
        match self {
            Self::A => Self::B,
            Self::B => Self::A,
        }
    }
}

/// One triangle's perimeter as seen by the walk.
pub(crate) struct Boundary<'a> {
    pub triangle: &'a Triangle,
    pub sequence: &'a BoundarySequence,
}

impl Boundary<'_> {
    fn point(&self, node: Node, crossings: &[Crossing]) -> Point2 {
        match node {
            Node::Vertex(i) => self.triangle.vertices()[i],
            Node::Crossing { id, .. } => crossings[id].point,
        }
    }
}

fn push_distinct(polygon: &mut Vec<Point2>, point: Point2) {
    if polygon.last() != Some(&point) {
        polygon.push(point);
    }
}

/// Walks both boundaries from `entry` and returns the overlap polygon.
///
/// The walk starts on B and switches boundary at every crossing other
/// than `entry`; it ends when `entry` comes up again. The number of steps
/// is bounded by the total node count of both boundaries. A crossing
/// pinned to a vertex is emitted once.
///
/// # Errors
///
/// Returns `OperationError::TraversalNotClosed` if the walk does not
/// return to `entry` within the bound.
pub(crate) fn walk(
    a: &Boundary<'_>,
    b: &Boundary<'_>,
    crossings: &[Crossing],
    entry: CrossingId,
) -> Result<Vec<Point2>> {
    let limit = a.sequence.len() + b.sequence.len();
    let mut polygon = vec![crossings[entry].point];
    let mut walking = Walking::B;
    let mut at = b.sequence.position_of(entry);

    for _ in 0..limit {
        let Some(current) = at else {
            break;
        };
        let side = match walking {
            Walking::A => a,
            Walking::B => b,
        };
        let next = side.sequence.next_index(current);
        let node = side.sequence.node(next);

        match node {
            Node::Crossing { id, .. } if id == entry => {
                if polygon.len() > 1 && polygon.first() == polygon.last() {
                    polygon.pop();
                }
                return Ok(polygon);
            }
            Node::Crossing { id, .. } => {
                push_distinct(&mut polygon, side.point(node, crossings));
                walking = walking.flip();
                let other = match walking {
                    Walking::A => a,
                    Walking::B => b,
                };
                at = other.sequence.position_of(id);
            }
            Node::Vertex(_) => {
                push_distinct(&mut polygon, side.point(node, crossings));
                at = Some(next);
            }
        }
    }

    warn!(entry, steps = limit, "boundary walk did not close");
    Err(OperationError::TraversalNotClosed { steps: limit }.into())
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::error::TriclipError;

    fn crossing(id: CrossingId, x: f64, y: f64) -> Crossing {
        Crossing {
            id,
            point: Point2::new(x, y),
            edges: [0, 0],
            params: [0.5, 0.5],
            entering: id == 0,
        }
    }

    #[test]
    fn walk_switches_at_each_crossing() {
        // A = (0,0) (2,0) (2,2); B = (1,1) (2,-1) (3,1), both CCW.
        let ta = Triangle::from_coords([[0.0, 0.0], [2.0, 0.0], [2.0, 2.0]]);
        let tb = Triangle::from_coords([[1.0, 1.0], [2.0, -1.0], [3.0, 1.0]]);
        let crossings = vec![crossing(0, 2.0, 1.0), crossing(1, 1.5, 0.0)];

        let mut sa = BoundarySequence::new();
        sa.insert(1, 0, 0.5);
        sa.insert(0, 1, 0.75);
        let mut sb = BoundarySequence::new();
        sb.insert(2, 0, 0.5);
        sb.insert(0, 1, 0.5);

        let polygon = walk(
            &Boundary {
                triangle: &ta,
                sequence: &sa,
            },
            &Boundary {
                triangle: &tb,
                sequence: &sb,
            },
            &crossings,
            0,
        )
        .unwrap();
        assert_eq!(
            polygon,
            vec![
                Point2::new(2.0, 1.0),
                Point2::new(1.0, 1.0),
                Point2::new(1.5, 0.0),
                Point2::new(2.0, 0.0),
            ]
        );
    }

    #[test]
    fn walk_that_loses_a_crossing_is_an_error() {
        let ta = Triangle::from_coords([[0.0, 0.0], [2.0, 0.0], [2.0, 2.0]]);
        let tb = Triangle::from_coords([[1.0, 1.0], [2.0, -1.0], [3.0, 1.0]]);
        let crossings = vec![
            crossing(0, 2.0, 1.0),
            crossing(1, 1.5, 0.0),
            crossing(2, 2.0, 1.5),
        ];

        // Crossing 2 exists only on A, so the walk cannot switch back to B.
        let mut sa = BoundarySequence::new();
        sa.insert(0, 1, 0.75);
        sa.insert(1, 2, 0.75);
        let mut sb = BoundarySequence::new();
        sb.insert(2, 0, 0.5);
        sb.insert(0, 1, 0.5);

        let err = walk(
            &Boundary {
                triangle: &ta,
                sequence: &sa,
            },
            &Boundary {
                triangle: &tb,
                sequence: &sb,
            },
            &crossings,
            0,
        )
        .unwrap_err();
        assert!(matches!(
            err,
            TriclipError::Operation(OperationError::TraversalNotClosed { .. })
        ));
    }

    #[test]
    fn crossing_on_a_vertex_is_emitted_once() {
        // A = (0,0) (4,0) (0,4); B = (2,0) (3,-1) (1,2). B leaves A at its
        // own first vertex, which lies on A's bottom edge.
        let ta = Triangle::from_coords([[0.0, 0.0], [4.0, 0.0], [0.0, 4.0]]);
        let tb = Triangle::from_coords([[2.0, 0.0], [3.0, -1.0], [1.0, 2.0]]);
        let crossings = vec![
            Crossing {
                id: 0,
                point: Point2::new(2.0, 0.0),
                edges: [0, 0],
                params: [0.5, 0.0],
                entering: false,
            },
            Crossing {
                id: 1,
                point: Point2::new(7.0 / 3.0, 0.0),
                edges: [0, 1],
                params: [7.0 / 12.0, 1.0 / 3.0],
                entering: true,
            },
        ];

        let mut sa = BoundarySequence::new();
        let mut sb = BoundarySequence::new();
        for c in &crossings {
            sa.insert(c.edges[0], c.id, c.params[0]);
            sb.insert(c.edges[1], c.id, c.params[1]);
        }

        let polygon = walk(
            &Boundary {
                triangle: &ta,
                sequence: &sa,
            },
            &Boundary {
                triangle: &tb,
                sequence: &sb,
            },
            &crossings,
            1,
        )
        .unwrap();
        assert_eq!(
            polygon,
            vec![
                Point2::new(7.0 / 3.0, 0.0),
                Point2::new(1.0, 2.0),
                Point2::new(2.0, 0.0),
            ]
        );
    }

    #[test]
    fn closing_vertex_is_not_repeated() {
        // Same pair with the roles swapped: the entry is pinned to the first
        // vertex of A = (2,0) (3,-1) (1,2), and the walk reaches that vertex
        // again on A's boundary just before closing.
        let ta = Triangle::from_coords([[2.0, 0.0], [3.0, -1.0], [1.0, 2.0]]);
        let tb = Triangle::from_coords([[0.0, 0.0], [4.0, 0.0], [0.0, 4.0]]);
        let crossings = vec![
            Crossing {
                id: 0,
                point: Point2::new(2.0, 0.0),
                edges: [0, 0],
                params: [0.0, 0.5],
                entering: true,
            },
            Crossing {
                id: 1,
                point: Point2::new(7.0 / 3.0, 0.0),
                edges: [1, 0],
                params: [1.0 / 3.0, 7.0 / 12.0],
                entering: false,
            },
        ];

        let mut sa = BoundarySequence::new();
        let mut sb = BoundarySequence::new();
        for c in &crossings {
            sa.insert(c.edges[0], c.id, c.params[0]);
            sb.insert(c.edges[1], c.id, c.params[1]);
        }

        let polygon = walk(
            &Boundary {
                triangle: &ta,
                sequence: &sa,
            },
            &Boundary {
                triangle: &tb,
                sequence: &sb,
            },
            &crossings,
            0,
        )
        .unwrap();
        assert_eq!(
            polygon,
            vec![
                Point2::new(2.0, 0.0),
                Point2::new(7.0 / 3.0, 0.0),
                Point2::new(1.0, 2.0),
            ]
        );
    }
}
