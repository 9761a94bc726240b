//! Overlap of two triangles by Weiler-Atherton boundary clipping.
//!
//! Both triangles are normalized to counter-clockwise winding. Every
//! genuine crossing of their edges is merged into both perimeters in
//! parametric order; the walk then starts at the first crossing where B's
//! boundary enters A, follows B, and hops to the other perimeter at each
//! crossing until it comes back to the start. Without such a crossing the
//! triangles are either nested or disjoint.
//!
//! Touches (a hit on a vertex of either triangle, or collinear edges)
//! only count where B's boundary changes side there, for example a vertex
//! of B resting on an edge of A with one of its edges running into A and
//! the other running out. Such a touch is pinned to the vertex and joins
//! the walk like any other crossing.

mod boundary;
mod crossing;
mod engine;
mod traverse;

use tracing::debug;

use crate::error::Result;
use crate::geometry::Triangle;
use crate::math::Point2;

use engine::overlap_execute;

/// How a crossing is classified as the start of the boundary walk.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum EntryRule {
    /// The B edge points to the inner side of the A edge it crosses.
    ///
    /// Touches that change side are always classified this way.
    #[default]
    Orientation,
    /// A point `step * (end - start)` further along the B edge lies in A.
    ///
    /// Misclassifies crossings on triangles thinner than the probe.
    Probe { step: f64 },
}

impl EntryRule {
    /// Probe step used by [`EntryRule::probe`].
    pub const PROBE_STEP: f64 = 0.01;

    /// Probe rule with the default step.
    #[must_use]
    pub fn probe() -> Self {
        Self::Probe {
            step: Self::PROBE_STEP,
        }
    }
}

/// Parameters controlling the overlap computation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OverlapParams {
    /// Triangles with `|2 * area| <= degeneracy_epsilon` are rejected.
    pub degeneracy_epsilon: f64,
    /// Intersections closer than this to an edge endpoint are touches.
    /// Zero means exact coincidence.
    pub touch_tolerance: f64,
    /// Classification of the walk's entry crossing.
    pub entry_rule: EntryRule,
}

impl Default for OverlapParams {
    fn default() -> Self {
        Self {
            degeneracy_epsilon: 0.0,
            touch_tolerance: 0.0,
            entry_rule: EntryRule::Orientation,
        }
    }
}

/// Computes the overlap region of two triangles.
pub struct TriangleOverlap {
    a: Triangle,
    b: Triangle,
    params: OverlapParams,
}

impl TriangleOverlap {
    /// Creates a new `TriangleOverlap` query with default parameters.
    #[must_use]
    pub fn new(a: Triangle, b: Triangle) -> Self {
        Self {
            a,
            b,
            params: OverlapParams::default(),
        }
    }

    /// Sets custom parameters.
    #[must_use]
    pub fn with_params(mut self, params: OverlapParams) -> Self {
        self.params = params;
        self
    }

    /// Executes the query.
    ///
    /// Returns `Ok(None)` when the triangles do not overlap, otherwise the
    /// counter-clockwise overlap polygon without a closing duplicate.
    ///
    /// # Errors
    ///
    /// Returns `GeometryError::Degenerate` if either triangle has no area,
    /// or `OperationError::TraversalNotClosed` if the boundary walk cannot
    /// get back to its start.
    pub fn execute(&self) -> Result<Option<Vec<Point2>>> {
        overlap_execute(&self.a, &self.b, &self.params)
    }
}

/// Overlap polygon of `a` and `b`, or `None` if there is none.
///
/// Degenerate input also yields `None`. Use [`TriangleOverlap`] to tell
/// the cases apart or to change the parameters.
#[must_use]
pub fn overlap(a: &Triangle, b: &Triangle) -> Option<Vec<Point2>> {
    match TriangleOverlap::new(*a, *b).execute() {
        Ok(polygon) => polygon,
        Err(err) => {
            debug!(%err, "no overlap");
            None
        }
    }
}
