use tracing::debug;

use crate::error::Result;
use crate::geometry::Triangle;
use crate::math::Point2;

use super::boundary::BoundarySequence;
use super::crossing::find_crossings;
use super::traverse::{walk, Boundary};
use super::OverlapParams;

/// Executes the Weiler-Atherton overlap of two triangles.
///
/// Orchestrates the full pipeline: degeneracy check, winding
/// normalization, crossing discovery, boundary merge and the boundary
/// walk, or the containment fallback when no entry crossing exists.
pub(crate) fn overlap_execute(
    a: &Triangle,
    b: &Triangle,
    params: &OverlapParams,
) -> Result<Option<Vec<Point2>>> {
    // Step 1: reject zero-area input
    let a = a.validated(params.degeneracy_epsilon)?.to_ccw();
    let b = b.validated(params.degeneracy_epsilon)?.to_ccw();

    // Step 2: crossings in edge-pair order
    let crossings = find_crossings(&a, &b, params);
    let Some(entry) = crossings.iter().find(|c| c.entering).map(|c| c.id) else {
        debug!(crossings = crossings.len(), "no entry crossing, testing containment");
        return Ok(containment(&a, &b));
    };

    // Step 3: merge crossings into both perimeters
    let mut seq_a = BoundarySequence::new();
    let mut seq_b = BoundarySequence::new();
    for c in &crossings {
        seq_a.insert(c.edges[0], c.id, c.params[0]);
        seq_b.insert(c.edges[1], c.id, c.params[1]);
    }

    // Step 4: walk from the entry point
    let polygon = walk(
        &Boundary {
            triangle: &a,
            sequence: &seq_a,
        },
        &Boundary {
            triangle: &b,
            sequence: &seq_b,
        },
        &crossings,
        entry,
    )?;
    debug!(
        crossings = crossings.len(),
        entry,
        vertices = polygon.len(),
        "overlap polygon assembled"
    );
    Ok(Some(polygon))
}

/// Resolves the case without an entry crossing.
///
/// With no boundary crossing, the triangles are either nested or
/// disjoint. A triangle is nested when all of its vertices lie in the
/// other one; a single shared vertex is not enough.
fn containment(a: &Triangle, b: &Triangle) -> Option<Vec<Point2>> {
    if a.contains_triangle(b) {
        debug!("B lies inside A");
        return Some(b.vertices().to_vec());
    }
    if b.contains_triangle(a) {
        debug!("A lies inside B");
        return Some(a.vertices().to_vec());
    }
    debug!("triangles do not overlap");
    None
}
