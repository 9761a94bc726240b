use super::Point2;

/// Result of a parametric segment intersection.
///
/// `point == p1 + ua * (p2 - p1)` on the first segment and lies at
/// parameter `ub` on the second one.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SegmentHit {
    pub point: Point2,
    pub ua: f64,
    pub ub: f64,
}

impl SegmentHit {
    /// Returns `true` if the hit sits on an endpoint of either segment.
    #[allow(clippy::float_cmp)]
    #[must_use]
    pub fn at_endpoint(&self) -> bool {
        self.ua == 0.0 || self.ua == 1.0 || self.ub == 0.0 || self.ub == 1.0
    }
}

/// Solves for the parameters of the lines through `p1 -> p2` and `p3 -> p4`.
///
/// Returns `None` if the lines are parallel or collinear.
#[allow(clippy::float_cmp)]
fn line_params(p1: &Point2, p2: &Point2, p3: &Point2, p4: &Point2) -> Option<(f64, f64)> {
    let denom = (p4.y - p3.y) * (p2.x - p1.x) - (p4.x - p3.x) * (p2.y - p1.y);
    if denom == 0.0 {
        return None;
    }
    let ua = ((p4.x - p3.x) * (p1.y - p3.y) - (p4.y - p3.y) * (p1.x - p3.x)) / denom;
    let ub = ((p2.x - p1.x) * (p1.y - p3.y) - (p2.y - p1.y) * (p1.x - p3.x)) / denom;
    Some((ua, ub))
}

fn in_unit_range(t: f64) -> bool {
    (0.0..=1.0).contains(&t)
}

/// Bounded segment-segment intersection in 2D.
///
/// Both `ua` and `ub` must lie in `[0, 1]`. Parallel and collinear
/// segments never intersect, even when they overlap.
#[must_use]
pub fn segment_segment_intersect_2d(
    p1: &Point2,
    p2: &Point2,
    p3: &Point2,
    p4: &Point2,
) -> Option<SegmentHit> {
    let (ua, ub) = line_params(p1, p2, p3, p4)?;
    if !in_unit_range(ua) || !in_unit_range(ub) {
        return None;
    }
    Some(SegmentHit {
        point: *p1 + (*p2 - *p1) * ua,
        ua,
        ub,
    })
}

/// Intersection of the infinite line through `p1 -> p2` with the segment
/// `p3 -> p4`.
///
/// Only `ub` (the segment parameter) is range-checked.
#[must_use]
pub fn line_segment_intersect_2d(
    p1: &Point2,
    p2: &Point2,
    p3: &Point2,
    p4: &Point2,
) -> Option<SegmentHit> {
    let (ua, ub) = line_params(p1, p2, p3, p4)?;
    if !in_unit_range(ub) {
        return None;
    }
    Some(SegmentHit {
        point: *p1 + (*p2 - *p1) * ua,
        ua,
        ub,
    })
}
