//! Brute-force baseline: examine every 4-combination of points.

use crate::point::Point;
use crate::segment::LineSegment;
use crate::validate::{PointSet, ValidationError};

use super::MIN_GROUP;

/// Validate `points`, then report one segment per collinear 4-combination.
pub fn segments(points: &[Point]) -> Result<Vec<LineSegment>, ValidationError> {
    Ok(segments_in(&PointSet::new(points)?))
}

/// Detection body; total once the input is validated.
///
/// For each index combination `p < q < r < s` over the canonical order, the
/// three slopes from `p` are compared exactly; a match emits the segment
/// `points[p] -> points[s]`. Because the indices ascend in the total order,
/// the emitted endpoints are the extremes of that combination. A line with
/// more than 4 points yields one emission per qualifying combination, with
/// overlapping and repeated endpoint pairs among them. That is the baseline
/// approximation, kept as stated rather than merged.
///
/// Complexity: O(N^4) slope comparisons.
pub fn segments_in(set: &PointSet) -> Vec<LineSegment> {
    let pts = set.as_slice();
    let n = pts.len();
    let mut out = Vec::new();
    if n < MIN_GROUP {
        return out;
    }
    for p in 0..n {
        for q in (p + 1)..n {
            let pq = pts[p].slope_to(pts[q]);
            for r in (q + 1)..n {
                if pts[p].slope_to(pts[r]) != pq {
                    continue;
                }
                for s in (r + 1)..n {
                    if pts[p].slope_to(pts[s]) == pq {
                        out.push(LineSegment::new(pts[p], pts[s]));
                    }
                }
            }
        }
    }
    out
}
