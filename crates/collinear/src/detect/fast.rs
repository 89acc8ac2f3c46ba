//! Sort-based detector: slope-sort around each origin, scan for runs.

use crate::point::Point;
use crate::segment::LineSegment;
use crate::validate::{PointSet, ValidationError};

use super::MIN_GROUP;

/// Validate `points`, then report every maximal collinear group of 4 or
/// more as one segment between its extreme points.
pub fn segments(points: &[Point]) -> Result<Vec<LineSegment>, ValidationError> {
    Ok(segments_in(&PointSet::new(points)?))
}

/// Detection body; total once the input is validated.
///
/// One pass per origin point:
/// 1. refill the scratch buffer from the canonical order, so no state leaks
///    from the previous origin's sort;
/// 2. stable-sort it by slope to the origin. The origin's slope to itself
///    is degenerate and sorts to the front, where the scan skips it;
/// 3. scan for maximal runs of equal slope. A run of `MIN_GROUP - 1`
///    companions plus the origin is a reportable group;
/// 4. emit `origin -> run_last` only when the origin precedes `run_first`
///    in the total order. The stable sort keeps each run ascending, so
///    `run_first` is the group's smallest non-origin member and `run_last`
///    its largest; the guard therefore fires exactly once per maximal
///    group, on the pass where the group's smallest point is the origin.
///
/// Complexity: O(N^2 log N) slope comparisons, O(N) scratch space.
pub fn segments_in(set: &PointSet) -> Vec<LineSegment> {
    let canon = set.as_slice();
    let n = canon.len();
    let mut out = Vec::new();
    if n < MIN_GROUP {
        return out;
    }
    let mut by_slope = canon.to_vec();
    for &origin in canon {
        by_slope.copy_from_slice(canon);
        by_slope.sort_by(origin.slope_order());
        debug_assert_eq!(by_slope[0], origin, "origin must sort to the front");
        let mut lo = 1;
        while lo < n {
            let slope = origin.slope_to(by_slope[lo]);
            let mut hi = lo + 1;
            while hi < n && origin.slope_to(by_slope[hi]) == slope {
                hi += 1;
            }
            if hi - lo >= MIN_GROUP - 1 && origin < by_slope[lo] {
                out.push(LineSegment::new(origin, by_slope[hi - 1]));
            }
            lo = hi;
        }
    }
    out
}
