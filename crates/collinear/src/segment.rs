//! Line segments named by their two extreme points.

use std::fmt;

use crate::point::Point;

/// Segment spanning the two extreme points of a collinear group.
///
/// Detectors never construct a degenerate segment (`p == q`). The derived
/// lexicographic order carries no geometric meaning; it exists so segment
/// collections can live in `BTreeSet` when callers compare detector outputs.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct LineSegment {
    pub p: Point,
    pub q: Point,
}

impl LineSegment {
    #[inline]
    pub fn new(p: Point, q: Point) -> Self {
        debug_assert!(p != q, "degenerate segment");
        Self { p, q }
    }
}

impl fmt::Display for LineSegment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} -> {}", self.p, self.q)
    }
}
