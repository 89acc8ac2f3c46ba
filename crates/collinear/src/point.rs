//! Planar points with a total order and exact slope comparison.
//!
//! Purpose
//! - Provide the one value type both detectors build on: an integer point
//!   with the canonical (y, then x) order and a slope-to-origin comparator.
//!
//! Why integers plus a tagged slope
//! - Integer coordinates keep the point order exact. The only float in the
//!   crate is the slope quotient, and it is wrapped in [`Slope`] so the
//!   vertical and degenerate cases are explicit variants rather than IEEE
//!   infinities smuggled through `f64`.
//!
//! Code cross-refs: `detect::brute`, `detect::fast` (consumers),
//! `validate::PointSet` (canonical ordering).

use std::cmp::Ordering;
use std::fmt;

/// Immutable planar point with integer coordinates.
///
/// The total order is by `y`, then `x`. It is written out by hand so the
/// comparison never silently follows field declaration order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

impl Point {
    #[inline]
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Slope of the line from `self` to `other`.
    ///
    /// - same point: [`Slope::Degenerate`]
    /// - vertical line: [`Slope::Vertical`]
    /// - horizontal line: `Slope::Finite(0.0)`, positive zero exactly
    /// - otherwise `Slope::Finite(dy / dx)`, with the differences widened
    ///   to `i64` first so they cannot overflow for any `i32` coordinates.
    ///
    /// Equal rationals land on the same `f64`: IEEE division rounds the
    /// exact quotient, so e.g. 1/3 and 2/6 compare equal bit for bit.
    pub fn slope_to(self, other: Point) -> Slope {
        if self == other {
            Slope::Degenerate
        } else if self.x == other.x {
            Slope::Vertical
        } else if self.y == other.y {
            Slope::Finite(0.0)
        } else {
            let dy = i64::from(other.y) - i64::from(self.y);
            let dx = i64::from(other.x) - i64::from(self.x);
            Slope::Finite(dy as f64 / dx as f64)
        }
    }

    /// Comparator ordering two points by their slope to `self`.
    ///
    /// Points with equal slope compare equal; a stable sort therefore keeps
    /// equal-slope runs in their pre-sort order, which `detect::fast` relies
    /// on to read off group extremes.
    pub fn slope_order(self) -> impl Fn(&Point, &Point) -> Ordering {
        move |a, b| self.slope_to(*a).cmp(&self.slope_to(*b))
    }
}

impl Ord for Point {
    fn cmp(&self, other: &Self) -> Ordering {
        self.y.cmp(&other.y).then_with(|| self.x.cmp(&other.x))
    }
}

impl PartialOrd for Point {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// Slope of a line through two points, with explicit sentinels.
///
/// Total order: `Degenerate < Finite(_) < Vertical`, finite values by IEEE
/// comparison. `Finite` never holds NaN (both differences are nonzero when
/// it is constructed) and never holds `-0.0` (horizontal lines normalize to
/// positive zero), so `Eq` and `Ord` are sound.
#[derive(Clone, Copy, Debug)]
pub enum Slope {
    /// Slope of a point to itself. Sorts below every real slope.
    Degenerate,
    /// Ordinary finite slope; `0.0` for horizontal lines.
    Finite(f64),
    /// Vertical line. Sorts above every finite slope.
    Vertical,
}

impl Ord for Slope {
    fn cmp(&self, other: &Self) -> Ordering {
        use Slope::*;
        match (self, other) {
            (Degenerate, Degenerate) => Ordering::Equal,
            (Degenerate, _) => Ordering::Less,
            (_, Degenerate) => Ordering::Greater,
            (Vertical, Vertical) => Ordering::Equal,
            (Vertical, _) => Ordering::Greater,
            (_, Vertical) => Ordering::Less,
            (Finite(a), Finite(b)) => a.partial_cmp(b).unwrap_or(Ordering::Equal),
        }
    }
}

impl PartialOrd for Slope {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl PartialEq for Slope {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for Slope {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn total_order_is_y_then_x() {
        let a = Point::new(5, 1);
        let b = Point::new(0, 2);
        let c = Point::new(1, 2);
        assert!(a < b);
        assert!(b < c);
        assert_eq!(Point::new(3, 3).cmp(&Point::new(3, 3)), Ordering::Equal);
    }

    #[test]
    fn slope_sentinels() {
        let o = Point::new(2, 3);
        assert_eq!(o.slope_to(Point::new(2, 9)), Slope::Vertical);
        assert_eq!(o.slope_to(o), Slope::Degenerate);
        assert_eq!(o.slope_to(Point::new(7, 3)), Slope::Finite(0.0));
    }

    #[test]
    fn horizontal_slope_is_positive_zero() {
        let o = Point::new(2, 3);
        // Leftward horizontal neighbor would give -0.0 under naive division.
        match o.slope_to(Point::new(-4, 3)) {
            Slope::Finite(v) => assert!(v == 0.0 && v.is_sign_positive()),
            s => panic!("expected finite zero, got {s:?}"),
        }
    }

    #[test]
    fn slope_equality_is_exact_for_equal_rationals() {
        let o = Point::new(0, 0);
        assert_eq!(o.slope_to(Point::new(3, 1)), o.slope_to(Point::new(6, 2)));
        assert_ne!(o.slope_to(Point::new(3, 1)), o.slope_to(Point::new(7, 2)));
    }

    #[test]
    fn slope_differences_do_not_overflow() {
        let o = Point::new(i32::MIN, i32::MIN);
        match o.slope_to(Point::new(i32::MAX, i32::MAX)) {
            Slope::Finite(v) => assert_eq!(v, 1.0),
            s => panic!("expected slope 1, got {s:?}"),
        }
    }

    #[test]
    fn slope_order_puts_sentinels_at_the_ends() {
        let o = Point::new(0, 0);
        let degenerate = o.slope_to(o);
        let negative = o.slope_to(Point::new(2, -3));
        let horizontal = o.slope_to(Point::new(5, 0));
        let gentle = o.slope_to(Point::new(4, 1));
        let steep = o.slope_to(Point::new(1, 4));
        let vertical = o.slope_to(Point::new(0, 7));
        assert!(degenerate < negative);
        assert!(negative < horizontal);
        assert!(horizontal < gentle);
        assert!(gentle < steep);
        assert!(steep < vertical);
    }

    #[test]
    fn comparator_groups_equal_slopes() {
        let o = Point::new(1, 1);
        let cmp = o.slope_order();
        let a = Point::new(3, 3);
        let b = Point::new(5, 5);
        let c = Point::new(4, 1);
        assert_eq!(cmp(&a, &b), Ordering::Equal);
        assert_eq!(cmp(&c, &a), Ordering::Less);
    }

    #[test]
    fn display_matches_coordinate_tuple() {
        assert_eq!(Point::new(-3, 12).to_string(), "(-3, 12)");
    }
}
