//! Input validation shared by both detectors.
//!
//! Purpose
//! - Check the detector preconditions once, eagerly, and hand the algorithms
//!   a [`PointSet`] they can trust: canonically sorted, strictly ascending,
//!   detached from the caller's buffer.
//!
//! Why a validated type instead of checks inside each detector
//! - Detection becomes total once a `PointSet` exists. The whole error
//!   surface is one `Result` at the boundary, and the caller's slice is
//!   never reordered behind their back.

use std::fmt;

use crate::point::Point;

/// Precondition violations, reported before any detection work begins.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ValidationError {
    /// The point sequence itself is absent.
    NullInput,
    /// One entry of the sequence is absent.
    NullPoint { index: usize },
    /// Two entries compare equal under the total order.
    DuplicatePoint { point: Point },
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NullInput => write!(f, "input point sequence is absent"),
            Self::NullPoint { index } => write!(f, "point at index {index} is absent"),
            Self::DuplicatePoint { point } => write!(f, "duplicate point {point}"),
        }
    }
}

impl std::error::Error for ValidationError {}

/// Validated batch of points, canonically sorted and strictly ascending.
///
/// Invariants:
/// - `points` is sorted by the total order (y, then x) with no equal
///   neighbors. Every detector may rely on both.
#[derive(Clone, Debug)]
pub struct PointSet {
    points: Vec<Point>,
}

impl PointSet {
    /// Validate a batch of points.
    ///
    /// Sorts a private copy, so the caller's slice keeps its order. Fails
    /// with [`ValidationError::DuplicatePoint`] naming one offending point.
    pub fn new(points: &[Point]) -> Result<Self, ValidationError> {
        let mut owned = points.to_vec();
        owned.sort_unstable();
        for w in owned.windows(2) {
            if w[0] == w[1] {
                return Err(ValidationError::DuplicatePoint { point: w[0] });
            }
        }
        Ok(Self { points: owned })
    }

    /// Validate a batch assembled from fallible sources, where the sequence
    /// as a whole or single entries may be absent.
    pub fn from_optional(points: Option<&[Option<Point>]>) -> Result<Self, ValidationError> {
        let seq = points.ok_or(ValidationError::NullInput)?;
        let mut owned = Vec::with_capacity(seq.len());
        for (index, p) in seq.iter().copied().enumerate() {
            owned.push(p.ok_or(ValidationError::NullPoint { index })?);
        }
        Self::new(&owned)
    }

    /// Points in canonical ascending order.
    #[inline]
    pub fn as_slice(&self) -> &[Point] {
        &self.points
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pts(raw: &[(i32, i32)]) -> Vec<Point> {
        raw.iter().map(|&(x, y)| Point::new(x, y)).collect()
    }

    #[test]
    fn accepts_empty_and_singleton() {
        assert!(PointSet::new(&[]).unwrap().is_empty());
        assert_eq!(PointSet::new(&pts(&[(1, 2)])).unwrap().len(), 1);
    }

    #[test]
    fn sorts_into_canonical_order() {
        let set = PointSet::new(&pts(&[(2, 1), (0, 3), (9, 0)])).unwrap();
        assert_eq!(set.as_slice(), pts(&[(9, 0), (2, 1), (0, 3)]).as_slice());
    }

    #[test]
    fn rejects_distant_duplicates() {
        let err = PointSet::new(&pts(&[(3, 3), (0, 1), (3, 3)])).unwrap_err();
        assert_eq!(
            err,
            ValidationError::DuplicatePoint { point: Point::new(3, 3) }
        );
    }

    #[test]
    fn caller_slice_keeps_its_order() {
        let original = pts(&[(5, 5), (0, 0)]);
        let set = PointSet::new(&original).unwrap();
        assert_eq!(original[0], Point::new(5, 5));
        assert_eq!(set.as_slice()[0], Point::new(0, 0));
    }

    #[test]
    fn absent_sequence_and_absent_entry_are_distinct_errors() {
        assert_eq!(
            PointSet::from_optional(None).unwrap_err(),
            ValidationError::NullInput
        );
        let seq = [Some(Point::new(0, 0)), None, Some(Point::new(1, 1))];
        assert_eq!(
            PointSet::from_optional(Some(&seq)).unwrap_err(),
            ValidationError::NullPoint { index: 1 }
        );
    }

    #[test]
    fn from_optional_still_applies_the_duplicate_check() {
        let seq = [Some(Point::new(4, 4)), Some(Point::new(4, 4))];
        assert_eq!(
            PointSet::from_optional(Some(&seq)).unwrap_err(),
            ValidationError::DuplicatePoint { point: Point::new(4, 4) }
        );
    }

    #[test]
    fn errors_render_a_readable_message() {
        let err = ValidationError::DuplicatePoint { point: Point::new(1, 2) };
        assert_eq!(err.to_string(), "duplicate point (1, 2)");
        assert_eq!(
            ValidationError::NullPoint { index: 7 }.to_string(),
            "point at index 7 is absent"
        );
    }
}
