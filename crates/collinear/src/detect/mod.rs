//! Collinear-group detectors.
//!
//! Purpose
//! - Two engines over the same [`PointSet`](crate::validate::PointSet)
//!   contract: [`brute`] enumerates every 4-combination as a correctness
//!   baseline, [`fast`] sorts by slope around each origin and is the one
//!   worth running at size.
//!
//! Why two engines
//! - The brute form is simple enough to trust by inspection; the fast form
//!   earns its complexity budget. Their agreement (exact when no line holds
//!   more than 4 points, containment otherwise) is the crate's main
//!   testable property, exercised in `tests`.
//!
//! Code cross-refs: `point::Slope` (comparison semantics), `validate`
//! (preconditions), `sample` (inputs for the cross-checks).

pub mod brute;
pub mod fast;

/// Minimum number of collinear points that makes a group reportable.
pub(crate) const MIN_GROUP: usize = 4;
