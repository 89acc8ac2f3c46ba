//! Maximal collinear point groups in a finite planar set.
//!
//! Given N distinct integer points, find every line that passes through 4
//! or more of them and report each maximal group as one segment between its
//! extreme points. Two engines share one contract: [`detect::brute`] is the
//! O(N^4) baseline, [`detect::fast`] the O(N^2 log N) production path, and
//! [`validate::PointSet`] guards the preconditions both rely on.
//!
//! API Policy
//! - This crate is project-internal. There is no stable public API.

pub mod detect;
pub mod point;
pub mod sample;
pub mod segment;
pub mod validate;

/// Library version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub use point::{Point, Slope};
pub use segment::LineSegment;
pub use validate::{PointSet, ValidationError};

/// Common exports for quick imports in callers.
pub mod prelude {
    pub use crate::detect::{brute, fast};
    pub use crate::point::{Point, Slope};
    pub use crate::sample::{draw_planted, draw_scatter, PlantedCfg, ReplayToken, ScatterCfg};
    pub use crate::segment::LineSegment;
    pub use crate::validate::{PointSet, ValidationError};
}
