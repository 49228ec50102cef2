//! Graham-scan convex hulls for 2D point sets.
//!
//! Purpose
//! - Provide a small, deterministic convex-hull routine over screen-space
//!   point sets (y grows downward), plus a reproducible point-cloud
//!   sampler for tests, benches, and demos.
//!
//! Conventions
//! - Orientation tests use the screen convention: because the y-axis
//!   points down, the cross-product sign is inverted relative to the
//!   mathematical one, so a positive determinant means a clockwise turn.
//!   The sweep's pop condition depends on this mapping; keep both sides
//!   in sync.
//! - Coordinates are `f64`, but the orientation predicate compares the
//!   determinant exactly (no epsilon layer). This is reliable for
//!   integer-valued coordinates, which is the intended input domain.

pub mod point;
pub mod rand;
pub mod scan;

/// Library version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub use point::Point;
pub use scan::{convex_hull, GrahamScan, HullError, Orientation};

/// Common exports for quick imports in callers.
pub mod prelude {
    pub use crate::point::Point;
    pub use crate::rand::{draw_point_cloud, CloudCfg, ReplayToken};
    pub use crate::scan::{convex_hull, orientation, GrahamScan, HullError, Orientation};
}
