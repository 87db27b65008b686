//! Immutable 2D points with dual Cartesian/polar representation.
//!
//! - `point`: the `Point` value type, `ORIGIN`, arithmetic, equality and hashing.
//! - `order`: stateless comparators (X-then-Y, Y-then-X, Manhattan, radius).
//! - `convert`: interop with nalgebra `Vector2<f64>`.
//! - `sample`: seeded point clouds for tests, benches and the CLI.
//!
//! API Policy
//! - Construction goes through factories only; there is no way to build a `Point`
//!   whose Cartesian and polar fields disagree.

pub mod api;
mod cfg;
pub mod convert;
pub mod order;
pub mod point;
pub mod sample;

pub use cfg::DEFAULT_EPS;
pub use order::{
    ManhattanOrder, PointOrder, RadiusOrder, XyOrder, YxOrder, MANHATTAN_COMPARATOR,
    RADIUS_COMPARATOR, XY_COMPARATOR, YX_COMPARATOR,
};
pub use point::{Point, ORIGIN};

/// Library version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub use nalgebra::Vector2 as Vec2;

/// Common exports for quick imports in callers.
pub mod prelude {
    pub use crate::order::{
        by_manhattan, by_x_then_y, by_y_then_x, PointOrder, MANHATTAN_COMPARATOR,
        RADIUS_COMPARATOR, XY_COMPARATOR, YX_COMPARATOR,
    };
    pub use crate::point::{Point, ORIGIN};
    pub use crate::sample::{draw_cloud, draw_point, Frame, ReplayToken, SampleCfg};
    pub use nalgebra::Vector2 as Vec2;
}
