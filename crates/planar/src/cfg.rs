//! Fixed constants shared by the point type and its helpers (internal).
//!
//! Policy
//! - No runtime configuration. The value type is pure; everything it needs is a
//!   compile-time constant.

/// Full turn in radians; canonical angles live in `[0, TAU)`.
pub(crate) const TAU: f64 = std::f64::consts::TAU;
/// Half turn; rotating by this reflects a direction through the origin.
pub(crate) const HALF_TURN: f64 = std::f64::consts::PI;
/// Fractional digits used by `Display` for both coordinates.
pub(crate) const DISPLAY_PRECISION: usize = 15;
/// Default slack for `Point::approx_eq` when callers have no better bound.
pub const DEFAULT_EPS: f64 = 1e-9;
