//! Curated surface for callers outside this crate (CLI, benches).
//!
//! Names here are chosen for use without further qualification; prefer them over
//! reaching into submodules.

pub use crate::order::{
    by_manhattan, by_x_then_y, by_y_then_x, ManhattanOrder, PointOrder, RadiusOrder, XyOrder,
    YxOrder,
};
pub use crate::point::{Point, ORIGIN};
pub use crate::sample::{
    draw_cloud, draw_point, Frame as SampleFrame, ReplayToken as SampleToken, SampleCfg,
};

/// Comparator chosen by name at runtime (e.g. from a CLI flag).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum OrderKind {
    Xy,
    Yx,
    Manhattan,
    Radius,
}

impl OrderKind {
    pub const ALL: [OrderKind; 4] = [
        OrderKind::Xy,
        OrderKind::Yx,
        OrderKind::Manhattan,
        OrderKind::Radius,
    ];

    pub fn name(self) -> &'static str {
        match self {
            OrderKind::Xy => "xy",
            OrderKind::Yx => "yx",
            OrderKind::Manhattan => "manhattan",
            OrderKind::Radius => "radius",
        }
    }

    /// Inverse of `name`.
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|k| k.name() == name)
    }

    /// Stable in-place sort with the named comparator.
    pub fn sort(self, points: &mut [Point]) {
        match self {
            OrderKind::Xy => XyOrder.sort(points),
            OrderKind::Yx => YxOrder.sort(points),
            OrderKind::Manhattan => ManhattanOrder.sort(points),
            OrderKind::Radius => RadiusOrder.sort(points),
        }
    }
}
