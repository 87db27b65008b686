//! The `Point` value and its canonicalizing constructor.
//!
//! Model
//! - Every construction supplies exactly one complete coordinate family
//!   (`Coords::Cartesian` or `Coords::Polar`); the other family is derived.
//! - Canonical polar form: `r >= 0`, `theta` in `[0, 2π)`, origin at `theta = 0`.
//! - The hash is derived from `(x, y)` once and cached.
//!
//! Code cross-refs: `ops` (arithmetic dispatch on `theta`/provenance), `cmp` (equality).

use crate::cfg::{HALF_TURN, TAU};

/// Point (or free vector) in the Euclidean plane.
///
/// Invariants:
/// - `r >= 0` and `theta ∈ [0, 2π)`.
/// - `x = r cos θ`, `y = r sin θ` up to rounding.
/// - `hash` depends on `(x, y)` only.
///
/// Fields are private; use `from_xy`, `from_polar`, `from_point`, or `ORIGIN`.
#[derive(Clone, Copy, Debug)]
pub struct Point {
    pub(super) x: f64,
    pub(super) y: f64,
    pub(super) r: f64,
    pub(super) theta: f64,
    pub(super) cartesian_centric: bool,
    pub(super) hash: u64,
}

/// Origin of the Cartesian frame. Field-for-field identical to `Point::from_xy(0.0, 0.0)`.
pub const ORIGIN: Point = Point {
    x: 0.0,
    y: 0.0,
    r: 0.0,
    theta: 0.0,
    cartesian_centric: true,
    hash: mix_pair(0, 0),
};

/// The authoritative coordinate family for one construction.
#[derive(Clone, Copy, Debug)]
enum Coords {
    Cartesian { x: f64, y: f64 },
    Polar { r: f64, theta: f64 },
}

impl Point {
    /// Point at Cartesian coordinates `(x, y)`.
    #[inline]
    pub fn from_xy(x: f64, y: f64) -> Self {
        Self::canonical(Coords::Cartesian { x, y })
    }

    /// Point at polar coordinates `(r, theta)`, `theta` counter-clockwise from +X.
    ///
    /// A negative radius denotes the opposite direction at distance `|r|`; a zero
    /// radius discards the angle.
    #[inline]
    pub fn from_polar(r: f64, theta: f64) -> Self {
        Self::canonical(Coords::Polar { r, theta })
    }

    /// Copy of `source`. All fields (hash and provenance included) are duplicated
    /// verbatim, nothing is recomputed.
    #[inline]
    pub fn from_point(source: &Point) -> Self {
        Self {
            x: source.x,
            y: source.y,
            r: source.r,
            theta: source.theta,
            cartesian_centric: source.cartesian_centric,
            hash: source.hash,
        }
    }

    fn canonical(coords: Coords) -> Self {
        match coords {
            Coords::Cartesian { x, y } => Self {
                x,
                y,
                r: x.hypot(y),
                theta: wrap_turn(y.atan2(x)),
                cartesian_centric: true,
                hash: hash_xy(x, y),
            },
            Coords::Polar { r, theta } => {
                // NaN radius fails both comparisons and collapses to the origin.
                let (r, theta) = if r > 0.0 {
                    (r, normalize(theta))
                } else if r < 0.0 {
                    (-r, reflect(theta))
                } else {
                    (0.0, 0.0)
                };
                let x = r * theta.cos();
                let y = r * theta.sin();
                Self {
                    x,
                    y,
                    r,
                    theta,
                    cartesian_centric: false,
                    hash: hash_xy(x, y),
                }
            }
        }
    }

    /// Abscissa.
    #[inline]
    pub fn x(&self) -> f64 {
        self.x
    }

    /// Ordinate.
    #[inline]
    pub fn y(&self) -> f64 {
        self.y
    }

    /// `[x, y]`.
    #[inline]
    pub fn coordinates(&self) -> [f64; 2] {
        [self.x, self.y]
    }

    /// Distance from the origin (never negative).
    #[inline]
    pub fn r(&self) -> f64 {
        self.r
    }

    /// Counter-clockwise angle from +X in `[0, 2π)`.
    ///
    /// Same as `atan2(y, x)` except negative angles are shifted up by `2π`.
    #[inline]
    pub fn theta(&self) -> f64 {
        self.theta
    }

    /// True if this value was built from Cartesian input (`from_xy`, or arithmetic
    /// that fell back to componentwise evaluation).
    #[inline]
    pub fn is_cartesian_centric(&self) -> bool {
        self.cartesian_centric
    }

    /// Cached hash of `(x, y)`. Stable across runs and platforms.
    #[inline]
    pub fn hash_code(&self) -> u64 {
        self.hash
    }

    /// Componentwise comparison with slack `eps` (inclusive).
    #[inline]
    pub fn approx_eq(&self, other: &Point, eps: f64) -> bool {
        (self.x - other.x).abs() <= eps && (self.y - other.y).abs() <= eps
    }
}

impl Default for Point {
    fn default() -> Self {
        ORIGIN
    }
}

/// Reduce `theta` into `[0, 2π)`.
#[inline]
pub(super) fn normalize(theta: f64) -> f64 {
    wrap_turn(theta % TAU)
}

/// Rotate a direction by a half turn, result in `[0, 2π)`.
///
/// Reduced once, so `reflect(t)` is bit-identical to `normalize(t + π)`.
#[inline]
pub(super) fn reflect(theta: f64) -> f64 {
    normalize(theta + HALF_TURN)
}

/// Map an angle in `(-2π, 2π)` onto `[0, 2π)`.
#[inline]
fn wrap_turn(theta: f64) -> f64 {
    let t = if theta < 0.0 { theta + TAU } else { theta };
    // -ε + 2π rounds to 2π; -0.0 folds onto 0.0.
    if t >= TAU || t == 0.0 {
        0.0
    } else {
        t
    }
}

#[inline]
fn hash_xy(x: f64, y: f64) -> u64 {
    mix_pair(hash_bits(x), hash_bits(y))
}

/// Bit pattern used for hashing: `-0.0` and every NaN payload share a pattern with
/// their `==`-peers (or, for NaN, with each other).
#[inline]
fn hash_bits(v: f64) -> u64 {
    if v.is_nan() {
        f64::NAN.to_bits()
    } else if v == 0.0 {
        0
    } else {
        v.to_bits()
    }
}

const fn mix_pair(a: u64, b: u64) -> u64 {
    mix(a ^ mix(b.wrapping_add(0x9e3779b97f4a7c15)))
}

// SplitMix64 finalizer.
const fn mix(mut x: u64) -> u64 {
    x ^= x >> 30;
    x = x.wrapping_mul(0xbf58476d1ce4e5b9);
    x ^= x >> 27;
    x = x.wrapping_mul(0x94d049bb133111eb);
    x ^ (x >> 31)
}
