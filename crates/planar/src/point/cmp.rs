//! Equality, hashing, natural order and formatting for `Point`.
//!
//! Equality is the Cartesian pair under IEEE `==`, for every provenance. The cached
//! hash is checked first; it cannot change the outcome because equal pairs always
//! share a hash. Consequences:
//! - A NaN coordinate makes a value unequal to every other instance, copies included
//!   (the same-reference short-circuit still holds).
//! - `Point` is `PartialEq` but not `Eq`, and has no `PartialOrd`: the natural order
//!   (`compare_to`, by radius) ties on unequal points.

use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};

use super::types::Point;
use crate::cfg::DISPLAY_PRECISION;
use crate::order::cmp_f64;

impl Point {
    /// Natural order: by distance from the origin, no tiebreak.
    #[inline]
    pub fn compare_to(&self, other: &Point) -> Ordering {
        cmp_f64(self.r, other.r)
    }
}

impl PartialEq for Point {
    fn eq(&self, other: &Point) -> bool {
        std::ptr::eq(self, other)
            || (self.hash == other.hash && self.x == other.x && self.y == other.y)
    }
}

impl Hash for Point {
    fn hash<H: Hasher>(&self, state: &mut H) {
        state.write_u64(self.hash);
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Point({:.prec$}, {:.prec$})",
            self.x,
            self.y,
            prec = DISPLAY_PRECISION
        )
    }
}
