//! Vector arithmetic on `Point`.
//!
//! Dispatch rules
//! - `add`/`subtract`: operands on the same ray (bit-equal `theta`) combine radii
//!   exactly in polar form; everything else goes componentwise.
//! - `multiply`: governed by provenance. Cartesian-built values scale `x, y`
//!   directly (a negative factor flips through the origin without trig); polar-built
//!   values scale `r` and reflect `theta` for negative factors.
//!
//! `Point` is `Copy`; every operation takes its operands by value.
//! Nothing here guards against non-finite results.

use std::ops::{Add, Div, Mul, Neg, Sub};

use super::types::{reflect, Point};

impl Point {
    /// Vector sum `self + other`.
    #[inline]
    pub fn add(self, other: Point) -> Point {
        if self.theta == other.theta {
            Point::from_polar(self.r + other.r, self.theta)
        } else {
            Point::from_xy(self.x + other.x, self.y + other.y)
        }
    }

    /// Vector difference `self - other`; approximately `self.add(other.multiply(-1.0))`.
    #[inline]
    pub fn subtract(self, other: Point) -> Point {
        if self.theta == other.theta {
            // A negative difference lands on the opposite ray via from_polar.
            Point::from_polar(self.r - other.r, self.theta)
        } else {
            Point::from_xy(self.x - other.x, self.y - other.y)
        }
    }

    /// Scalar product `scale * self`.
    pub fn multiply(self, scale: f64) -> Point {
        if self.cartesian_centric {
            Point::from_xy(self.x * scale, self.y * scale)
        } else if scale >= 0.0 {
            Point::from_polar(self.r * scale, self.theta)
        } else {
            Point::from_polar(-self.r * scale, reflect(self.theta))
        }
    }

    /// `self.multiply(1.0 / scale)`. Zero `scale` yields infinite/NaN components.
    #[inline]
    pub fn divide(self, scale: f64) -> Point {
        self.multiply(1.0 / scale)
    }

    /// Dot product `x1 x2 + y1 y2`.
    #[inline]
    pub fn dot(self, other: Point) -> f64 {
        self.x * other.x + self.y * other.y
    }
}

impl Add for Point {
    type Output = Point;
    #[inline]
    fn add(self, rhs: Point) -> Self::Output {
        Point::add(self, rhs)
    }
}

impl Sub for Point {
    type Output = Point;
    #[inline]
    fn sub(self, rhs: Point) -> Self::Output {
        self.subtract(rhs)
    }
}

impl Mul<f64> for Point {
    type Output = Point;
    #[inline]
    fn mul(self, rhs: f64) -> Self::Output {
        self.multiply(rhs)
    }
}

impl Mul<Point> for f64 {
    type Output = Point;
    #[inline]
    fn mul(self, rhs: Point) -> Self::Output {
        rhs.multiply(self)
    }
}

impl Div<f64> for Point {
    type Output = Point;
    #[inline]
    fn div(self, rhs: f64) -> Self::Output {
        self.divide(rhs)
    }
}

impl Neg for Point {
    type Output = Point;
    #[inline]
    fn neg(self) -> Self::Output {
        self.multiply(-1.0)
    }
}
