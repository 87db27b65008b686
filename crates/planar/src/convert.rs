//! Conversions between `Point` and nalgebra vectors.
//!
//! Vectors are treated as Cartesian input, so a round trip through `Vec2` yields a
//! Cartesian-centric point even if the source was polar-built.

use nalgebra::Vector2;

use crate::point::Point;

impl Point {
    /// Same as `Point::from_xy(v.x, v.y)`.
    #[inline]
    pub fn from_vector(v: Vector2<f64>) -> Self {
        Point::from_xy(v.x, v.y)
    }

    #[inline]
    pub fn to_vector(&self) -> Vector2<f64> {
        Vector2::new(self.x(), self.y())
    }
}

impl From<Vector2<f64>> for Point {
    #[inline]
    fn from(v: Vector2<f64>) -> Self {
        Point::from_vector(v)
    }
}

impl From<Point> for Vector2<f64> {
    #[inline]
    fn from(p: Point) -> Self {
        p.to_vector()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use nalgebra::vector;

    #[test]
    fn vector_round_trip_is_cartesian() {
        let p = Point::from_polar(2.0, 1.0);
        let v: Vector2<f64> = p.into();
        assert_eq!(v.x, p.x());
        assert_eq!(v.y, p.y());
        let q = Point::from(v);
        assert!(q.is_cartesian_centric());
        assert!(!p.is_cartesian_centric());
        assert_eq!(q, p);
    }

    #[test]
    fn dot_agrees_with_nalgebra() {
        let a = Point::from_xy(1.5, -2.0);
        let b = Point::from_polar(3.0, 0.7);
        let expected = a.to_vector().dot(&b.to_vector());
        assert!((a.dot(b) - expected).abs() < 1e-12);
        let c = Point::from_vector(vector![3.0, 4.0]);
        assert_eq!(c.r(), 5.0);
    }
}
