//! Stateless orderings on `Point`.
//!
//! Purpose
//! - Named comparators usable independently of the natural (radius) order:
//!   X-then-Y, Y-then-X, Manhattan magnitude, and radius.
//! - Each is a unit struct implementing `PointOrder`; free functions with the
//!   same behavior plug straight into `sort_by`.
//!
//! Float comparison
//! - `cmp_f64` is a total order: `-0.0 < 0.0`, and every NaN sits above `+inf`
//!   and compares equal to every other NaN.
//!
//! Only X-then-Y and Y-then-X are total on distinct points; Manhattan and radius
//! tie on points of equal magnitude.

use std::cmp::Ordering;

use crate::point::Point;

/// Two-argument ordering capability shared by the named comparators.
pub trait PointOrder {
    fn compare(&self, a: &Point, b: &Point) -> Ordering;

    /// Stable in-place sort under this ordering.
    fn sort(&self, points: &mut [Point]) {
        points.sort_by(|a, b| self.compare(a, b));
    }
}

/// Order on `x`, then `y`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct XyOrder;

/// Order on `y`, then `x`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct YxOrder;

/// Order on `|x| + |y|`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ManhattanOrder;

/// Order on distance from the origin (the natural order, `Point::compare_to`).
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct RadiusOrder;

pub const XY_COMPARATOR: XyOrder = XyOrder;
pub const YX_COMPARATOR: YxOrder = YxOrder;
pub const MANHATTAN_COMPARATOR: ManhattanOrder = ManhattanOrder;
pub const RADIUS_COMPARATOR: RadiusOrder = RadiusOrder;

impl PointOrder for XyOrder {
    #[inline]
    fn compare(&self, a: &Point, b: &Point) -> Ordering {
        by_x_then_y(a, b)
    }
}

impl PointOrder for YxOrder {
    #[inline]
    fn compare(&self, a: &Point, b: &Point) -> Ordering {
        by_y_then_x(a, b)
    }
}

impl PointOrder for ManhattanOrder {
    #[inline]
    fn compare(&self, a: &Point, b: &Point) -> Ordering {
        by_manhattan(a, b)
    }
}

impl PointOrder for RadiusOrder {
    #[inline]
    fn compare(&self, a: &Point, b: &Point) -> Ordering {
        a.compare_to(b)
    }
}

pub fn by_x_then_y(a: &Point, b: &Point) -> Ordering {
    cmp_f64(a.x(), b.x()).then_with(|| cmp_f64(a.y(), b.y()))
}

pub fn by_y_then_x(a: &Point, b: &Point) -> Ordering {
    cmp_f64(a.y(), b.y()).then_with(|| cmp_f64(a.x(), b.x()))
}

pub fn by_manhattan(a: &Point, b: &Point) -> Ordering {
    cmp_f64(a.x().abs() + a.y().abs(), b.x().abs() + b.y().abs())
}

/// Total order on `f64` with a single NaN class above `+inf`.
#[inline]
pub(crate) fn cmp_f64(a: f64, b: f64) -> Ordering {
    match (a.is_nan(), b.is_nan()) {
        (true, true) => Ordering::Equal,
        (true, false) => Ordering::Greater,
        (false, true) => Ordering::Less,
        (false, false) => a.total_cmp(&b),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn cmp_f64_zero_and_nan() {
        assert_eq!(cmp_f64(-0.0, 0.0), Ordering::Less);
        assert_eq!(cmp_f64(f64::NAN, f64::INFINITY), Ordering::Greater);
        assert_eq!(cmp_f64(-f64::NAN, f64::NAN), Ordering::Equal);
        assert_eq!(cmp_f64(-f64::NAN, f64::NEG_INFINITY), Ordering::Greater);
        assert_eq!(cmp_f64(1.0, 2.0), Ordering::Less);
    }

    #[test]
    fn xy_breaks_ties_on_y() {
        let a = Point::from_xy(1.0, 2.0);
        let b = Point::from_xy(1.0, -2.0);
        assert_eq!(XY_COMPARATOR.compare(&a, &b), Ordering::Greater);
        assert_eq!(YX_COMPARATOR.compare(&a, &b), Ordering::Greater);
        let c = Point::from_xy(0.0, 5.0);
        assert_eq!(by_x_then_y(&c, &a), Ordering::Less);
        assert_eq!(by_y_then_x(&c, &a), Ordering::Greater);
    }

    #[test]
    fn manhattan_ties_on_anti_diagonal() {
        let a = Point::from_xy(1.0, 2.0);
        let b = Point::from_xy(-2.0, 1.0);
        let c = Point::from_xy(0.0, -3.0);
        assert_eq!(MANHATTAN_COMPARATOR.compare(&a, &b), Ordering::Equal);
        assert_eq!(by_manhattan(&a, &c), Ordering::Equal);
        assert_ne!(a, b);
        let d = Point::from_xy(0.5, 0.5);
        assert_eq!(by_manhattan(&d, &a), Ordering::Less);
    }

    #[test]
    fn sort_with_each_order() {
        let mut pts = vec![
            Point::from_xy(2.0, 0.0),
            Point::from_xy(-1.0, 3.0),
            Point::from_xy(-1.0, -3.0),
            Point::from_xy(0.5, 0.0),
        ];
        XY_COMPARATOR.sort(&mut pts);
        let xs: Vec<[f64; 2]> = pts.iter().map(Point::coordinates).collect();
        assert_eq!(
            xs,
            vec![[-1.0, -3.0], [-1.0, 3.0], [0.5, 0.0], [2.0, 0.0]]
        );

        YX_COMPARATOR.sort(&mut pts);
        assert_eq!(pts[0].coordinates(), [-1.0, -3.0]);
        assert_eq!(pts[3].coordinates(), [-1.0, 3.0]);

        RADIUS_COMPARATOR.sort(&mut pts);
        assert_eq!(pts[0].coordinates(), [0.5, 0.0]);
        assert_eq!(pts[1].coordinates(), [2.0, 0.0]);
    }

    fn check_consistent<F>(pts: &[Point], cmp: F) -> Result<(), TestCaseError>
    where
        F: Fn(&Point, &Point) -> Ordering,
    {
        for a in pts {
            prop_assert_eq!(cmp(a, a), Ordering::Equal);
            for b in pts {
                prop_assert_eq!(cmp(a, b), cmp(b, a).reverse());
                for c in pts {
                    if cmp(a, b) != Ordering::Greater && cmp(b, c) != Ordering::Greater {
                        prop_assert_ne!(cmp(a, c), Ordering::Greater);
                    }
                }
            }
        }
        Ok(())
    }

    proptest! {
        #[test]
        fn prop_comparators_consistent(
            coords in prop::collection::vec((-50.0f64..50.0, -50.0f64..50.0), 1..12)
        ) {
            let pts: Vec<Point> = coords
                .iter()
                .map(|&(x, y)| Point::from_xy(x, y))
                .collect();
            check_consistent(&pts, by_x_then_y)?;
            check_consistent(&pts, by_y_then_x)?;
            check_consistent(&pts, by_manhattan)?;
            check_consistent(&pts, |a, b| a.compare_to(b))?;
            // X-then-Y and Y-then-X only tie on equal points.
            for a in &pts {
                for b in &pts {
                    if by_x_then_y(a, b) == Ordering::Equal {
                        prop_assert!(a == b);
                    }
                    if by_y_then_x(a, b) == Ordering::Equal {
                        prop_assert!(a == b);
                    }
                }
            }
        }

        #[test]
        fn prop_radius_ties_on_circle(r in 0.1f64..10.0, t1 in 0.0f64..3.0, t2 in 3.2f64..6.2) {
            let a = Point::from_polar(r, t1);
            let b = Point::from_polar(r, t2);
            prop_assert_eq!(RADIUS_COMPARATOR.compare(&a, &b), Ordering::Equal);
            prop_assert!(a != b);
        }
    }

    #[test]
    fn nan_points_sort_last() {
        let mut pts = vec![
            Point::from_xy(f64::NAN, 0.0),
            Point::from_xy(f64::INFINITY, 0.0),
            Point::from_xy(-1.0, 0.0),
        ];
        XY_COMPARATOR.sort(&mut pts);
        assert_eq!(pts[0].x(), -1.0);
        assert_eq!(pts[1].x(), f64::INFINITY);
        assert!(pts[2].x().is_nan());
    }
}
