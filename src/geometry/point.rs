//! Two-dimensional point values

use std::fmt;
use serde::{Serialize, Deserialize};

/// Immutable 2D coordinate
///
/// Equality is exact on both coordinates, with no epsilon tolerance.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Point {
    x: f64,
    y: f64,
}

impl Point {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    pub fn x(&self) -> f64 {
        self.x
    }

    pub fn y(&self) -> f64 {
        self.y
    }

    pub fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }

    /// Component-wise arithmetic mean, or `None` for an empty input
    ///
    /// Finite inputs always give a finite mean, even when the plain sum
    /// would overflow.
    pub fn mean<'a, I>(points: I) -> Option<Self>
    where
        I: IntoIterator<Item = &'a Point>,
        I::IntoIter: Clone,
    {
        let points = points.into_iter();
        let mut count = 0usize;
        let (mut sum_x, mut sum_y) = (0.0, 0.0);

        for point in points.clone() {
            sum_x += point.x;
            sum_y += point.y;
            count += 1;
        }

        if count == 0 {
            return None;
        }

        let n = count as f64;
        let mean = Self::new(sum_x / n, sum_y / n);
        if mean.is_finite() {
            return Some(mean);
        }

        // Sum overflowed: add pre-divided terms, each bounded by MAX / n
        let (mut mean_x, mut mean_y) = (0.0, 0.0);
        for point in points {
            mean_x += point.x / n;
            mean_y += point.y / n;
        }
        Some(Self::new(mean_x, mean_y))
    }
}

impl From<(f64, f64)> for Point {
    fn from((x, y): (f64, f64)) -> Self {
        Self::new(x, y)
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn equality_is_exact() {
        assert_eq!(Point::new(1.0, 2.0), Point::from((1.0, 2.0)));
        assert_ne!(Point::new(1.0, 2.0), Point::new(1.0, 2.0 + 1e-12));
    }

    #[test]
    fn mean_of_points() {
        let points = [Point::new(0.0, 0.0), Point::new(2.0, 0.0), Point::new(1.0, 3.0)];
        assert_eq!(Point::mean(&points), Some(Point::new(1.0, 1.0)));
        assert_eq!(Point::mean(&[] as &[Point]), None);
    }

    #[test]
    fn mean_near_f64_max_stays_finite() {
        let points = [
            Point::new(1e308, 0.0),
            Point::new(1e308, 1.0),
            Point::new(-1e308, 0.0),
        ];
        let mean = Point::mean(&points).unwrap();

        assert!(mean.is_finite());
        assert!((mean.x() - 1e308 / 3.0).abs() <= 1e293);
        assert!((mean.y() - 1.0 / 3.0).abs() < 1e-12);

        let huge = [Point::new(f64::MAX, f64::MAX), Point::new(f64::MAX, f64::MAX)];
        assert!(Point::mean(&huge).unwrap().is_finite());
    }

    #[test]
    fn finiteness() {
        assert!(Point::new(1.0, -1.0).is_finite());
        assert!(!Point::new(f64::NAN, 0.0).is_finite());
        assert!(!Point::new(0.0, f64::NEG_INFINITY).is_finite());
    }

    #[test]
    fn display_format() {
        assert_eq!(Point::new(1.5, -2.0).to_string(), "(1.5, -2)");
    }
}
