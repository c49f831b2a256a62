//! Distance measures between points

use crate::geometry::Point;

/// Strategy computing the distance between two points
///
/// Implementations must be deterministic, symmetric, non-negative and
/// return zero exactly when both points are equal.
pub trait DistanceMetric {
    fn calculate(&self, a: &Point, b: &Point) -> f64;
}

impl<M: DistanceMetric + ?Sized> DistanceMetric for &M {
    fn calculate(&self, a: &Point, b: &Point) -> f64 {
        (**self).calculate(a, b)
    }
}

/// Standard L2 distance
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Euclidean;

impl DistanceMetric for Euclidean {
    fn calculate(&self, a: &Point, b: &Point) -> f64 {
        (a.x() - b.x()).hypot(a.y() - b.y())
    }
}
