//! Point representation and distance measures

pub mod point;
pub mod distance;

pub use point::Point;
pub use distance::{DistanceMetric, Euclidean};
