//! Cluster analysis module

pub mod kmeans;
pub mod metrics;

use crate::geometry::Point;
use serde::Serialize;

/// A centroid together with the points assigned to it in the current pass
///
/// Members borrow from the caller's input; the cluster owns only its centroid.
#[derive(Debug, Clone, Serialize)]
pub struct Cluster<'a> {
    /// Position of this cluster in centroid-list order
    pub id: usize,

    centroid: Point,

    members: Vec<&'a Point>,
}

impl<'a> Cluster<'a> {
    /// Create an empty cluster around `centroid`
    pub fn new(id: usize, centroid: Point) -> Self {
        Self {
            id,
            centroid,
            members: Vec::new(),
        }
    }

    pub fn centroid(&self) -> Point {
        self.centroid
    }

    pub fn members(&self) -> &[&'a Point] {
        &self.members
    }

    pub fn len(&self) -> usize {
        self.members.len()
    }

    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }

    pub fn add_point(&mut self, point: &'a Point) {
        self.members.push(point);
    }

    /// Drop all members; the centroid is left untouched
    pub fn reset(&mut self) {
        self.members.clear();
    }

    /// Move the centroid to the mean of the current members
    ///
    /// Returns `None` and leaves the centroid unchanged when there are no
    /// members, otherwise the new centroid.
    pub fn recenter(&mut self) -> Option<Point> {
        let centroid = Point::mean(self.members.iter().copied())?;
        self.centroid = centroid;
        Some(centroid)
    }
}

/// Final clusters of a run and the number of passes it took
#[derive(Debug, Clone, Serialize)]
pub struct ClusteringResult<'a> {
    clusters: Vec<Cluster<'a>>,
    iterations: usize,
    converged: bool,
}

impl<'a> ClusteringResult<'a> {
    pub fn new(clusters: Vec<Cluster<'a>>, iterations: usize, converged: bool) -> Self {
        Self {
            clusters,
            iterations,
            converged,
        }
    }

    pub fn clusters(&self) -> &[Cluster<'a>] {
        &self.clusters
    }

    /// Assignment passes executed, including the terminating one
    pub fn iterations(&self) -> usize {
        self.iterations
    }

    /// False only when the iteration cap stopped the run first
    pub fn converged(&self) -> bool {
        self.converged
    }

    pub fn centroids(&self) -> Vec<Point> {
        self.clusters.iter().map(Cluster::centroid).collect()
    }
}
