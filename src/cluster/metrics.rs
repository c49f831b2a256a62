//! Cluster statistics and metrics

use crate::cluster::{Cluster, ClusteringResult};
use crate::geometry::{DistanceMetric, Point};
use serde::Serialize;

/// Spread statistics for a single cluster
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ClusterSummary {
    pub id: usize,

    /// Number of member points
    pub size: usize,

    pub centroid: Point,

    /// Sum of squared member-to-centroid distances
    pub inertia: f64,

    /// Average member-to-centroid distance (0 for an empty cluster)
    pub mean_distance: f64,

    /// Largest member-to-centroid distance (0 for an empty cluster)
    pub max_distance: f64,
}

/// Calculate the statistics of one cluster under `metric`
pub fn summarize_cluster<M: DistanceMetric>(cluster: &Cluster<'_>, metric: &M) -> ClusterSummary {
    let centroid = cluster.centroid();
    let mut inertia = 0.0;
    let mut total = 0.0;
    let mut max_distance: f64 = 0.0;

    for &member in cluster.members() {
        let distance = metric.calculate(&centroid, member);
        inertia += distance * distance;
        total += distance;
        max_distance = max_distance.max(distance);
    }

    let size = cluster.len();
    let mean_distance = if size == 0 { 0.0 } else { total / size as f64 };

    ClusterSummary {
        id: cluster.id,
        size,
        centroid,
        inertia,
        mean_distance,
        max_distance,
    }
}

/// Summaries for every cluster of a result, in cluster order
pub fn summarize<M: DistanceMetric>(result: &ClusteringResult<'_>, metric: &M) -> Vec<ClusterSummary> {
    result.clusters()
        .iter()
        .map(|cluster| summarize_cluster(cluster, metric))
        .collect()
}

/// Within-cluster sum of squares across all clusters
pub fn total_inertia(summaries: &[ClusterSummary]) -> f64 {
    summaries.iter().map(|s| s.inertia).sum()
}
