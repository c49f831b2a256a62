//! Result rendering for the command line

use anyhow::Result;
use crate::cluster::ClusteringResult;
use crate::cluster::metrics::{summarize, total_inertia};
use crate::geometry::DistanceMetric;
use serde_json::{json, to_string_pretty};
use std::fmt::Write;

/// Plain-text listing of every cluster's centroid and members
pub fn render_text(result: &ClusteringResult<'_>) -> Result<String> {
    let mut out = String::new();

    if result.converged() {
        writeln!(out, "Converged in {} iterations", result.iterations())?;
    } else {
        writeln!(out, "Stopped after {} iterations without converging", result.iterations())?;
    }

    for cluster in result.clusters() {
        writeln!(out, "Cluster centroid: {}", cluster.centroid())?;
        writeln!(out, "----------------")?;
        for point in cluster.members() {
            writeln!(out, "{}, {}", point.x(), point.y())?;
        }
    }

    Ok(out)
}

/// Pretty-printed JSON with per-cluster statistics and members
pub fn render_json<M: DistanceMetric>(result: &ClusteringResult<'_>, metric: &M) -> Result<String> {
    let summaries = summarize(result, metric);

    let clusters = result.clusters()
        .iter()
        .zip(&summaries)
        .map(|(cluster, summary)| {
            json!({
                "id": summary.id,
                "size": summary.size,
                "centroid": summary.centroid,
                "inertia": summary.inertia,
                "mean_distance": summary.mean_distance,
                "max_distance": summary.max_distance,
                "members": cluster.members(),
            })
        })
        .collect::<Vec<_>>();

    let report = json!({
        "iterations": result.iterations(),
        "converged": result.converged(),
        "total_inertia": total_inertia(&summaries),
        "clusters": clusters,
    });

    Ok(to_string_pretty(&report)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cluster::Cluster;
    use crate::geometry::{Euclidean, Point};

    fn sample_result(points: &[Point]) -> ClusteringResult<'_> {
        let mut cluster = Cluster::new(0, Point::new(0.0, 0.0));
        for point in points {
            cluster.add_point(point);
        }
        cluster.recenter();
        ClusteringResult::new(vec![cluster], 3, true)
    }

    #[test]
    fn text_lists_centroids_and_members() {
        let points = [Point::new(1.0, 2.0), Point::new(3.0, 4.0)];
        let text = render_text(&sample_result(&points)).unwrap();

        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(
            lines,
            vec![
                "Converged in 3 iterations",
                "Cluster centroid: (2, 3)",
                "----------------",
                "1, 2",
                "3, 4",
            ]
        );
    }

    #[test]
    fn text_reports_unconverged_runs() {
        let points = [Point::new(1.0, 2.0)];
        let result = ClusteringResult::new(sample_result(&points).clusters().to_vec(), 5, false);
        let text = render_text(&result).unwrap();
        assert!(text.starts_with("Stopped after 5 iterations"));
    }

    #[test]
    fn json_carries_iterations_and_members() {
        let points = [Point::new(1.0, 2.0), Point::new(3.0, 2.0)];
        let rendered = render_json(&sample_result(&points), &Euclidean).unwrap();
        let value: serde_json::Value = serde_json::from_str(&rendered).unwrap();

        assert_eq!(value["iterations"], 3);
        assert_eq!(value["converged"], true);
        assert_eq!(value["clusters"][0]["size"], 2);
        assert_eq!(value["clusters"][0]["centroid"]["x"], 2.0);
        assert_eq!(value["clusters"][0]["members"][1]["x"], 3.0);
        assert_eq!(value["total_inertia"], 2.0);
    }
}
