//! Lloyd's algorithm: assign, recenter, repeat until the centroids settle

use crate::cluster::{Cluster, ClusteringResult};
use crate::config::{Config, EmptyClusterPolicy};
use crate::error::ClusterError;
use crate::geometry::{DistanceMetric, Euclidean, Point};
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use log;

/// Partitions points into a fixed number of clusters
///
/// The distance measure is injected, so the loop itself never assumes
/// Euclidean geometry.
#[derive(Debug, Clone)]
pub struct Clusterer<M = Euclidean> {
    config: Config,
    metric: M,
}

impl Clusterer<Euclidean> {
    /// Clusterer with the default configuration for `k` clusters and L2 distance
    pub fn euclidean(k: usize) -> Self {
        Self::new(Config::new(k), Euclidean)
    }
}

impl<M: DistanceMetric> Clusterer<M> {
    pub fn new(config: Config, metric: M) -> Self {
        Self { config, metric }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn metric(&self) -> &M {
        &self.metric
    }

    /// Run k-means, seeding initialization from `Config::seed` when set
    pub fn run<'a>(&self, points: &'a [Point]) -> Result<ClusteringResult<'a>, ClusterError> {
        let mut rng = match self.config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        self.run_with_rng(points, &mut rng)
    }

    /// Run k-means drawing the initial centroids with `rng`
    pub fn run_with_rng<'a, R: Rng + ?Sized>(
        &self,
        points: &'a [Point],
        rng: &mut R,
    ) -> Result<ClusteringResult<'a>, ClusterError> {
        self.config.validate()?;
        check_input(points, self.config.number_of_clusters)?;

        let centroids = self.initial_centroids(points, rng)?;
        self.iterate(points, centroids)
    }

    /// Run k-means starting from explicit centroids instead of random ones
    ///
    /// The number of clusters is `centroids.len()`; `Config::number_of_clusters`
    /// is not consulted.
    pub fn run_with_centroids<'a>(
        &self,
        points: &'a [Point],
        centroids: &[Point],
    ) -> Result<ClusteringResult<'a>, ClusterError> {
        let config = Config {
            number_of_clusters: centroids.len(),
            ..self.config.clone()
        };
        config.validate()?;
        check_input(points, centroids.len())?;

        for (i, centroid) in centroids.iter().enumerate() {
            if !centroid.is_finite() {
                return Err(ClusterError::invalid(format!(
                    "initial centroid {} is not finite: {}",
                    i, centroid
                )));
            }
            if centroids[..i].contains(centroid) {
                return Err(ClusterError::invalid(format!(
                    "initial centroid {} duplicates an earlier centroid: {}",
                    i, centroid
                )));
            }
        }

        self.iterate(points, centroids.to_vec())
    }

    /// Index of the cluster whose centroid is closest to `point`
    ///
    /// Ties go to the lower index. Returns 0 for an empty slice.
    pub fn nearest(&self, point: &Point, clusters: &[Cluster<'_>]) -> usize {
        let mut best = 0;
        let mut best_distance = f64::INFINITY;

        for (i, cluster) in clusters.iter().enumerate() {
            let distance = self.metric.calculate(&cluster.centroid(), point);
            if distance < best_distance {
                best_distance = distance;
                best = i;
            }
        }

        best
    }

    /// Pick `k` value-distinct input points in random order
    fn initial_centroids<R: Rng + ?Sized>(
        &self,
        points: &[Point],
        rng: &mut R,
    ) -> Result<Vec<Point>, ClusterError> {
        let k = self.config.number_of_clusters;
        let mut order: Vec<usize> = (0..points.len()).collect();
        order.shuffle(rng);

        let mut centroids: Vec<Point> = Vec::with_capacity(k);
        for idx in order {
            let candidate = points[idx];
            if !centroids.contains(&candidate) {
                centroids.push(candidate);
                if centroids.len() == k {
                    return Ok(centroids);
                }
            }
        }

        Err(ClusterError::invalid(format!(
            "need {} distinct points for initial centroids, found {}",
            k,
            centroids.len()
        )))
    }

    fn iterate<'a>(
        &self,
        points: &'a [Point],
        centroids: Vec<Point>,
    ) -> Result<ClusteringResult<'a>, ClusterError> {
        log::info!(
            "Clustering {} points into {} clusters (threshold {})",
            points.len(),
            centroids.len(),
            self.config.convergence_threshold
        );

        let mut clusters: Vec<Cluster<'a>> = centroids
            .into_iter()
            .enumerate()
            .map(|(id, centroid)| Cluster::new(id, centroid))
            .collect();

        let mut iterations = 0;
        let converged = loop {
            iterations += 1;

            // Assignment
            for point in points {
                let target = self.nearest(point, &clusters);
                clusters[target].add_point(point);
            }

            // Recentering and convergence test
            let settled = self.recenter_all(&mut clusters, iterations)?;
            log::debug!(
                "Iteration {}: {}/{} clusters settled",
                iterations,
                settled,
                clusters.len()
            );

            if settled == clusters.len() {
                break true;
            }

            if self.config.max_iterations.map_or(false, |max| iterations >= max) {
                log::warn!(
                    "Stopping after {} iterations without convergence ({}/{} clusters settled)",
                    iterations,
                    settled,
                    clusters.len()
                );
                break false;
            }

            for cluster in clusters.iter_mut() {
                cluster.reset();
            }
        };

        if converged {
            log::info!("Converged in {} iterations", iterations);
        }

        Ok(ClusteringResult::new(clusters, iterations, converged))
    }

    /// Recenter every cluster and count those that moved at most the threshold
    fn recenter_all(
        &self,
        clusters: &mut [Cluster<'_>],
        iteration: usize,
    ) -> Result<usize, ClusterError> {
        let mut settled = 0;

        for cluster in clusters.iter_mut() {
            let previous = cluster.centroid();

            match cluster.recenter() {
                Some(current) => {
                    if self.metric.calculate(&previous, &current) <= self.config.convergence_threshold {
                        settled += 1;
                    }
                }
                None => match self.config.empty_cluster_policy {
                    EmptyClusterPolicy::Fail => {
                        return Err(ClusterError::EmptyCluster {
                            cluster: cluster.id,
                            iteration,
                        });
                    }
                    EmptyClusterPolicy::KeepCentroid => {
                        log::debug!("Cluster {} is empty, keeping centroid {}", cluster.id, previous);
                        settled += 1;
                    }
                },
            }
        }

        Ok(settled)
    }
}

/// Preconditions shared by every entry point, checked before any pass runs
fn check_input(points: &[Point], k: usize) -> Result<(), ClusterError> {
    if points.is_empty() {
        return Err(ClusterError::invalid("no input points"));
    }
    if k > points.len() {
        return Err(ClusterError::invalid(format!(
            "cannot form {} clusters from {} points",
            k,
            points.len()
        )));
    }
    if let Some((i, point)) = points.iter().enumerate().find(|(_, p)| !p.is_finite()) {
        return Err(ClusterError::invalid(format!(
            "input point {} is not finite: {}",
            i, point
        )));
    }
    Ok(())
}
