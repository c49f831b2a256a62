//! Configuration management for the clusterer

use crate::error::ClusterError;
use serde::{Serialize, Deserialize};

/// What to do when a cluster ends an assignment pass with no members
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum EmptyClusterPolicy {
    /// Abort the run with `ClusterError::EmptyCluster`
    #[default]
    Fail,
    /// Keep the previous centroid and count the cluster as settled
    KeepCentroid,
}

/// Configuration for a k-means run
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// Number of clusters (k)
    pub number_of_clusters: usize,

    /// Maximum centroid movement for a cluster to count as settled
    pub convergence_threshold: f64,

    /// Optional cap on assignment passes; `None` iterates until convergence
    pub max_iterations: Option<usize>,

    /// Behaviour for clusters that receive no points
    pub empty_cluster_policy: EmptyClusterPolicy,

    /// Seed for centroid initialization; `None` seeds from entropy
    pub seed: Option<u64>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            number_of_clusters: 2,
            convergence_threshold: 0.2,
            max_iterations: None,
            empty_cluster_policy: EmptyClusterPolicy::Fail,
            seed: None,
        }
    }
}

impl Config {
    /// Create a new configuration for `number_of_clusters` clusters
    pub fn new(number_of_clusters: usize) -> Self {
        Self {
            number_of_clusters,
            ..Self::default()
        }
    }

    pub fn with_convergence_threshold(mut self, convergence_threshold: f64) -> Self {
        self.convergence_threshold = convergence_threshold;
        self
    }

    pub fn with_max_iterations(mut self, max_iterations: usize) -> Self {
        self.max_iterations = Some(max_iterations);
        self
    }

    pub fn with_empty_cluster_policy(mut self, policy: EmptyClusterPolicy) -> Self {
        self.empty_cluster_policy = policy;
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Check the settings that do not depend on the input points
    pub fn validate(&self) -> Result<(), ClusterError> {
        if self.number_of_clusters < 1 {
            return Err(ClusterError::invalid("number of clusters must be at least 1"));
        }

        if self.convergence_threshold.is_nan() || self.convergence_threshold < 0.0 {
            return Err(ClusterError::invalid(format!(
                "convergence threshold must be non-negative (got {})",
                self.convergence_threshold
            )));
        }

        if self.max_iterations == Some(0) {
            return Err(ClusterError::invalid("max iterations must be at least 1"));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_reference_settings() {
        let config = Config::default();
        assert_eq!(config.number_of_clusters, 2);
        assert_eq!(config.convergence_threshold, 0.2);
        assert_eq!(config.max_iterations, None);
        assert_eq!(config.empty_cluster_policy, EmptyClusterPolicy::Fail);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn rejects_zero_clusters() {
        let err = Config::new(0).validate().unwrap_err();
        assert!(matches!(err, ClusterError::InvalidConfiguration { .. }));
    }

    #[test]
    fn rejects_bad_threshold_and_cap() {
        assert!(Config::new(2).with_convergence_threshold(-0.1).validate().is_err());
        assert!(Config::new(2).with_convergence_threshold(f64::NAN).validate().is_err());
        assert!(Config::new(2).with_max_iterations(0).validate().is_err());
        assert!(Config::new(2).with_convergence_threshold(0.0).with_max_iterations(1).validate().is_ok());
    }
}
