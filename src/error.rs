//! Error types for the clustering core

use thiserror::Error;

/// Failures that end a clustering run
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ClusterError {
    /// The configuration cannot produce a well-defined run for the given input
    #[error("invalid configuration: {reason}")]
    InvalidConfiguration { reason: String },

    /// A cluster received no points, so its mean is undefined
    #[error("cluster {cluster} has no members to recenter on (iteration {iteration})")]
    EmptyCluster { cluster: usize, iteration: usize },
}

impl ClusterError {
    pub(crate) fn invalid(reason: impl Into<String>) -> Self {
        Self::InvalidConfiguration {
            reason: reason.into(),
        }
    }
}
