//! Lloyd's k-means clustering of 2D points

pub mod config;
pub mod error;
pub mod geometry;
pub mod cluster;
pub mod data;
pub mod report;

pub use anyhow::{Result, anyhow};
pub use cluster::{Cluster, ClusteringResult};
pub use cluster::kmeans::Clusterer;
pub use config::{Config, EmptyClusterPolicy};
pub use error::ClusterError;
pub use geometry::{DistanceMetric, Euclidean, Point};
