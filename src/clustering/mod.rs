//! Clustering adapter contract.
//!
//! The density-based clusterer is an external collaborator consumed behind
//! the [`Clusterer`] trait. The crate defines the contract and the
//! configuration handed to adapters; it ships no clustering algorithm of its
//! own, so the matching and accumulation logic can be tested against stub
//! implementations.

use serde::{Deserialize, Serialize};

use crate::core::types::{Cluster, GridSample};

/// Parameters for the density-based clustering adapter.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ClusteringConfig {
    /// Maximum distance between neighboring samples, in grid units
    pub neighbor_distance: f32,
    /// Minimum neighborhood size for a sample to belong to a cluster
    pub min_neighbors: usize,
}

impl Default for ClusteringConfig {
    fn default() -> Self {
        Self {
            neighbor_distance: 3.0,
            min_neighbors: 5,
        }
    }
}

/// Groups grid samples into dense clusters.
///
/// # Contract
///
/// - Deterministic for a fixed input order.
/// - Every returned cluster is non-empty.
/// - Samples outside any sufficiently dense neighborhood are noise and are
///   omitted from the output entirely.
/// - Output order carries no meaning but must be stable across repeated
///   runs on identical input, so evaluation results are reproducible.
pub trait Clusterer {
    /// Cluster the samples of one simulation step.
    fn cluster(&self, samples: &[GridSample]) -> Vec<Cluster>;
}
