//! Evaluator configuration.

use serde::{Deserialize, Serialize};

use crate::clustering::ClusteringConfig;
use crate::error::{EvalError, Result};

/// Configuration owned by a [`PrecisionEvaluator`](crate::PrecisionEvaluator).
///
/// Groups the grid geometry, the assignment gate and the parameters handed
/// to the clustering adapter, so thresholds are tunable per instance rather
/// than fixed crate-wide.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EvaluatorConfig {
    /// Grid cell edge length in world units
    pub resolution: f32,
    /// World-frame edge length of the square grid
    pub grid_size: f32,
    /// Maximum centroid-to-vehicle distance for an assignment, in world units
    pub acceptance_radius: f32,
    /// Parameters for the clustering adapter
    pub clustering: ClusteringConfig,
}

impl Default for EvaluatorConfig {
    fn default() -> Self {
        Self {
            resolution: 0.2,
            grid_size: 50.0,
            acceptance_radius: 5.0,
            clustering: ClusteringConfig::default(),
        }
    }
}

impl EvaluatorConfig {
    /// Check configuration invariants.
    ///
    /// All lengths and thresholds must be positive and finite; the minimum
    /// neighborhood size must be at least one.
    pub fn validate(&self) -> Result<()> {
        if !(self.resolution > 0.0 && self.resolution.is_finite()) {
            return Err(EvalError::Config(format!(
                "resolution must be positive, got {}",
                self.resolution
            )));
        }
        if !(self.grid_size > 0.0 && self.grid_size.is_finite()) {
            return Err(EvalError::Config(format!(
                "grid_size must be positive, got {}",
                self.grid_size
            )));
        }
        if !(self.acceptance_radius > 0.0 && self.acceptance_radius.is_finite()) {
            return Err(EvalError::Config(format!(
                "acceptance_radius must be positive, got {}",
                self.acceptance_radius
            )));
        }
        if !(self.clustering.neighbor_distance > 0.0 && self.clustering.neighbor_distance.is_finite())
        {
            return Err(EvalError::Config(format!(
                "clustering.neighbor_distance must be positive, got {}",
                self.clustering.neighbor_distance
            )));
        }
        if self.clustering.min_neighbors == 0 {
            return Err(EvalError::Config(
                "clustering.min_neighbors must be at least 1".to_string(),
            ));
        }
        Ok(())
    }
}
