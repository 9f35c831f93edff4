//! Grid-to-world centroid transform.
//!
//! The occupancy grid indexes cells from the top-left corner with y growing
//! downward; world coordinates grow upward from the bottom-left corner.
//! Mapping a grid-frame value into the world frame therefore negates the
//! y velocity component and reflects the y position about the grid extent,
//! while x components pass through a pure resolution scaling.

use crate::core::types::{Cluster, PointWithVelocity};

/// Converts clusters of grid samples into world-frame centroids.
#[derive(Debug, Clone, Copy)]
pub struct GridToWorld {
    /// Grid cell edge length in world units
    resolution: f32,
    /// World-frame edge length of the square grid
    grid_size: f32,
}

impl GridToWorld {
    /// Create a transform for the given grid geometry.
    pub fn new(resolution: f32, grid_size: f32) -> Self {
        Self {
            resolution,
            grid_size,
        }
    }

    /// Mean position and velocity of a cluster, mapped into the world frame.
    ///
    /// Averages grid x, grid y and the velocity payload over all samples,
    /// scales by the resolution, then applies the y-axis correction:
    /// `y = grid_size - y_scaled`, `v_y = -v_y_scaled`.
    pub fn cluster_centroid(&self, cluster: &Cluster) -> PointWithVelocity {
        let mut sum = PointWithVelocity::default();
        for sample in cluster.samples() {
            sum.x += sample.x;
            sum.y += sample.y;
            sum.v_x += sample.mean_x_vel;
            sum.v_y += sample.mean_y_vel;
        }

        // Non-empty by construction, so the division is safe.
        let count = cluster.len() as f32;
        let x = (sum.x / count) * self.resolution;
        let y = (sum.y / count) * self.resolution;
        let v_x = (sum.v_x / count) * self.resolution;
        let v_y = (sum.v_y / count) * self.resolution;

        PointWithVelocity {
            x,
            y: self.grid_size - y,
            v_x,
            v_y: -v_y,
        }
    }
}
