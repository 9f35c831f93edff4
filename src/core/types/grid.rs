//! Grid-space sample types produced by the occupancy/velocity estimator.

use serde::{Deserialize, Serialize};

/// A single grid cell carrying a velocity estimate.
///
/// Positions are fractional grid indices with the origin at the top-left
/// corner and y growing downward. Velocities are in grid units and share
/// the grid axis convention.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GridSample {
    /// Grid x index
    pub x: f32,
    /// Grid y index
    pub y: f32,
    /// Estimated mean velocity along grid x
    pub mean_x_vel: f32,
    /// Estimated mean velocity along grid y
    pub mean_y_vel: f32,
}

impl GridSample {
    /// Create a new sample.
    #[inline]
    pub fn new(x: f32, y: f32, mean_x_vel: f32, mean_y_vel: f32) -> Self {
        Self {
            x,
            y,
            mean_x_vel,
            mean_y_vel,
        }
    }

    /// Euclidean distance to another sample in grid units.
    #[inline]
    pub fn distance(&self, other: &GridSample) -> f32 {
        let dx = self.x - other.x;
        let dy = self.y - other.y;
        (dx * dx + dy * dy).sqrt()
    }
}

/// A dense group of grid samples representing one detected object.
///
/// Clusters live for a single simulation step and are never empty;
/// [`Cluster::from_samples`] rejects an empty sample set.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Cluster {
    samples: Vec<GridSample>,
}

impl Cluster {
    /// Build a cluster, refusing an empty sample set.
    pub fn from_samples(samples: Vec<GridSample>) -> Option<Self> {
        if samples.is_empty() {
            None
        } else {
            Some(Self { samples })
        }
    }

    /// Samples in adapter output order.
    #[inline]
    pub fn samples(&self) -> &[GridSample] {
        &self.samples
    }

    /// Number of samples. Always at least one.
    #[inline]
    pub fn len(&self) -> usize {
        self.samples.len()
    }

    /// Always false; kept for slice-like ergonomics.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_sample_distance() {
        let a = GridSample::new(0.0, 0.0, 0.0, 0.0);
        let b = GridSample::new(3.0, 4.0, 1.0, -1.0);
        assert_relative_eq!(a.distance(&b), 5.0);
    }

    #[test]
    fn test_cluster_rejects_empty() {
        assert!(Cluster::from_samples(Vec::new()).is_none());
    }

    #[test]
    fn test_cluster_keeps_order() {
        let samples = vec![
            GridSample::new(1.0, 1.0, 0.0, 0.0),
            GridSample::new(2.0, 2.0, 0.0, 0.0),
        ];
        let cluster = Cluster::from_samples(samples.clone()).unwrap();
        assert_eq!(cluster.len(), 2);
        assert!(!cluster.is_empty());
        assert_eq!(cluster.samples(), samples.as_slice());
    }
}
