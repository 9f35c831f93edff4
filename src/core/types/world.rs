//! World-frame types: centroids, error vectors and simulated ground truth.

use serde::{Deserialize, Serialize};

/// A world-frame point with an associated velocity.
///
/// Doubles as a signed per-axis error vector when produced by the error
/// computation (centroid minus matched vehicle).
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct PointWithVelocity {
    /// World x position
    pub x: f32,
    /// World y position
    pub y: f32,
    /// Velocity along world x
    pub v_x: f32,
    /// Velocity along world y
    pub v_y: f32,
}

impl PointWithVelocity {
    /// Create a new point.
    #[inline]
    pub fn new(x: f32, y: f32, v_x: f32, v_y: f32) -> Self {
        Self { x, y, v_x, v_y }
    }

    /// Euclidean distance from this point's position to `pos`.
    #[inline]
    pub fn distance_to(&self, pos: &[f32; 2]) -> f32 {
        let dx = self.x - pos[0];
        let dy = self.y - pos[1];
        (dx * dx + dy * dy).sqrt()
    }
}

/// Ground-truth vehicle state at one simulation step.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Vehicle {
    /// World position (x, y)
    pub pos: [f32; 2],
    /// World velocity (x, y)
    pub vel: [f32; 2],
}

impl Vehicle {
    /// Create a new vehicle state.
    #[inline]
    pub fn new(pos: [f32; 2], vel: [f32; 2]) -> Self {
        Self { pos, vel }
    }
}

/// Ground-truth vehicle list for one simulation step.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SimulationStep {
    /// Vehicles present at this step
    pub vehicles: Vec<Vehicle>,
}

impl SimulationStep {
    /// Create a step from a vehicle list.
    pub fn new(vehicles: Vec<Vehicle>) -> Self {
        Self { vehicles }
    }
}

/// Ordered per-step ground truth for a whole simulation run.
///
/// Read-only for the lifetime of an evaluation session.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SimulationData {
    steps: Vec<SimulationStep>,
}

impl SimulationData {
    /// Create a dataset from an ordered step sequence.
    pub fn new(steps: Vec<SimulationStep>) -> Self {
        Self { steps }
    }

    /// Number of simulation steps.
    #[inline]
    pub fn len(&self) -> usize {
        self.steps.len()
    }

    /// Whether the dataset has no steps.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    /// Ground truth for one step, or `None` past the end of the run.
    #[inline]
    pub fn step(&self, index: usize) -> Option<&SimulationStep> {
        self.steps.get(index)
    }

    /// Theoretical upper bound on detections over the whole run:
    /// vehicle count at step 0 times the number of steps. A reference
    /// value only; steps may gain or lose vehicles.
    pub fn max_possible_detections(&self) -> usize {
        self.steps
            .first()
            .map(|step| step.vehicles.len() * self.steps.len())
            .unwrap_or(0)
    }
}
