//! Core data types for detection evaluation.
//!
//! Grid-space inputs:
//! - [`GridSample`]: one grid cell with a velocity estimate
//! - [`Cluster`]: non-empty dense group of samples
//!
//! World-frame values:
//! - [`PointWithVelocity`]: position + velocity quadruple (centroids, errors)
//! - [`Vehicle`]: simulated ground-truth object
//! - [`SimulationStep`] / [`SimulationData`]: per-step ground truth

mod grid;
mod world;

pub use grid::{Cluster, GridSample};
pub use world::{PointWithVelocity, SimulationData, SimulationStep, Vehicle};
