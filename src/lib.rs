//! DrishtiEval - detection precision scoring for dynamic occupancy grid
//! pipelines.
//!
//! Scores a moving-object detection pipeline by comparing clustered
//! detections, derived from per-cell velocity estimates on a spatial grid,
//! against simulated ground-truth vehicle trajectories, and accumulates
//! absolute position/velocity error statistics over a multi-step run.
//!
//! # Data flow per step
//!
//! ```text
//! grid samples ──► clustering adapter ──► clusters
//!                                            │
//!                                 grid→world centroid transform
//!                                            │
//!                                 nearest-vehicle matcher ──► unassigned counter
//!                                            │
//!                                   signed error vector
//!                                            │
//!                              session absolute-error accumulator
//! ```
//!
//! At run end the accumulated state is read out as an
//! [`EvaluationSummary`].
//!
//! The density-based clusterer is an external collaborator behind the
//! [`Clusterer`] trait; generation of the ground-truth dataset and the
//! estimation pipeline producing the grid samples are likewise out of
//! scope. The crate is single-threaded and does no I/O.

// ============================================================================
// Layer 1: Core foundation (no internal deps)
// ============================================================================
pub mod core;

// ============================================================================
// Layer 2: Contracts and configuration (depends on core)
// ============================================================================
pub mod clustering;
pub mod config;
pub mod error;

// ============================================================================
// Layer 3: Evaluation pipeline (depends on all lower layers)
// ============================================================================
pub mod evaluation;

// ============================================================================
// Convenience re-exports (flat namespace for common use)
// ============================================================================

// Core types
pub use crate::core::types::{Cluster, GridSample, PointWithVelocity};
pub use crate::core::types::{SimulationData, SimulationStep, Vehicle};

// Contracts and configuration
pub use clustering::{Clusterer, ClusteringConfig};
pub use config::EvaluatorConfig;
pub use error::{EvalError, Result};

// Evaluation pipeline
pub use evaluation::{
    compute_error, match_vehicle, EvaluationSummary, GridToWorld, MatchOutcome,
    MeanAbsoluteError, PrecisionEvaluator, SessionState,
};
