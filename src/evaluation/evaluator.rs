//! Step orchestration and session reporting.

use std::fmt;

use crate::clustering::Clusterer;
use crate::config::EvaluatorConfig;
use crate::core::types::{GridSample, SimulationData};
use crate::error::{EvalError, Result};

use super::accumulator::SessionState;
use super::matching::{compute_error, match_vehicle, MatchOutcome};
use super::transform::GridToWorld;

/// Per-axis mean absolute errors over all matched detections.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MeanAbsoluteError {
    /// Mean absolute position error (x, y), world units
    pub position: [f32; 2],
    /// Mean absolute velocity error (x, y), world units
    pub velocity: [f32; 2],
}

/// End-of-run statistics for one evaluation session.
#[derive(Debug, Clone, PartialEq)]
pub struct EvaluationSummary {
    /// Mean absolute errors, or `None` when the session matched no
    /// detections at all (a mean over zero samples is undefined).
    pub mean_error: Option<MeanAbsoluteError>,
    /// Number of detections matched to a ground-truth vehicle
    pub matched_detections: usize,
    /// Number of detections with no vehicle within the acceptance radius
    pub unassigned_detections: usize,
    /// Vehicle count at step 0 times the number of steps; a reference
    /// upper bound only
    pub max_possible_detections: usize,
}

impl fmt::Display for EvaluationSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.mean_error {
            Some(mean) => {
                writeln!(f, "Mean absolute errors (x,y):")?;
                writeln!(f, "Position: {:.2} {:.2}", mean.position[0], mean.position[1])?;
                writeln!(f, "Velocity: {:.2} {:.2}", mean.velocity[0], mean.velocity[1])?;
            }
            None => {
                writeln!(f, "No matched detections")?;
            }
        }
        writeln!(
            f,
            "Detections unassigned by evaluator: {}",
            self.unassigned_detections
        )?;
        write!(
            f,
            "Maximum possible detections: {}",
            self.max_possible_detections
        )
    }
}

/// Scores detection accuracy against simulated ground truth.
///
/// Drives one evaluation session: an external loop feeds it the grid
/// samples of each simulation step in order, and the evaluator clusters
/// them, maps each cluster to a world-frame centroid, assigns the centroid
/// to the nearest acceptable vehicle and accumulates the per-axis absolute
/// errors. Single-threaded by design; the session state lives on the
/// calling thread and nothing here blocks or suspends.
///
/// # Example
///
/// ```ignore
/// use drishti_eval::{EvaluatorConfig, PrecisionEvaluator};
///
/// let mut evaluator = PrecisionEvaluator::new(config, sim_data, clusterer)?;
/// for (step, samples) in sample_stream.iter().enumerate() {
///     evaluator.evaluate_step(step, samples, false)?;
/// }
/// println!("{}", evaluator.summarize());
/// ```
pub struct PrecisionEvaluator<C> {
    config: EvaluatorConfig,
    sim_data: SimulationData,
    transform: GridToWorld,
    clusterer: C,
    state: SessionState,
}

impl<C: Clusterer> PrecisionEvaluator<C> {
    /// Create an evaluator for one simulation run.
    ///
    /// Fails with [`EvalError::Config`] if the configuration violates its
    /// invariants.
    pub fn new(config: EvaluatorConfig, sim_data: SimulationData, clusterer: C) -> Result<Self> {
        config.validate()?;
        let transform = GridToWorld::new(config.resolution, config.grid_size);
        Ok(Self {
            config,
            sim_data,
            transform,
            clusterer,
            state: SessionState::new(),
        })
    }

    /// Evaluate the detections of one simulation step.
    ///
    /// A step with no samples or no ground-truth vehicles is skipped
    /// without touching the session state; that is a documented
    /// short-circuit, not an error. Only a `step_index` beyond the dataset
    /// fails.
    ///
    /// When `verbose`, one diagnostic line is logged per matched cluster
    /// with a sequential id local to this call; diagnostics never affect
    /// the accumulated state.
    pub fn evaluate_step(
        &mut self,
        step_index: usize,
        samples: &[GridSample],
        verbose: bool,
    ) -> Result<()> {
        let steps = self.sim_data.len();
        let step = self
            .sim_data
            .step(step_index)
            .ok_or(EvalError::StepOutOfRange {
                index: step_index,
                steps,
            })?;

        if samples.is_empty() || step.vehicles.is_empty() {
            log::debug!(
                "Skipping step {}: {} samples, {} vehicles",
                step_index,
                samples.len(),
                step.vehicles.len()
            );
            return Ok(());
        }

        let clusters = self.clusterer.cluster(samples);
        log::debug!(
            "Step {}: {} clusters from {} samples",
            step_index,
            clusters.len(),
            samples.len()
        );

        for (cluster_id, cluster) in clusters.iter().enumerate() {
            let centroid = self.transform.cluster_centroid(cluster);
            match match_vehicle(&centroid, &step.vehicles, self.config.acceptance_radius) {
                MatchOutcome::Unassigned => {
                    self.state.record_unassigned();
                }
                MatchOutcome::Matched(vehicle_index) => {
                    let error = compute_error(&centroid, &step.vehicles[vehicle_index]);
                    self.state.accumulate(&error);
                    if verbose {
                        log::info!(
                            "Cluster ID={} Vel. Err.: {:.2} {:.2}, Pos. Err.: {:.2} {:.2}",
                            cluster_id,
                            error.v_x,
                            error.v_y,
                            error.x,
                            error.y
                        );
                    }
                }
            }
        }

        Ok(())
    }

    /// Compute the end-of-run statistics.
    ///
    /// A pure read of the session state; may be called any number of
    /// times. With zero matched detections the mean is undefined and the
    /// summary carries `mean_error: None` instead of a NaN.
    pub fn summarize(&self) -> EvaluationSummary {
        let matched = self.state.matched_detections();
        let mean_error = if matched > 0 {
            let sums = self.state.cumulative_error();
            let count = matched as f32;
            Some(MeanAbsoluteError {
                position: [sums.x / count, sums.y / count],
                velocity: [sums.v_x / count, sums.v_y / count],
            })
        } else {
            None
        };

        EvaluationSummary {
            mean_error,
            matched_detections: matched,
            unassigned_detections: self.state.unassigned_detections(),
            max_possible_detections: self.sim_data.max_possible_detections(),
        }
    }

    /// The accumulated session state.
    #[inline]
    pub fn session(&self) -> &SessionState {
        &self.state
    }

    /// The configuration this evaluator was built with.
    #[inline]
    pub fn config(&self) -> &EvaluatorConfig {
        &self.config
    }

    /// Clear the session state for a fresh run over the same dataset.
    pub fn reset(&mut self) {
        self.state.reset();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::types::{Cluster, SimulationStep, Vehicle};
    use approx::assert_relative_eq;

    /// Puts every sample into a single cluster.
    struct WholeInput;

    impl Clusterer for WholeInput {
        fn cluster(&self, samples: &[GridSample]) -> Vec<Cluster> {
            Cluster::from_samples(samples.to_vec()).into_iter().collect()
        }
    }

    fn one_vehicle_data(steps: usize, vehicle: Vehicle) -> SimulationData {
        SimulationData::new(vec![SimulationStep::new(vec![vehicle]); steps])
    }

    fn unit_grid_config() -> EvaluatorConfig {
        EvaluatorConfig {
            resolution: 1.0,
            grid_size: 100.0,
            ..EvaluatorConfig::default()
        }
    }

    #[test]
    fn test_matched_step_accumulates_error() {
        let data = one_vehicle_data(1, Vehicle::new([12.0, 90.0], [1.0, 0.0]));
        let mut evaluator =
            PrecisionEvaluator::new(unit_grid_config(), data, WholeInput).unwrap();

        // Centroid lands at (10, 90) with velocity (1, 0)
        let samples = [GridSample::new(10.0, 10.0, 1.0, 0.0)];
        evaluator.evaluate_step(0, &samples, true).unwrap();

        assert_eq!(evaluator.session().matched_detections(), 1);
        assert_eq!(evaluator.session().unassigned_detections(), 0);
        assert_relative_eq!(evaluator.session().cumulative_error().x, 2.0);

        let summary = evaluator.summarize();
        let mean = summary.mean_error.expect("should have matched");
        assert_relative_eq!(mean.position[0], 2.0);
        assert_relative_eq!(mean.position[1], 0.0);
        assert_relative_eq!(mean.velocity[0], 0.0);
        assert_relative_eq!(mean.velocity[1], 0.0);
    }

    #[test]
    fn test_unassigned_step() {
        let data = one_vehicle_data(1, Vehicle::new([50.0, 50.0], [0.0, 0.0]));
        let mut evaluator =
            PrecisionEvaluator::new(unit_grid_config(), data, WholeInput).unwrap();

        let samples = [GridSample::new(10.0, 10.0, 0.0, 0.0)];
        evaluator.evaluate_step(0, &samples, false).unwrap();

        assert_eq!(evaluator.session().matched_detections(), 0);
        assert_eq!(evaluator.session().unassigned_detections(), 1);
        assert_relative_eq!(evaluator.session().cumulative_error().x, 0.0);
    }

    #[test]
    fn test_empty_samples_short_circuit() {
        let data = one_vehicle_data(1, Vehicle::new([10.0, 90.0], [0.0, 0.0]));
        let mut evaluator =
            PrecisionEvaluator::new(unit_grid_config(), data, WholeInput).unwrap();

        evaluator.evaluate_step(0, &[], false).unwrap();

        assert_eq!(evaluator.session().matched_detections(), 0);
        assert_eq!(evaluator.session().unassigned_detections(), 0);
    }

    #[test]
    fn test_empty_vehicles_short_circuit() {
        let data = SimulationData::new(vec![SimulationStep::default()]);
        let mut evaluator =
            PrecisionEvaluator::new(unit_grid_config(), data, WholeInput).unwrap();

        let samples = [GridSample::new(10.0, 10.0, 0.0, 0.0)];
        evaluator.evaluate_step(0, &samples, false).unwrap();

        assert_eq!(evaluator.session().matched_detections(), 0);
        assert_eq!(evaluator.session().unassigned_detections(), 0);
    }

    #[test]
    fn test_step_out_of_range() {
        let data = one_vehicle_data(2, Vehicle::new([0.0, 0.0], [0.0, 0.0]));
        let mut evaluator =
            PrecisionEvaluator::new(unit_grid_config(), data, WholeInput).unwrap();

        let samples = [GridSample::new(10.0, 10.0, 0.0, 0.0)];
        let err = evaluator.evaluate_step(2, &samples, false).unwrap_err();
        assert!(matches!(
            err,
            EvalError::StepOutOfRange { index: 2, steps: 2 }
        ));
    }

    #[test]
    fn test_invalid_config_rejected() {
        let config = EvaluatorConfig {
            resolution: 0.0,
            ..EvaluatorConfig::default()
        };
        let data = SimulationData::default();
        assert!(PrecisionEvaluator::new(config, data, WholeInput).is_err());
    }

    #[test]
    fn test_zero_detection_summary() {
        let data = one_vehicle_data(3, Vehicle::new([50.0, 50.0], [0.0, 0.0]));
        let evaluator = PrecisionEvaluator::new(unit_grid_config(), data, WholeInput).unwrap();

        let summary = evaluator.summarize();
        assert!(summary.mean_error.is_none());
        assert_eq!(summary.matched_detections, 0);
        assert_eq!(summary.max_possible_detections, 3);

        let text = summary.to_string();
        assert!(text.contains("No matched detections"));
        assert!(!text.contains("NaN"));
    }

    #[test]
    fn test_summary_display_with_matches() {
        let data = one_vehicle_data(1, Vehicle::new([12.0, 90.0], [1.0, 0.0]));
        let mut evaluator =
            PrecisionEvaluator::new(unit_grid_config(), data, WholeInput).unwrap();

        let samples = [GridSample::new(10.0, 10.0, 1.0, 0.0)];
        evaluator.evaluate_step(0, &samples, false).unwrap();

        let text = evaluator.summarize().to_string();
        assert!(text.contains("Position: 2.00 0.00"));
        assert!(text.contains("Velocity: 0.00 0.00"));
        assert!(text.contains("Detections unassigned by evaluator: 0"));
        assert!(text.contains("Maximum possible detections: 1"));
    }

    #[test]
    fn test_reset_clears_session() {
        let data = one_vehicle_data(1, Vehicle::new([12.0, 90.0], [1.0, 0.0]));
        let mut evaluator =
            PrecisionEvaluator::new(unit_grid_config(), data, WholeInput).unwrap();

        let samples = [GridSample::new(10.0, 10.0, 1.0, 0.0)];
        evaluator.evaluate_step(0, &samples, false).unwrap();
        assert_eq!(evaluator.session().matched_detections(), 1);

        evaluator.reset();
        assert_eq!(evaluator.session().matched_detections(), 0);
        assert!(evaluator.summarize().mean_error.is_none());
    }
}
