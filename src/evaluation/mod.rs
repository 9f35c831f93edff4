//! Detection scoring pipeline.
//!
//! Per simulation step: clusters of grid samples become world-frame
//! centroids ([`GridToWorld`]), each centroid is assigned to the nearest
//! ground-truth vehicle within the acceptance radius ([`match_vehicle`]),
//! and the signed per-axis errors of matched pairs feed the session-wide
//! absolute-error sums ([`SessionState`]). [`PrecisionEvaluator`] wires the
//! stages together and produces the end-of-run [`EvaluationSummary`].

mod accumulator;
mod evaluator;
mod matching;
mod transform;

pub use accumulator::SessionState;
pub use evaluator::{EvaluationSummary, MeanAbsoluteError, PrecisionEvaluator};
pub use matching::{compute_error, match_vehicle, MatchOutcome};
pub use transform::GridToWorld;
