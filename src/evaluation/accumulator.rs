//! Session-wide error accumulation.

use crate::core::types::PointWithVelocity;

/// Running absolute-error sums and detection counters for one session.
///
/// The only long-lived mutable state of an evaluation run, owned exclusively
/// by the evaluator instance. [`accumulate`](SessionState::accumulate) and
/// [`record_unassigned`](SessionState::record_unassigned) are its only
/// mutators besides [`reset`](SessionState::reset); counters never decrease
/// within a run.
#[derive(Debug, Clone, Default)]
pub struct SessionState {
    /// Per-axis sums of absolute errors over all matched detections
    cumulative_error: PointWithVelocity,
    /// Number of detections matched to a ground-truth vehicle
    matched_detections: usize,
    /// Number of detections with no vehicle within the acceptance radius
    unassigned_detections: usize,
}

impl SessionState {
    /// Create empty state for a fresh session.
    pub fn new() -> Self {
        Self::default()
    }

    /// Fold one signed error vector into the running absolute sums and
    /// count the detection as matched.
    pub fn accumulate(&mut self, error: &PointWithVelocity) {
        self.cumulative_error.x += error.x.abs();
        self.cumulative_error.y += error.y.abs();
        self.cumulative_error.v_x += error.v_x.abs();
        self.cumulative_error.v_y += error.v_y.abs();
        self.matched_detections += 1;
    }

    /// Count a detection with no ground-truth vehicle in range.
    pub fn record_unassigned(&mut self) {
        self.unassigned_detections += 1;
    }

    /// Per-axis sums of absolute errors accumulated so far.
    #[inline]
    pub fn cumulative_error(&self) -> &PointWithVelocity {
        &self.cumulative_error
    }

    /// Number of matched detections so far.
    #[inline]
    pub fn matched_detections(&self) -> usize {
        self.matched_detections
    }

    /// Number of unassigned detections so far.
    #[inline]
    pub fn unassigned_detections(&self) -> usize {
        self.unassigned_detections
    }

    /// Clear all sums and counters for a fresh run.
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_accumulate_takes_absolute_values() {
        let mut state = SessionState::new();
        state.accumulate(&PointWithVelocity::new(-2.0, 0.0, 0.0, 0.0));

        assert_relative_eq!(state.cumulative_error().x, 2.0);
        assert_relative_eq!(state.cumulative_error().y, 0.0);
        assert_eq!(state.matched_detections(), 1);
        assert_eq!(state.unassigned_detections(), 0);
    }

    #[test]
    fn test_accumulate_sums() {
        let mut state = SessionState::new();
        state.accumulate(&PointWithVelocity::new(1.0, -2.0, 0.5, -0.5));
        state.accumulate(&PointWithVelocity::new(-1.0, 2.0, -0.5, 0.5));

        assert_relative_eq!(state.cumulative_error().x, 2.0);
        assert_relative_eq!(state.cumulative_error().y, 4.0);
        assert_relative_eq!(state.cumulative_error().v_x, 1.0);
        assert_relative_eq!(state.cumulative_error().v_y, 1.0);
        assert_eq!(state.matched_detections(), 2);
    }

    #[test]
    fn test_record_unassigned_touches_nothing_else() {
        let mut state = SessionState::new();
        state.record_unassigned();

        assert_eq!(state.unassigned_detections(), 1);
        assert_eq!(state.matched_detections(), 0);
        assert_relative_eq!(state.cumulative_error().x, 0.0);
    }

    #[test]
    fn test_reset() {
        let mut state = SessionState::new();
        state.accumulate(&PointWithVelocity::new(1.0, 1.0, 1.0, 1.0));
        state.record_unassigned();
        state.reset();

        assert_eq!(state.matched_detections(), 0);
        assert_eq!(state.unassigned_detections(), 0);
        assert_relative_eq!(state.cumulative_error().x, 0.0);
    }
}
