//! Nearest-vehicle assignment under an acceptance radius.

use crate::core::types::{PointWithVelocity, Vehicle};

/// Outcome of assigning a detection centroid to ground truth.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchOutcome {
    /// Index into the step's vehicle list of the nearest acceptable vehicle.
    Matched(usize),
    /// No vehicle within the acceptance radius. A normal outcome, not an
    /// error; the caller counts it and moves on.
    Unassigned,
}

/// Find the nearest vehicle strictly closer than `acceptance_radius` to the
/// centroid position.
///
/// Ties keep the earlier entry of the vehicle list, so the selection is
/// deterministic for a fixed list order. Matching is greedy per detection:
/// the same vehicle may be claimed by several clusters within one step;
/// there is no one-to-one constraint.
pub fn match_vehicle(
    centroid: &PointWithVelocity,
    vehicles: &[Vehicle],
    acceptance_radius: f32,
) -> MatchOutcome {
    let mut best: Option<(usize, f32)> = None;
    for (index, vehicle) in vehicles.iter().enumerate() {
        let distance = centroid.distance_to(&vehicle.pos);
        if distance >= acceptance_radius {
            continue;
        }
        // Strict less-than keeps the earliest entry on equal distance.
        match best {
            Some((_, best_distance)) if distance >= best_distance => {}
            _ => best = Some((index, distance)),
        }
    }

    match best {
        Some((index, _)) => MatchOutcome::Matched(index),
        None => MatchOutcome::Unassigned,
    }
}

/// Signed per-axis error, centroid minus matched vehicle.
#[inline]
pub fn compute_error(centroid: &PointWithVelocity, vehicle: &Vehicle) -> PointWithVelocity {
    PointWithVelocity {
        x: centroid.x - vehicle.pos[0],
        y: centroid.y - vehicle.pos[1],
        v_x: centroid.v_x - vehicle.vel[0],
        v_y: centroid.v_y - vehicle.vel[1],
    }
}
