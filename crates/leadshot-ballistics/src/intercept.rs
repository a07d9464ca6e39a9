//! Intercept search: the outer loop over candidate impact times.
//!
//! For each candidate time the target position is predicted, a launch pitch
//! is solved toward it, and the trajectory is flown to see whether the
//! projectile would get there by then. The first candidate that works wins.

use glam::Vec3;
use serde::{Deserialize, Serialize};
use tracing::debug;

use leadshot_core::angles::{length_2d, view_angles_to};
use leadshot_core::constants::MIN_HORIZONTAL_DISTANCE;
use leadshot_core::{PredictorConfig, Projectile, Target};

use crate::error::{InterceptError, InterceptResult};
use crate::launch::solve_launch_angle;
use crate::prediction::linear_prediction;
use crate::travel::simulate_travel_time;

/// Everything the search learned about an accepted intercept.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct InterceptSolution {
    /// Point to aim at, on the solved pitch's line of sight.
    pub aim_point: Vec3,
    /// Where the target is predicted to be at `intercept_time`.
    pub predicted_target: Vec3,
    /// Launch pitch in degrees.
    pub pitch: f32,
    /// Launch yaw in degrees.
    pub yaw: f32,
    /// Candidate time at which the solution was accepted.
    pub intercept_time: f32,
    /// Simulated flight time to the predicted position (≤ `intercept_time`).
    pub travel_time: f32,
}

/// Run the intercept search and return the full solution.
pub fn solve_intercept(
    target: &Target,
    projectile: &Projectile,
    config: &PredictorConfig,
) -> InterceptResult<InterceptSolution> {
    config.validate()?;

    for step in 0..=config.step_count() {
        let time = config.time_at(step);
        let predicted = linear_prediction(target, time, config.gravity);

        // An unreachable candidate ends the search.
        let Some(pitch) = solve_launch_angle(projectile, predicted, config.gravity) else {
            debug!(time, ?predicted, "target out of ballistic reach");
            return Err(InterceptError::Unreachable { time });
        };

        let travel_time = match simulate_travel_time(predicted, projectile, pitch, config) {
            Some(t) if t <= time => t,
            _ => continue,
        };

        let aim_point = aim_point_on_line_of_sight(projectile, predicted, pitch);
        let yaw = view_angles_to(projectile.origin, aim_point).yaw;

        debug!(
            time,
            travel_time,
            pitch,
            ?aim_point,
            "intercept solution accepted"
        );

        return Ok(InterceptSolution {
            aim_point,
            predicted_target: predicted,
            pitch,
            yaw,
            intercept_time: time,
            travel_time,
        });
    }

    debug!(
        horizon = config.max_travel_time,
        "no intercept within horizon"
    );
    Err(InterceptError::NoIntercept {
        horizon: config.max_travel_time,
    })
}

/// Aim point the shooter should target for an intercept, or why there is none.
pub fn predict_intercept_point(
    target: &Target,
    projectile: &Projectile,
    config: &PredictorConfig,
) -> InterceptResult<Vec3> {
    solve_intercept(target, projectile, config).map(|solution| solution.aim_point)
}

/// Lift `predicted` onto the line leaving the muzzle at `pitch` degrees.
///
/// Points directly above or below the muzzle are already on that line.
fn aim_point_on_line_of_sight(projectile: &Projectile, predicted: Vec3, pitch: f32) -> Vec3 {
    let distance_2d = length_2d(predicted - projectile.origin);
    if distance_2d < MIN_HORIZONTAL_DISTANCE {
        return predicted;
    }

    let height = distance_2d * pitch.to_radians().tan();
    Vec3::new(predicted.x, predicted.y, projectile.origin.z + height)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_aim_point_on_flat_line() {
        let p = Projectile::new(Vec3::new(0.0, 0.0, 5.0), 300.0, 1.0);
        let aim = aim_point_on_line_of_sight(&p, Vec3::new(30.0, 40.0, -7.0), 45.0);
        assert!((aim.x - 30.0).abs() < 1e-5);
        assert!((aim.y - 40.0).abs() < 1e-5);
        assert!((aim.z - 55.0).abs() < 1e-3, "5 + 50·tan45° = 55, got {}", aim.z);
    }

    #[test]
    fn test_aim_point_overhead_is_unchanged() {
        let p = Projectile::new(Vec3::ZERO, 300.0, 1.0);
        let predicted = Vec3::new(0.0, 0.0, 100.0);
        assert_eq!(aim_point_on_line_of_sight(&p, predicted, 90.0), predicted);
    }

    #[test]
    fn test_invalid_config_is_rejected_before_search() {
        let target = Target::stationary(Vec3::new(100.0, 0.0, 0.0));
        let p = Projectile::new(Vec3::ZERO, 300.0, 1.0);
        let config = PredictorConfig::new(9.81, 3.0, -0.01);
        let err = solve_intercept(&target, &p, &config).unwrap_err();
        assert!(matches!(err, InterceptError::InvalidConfig(_)));
    }
}
