//! Time-stepped projectile flight used to estimate travel time.

use glam::Vec3;
use leadshot_core::angles::view_angles_to;
use leadshot_core::{PredictorConfig, Projectile};

/// Seconds until `projectile`, launched at `pitch` degrees toward
/// `target_position`, makes its closest approach to that point.
///
/// Steps the trajectory at `config.time_step` and reports the last step
/// before the distance to the target starts growing again. Returns `None`
/// if the distance is still shrinking at the end of the horizon.
pub fn simulate_travel_time(
    target_position: Vec3,
    projectile: &Projectile,
    pitch: f32,
    config: &PredictorConfig,
) -> Option<f32> {
    let yaw = view_angles_to(projectile.origin, target_position).yaw;

    let mut prev_distance = projectile.origin.distance(target_position);
    let mut prev_time = 0.0;

    for time in config.times() {
        let position = projectile.predict_position(pitch, yaw, time, config.gravity);
        let distance = position.distance(target_position);

        if distance > prev_distance {
            return Some(prev_time);
        }

        prev_distance = distance;
        prev_time = time;
    }

    None
}
