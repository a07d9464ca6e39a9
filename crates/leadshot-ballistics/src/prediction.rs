//! Target motion prediction.

use glam::Vec3;
use leadshot_core::Target;

/// Where `target` will be after `time` seconds of straight-line motion.
///
/// Airborne targets additionally fall under `gravity`.
pub fn linear_prediction(target: &Target, time: f32, gravity: f32) -> Vec3 {
    let mut predicted = target.origin + target.velocity * time;
    if target.is_airborne {
        predicted.z -= 0.5 * gravity * time * time;
    }
    predicted
}
