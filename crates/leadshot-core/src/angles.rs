//! View-angle helpers layered on top of `glam::Vec3`.
//!
//! Coordinates are x/y horizontal, z up. Angles are in degrees:
//! pitch is elevation above the horizontal plane, yaw is measured
//! counter-clockwise from +x in the horizontal plane.

use glam::Vec3;
use serde::{Deserialize, Serialize};

/// Pitch/yaw pair in degrees.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct ViewAngles {
    pub pitch: f32,
    pub yaw: f32,
}

impl ViewAngles {
    pub fn new(pitch: f32, yaw: f32) -> Self {
        Self { pitch, yaw }
    }

    /// Unit direction vector for these angles.
    pub fn direction(&self) -> Vec3 {
        let (sp, cp) = self.pitch.to_radians().sin_cos();
        let (sy, cy) = self.yaw.to_radians().sin_cos();
        Vec3::new(cp * cy, cp * sy, sp)
    }
}

/// Length of `v` projected onto the horizontal (x/y) plane.
pub fn length_2d(v: Vec3) -> f32 {
    v.truncate().length()
}

/// Angles that point from `from` straight at `to`.
///
/// Coincident points yield zero angles.
pub fn view_angles_to(from: Vec3, to: Vec3) -> ViewAngles {
    let delta = to - from;
    let distance = delta.length();
    if distance <= f32::EPSILON {
        return ViewAngles::default();
    }

    let pitch = (delta.z / distance).clamp(-1.0, 1.0).asin().to_degrees();
    let yaw = delta.y.atan2(delta.x).to_degrees();
    ViewAngles { pitch, yaw }
}

/// Velocity vector of magnitude `speed` along `angles`.
pub fn velocity_from_angles(angles: ViewAngles, speed: f32) -> Vec3 {
    angles.direction() * speed
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_length_2d_ignores_altitude() {
        let v = Vec3::new(3.0, 4.0, 100.0);
        assert!((length_2d(v) - 5.0).abs() < 1e-6);
    }

    #[test]
    fn test_view_angles_level_east() {
        let a = view_angles_to(Vec3::ZERO, Vec3::new(10.0, 0.0, 0.0));
        assert!(a.pitch.abs() < 1e-5);
        assert!(a.yaw.abs() < 1e-5);
    }

    #[test]
    fn test_view_angles_elevated_north() {
        let a = view_angles_to(Vec3::ZERO, Vec3::new(0.0, 10.0, 10.0));
        assert!((a.pitch - 45.0).abs() < 1e-4, "pitch was {}", a.pitch);
        assert!((a.yaw - 90.0).abs() < 1e-4, "yaw was {}", a.yaw);
    }

    #[test]
    fn test_view_angles_coincident_points() {
        let p = Vec3::new(1.0, 2.0, 3.0);
        assert_eq!(view_angles_to(p, p), ViewAngles::default());
    }

    #[test]
    fn test_velocity_from_angles_magnitude_and_direction() {
        let v = velocity_from_angles(ViewAngles::new(30.0, 180.0), 200.0);
        assert!((v.length() - 200.0).abs() < 1e-3);
        assert!(v.x < 0.0, "yaw 180 should point toward -x");
        assert!((v.z - 100.0).abs() < 1e-3, "sin(30°) * 200 = 100, got {}", v.z);
    }

    #[test]
    fn test_velocity_points_back_at_view_target() {
        let from = Vec3::new(-5.0, 2.0, 1.0);
        let to = Vec3::new(20.0, -7.0, 9.0);
        let dir = velocity_from_angles(view_angles_to(from, to), 1.0);
        let expected = (to - from).normalize();
        assert!((dir - expected).length() < 1e-5);
    }
}
