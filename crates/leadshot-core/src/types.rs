//! Motion models: the target being engaged and the projectile fired at it.

use glam::Vec3;
use serde::{Deserialize, Serialize};

use crate::angles::{velocity_from_angles, ViewAngles};

/// Snapshot of a moving target. Rebuilt by the caller every evaluation.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Target {
    /// Current position.
    pub origin: Vec3,
    /// Current velocity (units/s).
    pub velocity: Vec3,
    /// Airborne targets are assumed to be in free fall on top of their velocity.
    pub is_airborne: bool,
}

/// Snapshot of the projectile about to be launched.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Projectile {
    /// Launch position.
    pub origin: Vec3,
    /// Muzzle speed (units/s), expected to be > 0.
    pub launch_speed: f32,
    /// Scale applied to world gravity for this projectile. 0 = flies straight.
    pub gravity_multiplier: f32,
}

impl Target {
    pub fn new(origin: Vec3, velocity: Vec3, is_airborne: bool) -> Self {
        Self {
            origin,
            velocity,
            is_airborne,
        }
    }

    /// A target that does not move.
    pub fn stationary(origin: Vec3) -> Self {
        Self::new(origin, Vec3::ZERO, false)
    }
}

impl Projectile {
    pub fn new(origin: Vec3, launch_speed: f32, gravity_multiplier: f32) -> Self {
        Self {
            origin,
            launch_speed,
            gravity_multiplier,
        }
    }

    /// Effective downward acceleration for this projectile under `gravity`.
    pub fn effective_gravity(&self, gravity: f32) -> f32 {
        gravity * self.gravity_multiplier
    }

    /// Position `time` seconds after launch at the given pitch/yaw (degrees).
    pub fn predict_position(&self, pitch: f32, yaw: f32, time: f32, gravity: f32) -> Vec3 {
        let velocity = velocity_from_angles(ViewAngles::new(pitch, yaw), self.launch_speed);
        let mut position = self.origin + velocity * time;
        position.z -= 0.5 * self.effective_gravity(gravity) * time * time;
        position
    }
}
