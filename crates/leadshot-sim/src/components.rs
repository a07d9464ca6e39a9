//! ECS components for the engagement world.

use glam::Vec3;
use leadshot_ballistics::InterceptSolution;
use serde::{Deserialize, Serialize};

/// World position.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Position(pub Vec3);

/// World velocity (units/s).
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Velocity(pub Vec3);

/// Marker: entity is in free fall.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Airborne;

/// Something that can be shot at.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TargetInfo {
    pub id: u32,
}

/// A stationary launcher and the projectile it fires.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ShooterInfo {
    pub id: u32,
    pub launch_speed: f32,
    pub gravity_multiplier: f32,
}

/// Current firing solution of a shooter. Absent when no intercept exists.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AimSolution {
    pub target_id: u32,
    pub solution: InterceptSolution,
}
