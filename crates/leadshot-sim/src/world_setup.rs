//! World setup: spawns shooters and seeded random targets.

use std::f32::consts::TAU;

use glam::Vec3;
use hecs::World;
use rand::Rng;
use rand_chacha::ChaCha8Rng;

use crate::components::{Airborne, Position, ShooterInfo, TargetInfo, Velocity};

/// Closest spawn distance from the world origin.
pub const TARGET_SPAWN_MIN_RANGE: f32 = 200.0;

/// Farthest spawn distance from the world origin.
pub const TARGET_SPAWN_MAX_RANGE: f32 = 1_500.0;

/// Ground speed range for random targets (units/s).
pub const TARGET_SPEED_MIN: f32 = 5.0;
pub const TARGET_SPEED_MAX: f32 = 60.0;

/// Chance that a random target spawns airborne.
pub const AIRBORNE_CHANCE: f64 = 0.25;

/// Spawn altitude range for airborne targets.
pub const AIRBORNE_ALTITUDE_MIN: f32 = 100.0;
pub const AIRBORNE_ALTITUDE_MAX: f32 = 400.0;

pub fn spawn_shooter(
    world: &mut World,
    id: u32,
    origin: Vec3,
    launch_speed: f32,
    gravity_multiplier: f32,
) -> hecs::Entity {
    world.spawn((
        ShooterInfo {
            id,
            launch_speed,
            gravity_multiplier,
        },
        Position(origin),
    ))
}

pub fn spawn_target(
    world: &mut World,
    id: u32,
    origin: Vec3,
    velocity: Vec3,
    airborne: bool,
) -> hecs::Entity {
    let components = (TargetInfo { id }, Position(origin), Velocity(velocity));
    if airborne {
        world.spawn((components.0, components.1, components.2, Airborne))
    } else {
        world.spawn(components)
    }
}

/// Spawn `count` targets on a ring around the origin with random headings.
/// Ids are assigned from `first_id` upward.
pub fn spawn_random_targets(
    world: &mut World,
    rng: &mut ChaCha8Rng,
    first_id: u32,
    count: usize,
) -> Vec<hecs::Entity> {
    (0..count)
        .map(|i| {
            let bearing = rng.gen_range(0.0..TAU);
            let range = rng.gen_range(TARGET_SPAWN_MIN_RANGE..TARGET_SPAWN_MAX_RANGE);
            let heading = rng.gen_range(0.0..TAU);
            let speed = rng.gen_range(TARGET_SPEED_MIN..TARGET_SPEED_MAX);
            let airborne = rng.gen_bool(AIRBORNE_CHANCE);
            let altitude = if airborne {
                rng.gen_range(AIRBORNE_ALTITUDE_MIN..AIRBORNE_ALTITUDE_MAX)
            } else {
                0.0
            };

            let origin = Vec3::new(range * bearing.cos(), range * bearing.sin(), altitude);
            let velocity = Vec3::new(speed * heading.cos(), speed * heading.sin(), 0.0);
            spawn_target(world, first_id + i as u32, origin, velocity, airborne)
        })
        .collect()
}
