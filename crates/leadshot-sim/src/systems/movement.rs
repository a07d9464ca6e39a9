//! Kinematic integration system.
//!
//! Updates Position from Velocity each tick: position += velocity * dt.
//! Airborne entities also accelerate downward under gravity.

use hecs::World;

use crate::components::{Airborne, Position, Velocity};

/// Run kinematic integration for all entities with Position + Velocity.
pub fn run(world: &mut World, dt: f32, gravity: f32) {
    for (_entity, (pos, vel, airborne)) in
        world.query_mut::<(&mut Position, &mut Velocity, Option<&Airborne>)>()
    {
        pos.0 += vel.0 * dt;
        if airborne.is_some() {
            // Semi-implicit: position uses this tick's velocity, gravity lands next tick.
            vel.0.z -= gravity * dt;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::Vec3;

    #[test]
    fn test_ground_entity_moves_linearly() {
        let mut world = World::new();
        let e = world.spawn((Position(Vec3::ZERO), Velocity(Vec3::new(10.0, 0.0, 0.0))));
        for _ in 0..10 {
            run(&mut world, 0.1, 9.81);
        }
        let pos = world.get::<&Position>(e).unwrap().0;
        assert!((pos.x - 10.0).abs() < 1e-4);
        assert_eq!(pos.z, 0.0);
    }

    #[test]
    fn test_airborne_entity_falls() {
        let mut world = World::new();
        let e = world.spawn((
            Position(Vec3::new(0.0, 0.0, 100.0)),
            Velocity(Vec3::ZERO),
            Airborne,
        ));
        for _ in 0..10 {
            run(&mut world, 0.1, 10.0);
        }
        let vel = world.get::<&Velocity>(e).unwrap().0;
        let pos = world.get::<&Position>(e).unwrap().0;
        assert!((vel.z + 10.0).abs() < 1e-4, "1s of free fall at g=10, got vz={}", vel.z);
        assert!(pos.z < 100.0 && pos.z > 94.0, "fell roughly 4.5 units, z={}", pos.z);
    }
}
