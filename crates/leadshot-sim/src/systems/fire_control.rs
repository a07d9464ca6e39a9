//! Fire control system: picks a target for every shooter and solves its aim point.
//!
//! Each tick the world is read into fresh `Target` / `Projectile` snapshots,
//! the solver runs against them, and the shooter's `AimSolution` component
//! is replaced (or removed when no intercept exists).

use hecs::{Entity, World};
use tracing::{debug, warn};

use leadshot_ballistics::ProjectilePredictor;
use leadshot_core::{Projectile, Target};

use crate::components::{AimSolution, Airborne, Position, ShooterInfo, TargetInfo, Velocity};

/// Run fire control for all shooters.
pub fn run(world: &mut World, predictor: &ProjectilePredictor) {
    let targets: Vec<(u32, Target)> = world
        .query::<(&TargetInfo, &Position, &Velocity, Option<&Airborne>)>()
        .iter()
        .map(|(_e, (info, pos, vel, airborne))| {
            (info.id, Target::new(pos.0, vel.0, airborne.is_some()))
        })
        .collect();

    let mut updates: Vec<(Entity, Option<AimSolution>)> = Vec::new();

    for (entity, (shooter, pos)) in world.query::<(&ShooterInfo, &Position)>().iter() {
        let projectile = Projectile::new(pos.0, shooter.launch_speed, shooter.gravity_multiplier);

        let Some((target_id, target)) = nearest_target(&targets, &projectile) else {
            updates.push((entity, None));
            continue;
        };

        match predictor.solve_intercept(&target, &projectile) {
            Ok(solution) => updates.push((
                entity,
                Some(AimSolution {
                    target_id,
                    solution,
                }),
            )),
            Err(e) if e.is_no_solution() => {
                debug!(shooter = shooter.id, target = target_id, reason = %e, "no firing solution");
                updates.push((entity, None));
            }
            Err(e) => {
                warn!(shooter = shooter.id, error = %e, "fire control failed");
                updates.push((entity, None));
            }
        }
    }

    for (entity, aim) in updates {
        match aim {
            Some(aim) => {
                if let Err(e) = world.insert_one(entity, aim) {
                    warn!(?entity, error = %e, "shooter vanished before aim update");
                }
            }
            None => {
                // Shooters without a current solution carry no component.
                if world.get::<&AimSolution>(entity).is_ok() {
                    if let Err(e) = world.remove_one::<AimSolution>(entity) {
                        warn!(?entity, error = %e, "failed to clear aim solution");
                    }
                }
            }
        }
    }
}

/// Closest target to the launcher. Ties go to the lowest id.
fn nearest_target(targets: &[(u32, Target)], projectile: &Projectile) -> Option<(u32, Target)> {
    targets
        .iter()
        .min_by(|(a_id, a), (b_id, b)| {
            let da = a.origin.distance_squared(projectile.origin);
            let db = b.origin.distance_squared(projectile.origin);
            da.total_cmp(&db).then(a_id.cmp(b_id))
        })
        .copied()
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::Vec3;
    use leadshot_core::PredictorConfig;

    #[test]
    fn test_nearest_target_prefers_closest_then_lowest_id() {
        let p = Projectile::new(Vec3::ZERO, 300.0, 1.0);
        let targets = vec![
            (3, Target::stationary(Vec3::new(50.0, 0.0, 0.0))),
            (1, Target::stationary(Vec3::new(0.0, 50.0, 0.0))),
            (2, Target::stationary(Vec3::new(500.0, 0.0, 0.0))),
        ];
        assert_eq!(nearest_target(&targets, &p).map(|(id, _)| id), Some(1));
        assert!(nearest_target(&[], &p).is_none());
    }

    #[test]
    fn test_aim_solution_added_and_removed() {
        let mut world = World::new();
        let predictor = ProjectilePredictor::new(PredictorConfig::default()).unwrap();

        let shooter = world.spawn((
            ShooterInfo {
                id: 0,
                launch_speed: 300.0,
                gravity_multiplier: 1.0,
            },
            Position(Vec3::ZERO),
        ));
        let target = world.spawn((
            TargetInfo { id: 1 },
            Position(Vec3::new(300.0, 0.0, 0.0)),
            Velocity(Vec3::ZERO),
        ));

        run(&mut world, &predictor);
        let aim = *world.get::<&AimSolution>(shooter).unwrap();
        assert_eq!(aim.target_id, 1);
        assert_eq!(aim.solution.aim_point.x, 300.0);

        // Move the target out of ballistic reach.
        world.get::<&mut Position>(target).unwrap().0 = Vec3::new(50_000.0, 0.0, 0.0);
        run(&mut world, &predictor);
        assert!(world.get::<&AimSolution>(shooter).is_err());
    }
}
