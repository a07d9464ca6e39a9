//! Snapshot builder: reads the world and produces a serializable `SimSnapshot`.

use glam::Vec3;
use hecs::World;
use serde::{Deserialize, Serialize};

use crate::components::{AimSolution, Airborne, Position, ShooterInfo, TargetInfo, Velocity};

/// Everything a frontend or log needs about one tick.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SimSnapshot {
    pub tick: u64,
    pub elapsed_secs: f32,
    pub shooters: Vec<ShooterView>,
    pub targets: Vec<TargetView>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ShooterView {
    pub id: u32,
    pub position: Vec3,
    pub aim: Option<AimView>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AimView {
    pub target_id: u32,
    pub aim_point: Vec3,
    pub pitch: f32,
    pub yaw: f32,
    pub intercept_time: f32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TargetView {
    pub id: u32,
    pub position: Vec3,
    pub velocity: Vec3,
    pub airborne: bool,
}

/// Build a snapshot from the current world. Lists are sorted by id.
pub fn build_snapshot(world: &World, tick: u64, elapsed_secs: f32) -> SimSnapshot {
    let mut shooters: Vec<ShooterView> = world
        .query::<(&ShooterInfo, &Position, Option<&AimSolution>)>()
        .iter()
        .map(|(_e, (info, pos, aim))| ShooterView {
            id: info.id,
            position: pos.0,
            aim: aim.map(|a| AimView {
                target_id: a.target_id,
                aim_point: a.solution.aim_point,
                pitch: a.solution.pitch,
                yaw: a.solution.yaw,
                intercept_time: a.solution.intercept_time,
            }),
        })
        .collect();
    shooters.sort_by_key(|s| s.id);

    let mut targets: Vec<TargetView> = world
        .query::<(&TargetInfo, &Position, &Velocity, Option<&Airborne>)>()
        .iter()
        .map(|(_e, (info, pos, vel, airborne))| TargetView {
            id: info.id,
            position: pos.0,
            velocity: vel.0,
            airborne: airborne.is_some(),
        })
        .collect();
    targets.sort_by_key(|t| t.id);

    SimSnapshot {
        tick,
        elapsed_secs,
        shooters,
        targets,
    }
}
