//! Simulation engine: drives the engagement world tick by tick.
//!
//! `SimulationEngine` owns the hecs ECS world, runs all systems, and produces
//! `SimSnapshot`s. Runs headless; the same seed replays the same engagement.

use glam::Vec3;
use hecs::World;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use leadshot_ballistics::ProjectilePredictor;
use leadshot_core::{ConfigResult, PredictorConfig};

use crate::systems;
use crate::systems::snapshot::SimSnapshot;
use crate::world_setup;

/// Simulation tick rate (Hz).
pub const TICK_RATE: u32 = 30;

/// Configuration for starting a new simulation.
#[derive(Debug, Clone, Copy)]
pub struct SimConfig {
    /// RNG seed for determinism. Same seed = same simulation.
    pub seed: u64,
    /// Solver settings; its gravity also drives airborne targets.
    pub predictor: PredictorConfig,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            seed: 42,
            predictor: PredictorConfig::default(),
        }
    }
}

/// The simulation engine. Owns the ECS world and all sim state.
pub struct SimulationEngine {
    world: World,
    predictor: ProjectilePredictor,
    rng: ChaCha8Rng,
    tick: u64,
    next_id: u32,
}

impl SimulationEngine {
    /// Create a new simulation engine with the given config.
    pub fn new(config: SimConfig) -> ConfigResult<Self> {
        Ok(Self {
            world: World::new(),
            predictor: ProjectilePredictor::new(config.predictor)?,
            rng: ChaCha8Rng::seed_from_u64(config.seed),
            tick: 0,
            next_id: 0,
        })
    }

    /// Seconds per tick.
    pub fn dt(&self) -> f32 {
        1.0 / TICK_RATE as f32
    }

    /// Add a launcher. Returns its id.
    pub fn spawn_shooter(&mut self, origin: Vec3, launch_speed: f32, gravity_multiplier: f32) -> u32 {
        let id = self.allocate_id();
        world_setup::spawn_shooter(&mut self.world, id, origin, launch_speed, gravity_multiplier);
        id
    }

    /// Add a target. Returns its id.
    pub fn spawn_target(&mut self, origin: Vec3, velocity: Vec3, airborne: bool) -> u32 {
        let id = self.allocate_id();
        world_setup::spawn_target(&mut self.world, id, origin, velocity, airborne);
        id
    }

    /// Add `count` seeded random targets. Returns their ids.
    pub fn spawn_random_targets(&mut self, count: usize) -> Vec<u32> {
        let first_id = self.next_id;
        world_setup::spawn_random_targets(&mut self.world, &mut self.rng, first_id, count);
        self.next_id += count as u32;
        (first_id..self.next_id).collect()
    }

    /// Advance the simulation by one tick and return the resulting snapshot.
    pub fn tick(&mut self) -> SimSnapshot {
        let gravity = self.predictor.config().gravity;
        let dt = self.dt();
        systems::movement::run(&mut self.world, dt, gravity);
        self.tick += 1;

        systems::fire_control::run(&mut self.world, &self.predictor);
        self.snapshot()
    }

    /// Snapshot of the current state without advancing.
    pub fn snapshot(&self) -> SimSnapshot {
        systems::snapshot::build_snapshot(&self.world, self.tick, self.elapsed_secs())
    }

    /// Number of ticks run so far.
    pub fn tick_count(&self) -> u64 {
        self.tick
    }

    pub fn elapsed_secs(&self) -> f32 {
        self.tick as f32 * self.dt()
    }

    pub fn predictor(&self) -> &ProjectilePredictor {
        &self.predictor
    }

    /// Get a read-only reference to the ECS world.
    pub fn world(&self) -> &World {
        &self.world
    }

    fn allocate_id(&mut self) -> u32 {
        let id = self.next_id;
        self.next_id += 1;
        id
    }
}
