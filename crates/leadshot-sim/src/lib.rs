//! Engagement simulation for LEADSHOT.
//!
//! Owns a hecs ECS world of shooters and targets, advances it at a fixed
//! tick rate, and re-solves every shooter's aim point each tick.

pub mod components;
pub mod engine;
pub mod systems;
pub mod world_setup;

pub use leadshot_ballistics as ballistics;
pub use leadshot_core as core;
pub use engine::{SimConfig, SimulationEngine};
