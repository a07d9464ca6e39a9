//! Per-tick systems over the engagement world.
//!
//! Each system is a free function taking the world; persistent state lives
//! in components.

pub mod fire_control;
pub mod movement;
pub mod snapshot;
