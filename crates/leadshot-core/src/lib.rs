//! Core types and definitions for LEADSHOT.
//!
//! This crate defines the vocabulary shared across all other crates:
//! motion models, view-angle helpers over `glam`, solver configuration,
//! and constants. It has no dependency on any runtime framework.

pub mod angles;
pub mod config;
pub mod constants;
pub mod error;
pub mod types;

pub use glam::Vec3;

pub use config::PredictorConfig;
pub use error::{ConfigError, ConfigResult};
pub use types::{Projectile, Target};
