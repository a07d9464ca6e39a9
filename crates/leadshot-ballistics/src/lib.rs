//! Ballistic intercept prediction for LEADSHOT.
//!
//! Pure functions: linear target prediction, closed-form launch pitch,
//! time-stepped travel-time simulation, and the intercept search that
//! composes them. [`ProjectilePredictor`] bundles them behind one config.

pub mod error;
pub mod intercept;
pub mod launch;
pub mod prediction;
pub mod predictor;
pub mod travel;

pub use leadshot_core as core;

pub use error::{InterceptError, InterceptResult};
pub use intercept::{predict_intercept_point, solve_intercept, InterceptSolution};
pub use launch::solve_launch_angle;
pub use prediction::linear_prediction;
pub use predictor::ProjectilePredictor;
pub use travel::simulate_travel_time;
