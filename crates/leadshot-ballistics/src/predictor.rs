//! `ProjectilePredictor`: the solver functions bound to one validated config.

use glam::Vec3;
use leadshot_core::{ConfigResult, PredictorConfig, Projectile, Target};

use crate::error::InterceptResult;
use crate::intercept::{self, InterceptSolution};
use crate::{launch, prediction, travel};

/// Ballistic solver bound to a single gravity / horizon / step configuration.
///
/// Holds no mutable state; share it freely across threads.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct ProjectilePredictor {
    config: PredictorConfig,
}

impl ProjectilePredictor {
    /// Create a predictor, rejecting configs the search loops cannot run on.
    pub fn new(config: PredictorConfig) -> ConfigResult<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    pub fn config(&self) -> &PredictorConfig {
        &self.config
    }

    /// Aim point for an intercept of `target` by `projectile`.
    pub fn predict_intercept_point(&self, target: &Target, projectile: &Projectile) -> InterceptResult<Vec3> {
        intercept::predict_intercept_point(target, projectile, &self.config)
    }

    /// Full intercept solution, including pitch/yaw and timing.
    pub fn solve_intercept(&self, target: &Target, projectile: &Projectile) -> InterceptResult<InterceptSolution> {
        intercept::solve_intercept(target, projectile, &self.config)
    }

    pub fn linear_prediction(&self, target: &Target, time: f32) -> Vec3 {
        prediction::linear_prediction(target, time, self.config.gravity)
    }

    pub fn solve_launch_angle(&self, projectile: &Projectile, target_position: Vec3) -> Option<f32> {
        launch::solve_launch_angle(projectile, target_position, self.config.gravity)
    }

    pub fn simulate_travel_time(&self, target_position: Vec3, projectile: &Projectile, pitch: f32) -> Option<f32> {
        travel::simulate_travel_time(target_position, projectile, pitch, &self.config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rejects_invalid_config() {
        assert!(ProjectilePredictor::new(PredictorConfig::new(9.81, 3.0, 0.0)).is_err());
    }

    #[test]
    fn test_delegates_with_shared_gravity() {
        let predictor = ProjectilePredictor::new(PredictorConfig::new(10.0, 3.0, 0.01)).unwrap();
        let p = Projectile::new(Vec3::ZERO, 100.0, 1.0);
        assert!(predictor.solve_launch_angle(&p, Vec3::new(999.0, 0.0, 0.0)).is_some());
        assert!(predictor.solve_launch_angle(&p, Vec3::new(1001.0, 0.0, 0.0)).is_none());

        let falling = Target::new(Vec3::new(0.0, 0.0, 50.0), Vec3::ZERO, true);
        let z = predictor.linear_prediction(&falling, 1.0).z;
        assert!((z - 45.0).abs() < 1e-4, "same gravity must drive target fall, got {z}");
    }
}
