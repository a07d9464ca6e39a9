//! Solver configuration.
//!
//! One gravity value drives target free-fall prediction as well as the
//! launch angle solve and the travel-time simulation.

use serde::{Deserialize, Serialize};

use crate::constants::{
    DEFAULT_GRAVITY, DEFAULT_MAX_TRAVEL_TIME, DEFAULT_TIME_STEP, STEP_COUNT_SLACK,
};
use crate::error::{ConfigError, ConfigResult};

/// Parameters shared by every stage of the intercept solve.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PredictorConfig {
    /// World gravitational acceleration (units/s²).
    pub gravity: f32,
    /// Longest time (seconds) the search and the trajectory simulation look ahead.
    pub max_travel_time: f32,
    /// Discretization step (seconds) for both loops.
    pub time_step: f32,
}

impl Default for PredictorConfig {
    fn default() -> Self {
        Self {
            gravity: DEFAULT_GRAVITY,
            max_travel_time: DEFAULT_MAX_TRAVEL_TIME,
            time_step: DEFAULT_TIME_STEP,
        }
    }
}

impl PredictorConfig {
    pub fn new(gravity: f32, max_travel_time: f32, time_step: f32) -> Self {
        Self {
            gravity,
            max_travel_time,
            time_step,
        }
    }

    /// Parse and validate a JSON config. Missing fields take their defaults.
    pub fn from_json_str(json: &str) -> ConfigResult<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Check that the loop bounds are usable.
    pub fn validate(&self) -> ConfigResult<()> {
        if !(self.time_step.is_finite() && self.time_step > 0.0) {
            return Err(ConfigError::InvalidTimeStep(self.time_step));
        }
        if !(self.max_travel_time.is_finite() && self.max_travel_time >= 0.0) {
            return Err(ConfigError::InvalidMaxTravelTime(self.max_travel_time));
        }
        if !(self.gravity.is_finite() && self.gravity >= 0.0) {
            return Err(ConfigError::InvalidGravity(self.gravity));
        }
        Ok(())
    }

    /// Index of the last step inside the horizon. Loops run over `0..=step_count()`.
    ///
    /// Returns 0 for a config that fails [`Self::validate`].
    pub fn step_count(&self) -> u32 {
        if self.validate().is_err() {
            return 0;
        }
        (self.max_travel_time / self.time_step + STEP_COUNT_SLACK).floor() as u32
    }

    /// Time (seconds) at step index `step`.
    pub fn time_at(&self, step: u32) -> f32 {
        step as f32 * self.time_step
    }

    /// Iterator over every discretized time in `[0, max_travel_time]`.
    pub fn times(&self) -> impl Iterator<Item = f32> + '_ {
        (0..=self.step_count()).map(move |i| self.time_at(i))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_step_count_survives_float_rounding() {
        let config = PredictorConfig::new(800.0, 3.0, 0.01);
        assert_eq!(config.step_count(), 300);
        assert_eq!(config.times().count(), 301);
    }

    #[test]
    fn test_zero_horizon_has_single_step() {
        let config = PredictorConfig::new(9.81, 0.0, 0.01);
        assert_eq!(config.times().collect::<Vec<_>>(), vec![0.0]);
    }

    #[test]
    fn test_validate_rejects_bad_step() {
        let config = PredictorConfig::new(9.81, 3.0, 0.0);
        assert!(matches!(
            config.validate(),
            Err(ConfigError::InvalidTimeStep(_))
        ));
        assert_eq!(config.step_count(), 0);
    }

    #[test]
    fn test_validate_rejects_negative_horizon_and_gravity() {
        assert!(PredictorConfig::new(9.81, -1.0, 0.01).validate().is_err());
        assert!(PredictorConfig::new(-9.81, 1.0, 0.01).validate().is_err());
        assert!(PredictorConfig::new(f32::NAN, 1.0, 0.01).validate().is_err());
    }

    #[test]
    fn test_from_json_fills_defaults() {
        let config = PredictorConfig::from_json_str(r#"{ "gravity": 800.0 }"#).unwrap();
        assert_eq!(config.gravity, 800.0);
        assert_eq!(config.max_travel_time, DEFAULT_MAX_TRAVEL_TIME);
        assert_eq!(config.time_step, DEFAULT_TIME_STEP);
    }

    #[test]
    fn test_from_json_rejects_invalid() {
        let err = PredictorConfig::from_json_str(r#"{ "time_step": -0.5 }"#).unwrap_err();
        assert!(format!("{err}").contains("time step"));

        let err = PredictorConfig::from_json_str("not json").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }
}
