//! Error types for solver configuration.

use thiserror::Error;

/// Result type alias for configuration operations.
pub type ConfigResult<T> = Result<T, ConfigError>;

/// Errors raised while loading or validating a [`crate::PredictorConfig`].
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The step must be strictly positive and finite.
    #[error("time step must be positive and finite, got {0}")]
    InvalidTimeStep(f32),

    /// The horizon must be non-negative and finite.
    #[error("max travel time must be non-negative and finite, got {0}")]
    InvalidMaxTravelTime(f32),

    /// Gravity must be finite and non-negative.
    #[error("gravity must be non-negative and finite, got {0}")]
    InvalidGravity(f32),

    /// Config document could not be parsed.
    #[error("failed to parse config: {0}")]
    Parse(#[from] serde_json::Error),
}
