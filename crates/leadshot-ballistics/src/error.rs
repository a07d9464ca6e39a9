//! Error types for the intercept search.

use leadshot_core::ConfigError;
use thiserror::Error;

/// Result type alias for intercept operations.
pub type InterceptResult<T> = Result<T, InterceptError>;

/// Reasons the solver could not produce an aim point.
#[derive(Debug, Error)]
pub enum InterceptError {
    /// The predicted target position at `time` is out of ballistic reach.
    #[error("target unreachable at t={time:.3}s")]
    Unreachable { time: f32 },

    /// No candidate time within the horizon let the projectile arrive in time.
    #[error("no intercept within {horizon:.3}s horizon")]
    NoIntercept { horizon: f32 },

    /// The solver config cannot drive the search loops.
    #[error("invalid solver config: {0}")]
    InvalidConfig(#[from] ConfigError),
}

impl InterceptError {
    /// True for the expected "cannot aim now" outcomes, false for misconfiguration.
    pub fn is_no_solution(&self) -> bool {
        matches!(self, Self::Unreachable { .. } | Self::NoIntercept { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = InterceptError::Unreachable { time: 0.25 };
        assert!(format!("{err}").contains("unreachable"));
        assert!(err.is_no_solution());

        let err = InterceptError::NoIntercept { horizon: 3.0 };
        assert!(format!("{err}").contains("3.000s"));
        assert!(err.is_no_solution());

        let err = InterceptError::from(ConfigError::InvalidTimeStep(0.0));
        assert!(format!("{err}").contains("time step"));
        assert!(!err.is_no_solution());
    }
}
