//! Solver constants and tuning defaults.

/// Default gravitational acceleration (units/s²), pointing down the z axis.
pub const DEFAULT_GRAVITY: f32 = 9.81;

/// Default prediction horizon in seconds.
pub const DEFAULT_MAX_TRAVEL_TIME: f32 = 3.0;

/// Default integration / search step in seconds.
pub const DEFAULT_TIME_STEP: f32 = 0.01;

/// Horizontal distances below this are treated as "directly above/below".
pub const MIN_HORIZONTAL_DISTANCE: f32 = f32::EPSILON;

/// Slack added before flooring `horizon / step` so that e.g. 3.0 / 0.01
/// yields 300 steps despite f32 rounding.
pub const STEP_COUNT_SLACK: f32 = 1e-4;
