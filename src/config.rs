//! Configuration constants and runtime knobs for the pendulum simulator.

use serde::{Deserialize, Serialize};

/// Fixed integration timestep (in seconds).
pub const DEFAULT_TIME_STEP: f64 = 0.1;

/// Angle below which the pendulum may be considered at rest (in degrees).
pub const STOP_ANGLE_DEGREES: f64 = 0.5;

/// Angular speed below which the pendulum may be considered at rest (rad/s).
pub const STOP_ANGULAR_VELOCITY: f64 = 0.001;

/// Upper bound on integrator steps before a run is cut off.
pub const DEFAULT_MAX_STEPS: usize = 100_000;

/// String length the UI starts with (meters).
pub const DEFAULT_LENGTH: f64 = 2.0;

/// Release angle the UI starts with (degrees).
pub const DEFAULT_INITIAL_ANGLE_DEGREES: f64 = 30.0;

/// Air resistance coefficient the UI starts with.
pub const DEFAULT_AIR_RESISTANCE: f64 = 0.05;

/// Operating range of the length slider (meters).
pub const LENGTH_RANGE: (f64, f64) = (1.0, 10.0);

/// Operating range of the release angle slider (degrees).
pub const INITIAL_ANGLE_RANGE: (f64, f64) = (0.0, 90.0);

/// Operating range of the air resistance slider.
pub const AIR_RESISTANCE_RANGE: (f64, f64) = (0.01, 0.1);

/// Granularity of the air resistance slider.
pub const AIR_RESISTANCE_STEP: f64 = 0.01;

/// What the simulator does when a run reaches `max_steps` without settling.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum StepCapPolicy {
    /// Discard the trace and report [`SimulationError::NonTerminating`](crate::SimulationError::NonTerminating).
    #[default]
    Error,
    /// Return the samples recorded so far.
    Truncate,
}

/// Runtime settings for a [`Simulator`](crate::Simulator).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimulatorConfig {
    pub time_step: f64,
    pub max_steps: usize,
    pub step_cap_policy: StepCapPolicy,
    pub stop_angle_degrees: f64,
    pub stop_angular_velocity: f64,
}

impl Default for SimulatorConfig {
    fn default() -> Self {
        Self {
            time_step: DEFAULT_TIME_STEP,
            max_steps: DEFAULT_MAX_STEPS,
            step_cap_policy: StepCapPolicy::default(),
            stop_angle_degrees: STOP_ANGLE_DEGREES,
            stop_angular_velocity: STOP_ANGULAR_VELOCITY,
        }
    }
}

impl SimulatorConfig {
    pub fn with_time_step(mut self, time_step: f64) -> Self {
        self.time_step = time_step;
        self
    }

    pub fn with_max_steps(mut self, max_steps: usize) -> Self {
        self.max_steps = max_steps;
        self
    }

    pub fn with_step_cap_policy(mut self, policy: StepCapPolicy) -> Self {
        self.step_cap_policy = policy;
        self
    }

    /// Overrides both rest thresholds at once.
    pub fn with_stop_thresholds(mut self, angle_degrees: f64, angular_velocity: f64) -> Self {
        self.stop_angle_degrees = angle_degrees;
        self.stop_angular_velocity = angular_velocity;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_reference_constants() {
        let config = SimulatorConfig::default();
        assert_eq!(config.time_step, 0.1);
        assert_eq!(config.max_steps, DEFAULT_MAX_STEPS);
        assert_eq!(config.step_cap_policy, StepCapPolicy::Error);
        assert_eq!(config.stop_angle_degrees, 0.5);
        assert_eq!(config.stop_angular_velocity, 0.001);
    }

    #[test]
    fn builders_override_fields() {
        let config = SimulatorConfig::default()
            .with_max_steps(10)
            .with_step_cap_policy(StepCapPolicy::Truncate)
            .with_stop_thresholds(1.0, 0.01);
        assert_eq!(config.max_steps, 10);
        assert_eq!(config.step_cap_policy, StepCapPolicy::Truncate);
        assert_eq!(config.stop_angle_degrees, 1.0);
        assert_eq!(config.stop_angular_velocity, 0.01);
        assert_eq!(config.time_step, DEFAULT_TIME_STEP);
    }
}
