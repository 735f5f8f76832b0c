use crate::core::types::PendulumState;
use crate::utils::math::degrees_to_radians;

/// Lifecycle of a simulation run. `Stopped` is terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RunState {
    #[default]
    Running,
    Stopped,
}

/// Joint angle/velocity threshold that defines the pendulum at rest.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RestCondition {
    /// Angle threshold in radians.
    pub max_angle: f64,
    /// Angular velocity threshold in rad/s.
    pub max_angular_velocity: f64,
}

impl RestCondition {
    pub fn new(max_angle_degrees: f64, max_angular_velocity: f64) -> Self {
        Self {
            max_angle: degrees_to_radians(max_angle_degrees),
            max_angular_velocity,
        }
    }

    /// Both bounds are strict.
    pub fn is_at_rest(&self, state: &PendulumState) -> bool {
        state.theta.abs() < self.max_angle && state.omega.abs() < self.max_angular_velocity
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn state(theta: f64, omega: f64) -> PendulumState {
        PendulumState {
            theta,
            omega,
            ..PendulumState::at_rest(0.0)
        }
    }

    #[test]
    fn both_thresholds_must_hold() {
        let rest = RestCondition::new(0.5, 0.001);
        assert!(rest.is_at_rest(&state(0.0, 0.0)));
        assert!(rest.is_at_rest(&state(-0.008, 0.0009)));
        assert!(!rest.is_at_rest(&state(0.0, 0.002)));
        assert!(!rest.is_at_rest(&state(0.01, 0.0)));
    }

    #[test]
    fn thresholds_are_strict() {
        let rest = RestCondition::new(0.5, 0.001);
        assert!(!rest.is_at_rest(&state(0.0, 0.001)));
        assert!(!rest.is_at_rest(&state(rest.max_angle, 0.0)));
    }
}
