use crate::core::types::SimulationParameters;

/// Contribution to the pendulum's angular acceleration.
pub trait TorqueGenerator: Send + Sync {
    /// Angular acceleration (rad/s²) for the given angle and angular velocity.
    fn angular_acceleration(&self, theta: f64, omega: f64) -> f64;
}

/// Restoring torque of gravity acting on the bob: `-(g / L) · sin θ`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GravityTorque {
    pub gravity: f64,
    pub length: f64,
}

impl GravityTorque {
    pub fn new(gravity: f64, length: f64) -> Self {
        Self { gravity, length }
    }
}

impl TorqueGenerator for GravityTorque {
    fn angular_acceleration(&self, theta: f64, _omega: f64) -> f64 {
        (-self.gravity / self.length) * theta.sin()
    }
}

/// Air drag linear in angular velocity: `-k · ω`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AirDrag {
    pub coefficient: f64,
}

impl TorqueGenerator for AirDrag {
    fn angular_acceleration(&self, _theta: f64, omega: f64) -> f64 {
        -(self.coefficient * omega)
    }
}

/// Equation of motion of the damped nonlinear pendulum.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PendulumModel {
    pub gravity: GravityTorque,
    pub drag: AirDrag,
}

impl PendulumModel {
    pub fn new(params: &SimulationParameters) -> Self {
        Self {
            gravity: GravityTorque::new(params.gravity, params.length),
            drag: AirDrag {
                coefficient: params.air_resistance,
            },
        }
    }

    /// Natural frequency of small oscillations, `sqrt(g / L)`.
    pub fn natural_frequency(&self) -> f64 {
        (self.gravity.gravity / self.gravity.length).sqrt()
    }
}

impl TorqueGenerator for PendulumModel {
    fn angular_acceleration(&self, theta: f64, omega: f64) -> f64 {
        self.gravity.angular_acceleration(theta, omega) + self.drag.angular_acceleration(theta, omega)
    }
}
