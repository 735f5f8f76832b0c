use crate::core::types::PendulumState;
use crate::dynamics::forces::TorqueGenerator;

/// Semi-implicit (symplectic) Euler integrator with a fixed timestep.
///
/// Velocity is advanced first and the angle is then advanced with the
/// updated velocity.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Integrator {
    pub dt: f64,
}

impl Integrator {
    pub fn new(dt: f64) -> Self {
        Self { dt }
    }

    pub fn integrate_velocity<M: TorqueGenerator>(&self, model: &M, state: &mut PendulumState) {
        let alpha = model.angular_acceleration(state.theta, state.omega);
        state.omega += alpha * self.dt;
    }

    pub fn integrate_position(&self, state: &mut PendulumState) {
        state.theta += state.omega * self.dt;
    }

    /// Advances `state` by one step and stamps it with `step` and its time.
    pub fn step<M: TorqueGenerator>(&self, model: &M, state: &mut PendulumState, step: usize) {
        self.integrate_velocity(model, state);
        self.integrate_position(state);
        state.step = step;
        state.time = step as f64 * self.dt;
    }
}
