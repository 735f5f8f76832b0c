//! Pendulum dynamics: torque model, integrator, and rest detection.

pub mod forces;
pub mod integrator;
pub mod stopping;

pub use forces::{AirDrag, GravityTorque, PendulumModel, TorqueGenerator};
pub use integrator::Integrator;
pub use stopping::{RestCondition, RunState};
