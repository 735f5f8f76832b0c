//! Core data types: simulation inputs, integrator state, and output samples.

pub mod planet;
pub mod types;

pub use planet::{Planet, UnknownPlanet};
pub use types::{BoundsViolation, PendulumState, Sample, SimulationParameters, SimulationResult};
