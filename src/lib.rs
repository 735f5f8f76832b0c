//! Pendulum Sim – a damped physical pendulum simulator for Rust.
//!
//! Given a string length, release angle, gravity, and an air resistance
//! coefficient, the simulator integrates the nonlinear pendulum with a
//! semi-implicit Euler scheme and returns the angle time series until the
//! bob comes to rest.
//!
//! ```
//! use pendulum_sim::{simulate, Planet, SimulationParameters};
//!
//! let params = SimulationParameters::default().with_planet(Planet::Mars);
//! let result = simulate(&params).unwrap();
//! assert!(result.is_settled());
//! assert_eq!(result.samples()[0].time, 0.0);
//! ```

pub mod analysis;
pub mod config;
pub mod core;
pub mod dynamics;
pub mod error;
pub mod simulator;
pub mod utils;

pub use config::{SimulatorConfig, StepCapPolicy};
pub use crate::core::{
    planet::{Planet, UnknownPlanet},
    types::{BoundsViolation, PendulumState, Sample, SimulationParameters, SimulationResult},
};
pub use dynamics::{
    forces::{AirDrag, GravityTorque, PendulumModel, TorqueGenerator},
    integrator::Integrator,
    stopping::{RestCondition, RunState},
};
pub use error::{Result, SimulationError};
pub use simulator::{simulate, Simulator, Trajectory};
