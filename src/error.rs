//! Error types for the pendulum simulator.

use thiserror::Error;

/// Errors reported by [`Simulator::simulate`](crate::Simulator::simulate).
///
/// A failed run never yields partial samples.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SimulationError {
    /// A parameter makes the physical model undefined.
    #[error("invalid parameter `{name}` = {value}: {reason}")]
    InvalidParameter {
        name: &'static str,
        value: f64,
        reason: &'static str,
    },
    /// The pendulum did not come to rest within the step cap.
    #[error("simulation did not settle within {max_steps} steps")]
    NonTerminating { max_steps: usize },
    /// The simulator settings themselves are unusable.
    #[error("invalid simulator config: {0}")]
    InvalidConfig(&'static str),
}

/// Convenient Result alias for simulator operations.
pub type Result<T> = std::result::Result<T, SimulationError>;
