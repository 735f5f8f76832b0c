//! Post-processing helpers for simulation output.

use crate::core::types::{PendulumState, Sample, SimulationParameters};

/// Specific mechanical energy `0.5·ω² − (g / L)·cos θ`.
///
/// Constant for an undamped pendulum up to integrator drift.
pub fn energy(state: &PendulumState, params: &SimulationParameters) -> f64 {
    0.5 * state.omega * state.omega - (params.gravity / params.length) * state.theta.cos()
}

/// Local maxima of `|angle|`, one per half swing, in chronological order.
pub fn amplitude_peaks(samples: &[Sample]) -> Vec<f64> {
    samples
        .windows(3)
        .filter_map(|w| {
            let (prev, cur, next) = (
                w[0].angle_degrees.abs(),
                w[1].angle_degrees.abs(),
                w[2].angle_degrees.abs(),
            );
            (cur >= prev && cur > next).then_some(cur)
        })
        .collect()
}
