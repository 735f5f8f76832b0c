//! Angle helpers shared by the integrator and the output samples.

use std::f64::consts::PI;

/// Converts degrees to radians as `degrees * π / 180`.
///
/// The multiplication happens before the division so traces stay
/// bit-identical to reference runs; `f64::to_radians` rounds differently.
pub fn degrees_to_radians(degrees: f64) -> f64 {
    degrees * PI / 180.0
}

/// Converts radians to degrees as `radians * 180 / π`.
pub fn radians_to_degrees(radians: f64) -> f64 {
    radians * 180.0 / PI
}
