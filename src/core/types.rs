use serde::{Deserialize, Serialize};

use crate::config::{
    AIR_RESISTANCE_RANGE, AIR_RESISTANCE_STEP, DEFAULT_AIR_RESISTANCE,
    DEFAULT_INITIAL_ANGLE_DEGREES, DEFAULT_LENGTH, INITIAL_ANGLE_RANGE, LENGTH_RANGE,
};
use crate::core::planet::Planet;
use crate::error::{Result, SimulationError};
use crate::utils::math::{degrees_to_radians, radians_to_degrees};

/// Physical inputs of a single simulation run.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimulationParameters {
    /// String length in meters.
    pub length: f64,
    /// Release angle measured from vertical, in degrees.
    pub initial_angle_degrees: f64,
    /// Gravitational acceleration in m/s².
    pub gravity: f64,
    /// Linear damping coefficient applied to angular velocity.
    pub air_resistance: f64,
}

impl Default for SimulationParameters {
    fn default() -> Self {
        Self {
            length: DEFAULT_LENGTH,
            initial_angle_degrees: DEFAULT_INITIAL_ANGLE_DEGREES,
            gravity: Planet::Earth.gravity(),
            air_resistance: DEFAULT_AIR_RESISTANCE,
        }
    }
}

impl SimulationParameters {
    pub fn new(length: f64, initial_angle_degrees: f64, gravity: f64, air_resistance: f64) -> Self {
        Self {
            length,
            initial_angle_degrees,
            gravity,
            air_resistance,
        }
    }

    /// Replaces the gravity with the value tabulated for `planet`.
    pub fn with_planet(mut self, planet: Planet) -> Self {
        self.gravity = planet.gravity();
        self
    }

    /// Release angle in radians.
    pub fn initial_angle_radians(&self) -> f64 {
        degrees_to_radians(self.initial_angle_degrees)
    }

    /// Rejects inputs for which the model is undefined.
    pub fn validate(&self) -> Result<()> {
        let fields = [
            ("length", self.length),
            ("initial_angle_degrees", self.initial_angle_degrees),
            ("gravity", self.gravity),
            ("air_resistance", self.air_resistance),
        ];
        for (name, value) in fields {
            if !value.is_finite() {
                return Err(SimulationError::InvalidParameter {
                    name,
                    value,
                    reason: "must be finite",
                });
            }
        }

        if self.length <= 0.0 {
            return Err(SimulationError::InvalidParameter {
                name: "length",
                value: self.length,
                reason: "must be greater than zero",
            });
        }
        if self.gravity <= 0.0 {
            return Err(SimulationError::InvalidParameter {
                name: "gravity",
                value: self.gravity,
                reason: "must be greater than zero",
            });
        }
        Ok(())
    }

    /// Lists every way these parameters leave the range the UI offers.
    ///
    /// Violations are advisory: the simulator still runs such inputs.
    pub fn check_operating_bounds(&self) -> Vec<BoundsViolation> {
        let mut violations = Vec::new();

        let ranged = [
            ("length", self.length, LENGTH_RANGE),
            (
                "initial_angle_degrees",
                self.initial_angle_degrees,
                INITIAL_ANGLE_RANGE,
            ),
            ("air_resistance", self.air_resistance, AIR_RESISTANCE_RANGE),
        ];
        for (parameter, value, (min, max)) in ranged {
            if !(min..=max).contains(&value) {
                violations.push(BoundsViolation::OutOfRange {
                    parameter,
                    value,
                    min,
                    max,
                });
            }
        }

        let ticks = self.air_resistance / AIR_RESISTANCE_STEP;
        if (ticks - ticks.round()).abs() > 1e-6 {
            violations.push(BoundsViolation::OffGrid {
                parameter: "air_resistance",
                value: self.air_resistance,
                step: AIR_RESISTANCE_STEP,
            });
        }

        if Planet::from_gravity(self.gravity).is_none() {
            violations.push(BoundsViolation::UnlistedGravity {
                value: self.gravity,
            });
        }

        violations
    }
}

/// A parameter outside the range offered by the calling UI.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum BoundsViolation {
    OutOfRange {
        parameter: &'static str,
        value: f64,
        min: f64,
        max: f64,
    },
    OffGrid {
        parameter: &'static str,
        value: f64,
        step: f64,
    },
    UnlistedGravity {
        value: f64,
    },
}

impl std::fmt::Display for BoundsViolation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::OutOfRange {
                parameter,
                value,
                min,
                max,
            } => write!(f, "{parameter} = {value} outside [{min}, {max}]"),
            Self::OffGrid {
                parameter,
                value,
                step,
            } => write!(f, "{parameter} = {value} is not a multiple of {step}"),
            Self::UnlistedGravity { value } => {
                write!(f, "gravity = {value} m/s² matches no tabulated planet")
            }
        }
    }
}

/// Full integrator state after a step.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PendulumState {
    pub step: usize,
    pub time: f64,
    /// Angular displacement in radians.
    pub theta: f64,
    /// Angular velocity in rad/s.
    pub omega: f64,
}

impl PendulumState {
    /// State at release, before any integration step.
    pub fn at_rest(theta: f64) -> Self {
        Self {
            step: 0,
            time: 0.0,
            theta,
            omega: 0.0,
        }
    }

    pub fn angle_degrees(&self) -> f64 {
        radians_to_degrees(self.theta)
    }

    pub fn to_sample(&self) -> Sample {
        Sample {
            time: self.time,
            angle_degrees: self.angle_degrees(),
        }
    }
}

/// One point of the emitted time series.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Sample {
    pub time: f64,
    pub angle_degrees: f64,
}

impl Sample {
    /// Chart axis label, e.g. `"12.30s"`.
    pub fn time_label(&self) -> String {
        format!("{:.2}s", self.time)
    }
}

/// Chronological, non-empty series of samples produced by one run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SimulationResult {
    samples: Vec<Sample>,
    settled: bool,
}

impl SimulationResult {
    pub(crate) fn new(samples: Vec<Sample>, settled: bool) -> Self {
        Self { samples, settled }
    }

    pub fn samples(&self) -> &[Sample] {
        &self.samples
    }

    pub fn into_samples(self) -> Vec<Sample> {
        self.samples
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Sample> {
        self.samples.iter()
    }

    pub fn len(&self) -> usize {
        self.samples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    /// `false` when the trace was cut off at the step cap.
    pub fn is_settled(&self) -> bool {
        self.settled
    }

    /// Timestamp of the last sample.
    pub fn duration(&self) -> f64 {
        self.samples.last().map_or(0.0, |s| s.time)
    }

    pub fn final_angle_degrees(&self) -> Option<f64> {
        self.samples.last().map(|s| s.angle_degrees)
    }

    /// Axis labels for every sample, formatted to two decimals.
    pub fn time_labels(&self) -> Vec<String> {
        self.samples.iter().map(Sample::time_label).collect()
    }
}

impl<'a> IntoIterator for &'a SimulationResult {
    type Item = &'a Sample;
    type IntoIter = std::slice::Iter<'a, Sample>;

    fn into_iter(self) -> Self::IntoIter {
        self.samples.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_parameters_match_ui_start_values() {
        let params = SimulationParameters::default();
        assert_eq!(params.length, 2.0);
        assert_eq!(params.initial_angle_degrees, 30.0);
        assert_eq!(params.gravity, 9.81);
        assert_eq!(params.air_resistance, 0.05);
        assert!(params.validate().is_ok());
        assert!(params.check_operating_bounds().is_empty());
    }

    #[test]
    fn zero_length_is_rejected() {
        let params = SimulationParameters::new(0.0, 30.0, 9.81, 0.05);
        assert!(matches!(
            params.validate(),
            Err(SimulationError::InvalidParameter { name: "length", .. })
        ));
    }

    #[test]
    fn negative_gravity_is_rejected() {
        let params = SimulationParameters::new(2.0, 30.0, -9.81, 0.05);
        assert!(matches!(
            params.validate(),
            Err(SimulationError::InvalidParameter { name: "gravity", .. })
        ));
    }

    #[test]
    fn non_finite_values_are_rejected() {
        let params = SimulationParameters::new(2.0, f64::NAN, 9.81, 0.05);
        assert!(params.validate().is_err());
        let params = SimulationParameters::new(2.0, 30.0, 9.81, f64::INFINITY);
        assert!(params.validate().is_err());
    }

    #[test]
    fn zero_and_negative_damping_are_valid() {
        assert!(SimulationParameters::new(2.0, 30.0, 9.81, 0.0).validate().is_ok());
        assert!(SimulationParameters::new(2.0, 30.0, 9.81, -0.01).validate().is_ok());
    }

    #[test]
    fn operating_bounds_report_each_offender() {
        let params = SimulationParameters::new(12.0, 95.0, 9.0, 0.055);
        let violations = params.check_operating_bounds();
        assert_eq!(violations.len(), 4);
        assert!(violations.iter().any(|v| matches!(
            v,
            BoundsViolation::OutOfRange { parameter: "length", .. }
        )));
        assert!(violations
            .iter()
            .any(|v| matches!(v, BoundsViolation::OffGrid { .. })));
        assert!(violations
            .iter()
            .any(|v| matches!(v, BoundsViolation::UnlistedGravity { .. })));
    }

    #[test]
    fn slider_grid_values_are_accepted() {
        for tick in 1..=10 {
            let params = SimulationParameters::default().with_planet(Planet::Mars);
            let params = SimulationParameters {
                air_resistance: tick as f64 * 0.01,
                ..params
            };
            assert!(
                params.check_operating_bounds().is_empty(),
                "tick {tick} flagged"
            );
        }
    }

    #[test]
    fn time_label_uses_two_decimals() {
        let sample = Sample {
            time: 167.10000000000002,
            angle_degrees: 0.0,
        };
        assert_eq!(sample.time_label(), "167.10s");
    }
}
