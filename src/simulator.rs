use log::{debug, warn};

use crate::{
    config::{SimulatorConfig, StepCapPolicy},
    core::types::{PendulumState, Sample, SimulationParameters, SimulationResult},
    dynamics::{
        forces::PendulumModel,
        integrator::Integrator,
        stopping::{RestCondition, RunState},
    },
    error::{Result, SimulationError},
    utils::logging::{warn_on_bounds_violations, ScopedTimer},
};

#[cfg(feature = "parallel")]
use rayon::prelude::*;

/// Pure, stateless driver turning [`SimulationParameters`] into samples.
///
/// A `Simulator` holds only settings; every call is independent, so one
/// instance can be shared freely across threads.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Simulator {
    config: SimulatorConfig,
}

impl Simulator {
    pub fn new(config: SimulatorConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &SimulatorConfig {
        &self.config
    }

    fn validate_config(&self) -> Result<()> {
        let config = &self.config;
        if !(config.time_step.is_finite() && config.time_step > 0.0) {
            return Err(SimulationError::InvalidConfig("time_step must be positive and finite"));
        }
        if config.max_steps == 0 {
            return Err(SimulationError::InvalidConfig("max_steps must be at least 1"));
        }
        if !(config.stop_angle_degrees >= 0.0 && config.stop_angular_velocity >= 0.0) {
            return Err(SimulationError::InvalidConfig("stop thresholds must be non-negative"));
        }
        Ok(())
    }

    /// Lazily steps the pendulum described by `params`.
    ///
    /// The iterator ends after the first state that satisfies the rest
    /// condition (which is still yielded) or once `max_steps` states have
    /// been produced.
    pub fn trajectory(&self, params: &SimulationParameters) -> Result<Trajectory> {
        self.validate_config()?;
        params.validate()?;

        Ok(Trajectory {
            model: PendulumModel::new(params),
            integrator: Integrator::new(self.config.time_step),
            rest: RestCondition::new(
                self.config.stop_angle_degrees,
                self.config.stop_angular_velocity,
            ),
            state: PendulumState::at_rest(params.initial_angle_radians()),
            next_step: 0,
            max_steps: self.config.max_steps,
            run_state: RunState::Running,
        })
    }

    /// Runs the pendulum until it comes to rest and returns every sample.
    pub fn simulate(&self, params: &SimulationParameters) -> Result<SimulationResult> {
        let _timer = ScopedTimer::new("simulate");

        let mut trajectory = self.trajectory(params)?;
        warn_on_bounds_violations(&params.check_operating_bounds());
        debug!(
            "Simulating pendulum: L = {} m, θ0 = {}°, g = {} m/s², k = {}",
            params.length, params.initial_angle_degrees, params.gravity, params.air_resistance
        );

        let samples: Vec<Sample> = trajectory.by_ref().map(|s| s.to_sample()).collect();
        let settled = trajectory.run_state() == RunState::Stopped;

        if !settled {
            match self.config.step_cap_policy {
                StepCapPolicy::Error => {
                    warn!(
                        "Pendulum still moving after {} steps, discarding trace",
                        self.config.max_steps
                    );
                    return Err(SimulationError::NonTerminating {
                        max_steps: self.config.max_steps,
                    });
                }
                StepCapPolicy::Truncate => {
                    warn!(
                        "Pendulum still moving after {} steps, truncating trace",
                        self.config.max_steps
                    );
                }
            }
        }

        debug!(
            "Simulation finished after {} samples ({:.2} s, settled = {settled})",
            samples.len(),
            samples.last().map_or(0.0, |s| s.time)
        );
        Ok(SimulationResult::new(samples, settled))
    }

    /// Simulates independent parameter sets, in parallel when the
    /// `parallel` feature is enabled. Results keep the input order.
    pub fn simulate_batch(&self, params: &[SimulationParameters]) -> Vec<Result<SimulationResult>> {
        let _timer = ScopedTimer::new("simulate_batch");

        #[cfg(feature = "parallel")]
        let results = params.par_iter().map(|p| self.simulate(p)).collect();
        #[cfg(not(feature = "parallel"))]
        let results = params.iter().map(|p| self.simulate(p)).collect();

        results
    }
}

/// Runs [`Simulator::simulate`] with the default configuration.
pub fn simulate(params: &SimulationParameters) -> Result<SimulationResult> {
    Simulator::default().simulate(params)
}

/// Step-by-step view of a run, yielding the full integrator state.
#[derive(Debug, Clone)]
pub struct Trajectory {
    model: PendulumModel,
    integrator: Integrator,
    rest: RestCondition,
    state: PendulumState,
    next_step: usize,
    max_steps: usize,
    run_state: RunState,
}

impl Trajectory {
    pub fn run_state(&self) -> RunState {
        self.run_state
    }

    /// Number of states yielded so far.
    pub fn steps_taken(&self) -> usize {
        self.next_step
    }

    pub fn model(&self) -> &PendulumModel {
        &self.model
    }
}

impl Iterator for Trajectory {
    type Item = PendulumState;

    fn next(&mut self) -> Option<Self::Item> {
        if self.run_state == RunState::Stopped || self.next_step >= self.max_steps {
            return None;
        }

        self.integrator
            .step(&self.model, &mut self.state, self.next_step);
        self.next_step += 1;

        if self.rest.is_at_rest(&self.state) {
            self.run_state = RunState::Stopped;
        }
        Some(self.state)
    }
}
