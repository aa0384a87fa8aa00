// Copyright 2025 John Brosnihan
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.
//! Per-tick simulation driver
//!
//! [`Simulation`] owns one pendulum state and everything that advances or
//! observes it. Each call to [`tick`](Simulation::tick) runs in a fixed
//! order: integrate once, then compute positions, record the trail, and
//! sample the energy from the freshly written state. A renderer calls `tick`
//! once per frame and draws the returned [`Frame`].

use crate::config::SimulationConfig;
use crate::energy::{EnergyHealth, EnergyMonitor};
use crate::integration::{Integrator, RK4Integrator};
use crate::kinematics::{positions, Positions};
use crate::pendulum::PendulumState;
use crate::trail::Trail;
use tracing::debug;

/// Everything a renderer needs after one tick
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Frame {
    /// Tick number, starting at 1 for the first tick
    pub tick: u64,
    /// Simulated time after this tick
    pub time: f64,
    /// Bob positions relative to the pivot
    pub positions: Positions,
    /// Total mechanical energy
    pub energy: f64,
    /// Energy health after this tick
    pub health: EnergyHealth,
}

/// A single pendulum advanced one fixed step per tick
///
/// # Example
///
/// ```
/// use double_pendulum::pendulum::{PendulumParams, PendulumState};
/// use double_pendulum::simulation::Simulation;
///
/// let state = PendulumState::at_rest(1.0, 0.5, PendulumParams::new(1.0, 1.0, 1.0, 1.0, 9.81));
/// let mut sim = Simulation::new(state, 0.01);
/// let frame = sim.tick();
/// assert_eq!(frame.tick, 1);
/// assert_eq!(sim.trail().map(|t| t.len()), Some(1));
/// ```
#[derive(Debug, Clone)]
pub struct Simulation {
    state: PendulumState,
    integrator: RK4Integrator,
    monitor: EnergyMonitor,
    trail: Option<Trail>,
    ticks: u64,
    time: f64,
}

impl Simulation {
    /// Create a simulation stepping `state` by `dt` per tick, with trail recording
    ///
    /// # Panics
    ///
    /// Panics if `dt` is non-positive, NaN, or infinite
    pub fn new(state: PendulumState, dt: f64) -> Self {
        Simulation {
            state,
            integrator: RK4Integrator::new(dt),
            monitor: EnergyMonitor::new(&state),
            trail: Some(Trail::new()),
            ticks: 0,
            time: 0.0,
        }
    }

    /// Create a simulation from a validated configuration
    ///
    /// # Panics
    ///
    /// Panics if the configuration's `dt` or tolerance is invalid; use
    /// [`SimulationConfig::validate`] first for untrusted input.
    pub fn from_config(config: &SimulationConfig) -> Self {
        let state = config.initial_state();
        let integrator = RK4Integrator::new(config.integrator.dt);
        if let Err(msg) = integrator.validate_timestep() {
            debug!(%msg, "Timestep outside the recommended range");
        }
        debug!(
            dt = config.integrator.dt,
            record_trail = config.record_trail,
            "Creating simulation from config"
        );
        Simulation {
            state,
            integrator,
            monitor: EnergyMonitor::with_tolerance(&state, config.monitor.tolerance),
            trail: config.record_trail.then(Trail::new),
            ticks: 0,
            time: 0.0,
        }
    }

    /// Disable trail recording and drop any recorded points
    pub fn without_trail(mut self) -> Self {
        self.trail = None;
        self
    }

    /// Current pendulum state
    pub fn state(&self) -> &PendulumState {
        &self.state
    }

    /// The integrator advancing the state
    pub fn integrator(&self) -> &RK4Integrator {
        &self.integrator
    }

    /// The energy monitor observing the state
    pub fn monitor(&self) -> &EnergyMonitor {
        &self.monitor
    }

    /// The recorded trail, if recording is enabled
    pub fn trail(&self) -> Option<&Trail> {
        self.trail.as_ref()
    }

    /// Number of ticks performed
    pub fn ticks(&self) -> u64 {
        self.ticks
    }

    /// Simulated time elapsed
    pub fn time(&self) -> f64 {
        self.time
    }

    /// Advance by one timestep and report the new configuration
    pub fn tick(&mut self) -> Frame {
        self.integrator.step(&mut self.state);
        self.ticks += 1;
        self.time += self.integrator.timestep();

        let positions = positions(&self.state);
        if let Some(trail) = self.trail.as_mut() {
            trail.push(positions.bob2);
        }
        let energy = self.monitor.record(&self.state);

        Frame {
            tick: self.ticks,
            time: self.time,
            positions,
            energy,
            health: self.monitor.health(),
        }
    }

    /// Run `ticks` ticks and return the last frame, or `None` if `ticks` is zero
    pub fn run(&mut self, ticks: usize) -> Option<Frame> {
        (0..ticks).fold(None, |_, _| Some(self.tick()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pendulum::PendulumParams;

    fn unit_state() -> PendulumState {
        PendulumState::at_rest(1.0, 0.5, PendulumParams::new(1.0, 1.0, 1.0, 1.0, 9.81))
    }

    #[test]
    fn test_tick_advances_time_and_count() {
        let mut sim = Simulation::new(unit_state(), 0.01);
        sim.tick();
        sim.tick();
        assert_eq!(sim.ticks(), 2);
        assert!((sim.time() - 0.02).abs() < 1e-15);
        assert_eq!(sim.integrator().steps_taken(), 2);
    }

    #[test]
    fn test_frame_reflects_fresh_state() {
        let mut sim = Simulation::new(unit_state(), 0.01);
        let frame = sim.tick();
        assert_eq!(frame.positions, positions(sim.state()));
        assert_eq!(frame.energy, crate::energy::total_energy(sim.state()));
        assert_eq!(sim.trail().and_then(|t| t.last()), Some(&frame.positions.bob2));
    }

    #[test]
    fn test_run_returns_last_frame() {
        let mut sim = Simulation::new(unit_state(), 0.01);
        assert_eq!(sim.run(0), None);
        let frame = sim.run(10).unwrap();
        assert_eq!(frame.tick, 10);
        assert_eq!(sim.trail().unwrap().len(), 10);
        assert_eq!(sim.monitor().samples(), 10);
    }

    #[test]
    fn test_without_trail() {
        let mut sim = Simulation::new(unit_state(), 0.01).without_trail();
        sim.run(5);
        assert!(sim.trail().is_none());
    }

    #[test]
    fn test_from_default_config() {
        let config = SimulationConfig::default();
        let mut sim = Simulation::from_config(&config);
        assert_eq!(sim.integrator().timestep(), 0.5);
        assert!(sim.trail().is_some());
        let frame = sim.tick();
        assert!(frame.positions.bob2.is_valid());
        assert_eq!(frame.health, EnergyHealth::Stable);
    }
}
