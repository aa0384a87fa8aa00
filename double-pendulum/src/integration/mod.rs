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
//! Numerical integration of the pendulum's equations of motion
//!
//! The pendulum is advanced with the classical fourth-order Runge-Kutta
//! method at a fixed, caller-chosen timestep. There is no adaptive step-size
//! control: each call performs exactly one step of exactly `dt`, which keeps
//! trajectories deterministic.
//!
//! # Timestep Guidelines
//!
//! - Too small: Numerical precision issues and wasted computation
//! - Too large: Energy drift grows quickly and the chaotic regime diverges
//!   from the true trajectory sooner
//! - RK4 is not symplectic, so total energy drifts slowly even at small
//!   timesteps. Watch it with [`EnergyMonitor`](crate::energy::EnergyMonitor)
//!   and reduce `dt` if the drift becomes unacceptable.

use crate::pendulum::PendulumState;

mod rk4;

pub use rk4::{rk4_step, RK4Integrator};

/// Advance `state` by one RK4 step of `dt`, in place
///
/// Returns the same state for chaining. Total over its inputs: a degenerate
/// configuration yields NaN/Inf components rather than an error.
///
/// # Examples
///
/// ```
/// use double_pendulum::integration::step;
/// use double_pendulum::pendulum::{PendulumParams, PendulumState};
///
/// let mut state = PendulumState::at_rest(0.5, 0.0, PendulumParams::new(1.0, 1.0, 1.0, 1.0, 9.81));
/// step(&mut state, 0.01);
/// assert!(state.omega1() < 0.0);
/// ```
pub fn step(state: &mut PendulumState, dt: f64) -> &mut PendulumState {
    let next = rk4_step(state.params(), &state.vector(), dt);
    state.set_vector(next);
    state
}

/// Trait for fixed-step pendulum integrators
///
/// An integrator owns its timestep and overwrites a [`PendulumState`] in
/// place once per call to [`step`](Integrator::step).
pub trait Integrator: Send + Sync {
    /// Get the name of this integrator
    fn name(&self) -> &str;

    /// Get the timestep used by this integrator
    fn timestep(&self) -> f64;

    /// Set the timestep for this integrator
    ///
    /// # Panics
    ///
    /// Panics if timestep is non-positive, NaN, or infinite
    fn set_timestep(&mut self, dt: f64);

    /// Validate the timestep for stability
    ///
    /// Returns warnings if the timestep might cause numerical issues.
    /// Extremely small timesteps may lead to precision loss, while large
    /// timesteps may cause instability.
    fn validate_timestep(&self) -> Result<(), String> {
        let dt = self.timestep();

        if dt <= 0.0 || !dt.is_finite() {
            return Err(format!("Invalid timestep: {}. Must be positive and finite.", dt));
        }

        if dt < 1e-9 {
            return Err(format!(
                "Warning: Timestep {} is extremely small and may cause precision loss with f64. \
                Consider using larger timestep or higher precision types.",
                dt
            ));
        }

        if dt > 1.0 {
            return Err(format!(
                "Warning: Timestep {} is large and may cause instability. \
                Consider using smaller timesteps for better accuracy.",
                dt
            ));
        }

        Ok(())
    }

    /// Advance the state by one timestep, overwriting it in place
    fn step<'s>(&mut self, state: &'s mut PendulumState) -> &'s mut PendulumState;
}
