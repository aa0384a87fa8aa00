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
//! Runge-Kutta 4th order (RK4) integrator implementation
//!
//! The RK4 method is a classical explicit integrator that provides fourth-order
//! accuracy for smooth ordinary differential equations.
//!
//! # Algorithm
//!
//! The RK4 method computes four intermediate derivatives per timestep:
//!
//! ```text
//! k1 = f(y)
//! k2 = f(y + k1*dt/2)
//! k3 = f(y + k2*dt/2)
//! k4 = f(y + k3*dt)
//! y(t + dt) = y(t) + (k1 + 2*k2 + 2*k3 + k4)*dt/6
//! ```
//!
//! For the pendulum `y = (theta1, theta2, omega1, omega2)` and `f` is
//! [`derivative`](crate::dynamics::derivative), so the angle rows of each `k`
//! are angular velocities and the velocity rows are angular accelerations.
//!
//! # Properties
//!
//! - **Fourth-order accurate**: Local error O(dt⁵), global error O(dt⁴)
//! - **Explicit method**: Easy to implement, no implicit solve needed
//! - **Not symplectic**: Energy may drift over long simulations
//! - **Four evaluations per step**, all within a single synchronous call
//!
//! # References
//!
//! - Butcher, J. C. (2016). Numerical Methods for Ordinary Differential Equations
//!   (3rd ed.). Wiley. Chapter 3.
//! - Press, W. H., Teukolsky, S. A., Vetterling, W. T., & Flannery, B. P. (2007).
//!   Numerical Recipes: The Art of Scientific Computing (3rd ed.). Cambridge
//!   University Press. Section 17.1.

use super::Integrator;
use crate::dynamics::EquationOfMotion;
use crate::pendulum::{PendulumState, StateVector};
use tracing::warn;

/// Perform one classical RK4 step of `dy/dt = eom.derivative(y)`
///
/// Generic over the equation of motion so the same stepper can be checked
/// against systems with closed-form solutions.
pub fn rk4_step<E>(eom: &E, y: &StateVector, dt: f64) -> StateVector
where
    E: EquationOfMotion + ?Sized,
{
    let dt_2 = dt * 0.5;
    let dt_6 = dt / 6.0;

    let k1 = eom.derivative(y);
    let k2 = eom.derivative(&(*y + k1 * dt_2));
    let k3 = eom.derivative(&(*y + k2 * dt_2));
    let k4 = eom.derivative(&(*y + k3 * dt));

    *y + (k1 + k2 * 2.0 + k3 * 2.0 + k4) * dt_6
}

/// Runge-Kutta 4th order integrator for the double pendulum
///
/// Holds the fixed timestep and a little bookkeeping. The physics lives in
/// [`rk4_step`]; this type adds the [`Integrator`] interface and a one-shot
/// warning when the state first becomes non-finite.
///
/// # Example
///
/// ```
/// use double_pendulum::integration::{RK4Integrator, Integrator};
///
/// let integrator = RK4Integrator::new(1.0 / 60.0);
/// assert_eq!(integrator.timestep(), 1.0 / 60.0);
/// ```
#[derive(Debug, Clone)]
pub struct RK4Integrator {
    timestep: f64,
    steps_taken: u64,
    warn_on_invalid: bool,
    reported_invalid: bool,
}

impl RK4Integrator {
    /// Create a new RK4 integrator with the given timestep
    ///
    /// # Panics
    ///
    /// Panics if timestep is non-positive, NaN, or infinite
    pub fn new(timestep: f64) -> Self {
        assert!(
            timestep > 0.0 && timestep.is_finite(),
            "Timestep must be positive and finite"
        );
        RK4Integrator {
            timestep,
            steps_taken: 0,
            warn_on_invalid: true,
            reported_invalid: false,
        }
    }

    /// Enable or disable the warning logged when a step produces NaN/Inf
    pub fn with_invalid_warnings(mut self, enabled: bool) -> Self {
        self.warn_on_invalid = enabled;
        self
    }

    /// Number of steps performed since construction
    pub fn steps_taken(&self) -> u64 {
        self.steps_taken
    }
}

impl Integrator for RK4Integrator {
    fn name(&self) -> &str {
        "Runge-Kutta 4"
    }

    fn timestep(&self) -> f64 {
        self.timestep
    }

    fn set_timestep(&mut self, dt: f64) {
        assert!(
            dt > 0.0 && dt.is_finite(),
            "Timestep must be positive and finite"
        );
        self.timestep = dt;
    }

    fn step<'s>(&mut self, state: &'s mut PendulumState) -> &'s mut PendulumState {
        let next = rk4_step(state.params(), &state.vector(), self.timestep);
        state.set_vector(next);
        self.steps_taken += 1;

        if !next.is_valid() && self.warn_on_invalid && !self.reported_invalid {
            warn!(
                step = self.steps_taken,
                dt = self.timestep,
                "RK4 produced a non-finite pendulum state; the dynamics have degenerated"
            );
            self.reported_invalid = true;
        }

        state
    }
}
