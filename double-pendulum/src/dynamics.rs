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
//! Equations of motion for the planar double pendulum
//!
//! The accelerations come from the Euler-Lagrange equations of two point
//! masses on massless rigid links. Writing `Δ = theta1 - theta2` and
//! `μ = mass2 / (mass1 + mass2)`:
//!
//! ```text
//! A1 = (len2/len1) * μ * cos(Δ)
//! A2 = (len1/len2) * cos(Δ)
//! f1 = -(len2/len1) * μ * omega2² * sin(Δ) - (g/len1) * sin(theta1)
//! f2 =  (len1/len2) * omega1² * sin(Δ)     - (g/len2) * sin(theta2)
//! alpha1 = (f1 - A1*f2) / (1 - A1*A2)
//! alpha2 = (f2 - A2*f1) / (1 - A1*A2)
//! ```
//!
//! # Degeneracy
//!
//! The shared denominator `1 - A1*A2` equals `1 - μ cos²(Δ)`, so it is
//! bounded below by `mass1 / (mass1 + mass2)`; the length ratios cancel.
//! It approaches zero only when `mass1` becomes negligible next to `mass2`
//! and the links are nearly aligned. Such parameter choices produce very
//! large accelerations and, eventually, NaN/Inf in the state. The division
//! is deliberately left unguarded because clamping it would change the
//! simulated dynamics.

use crate::pendulum::{PendulumParams, PendulumState, StateVector};

/// A first-order system `dy/dt = f(y)` over a four-component state vector
///
/// Implemented by [`PendulumParams`] for the double pendulum. Integrators
/// are generic over this trait so they can be checked against systems with
/// known analytical solutions.
pub trait EquationOfMotion {
    /// Evaluate the time derivative of `y`
    fn derivative(&self, y: &StateVector) -> StateVector;
}

impl EquationOfMotion for PendulumParams {
    fn derivative(&self, y: &StateVector) -> StateVector {
        derivative(self, y)
    }
}

/// Map `(theta1, theta2, omega1, omega2)` to `(omega1, omega2, alpha1, alpha2)`
///
/// Pure function of the state vector and the parameters. No error is
/// signalled for degenerate configurations; see the module documentation.
///
/// # Examples
///
/// ```
/// use double_pendulum::dynamics::derivative;
/// use double_pendulum::pendulum::{PendulumParams, StateVector};
///
/// let params = PendulumParams::new(1.0, 1.0, 1.0, 1.0, 9.81);
/// let dy = derivative(&params, &StateVector::zero());
/// assert_eq!(dy, StateVector::zero());
/// ```
pub fn derivative(params: &PendulumParams, y: &StateVector) -> StateVector {
    let [theta1, theta2, omega1, omega2] = y.0;
    let (len1, len2, g) = (params.len1(), params.len2(), params.g());
    let mu = params.mass_ratio();

    let (sin_d, cos_d) = (theta1 - theta2).sin_cos();

    let a1 = (len2 / len1) * mu * cos_d;
    let a2 = (len1 / len2) * cos_d;

    let f1 = -(len2 / len1) * mu * (omega2 * omega2) * sin_d - (g / len1) * theta1.sin();
    let f2 = (len1 / len2) * (omega1 * omega1) * sin_d - (g / len2) * theta2.sin();

    let denominator = 1.0 - a1 * a2;
    let alpha1 = (f1 - a1 * f2) / denominator;
    let alpha2 = (f2 - a2 * f1) / denominator;

    StateVector::new(omega1, omega2, alpha1, alpha2)
}

/// Angular accelerations `(alpha1, alpha2)` at the current state
pub fn angular_accelerations(state: &PendulumState) -> (f64, f64) {
    let [_, _, alpha1, alpha2] = derivative(state.params(), &state.vector()).0;
    (alpha1, alpha2)
}

/// The coupling denominator `1 - A1*A2` for the given angles
///
/// Diagnostic only: values close to zero mark configurations where the
/// accelerations blow up. Nothing in the integrator consults it.
pub fn coupling_denominator(params: &PendulumParams, theta1: f64, theta2: f64) -> f64 {
    let cos_d = (theta1 - theta2).cos();
    let a1 = (params.len2() / params.len1()) * params.mass_ratio() * cos_d;
    let a2 = (params.len1() / params.len2()) * cos_d;
    1.0 - a1 * a2
}
