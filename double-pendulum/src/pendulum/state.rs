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
//! Pendulum state and the four-component state vector
//!
//! The state is fully described by two angles measured from the downward
//! vertical and their angular velocities. Angles are never wrapped into
//! `[0, 2π)`: only their sines and cosines are ever consumed.

use super::PendulumParams;
use crate::error::ParamError;
use std::ops::{Add, Mul, Neg};

/// State vector `(theta1, theta2, omega1, omega2)`
///
/// Also used for its time derivative `(omega1, omega2, alpha1, alpha2)`, so
/// it supports the vector-space operations the integrator needs.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct StateVector(pub [f64; 4]);

impl StateVector {
    /// Create a state vector from its components
    pub fn new(theta1: f64, theta2: f64, omega1: f64, omega2: f64) -> Self {
        StateVector([theta1, theta2, omega1, omega2])
    }

    /// The zero vector
    pub fn zero() -> Self {
        StateVector([0.0; 4])
    }

    /// Get the components as an array
    pub fn as_array(&self) -> [f64; 4] {
        self.0
    }

    /// Create a state vector from an array
    pub fn from_array(arr: [f64; 4]) -> Self {
        StateVector(arr)
    }

    /// Check if all components are finite (not NaN or infinite)
    pub fn is_valid(&self) -> bool {
        self.0.iter().all(|c| c.is_finite())
    }

    /// Largest absolute component
    pub fn max_abs(&self) -> f64 {
        self.0.iter().fold(0.0_f64, |acc, c| acc.max(c.abs()))
    }
}

impl Add for StateVector {
    type Output = StateVector;

    fn add(self, rhs: StateVector) -> StateVector {
        let [a0, a1, a2, a3] = self.0;
        let [b0, b1, b2, b3] = rhs.0;
        StateVector([a0 + b0, a1 + b1, a2 + b2, a3 + b3])
    }
}

impl Mul<f64> for StateVector {
    type Output = StateVector;

    fn mul(self, rhs: f64) -> StateVector {
        StateVector(self.0.map(|c| c * rhs))
    }
}

impl Neg for StateVector {
    type Output = StateVector;

    fn neg(self) -> StateVector {
        StateVector(self.0.map(|c| -c))
    }
}

/// Instantaneous configuration of the double pendulum plus its fixed parameters
///
/// A state is created once and then overwritten in place by an integrator on
/// every tick. It has no identity beyond its values.
///
/// # Examples
///
/// ```
/// use double_pendulum::pendulum::{PendulumParams, PendulumState};
///
/// let state = PendulumState::new(0.5, -0.5, 0.0, 0.0, PendulumParams::default());
/// assert_eq!(state.theta1(), 0.5);
/// assert!(state.is_valid());
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PendulumState {
    theta1: f64,
    theta2: f64,
    omega1: f64,
    omega2: f64,
    params: PendulumParams,
}

impl PendulumState {
    /// Create a state from initial angles, angular velocities, and parameters
    pub fn new(theta1: f64, theta2: f64, omega1: f64, omega2: f64, params: PendulumParams) -> Self {
        PendulumState {
            theta1,
            theta2,
            omega1,
            omega2,
            params,
        }
    }

    /// Create a state at rest at the given angles
    pub fn at_rest(theta1: f64, theta2: f64, params: PendulumParams) -> Self {
        PendulumState::new(theta1, theta2, 0.0, 0.0, params)
    }

    /// Create a state from a state vector
    pub fn from_vector(vector: StateVector, params: PendulumParams) -> Self {
        let [theta1, theta2, omega1, omega2] = vector.0;
        PendulumState::new(theta1, theta2, omega1, omega2, params)
    }

    /// Angle of link 1 from the downward vertical (radians)
    pub fn theta1(&self) -> f64 {
        self.theta1
    }

    /// Angle of link 2 from the downward vertical (radians)
    pub fn theta2(&self) -> f64 {
        self.theta2
    }

    /// Angular velocity of link 1
    pub fn omega1(&self) -> f64 {
        self.omega1
    }

    /// Angular velocity of link 2
    pub fn omega2(&self) -> f64 {
        self.omega2
    }

    /// Fixed physical parameters
    pub fn params(&self) -> &PendulumParams {
        &self.params
    }

    /// Current state vector `(theta1, theta2, omega1, omega2)`
    pub fn vector(&self) -> StateVector {
        StateVector::new(self.theta1, self.theta2, self.omega1, self.omega2)
    }

    /// Overwrite the four dynamic fields; parameters are untouched
    pub fn set_vector(&mut self, vector: StateVector) {
        let [theta1, theta2, omega1, omega2] = vector.0;
        self.theta1 = theta1;
        self.theta2 = theta2;
        self.omega1 = omega1;
        self.omega2 = omega2;
    }

    /// Check if the dynamic fields are all finite
    pub fn is_valid(&self) -> bool {
        self.vector().is_valid()
    }

    /// Validate parameters and initial conditions
    ///
    /// # Errors
    ///
    /// Returns [`ParamError`] for a non-positive parameter or a non-finite
    /// angle or angular velocity.
    pub fn validate(&self) -> Result<(), ParamError> {
        self.params.validate()?;
        let fields = [
            ("theta1", self.theta1),
            ("theta2", self.theta2),
            ("omega1", self.omega1),
            ("omega2", self.omega2),
        ];
        for (name, value) in fields {
            if !value.is_finite() {
                return Err(ParamError::NonFinite { name, value });
            }
        }
        Ok(())
    }
}

/// Create a pendulum state from initial conditions and parameters
///
/// No validation is performed; see [`PendulumState::validate`].
#[allow(clippy::too_many_arguments)]
pub fn initialize(
    theta1: f64,
    theta2: f64,
    omega1: f64,
    omega2: f64,
    len1: f64,
    len2: f64,
    mass1: f64,
    mass2: f64,
    g: f64,
) -> PendulumState {
    PendulumState::new(
        theta1,
        theta2,
        omega1,
        omega2,
        PendulumParams::new(len1, len2, mass1, mass2, g),
    )
}
