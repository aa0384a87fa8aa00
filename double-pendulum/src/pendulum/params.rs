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
//! Fixed physical parameters of the two-link pendulum

use crate::error::ParamError;
use serde::{Deserialize, Serialize};

/// Link lengths, bob masses, and gravitational acceleration
///
/// Parameters are fixed for the lifetime of a simulation. Fields are private
/// so a [`PendulumState`](super::PendulumState) cannot have its parameters
/// mutated after construction.
///
/// Construction does not validate: the physics core trusts its caller to
/// supply positive, finite values. Call [`validate`](Self::validate) when the
/// values come from an untrusted source.
///
/// # Examples
///
/// ```
/// use double_pendulum::pendulum::PendulumParams;
///
/// let params = PendulumParams::new(1.0, 1.0, 1.0, 1.0, 9.81);
/// assert!(params.validate().is_ok());
/// assert_eq!(params.mass_ratio(), 0.5);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PendulumParams {
    len1: f64,
    len2: f64,
    mass1: f64,
    mass2: f64,
    g: f64,
}

impl PendulumParams {
    /// Create a new parameter set
    pub fn new(len1: f64, len2: f64, mass1: f64, mass2: f64, g: f64) -> Self {
        PendulumParams {
            len1,
            len2,
            mass1,
            mass2,
            g,
        }
    }

    /// Length of the upper link (pivot to bob 1)
    pub fn len1(&self) -> f64 {
        self.len1
    }

    /// Length of the lower link (bob 1 to bob 2)
    pub fn len2(&self) -> f64 {
        self.len2
    }

    /// Mass of bob 1
    pub fn mass1(&self) -> f64 {
        self.mass1
    }

    /// Mass of bob 2
    pub fn mass2(&self) -> f64 {
        self.mass2
    }

    /// Gravitational acceleration
    pub fn g(&self) -> f64 {
        self.g
    }

    /// Fraction of the total mass carried by bob 2: `mass2 / (mass1 + mass2)`
    pub fn mass_ratio(&self) -> f64 {
        self.mass2 / (self.mass1 + self.mass2)
    }

    /// Depth of the potential well: `g * (mass1*len1 + mass2*(len1 + len2))`
    ///
    /// Used as an energy scale when the total energy itself is near zero,
    /// e.g. with both links horizontal.
    pub fn characteristic_energy(&self) -> f64 {
        self.g * (self.mass1 * self.len1 + self.mass2 * (self.len1 + self.len2))
    }

    /// Check that every parameter is positive and finite
    ///
    /// # Errors
    ///
    /// Returns [`ParamError::NonPositive`] naming the first offending parameter.
    pub fn validate(&self) -> Result<(), ParamError> {
        let fields = [
            ("len1", self.len1),
            ("len2", self.len2),
            ("mass1", self.mass1),
            ("mass2", self.mass2),
            ("g", self.g),
        ];
        for (name, value) in fields {
            if !(value > 0.0 && value.is_finite()) {
                return Err(ParamError::NonPositive { name, value });
            }
        }
        Ok(())
    }
}

impl Default for PendulumParams {
    /// Screen-scale parameters: links of 180 and 260 units, equal masses of
    /// 10, and unit gravity
    fn default() -> Self {
        PendulumParams::new(180.0, 260.0, 10.0, 10.0, 1.0)
    }
}
