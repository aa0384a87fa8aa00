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
//! Total mechanical energy and drift monitoring
//!
//! Energy is measured with the potential referenced to the pivot, with the
//! height coordinate pointing up (so a hanging bob has negative potential):
//!
//! ```text
//! y1 = -len1*cos(theta1)
//! y2 = y1 - len2*cos(theta2)
//! K1 = 0.5*mass1*len1²*omega1²
//! K2 = 0.5*mass2*(len1²*omega1² + len2²*omega2² + 2*len1*len2*omega1*omega2*cos(theta1-theta2))
//! V  = mass1*g*y1 + mass2*g*y2
//! E  = K1 + K2 + V
//! ```
//!
//! The real system conserves `E` exactly. RK4 does not, so the computed value
//! drifts slowly; [`EnergyMonitor`] exists to surface that drift. It never
//! corrects the state.

use crate::pendulum::PendulumState;
use tracing::warn;

/// Kinetic energy `K1 + K2` of both bobs
pub fn kinetic_energy(state: &PendulumState) -> f64 {
    let p = state.params();
    let (len1, len2) = (p.len1(), p.len2());
    let (w1, w2) = (state.omega1(), state.omega2());

    let k1 = 0.5 * p.mass1() * len1 * len1 * w1 * w1;
    let k2 = 0.5
        * p.mass2()
        * (len1 * len1 * w1 * w1
            + len2 * len2 * w2 * w2
            + 2.0 * len1 * len2 * w1 * w2 * (state.theta1() - state.theta2()).cos());
    k1 + k2
}

/// Gravitational potential energy relative to the pivot
pub fn potential_energy(state: &PendulumState) -> f64 {
    let p = state.params();
    let y1 = -p.len1() * state.theta1().cos();
    let y2 = y1 - p.len2() * state.theta2().cos();
    p.mass1() * p.g() * y1 + p.mass2() * p.g() * y2
}

/// Total mechanical energy: kinetic plus potential
///
/// # Examples
///
/// ```
/// use double_pendulum::energy::total_energy;
/// use double_pendulum::pendulum::{PendulumParams, PendulumState};
///
/// // Hanging straight down at rest: E = -g*(m1*l1 + m2*(l1 + l2))
/// let state = PendulumState::at_rest(0.0, 0.0, PendulumParams::new(1.0, 1.0, 1.0, 1.0, 10.0));
/// assert_eq!(total_energy(&state), -30.0);
/// ```
pub fn total_energy(state: &PendulumState) -> f64 {
    kinetic_energy(state) + potential_energy(state)
}

/// Health classification of the energy signal
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EnergyHealth {
    /// Relative drift is within tolerance
    Stable,
    /// Relative drift has exceeded the tolerance
    Drifting,
    /// The energy reading is NaN or infinite
    Diverged,
}

impl EnergyHealth {
    /// Whether the reading is still within tolerance
    pub fn is_stable(&self) -> bool {
        matches!(self, EnergyHealth::Stable)
    }
}

impl std::fmt::Display for EnergyHealth {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let label = match self {
            EnergyHealth::Stable => "stable",
            EnergyHealth::Drifting => "drifting",
            EnergyHealth::Diverged => "diverged",
        };
        f.write_str(label)
    }
}

/// Tracks total energy against its initial value
///
/// Relative drift is `|E - E0| / scale` where `scale` is the larger of
/// `|E0|` and the pendulum's [characteristic energy]. Using the
/// characteristic energy as a floor keeps the ratio meaningful when `E0`
/// happens to be near zero, as it is with both links horizontal.
///
/// [characteristic energy]: crate::pendulum::PendulumParams::characteristic_energy
///
/// # Examples
///
/// ```
/// use double_pendulum::energy::{EnergyHealth, EnergyMonitor};
/// use double_pendulum::integration::step;
/// use double_pendulum::pendulum::{PendulumParams, PendulumState};
///
/// let mut state = PendulumState::at_rest(1.0, 0.5, PendulumParams::new(1.0, 1.0, 1.0, 1.0, 9.81));
/// let mut monitor = EnergyMonitor::new(&state);
/// for _ in 0..100 {
///     step(&mut state, 0.01);
///     monitor.record(&state);
/// }
/// assert_eq!(monitor.health(), EnergyHealth::Stable);
/// ```
#[derive(Debug, Clone)]
pub struct EnergyMonitor {
    baseline: f64,
    scale: f64,
    tolerance: f64,
    last: f64,
    peak_relative_drift: f64,
    samples: u64,
    health: EnergyHealth,
}

impl EnergyMonitor {
    /// Default relative drift tolerance (1%)
    pub const DEFAULT_TOLERANCE: f64 = 0.01;

    /// Create a monitor with the default tolerance, using `state` as the baseline
    pub fn new(state: &PendulumState) -> Self {
        Self::with_tolerance(state, Self::DEFAULT_TOLERANCE)
    }

    /// Create a monitor with a custom relative tolerance
    ///
    /// # Panics
    ///
    /// Panics if tolerance is non-positive, NaN, or infinite
    pub fn with_tolerance(state: &PendulumState, tolerance: f64) -> Self {
        assert!(
            tolerance > 0.0 && tolerance.is_finite(),
            "Tolerance must be positive and finite"
        );
        let baseline = total_energy(state);
        let scale = baseline.abs().max(state.params().characteristic_energy());
        let health = if baseline.is_finite() {
            EnergyHealth::Stable
        } else {
            EnergyHealth::Diverged
        };
        EnergyMonitor {
            baseline,
            scale,
            tolerance,
            last: baseline,
            peak_relative_drift: 0.0,
            samples: 0,
            health,
        }
    }

    /// Energy at construction (or at the last [`reset`](Self::reset))
    pub fn baseline(&self) -> f64 {
        self.baseline
    }

    /// Relative tolerance used for classification
    pub fn tolerance(&self) -> f64 {
        self.tolerance
    }

    /// Most recently recorded energy
    pub fn last(&self) -> f64 {
        self.last
    }

    /// Number of samples recorded since the baseline was taken
    pub fn samples(&self) -> u64 {
        self.samples
    }

    /// Current health classification
    pub fn health(&self) -> EnergyHealth {
        self.health
    }

    /// Signed drift `E - E0` of the latest sample
    pub fn drift(&self) -> f64 {
        self.last - self.baseline
    }

    /// Relative drift of the latest sample
    pub fn relative_drift(&self) -> f64 {
        self.drift().abs() / self.scale
    }

    /// Largest relative drift seen so far
    pub fn peak_relative_drift(&self) -> f64 {
        self.peak_relative_drift
    }

    /// Compute the energy of `state`, record it, and return it
    pub fn record(&mut self, state: &PendulumState) -> f64 {
        let energy = total_energy(state);
        self.record_energy(energy);
        energy
    }

    /// Record an already computed energy reading and return the new health
    ///
    /// Logs a warning whenever the classification worsens.
    pub fn record_energy(&mut self, energy: f64) -> EnergyHealth {
        self.last = energy;
        self.samples += 1;

        let health = if !energy.is_finite() {
            EnergyHealth::Diverged
        } else {
            let relative = self.relative_drift();
            self.peak_relative_drift = self.peak_relative_drift.max(relative);
            if relative > self.tolerance {
                EnergyHealth::Drifting
            } else {
                EnergyHealth::Stable
            }
        };

        if health != self.health && health != EnergyHealth::Stable {
            warn!(
                sample = self.samples,
                energy,
                baseline = self.baseline,
                relative_drift = self.relative_drift(),
                health = %health,
                "Total energy left tolerance"
            );
        }
        self.health = health;
        health
    }

    /// Take `state` as the new baseline and clear the statistics
    pub fn reset(&mut self, state: &PendulumState) {
        *self = Self::with_tolerance(state, self.tolerance);
    }
}
