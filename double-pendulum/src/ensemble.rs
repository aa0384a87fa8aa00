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
//! Independent pendulums advanced together
//!
//! An [`Ensemble`] holds any number of [`Simulation`]s that share nothing.
//! A common use is sensitivity to initial conditions: start many pendulums a
//! hair apart and watch the trajectories separate.
//!
//! With the `parallel` feature enabled, members are ticked on the Rayon
//! thread pool. Because members never interact, the parallel and sequential
//! paths produce identical results.

use crate::config::SimulationConfig;
use crate::simulation::{Frame, Simulation};

#[cfg(feature = "parallel")]
use rayon::prelude::*;

/// A collection of independent simulations
#[derive(Debug, Clone, Default)]
pub struct Ensemble {
    members: Vec<Simulation>,
}

impl Ensemble {
    /// Create an empty ensemble
    pub fn new() -> Self {
        Ensemble {
            members: Vec::new(),
        }
    }

    /// Build `count` members from `config`, offsetting member `i`'s initial
    /// `theta1` by `i * delta`
    ///
    /// # Panics
    ///
    /// Panics if the configuration's `dt` or tolerance is invalid
    pub fn perturbed(config: &SimulationConfig, count: usize, delta: f64) -> Self {
        let members = (0..count)
            .map(|i| {
                let mut member_config = config.clone();
                member_config.initial.theta1 += i as f64 * delta;
                Simulation::from_config(&member_config)
            })
            .collect();
        Ensemble { members }
    }

    /// Add a member
    pub fn push(&mut self, simulation: Simulation) {
        self.members.push(simulation);
    }

    /// Number of members
    pub fn len(&self) -> usize {
        self.members.len()
    }

    /// Whether the ensemble has no members
    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }

    /// All members in insertion order
    pub fn members(&self) -> &[Simulation] {
        &self.members
    }

    /// Get a member by index
    pub fn get(&self, index: usize) -> Option<&Simulation> {
        self.members.get(index)
    }

    /// Tick every member once, returning frames in member order
    #[cfg(feature = "parallel")]
    pub fn tick_all(&mut self) -> Vec<Frame> {
        self.members.par_iter_mut().map(Simulation::tick).collect()
    }

    /// Tick every member once, returning frames in member order
    #[cfg(not(feature = "parallel"))]
    pub fn tick_all(&mut self) -> Vec<Frame> {
        self.members.iter_mut().map(Simulation::tick).collect()
    }

    /// Largest distance between any member's bob 2 and member 0's bob 2
    ///
    /// Returns 0.0 for ensembles with fewer than two members.
    pub fn max_divergence(&self) -> f64 {
        let Some(reference) = self.members.first() else {
            return 0.0;
        };
        let origin = crate::kinematics::positions(reference.state()).bob2;
        self.members
            .iter()
            .skip(1)
            .map(|m| crate::kinematics::positions(m.state()).bob2.distance(&origin))
            .fold(0.0, f64::max)
    }
}

impl FromIterator<Simulation> for Ensemble {
    fn from_iter<I: IntoIterator<Item = Simulation>>(iter: I) -> Self {
        Ensemble {
            members: iter.into_iter().collect(),
        }
    }
}
