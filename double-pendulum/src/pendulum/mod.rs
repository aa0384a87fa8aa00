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
//! Pendulum state representation
//!
//! [`PendulumParams`] holds the fixed physical constants; [`PendulumState`]
//! holds the two angles and angular velocities that evolve each tick.

mod params;
mod state;

pub use params::PendulumParams;
pub use state::{initialize, PendulumState, StateVector};
