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
//! # Double Pendulum
//!
//! Simulation core for a planar double pendulum: two point masses on rigid,
//! massless links, advanced with a fixed-step fourth-order Runge-Kutta
//! integrator.
//!
//! The crate is purely numeric. A renderer owns the window, input, and frame
//! pacing; once per frame it asks the core for one step and reads back bob
//! positions and total energy.
//!
//! ## Features
//!
//! - **State**: two angles and angular velocities plus fixed parameters
//! - **Equations of motion**: Lagrangian-derived accelerations, unguarded
//! - **RK4 integration**: fixed timestep, deterministic, in-place updates
//! - **Energy monitoring**: total mechanical energy and drift classification
//! - **Kinematics**: Cartesian bob positions for drawing
//! - **Ensembles**: many independent pendulums, optionally on Rayon
//!
//! ## Example
//!
//! ```rust
//! use double_pendulum::{initialize, positions, step, total_energy};
//!
//! let mut state = initialize(1.0, 0.5, 0.0, 0.0, 1.0, 1.0, 1.0, 1.0, 9.81);
//! let e0 = total_energy(&state);
//!
//! for _ in 0..100 {
//!     step(&mut state, 0.01);
//! }
//!
//! let ((x1, y1), (x2, y2)) = positions(&state).as_tuples();
//! assert!(x1.is_finite() && y1.is_finite() && x2.is_finite() && y2.is_finite());
//! assert!(((total_energy(&state) - e0) / e0).abs() < 0.01);
//! ```

#![warn(missing_docs)]

/// Configuration loading and defaults
pub mod config;

/// Equations of motion
pub mod dynamics;

/// Total mechanical energy and drift monitoring
pub mod energy;

/// Independent pendulums advanced together
pub mod ensemble;

/// Error types
pub mod error;

/// Numerical integration
pub mod integration;

/// Bob positions
pub mod kinematics;

/// Pendulum state and parameters
pub mod pendulum;

/// Per-tick simulation driver
pub mod simulation;

/// Trail of bob-2 positions
pub mod trail;

pub use energy::total_energy;
pub use integration::step;
pub use kinematics::positions;
pub use pendulum::{initialize, PendulumParams, PendulumState};
pub use simulation::{Frame, Simulation};
