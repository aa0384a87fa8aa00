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
//! Cartesian positions of the two bobs
//!
//! Positions are relative to the pivot, with `x` to the right and `y`
//! increasing downward (screen convention), so a hanging pendulum has
//! positive `y`:
//!
//! ```text
//! x1 = len1*sin(theta1)      y1 = len1*cos(theta1)
//! x2 = x1 + len2*sin(theta2) y2 = y1 + len2*cos(theta2)
//! ```
//!
//! This is the only data a renderer needs from the core. It is a pure
//! function of the state and is meant to be recomputed every tick.

use crate::pendulum::PendulumState;

/// A point in the pendulum plane
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Point2 {
    /// Horizontal offset from the pivot
    pub x: f64,
    /// Vertical offset from the pivot, positive downward
    pub y: f64,
}

impl Point2 {
    /// Create a new point
    pub fn new(x: f64, y: f64) -> Self {
        Point2 { x, y }
    }

    /// Translate by a pivot location, e.g. to get screen coordinates
    pub fn offset(&self, origin_x: f64, origin_y: f64) -> Point2 {
        Point2::new(self.x + origin_x, self.y + origin_y)
    }

    /// Distance to another point
    pub fn distance(&self, other: &Point2) -> f64 {
        (self.x - other.x).hypot(self.y - other.y)
    }

    /// Check if both coordinates are finite
    pub fn is_valid(&self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }
}

impl From<Point2> for (f64, f64) {
    fn from(p: Point2) -> Self {
        (p.x, p.y)
    }
}

/// Positions of both bobs relative to the pivot
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Positions {
    /// Bob at the end of link 1
    pub bob1: Point2,
    /// Bob at the end of link 2
    pub bob2: Point2,
}

impl Positions {
    /// Get the positions as `((x1, y1), (x2, y2))`
    pub fn as_tuples(&self) -> ((f64, f64), (f64, f64)) {
        (self.bob1.into(), self.bob2.into())
    }
}

impl From<Positions> for ((f64, f64), (f64, f64)) {
    fn from(p: Positions) -> Self {
        p.as_tuples()
    }
}

/// Compute the Cartesian position of each bob
///
/// # Examples
///
/// ```
/// use double_pendulum::kinematics::positions;
/// use double_pendulum::pendulum::{PendulumParams, PendulumState};
///
/// let state = PendulumState::at_rest(0.0, 0.0, PendulumParams::new(2.0, 3.0, 1.0, 1.0, 9.81));
/// assert_eq!(positions(&state).as_tuples(), ((0.0, 2.0), (0.0, 5.0)));
/// ```
pub fn positions(state: &PendulumState) -> Positions {
    let p = state.params();
    let (s1, c1) = state.theta1().sin_cos();
    let (s2, c2) = state.theta2().sin_cos();

    let x1 = p.len1() * s1;
    let y1 = p.len1() * c1;
    let x2 = x1 + p.len2() * s2;
    let y2 = y1 + p.len2() * c2;

    Positions {
        bob1: Point2::new(x1, y1),
        bob2: Point2::new(x2, y2),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pendulum::PendulumParams;
    use std::f64::consts::{FRAC_PI_2, PI};

    #[test]
    fn test_hanging_positions_exact() {
        let state = PendulumState::at_rest(0.0, 0.0, PendulumParams::default());
        let pos = positions(&state);
        assert_eq!(pos.bob1, Point2::new(0.0, 180.0));
        assert_eq!(pos.bob2, Point2::new(0.0, 440.0));
    }

    #[test]
    fn test_horizontal_links() {
        let state = PendulumState::at_rest(FRAC_PI_2, -FRAC_PI_2, PendulumParams::default());
        let pos = positions(&state);
        assert!((pos.bob1.x - 180.0).abs() < 1e-9);
        assert!(pos.bob1.y.abs() < 1e-9);
        assert!((pos.bob2.x - (180.0 - 260.0)).abs() < 1e-9);
        assert!(pos.bob2.y.abs() < 1e-9);
    }

    #[test]
    fn test_link_lengths_preserved() {
        let params = PendulumParams::new(1.3, 0.4, 1.0, 1.0, 9.81);
        let state = PendulumState::at_rest(2.1, -0.8, params);
        let pos = positions(&state);
        assert!((pos.bob1.distance(&Point2::default()) - 1.3).abs() < 1e-12);
        assert!((pos.bob1.distance(&pos.bob2) - 0.4).abs() < 1e-12);
    }

    #[test]
    fn test_full_turn_is_same_position() {
        let params = PendulumParams::new(1.0, 1.0, 1.0, 1.0, 9.81);
        let a = positions(&PendulumState::at_rest(0.4, 1.2, params));
        let b = positions(&PendulumState::at_rest(0.4 + 2.0 * PI, 1.2 - 4.0 * PI, params));
        assert!(a.bob2.distance(&b.bob2) < 1e-12);
    }

    #[test]
    fn test_offset_and_tuples() {
        let p = Point2::new(1.0, 2.0).offset(500.0, 100.0);
        assert_eq!(<(f64, f64)>::from(p), (501.0, 102.0));
        assert!(p.is_valid());
        assert!(!Point2::new(f64::NAN, 0.0).is_valid());
    }
}
