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
//! Trail of past positions of the lower bob
//!
//! Presentation-side record of where bob 2 has been, appended once per tick
//! and drawn as a polyline by a renderer. Unbounded and append-only; nothing
//! in the physics core reads it.

use crate::kinematics::Point2;

/// Append-only sequence of bob-2 positions
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Trail {
    points: Vec<Point2>,
}

impl Trail {
    /// Create an empty trail
    pub fn new() -> Self {
        Trail { points: Vec::new() }
    }

    /// Create an empty trail with room for `capacity` points
    pub fn with_capacity(capacity: usize) -> Self {
        Trail {
            points: Vec::with_capacity(capacity),
        }
    }

    /// Append a position
    pub fn push(&mut self, point: Point2) {
        self.points.push(point);
    }

    /// Number of recorded points
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Whether no points have been recorded
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Most recent point
    pub fn last(&self) -> Option<&Point2> {
        self.points.last()
    }

    /// All points in recording order
    pub fn points(&self) -> &[Point2] {
        &self.points
    }

    /// Iterate over points in recording order
    pub fn iter(&self) -> std::slice::Iter<'_, Point2> {
        self.points.iter()
    }

    /// Consecutive point pairs, i.e. the line segments of the polyline
    pub fn segments(&self) -> impl Iterator<Item = (Point2, Point2)> + '_ {
        self.points.windows(2).map(|w| (w[0], w[1]))
    }

    /// Total length of the polyline
    pub fn path_length(&self) -> f64 {
        self.segments().map(|(a, b)| a.distance(&b)).sum()
    }
}

impl<'a> IntoIterator for &'a Trail {
    type Item = &'a Point2;
    type IntoIter = std::slice::Iter<'a, Point2>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
