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
//! Tests verifying RK4 accuracy, determinism, and symmetry for the pendulum
//!
//! The double pendulum has no closed-form solution, so accuracy is measured
//! against a reference trajectory integrated with a much finer timestep.

use double_pendulum::integration::{rk4_step, step, Integrator, RK4Integrator};
use double_pendulum::pendulum::{PendulumParams, PendulumState, StateVector};

fn unit_params() -> PendulumParams {
    PendulumParams::new(1.0, 1.0, 1.0, 1.0, 9.81)
}

/// Integrate `y` over `duration` using `substeps` RK4 steps
fn integrate(params: &PendulumParams, y: StateVector, duration: f64, substeps: usize) -> StateVector {
    let h = duration / substeps as f64;
    (0..substeps).fold(y, |acc, _| rk4_step(params, &acc, h))
}

fn distance(a: StateVector, b: StateVector) -> f64 {
    (a + -b).max_abs()
}

/// Test RK4 local truncation error scales as O(dt⁵)
///
/// Halving the timestep should shrink the one-step error by about 2⁵ = 32.
#[test]
fn test_rk4_local_error_order() {
    let params = unit_params();
    let y0 = StateVector::new(1.0, 0.5, 0.3, -0.2);

    let local_error = |dt: f64| {
        let reference = integrate(&params, y0, dt, 2000);
        distance(rk4_step(&params, &y0, dt), reference)
    };

    let e_coarse = local_error(0.02);
    let e_fine = local_error(0.01);
    let ratio = e_coarse / e_fine;

    assert!(
        (25.0..40.0).contains(&ratio),
        "Local error ratio {:.2} should be near 32 (errors {:.3e}, {:.3e})",
        ratio,
        e_coarse,
        e_fine
    );
}

/// Two half steps versus one full step differ by O(dt⁵)
#[test]
fn test_rk4_step_doubling_difference_order() {
    let params = unit_params();
    let y0 = StateVector::new(-0.8, 1.4, 0.0, 0.5);

    let doubling_gap = |dt: f64| {
        let one = rk4_step(&params, &y0, dt);
        let two = integrate(&params, y0, dt, 2);
        distance(one, two)
    };

    let ratio = doubling_gap(0.02) / doubling_gap(0.01);
    assert!(
        (25.0..40.0).contains(&ratio),
        "Step-doubling gap ratio {:.2} should be near 32",
        ratio
    );
}

/// Global error over a fixed time span scales as O(dt⁴)
#[test]
fn test_rk4_global_error_order() {
    let params = unit_params();
    let y0 = StateVector::new(1.0, 0.5, 0.0, 0.0);
    let t_final = 1.0;
    let reference = integrate(&params, y0, t_final, 20_000);

    let e_coarse = distance(integrate(&params, y0, t_final, 50), reference);
    let e_fine = distance(integrate(&params, y0, t_final, 100), reference);
    let ratio = e_coarse / e_fine;

    assert!(
        (12.0..20.0).contains(&ratio),
        "Global error ratio {:.2} should be near 16",
        ratio
    );
}

#[test]
fn test_determinism() {
    let params = PendulumParams::new(1.3, 0.7, 2.0, 1.0, 9.81);
    let run = || {
        let mut state = PendulumState::new(2.2, -1.0, 0.5, -3.0, params);
        let mut integrator = RK4Integrator::new(0.005);
        let mut trajectory = Vec::with_capacity(1000);
        for _ in 0..1000 {
            integrator.step(&mut state);
            trajectory.push(state.vector());
        }
        trajectory
    };

    assert_eq!(run(), run(), "Trajectories must be bit-identical");
}

#[test]
fn test_equilibrium_is_fixed_point() {
    let mut state = PendulumState::at_rest(0.0, 0.0, unit_params());
    for _ in 0..1000 {
        step(&mut state, 0.01);
    }
    assert_eq!(state.vector(), StateVector::zero());
}

#[test]
fn test_equilibrium_with_uneven_parameters() {
    let params = PendulumParams::new(180.0, 260.0, 3.0, 17.0, 1.0);
    let mut state = PendulumState::at_rest(0.0, 0.0, params);
    let mut integrator = RK4Integrator::new(0.5);
    for _ in 0..500 {
        integrator.step(&mut state);
    }
    assert_eq!(state.vector(), StateVector::zero());
}

#[test]
fn test_negation_symmetry_single_step() {
    let params = PendulumParams::new(1.1, 0.9, 1.5, 0.5, 9.81);
    let y = StateVector::new(0.7, -1.9, 1.3, 0.4);

    let forward = rk4_step(&params, &y, 0.01);
    let mirrored = rk4_step(&params, &-y, 0.01);

    assert!(
        distance(forward, -mirrored) < 1e-12,
        "step(-y) should equal -step(y)"
    );
}

#[test]
fn test_negation_symmetry_trajectory() {
    let params = unit_params();
    let mut state = PendulumState::new(1.0, -0.4, 0.2, 0.9, params);
    let mut mirror = PendulumState::from_vector(-state.vector(), params);

    for _ in 0..50 {
        step(&mut state, 0.01);
        step(&mut mirror, 0.01);
    }

    assert!(
        distance(state.vector(), -mirror.vector()) < 1e-9,
        "Mirrored trajectory diverged from the negated original"
    );
}

#[test]
fn test_small_oscillation_period() {
    // Linearised equal-mass, equal-length pendulum: the in-phase normal mode
    // has ω² = (2 - √2) g / l with amplitude ratio θ2/θ1 = √2.
    let g = 9.81;
    let params = PendulumParams::new(1.0, 1.0, 1.0, 1.0, g);
    let amplitude = 1e-4;
    let mut state = PendulumState::at_rest(amplitude, amplitude * 2f64.sqrt(), params);

    let omega = ((2.0 - 2f64.sqrt()) * g).sqrt();
    let period = 2.0 * std::f64::consts::PI / omega;
    let steps = 10_000;
    let dt = period / steps as f64;
    for _ in 0..steps {
        step(&mut state, dt);
    }

    assert!(
        (state.theta1() - amplitude).abs() < 1e-3 * amplitude,
        "After one normal-mode period theta1 = {:.6e}, expected {:.6e}",
        state.theta1(),
        amplitude
    );
}
