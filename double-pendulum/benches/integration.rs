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
//! Benchmarks for pendulum integration
//!
//! These benchmarks measure:
//! - Raw cost of a single RK4 step and of the derivative evaluation
//! - Cost of a full simulation tick (step, positions, trail, energy)
//! - Ensemble throughput for different member counts

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use double_pendulum::config::SimulationConfig;
use double_pendulum::dynamics::derivative;
use double_pendulum::ensemble::Ensemble;
use double_pendulum::integration::{rk4_step, Integrator, RK4Integrator};
use double_pendulum::pendulum::{PendulumParams, PendulumState, StateVector};
use double_pendulum::Simulation;

fn chaotic_config() -> SimulationConfig {
    let mut config = SimulationConfig::default();
    config.pendulum = PendulumParams::new(1.0, 1.0, 1.0, 1.0, 9.81);
    config.initial.theta1 = 2.0;
    config.initial.theta2 = -1.5;
    config.integrator.dt = 0.005;
    config.record_trail = false;
    config
}

fn bench_single_step(c: &mut Criterion) {
    let mut group = c.benchmark_group("single_step");
    let params = PendulumParams::new(1.0, 1.0, 1.0, 1.0, 9.81);
    let y = StateVector::new(2.0, -1.5, 0.3, -0.7);

    group.bench_function("derivative", |b| {
        b.iter(|| derivative(black_box(&params), black_box(&y)))
    });

    group.bench_function("rk4_step", |b| {
        b.iter(|| rk4_step(black_box(&params), black_box(&y), black_box(0.005)))
    });

    group.bench_function("integrator_step", |b| {
        let mut state = PendulumState::from_vector(y, params);
        let mut integrator = RK4Integrator::new(0.005);
        b.iter(|| {
            integrator.step(black_box(&mut state));
        });
    });

    group.finish();
}

fn bench_simulation_tick(c: &mut Criterion) {
    let mut group = c.benchmark_group("simulation_tick");

    group.bench_function("tick_without_trail", |b| {
        let mut sim = Simulation::from_config(&chaotic_config());
        b.iter(|| black_box(sim.tick()));
    });

    // Trail grows without bound; measure a bounded run per iteration
    group.sample_size(20);
    group.bench_function("thousand_ticks_with_trail", |b| {
        let mut config = chaotic_config();
        config.record_trail = true;
        b.iter(|| {
            let mut sim = Simulation::from_config(&config);
            black_box(sim.run(1000))
        });
    });

    group.finish();
}

fn bench_ensemble(c: &mut Criterion) {
    let mut group = c.benchmark_group("ensemble_tick");
    let config = chaotic_config();

    for member_count in [10, 100, 1000].iter() {
        group.throughput(Throughput::Elements(*member_count as u64));
        group.bench_with_input(
            BenchmarkId::new("tick_all", member_count),
            member_count,
            |b, &member_count| {
                let mut ensemble = Ensemble::perturbed(&config, member_count, 1e-6);
                b.iter(|| black_box(ensemble.tick_all()));
            },
        );
    }

    group.finish();
}

criterion_group!(benches, bench_single_step, bench_simulation_tick, bench_ensemble);
criterion_main!(benches);
