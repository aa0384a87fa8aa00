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
//! Headless double pendulum run
//!
//! Stands in for a renderer: loads a configuration (or uses the defaults),
//! ticks the simulation at a fixed timestep, and prints the lower bob's
//! position and the energy drift every few frames. With `--ensemble N` it
//! runs N pendulums a hair apart and reports how far they separate.
//!
//! ```text
//! cargo run --example headless -- --ticks 600 --report-every 60
//! cargo run --example headless -- --config pendulum.toml --ensemble 8
//! RUST_LOG=debug cargo run --example headless
//! ```

use clap::Parser;
use double_pendulum::config::SimulationConfig;
use double_pendulum::ensemble::Ensemble;
use double_pendulum::Simulation;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "headless")]
#[command(version)]
#[command(about = "Run the double pendulum without a renderer")]
struct Args {
    /// Path to a TOML configuration; defaults are used when omitted
    #[arg(short, long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Number of ticks (frames) to simulate
    #[arg(short, long, default_value_t = 600)]
    ticks: usize,

    /// Print a status line every N ticks
    #[arg(long, default_value_t = 60)]
    report_every: usize,

    /// Run N perturbed pendulums instead of one
    #[arg(long, value_name = "N")]
    ensemble: Option<usize>,

    /// Initial theta1 offset between ensemble members (radians)
    #[arg(long, default_value_t = 1e-6)]
    delta: f64,

    /// Write the effective configuration as TOML and exit
    #[arg(long)]
    dump_config: bool,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .compact()
        .init();

    let args = Args::parse();
    let config = match &args.config {
        Some(path) => SimulationConfig::load(path)?,
        None => SimulationConfig::default(),
    };

    if args.dump_config {
        print!("{}", config.to_toml_string()?);
        return Ok(());
    }

    let report_every = args.report_every.max(1);

    match args.ensemble {
        Some(count) => run_ensemble(&config, count, args.delta, args.ticks, report_every),
        None => run_single(&config, args.ticks, report_every),
    }

    Ok(())
}

fn run_single(config: &SimulationConfig, ticks: usize, report_every: usize) {
    println!("Double Pendulum - Headless Run");
    println!("==============================\n");

    let mut sim = Simulation::from_config(config);
    println!("Initial energy: {:.4}", sim.monitor().baseline());
    println!("Timestep: {}\n", config.integrator.dt);
    println!("  tick      time        x2          y2      energy    drift     health");

    for _ in 0..ticks {
        let frame = sim.tick();
        if frame.tick as usize % report_every == 0 {
            println!(
                "{:6} {:9.2} {:11.3} {:11.3} {:11.4} {:9.2e}  {}",
                frame.tick,
                frame.time,
                frame.positions.bob2.x,
                frame.positions.bob2.y,
                frame.energy,
                sim.monitor().relative_drift(),
                frame.health
            );
        }
    }

    println!("\nPeak relative drift: {:.3e}", sim.monitor().peak_relative_drift());
    if let Some(trail) = sim.trail() {
        println!("Trail: {} points, path length {:.1}", trail.len(), trail.path_length());
    }
}

fn run_ensemble(config: &SimulationConfig, count: usize, delta: f64, ticks: usize, report_every: usize) {
    println!("Double Pendulum - Ensemble of {} (delta = {:e})", count, delta);
    println!("==============================================\n");

    let mut ensemble = Ensemble::perturbed(config, count, delta);
    println!("  tick      time   max divergence");

    for tick in 1..=ticks {
        ensemble.tick_all();
        if tick % report_every == 0 {
            let time = ensemble.get(0).map(|m| m.time()).unwrap_or_default();
            println!("{:6} {:9.2} {:16.6e}", tick, time, ensemble.max_divergence());
        }
    }

    #[cfg(feature = "parallel")]
    println!("\n[Members ticked in parallel via Rayon]");

    #[cfg(not(feature = "parallel"))]
    println!("\n[Members ticked sequentially]");
}
