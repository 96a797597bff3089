//! Headless N-body harness
//!
//! Seeds a ball of bodies, runs a fixed number of brute-force steps and logs
//! throughput and whole-system diagnostics.

use nbody_simulation::scenarios::random_ball;
use nbody_simulation::{NBodySimulation, SimulationError};
use std::time::Instant;

const PARTICLE_COUNT: usize = 4096;
const STEP_COUNT: usize = 50;
const SPAWN_RADIUS: f32 = 50.0;
const LOG_INTERVAL: usize = 10;

fn run() -> Result<(), SimulationError> {
    let mut rng = rand::rng();
    let particles = random_ball(PARTICLE_COUNT, SPAWN_RADIUS, &mut rng);
    log::info!("✓ Initialized {} particles", particles.len());

    let mut simulation = NBodySimulation::new(particles)?;
    log::info!(
        "✓ Simulation initialized ({} worker threads, chunk size {})",
        rayon::current_num_threads(),
        simulation.chunk_size()
    );

    let initial = simulation.diagnostics();
    log::info!(
        "  centroid={:.3?} max accel={:.3}",
        initial.centroid,
        initial.max_acceleration
    );

    let start = Instant::now();
    let mut window = Instant::now();
    for step in 1..=STEP_COUNT {
        simulation.step();

        if step % LOG_INTERVAL == 0 {
            let elapsed = window.elapsed().as_secs_f64();
            let interactions = (PARTICLE_COUNT * PARTICLE_COUNT * LOG_INTERVAL) as f64;
            log::info!(
                "step {:>4}: {:.2} ms/step, {:.1} M interactions/s",
                step,
                elapsed * 1000.0 / LOG_INTERVAL as f64,
                interactions / elapsed / 1.0e6
            );
            window = Instant::now();
        }
    }
    let total = start.elapsed();

    let last = simulation.diagnostics();
    log::info!(
        "✓ {} steps in {:.2?} ({:.2} ms/step)",
        simulation.step_count(),
        total,
        total.as_secs_f64() * 1000.0 / STEP_COUNT as f64
    );
    log::info!(
        "  centroid={:.3?} momentum={:.3?} kinetic energy={:.3} max accel={:.3}",
        last.centroid,
        last.momentum,
        last.kinetic_energy,
        last.max_acceleration
    );
    log::debug!("  net acceleration={:?}", last.net_acceleration);

    Ok(())
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    log::info!("Starting brute-force N-body simulation...");

    if let Err(err) = run() {
        log::error!("simulation failed: {err}");
        std::process::exit(1);
    }
}
