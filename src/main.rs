//! Particle Life
//!
//! Headless driver for the particle-life simulation: spawns a population
//! cycling through the species palette, steps the physics at a fixed frame
//! cadence, and periodically logs population statistics. Rendering hosts
//! draw each particle as a filled circle at `particle.position()` in
//! `particle.color()`; this binary only exercises the core loop.

use std::time::{Duration, Instant};

use particle_simulation::{SimParams, Simulation};

const FRAME_RATE: f32 = 60.0;
const RUN_FRAMES: u32 = 1800;
const LOG_EVERY: u32 = 60;

fn main() {
    env_logger::init();

    let params = SimParams::default();
    let mut sim = Simulation::new(params);

    let frame_budget = Duration::from_secs_f32(1.0 / FRAME_RATE);
    let started = Instant::now();

    for frame in 0..RUN_FRAMES {
        let frame_start = Instant::now();
        sim.step();

        if frame % LOG_EVERY == 0 {
            log_population(&sim, frame);
        }

        // Fixed frame pacing; physics stays on its own sub-step size.
        if let Some(remaining) = frame_budget.checked_sub(frame_start.elapsed()) {
            std::thread::sleep(remaining);
        }
    }

    log::info!(
        "simulated {} frames in {:.1?}",
        RUN_FRAMES,
        started.elapsed()
    );
}

fn log_population(sim: &Simulation, frame: u32) {
    let particles = sim.particles();
    if particles.is_empty() {
        return;
    }

    let mean_speed = particles
        .iter()
        .map(|p| p.velocity().length())
        .sum::<f32>()
        / particles.len() as f32;

    let mut min = particles[0].position();
    let mut max = min;
    for p in particles {
        min = min.min(p.position());
        max = max.max(p.position());
    }

    log::info!(
        "frame {frame}: mean speed {mean_speed:.1}, population extent [{:.0}, {:.0}] x [{:.0}, {:.0}]",
        min.x,
        max.x,
        min.y,
        max.y
    );
}
