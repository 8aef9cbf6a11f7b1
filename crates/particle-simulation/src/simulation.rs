//! Two-phase particle-life step driver
//!
//! Every sub-step first computes all accelerations against the frozen
//! particle state, then applies them. A particle must never observe another
//! particle's same-step update, so the two phases are strictly separated via
//! a pre-allocated acceleration side table.

use std::sync::Arc;

use glam::Vec2;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use particle_physics::{forces, AttractionMatrix, Bounds, Particle, PALETTE};

use crate::SimParams;

/// A particle-life simulation: the particle population, the domain, and the
/// per-step scratch state.
pub struct Simulation {
    particles: Vec<Particle>,
    accels: Vec<Vec2>,
    bounds: Bounds,
    params: SimParams,
    rng: StdRng,
}

impl Simulation {
    /// Simulation with an OS-seeded RNG, a random attraction matrix, and
    /// randomly placed particles cycling through the species palette.
    pub fn new(params: SimParams) -> Self {
        Self::spawn(params, StdRng::from_os_rng())
    }

    /// Reproducible variant of [`Simulation::new`].
    pub fn with_seed(params: SimParams, seed: u64) -> Self {
        Self::spawn(params, StdRng::seed_from_u64(seed))
    }

    /// Simulation over a caller-built particle population.
    ///
    /// The caller decides placement, colors, and matrix sharing; the seed
    /// only drives stacked-particle separation kicks.
    pub fn from_particles(params: SimParams, particles: Vec<Particle>, seed: u64) -> Self {
        let accels = vec![Vec2::ZERO; particles.len()];
        Self {
            particles,
            accels,
            bounds: Self::bounds_of(&params),
            params,
            rng: StdRng::seed_from_u64(seed),
        }
    }

    fn spawn(params: SimParams, mut rng: StdRng) -> Self {
        let matrix = Arc::new(AttractionMatrix::random(&mut rng));
        let species_count = params.species_count.clamp(1, AttractionMatrix::SIZE);
        let bounds = Self::bounds_of(&params);

        let mut particles = Vec::with_capacity(params.particle_count);
        for i in 0..params.particle_count {
            let pos = bounds.clamp(Vec2::new(
                rng.random_range(0.0..params.width),
                rng.random_range(0.0..params.height),
            ));
            let color = PALETTE[i % species_count];
            particles.push(Particle::with_matrix(pos, color, matrix.clone()));
        }

        log::info!(
            "spawned {} particles across {} species in a {}x{} domain",
            particles.len(),
            species_count,
            params.width,
            params.height
        );

        let accels = vec![Vec2::ZERO; particles.len()];
        Self {
            particles,
            accels,
            bounds,
            params,
            rng,
        }
    }

    fn bounds_of(params: &SimParams) -> Bounds {
        Bounds::new(params.width, params.height, params.particle_radius).with_bounce(params.bounce)
    }

    /// Advance the simulation by one frame (`params.substeps` physics steps).
    pub fn step(&mut self) {
        for _ in 0..self.params.substeps {
            // Phase one: accelerations against the frozen snapshot.
            for i in 0..self.particles.len() {
                self.accels[i] =
                    forces::net_acceleration(i, &self.particles, &self.bounds, &mut self.rng);
            }

            // Phase two: apply.
            for (particle, accel) in self.particles.iter_mut().zip(&self.accels) {
                particle.advance(*accel, self.params.dt, &self.bounds);
            }
        }
    }

    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    pub fn bounds(&self) -> &Bounds {
        &self.bounds
    }

    pub fn params(&self) -> &SimParams {
        &self.params
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn spawned_particles_start_inside_the_domain_at_rest() {
        let sim = Simulation::with_seed(SimParams::default(), 5);
        let b = sim.bounds();
        for p in sim.particles() {
            let pos = p.position();
            assert!(pos.x >= b.radius && pos.x <= b.extent.x - b.radius);
            assert!(pos.y >= b.radius && pos.y <= b.extent.y - b.radius);
            assert_eq!(p.velocity(), Vec2::ZERO);
        }
    }

    #[test]
    fn spawner_cycles_through_the_requested_species() {
        let params = SimParams {
            particle_count: 20,
            species_count: 3,
            ..SimParams::default()
        };
        let sim = Simulation::with_seed(params, 5);
        for (i, p) in sim.particles().iter().enumerate() {
            assert_eq!(p.color(), PALETTE[i % 3]);
        }
    }

    #[test]
    fn oversized_species_count_is_clamped_to_the_palette() {
        let params = SimParams {
            particle_count: 30,
            species_count: 99,
            ..SimParams::default()
        };
        let sim = Simulation::with_seed(params, 5);
        assert_eq!(sim.particles()[AttractionMatrix::SIZE].color(), PALETTE[0]);
    }
}
