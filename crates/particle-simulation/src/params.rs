//! Simulation parameters for runtime tuning

use particle_physics::{DEFAULT_BOUNCE, PARTICLE_RADIUS};

/// Tunable parameters of a [`crate::Simulation`].
///
/// Defaults mirror the reference behavior: 1000 particles cycling through 7
/// species in an 800x800 domain, one 1/300 s physics sub-step per frame.
#[derive(Clone, Copy, Debug)]
pub struct SimParams {
    /// Physics sub-step size in seconds.
    pub dt: f32,
    /// Number of physics sub-steps per [`crate::Simulation::step`] call.
    pub substeps: u32,
    /// Particles spawned by the random-placement constructors.
    pub particle_count: usize,
    /// How many of the canonical species the spawner cycles through.
    pub species_count: usize,
    /// Domain extent in pixels.
    pub width: f32,
    pub height: f32,
    /// Particle radius for boundary clamping.
    pub particle_radius: f32,
    /// Wall bounce factor (1.0 = perfectly elastic).
    pub bounce: f32,
}

impl Default for SimParams {
    fn default() -> Self {
        Self {
            dt: 1.0 / 300.0,
            substeps: 1,
            particle_count: 1000,
            species_count: 7,
            width: 800.0,
            height: 800.0,
            particle_radius: PARTICLE_RADIUS,
            bounce: DEFAULT_BOUNCE,
        }
    }
}
