//! Tunable constants for the particle-life force law and integrator
//!
//! Values are scaled for a pixel-sized domain and real-time visualization.

/// Interaction cutoff: particles farther apart than this exert no force
/// on each other.
pub const PROCESSING_RADIUS: f32 = 120.0;

/// Inner cutoff of the short-range pressure regime. Below this distance the
/// only contribution is affinity-independent repulsion.
pub const DENSITY_RADIUS: f32 = 40.0;

/// Peak magnitude of the short-range pressure (reached at zero distance).
pub const MAX_PRESSURE_ACCEL: f32 = 5000.0;

/// Peak magnitude of the affinity-driven far-field force (reached at the
/// midpoint between [`DENSITY_RADIUS`] and [`PROCESSING_RADIUS`]).
pub const MAX_ATTRACTION_ACCEL: f32 = 5000.0;

/// Magnitude of the randomized kick separating exactly-stacked particles.
pub const STACKED_ACCEL: f32 = 10_000.0;

/// Cap on the net acceleration magnitude after summing all neighbors.
pub const MAX_ACCEL: f32 = 250_000.0;

/// Per-component velocity clamp applied by the integrator.
pub const MAX_VELOCITY: f32 = 5000.0;

/// Frictional damping is `FRICTION_BASE^(FRICTION_RATE * dt)` per step,
/// which keeps the decay per simulated second independent of the timestep.
pub const FRICTION_BASE: f32 = 0.6;
pub const FRICTION_RATE: f32 = 60.0;

/// Elastic wall bounce by default.
pub const DEFAULT_BOUNCE: f32 = 1.0;

/// Particle radius used for rendering and for boundary clamping.
pub const PARTICLE_RADIUS: f32 = 5.0;
