//! # Particle Life Simulation
//!
//! Step driver for the particle-life core: owns the particle population, the
//! shared attraction matrix, and the two-phase per-step update.

pub mod params;
pub mod simulation;

pub use params::*;
pub use simulation::*;
