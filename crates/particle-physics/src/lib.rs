//! # Particle Life Physics
//!
//! Core physics for a particle-life simulation: colored point particles that
//! attract or repel each other according to a species-indexed affinity table,
//! with short-range pressure, banded long-range forces, and wall bounces.

pub mod attraction;
pub mod color;
pub mod constants;
pub mod forces;
pub mod math;
pub mod particle;

pub use attraction::*;
pub use color::*;
pub use constants::*;
pub use forces::*;
pub use particle::*;
