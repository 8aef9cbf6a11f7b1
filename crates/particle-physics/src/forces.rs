//! The net-acceleration force law
//!
//! Exhaustive pairwise scan over a frozen particle snapshot, combining
//! short-range pressure with an affinity-weighted far-field band, then
//! capping the total and reflecting it at the walls.

use glam::Vec2;
use rand::Rng;

use crate::constants::*;
use crate::math;
use crate::particle::{Bounds, Particle};

/// Width of the far-field band.
const BAND: f32 = PROCESSING_RADIUS - DENSITY_RADIUS;

/// Net acceleration on `particles[target]` from every other particle in the
/// snapshot.
///
/// Neighbors beyond [`PROCESSING_RADIUS`] contribute nothing (checked on the
/// squared distance, so skipped pairs cost no square root). Exactly-stacked
/// neighbors contribute a randomized separating kick instead of a zero-force
/// singularity. Within [`DENSITY_RADIUS`] the contribution is pure repulsion,
/// linear from [`MAX_PRESSURE_ACCEL`] at contact down to zero at the band
/// edge; beyond it the contribution follows a tent profile peaking midway
/// through the band, signed by the species affinity.
pub fn net_acceleration(
    target: usize,
    particles: &[Particle],
    bounds: &Bounds,
    rng: &mut impl Rng,
) -> Vec2 {
    let me = &particles[target];
    let mut accel = Vec2::ZERO;

    for (i, other) in particles.iter().enumerate() {
        if i == target {
            continue;
        }

        let v = other.position() - me.position();
        let dist_sq = v.length_squared();
        if dist_sq > PROCESSING_RADIUS * PROCESSING_RADIUS {
            continue;
        }

        if math::approx_eq(me.position(), other.position()) {
            accel += math::random_unit_vector(rng) * STACKED_ACCEL;
            continue;
        }

        let dist = dist_sq.sqrt();
        let norm = v / dist;

        if dist <= DENSITY_RADIUS {
            // Pressure: affinity-independent, max at contact, zero at the
            // density radius, pushing away from the neighbor.
            accel += (1.0 - dist / DENSITY_RADIUS) * MAX_PRESSURE_ACCEL * -norm;
        } else {
            // Tent profile: zero at both band edges, peak at the midpoint.
            // `norm` carries the attraction/repulsion sign via the affinity.
            let t = (dist - DENSITY_RADIUS) / BAND;
            let shape = 1.0 - (2.0 * t - 1.0).abs();
            accel += me.attraction_to(other) * MAX_ATTRACTION_ACCEL * shape * norm;
        }
    }

    let magnitude = accel.length().clamp(0.0, MAX_ACCEL);
    accel = accel.normalize_or_zero() * magnitude;

    // A particle pinned against a wall must not keep accumulating
    // acceleration into it.
    bounds.reflect(me.position(), accel)
}
