//! Small vector helpers on top of [`glam::Vec2`]

use glam::Vec2;
use rand::Rng;

/// Tolerance for epsilon-based vector equality.
pub const EPSILON: f32 = 1e-6;

/// Component-wise approximate equality, tolerating floating-point drift.
#[inline]
pub fn approx_eq(a: Vec2, b: Vec2) -> bool {
    a.abs_diff_eq(b, EPSILON)
}

/// Unit vector pointing in a uniformly random direction.
pub fn random_unit_vector(rng: &mut impl Rng) -> Vec2 {
    let angle = rng.random::<f32>() * std::f32::consts::TAU;
    Vec2::new(angle.cos(), angle.sin())
}
