//! Particle state, the integrator, and the rectangular domain

use std::sync::Arc;

use glam::Vec2;

use crate::attraction::AttractionMatrix;
use crate::color::Color;
use crate::constants::*;

/// Rectangular simulation domain.
///
/// Positions are confined to `[radius, extent - radius]` per axis; the wall
/// rule in [`Bounds::reflect`] is shared by the integrator and the force law.
#[derive(Clone, Copy, Debug)]
pub struct Bounds {
    pub extent: Vec2,
    pub radius: f32,
    pub bounce: f32,
}

impl Bounds {
    pub fn new(width: f32, height: f32, radius: f32) -> Self {
        Self {
            extent: Vec2::new(width, height),
            radius,
            bounce: DEFAULT_BOUNCE,
        }
    }

    /// Builder method overriding the wall bounce factor (1.0 = elastic).
    pub fn with_bounce(mut self, bounce: f32) -> Self {
        self.bounce = bounce;
        self
    }

    /// Clamp a position into the domain interior.
    pub fn clamp(&self, pos: Vec2) -> Vec2 {
        Vec2::new(
            pos.x.clamp(self.radius, self.extent.x - self.radius),
            pos.y.clamp(self.radius, self.extent.y - self.radius),
        )
    }

    /// Flip any component of `v` that still points out of the domain while
    /// `pos` sits on the corresponding wall. Axes are handled independently.
    pub fn reflect(&self, pos: Vec2, mut v: Vec2) -> Vec2 {
        if pos.x <= self.radius && v.x < 0.0 {
            v.x = -self.bounce * v.x;
        }
        if pos.x >= self.extent.x - self.radius && v.x > 0.0 {
            v.x = -self.bounce * v.x;
        }
        if pos.y <= self.radius && v.y < 0.0 {
            v.y = -self.bounce * v.y;
        }
        if pos.y >= self.extent.y - self.radius && v.y > 0.0 {
            v.y = -self.bounce * v.y;
        }
        v
    }
}

/// A colored point particle.
///
/// Color is fixed at construction; position and velocity are mutated only by
/// [`Particle::advance`], once per physics step, with an externally computed
/// acceleration.
#[derive(Clone, Debug)]
pub struct Particle {
    pos: Vec2,
    vel: Vec2,
    color: Color,
    matrix: Arc<AttractionMatrix>,
}

impl Particle {
    /// Particle backed by a private randomly-initialized attraction matrix.
    pub fn new(pos: Vec2, color: Color) -> Self {
        Self::with_matrix(pos, color, Arc::new(AttractionMatrix::default()))
    }

    /// Particle sharing an attraction matrix with the rest of the population.
    pub fn with_matrix(pos: Vec2, color: Color, matrix: Arc<AttractionMatrix>) -> Self {
        Self {
            pos,
            vel: Vec2::ZERO,
            color,
            matrix,
        }
    }

    pub fn position(&self) -> Vec2 {
        self.pos
    }

    pub fn velocity(&self) -> Vec2 {
        self.vel
    }

    pub fn color(&self) -> Color {
        self.color
    }

    /// Signed affinity of this particle's species toward `other`'s species.
    pub fn attraction_to(&self, other: &Particle) -> f32 {
        self.matrix.attraction(self.color, other.color)
    }

    /// Advance velocity and position by one timestep.
    ///
    /// Kick, per-component velocity clamp, timestep-independent friction,
    /// drift, position clamp, then wall reflection.
    pub fn advance(&mut self, accel: Vec2, dt: f32, bounds: &Bounds) {
        self.vel += accel * dt;
        self.vel = self
            .vel
            .clamp(Vec2::splat(-MAX_VELOCITY), Vec2::splat(MAX_VELOCITY));

        self.vel *= FRICTION_BASE.powf(FRICTION_RATE * dt);

        self.pos += self.vel * dt;
        self.pos = bounds.clamp(self.pos);
        self.vel = bounds.reflect(self.pos, self.vel);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::RED;
    use rand::rngs::StdRng;
    use rand::{Rng, SeedableRng};

    fn bounds() -> Bounds {
        Bounds::new(800.0, 800.0, PARTICLE_RADIUS)
    }

    #[test]
    fn low_wall_flips_negative_velocity() {
        let b = bounds();
        let mut p = Particle::new(Vec2::new(PARTICLE_RADIUS, 400.0), RED);
        p.advance(Vec2::new(-30_000.0, 0.0), 1.0 / 300.0, &b);
        assert!(p.velocity().x > 0.0);
        assert_eq!(p.position().x, PARTICLE_RADIUS);
    }

    #[test]
    fn corner_reflects_both_axes() {
        let b = bounds();
        let mut p = Particle::new(Vec2::new(PARTICLE_RADIUS, PARTICLE_RADIUS), RED);
        p.advance(Vec2::new(-30_000.0, -30_000.0), 1.0 / 300.0, &b);
        assert!(p.velocity().x > 0.0);
        assert!(p.velocity().y > 0.0);
    }

    #[test]
    fn bounce_factor_scales_reflected_speed() {
        let b = bounds().with_bounce(0.5);
        let mut p = Particle::new(Vec2::new(PARTICLE_RADIUS, 400.0), RED);
        p.advance(Vec2::new(-30_000.0, 0.0), 1.0 / 300.0, &b);

        let mut elastic = Particle::new(Vec2::new(PARTICLE_RADIUS, 400.0), RED);
        elastic.advance(Vec2::new(-30_000.0, 0.0), 1.0 / 300.0, &bounds());

        assert!((p.velocity().x - 0.5 * elastic.velocity().x).abs() < 1e-3);
    }

    #[test]
    fn position_stays_confined_under_random_kicks() {
        let b = bounds();
        let mut rng = StdRng::seed_from_u64(11);
        let mut p = Particle::new(Vec2::new(400.0, 400.0), RED);

        for _ in 0..500 {
            let accel = Vec2::new(
                rng.random_range(-MAX_ACCEL..=MAX_ACCEL),
                rng.random_range(-MAX_ACCEL..=MAX_ACCEL),
            );
            p.advance(accel, 1.0 / 300.0, &b);

            let pos = p.position();
            assert!(pos.x >= b.radius && pos.x <= b.extent.x - b.radius);
            assert!(pos.y >= b.radius && pos.y <= b.extent.y - b.radius);
        }
    }

    #[test]
    fn speed_never_exceeds_the_velocity_clamp() {
        let b = bounds();
        let mut p = Particle::new(Vec2::new(400.0, 400.0), RED);
        for _ in 0..10 {
            p.advance(Vec2::splat(MAX_ACCEL), 1.0, &b);
            assert!(p.velocity().x.abs() <= MAX_VELOCITY);
            assert!(p.velocity().y.abs() <= MAX_VELOCITY);
        }
    }

    #[test]
    fn friction_decay_is_timestep_independent() {
        let b = bounds();
        let mut coarse = Particle::new(Vec2::new(400.0, 400.0), RED);
        let mut fine = coarse.clone();

        // One kick to get moving, then coast with different step sizes.
        coarse.advance(Vec2::new(60_000.0, 0.0), 1.0 / 300.0, &b);
        fine.advance(Vec2::new(60_000.0, 0.0), 1.0 / 300.0, &b);

        coarse.advance(Vec2::ZERO, 1.0 / 60.0, &b);
        for _ in 0..2 {
            fine.advance(Vec2::ZERO, 1.0 / 120.0, &b);
        }

        let rel = (coarse.velocity().x - fine.velocity().x).abs() / coarse.velocity().x.abs();
        assert!(rel < 1e-3, "relative velocity mismatch {rel}");
    }
}
