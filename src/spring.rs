//! Linear spring-dampers between pairs of particles.

use crate::float::Float;
use crate::particle::Particle;
use crate::vec::Vec3;

/// A spring and a damper in parallel, joining two particles by index.
///
/// Particles are owned by the mesh; the spring only stores indices into
/// that storage so every spring acting on a particle accumulates into
/// the same state.
#[derive(Clone, Debug, PartialEq)]
pub struct SpringDamper<F: Float> {
    pub a: usize,
    pub b: usize,
    /// Fixed at creation.
    pub rest_length: F,
    pub spring_constant: F,
    pub damping_factor: F,
}

impl<F: Float> SpringDamper<F> {
    pub fn new(a: usize, b: usize, rest_length: F, spring_constant: F, damping_factor: F) -> Self {
        SpringDamper { a, b, rest_length, spring_constant, damping_factor }
    }

    /// Rest length is the current distance between the two particles.
    pub fn from_particles(
        a: usize,
        b: usize,
        particles: &[Particle<F>],
        spring_constant: F,
        damping_factor: F,
    ) -> Self {
        let rest_length = particles[a].position.distance(particles[b].position);
        SpringDamper { a, b, rest_length, spring_constant, damping_factor }
    }

    /// Force on particle `a`; particle `b` receives the negation.
    ///
    /// With `e` the unit axis from `a` to `b`:
    /// `F = -k (rest - dist) - c (e·va - e·vb)`, applied as `F e`.
    /// Coincident particles have no axis and produce no force.
    pub fn force(&self, particles: &[Particle<F>]) -> Vec3<F> {
        let pa = &particles[self.a];
        let pb = &particles[self.b];

        let delta = pb.position - pa.position;
        let dist = delta.length();
        if dist.is_near_zero(F::from_f32(1e-10)) {
            return Vec3::zero();
        }
        let e = delta.scale(F::one() / dist);

        let va = e.dot(pa.velocity);
        let vb = e.dot(pb.velocity);

        let magnitude = -self.spring_constant * (self.rest_length - dist)
            - self.damping_factor * (va - vb);
        e.scale(magnitude)
    }

    /// Accumulate equal and opposite forces on both endpoints.
    pub fn apply(&self, particles: &mut [Particle<F>]) {
        let f = self.force(particles);
        particles[self.a].apply_force(f);
        particles[self.b].apply_force(-f);
    }
}
