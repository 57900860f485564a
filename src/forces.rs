//! Force accumulation: gravity, spring-dampers and aerodynamic drag.

use crate::environment::{Air, Environment};
use crate::float::Float;
use crate::particle::Particle;
use crate::spring::SpringDamper;
use crate::vec::Vec3;

/// Reset every particle's force and add its weight.
pub fn apply_gravity<F: Float>(particles: &mut [Particle<F>], gravity: Vec3<F>) {
    for p in particles.iter_mut() {
        p.reset_force();
        let weight = gravity.scale(p.mass);
        p.apply_force(weight);
    }
}

pub fn apply_springs<F: Float>(particles: &mut [Particle<F>], springs: &[SpringDamper<F>]) {
    for s in springs {
        s.apply(particles);
    }
}

/// Drag on one triangle, before splitting between its vertices.
///
/// The relative velocity is the mean vertex velocity minus the air
/// velocity. The area is projected onto the flow with the sign of
/// `v·n`, so the force always opposes motion along the face normal:
///
/// `f = -½ ρ |v|² Cd (A (v·n)/|v|) n`
///
/// Returns `None` for still air relative to the face or a degenerate
/// triangle, where the normal or flow direction is undefined.
pub fn face_drag<F: Float>(
    positions: [Vec3<F>; 3],
    velocities: [Vec3<F>; 3],
    air: &Air<F>,
) -> Option<Vec3<F>> {
    let third = F::one() / F::from_f32(3.0);
    let v = (velocities[0] + velocities[1] + velocities[2]).scale(third) - air.velocity;
    let speed = v.length();
    if speed == F::zero() {
        return None;
    }

    let cross = (positions[1] - positions[0]).cross(positions[2] - positions[0]);
    let twice_area = cross.length();
    if twice_area.is_near_zero(F::from_f32(1e-12)) {
        return None;
    }
    let normal = cross.scale(F::one() / twice_area);
    let area = twice_area * F::half();

    let projected = area * (v.dot(normal) / speed);
    let magnitude = -F::half() * air.density * speed * speed * air.drag_coefficient * projected;
    Some(normal.scale(magnitude))
}

/// Add drag from every triangle, one third to each of its particles.
pub fn apply_aerodynamics<F: Float>(
    particles: &mut [Particle<F>],
    triangles: &[[usize; 3]],
    air: &Air<F>,
) {
    if air.density == F::zero() || air.drag_coefficient == F::zero() {
        return;
    }
    let third = F::one() / F::from_f32(3.0);
    for &[a, b, c] in triangles {
        let positions = [particles[a].position, particles[b].position, particles[c].position];
        let velocities = [particles[a].velocity, particles[b].velocity, particles[c].velocity];
        if let Some(f) = face_drag(positions, velocities, air) {
            let share = f.scale(third);
            particles[a].apply_force(share);
            particles[b].apply_force(share);
            particles[c].apply_force(share);
        }
    }
}

/// Recompute all forces for one substep: gravity, springs, then drag.
pub fn accumulate<F: Float>(
    particles: &mut [Particle<F>],
    springs: &[SpringDamper<F>],
    triangles: &[[usize; 3]],
    environment: &Environment<F>,
) {
    apply_gravity(particles, environment.gravity);
    apply_springs(particles, springs);
    apply_aerodynamics(particles, triangles, &environment.air);
}
