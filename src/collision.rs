//! Collision response against static planes and kinematic spheres.
//!
//! Detection and response happen every substep with no persistent
//! contact state. Each particle is tested against every plane and then
//! every sphere, independently; simultaneous contacts are not iterated
//! to a consistent solution and may leave slight interpenetration.

use crate::float::Float;
use crate::particle::Particle;
use crate::vec::Vec3;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Infinite static plane through `point` facing `normal`.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Plane<F: Float> {
    pub point: Vec3<F>,
    /// Unit length.
    pub normal: Vec3<F>,
    /// Fraction of normal velocity kept (reversed) after contact.
    pub bounce: F,
    /// Fraction of tangential velocity removed on contact.
    pub friction: F,
}

impl<F: Float> Plane<F> {
    pub fn new(point: Vec3<F>, normal: Vec3<F>, bounce: F, friction: F) -> Self {
        Plane { point, normal: normal.normalize(), bounce, friction }
    }

    /// Horizontal ground at height `y`, facing up.
    pub fn ground(y: F, bounce: F, friction: F) -> Self {
        Plane {
            point: Vec3::new(F::zero(), y, F::zero()),
            normal: Vec3::unit_y(),
            bounce,
            friction,
        }
    }

    pub fn signed_distance(&self, p: Vec3<F>) -> F {
        (p - self.point).dot(self.normal)
    }

    /// Push the particle to `epsilon` above the plane, reflect the normal
    /// velocity scaled by `bounce` and damp the tangential velocity by
    /// `1 - friction`. Returns whether a contact was handled.
    pub fn resolve(&self, particle: &mut Particle<F>, epsilon: F) -> bool {
        let d = self.signed_distance(particle.position);
        if d >= epsilon {
            return false;
        }
        particle.position += self.normal.scale(epsilon - d);

        let vn = self.normal.scale(particle.velocity.dot(self.normal));
        let vt = particle.velocity - vn;
        particle.velocity = vn.scale(-self.bounce) + vt.scale(F::one() - self.friction);
        true
    }
}

/// Sphere moved by the host; its velocities feed the contact impulse.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Sphere<F: Float> {
    pub center: Vec3<F>,
    pub radius: F,
    pub velocity: Vec3<F>,
    pub angular_velocity: Vec3<F>,
    pub bounce: F,
    pub friction: F,
}

impl<F: Float> Sphere<F> {
    /// A resting sphere.
    pub fn new(center: Vec3<F>, radius: F, bounce: F, friction: F) -> Self {
        Sphere {
            center,
            radius,
            velocity: Vec3::zero(),
            angular_velocity: Vec3::zero(),
            bounce,
            friction,
        }
    }

    pub fn with_velocity(mut self, velocity: Vec3<F>) -> Self {
        self.velocity = velocity;
        self
    }

    pub fn with_angular_velocity(mut self, angular_velocity: Vec3<F>) -> Self {
        self.angular_velocity = angular_velocity;
        self
    }

    /// Velocity of the sphere surface at `point`.
    pub fn point_velocity(&self, point: Vec3<F>) -> Vec3<F> {
        self.angular_velocity.cross(point - self.center) + self.velocity
    }

    /// Snap a penetrating particle onto the sphere surface (plus `epsilon`)
    /// after applying the contact impulse. Returns whether a contact was
    /// handled.
    ///
    /// The snap is a full reposition, so a fast sphere can make the
    /// particle jump visibly.
    pub fn resolve(&self, particle: &mut Particle<F>, epsilon: F) -> bool {
        let offset = particle.position - self.center;
        if offset.length() >= self.radius + epsilon {
            return false;
        }
        let normal = offset.normalize();
        let contact = self.center + normal.scale(self.radius + epsilon);
        self.apply_impulse(particle, contact, normal);
        particle.position = contact;
        true
    }

    /// Restitution along `normal`, then Coulomb-like friction along the
    /// tangential part of the closing velocity.
    pub fn apply_impulse(&self, particle: &mut Particle<F>, contact: Vec3<F>, normal: Vec3<F>) {
        let closing = particle.velocity - self.point_velocity(contact);

        let j = -(F::one() + self.bounce) * closing.dot(normal);
        particle.velocity += normal.scale(j);

        // A zero tangent (head-on contact) normalizes to zero: no friction.
        let tangent = (closing - normal.scale(normal.dot(closing))).normalize();
        let j = -self.friction * tangent.dot(closing);
        particle.velocity += tangent.scale(j);
    }
}

/// Contacts handled during one substep.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct ContactReport {
    pub plane_contacts: usize,
    pub sphere_contacts: usize,
}

impl ContactReport {
    pub fn total(&self) -> usize {
        self.plane_contacts + self.sphere_contacts
    }
}

/// Resolve every free particle against every plane and sphere.
///
/// Attached particles follow the anchor and are skipped.
pub fn resolve_collisions<F: Float>(
    particles: &mut [Particle<F>],
    planes: &[Plane<F>],
    spheres: &[Sphere<F>],
    epsilon: F,
) -> ContactReport {
    let mut report = ContactReport::default();
    for particle in particles.iter_mut().filter(|p| !p.is_attached()) {
        for plane in planes {
            if plane.resolve(particle, epsilon) {
                report.plane_contacts += 1;
            }
        }
        for sphere in spheres {
            if sphere.resolve(particle, epsilon) {
                report.sphere_contacts += 1;
            }
        }
    }
    report
}
