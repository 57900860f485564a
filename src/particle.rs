//! Point masses integrated with explicit Euler.

use crate::float::Float;
use crate::vec::Vec3;

/// A point mass of the cloth grid.
///
/// A particle with zero mass is attached: its position is driven by the
/// anchor transform and `offset` instead of by integration.
#[derive(Clone, Debug)]
pub struct Particle<F: Float> {
    pub mass: F,
    pub position: Vec3<F>,
    pub velocity: Vec3<F>,
    pub acceleration: Vec3<F>,
    pub force: Vec3<F>,
    /// Position relative to the anchor at creation time.
    pub offset: Vec3<F>,
}

impl<F: Float> Particle<F> {
    pub fn new(position: Vec3<F>, mass: F) -> Self {
        Particle {
            mass,
            position,
            velocity: Vec3::zero(),
            acceleration: Vec3::zero(),
            force: Vec3::zero(),
            offset: Vec3::zero(),
        }
    }

    /// Zero-mass particles are kinematic.
    pub fn is_attached(&self) -> bool {
        self.mass == F::zero()
    }

    pub fn reset_force(&mut self) {
        self.force = Vec3::zero();
    }

    pub fn apply_force(&mut self, force: Vec3<F>) {
        self.force += force;
    }

    /// Semi-implicit Euler: velocity first, then position with the new velocity.
    /// Attached particles are left alone.
    pub fn integrate(&mut self, dt: F) {
        if self.is_attached() {
            return;
        }
        self.acceleration = self.force.scale(F::one() / self.mass);
        self.velocity += self.acceleration.scale(dt);
        self.position += self.velocity.scale(dt);
    }

    /// Snap to `target` with zero acceleration. Velocity is not touched.
    pub fn move_to(&mut self, target: Vec3<F>) {
        self.acceleration = Vec3::zero();
        self.position = target;
    }

    pub fn is_finite(&self) -> bool {
        self.position.is_finite() && self.velocity.is_finite()
    }
}
