//! Per-call world description: gravity, air and obstacles.

use crate::collision::{Plane, Sphere};
use crate::float::Float;
use crate::vec::Vec3;
use alloc::vec::Vec;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Ambient air used by the drag model.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Air<F: Float> {
    pub velocity: Vec3<F>,
    pub density: F,
    pub drag_coefficient: F,
}

impl<F: Float> Air<F> {
    pub fn new(velocity: Vec3<F>, density: F, drag_coefficient: F) -> Self {
        Air { velocity, density, drag_coefficient }
    }

    /// Zero density: no aerodynamic force.
    pub fn none() -> Self {
        Air { velocity: Vec3::zero(), density: F::zero(), drag_coefficient: F::zero() }
    }
}

impl<F: Float> Default for Air<F> {
    fn default() -> Self {
        Self::none()
    }
}

/// Everything the cloth reads from the world during one `animate` call.
///
/// The host owns the obstacles and may move them between frames; the
/// solver only reads them.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Environment<F: Float> {
    /// Acceleration applied to every particle. Default: zero.
    pub gravity: Vec3<F>,
    pub air: Air<F>,
    pub planes: Vec<Plane<F>>,
    pub spheres: Vec<Sphere<F>>,
}

impl<F: Float> Environment<F> {
    /// No gravity, still air, no obstacles.
    pub fn new() -> Self {
        Environment {
            gravity: Vec3::zero(),
            air: Air::none(),
            planes: Vec::new(),
            spheres: Vec::new(),
        }
    }

    pub fn with_gravity(mut self, gravity: Vec3<F>) -> Self {
        self.gravity = gravity;
        self
    }

    pub fn with_air(mut self, air: Air<F>) -> Self {
        self.air = air;
        self
    }

    pub fn with_plane(mut self, plane: Plane<F>) -> Self {
        self.planes.push(plane);
        self
    }

    pub fn with_sphere(mut self, sphere: Sphere<F>) -> Self {
        self.spheres.push(sphere);
        self
    }
}

impl<F: Float> Default for Environment<F> {
    fn default() -> Self {
        Self::new()
    }
}
