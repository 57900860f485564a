//! External transform that drives attached particles.

use crate::float::Float;
use crate::quat::Quat;
use crate::vec::Vec3;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Rigid transform owned by the host (typically an interactive gizmo).
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Anchor<F: Float> {
    pub position: Vec3<F>,
    pub orientation: Quat<F>,
}

impl<F: Float> Anchor<F> {
    pub fn new(position: Vec3<F>, orientation: Quat<F>) -> Self {
        Anchor { position, orientation }
    }

    pub fn at(position: Vec3<F>) -> Self {
        Anchor { position, orientation: Quat::identity() }
    }

    /// World position of a point given in anchor space.
    pub fn transform(&self, offset: Vec3<F>) -> Vec3<F> {
        self.position + self.orientation.rotate(offset)
    }
}

impl<F: Float> Default for Anchor<F> {
    fn default() -> Self {
        Self::at(Vec3::zero())
    }
}
