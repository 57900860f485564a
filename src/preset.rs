//! Ready-made scenes: a flag on a pole, a falling sheet and a hammock.

use crate::anchor::Anchor;
use crate::collision::{Plane, Sphere};
use crate::config::{Attachment, ClothConfig, Layout};
use crate::environment::{Air, Environment};
use crate::float::Float;
use crate::vec::Vec3;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Height of the ground plane in every preset.
const GROUND_Y: f32 = -5.0;

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Preset {
    /// Pinned along the pole side, blown by a steady breeze with slight lift.
    Flag,
    /// Pinned along the top edge under full gravity.
    Sheet,
    /// Horizontal, pinned at both ends.
    Hammock,
}

impl Preset {
    pub fn config<F: Float>(self) -> ClothConfig<F> {
        let config = ClothConfig::new();
        match self {
            Preset::Flag => config.with_attachment(Attachment::Flag),
            Preset::Sheet => config.with_attachment(Attachment::Sheet),
            Preset::Hammock => config
                .with_attachment(Attachment::Hammock)
                .with_layout(Layout::Horizontal),
        }
    }

    pub fn environment<F: Float>(self) -> Environment<F> {
        let v = |x: f32, y: f32, z: f32| Vec3::new(F::from_f32(x), F::from_f32(y), F::from_f32(z));
        let (gravity, wind) = match self {
            Preset::Flag => (v(0.0, 0.01, 0.0), v(1.0, 0.01, 0.01)),
            Preset::Sheet => (v(0.0, -9.81, 0.0), v(0.5, 0.01, 0.01)),
            Preset::Hammock => (v(0.0, -9.81, 0.0), v(0.01, 0.01, 0.01)),
        };
        Environment::new()
            .with_gravity(gravity)
            .with_air(Air::new(wind, F::from_f32(1.2), F::from_f32(1.2)))
            .with_plane(Plane::ground(F::from_f32(GROUND_Y), F::half(), F::from_f32(0.1)))
            .with_sphere(
                Sphere::new(v(0.0, -4.0, -0.7), F::half(), F::zero(), F::half())
                    .with_angular_velocity(v(0.0, 0.5, 0.0)),
            )
    }

    /// Anchor 2.5 above the top of a cloth of `height`, relative to the ground.
    pub fn anchor<F: Float>(self, height: F) -> Anchor<F> {
        let y = height + F::from_f32(2.5 + GROUND_Y);
        Anchor::at(Vec3::new(F::zero(), y, F::zero()))
    }
}
