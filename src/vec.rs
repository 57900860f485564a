//! Vector types for positions, velocities, forces and texture coordinates.

use crate::float::Float;
use core::ops::{Add, AddAssign, Neg, Sub, SubAssign};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

// --------------------------------------------------------------------------
// Vec3<F>: 3D vector
// --------------------------------------------------------------------------

/// 3D vector. Y is up.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Vec3<F: Float> {
    pub x: F,
    pub y: F,
    pub z: F,
}

impl<F: Float> Vec3<F> {
    /// Create a new 3D vector.
    pub fn new(x: F, y: F, z: F) -> Self { Vec3 { x, y, z } }

    /// Zero vector.
    pub fn zero() -> Self { Vec3 { x: F::zero(), y: F::zero(), z: F::zero() } }

    /// Unit vector along +Y.
    pub fn unit_y() -> Self { Vec3 { x: F::zero(), y: F::one(), z: F::zero() } }

    /// Dot product.
    pub fn dot(self, other: Self) -> F {
        self.x * other.x + self.y * other.y + self.z * other.z
    }

    /// Cross product.
    pub fn cross(self, other: Self) -> Self {
        Vec3 {
            x: self.y * other.z - self.z * other.y,
            y: self.z * other.x - self.x * other.z,
            z: self.x * other.y - self.y * other.x,
        }
    }

    /// Scale all components by a scalar.
    pub fn scale(self, s: F) -> Self {
        Vec3 { x: self.x * s, y: self.y * s, z: self.z * s }
    }

    /// Squared length (avoids sqrt).
    pub fn length_sq(self) -> F {
        self.dot(self)
    }

    /// Length (magnitude).
    pub fn length(self) -> F {
        self.length_sq().sqrt()
    }

    /// Normalize to unit length. Returns zero vector if length is near zero.
    pub fn normalize(self) -> Self {
        let len = self.length();
        if len.is_near_zero(F::from_f32(1e-10)) {
            Self::zero()
        } else {
            self.scale(F::one() / len)
        }
    }

    /// Distance between two points.
    pub fn distance(self, other: Self) -> F {
        (self - other).length()
    }

    /// All three components are finite.
    pub fn is_finite(self) -> bool {
        self.x.is_finite() && self.y.is_finite() && self.z.is_finite()
    }
}

impl<F: Float> Add for Vec3<F> {
    type Output = Self;
    fn add(self, rhs: Self) -> Self {
        Vec3 { x: self.x + rhs.x, y: self.y + rhs.y, z: self.z + rhs.z }
    }
}

impl<F: Float> AddAssign for Vec3<F> {
    fn add_assign(&mut self, rhs: Self) {
        *self = *self + rhs;
    }
}

impl<F: Float> Sub for Vec3<F> {
    type Output = Self;
    fn sub(self, rhs: Self) -> Self {
        Vec3 { x: self.x - rhs.x, y: self.y - rhs.y, z: self.z - rhs.z }
    }
}

impl<F: Float> SubAssign for Vec3<F> {
    fn sub_assign(&mut self, rhs: Self) {
        *self = *self - rhs;
    }
}

impl<F: Float> Neg for Vec3<F> {
    type Output = Self;
    fn neg(self) -> Self { Vec3 { x: -self.x, y: -self.y, z: -self.z } }
}

// --------------------------------------------------------------------------
// Vec2<F>: texture coordinates
// --------------------------------------------------------------------------

/// 2D vector, used for UV coordinates.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Vec2<F: Float> {
    pub x: F,
    pub y: F,
}

impl<F: Float> Vec2<F> {
    /// Create a new 2D vector.
    pub fn new(x: F, y: F) -> Self { Vec2 { x, y } }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn vec3_length() {
        let v = Vec3::new(2.0f32, 3.0, 6.0);
        assert!((v.length() - 7.0).abs() < 1e-6);
    }

    #[test]
    fn vec3_cross() {
        let i = Vec3::new(1.0f32, 0.0, 0.0);
        let j = Vec3::new(0.0f32, 1.0, 0.0);
        let k = i.cross(j);
        assert!((k.x - 0.0).abs() < 1e-6);
        assert!((k.y - 0.0).abs() < 1e-6);
        assert!((k.z - 1.0).abs() < 1e-6);
    }

    #[test]
    fn normalize_zero_vector() {
        let v = Vec3::<f32>::zero();
        assert_eq!(v.normalize(), Vec3::zero());
    }

    #[test]
    fn assign_ops() {
        let mut v = Vec3::new(1.0f64, 2.0, 3.0);
        v += Vec3::new(1.0, 1.0, 1.0);
        v -= Vec3::new(0.5, 0.5, 0.5);
        assert_eq!(v, Vec3::new(1.5, 2.5, 3.5));
    }

    #[test]
    fn detects_nan() {
        assert!(Vec3::new(0.0f32, 1.0, 2.0).is_finite());
        assert!(!Vec3::new(0.0f32, f32::NAN, 2.0).is_finite());
    }
}
