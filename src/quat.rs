//! Unit quaternions for the anchor orientation.

use crate::float::Float;
use crate::vec::Vec3;
use core::ops::Mul;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Rotation stored as a unit quaternion `(x, y, z, w)`.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Quat<F: Float> {
    pub x: F,
    pub y: F,
    pub z: F,
    pub w: F,
}

impl<F: Float> Quat<F> {
    pub fn identity() -> Self {
        Quat { x: F::zero(), y: F::zero(), z: F::zero(), w: F::one() }
    }

    /// Rotation of `angle` radians around `axis`. The axis is normalized here.
    pub fn from_axis_angle(axis: Vec3<F>, angle: F) -> Self {
        let axis = axis.normalize();
        let half = angle * F::half();
        let s = half.sin();
        Quat { x: axis.x * s, y: axis.y * s, z: axis.z * s, w: half.cos() }
    }

    /// Intrinsic XYZ Euler angles, the convention of interactive
    /// transform gizmos: rotate about X, then Y, then Z in local frames.
    pub fn from_euler_xyz(x: F, y: F, z: F) -> Self {
        let qx = Self::from_axis_angle(Vec3::new(F::one(), F::zero(), F::zero()), x);
        let qy = Self::from_axis_angle(Vec3::new(F::zero(), F::one(), F::zero()), y);
        let qz = Self::from_axis_angle(Vec3::new(F::zero(), F::zero(), F::one()), z);
        qx * qy * qz
    }

    /// Rotate a vector: `v + 2w(q × v) + 2 q × (q × v)`.
    pub fn rotate(self, v: Vec3<F>) -> Vec3<F> {
        let q = Vec3::new(self.x, self.y, self.z);
        let t = q.cross(v).scale(F::two());
        v + t.scale(self.w) + q.cross(t)
    }
}

impl<F: Float> Default for Quat<F> {
    fn default() -> Self {
        Self::identity()
    }
}

impl<F: Float> Mul for Quat<F> {
    type Output = Self;

    /// Hamilton product; `a * b` applies `b` first.
    fn mul(self, rhs: Self) -> Self {
        Quat {
            x: self.w * rhs.x + self.x * rhs.w + self.y * rhs.z - self.z * rhs.y,
            y: self.w * rhs.y - self.x * rhs.z + self.y * rhs.w + self.z * rhs.x,
            z: self.w * rhs.z + self.x * rhs.y - self.y * rhs.x + self.z * rhs.w,
            w: self.w * rhs.w - self.x * rhs.x - self.y * rhs.y - self.z * rhs.z,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;
    use core::f64::consts::FRAC_PI_2;

    #[test]
    fn identity_leaves_vector() {
        let v = Vec3::new(1.0f64, -2.0, 3.0);
        assert_eq!(Quat::identity().rotate(v), v);
    }

    #[test]
    fn quarter_turn_about_y() {
        let q = Quat::from_axis_angle(Vec3::unit_y(), FRAC_PI_2);
        let r = q.rotate(Vec3::new(1.0f64, 0.0, 0.0));
        assert_abs_diff_eq!(r.x, 0.0, epsilon = 1e-12);
        assert_abs_diff_eq!(r.y, 0.0, epsilon = 1e-12);
        assert_abs_diff_eq!(r.z, -1.0, epsilon = 1e-12);
    }

    #[test]
    fn euler_with_single_axis_matches_axis_angle() {
        let a = Quat::from_euler_xyz(0.0f64, 0.3, 0.0);
        let b = Quat::from_axis_angle(Vec3::unit_y(), 0.3);
        assert_abs_diff_eq!(a.x, b.x, epsilon = 1e-12);
        assert_abs_diff_eq!(a.y, b.y, epsilon = 1e-12);
        assert_abs_diff_eq!(a.z, b.z, epsilon = 1e-12);
        assert_abs_diff_eq!(a.w, b.w, epsilon = 1e-12);
    }

    #[test]
    fn rotation_preserves_length() {
        let q = Quat::from_euler_xyz(0.4f64, -1.1, 2.0);
        let v = Vec3::new(0.3, 0.7, -1.2);
        assert_abs_diff_eq!(q.rotate(v).length(), v.length(), epsilon = 1e-12);
    }
}
