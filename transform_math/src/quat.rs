//! Quaternions.
//!
//! A [`Quat`] is stored as `[x, y, z, w]` and can be read either as four
//! components or as a vector part `v = (x, y, z)` plus a scalar part `s = w`.
//! Unit quaternions represent rotations, but unit length is never enforced:
//! call [`Quat::normalize`] before using a quaternion as a rotation.

use std::ops::{Index, IndexMut, Mul};

use crate::matrix::Mat3;
use crate::scalar::near_zero;
use crate::vector::Vec3;

/// Quaternion `(x, y, z, w)`.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Quat([f32; 4]);

impl Default for Quat {
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl Quat {
    /// The identity rotation.
    pub const IDENTITY: Self = Self([0.0, 0.0, 0.0, 1.0]);

    /// From a vector part and a scalar part.
    pub const fn new(v: Vec3, s: f32) -> Self {
        Self([v.x(), v.y(), v.z(), s])
    }

    pub const fn from_xyzw(x: f32, y: f32, z: f32, w: f32) -> Self {
        Self([x, y, z, w])
    }

    pub const fn from_array(data: [f32; 4]) -> Self {
        Self(data)
    }

    pub const fn as_array(&self) -> &[f32; 4] {
        &self.0
    }

    /// Rotation of `pitch` radians about the X axis.
    pub fn rot_x(pitch: f32) -> Self {
        let half = pitch / 2.0;
        Self([half.sin(), 0.0, 0.0, half.cos()])
    }

    /// Rotation of `yaw` radians about the Y axis.
    pub fn rot_y(yaw: f32) -> Self {
        let half = yaw / 2.0;
        Self([0.0, half.sin(), 0.0, half.cos()])
    }

    /// Rotation of `roll` radians about the Z axis.
    pub fn rot_z(roll: f32) -> Self {
        let half = roll / 2.0;
        Self([0.0, 0.0, half.sin(), half.cos()])
    }

    pub const fn x(self) -> f32 {
        self.0[0]
    }

    pub const fn y(self) -> f32 {
        self.0[1]
    }

    pub const fn z(self) -> f32 {
        self.0[2]
    }

    pub const fn w(self) -> f32 {
        self.0[3]
    }

    /// Vector part `(x, y, z)`.
    pub const fn v(self) -> Vec3 {
        Vec3::new(self.0[0], self.0[1], self.0[2])
    }

    /// Scalar part `w`.
    pub const fn s(self) -> f32 {
        self.0[3]
    }

    pub fn dot(self, rhs: Self) -> f32 {
        self.x() * rhs.x() + self.y() * rhs.y() + self.z() * rhs.z() + self.w() * rhs.w()
    }

    pub fn len_sq(self) -> f32 {
        self.dot(self)
    }

    pub fn len(self) -> f32 {
        self.len_sq().sqrt()
    }

    /// Unit-length copy of `self`. A quaternion too short to normalize
    /// becomes [`Quat::IDENTITY`] so the result is always a valid rotation.
    pub fn normalize(self) -> Self {
        let len = self.len();
        if near_zero(len) {
            return Self::IDENTITY;
        }
        self * (1.0 / len)
    }

    /// Rotation matrix whose rows are the rotated basis vectors. Assumes a
    /// unit quaternion.
    pub fn to_mat3(self) -> Mat3 {
        Mat3::from_quat(self)
    }
}

impl Mul<f32> for Quat {
    type Output = Quat;

    fn mul(self, rhs: f32) -> Quat {
        Quat([self.x() * rhs, self.y() * rhs, self.z() * rhs, self.w() * rhs])
    }
}

/// Hamilton product. `a * b` applies `b` first, then `a`.
impl Mul for Quat {
    type Output = Quat;

    fn mul(self, rhs: Quat) -> Quat {
        let (av, a_s) = (self.v(), self.s());
        let (bv, b_s) = (rhs.v(), rhs.s());
        Quat::new(av.cross(bv) + b_s * av + bv * a_s, a_s * b_s - av.dot(bv))
    }
}

impl Index<usize> for Quat {
    type Output = f32;

    fn index(&self, i: usize) -> &f32 {
        &self.0[i]
    }
}

impl IndexMut<usize> for Quat {
    fn index_mut(&mut self, i: usize) -> &mut f32 {
        &mut self.0[i]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scalar::PI;

    fn approx_eq(a: Quat, b: Quat) -> bool {
        a.as_array()
            .iter()
            .zip(b.as_array())
            .all(|(x, y)| (x - y).abs() <= 1e-6)
    }

    #[test]
    fn vector_and_scalar_parts() {
        let q = Quat::new(Vec3::new(1.0, 2.0, 3.0), 4.0);
        assert_eq!(q, Quat::from_xyzw(1.0, 2.0, 3.0, 4.0));
        assert_eq!(q.v(), Vec3::new(1.0, 2.0, 3.0));
        assert_eq!(q.s(), 4.0);
        assert_eq!(q[3], q.w());
    }

    #[test]
    fn axis_rotations_use_half_angles() {
        let angle = 0.8f32;
        let (s, c) = ((angle / 2.0).sin(), (angle / 2.0).cos());
        assert_eq!(Quat::rot_x(angle), Quat::from_xyzw(s, 0.0, 0.0, c));
        assert_eq!(Quat::rot_y(angle), Quat::from_xyzw(0.0, s, 0.0, c));
        assert_eq!(Quat::rot_z(angle), Quat::from_xyzw(0.0, 0.0, s, c));
        assert!((Quat::rot_x(angle).len() - 1.0).abs() < 1e-6);
    }

    #[test]
    fn normalize_scales_to_unit_length() {
        let q = Quat::from_xyzw(1.0, 2.0, 2.0, 4.0).normalize();
        assert!((q.len() - 1.0).abs() < 1e-6);
        assert!(approx_eq(q, Quat::from_xyzw(0.2, 0.4, 0.4, 0.8)));
    }

    #[test]
    fn normalize_degenerate_returns_identity() {
        assert_eq!(Quat::from_xyzw(0.0, 0.0, 0.0, 0.0).normalize(), Quat::IDENTITY);
        assert_eq!(Quat::from_xyzw(1e-9, 0.0, -1e-9, 0.0).normalize(), Quat::IDENTITY);
    }

    #[test]
    fn identity_is_neutral_for_hamilton_product() {
        let q = Quat::from_xyzw(0.1, -0.7, 0.3, 0.6);
        assert_eq!(Quat::IDENTITY * q, q);
        assert_eq!(q * Quat::IDENTITY, q);
    }

    #[test]
    fn hamilton_product_basis_units() {
        let i = Quat::from_xyzw(1.0, 0.0, 0.0, 0.0);
        let j = Quat::from_xyzw(0.0, 1.0, 0.0, 0.0);
        let k = Quat::from_xyzw(0.0, 0.0, 1.0, 0.0);
        assert_eq!(i * j, k);
        assert_eq!(j * i, k * -1.0);
        assert_eq!(i * i, Quat::from_xyzw(0.0, 0.0, 0.0, -1.0));
    }

    #[test]
    fn composing_axis_rotations_adds_angles() {
        let q = Quat::rot_z(PI / 6.0) * Quat::rot_z(PI / 3.0);
        assert!(approx_eq(q, Quat::rot_z(PI / 2.0)));
    }

    #[test]
    fn product_applies_right_operand_first() {
        let a = Quat::rot_x(PI / 2.0);
        let b = Quat::rot_z(PI / 2.0);
        let d = Vec3::new(0.25, -1.0, 2.0);
        let composed = d.rotate(a * b);
        let stepwise = d.rotate(b).rotate(a);
        assert!((composed - stepwise).len() < 1e-5);
    }

    #[test]
    fn scalar_multiply_scales_all_components() {
        let q = Quat::from_xyzw(1.0, -2.0, 3.0, -4.0) * 0.5;
        assert_eq!(q, Quat::from_xyzw(0.5, -1.0, 1.5, -2.0));
    }
}
