//! Vector types.
//!
//! Each vector is a flat `[f32; N]` in component order. Wider vectors expose
//! their leading components as the narrower type (`Vec3::xy`, `Vec4::xyz`).

use std::ops::{Add, AddAssign, Index, IndexMut, Mul, Neg, Sub};

use crate::matrix::{Mat3, Mat4};
use crate::quat::Quat;
use crate::scalar::near_zero;

/// 2D vector.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Vec2([f32; 2]);

impl Vec2 {
    pub const ZERO: Self = Self([0.0, 0.0]);

    pub const fn new(x: f32, y: f32) -> Self {
        Self([x, y])
    }

    pub const fn from_array(data: [f32; 2]) -> Self {
        Self(data)
    }

    pub const fn as_array(&self) -> &[f32; 2] {
        &self.0
    }

    pub const fn x(self) -> f32 {
        self.0[0]
    }

    pub const fn y(self) -> f32 {
        self.0[1]
    }
}

/// 3D vector.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Vec3([f32; 3]);

impl Vec3 {
    pub const ZERO: Self = Self([0.0, 0.0, 0.0]);
    pub const ONE: Self = Self([1.0, 1.0, 1.0]);
    pub const X: Self = Self([1.0, 0.0, 0.0]);
    pub const Y: Self = Self([0.0, 1.0, 0.0]);
    pub const Z: Self = Self([0.0, 0.0, 1.0]);

    pub const fn new(x: f32, y: f32, z: f32) -> Self {
        Self([x, y, z])
    }

    pub const fn from_array(data: [f32; 3]) -> Self {
        Self(data)
    }

    pub const fn as_array(&self) -> &[f32; 3] {
        &self.0
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

    /// The first two components.
    pub const fn xy(self) -> Vec2 {
        Vec2::new(self.0[0], self.0[1])
    }

    pub fn dot(self, rhs: Self) -> f32 {
        self.x() * rhs.x() + self.y() * rhs.y() + self.z() * rhs.z()
    }

    pub fn len_sq(self) -> f32 {
        self.dot(self)
    }

    pub fn len(self) -> f32 {
        self.len_sq().sqrt()
    }

    /// Unit-length copy of `self`, or [`Vec3::ZERO`] when the length is below
    /// [`EPSILON32`](crate::scalar::EPSILON32).
    pub fn normalize(self) -> Self {
        let len = self.len();
        if near_zero(len) {
            return Self::ZERO;
        }
        self * (1.0 / len)
    }

    /// Right-handed cross product.
    pub fn cross(self, rhs: Self) -> Self {
        Self::new(
            self.y() * rhs.z() - self.z() * rhs.y(),
            self.z() * rhs.x() - self.x() * rhs.z(),
            self.x() * rhs.y() - self.y() * rhs.x(),
        )
    }

    /// Rotates a direction by `orientation`.
    ///
    /// Evaluates `2(v·d)v + (s² − |v|²)d + 2s(v×d)`, the expansion of
    /// `q d q⁻¹`. Only a rotation when `orientation` is unit length; the
    /// quaternion is used as given.
    pub fn rotate(self, orientation: Quat) -> Self {
        let v = orientation.v();
        let s = orientation.s();
        (2.0 * v.dot(self) * v) + ((s * s - v.len_sq()) * self) + (2.0 * s * v.cross(self))
    }
}

impl Add for Vec3 {
    type Output = Vec3;

    fn add(self, rhs: Vec3) -> Vec3 {
        Vec3::new(self.x() + rhs.x(), self.y() + rhs.y(), self.z() + rhs.z())
    }
}

impl AddAssign for Vec3 {
    fn add_assign(&mut self, rhs: Vec3) {
        *self = *self + rhs;
    }
}

impl Sub for Vec3 {
    type Output = Vec3;

    fn sub(self, rhs: Vec3) -> Vec3 {
        Vec3::new(self.x() - rhs.x(), self.y() - rhs.y(), self.z() - rhs.z())
    }
}

impl Neg for Vec3 {
    type Output = Vec3;

    fn neg(self) -> Vec3 {
        Vec3::new(-self.x(), -self.y(), -self.z())
    }
}

impl Mul<f32> for Vec3 {
    type Output = Vec3;

    fn mul(self, rhs: f32) -> Vec3 {
        Vec3::new(self.x() * rhs, self.y() * rhs, self.z() * rhs)
    }
}

impl Mul<Vec3> for f32 {
    type Output = Vec3;

    fn mul(self, rhs: Vec3) -> Vec3 {
        Vec3::new(self * rhs.x(), self * rhs.y(), self * rhs.z())
    }
}

/// Row vector times matrix.
impl Mul<Mat3> for Vec3 {
    type Output = Vec3;

    fn mul(self, rhs: Mat3) -> Vec3 {
        let t = rhs.transpose();
        Vec3::new(self.dot(t.row(0)), self.dot(t.row(1)), self.dot(t.row(2)))
    }
}

/// 4D vector.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Vec4([f32; 4]);

impl Vec4 {
    pub const ZERO: Self = Self([0.0, 0.0, 0.0, 0.0]);

    pub const fn new(x: f32, y: f32, z: f32, w: f32) -> Self {
        Self([x, y, z, w])
    }

    pub const fn from_vec3(v: Vec3, w: f32) -> Self {
        Self([v.0[0], v.0[1], v.0[2], w])
    }

    pub const fn from_array(data: [f32; 4]) -> Self {
        Self(data)
    }

    pub const fn as_array(&self) -> &[f32; 4] {
        &self.0
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

    /// The first three components.
    pub const fn xyz(self) -> Vec3 {
        Vec3::new(self.0[0], self.0[1], self.0[2])
    }

    pub fn dot(self, rhs: Self) -> f32 {
        self.x() * rhs.x() + self.y() * rhs.y() + self.z() * rhs.z() + self.w() * rhs.w()
    }
}

/// Row vector times matrix, dotted against the rows of the transpose.
impl Mul<Mat4> for Vec4 {
    type Output = Vec4;

    fn mul(self, rhs: Mat4) -> Vec4 {
        let t = rhs.transpose();
        Vec4::new(
            self.dot(t.row(0)),
            self.dot(t.row(1)),
            self.dot(t.row(2)),
            self.dot(t.row(3)),
        )
    }
}

macro_rules! impl_index {
    ($($ty:ty),*) => {
        $(
            impl Index<usize> for $ty {
                type Output = f32;

                fn index(&self, i: usize) -> &f32 {
                    &self.0[i]
                }
            }

            impl IndexMut<usize> for $ty {
                fn index_mut(&mut self, i: usize) -> &mut f32 {
                    &mut self.0[i]
                }
            }
        )*
    };
}

impl_index!(Vec2, Vec3, Vec4);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scalar::PI;

    fn approx_eq3(a: Vec3, b: Vec3) -> bool {
        (a - b).len() <= 1e-6
    }

    #[test]
    fn vec2_equality_is_exact() {
        assert_eq!(Vec2::new(1.0, 2.0), Vec2::new(1.0, 2.0));
        assert_ne!(Vec2::new(1.0, 2.0), Vec2::new(1.0, 2.0 + 1e-6));
        assert_ne!(Vec2::new(0.0, 2.0), Vec2::new(1.0, 2.0));
    }

    #[test]
    fn vec3_views_leading_components() {
        let v = Vec3::new(1.0, 2.0, 3.0);
        assert_eq!(v.xy(), Vec2::new(1.0, 2.0));
        assert_eq!(v[2], 3.0);

        let w = Vec4::from_vec3(v, 4.0);
        assert_eq!(w.xyz(), v);
        assert_eq!(w.as_array(), &[1.0, 2.0, 3.0, 4.0]);
    }

    #[test]
    fn vec3_add_and_scale() {
        let mut a = Vec3::new(1.0, 2.0, 3.0);
        a += Vec3::new(1.0, 1.0, 1.0);
        assert_eq!(a, Vec3::new(2.0, 3.0, 4.0));
        assert_eq!(a * 2.0, 2.0 * a);
        assert_eq!(a * 2.0, Vec3::new(4.0, 6.0, 8.0));
    }

    #[test]
    fn dot_and_length() {
        assert_eq!(Vec3::new(1.0, 2.0, 3.0).dot(Vec3::new(4.0, 5.0, 6.0)), 32.0);
        assert_eq!(Vec3::new(3.0, 4.0, 0.0).len(), 5.0);
        assert_eq!(Vec3::new(3.0, 4.0, 0.0).len_sq(), 25.0);
        assert_eq!(
            Vec4::new(1.0, 2.0, 3.0, 4.0).dot(Vec4::new(1.0, 1.0, 1.0, 1.0)),
            10.0
        );
    }

    #[test]
    fn normalize_unit_length_and_idempotent() {
        let n = Vec3::new(3.0, -4.0, 12.0).normalize();
        assert!((n.len() - 1.0).abs() < 1e-6);
        assert!(approx_eq3(n.normalize(), n));
    }

    #[test]
    fn normalize_degenerate_returns_zero() {
        assert_eq!(Vec3::ZERO.normalize(), Vec3::ZERO);
        assert_eq!(Vec3::new(1e-9, -1e-9, 0.0).normalize(), Vec3::ZERO);
    }

    #[test]
    fn cross_is_right_handed_and_anticommutative() {
        assert_eq!(Vec3::X.cross(Vec3::Y), Vec3::Z);
        let a = Vec3::new(1.0, 2.0, 3.0);
        let b = Vec3::new(-4.0, 0.5, 2.0);
        assert_eq!(a.cross(b), -b.cross(a));
        assert_eq!(a.cross(a), Vec3::ZERO);
    }

    #[test]
    fn rotate_quarter_turn_about_z() {
        let r = Vec3::X.rotate(Quat::rot_z(PI / 2.0));
        assert!(approx_eq3(r, Vec3::Y), "got {r:?}");
    }

    #[test]
    fn rotate_by_identity_is_noop() {
        let d = Vec3::new(0.3, -2.0, 7.5);
        assert_eq!(d.rotate(Quat::IDENTITY), d);
    }

    #[test]
    fn vec4_times_identity() {
        let v = Vec4::new(1.0, 2.0, 3.0, 1.0);
        assert_eq!(v * Mat4::IDENTITY, v);
    }

    #[test]
    fn vec4_times_translation_moves_points_only() {
        let m = Mat4::translate(Vec3::new(10.0, 20.0, 30.0));
        let p = Vec4::new(1.0, 2.0, 3.0, 1.0) * m;
        assert_eq!(p, Vec4::new(11.0, 22.0, 33.0, 1.0));

        let d = Vec4::new(1.0, 2.0, 3.0, 0.0) * m;
        assert_eq!(d, Vec4::new(1.0, 2.0, 3.0, 0.0));
    }
}
