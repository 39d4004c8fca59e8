//! Matrix types.
//!
//! Both matrices are row-major flat arrays and follow the row-vector
//! convention: a point is mapped as `p * M`, and `A * B` applies `A` first.
//!
//! A [`Mat4`] built by the transform helpers has the layout
//!
//! ```text
//! [ x.x  x.y  x.z  0 ]   basis row x (scaled)
//! [ y.x  y.y  y.z  0 ]   basis row y (scaled)
//! [ z.x  z.y  z.z  0 ]   basis row z (scaled)
//! [ t.x  t.y  t.z  1 ]   translation
//! ```

use std::ops::{Index, IndexMut, Mul};

use crate::quat::Quat;
use crate::vector::{Vec3, Vec4};

/// 3x3 matrix, row-major.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Mat3([f32; 9]);

impl Default for Mat3 {
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl Mat3 {
    pub const IDENTITY: Self = Self([
        1.0, 0.0, 0.0, //
        0.0, 1.0, 0.0, //
        0.0, 0.0, 1.0,
    ]);

    pub const fn from_rows(x: Vec3, y: Vec3, z: Vec3) -> Self {
        Self([
            x.x(), x.y(), x.z(), //
            y.x(), y.y(), y.z(), //
            z.x(), z.y(), z.z(),
        ])
    }

    pub const fn from_array(data: [f32; 9]) -> Self {
        Self(data)
    }

    pub const fn as_array(&self) -> &[f32; 9] {
        &self.0
    }

    /// Rotation matrix for a unit quaternion. The quaternion is not
    /// normalized here.
    pub fn from_quat(q: Quat) -> Self {
        let (x, y, z, w) = (q.x(), q.y(), q.z(), q.w());
        let xy = x * y;
        let wz = w * z;
        let xz = x * z;
        let wy = w * y;
        let yz = y * z;
        let wx = w * x;
        let xx = x * x;
        let yy = y * y;
        let zz = z * z;

        Self([
            1.0 - 2.0 * (yy + zz), 2.0 * (xy + wz), 2.0 * (xz - wy), //
            2.0 * (xy - wz), 1.0 - 2.0 * (xx + zz), 2.0 * (yz + wx), //
            2.0 * (xz + wy), 2.0 * (yz - wx), 1.0 - 2.0 * (xx + yy),
        ])
    }

    pub fn row(&self, i: usize) -> Vec3 {
        Vec3::new(self.0[i * 3], self.0[i * 3 + 1], self.0[i * 3 + 2])
    }

    pub fn x(&self) -> Vec3 {
        self.row(0)
    }

    pub fn y(&self) -> Vec3 {
        self.row(1)
    }

    pub fn z(&self) -> Vec3 {
        self.row(2)
    }

    pub fn transpose(&self) -> Self {
        let m = &self.0;
        Self([
            m[0], m[3], m[6], //
            m[1], m[4], m[7], //
            m[2], m[5], m[8],
        ])
    }
}

/// 4x4 matrix, row-major.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Mat4([f32; 16]);

impl Default for Mat4 {
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl Mat4 {
    pub const ZERO: Self = Self::diagonal(0.0);
    pub const IDENTITY: Self = Self::diagonal(1.0);

    /// `v` on the diagonal, zero elsewhere.
    pub const fn diagonal(v: f32) -> Self {
        Self([
            v, 0.0, 0.0, 0.0, //
            0.0, v, 0.0, 0.0, //
            0.0, 0.0, v, 0.0, //
            0.0, 0.0, 0.0, v,
        ])
    }

    pub const fn identity() -> Self {
        Self::IDENTITY
    }

    pub const fn from_rows(r0: Vec4, r1: Vec4, r2: Vec4, r3: Vec4) -> Self {
        Self([
            r0.x(), r0.y(), r0.z(), r0.w(), //
            r1.x(), r1.y(), r1.z(), r1.w(), //
            r2.x(), r2.y(), r2.z(), r2.w(), //
            r3.x(), r3.y(), r3.z(), r3.w(),
        ])
    }

    pub const fn from_array(data: [f32; 16]) -> Self {
        Self(data)
    }

    pub const fn as_array(&self) -> &[f32; 16] {
        &self.0
    }

    /// Translation by `v`.
    pub fn translate(v: Vec3) -> Self {
        let mut m = Self::IDENTITY;
        m.set_t(v);
        m
    }

    /// Local-to-world transform: each row of `orientation` scaled by the
    /// matching component of `scale`, then translated by `position`.
    pub fn transform(position: Vec3, orientation: Mat3, scale: Vec3) -> Self {
        let mut m = Self::ZERO;
        m.set_row3(0, orientation.x() * scale.x());
        m.set_row3(1, orientation.y() * scale.y());
        m.set_row3(2, orientation.z() * scale.z());
        m.set_t(position);
        m.0[15] = 1.0;
        m
    }

    /// [`Mat4::transform`] with a quaternion orientation and unit scale.
    pub fn transform_quat(position: Vec3, orientation: Quat) -> Self {
        Self::transform(position, Mat3::from_quat(orientation), Vec3::ONE)
    }

    /// Closed-form inverse of [`Mat4::transform`] for an orthonormal
    /// `orientation`: the transposed basis and the translation `-P` projected
    /// onto each scaled basis row.
    ///
    /// The basis is scaled, not divided, by `scale`, so this is exact only
    /// for scale components of `±1`. Otherwise
    /// `transform(P, R, S) * inverse_transform(P, R, S)` is
    /// `diag(Sx², Sy², Sz², 1)`.
    pub fn inverse_transform(position: Vec3, orientation: Mat3, scale: Vec3) -> Self {
        let x = orientation.x() * scale.x();
        let y = orientation.y() * scale.y();
        let z = orientation.z() * scale.z();
        let t = Vec3::new(-position.dot(x), -position.dot(y), -position.dot(z));

        Self([
            x.x(), y.x(), z.x(), 0.0, //
            x.y(), y.y(), z.y(), 0.0, //
            x.z(), y.z(), z.z(), 0.0, //
            t.x(), t.y(), t.z(), 1.0,
        ])
    }

    /// [`Mat4::inverse_transform`] with a quaternion orientation and unit
    /// scale.
    pub fn inverse_transform_quat(position: Vec3, orientation: Quat) -> Self {
        Self::inverse_transform(position, Mat3::from_quat(orientation), Vec3::ONE)
    }

    pub fn row(&self, i: usize) -> Vec4 {
        let b = i * 4;
        Vec4::new(self.0[b], self.0[b + 1], self.0[b + 2], self.0[b + 3])
    }

    /// Basis row x (row 0 without its padding column).
    pub fn x(&self) -> Vec3 {
        self.row(0).xyz()
    }

    pub fn y(&self) -> Vec3 {
        self.row(1).xyz()
    }

    pub fn z(&self) -> Vec3 {
        self.row(2).xyz()
    }

    /// Translation row.
    pub fn t(&self) -> Vec3 {
        self.row(3).xyz()
    }

    pub fn set_t(&mut self, v: Vec3) {
        self.set_row3(3, v);
    }

    fn set_row3(&mut self, i: usize, v: Vec3) {
        let b = i * 4;
        self.0[b..b + 3].copy_from_slice(v.as_array());
    }

    pub fn transpose(&self) -> Self {
        let m = &self.0;
        Self([
            m[0], m[4], m[8], m[12], //
            m[1], m[5], m[9], m[13], //
            m[2], m[6], m[10], m[14], //
            m[3], m[7], m[11], m[15],
        ])
    }
}

/// `[i][j] = row_i(A) · row_j(Bᵀ)`.
impl Mul for Mat4 {
    type Output = Mat4;

    fn mul(self, rhs: Mat4) -> Mat4 {
        let bt = rhs.transpose();
        let mut out = [0.0; 16];
        for i in 0..4 {
            let a = self.row(i);
            for j in 0..4 {
                out[i * 4 + j] = a.dot(bt.row(j));
            }
        }
        Mat4(out)
    }
}

macro_rules! impl_index {
    ($ty:ty, $n:expr) => {
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

        /// `(row, col)` element access.
        impl Index<(usize, usize)> for $ty {
            type Output = f32;

            fn index(&self, (r, c): (usize, usize)) -> &f32 {
                &self.0[r * $n + c]
            }
        }

        impl IndexMut<(usize, usize)> for $ty {
            fn index_mut(&mut self, (r, c): (usize, usize)) -> &mut f32 {
                &mut self.0[r * $n + c]
            }
        }
    };
}

impl_index!(Mat3, 3);
impl_index!(Mat4, 4);
