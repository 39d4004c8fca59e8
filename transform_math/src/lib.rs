//! `transform_math`
//!
//! Single-precision vectors, matrices and quaternions for composing 3D
//! transforms (translate, rotate, scale).
//!
//! Design goals:
//! - Plain `Copy` value types, each backed by one flat `f32` array.
//! - Row-major matrices and the row-vector convention: `v * M`.
//! - Total functions. Degenerate normalization returns a safe default
//!   instead of `inf`/`NaN`.
//! - No `unsafe`.
//!
//! # Example
//! ```
//! use transform_math::prelude::*;
//!
//! let q = Quat::rot_z(PI / 2.0);
//! let m = Mat4::transform_quat(Vec3::new(0.0, 0.0, 5.0), q);
//! let p = Vec4::from_vec3(Vec3::X, 1.0) * m;
//! assert!((p.y() - 1.0).abs() < 1e-6);
//! assert!((p.z() - 5.0).abs() < 1e-6);
//! ```

pub mod matrix;
pub mod quat;
pub mod scalar;
pub mod vector;

pub mod prelude {
    //! Commonly used exports.

    pub use crate::matrix::*;
    pub use crate::quat::*;
    pub use crate::scalar::*;
    pub use crate::vector::*;
}
