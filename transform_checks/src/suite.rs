//! The `transform_math` property suite.

use transform_math::prelude::*;

use crate::context::{ensure, ensure_eq, CheckContext, CheckResult};
use crate::runner::Check;

const VECTOR: &str = "vector";
const QUATERNION: &str = "quaternion";
const MATRIX: &str = "matrix";

/// All registered checks, in registry order.
pub fn registry() -> Vec<Check> {
    vec![
        Check::new(
            "vec3.dot_known",
            VECTOR,
            "dot((1,2,3),(4,5,6)) is 32 and |(3,4,0)| is 5",
            vec3_dot_known,
        ),
        Check::new(
            "vec3.normalize_idempotent",
            VECTOR,
            "normalize is unit length and idempotent for non-degenerate input",
            vec3_normalize_idempotent,
        ),
        Check::new(
            "vec3.normalize_degenerate",
            VECTOR,
            "normalize of a near-zero vector is the zero vector",
            vec3_normalize_degenerate,
        ),
        Check::new(
            "vec3.cross_anticommutative",
            VECTOR,
            "cross(a, b) == -cross(b, a) and cross(a, a) == 0",
            vec3_cross_anticommutative,
        ),
        Check::new(
            "vec3.scale_commutative",
            VECTOR,
            "v * k == k * v",
            vec3_scale_commutative,
        ),
        Check::new(
            "quat.rot_z_quarter_turn",
            QUATERNION,
            "rot_z(pi/2) rotates +X onto +Y",
            quat_rot_z_quarter_turn,
        ),
        Check::new(
            "quat.normalize_degenerate",
            QUATERNION,
            "normalize of a near-zero quaternion is the identity",
            quat_normalize_degenerate,
        ),
        Check::new(
            "quat.identity_product",
            QUATERNION,
            "identity * q == q",
            quat_identity_product,
        ),
        Check::new(
            "quat.rotate_matches_matrix",
            QUATERNION,
            "rotating (0,1,0) by rot_x(theta) matches the converted matrix",
            quat_rotate_matches_matrix,
        ),
        Check::new(
            "quat.product_composes",
            QUATERNION,
            "rotating by a * b equals rotating by b then a",
            quat_product_composes,
        ),
        Check::new(
            "mat4.identity_neutral",
            MATRIX,
            "I * M == M and M * I == M",
            mat4_identity_neutral,
        ),
        Check::new(
            "mat4.transpose_involution",
            MATRIX,
            "transpose(transpose(M)) == M exactly",
            mat4_transpose_involution,
        ),
        Check::new(
            "mat4.inverse_transform",
            MATRIX,
            "transform * inverse_transform is identity for unit-magnitude scale",
            mat4_inverse_transform,
        ),
        Check::new(
            "mat4.inverse_transform_scaled",
            MATRIX,
            "transform * inverse_transform is diag(S^2, 1) for general scale",
            mat4_inverse_transform_scaled,
        ),
        Check::new(
            "mat4.point_roundtrip",
            MATRIX,
            "a point mapped by transform_quat returns through inverse_transform_quat",
            mat4_point_roundtrip,
        ),
    ]
}

fn vec3_dot_known(_: &mut CheckContext) -> CheckResult {
    ensure_eq(
        "dot",
        Vec3::new(1.0, 2.0, 3.0).dot(Vec3::new(4.0, 5.0, 6.0)),
        32.0,
    )?;
    ensure_eq("len", Vec3::new(3.0, 4.0, 0.0).len(), 5.0)
}

fn vec3_normalize_idempotent(ctx: &mut CheckContext) -> CheckResult {
    for _ in 0..ctx.iterations {
        let v = ctx.vec3(100.0);
        if v.len() < 1e-3 {
            continue;
        }
        let n = v.normalize();
        ctx.ensure_near("len", n.len(), 1.0)?;
        ctx.ensure_vec3_near("normalize twice", n.normalize(), n)?;
    }
    Ok(())
}

fn vec3_normalize_degenerate(_: &mut CheckContext) -> CheckResult {
    ensure_eq("zero", Vec3::ZERO.normalize(), Vec3::ZERO)?;
    ensure_eq("tiny", Vec3::new(1e-9, 0.0, -1e-9).normalize(), Vec3::ZERO)
}

fn vec3_cross_anticommutative(ctx: &mut CheckContext) -> CheckResult {
    for _ in 0..ctx.iterations {
        let a = ctx.vec3(10.0);
        let b = ctx.vec3(10.0);
        ensure_eq("cross(a, b)", a.cross(b), -b.cross(a))?;
        ensure_eq("cross(a, a)", a.cross(a), Vec3::ZERO)?;
    }
    Ok(())
}

fn vec3_scale_commutative(ctx: &mut CheckContext) -> CheckResult {
    for _ in 0..ctx.iterations {
        let v = ctx.vec3(10.0);
        let k = ctx.scalar(10.0);
        ensure_eq("v * k", v * k, k * v)?;
    }
    Ok(())
}

fn quat_rot_z_quarter_turn(ctx: &mut CheckContext) -> CheckResult {
    let r = Vec3::X.rotate(Quat::rot_z(PI / 2.0));
    ctx.ensure_vec3_near("rotated +X", r, Vec3::Y)
}

fn quat_normalize_degenerate(_: &mut CheckContext) -> CheckResult {
    ensure_eq(
        "zero",
        Quat::from_xyzw(0.0, 0.0, 0.0, 0.0).normalize(),
        Quat::IDENTITY,
    )?;
    ensure_eq(
        "tiny",
        Quat::from_xyzw(1e-9, -1e-9, 0.0, 1e-9).normalize(),
        Quat::IDENTITY,
    )
}

fn quat_identity_product(ctx: &mut CheckContext) -> CheckResult {
    for _ in 0..ctx.iterations {
        let q = ctx.unit_quat();
        ensure_eq("identity * q", Quat::IDENTITY * q, q)?;
    }
    Ok(())
}

fn quat_rotate_matches_matrix(ctx: &mut CheckContext) -> CheckResult {
    for _ in 0..ctx.iterations {
        let q = Quat::rot_x(ctx.scalar(PI));
        let d = Vec3::Y;
        ctx.ensure_vec3_near("rotate vs matrix", d.rotate(q), d * q.to_mat3())?;
    }
    Ok(())
}

fn quat_product_composes(ctx: &mut CheckContext) -> CheckResult {
    for _ in 0..ctx.iterations {
        let a = ctx.unit_quat();
        let b = ctx.unit_quat();
        let d = ctx.vec3(5.0);
        ctx.ensure_vec3_near("a * b", d.rotate(a * b), d.rotate(b).rotate(a))?;
    }
    Ok(())
}

fn mat4_identity_neutral(ctx: &mut CheckContext) -> CheckResult {
    for _ in 0..ctx.iterations {
        let m = ctx.mat4(100.0);
        ensure_eq("I * M", Mat4::IDENTITY * m, m)?;
        ensure_eq("M * I", m * Mat4::IDENTITY, m)?;
    }
    Ok(())
}

fn mat4_transpose_involution(ctx: &mut CheckContext) -> CheckResult {
    for _ in 0..ctx.iterations {
        let m = ctx.mat4(100.0);
        ensure_eq("transpose twice", m.transpose().transpose(), m)?;
    }
    Ok(())
}

fn mat4_inverse_transform(ctx: &mut CheckContext) -> CheckResult {
    for _ in 0..ctx.iterations {
        let p = ctx.vec3(50.0);
        let r = ctx.unit_quat().to_mat3();
        let s = ctx.sign_scale();
        let product = Mat4::transform(p, r, s) * Mat4::inverse_transform(p, r, s);
        ctx.ensure_mat4_near("T * T^-1", &product, &Mat4::IDENTITY)?;
    }
    Ok(())
}

fn mat4_inverse_transform_scaled(ctx: &mut CheckContext) -> CheckResult {
    for _ in 0..ctx.iterations {
        let p = ctx.vec3(10.0);
        let r = ctx.unit_quat().to_mat3();
        let s = ctx.scale(3.0);
        let product = Mat4::transform(p, r, s) * Mat4::inverse_transform(p, r, s);

        let mut expected = Mat4::IDENTITY;
        for i in 0..3 {
            expected[(i, i)] = s[i] * s[i];
        }
        // Diagonal entries reach 9, so rounding scales with |s|^2.
        let tolerance = ctx.epsilon * 10.0;
        for row in 0..4 {
            for col in 0..4 {
                let (a, e) = (product[(row, col)], expected[(row, col)]);
                ensure((a - e).abs() <= tolerance, || {
                    format!("element ({row}, {col}) expected {e}, got {a}")
                })?;
            }
        }
    }
    Ok(())
}

fn mat4_point_roundtrip(ctx: &mut CheckContext) -> CheckResult {
    for _ in 0..ctx.iterations {
        let p = ctx.vec3(10.0);
        let q = ctx.unit_quat();
        let local = Vec4::from_vec3(ctx.vec3(10.0), 1.0);
        let world = local * Mat4::transform_quat(p, q);
        let back = world * Mat4::inverse_transform_quat(p, q);
        ctx.ensure_vec3_near("roundtrip", back.xyz(), local.xyz())?;
    }
    Ok(())
}
