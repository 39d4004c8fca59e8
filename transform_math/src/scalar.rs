//! Scalar constants and helpers shared by the vector, quaternion and matrix
//! types.

/// Pi as used by the angle conversions.
#[allow(clippy::approx_constant, clippy::excessive_precision)]
pub const PI: f32 = 3.14159265359;

/// Machine epsilon for `f32`. Lengths below this are treated as zero.
pub const EPSILON32: f32 = 1.1920929e-7;

/// Degrees to radians.
#[inline]
pub fn to_radians(degrees: f32) -> f32 {
    degrees * PI / 180.0
}

/// Radians to degrees.
#[inline]
pub fn to_degrees(radians: f32) -> f32 {
    radians * 180.0 / PI
}

/// True when `|v| < eps`.
#[inline]
pub fn near_zero_eps(v: f32, eps: f32) -> bool {
    v.abs() < eps
}

/// True when `|v| < EPSILON32`.
#[inline]
pub fn near_zero(v: f32) -> bool {
    near_zero_eps(v, EPSILON32)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn angle_conversion_roundtrip() {
        for deg in [0.0f32, 45.0, 90.0, 180.0, -90.0, 360.0] {
            let back = to_degrees(to_radians(deg));
            assert!((back - deg).abs() < 1e-4, "{deg} -> {back}");
        }
        assert!((to_radians(180.0) - PI).abs() < 1e-6);
    }

    #[test]
    fn near_zero_threshold() {
        assert!(near_zero(0.0));
        assert!(near_zero(-1.0e-7));
        assert!(!near_zero(EPSILON32));
        assert!(!near_zero(1.0e-6));
    }
}
