//! Per-check state: a seeded RNG, tolerances, and assertion helpers.
//!
//! Helpers return `Err(String)` describing the mismatch so a check body can
//! bail with `?` and the runner records the message.

use std::fmt::Debug;

use rand::{rngs::StdRng, Rng, SeedableRng};
use transform_math::prelude::*;

/// Outcome of a check body.
pub type CheckResult = Result<(), String>;

/// State handed to each check body.
pub struct CheckContext {
    pub rng: StdRng,
    pub epsilon: f32,
    pub iterations: u32,
}

impl CheckContext {
    pub fn new(seed: u64, epsilon: f32, iterations: u32) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
            epsilon,
            iterations,
        }
    }

    /// Uniform scalar in `[-extent, extent)`.
    pub fn scalar(&mut self, extent: f32) -> f32 {
        self.rng.gen_range(-extent..extent)
    }

    /// Vector with each component in `[-extent, extent)`.
    pub fn vec3(&mut self, extent: f32) -> Vec3 {
        Vec3::new(self.scalar(extent), self.scalar(extent), self.scalar(extent))
    }

    /// Random unit quaternion.
    pub fn unit_quat(&mut self) -> Quat {
        Quat::from_xyzw(
            self.scalar(1.0),
            self.scalar(1.0),
            self.scalar(1.0),
            self.scalar(1.0),
        )
        .normalize()
    }

    /// Per-axis scale whose components are each `1` or `-1`.
    pub fn sign_scale(&mut self) -> Vec3 {
        let mut sign = || if self.rng.gen_bool(0.5) { 1.0 } else { -1.0 };
        Vec3::new(sign(), sign(), sign())
    }

    /// Per-axis scale with magnitudes in `[0.1, extent)` and random sign.
    pub fn scale(&mut self, extent: f32) -> Vec3 {
        let mut axis = || {
            let m = self.rng.gen_range(0.1..extent);
            if self.rng.gen_bool(0.5) {
                m
            } else {
                -m
            }
        };
        Vec3::new(axis(), axis(), axis())
    }

    /// Matrix with every element in `[-extent, extent)`.
    pub fn mat4(&mut self, extent: f32) -> Mat4 {
        let mut data = [0.0; 16];
        for v in data.iter_mut() {
            *v = self.scalar(extent);
        }
        Mat4::from_array(data)
    }

    pub fn ensure_near(&self, what: &str, actual: f32, expected: f32) -> CheckResult {
        ensure_near(what, actual, expected, self.epsilon)
    }

    pub fn ensure_vec3_near(&self, what: &str, actual: Vec3, expected: Vec3) -> CheckResult {
        for i in 0..3 {
            if (actual[i] - expected[i]).abs() > self.epsilon {
                return Err(format!("{what}: expected {expected:?}, got {actual:?}"));
            }
        }
        Ok(())
    }

    pub fn ensure_mat4_near(&self, what: &str, actual: &Mat4, expected: &Mat4) -> CheckResult {
        for r in 0..4 {
            for c in 0..4 {
                let (a, e) = (actual[(r, c)], expected[(r, c)]);
                if (a - e).abs() > self.epsilon {
                    return Err(format!("{what}: element ({r}, {c}) expected {e}, got {a}"));
                }
            }
        }
        Ok(())
    }
}

pub fn ensure(cond: bool, msg: impl FnOnce() -> String) -> CheckResult {
    if cond {
        Ok(())
    } else {
        Err(msg())
    }
}

/// Exact equality.
pub fn ensure_eq<T: PartialEq + Debug>(what: &str, actual: T, expected: T) -> CheckResult {
    ensure(actual == expected, || {
        format!("{what}: expected {expected:?}, got {actual:?}")
    })
}

pub fn ensure_near(what: &str, actual: f32, expected: f32, epsilon: f32) -> CheckResult {
    ensure((actual - expected).abs() <= epsilon, || {
        format!("{what}: expected {expected} ± {epsilon}, got {actual}")
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn same_seed_same_samples() {
        let mut a = CheckContext::new(9, 1e-4, 1);
        let mut b = CheckContext::new(9, 1e-4, 1);
        assert_eq!(a.vec3(10.0), b.vec3(10.0));
        assert_eq!(a.unit_quat(), b.unit_quat());
    }

    #[test]
    fn generators_respect_bounds() {
        let mut ctx = CheckContext::new(1, 1e-4, 1);
        for _ in 0..100 {
            let q = ctx.unit_quat();
            assert!((q.len() - 1.0).abs() < 1e-5);

            let s = ctx.scale(4.0);
            for i in 0..3 {
                assert!(s[i].abs() >= 0.1 && s[i].abs() < 4.0);
            }

            let u = ctx.sign_scale();
            for i in 0..3 {
                assert_eq!(u[i].abs(), 1.0);
            }
        }
    }

    #[test]
    fn ensure_helpers_report_mismatch() {
        let ctx = CheckContext::new(0, 1e-3, 1);
        assert!(ctx.ensure_near("x", 1.0005, 1.0).is_ok());
        let err = ctx.ensure_near("x", 1.1, 1.0).unwrap_err();
        assert!(err.starts_with("x:"));

        assert!(ensure_eq("n", 3, 3).is_ok());
        assert!(ensure_eq("n", 3, 4).is_err());

        let err = ctx
            .ensure_mat4_near("m", &Mat4::diagonal(2.0), &Mat4::IDENTITY)
            .unwrap_err();
        assert!(err.contains("(0, 0)"));
    }
}
