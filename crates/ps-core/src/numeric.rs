use crate::PsError;

/// Floating point type used throughout system
pub type Real = f64;

/// Absolute/relative tolerance pair for float comparisons.
#[derive(Clone, Copy, Debug)]
pub struct Tolerances {
    pub abs: Real,
    pub rel: Real,
}

impl Default for Tolerances {
    fn default() -> Self {
        Self {
            abs: 1e-12,
            rel: 1e-9,
        }
    }
}

impl Tolerances {
    /// Absolute-only tolerance, handy for display-precision checks.
    pub const fn absolute(abs: Real) -> Self {
        Self { abs, rel: 0.0 }
    }
}

pub fn nearly_equal(a: Real, b: Real, tol: Tolerances) -> bool {
    let diff = (a - b).abs();
    if diff <= tol.abs {
        return true;
    }
    diff <= tol.rel * a.abs().max(b.abs())
}

pub fn ensure_finite(v: Real, what: &'static str) -> Result<Real, PsError> {
    if v.is_finite() {
        Ok(v)
    } else {
        Err(PsError::NonFinite { what, value: v })
    }
}

/// Linear interpolation of `t` in `[0, 1]` between `a` and `b`.
#[inline]
pub fn lerp(a: Real, b: Real, t: Real) -> Real {
    a + (b - a) * t
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn nearly_equal_basic() {
        let tol = Tolerances {
            abs: 1e-12,
            rel: 1e-9,
        };
        assert!(nearly_equal(1.0, 1.0 + 1e-12, tol));
        assert!(nearly_equal(0.0, 1e-13, tol));
        assert!(!nearly_equal(1.0, 1.0 + 1e-6, tol));
    }

    #[test]
    fn absolute_tolerance_ignores_magnitude() {
        let tol = Tolerances::absolute(0.01);
        assert!(nearly_equal(2515.0, 2515.005, tol));
        assert!(!nearly_equal(2515.0, 2515.02, tol));
    }

    #[test]
    fn ensure_finite_detects_nan() {
        let err = ensure_finite(Real::NAN, "test").unwrap_err();
        let msg = format!("{err}");
        assert!(msg.contains("Non-finite"));
    }

    #[test]
    fn lerp_endpoints() {
        assert_eq!(lerp(2.0, 4.0, 0.0), 2.0);
        assert_eq!(lerp(2.0, 4.0, 1.0), 4.0);
        assert_eq!(lerp(2.0, 4.0, 0.5), 3.0);
    }
}

#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        #[test]
        fn nearly_equal_is_symmetric(a in -1e6_f64..1e6, b in -1e6_f64..1e6) {
            let tol = Tolerances::default();
            prop_assert_eq!(nearly_equal(a, b, tol), nearly_equal(b, a, tol));
        }

        #[test]
        fn lerp_stays_between_endpoints(
            a in -100.0_f64..100.0,
            b in -100.0_f64..100.0,
            t in 0.0_f64..=1.0
        ) {
            let v = lerp(a, b, t);
            prop_assert!(v >= a.min(b) - 1e-9 && v <= a.max(b) + 1e-9);
        }
    }
}
