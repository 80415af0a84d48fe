//! Angle normalization and unit conversion.
//!
//! All angles are in radians unless the function name says otherwise.

use crate::scalar::Scalar;

/// Normalizes `phi` into the 2π wide interval centered on `center`.
///
/// Returns `phi - 2πk` for the integer `k` that puts the result in
/// `[center - π, center + π]`. Since π is not exactly representable, both
/// ends of the interval can be reached.
///
/// Common uses:
/// - `normalize_angle(a, π)` maps into `[0, 2π]`
/// - `normalize_angle(a, 0)` maps into `[-π, π]`
/// - `normalize_angle(end, start) - start` is the sweep from `start` to `end`
///
/// # Example
///
/// ```
/// use geometry::angle::normalize_angle;
/// use std::f64::consts::PI;
///
/// let a = normalize_angle(5.0 * PI / 2.0, 0.0);
/// assert!((a - PI / 2.0).abs() < 1e-12);
/// ```
#[inline]
pub fn normalize_angle<F: Scalar>(phi: F, center: F) -> F {
    phi - F::two_pi() * ((phi + F::pi() - center) / F::two_pi()).floor()
}

/// Normalizes `phi` into `]-π, π]`.
///
/// Agrees with `normalize_angle(phi, 0)` up to rounding at the boundary.
#[inline]
pub fn normalize_radians<F: Scalar>(phi: F) -> F {
    phi - (phi / F::two_pi() - F::half()).ceil() * F::two_pi()
}

/// Signed angle from `start` to `end`, in `[-π, π]`.
///
/// Positive when `end` is counter-clockwise from `start`.
#[inline]
pub fn angle_between<F: Scalar>(start: F, end: F) -> F {
    normalize_angle(end, start) - start
}

/// Converts degrees to radians.
#[inline]
pub fn degrees_to_radians<F: Scalar>(degrees: F) -> F {
    (degrees * F::pi()) / F::literal(180.0)
}

/// Converts radians to degrees.
#[inline]
pub fn radians_to_degrees<F: Scalar>(radians: F) -> F {
    (radians * F::literal(180.0)) / F::pi()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::samples;
    use approx::assert_relative_eq;
    use std::f64::consts::{FRAC_PI_2, PI};

    #[test]
    fn test_degrees_to_radians() {
        assert_relative_eq!(degrees_to_radians(180.0), PI, epsilon = 1e-12);
        assert_relative_eq!(degrees_to_radians(90.0), FRAC_PI_2, epsilon = 1e-12);
        assert_relative_eq!(degrees_to_radians(180.0f32), std::f32::consts::PI, epsilon = 1e-6);
    }

    #[test]
    fn test_radians_to_degrees() {
        assert_relative_eq!(radians_to_degrees(PI), 180.0, epsilon = 1e-12);
        assert_relative_eq!(radians_to_degrees(-FRAC_PI_2), -90.0, epsilon = 1e-12);
    }

    #[test]
    fn test_normalize_angle_known_values() {
        assert_relative_eq!(normalize_angle(3.0 * PI - 0.5, 0.0), PI - 0.5, epsilon = 1e-12);
        assert_relative_eq!(normalize_angle(-FRAC_PI_2, PI), 3.0 * FRAC_PI_2, epsilon = 1e-12);
        assert_relative_eq!(normalize_angle(7.0, 0.0), 7.0 - 2.0 * PI, epsilon = 1e-12);
        assert_eq!(normalize_angle(0.5, 0.0), 0.5);
    }

    #[test]
    fn test_normalize_angle_upper_bound_wraps_to_lower() {
        for center in [0.0, -PI] {
            let n = normalize_angle(center + PI, center);
            assert_relative_eq!(n, center - PI, epsilon = 1e-12);
            assert_eq!(normalize_angle(n, center), n);
        }
        assert_eq!(normalize_angle(PI as f32, 0.0), -std::f32::consts::PI);
    }

    #[test]
    fn test_normalize_angle_in_range_and_idempotent() {
        let angles = samples(200, 0xdead_beef, 100.0);
        let centers = samples(200, 0x1234_5678, 10.0);
        for (&phi, &center) in angles.iter().zip(&centers) {
            let n = normalize_angle(phi, center);
            assert!(n >= center - PI - 1e-9, "{n} below range around {center}");
            assert!(n <= center + PI + 1e-9, "{n} above range around {center}");
            assert_relative_eq!(normalize_angle(n, center), n, epsilon = 1e-9);
        }
    }

    #[test]
    fn test_normalize_radians() {
        assert_relative_eq!(normalize_radians(3.0 * FRAC_PI_2), -FRAC_PI_2, epsilon = 1e-12);
        assert_relative_eq!(normalize_radians(-3.0 * FRAC_PI_2), FRAC_PI_2, epsilon = 1e-12);
        assert_relative_eq!(normalize_radians(PI), PI, epsilon = 1e-12);
        assert_eq!(normalize_radians(0.25), 0.25);
    }

    #[test]
    fn test_normalize_radians_agrees_with_centered_form() {
        for phi in samples(200, 99, 50.0) {
            let a = normalize_radians(phi);
            let b = normalize_angle(phi, 0.0);
            let diff = (a - b).abs();
            // Both land on the same angle, or on -π and π respectively.
            assert!(
                diff < 1e-9 || (diff - 2.0 * PI).abs() < 1e-9,
                "{phi}: {a} vs {b}"
            );
        }
    }

    #[test]
    fn test_angle_between() {
        assert_relative_eq!(angle_between(0.0, FRAC_PI_2), FRAC_PI_2, epsilon = 1e-12);
        assert_relative_eq!(angle_between(FRAC_PI_2, 0.0), -FRAC_PI_2, epsilon = 1e-12);
        assert_relative_eq!(angle_between(0.0, 3.0 * FRAC_PI_2), -FRAC_PI_2, epsilon = 1e-12);
        assert_relative_eq!(angle_between(3.0, 3.0 + 4.0 * PI + 1.0), 1.0, epsilon = 1e-9);
    }
}
