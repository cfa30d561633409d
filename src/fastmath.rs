//! Accuracy-for-speed variants of common computations.
//!
//! These kernels trade bounded relative error for avoiding expensive
//! operations (square roots, transcendental calls). The error bounds quoted
//! in the tests are empirical characterizations over dense samples, not
//! analytic guarantees.

/// Alpha coefficient of the max-plus-min hypotenuse approximation:
/// `2 cos(pi/8) / (1 + cos(pi/8))`.
pub const AMPBM_ALPHA: f64 = 0.96043387010342;

/// Beta coefficient of the max-plus-min hypotenuse approximation:
/// `2 sin(pi/8) / (1 + cos(pi/8))`.
pub const AMPBM_BETA: f64 = 0.39782473475932;

/// Approximate `sqrt(x^2 + y^2)` as `alpha * max(|x|, |y|) +
/// beta * min(|x|, |y|)` with caller-supplied coefficients.
#[inline]
pub fn hypot_fast_with(x: f64, y: f64, alpha: f64, beta: f64) -> f64 {
    let ax = x.abs();
    let ay = y.abs();
    if ax > ay {
        alpha * ax + beta * ay
    } else {
        alpha * ay + beta * ax
    }
}

/// Approximate the hypotenuse without a square root.
///
/// Uses the default alpha-max-plus-beta-min coefficients, which keep the
/// relative error within about 4% over the full quadrant.
#[inline]
pub fn hypot_fast(x: f64, y: f64) -> f64 {
    hypot_fast_with(x, y, AMPBM_ALPHA, AMPBM_BETA)
}

/// Raise a double to an integer power by repeated squaring.
///
/// Runs in `O(log |n|)` multiplications. Negative exponents go through a
/// single reciprocal at the end, so `powi_fast(0.0, -1)` is `inf` like
/// `1.0 / 0.0`.
pub fn powi_fast(x: f64, n: i32) -> f64 {
    let mut base = x;
    let mut e = n.unsigned_abs();
    let mut acc = 1.0;
    while e > 0 {
        if e & 1 == 1 {
            acc *= base;
        }
        base *= base;
        e >>= 1;
    }
    if n < 0 {
        1.0 / acc
    } else {
        acc
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_hypot_fast_error_bound() {
        // Empirical characterization: relative error stays below 4% over a
        // dense sweep of directions and magnitudes.
        let mut worst = 0.0_f64;
        for i in 0..=1000 {
            let theta = i as f64 / 1000.0 * std::f64::consts::FRAC_PI_2;
            for &scale in &[1.0e-3, 1.0, 1.0e6] {
                let (x, y) = (scale * theta.cos(), scale * theta.sin());
                let exact = x.hypot(y);
                let approx = hypot_fast(x, y);
                worst = worst.max(((approx - exact) / exact).abs());
            }
        }
        assert!(worst < 0.04, "worst relative error {worst}");
    }

    #[test]
    fn test_hypot_fast_exact_axes_scale() {
        // On the axes the approximation reduces to alpha * |x|.
        assert_relative_eq!(hypot_fast(3.0, 0.0), AMPBM_ALPHA * 3.0);
        assert_relative_eq!(hypot_fast(0.0, -2.0), AMPBM_ALPHA * 2.0);
    }

    #[test]
    fn test_hypot_fast_with_custom_coefficients() {
        // alpha = 1, beta = 0 degenerates to max(|x|, |y|)
        assert_eq!(hypot_fast_with(-3.0, 2.0, 1.0, 0.0), 3.0);
    }

    #[test]
    fn test_powi_fast() {
        assert_eq!(powi_fast(2.0, 10), 1024.0);
        assert_eq!(powi_fast(3.0, 0), 1.0);
        assert_eq!(powi_fast(2.0, -3), 0.125);
        assert_eq!(powi_fast(-2.0, 3), -8.0);
        assert_eq!(powi_fast(-2.0, 4), 16.0);
        assert_eq!(powi_fast(0.0, -1), f64::INFINITY);
    }

    #[test]
    fn test_powi_fast_matches_std_powi() {
        for &x in &[0.5, 1.5, -1.1, 3.0] {
            for n in -20..=20 {
                assert_relative_eq!(powi_fast(x, n), x.powi(n), max_relative = 1e-13);
            }
        }
    }
}
