//! Degree/radian conversions and degree-argument trigonometry.
//!
//! The degree-argument functions reduce modulo 360 and treat exact quarter
//! turns specially, so `sind(180.0)` is exactly 0 rather than
//! `sin(pi_approx)`. `sinpi`/`cospi` apply the analogous reductions in units
//! of half turns; the gamma-family reflections depend on their exactness at
//! integers.

use std::f64::consts::PI;

/// Convert an angle from degrees to radians.
#[inline]
pub fn deg2rad(x: f64) -> f64 {
    x * (PI / 180.0)
}

/// Convert an angle from radians to degrees.
#[inline]
pub fn rad2deg(x: f64) -> f64 {
    x * (180.0 / PI)
}

/// Sine of an angle given in degrees.
pub fn sind(x: f64) -> f64 {
    if x.is_nan() || x.is_infinite() {
        return f64::NAN;
    }
    if x == 0.0 {
        return x; // preserves signed zero
    }
    let r = x % 360.0;
    let q = r / 90.0;
    if q == q.trunc() {
        return match (q as i32).rem_euclid(4) {
            0 | 2 => 0.0,
            1 => 1.0,
            _ => -1.0,
        };
    }
    deg2rad(r).sin()
}

/// Cosine of an angle given in degrees.
pub fn cosd(x: f64) -> f64 {
    if x.is_nan() || x.is_infinite() {
        return f64::NAN;
    }
    let r = x % 360.0;
    let q = r / 90.0;
    if q == q.trunc() {
        return match (q as i32).rem_euclid(4) {
            0 => 1.0,
            2 => -1.0,
            _ => 0.0,
        };
    }
    deg2rad(r).cos()
}

/// Tangent of an angle given in degrees.
///
/// Exact zeros in the reduced cosine make odd multiples of 90 return the
/// signed infinities instead of large finite values.
pub fn tand(x: f64) -> f64 {
    sind(x) / cosd(x)
}

/// Arcsine in degrees. NaN outside `[-1, 1]`.
#[inline]
pub fn asind(x: f64) -> f64 {
    rad2deg(x.asin())
}

/// Arccosine in degrees. NaN outside `[-1, 1]`.
#[inline]
pub fn acosd(x: f64) -> f64 {
    rad2deg(x.acos())
}

/// Arctangent in degrees.
#[inline]
pub fn atand(x: f64) -> f64 {
    rad2deg(x.atan())
}

/// Compute `sin(pi * x)` with exact zeros at integers.
pub fn sinpi(x: f64) -> f64 {
    if x.is_nan() || x.is_infinite() {
        return f64::NAN;
    }
    // Argument reduction to |r| < 2 half-turns, then quadrant selection so
    // that the sin/cos evaluation point stays within an eighth turn of zero.
    let mut r = x % 2.0;
    let mut ar = r.abs();
    if ar == 0.0 || ar == 1.0 {
        return 0.0_f64.copysign(r);
    }
    if ar < 0.25 {
        return (PI * r).sin();
    }
    if ar < 0.75 {
        ar = 0.5 - ar;
        return (PI * ar).cos().copysign(r);
    }
    if ar < 1.25 {
        r = 1.0_f64.copysign(r) - r;
        return (PI * r).sin();
    }
    if ar < 1.75 {
        ar -= 1.5;
        return -(PI * ar).cos().copysign(r);
    }
    r -= 2.0_f64.copysign(r);
    (PI * r).sin()
}

/// Compute `cos(pi * x)` with exact zeros at half-integers.
pub fn cospi(x: f64) -> f64 {
    if x.is_nan() || x.is_infinite() {
        return f64::NAN;
    }
    let ar = x.abs() % 2.0;
    if ar < 0.25 {
        return (PI * ar).cos();
    }
    if ar < 0.75 {
        return (PI * (0.5 - ar)).sin();
    }
    if ar < 1.25 {
        return -(PI * (ar - 1.0)).cos();
    }
    if ar < 1.75 {
        return (PI * (ar - 1.5)).sin();
    }
    (PI * (ar - 2.0)).cos()
}
