//! Overflow-safe sums of squares and Euclidean norms.
//!
//! The accumulation keeps a `(scale, ssq)` pair such that the running sum of
//! squares equals `scale^2 * ssq`, rescaling whenever an element exceeds the
//! current scale. This avoids intermediate overflow/underflow for elements
//! near the extremes of the exponent range.

use crate::kernel::fold;
use crate::view::VectorView;
use num_complex::Complex;
use num_traits::Float;

#[inline]
fn sumsq_update<T: Float>(scale: T, ssq: T, v: T) -> (T, T) {
    let av = v.abs();
    if av == T::zero() {
        return (scale, ssq);
    }
    if scale < av {
        let r = scale / av;
        (av, T::one() + ssq * r * r)
    } else {
        let r = av / scale;
        (scale, ssq + r * r)
    }
}

/// Update a scaled sum of squares with the elements of `x`.
///
/// On return, `scale^2 * ssq` equals the initial `scale^2 * ssq` plus the
/// sum of squared elements. Start from `(0, 1)` for a fresh accumulation.
pub fn sumsq<T: Float>(x: &VectorView<'_, T>, scale: T, ssq: T) -> (T, T) {
    fold(x, (scale, ssq), |(sc, sq), v| sumsq_update(sc, sq, v))
}

/// Euclidean norm of a real vector. Returns 0 for an empty view.
pub fn nrm2<T: Float>(x: &VectorView<'_, T>) -> T {
    let (scale, ssq) = sumsq(x, T::zero(), T::one());
    scale * ssq.sqrt()
}

/// Euclidean norm of a complex vector.
///
/// The real and imaginary parts of each logical element are folded into the
/// scaled accumulation together, before the traversal advances to the next
/// element.
pub fn nrm2_complex<T: Float>(x: &VectorView<'_, Complex<T>>) -> T {
    let (scale, ssq) = fold(x, (T::zero(), T::one()), |(sc, sq), z| {
        let (sc, sq) = sumsq_update(sc, sq, z.re);
        sumsq_update(sc, sq, z.im)
    });
    scale * ssq.sqrt()
}
