//! Reductions over strided vectors.
//!
//! All reductions fold in logical index order `0..n` via the iteration
//! kernel, so a traversal with stride `s` over a buffer and a traversal with stride
//! `-s` over the logically reversed buffer produce identical results. An
//! `n == 0` reduction returns its identity element.

use crate::kernel::{fold, fold_indexed, zip_fold};
use crate::view::{VectorView, VectorViewMut};
use crate::{Result, StridedError};
use num_traits::Float;
use std::ops::{Add, Mul};

/// Sum of all elements in logical order. Returns 0 for an empty view.
pub fn sum<T: Float>(x: &VectorView<'_, T>) -> T {
    fold(x, T::zero(), |acc, v| acc + v)
}

/// Compensated sum using the Kahan-Babuska-Neumaier scheme.
///
/// Maintains a running correction term alongside the running sum to reduce
/// cancellation error. The naive accumulation of [`sum`] is never
/// substituted for this variant.
pub fn sum_kbn<T: Float>(x: &VectorView<'_, T>) -> T {
    let (s, c) = fold(x, (T::zero(), T::zero()), |(s, c), v| {
        let t = s + v;
        let c = if s.abs() >= v.abs() {
            c + ((s - t) + v)
        } else {
            c + ((v - t) + s)
        };
        (t, c)
    });
    s + c
}

/// Sum skipping NaN elements.
///
/// Returns the sum over the non-NaN elements together with the count of
/// elements consumed, which downstream statistics (e.g., a mean) need.
/// An all-NaN or empty view yields `(0, 0)`.
pub fn nansum<T: Float>(x: &VectorView<'_, T>) -> (T, usize) {
    fold(x, (T::zero(), 0usize), |(s, n), v| {
        if v.is_nan() {
            (s, n)
        } else {
            (s + v, n + 1)
        }
    })
}

/// Sum of absolute values.
pub fn asum<T: Float>(x: &VectorView<'_, T>) -> T {
    fold(x, T::zero(), |acc, v| acc + v.abs())
}

/// Inner product of `x` and `y` in logical order.
pub fn dot<T>(x: &VectorView<'_, T>, y: &VectorView<'_, T>) -> Result<T>
where
    T: Copy + num_traits::Zero + Add<Output = T> + Mul<Output = T>,
{
    if x.len != y.len {
        return Err(StridedError::LengthMismatch(x.len, y.len));
    }
    Ok(zip_fold(x, y, T::zero(), |acc, xv, yv| acc + xv * yv))
}

/// Cumulative sum with an initial value, written through `y`'s stride:
/// `y[i] = init + x[0] + ... + x[i]`.
pub fn cusum<T: Float>(
    init: T,
    x: &VectorView<'_, T>,
    y: &mut VectorViewMut<'_, T>,
) -> Result<()> {
    if x.len != y.len {
        return Err(StridedError::LengthMismatch(x.len, y.len));
    }
    let mut s = init;
    let mut ix = x.offset as isize;
    let mut iy = y.offset as isize;
    for _ in 0..x.len {
        // SAFETY: view construction validated every physical index.
        unsafe {
            s = s + *x.data.get_unchecked(ix as usize);
            *y.data.get_unchecked_mut(iy as usize) = s;
        }
        ix += x.stride;
        iy += y.stride;
    }
    Ok(())
}

/// Cumulative sum with an initial value, using Kahan-Babuska-Neumaier
/// compensation. Each output element is the compensated running total.
pub fn cusum_kbn<T: Float>(
    init: T,
    x: &VectorView<'_, T>,
    y: &mut VectorViewMut<'_, T>,
) -> Result<()> {
    if x.len != y.len {
        return Err(StridedError::LengthMismatch(x.len, y.len));
    }
    let mut s = init;
    let mut c = T::zero();
    let mut ix = x.offset as isize;
    let mut iy = y.offset as isize;
    for _ in 0..x.len {
        // SAFETY: view construction validated every physical index.
        unsafe {
            let v = *x.data.get_unchecked(ix as usize);
            let t = s + v;
            if s.abs() >= v.abs() {
                c = c + ((s - t) + v);
            } else {
                c = c + ((v - t) + s);
            }
            s = t;
            *y.data.get_unchecked_mut(iy as usize) = s + c;
        }
        ix += x.stride;
        iy += y.stride;
    }
    Ok(())
}

/// 0-based logical index of the first element with maximum absolute value.
///
/// Ties resolve to the earliest logical index. Returns `None` for an empty
/// view.
pub fn iamax<T: Float>(x: &VectorView<'_, T>) -> Option<usize> {
    if x.len == 0 {
        return None;
    }
    let first = x.get(0).abs();
    let (best, _) = fold_indexed(x, (0usize, first), |(bi, bv), i, v| {
        let av = v.abs();
        if i > 0 && av > bv {
            (i, av)
        } else {
            (bi, bv)
        }
    });
    Some(best)
}

/// Minimum over unmasked elements.
///
/// An element is excluded when its mask entry (read through the mask's own
/// stride) is nonzero; excluded elements never affect the result. `None` is
/// the "no valid elements" sentinel. An unmasked NaN poisons the result.
pub fn mskmin<T: Float>(x: &VectorView<'_, T>, mask: &VectorView<'_, u8>) -> Result<Option<T>> {
    masked_extremum(x, mask, |acc, v| v < acc)
}

/// Maximum over unmasked elements. Same mask and sentinel semantics as
/// [`mskmin`].
pub fn mskmax<T: Float>(x: &VectorView<'_, T>, mask: &VectorView<'_, u8>) -> Result<Option<T>> {
    masked_extremum(x, mask, |acc, v| v > acc)
}

fn masked_extremum<T: Float>(
    x: &VectorView<'_, T>,
    mask: &VectorView<'_, u8>,
    better: impl Fn(T, T) -> bool,
) -> Result<Option<T>> {
    if x.len != mask.len {
        return Err(StridedError::LengthMismatch(x.len, mask.len));
    }
    let acc = zip_fold(x, mask, None, |acc: Option<T>, v, m| {
        if m != 0 {
            return acc;
        }
        match acc {
            _ if v.is_nan() => Some(v),
            Some(prev) if prev.is_nan() => Some(prev),
            Some(prev) => Some(if better(prev, v) { v } else { prev }),
            None => Some(v),
        }
    });
    Ok(acc)
}
