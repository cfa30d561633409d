//! The strided iteration protocol.
//!
//! Every vector operation in the crate walks its operands the same way:
//! logical indices `0..n` in order, physical index `offset + i * stride` per
//! operand. Reductions fold in that logical order, which keeps
//! floating-point results reproducible regardless of stride sign.

use crate::view::VectorView;

/// Starting offset for the default addressing convention.
///
/// Returns 0 for a nonnegative stride and `(n - 1) * |stride|` for a
/// negative one, so that the first processed value is the logical element 0
/// in both directions. Computed once per view, never per step.
///
/// # Example
/// ```rust
/// use strided_num::stride_offset;
///
/// assert_eq!(stride_offset(4, 2), 0);
/// assert_eq!(stride_offset(4, -2), 6);
/// assert_eq!(stride_offset(0, -3), 0);
/// ```
#[inline]
pub fn stride_offset(n: usize, stride: isize) -> usize {
    if stride >= 0 || n == 0 {
        0
    } else {
        (n - 1) * stride.unsigned_abs()
    }
}

/// Fold over the elements of `x` in logical order.
#[inline]
pub(crate) fn fold<T, A, F>(x: &VectorView<'_, T>, init: A, mut f: F) -> A
where
    T: Copy,
    F: FnMut(A, T) -> A,
{
    let mut acc = init;
    let mut idx = x.offset as isize;
    for _ in 0..x.len {
        // SAFETY: view construction validated every physical index.
        acc = f(acc, unsafe { *x.data.get_unchecked(idx as usize) });
        idx += x.stride;
    }
    acc
}

/// Fold over the elements of `x` paired with their logical indices.
#[inline]
pub(crate) fn fold_indexed<T, A, F>(x: &VectorView<'_, T>, init: A, mut f: F) -> A
where
    T: Copy,
    F: FnMut(A, usize, T) -> A,
{
    let mut acc = init;
    let mut idx = x.offset as isize;
    for i in 0..x.len {
        // SAFETY: view construction validated every physical index.
        acc = f(acc, i, unsafe { *x.data.get_unchecked(idx as usize) });
        idx += x.stride;
    }
    acc
}

/// Fold over paired elements of `x` and `y` in logical order.
///
/// The caller must have checked that the logical lengths match.
#[inline]
pub(crate) fn zip_fold<T, U, A, F>(
    x: &VectorView<'_, T>,
    y: &VectorView<'_, U>,
    init: A,
    mut f: F,
) -> A
where
    T: Copy,
    U: Copy,
    F: FnMut(A, T, U) -> A,
{
    debug_assert_eq!(x.len, y.len);
    let mut acc = init;
    let mut ix = x.offset as isize;
    let mut iy = y.offset as isize;
    for _ in 0..x.len {
        // SAFETY: view construction validated every physical index.
        let (xv, yv) = unsafe {
            (
                *x.data.get_unchecked(ix as usize),
                *y.data.get_unchecked(iy as usize),
            )
        };
        acc = f(acc, xv, yv);
        ix += x.stride;
        iy += y.stride;
    }
    acc
}
