//! Element-wise and in-place transformations over strided vectors.
//!
//! Every operation visits logical indices `0..n` in order, reading and
//! writing through each operand's own stride. Binary operations require
//! matching logical lengths; an `n == 0` call performs zero buffer writes.

use crate::view::{VectorView, VectorViewMut};
use crate::{Result, StridedError};
use num_traits::Float;
use std::ops::{Add, Mul, Sub};

#[inline]
fn ensure_same_len(a: usize, b: usize) -> Result<()> {
    if a != b {
        return Err(StridedError::LengthMismatch(a, b));
    }
    Ok(())
}

/// Copy `x` into `y`: `y[i] = x[i]`.
pub fn copy<T: Copy>(x: &VectorView<'_, T>, y: &mut VectorViewMut<'_, T>) -> Result<()> {
    ensure_same_len(x.len, y.len)?;
    if x.len == 0 {
        return Ok(());
    }

    // Contiguous fast path
    if let (Some(src), 1) = (x.as_slice(), y.stride) {
        y.data[y.offset..y.offset + y.len].copy_from_slice(src);
        return Ok(());
    }

    let mut ix = x.offset as isize;
    let mut iy = y.offset as isize;
    for _ in 0..x.len {
        // SAFETY: view construction validated every physical index.
        unsafe {
            *y.data.get_unchecked_mut(iy as usize) = *x.data.get_unchecked(ix as usize);
        }
        ix += x.stride;
        iy += y.stride;
    }
    Ok(())
}

/// Exchange the elements of `x` and `y`.
///
/// Swapping the same pair twice restores both buffers.
pub fn swap<T: Copy>(x: &mut VectorViewMut<'_, T>, y: &mut VectorViewMut<'_, T>) -> Result<()> {
    ensure_same_len(x.len, y.len)?;
    let mut ix = x.offset as isize;
    let mut iy = y.offset as isize;
    for _ in 0..x.len {
        // SAFETY: view construction validated every physical index.
        unsafe {
            let tmp = *x.data.get_unchecked(ix as usize);
            *x.data.get_unchecked_mut(ix as usize) = *y.data.get_unchecked(iy as usize);
            *y.data.get_unchecked_mut(iy as usize) = tmp;
        }
        ix += x.stride;
        iy += y.stride;
    }
    Ok(())
}

/// Scale in place: `x[i] *= alpha`.
pub fn scal<T>(alpha: T, x: &mut VectorViewMut<'_, T>)
where
    T: Copy + Mul<Output = T>,
{
    let mut ix = x.offset as isize;
    for _ in 0..x.len {
        // SAFETY: view construction validated every physical index.
        unsafe {
            let v = *x.data.get_unchecked(ix as usize);
            *x.data.get_unchecked_mut(ix as usize) = alpha * v;
        }
        ix += x.stride;
    }
}

/// Scaled add: `y[i] = alpha * x[i] + y[i]`.
pub fn axpy<T>(alpha: T, x: &VectorView<'_, T>, y: &mut VectorViewMut<'_, T>) -> Result<()>
where
    T: Copy + Add<Output = T> + Mul<Output = T>,
{
    ensure_same_len(x.len, y.len)?;
    let mut ix = x.offset as isize;
    let mut iy = y.offset as isize;
    for _ in 0..x.len {
        // SAFETY: view construction validated every physical index.
        unsafe {
            let xv = *x.data.get_unchecked(ix as usize);
            let yv = *y.data.get_unchecked(iy as usize);
            *y.data.get_unchecked_mut(iy as usize) = alpha * xv + yv;
        }
        ix += x.stride;
        iy += y.stride;
    }
    Ok(())
}

/// Apply a plane (Givens) rotation to the vector pair:
///
/// ```text
/// x[i] = c * x[i] + s * y[i]
/// y[i] = c * y[i] - s * x[i]
/// ```
///
/// `c` and `s` stay real even when the vectors are complex, which covers the
/// complex-vector/real-rotation variant with the same signature.
pub fn rot<T, S>(
    x: &mut VectorViewMut<'_, T>,
    y: &mut VectorViewMut<'_, T>,
    c: S,
    s: S,
) -> Result<()>
where
    T: Copy + Add<Output = T> + Sub<Output = T> + Mul<S, Output = T>,
    S: Copy,
{
    ensure_same_len(x.len, y.len)?;
    let mut ix = x.offset as isize;
    let mut iy = y.offset as isize;
    for _ in 0..x.len {
        // SAFETY: view construction validated every physical index.
        unsafe {
            let xv = *x.data.get_unchecked(ix as usize);
            let yv = *y.data.get_unchecked(iy as usize);
            *x.data.get_unchecked_mut(ix as usize) = xv * c + yv * s;
            *y.data.get_unchecked_mut(iy as usize) = yv * c - xv * s;
        }
        ix += x.stride;
        iy += y.stride;
    }
    Ok(())
}

/// Parameters of a modified (fast) Givens rotation.
///
/// The flag selects which entries of the 2x2 transformation are implied:
///
/// ```text
/// Full:        H = [ h11  h12 ]   OffDiagonal: H = [ 1    h12 ]
///                  [ h21  h22 ]                    [ h21  1   ]
///
/// Diagonal:    H = [ h11  1   ]   Identity:    H = I (no-op)
///                  [ -1   h22 ]
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RotmFlag {
    /// All four entries are taken from the parameters.
    Full,
    /// Unit diagonal; off-diagonal entries from the parameters.
    OffDiagonal,
    /// Diagonal entries from the parameters; `h12 = 1`, `h21 = -1`.
    Diagonal,
    /// Identity transformation; the vectors are left untouched.
    Identity,
}

/// Modified Givens rotation parameters (flag plus the 2x2 entries).
#[derive(Debug, Clone, Copy)]
pub struct RotmParams<T> {
    pub flag: RotmFlag,
    pub h11: T,
    pub h21: T,
    pub h12: T,
    pub h22: T,
}

/// Apply a modified Givens rotation to the vector pair.
pub fn rotm<T: Float>(
    x: &mut VectorViewMut<'_, T>,
    y: &mut VectorViewMut<'_, T>,
    param: &RotmParams<T>,
) -> Result<()> {
    ensure_same_len(x.len, y.len)?;
    if param.flag == RotmFlag::Identity {
        return Ok(());
    }
    let mut ix = x.offset as isize;
    let mut iy = y.offset as isize;
    for _ in 0..x.len {
        // SAFETY: view construction validated every physical index.
        unsafe {
            let xv = *x.data.get_unchecked(ix as usize);
            let yv = *y.data.get_unchecked(iy as usize);
            let (nx, ny) = match param.flag {
                RotmFlag::Full => (
                    param.h11 * xv + param.h12 * yv,
                    param.h21 * xv + param.h22 * yv,
                ),
                RotmFlag::OffDiagonal => (xv + param.h12 * yv, param.h21 * xv + yv),
                RotmFlag::Diagonal => (param.h11 * xv + yv, param.h22 * yv - xv),
                RotmFlag::Identity => unreachable!(),
            };
            *x.data.get_unchecked_mut(ix as usize) = nx;
            *y.data.get_unchecked_mut(iy as usize) = ny;
        }
        ix += x.stride;
        iy += y.stride;
    }
    Ok(())
}
