//! n-dimensional index helpers.
//!
//! Conversions between linear indices, subscripts, and underlying-buffer
//! positions for dense strided layouts. Out-of-range indices are handled
//! according to an [`IndexMode`]: surfaced as an error, resolved from the
//! end (negative indexing), wrapped, or clamped.

use crate::{Result, StridedError};

/// Memory layout order of an n-dimensional view.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Order {
    /// C-style: the last dimension varies fastest.
    RowMajor,
    /// Fortran-style: the first dimension varies fastest.
    ColMajor,
}

/// Policy for indices that fall outside `[0, max]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IndexMode {
    /// Out-of-bounds indices are an error.
    Throw,
    /// Negative indices resolve from the end; anything else out of bounds is
    /// an error.
    Normalize,
    /// Indices wrap around modulo `max + 1`.
    Wrap,
    /// Indices clamp to the nearest bound.
    Clamp,
}

/// Resolve a possibly-negative index against the inclusive bound `max`.
///
/// `-1` maps to `max`, `-(max + 1)` maps to 0; anything outside
/// `[-(max + 1), max]` is an error.
pub fn normalize_index(idx: isize, max: usize) -> Result<usize> {
    let n = max as isize + 1;
    let resolved = if idx < 0 { idx + n } else { idx };
    if resolved < 0 || resolved > max as isize {
        return Err(StridedError::IndexOutOfBounds { idx, max });
    }
    Ok(resolved as usize)
}

/// Resolve an index against the inclusive bound `max` under the given mode.
pub fn resolve_index(idx: isize, max: usize, mode: IndexMode) -> Result<usize> {
    match mode {
        IndexMode::Throw => {
            if idx < 0 || idx > max as isize {
                return Err(StridedError::IndexOutOfBounds { idx, max });
            }
            Ok(idx as usize)
        }
        IndexMode::Normalize => normalize_index(idx, max),
        IndexMode::Wrap => {
            let n = max as isize + 1;
            Ok(idx.rem_euclid(n) as usize)
        }
        IndexMode::Clamp => Ok(idx.clamp(0, max as isize) as usize),
    }
}

fn shape_len(shape: &[usize]) -> usize {
    shape.iter().product::<usize>()
}

/// Convert a linear index into subscripts for the given layout order.
///
/// The linear index is resolved against `len - 1` (where `len` is the
/// product of the shape) under `mode` before decomposition.
pub fn ind2sub(shape: &[usize], order: Order, idx: isize, mode: IndexMode) -> Result<Vec<usize>> {
    let len = shape_len(shape);
    if len == 0 {
        return Err(StridedError::IndexOutOfBounds { idx, max: 0 });
    }
    let mut rem = resolve_index(idx, len - 1, mode)?;
    let ndims = shape.len();
    let mut out = vec![0usize; ndims];
    match order {
        Order::RowMajor => {
            for i in (0..ndims).rev() {
                out[i] = rem % shape[i];
                rem /= shape[i];
            }
        }
        Order::ColMajor => {
            for i in 0..ndims {
                out[i] = rem % shape[i];
                rem /= shape[i];
            }
        }
    }
    Ok(out)
}

/// Convert subscripts into a row-major linear index.
///
/// Each subscript is resolved against its own dimension bound under `mode`.
pub fn sub2ind(shape: &[usize], subscripts: &[isize], mode: IndexMode) -> Result<usize> {
    if shape.len() != subscripts.len() {
        return Err(StridedError::RankMismatch(shape.len(), subscripts.len()));
    }
    let mut idx = 0usize;
    for (i, (&dim, &sub)) in shape.iter().zip(subscripts.iter()).enumerate() {
        if dim == 0 {
            return Err(StridedError::IndexOutOfBounds { idx: sub, max: 0 });
        }
        let s = resolve_index(sub, dim - 1, mode)?;
        idx = idx * shape[i] + s;
    }
    Ok(idx)
}

/// Convert a view-order linear index into a position in the underlying
/// buffer.
///
/// The view is described by (shape, strides, offset); the linear index
/// enumerates the view's elements in the given iteration order.
pub fn vind2bind(
    shape: &[usize],
    strides: &[isize],
    offset: usize,
    order: Order,
    idx: isize,
    mode: IndexMode,
) -> Result<usize> {
    if shape.len() != strides.len() {
        return Err(StridedError::RankMismatch(shape.len(), strides.len()));
    }
    let subs = ind2sub(shape, order, idx, mode)?;
    let mut pos = offset as isize;
    for (i, &s) in subs.iter().enumerate() {
        pos += s as isize * strides[i];
    }
    if pos < 0 {
        return Err(StridedError::OffsetOverflow);
    }
    Ok(pos as usize)
}

/// Convert a position in the underlying buffer into a view-order linear
/// index. Inverse of [`vind2bind`] for dense layouts.
///
/// The strides must be the dense strides generated from the shape in the
/// given order (possibly sign-flipped per dimension), the same contract
/// under which the view was constructed.
pub fn bind2vind(
    shape: &[usize],
    strides: &[isize],
    offset: usize,
    order: Order,
    idx: isize,
    mode: IndexMode,
) -> Result<usize> {
    if shape.len() != strides.len() {
        return Err(StridedError::RankMismatch(shape.len(), strides.len()));
    }
    let ndims = shape.len();

    // Lowest and highest buffer positions reachable by the view.
    let mut min = offset as isize;
    let mut max = offset as isize;
    for i in 0..ndims {
        if shape[i] == 0 {
            return Err(StridedError::IndexOutOfBounds { idx, max: 0 });
        }
        let span = (shape[i] - 1) as isize * strides[i];
        if span < 0 {
            min += span;
        } else {
            max += span;
        }
    }
    if min < 0 {
        return Err(StridedError::OffsetOverflow);
    }
    let pos = resolve_index(idx, max as usize, mode)?;
    if (pos as isize) < min {
        return Err(StridedError::IndexOutOfBounds { idx, max: max as usize });
    }
    let mut rem = pos as isize - min;

    // Dims in decreasing-|stride| order for the greedy decomposition; the
    // view index accumulates in the same order.
    let mut vind = 0isize;
    let dims: Box<dyn Iterator<Item = usize>> = match order {
        Order::RowMajor => Box::new(0..ndims),
        Order::ColMajor => Box::new((0..ndims).rev()),
    };
    for i in dims {
        let sa = strides[i].unsigned_abs() as isize;
        let k = if sa == 0 { 0 } else { rem / sa };
        if k >= shape[i] as isize {
            return Err(StridedError::IndexOutOfBounds { idx, max: max as usize });
        }
        rem -= k * sa;
        let sub = if strides[i] < 0 {
            (shape[i] - 1) as isize - k
        } else {
            k
        };
        vind = vind * shape[i] as isize + sub;
    }
    if rem != 0 {
        // position falls between view elements
        return Err(StridedError::IndexOutOfBounds { idx, max: max as usize });
    }
    Ok(vind as usize)
}
