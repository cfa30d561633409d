//! Backend abstraction for level-1 vector operations.
//!
//! This module defines the [`BackendConfig`] and [`Level1Backend`] traits,
//! marker structs for each backend, and the [`ActiveBackend`] type alias
//! that serves as the single point of backend selection based on Cargo
//! features. The numeric contract is identical across backends; forwarding
//! to an external BLAS is purely a build/link-time concern.

use crate::view::{VectorView, VectorViewMut};
use crate::Result;
use num_traits::Float;

/// Static configuration for a vector-operation backend.
pub trait BackendConfig {
    /// Human-readable backend name, for diagnostics.
    const NAME: &'static str;

    /// Whether level-1 calls may be forwarded to an external BLAS.
    const FORWARDS_TO_BLAS: bool;
}

/// Scalar types eligible for the backend dispatch surface.
///
/// The portable kernels are generic over [`Float`]; forwarding additionally
/// needs the precision tags of [`BlasFloat`].
pub trait BlasScalar: Float + BlasFloat {}

impl BlasScalar for f32 {}
impl BlasScalar for f64 {}

/// Trait for backends that execute level-1 operations on strided vectors.
///
/// All implementations honor the crate-wide iteration convention: logical
/// order `0..n`, one element per logical index, identity results for empty
/// views.
pub trait Level1Backend {
    /// `y = alpha * x + y`.
    fn axpy<T: BlasScalar>(
        alpha: T,
        x: &VectorView<'_, T>,
        y: &mut VectorViewMut<'_, T>,
    ) -> Result<()>;

    /// Inner product of `x` and `y`.
    fn dot<T: BlasScalar>(x: &VectorView<'_, T>, y: &VectorView<'_, T>) -> Result<T>;

    /// Sum of absolute values.
    fn asum<T: BlasScalar>(x: &VectorView<'_, T>) -> T;

    /// Euclidean norm.
    fn nrm2<T: BlasScalar>(x: &VectorView<'_, T>) -> T;
}

/// Trait for scalar types with a corresponding external BLAS routine family.
pub trait BlasFloat: Copy + 'static {
    /// Whether this type is single precision (`f32`).
    fn is_single() -> bool;
    /// Whether this type is double precision (`f64`).
    fn is_double() -> bool;
}

impl BlasFloat for f32 {
    fn is_single() -> bool {
        true
    }
    fn is_double() -> bool {
        false
    }
}

impl BlasFloat for f64 {
    fn is_single() -> bool {
        false
    }
    fn is_double() -> bool {
        true
    }
}

// ---------------------------------------------------------------------------
// Marker structs and BackendConfig implementations
// ---------------------------------------------------------------------------

/// Portable backend using the crate's own strided loop kernels.
pub struct PortableBackend;

impl BackendConfig for PortableBackend {
    const NAME: &'static str = "portable";
    const FORWARDS_TO_BLAS: bool = false;
}

/// Backend forwarding `f32`/`f64` calls to an external CBLAS implementation.
#[cfg(feature = "blas")]
pub struct CblasBackend;

#[cfg(feature = "blas")]
impl BackendConfig for CblasBackend {
    const NAME: &'static str = "cblas";
    const FORWARDS_TO_BLAS: bool = true;
}

// ---------------------------------------------------------------------------
// ActiveBackend type alias -- the SINGLE point of backend selection
// ---------------------------------------------------------------------------

/// The active level-1 backend, selected by Cargo features.
///
/// - `blas` -> [`CblasBackend`]
/// - otherwise -> [`PortableBackend`]
#[cfg(feature = "blas")]
pub type ActiveBackend = CblasBackend;

/// The active level-1 backend, selected by Cargo features.
///
/// - `blas` -> `CblasBackend`
/// - otherwise -> [`PortableBackend`]
#[cfg(not(feature = "blas"))]
pub type ActiveBackend = PortableBackend;

// ---------------------------------------------------------------------------
// Portable implementation
// ---------------------------------------------------------------------------

impl Level1Backend for PortableBackend {
    fn axpy<T: BlasScalar>(
        alpha: T,
        x: &VectorView<'_, T>,
        y: &mut VectorViewMut<'_, T>,
    ) -> Result<()> {
        crate::ops::axpy(alpha, x, y)
    }

    fn dot<T: BlasScalar>(x: &VectorView<'_, T>, y: &VectorView<'_, T>) -> Result<T> {
        crate::reduce::dot(x, y)
    }

    fn asum<T: BlasScalar>(x: &VectorView<'_, T>) -> T {
        crate::reduce::asum(x)
    }

    fn nrm2<T: BlasScalar>(x: &VectorView<'_, T>) -> T {
        crate::norm::nrm2(x)
    }
}

// ---------------------------------------------------------------------------
// CBLAS forwarding (feature-gated)
// ---------------------------------------------------------------------------

#[cfg(feature = "blas")]
mod cblas_impl {
    use super::*;
    use crate::StridedError;

    /// Slice of the underlying buffer that a CBLAS routine may touch, and
    /// the increment to pass.
    ///
    /// CBLAS interprets a negative increment by starting from element
    /// `(n - 1) * |inc|` of the passed array, so the slice must begin at the
    /// lowest physical index of the view rather than at its logical start.
    fn blas_operand(len: usize, stride: isize, offset: usize) -> (usize, usize, i32) {
        let span = (len - 1) * stride.unsigned_abs() + 1;
        let start = if stride < 0 {
            offset - (len - 1) * stride.unsigned_abs()
        } else {
            offset
        };
        (start, span, stride as i32)
    }

    impl Level1Backend for CblasBackend {
        fn axpy<T: BlasScalar>(
            alpha: T,
            x: &VectorView<'_, T>,
            y: &mut VectorViewMut<'_, T>,
        ) -> Result<()> {
            let n = x.len();
            if n != y.len() {
                return Err(StridedError::LengthMismatch(n, y.len()));
            }
            if n == 0 {
                return Ok(());
            }
            // BLAS increments of zero are not portable; use the loop kernel.
            if x.stride() == 0 || y.stride() == 0 {
                return crate::ops::axpy(alpha, x, y);
            }
            let (xs, xspan, incx) = blas_operand(n, x.stride(), x.offset());
            let (ys, yspan, incy) = blas_operand(n, y.stride(), y.offset());
            unsafe {
                if T::is_double() {
                    let alpha = std::mem::transmute_copy::<T, f64>(&alpha);
                    let xp = x.data().as_ptr() as *const f64;
                    let yp = y.data.as_mut_ptr() as *mut f64;
                    cblas::daxpy(
                        n as i32,
                        alpha,
                        std::slice::from_raw_parts(xp.add(xs), xspan),
                        incx,
                        std::slice::from_raw_parts_mut(yp.add(ys), yspan),
                        incy,
                    );
                } else if T::is_single() {
                    let alpha = std::mem::transmute_copy::<T, f32>(&alpha);
                    let xp = x.data().as_ptr() as *const f32;
                    let yp = y.data.as_mut_ptr() as *mut f32;
                    cblas::saxpy(
                        n as i32,
                        alpha,
                        std::slice::from_raw_parts(xp.add(xs), xspan),
                        incx,
                        std::slice::from_raw_parts_mut(yp.add(ys), yspan),
                        incy,
                    );
                } else {
                    return crate::ops::axpy(alpha, x, y);
                }
            }
            Ok(())
        }

        fn dot<T: BlasScalar>(x: &VectorView<'_, T>, y: &VectorView<'_, T>) -> Result<T> {
            let n = x.len();
            if n != y.len() {
                return Err(StridedError::LengthMismatch(n, y.len()));
            }
            if n == 0 {
                return Ok(T::zero());
            }
            if x.stride() == 0 || y.stride() == 0 {
                return crate::reduce::dot(x, y);
            }
            let (xs, xspan, incx) = blas_operand(n, x.stride(), x.offset());
            let (ys, yspan, incy) = blas_operand(n, y.stride(), y.offset());
            unsafe {
                if T::is_double() {
                    let xp = x.data().as_ptr() as *const f64;
                    let yp = y.data().as_ptr() as *const f64;
                    let r = cblas::ddot(
                        n as i32,
                        std::slice::from_raw_parts(xp.add(xs), xspan),
                        incx,
                        std::slice::from_raw_parts(yp.add(ys), yspan),
                        incy,
                    );
                    Ok(std::mem::transmute_copy(&r))
                } else if T::is_single() {
                    let xp = x.data().as_ptr() as *const f32;
                    let yp = y.data().as_ptr() as *const f32;
                    let r = cblas::sdot(
                        n as i32,
                        std::slice::from_raw_parts(xp.add(xs), xspan),
                        incx,
                        std::slice::from_raw_parts(yp.add(ys), yspan),
                        incy,
                    );
                    Ok(std::mem::transmute_copy(&r))
                } else {
                    crate::reduce::dot(x, y)
                }
            }
        }

        fn asum<T: BlasScalar>(x: &VectorView<'_, T>) -> T {
            let n = x.len();
            if n == 0 {
                return T::zero();
            }
            if x.stride() == 0 {
                return crate::reduce::asum(x);
            }
            let (xs, xspan, incx) = blas_operand(n, x.stride(), x.offset());
            unsafe {
                if T::is_double() {
                    let xp = x.data().as_ptr() as *const f64;
                    let r =
                        cblas::dasum(n as i32, std::slice::from_raw_parts(xp.add(xs), xspan), incx);
                    std::mem::transmute_copy(&r)
                } else if T::is_single() {
                    let xp = x.data().as_ptr() as *const f32;
                    let r =
                        cblas::sasum(n as i32, std::slice::from_raw_parts(xp.add(xs), xspan), incx);
                    std::mem::transmute_copy(&r)
                } else {
                    crate::reduce::asum(x)
                }
            }
        }

        fn nrm2<T: BlasScalar>(x: &VectorView<'_, T>) -> T {
            let n = x.len();
            if n == 0 {
                return T::zero();
            }
            if x.stride() == 0 {
                return crate::norm::nrm2(x);
            }
            let (xs, xspan, incx) = blas_operand(n, x.stride(), x.offset());
            unsafe {
                if T::is_double() {
                    let xp = x.data().as_ptr() as *const f64;
                    let r =
                        cblas::dnrm2(n as i32, std::slice::from_raw_parts(xp.add(xs), xspan), incx);
                    std::mem::transmute_copy(&r)
                } else if T::is_single() {
                    let xp = x.data().as_ptr() as *const f32;
                    let r =
                        cblas::snrm2(n as i32, std::slice::from_raw_parts(xp.add(xs), xspan), incx);
                    std::mem::transmute_copy(&r)
                } else {
                    crate::norm::nrm2(x)
                }
            }
        }
    }
}
