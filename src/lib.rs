//! Strided vector kernels and scalar math primitives for 1-D numeric buffers.
//!
//! The crate is built around a single addressing convention: a logical
//! sequence of `n` elements inside a caller-owned buffer, visited as
//! `offset + i * stride` for `i` in `0..n`. The stride is signed; when it is
//! negative the starting offset is placed at the far end so that the first
//! *processed* value is always the logical element 0 (see
//! [`stride_offset`]). Every vector operation in the crate shares this
//! convention.
//!
//! # Core Types
//!
//! - [`VectorView`] / [`VectorViewMut`]: Zero-copy strided windows over
//!   existing data
//!
//! # Vector Operations
//!
//! ## Transformations
//!
//! - [`copy`], [`swap`]: Move elements between strided buffers
//! - [`scal`], [`axpy`]: Scale and scaled-add
//! - [`rot`], [`rotm`]: Plane rotations (plain and modified Givens)
//!
//! ## Reductions
//!
//! - [`sum`], [`sum_kbn`]: Naive and compensated (Kahan-Babuska-Neumaier) sums
//! - [`cusum`], [`cusum_kbn`]: Cumulative sums written through an output stride
//! - [`nansum`]: NaN-skipping sum, reporting the count of consumed elements
//! - [`asum`], [`dot`]: Absolute-value sum and inner product
//! - [`iamax`]: 0-based logical index of the first maximum-|x| element
//! - [`mskmin`], [`mskmax`]: Masked extrema with a `None` sentinel
//! - [`sumsq`], [`nrm2`], [`nrm2_complex`]: Overflow-safe sums of squares and
//!   Euclidean norms
//!
//! All reductions accumulate in logical index order `0..n`, never in memory
//! order, so results are reproducible for any stride sign.
//!
//! # Scalar Primitives
//!
//! - [`trig`]: Degree/radian conversions and degree-argument trigonometry
//! - [`special`]: expm1, erf/erfc, erfinv, gammaln, trigamma
//! - [`fastmath`]: Accuracy-for-speed variants (fast hypotenuse, integer power)
//! - [`bits`]: IEEE-754 double-precision word manipulation
//! - [`complex`]: Robust complex division and interleaved-pair casts
//! - [`index`]: n-dimensional index conversion helpers
//!
//! # BLAS Forwarding
//!
//! With the `blas` feature enabled, [`backend::ActiveBackend`] forwards the
//! level-1 operations (`axpy`, `dot`, `asum`, `nrm2`) for `f32`/`f64` to an
//! external CBLAS implementation; without it, the portable loop kernels run.
//! The numeric contract is identical either way.
//!
//! # Example
//!
//! ```rust
//! use strided_num::{sum, VectorView};
//!
//! // Every other element of the buffer: [1, 3, 5, 7]
//! let data = vec![1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0, 8.0];
//! let x: VectorView<'_, f64> = VectorView::new(&data, 4, 2, 0).unwrap();
//! assert_eq!(sum(&x), 16.0);
//! ```

pub mod backend;
pub mod bits;
pub mod complex;
pub mod fastmath;
pub mod index;
mod kernel;
mod norm;
mod ops;
mod reduce;
pub mod special;
pub mod trig;
pub mod view;

// ============================================================================
// Views and the iteration convention
// ============================================================================
pub use kernel::stride_offset;
pub use view::{VectorView, VectorViewMut};

// ============================================================================
// Transformations
// ============================================================================
pub use ops::{axpy, copy, rot, rotm, scal, swap, RotmFlag, RotmParams};

// ============================================================================
// Reductions
// ============================================================================
pub use reduce::{asum, cusum, cusum_kbn, dot, iamax, mskmax, mskmin, nansum, sum, sum_kbn};

// ============================================================================
// Norms
// ============================================================================
pub use norm::{nrm2, nrm2_complex, sumsq};

// ============================================================================
// Error types
// ============================================================================

/// Errors that can occur during strided vector operations.
///
/// Numeric domain violations (e.g., `gammaln` of a negative integer) are
/// signalled with NaN, never with an error; this enum covers only structural
/// misuse of the strided addressing convention.
#[derive(Debug, thiserror::Error)]
pub enum StridedError {
    /// Logical lengths of two participating vectors do not match.
    #[error("length mismatch: {0} vs {1}")]
    LengthMismatch(usize, usize),

    /// A view would access memory outside its underlying buffer.
    #[error("offset overflow while computing index")]
    OffsetOverflow,

    /// A linear index or subscript is out of bounds under the `Throw` mode.
    #[error("index {idx} out of bounds (max {max})")]
    IndexOutOfBounds { idx: isize, max: usize },

    /// Subscript count does not match the number of dimensions.
    #[error("rank mismatch: {0} vs {1}")]
    RankMismatch(usize, usize),

    /// POD cast between Complex<T> and its interleaved representation is
    /// unsupported on this platform.
    #[error("pod cast unsupported: {0}")]
    PodCastUnsupported(&'static str),
}

/// Result type for strided vector operations.
pub type Result<T> = std::result::Result<T, StridedError>;
