//! Complex-number helpers: robust division and interleaved-pair storage.
//!
//! Complex sequences are stored as interleaved real/imaginary pairs, so a
//! `VectorView<Complex<f64>>` with stride `k` advances by `2k` scalar slots
//! in the underlying storage. The cast helpers expose that interleaved
//! layout explicitly for callers that hand buffers to scalar-only kernels.

use crate::{Result, StridedError};
use bytemuck::{Pod, Zeroable};
use num_complex::Complex;

// ============================================================================
// Robust division
// ============================================================================

// Scaling thresholds from Baudin & Smith, "A Robust Complex Division in
// Scilab" (algorithm 5): operands near the overflow/underflow boundaries are
// rescaled before the Smith recurrences run.
const LARGE_THRESHOLD: f64 = f64::MAX * 0.5;
const SMALL_THRESHOLD: f64 = f64::MIN_POSITIVE * (2.0 / f64::EPSILON);
const RECIP_EPS_SQR: f64 = 2.0 / (f64::EPSILON * f64::EPSILON);

fn internal_compreal(a: f64, b: f64, c: f64, d: f64, r: f64, t: f64) -> f64 {
    if r != 0.0 {
        let br = b * r;
        if br != 0.0 {
            return (a + br) * t;
        }
        return (a * t) + ((b * t) * r);
    }
    (a + (d * (b / c))) * t
}

fn robust_internal(a: f64, b: f64, c: f64, d: f64) -> (f64, f64) {
    let r = d / c;
    let t = 1.0 / (c + (d * r));
    let e = internal_compreal(a, b, c, d, r, t);
    let f = internal_compreal(b, -a, c, d, r, t);
    (e, f)
}

/// Divide two double-precision complex numbers.
///
/// Uses scaled Smith recurrences so that intermediate products near the
/// extremes of the exponent range neither overflow nor flush to zero where
/// the exact quotient is representable.
pub fn cdiv(z1: Complex<f64>, z2: Complex<f64>) -> Complex<f64> {
    let (mut a, mut b) = (z1.re, z1.im);
    let (mut c, mut d) = (z2.re, z2.im);
    let ab = a.abs().max(b.abs());
    let cd = c.abs().max(d.abs());
    let mut s = 1.0;

    if ab >= LARGE_THRESHOLD {
        a *= 0.5;
        b *= 0.5;
        s *= 2.0;
    }
    if cd >= LARGE_THRESHOLD {
        c *= 0.5;
        d *= 0.5;
        s *= 0.5;
    }
    if ab <= SMALL_THRESHOLD {
        a *= RECIP_EPS_SQR;
        b *= RECIP_EPS_SQR;
        s /= RECIP_EPS_SQR;
    }
    if cd <= SMALL_THRESHOLD {
        c *= RECIP_EPS_SQR;
        d *= RECIP_EPS_SQR;
        s *= RECIP_EPS_SQR;
    }
    let (e, f) = if d.abs() <= c.abs() {
        robust_internal(a, b, c, d)
    } else {
        let (e, f) = robust_internal(b, a, d, c);
        (e, -f)
    };
    Complex::new(s * e, s * f)
}

/// Reciprocal of a double-precision complex number, with the same scaling
/// protections as [`cdiv`].
pub fn cinv(z: Complex<f64>) -> Complex<f64> {
    cdiv(Complex::new(1.0, 0.0), z)
}

// ============================================================================
// Interleaved-pair casts
// ============================================================================

/// POD mirror of `Complex<f64>` used for byte-level reinterpretation.
#[derive(Debug, Clone, Copy, PartialEq, Pod, Zeroable)]
#[repr(C)]
pub struct PodComplex64 {
    pub re: f64,
    pub im: f64,
}

/// POD mirror of `Complex<f32>` used for byte-level reinterpretation.
#[derive(Debug, Clone, Copy, PartialEq, Pod, Zeroable)]
#[repr(C)]
pub struct PodComplex32 {
    pub re: f32,
    pub im: f32,
}

fn check_layout<C, P>() -> Result<()> {
    if std::mem::size_of::<C>() != std::mem::size_of::<P>()
        || std::mem::align_of::<C>() != std::mem::align_of::<P>()
    {
        return Err(StridedError::PodCastUnsupported(
            "complex layout incompatible",
        ));
    }
    Ok(())
}

/// Reinterpret a complex slice as interleaved `(re, im)` scalar pairs.
///
/// Element `k` of the complex slice maps to scalars `2k` (real) and
/// `2k + 1` (imaginary) of the result.
pub fn as_interleaved_f64(data: &[Complex<f64>]) -> Result<&[f64]> {
    check_layout::<Complex<f64>, PodComplex64>()?;
    // SAFETY: Complex<f64> is repr(C) { re, im }; size/align verified above.
    let pods = unsafe {
        std::slice::from_raw_parts(data.as_ptr() as *const PodComplex64, data.len())
    };
    Ok(bytemuck::cast_slice(pods))
}

/// Mutable counterpart of [`as_interleaved_f64`].
pub fn as_interleaved_f64_mut(data: &mut [Complex<f64>]) -> Result<&mut [f64]> {
    check_layout::<Complex<f64>, PodComplex64>()?;
    // SAFETY: Complex<f64> is repr(C) { re, im }; size/align verified above.
    let pods = unsafe {
        std::slice::from_raw_parts_mut(data.as_mut_ptr() as *mut PodComplex64, data.len())
    };
    Ok(bytemuck::cast_slice_mut(pods))
}

/// Reinterpret a complex slice as interleaved `(re, im)` scalar pairs.
pub fn as_interleaved_f32(data: &[Complex<f32>]) -> Result<&[f32]> {
    check_layout::<Complex<f32>, PodComplex32>()?;
    // SAFETY: Complex<f32> is repr(C) { re, im }; size/align verified above.
    let pods = unsafe {
        std::slice::from_raw_parts(data.as_ptr() as *const PodComplex32, data.len())
    };
    Ok(bytemuck::cast_slice(pods))
}

/// Mutable counterpart of [`as_interleaved_f32`].
pub fn as_interleaved_f32_mut(data: &mut [Complex<f32>]) -> Result<&mut [f32]> {
    check_layout::<Complex<f32>, PodComplex32>()?;
    // SAFETY: Complex<f32> is repr(C) { re, im }; size/align verified above.
    let pods = unsafe {
        std::slice::from_raw_parts_mut(data.as_mut_ptr() as *mut PodComplex32, data.len())
    };
    Ok(bytemuck::cast_slice_mut(pods))
}
