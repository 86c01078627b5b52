// Copyright Peter Bower 2025. All Rights Reserved.
// Licensed under Mozilla Public License (MPL) 2.0.

//! # **Common SIMD Kernel Utilities**
//!
//! Shared SIMD infrastructure for the f64 distribution kernels. Abstracts
//! the complexities of SIMD vectorisation, memory alignment, and null value
//! handling behind dense and masked compute loops that write directly into
//! caller-provided output buffers.

use std::simd::{LaneCount, Mask, Simd, SupportedLaneCount};

use minarrow::{utils::is_simd_aligned, Bitmask};

use crate::utils::bitmask_to_simd_mask;

/// High-performance SIMD kernel for dense f64->f64 elementwise computations
/// (zero-allocation variant).
///
/// Writes directly to caller-provided output buffer.
///
/// ## Parameters
/// - `x`: Input array slice (requires 64-byte alignment for SIMD activation)
/// - `out`: Output buffer (must match input length)
/// - `simd_body`: Vectorised computation function: `Simd<f64, N> -> Simd<f64, N>`
/// - `scalar_body`: Scalar computation function for tail elements: `f64 -> f64`
///
/// ## Panics
/// Panics if `x.len() != out.len()`.
#[inline(always)]
pub fn dense_univariate_kernel_f64_simd_to<const N: usize, FSimd, FScalar>(
    x: &[f64],
    out: &mut [f64],
    simd_body: FSimd,
    scalar_body: FScalar,
) where
    LaneCount<N>: SupportedLaneCount,
    FSimd: Fn(Simd<f64, N>) -> Simd<f64, N>,
    FScalar: Fn(f64) -> f64,
{
    let len = x.len();
    assert_eq!(
        len,
        out.len(),
        "dense_univariate_kernel_f64_simd_to: input/output length mismatch"
    );

    // Check if input array is 64-byte aligned for SIMD
    if is_simd_aligned(x) {
        let mut i = 0;
        while i + N <= len {
            let x_v = Simd::<f64, N>::from_slice(&x[i..i + N]);
            let y_v = simd_body(x_v);
            out[i..i + N].copy_from_slice(y_v.as_array());
            i += N;
        }
        // Scalar tail
        for j in i..len {
            out[j] = scalar_body(x[j]);
        }
        return;
    }

    // Scalar fallback - alignment check failed
    for (i, &xi) in x.iter().enumerate() {
        out[i] = scalar_body(xi);
    }
}

/// High-performance SIMD kernel for null-aware f64->f64 elementwise
/// computations (zero-allocation variant).
///
/// Writes directly to caller-provided output buffer and mask. Null lanes
/// are fed `NaN` into the SIMD body so their outputs propagate `NaN`
/// without a branch per lane.
///
/// ## Parameters
/// - `x`: Input array slice (requires 64-byte alignment for SIMD activation)
/// - `mask`: Arrow bitmask defining valid/null elements (required)
/// - `out`: Output buffer (must match input length)
/// - `out_mask`: Output mask (must be pre-initialised, typically cloned from input mask)
/// - `simd_body`: Vectorised computation function: `Simd<f64, N> -> Simd<f64, N>`
/// - `scalar_body`: Scalar computation function: `f64 -> f64`
///
/// ## Panics
/// Panics if `x.len() != out.len()`.
#[inline(always)]
pub fn masked_univariate_kernel_f64_simd_to<const N: usize, FSimd, FScalar>(
    x: &[f64],
    mask: &Bitmask,
    out: &mut [f64],
    out_mask: &mut Bitmask,
    simd_body: FSimd,
    scalar_body: FScalar,
) where
    LaneCount<N>: SupportedLaneCount,
    FSimd: Fn(Simd<f64, N>) -> Simd<f64, N>,
    FScalar: Fn(f64) -> f64,
{
    let len = x.len();
    assert_eq!(
        len,
        out.len(),
        "masked_univariate_kernel_f64_simd_to: input/output length mismatch"
    );
    let mask_bytes = mask.as_bytes();

    // Check if input array is 64-byte aligned for SIMD
    if is_simd_aligned(x) {
        let mut i = 0;
        while i + N <= len {
            // Load SIMD mask
            let lane_mask: Mask<i64, N> = bitmask_to_simd_mask::<N, i64>(mask_bytes, i, len);

            // Load inputs
            let mut x_arr = [0.0f64; N];
            for j in 0..N {
                x_arr[j] = unsafe { *x.get_unchecked(i + j) };
            }
            let x_v_raw = Simd::<f64, N>::from_array(x_arr);

            // Replace null lanes with NaN
            let nan_v = Simd::<f64, N>::splat(f64::NAN);
            let x_v_in = lane_mask.select(x_v_raw, nan_v);

            // SIMD kernel
            let y_v = simd_body(x_v_in);
            out[i..i + N].copy_from_slice(y_v.as_array());

            i += N;
        }

        // Scalar tail
        for idx in i..len {
            if !unsafe { mask.get_unchecked(idx) } {
                out[idx] = f64::NAN;
                unsafe { out_mask.set_unchecked(idx, false) };
            } else {
                let xi = unsafe { *x.get_unchecked(idx) };
                out[idx] = scalar_body(xi);
                unsafe { out_mask.set_unchecked(idx, true) };
            }
        }
        return;
    }

    // Scalar fallback - alignment check failed
    for idx in 0..len {
        if !unsafe { mask.get_unchecked(idx) } {
            out[idx] = f64::NAN;
            unsafe { out_mask.set_unchecked(idx, false) };
        } else {
            let xi = unsafe { *x.get_unchecked(idx) };
            out[idx] = scalar_body(xi);
            unsafe { out_mask.set_unchecked(idx, true) };
        }
    }
}
