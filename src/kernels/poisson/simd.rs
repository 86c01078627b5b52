// Copyright Peter Bower 2025. All Rights Reserved.
// Licensed under Mozilla Public License (MPL) 2.0.

//! # **Poisson Distribution SIMD Implementations** - *Vectorised Discrete Event Processing*
//!
//! SIMD-accelerated f64 implementations of the Poisson log-PMF and PMF.
//! The CDF and quantile kernels cost one special-function evaluation per
//! element and stay scalar.
include!(concat!(env!("OUT_DIR"), "/simd_lanes.rs"));

use std::simd::cmp::SimdPartialEq;
use std::simd::{Simd, StdFloat};

use minarrow::utils::is_simd_aligned;
use minarrow::{Bitmask, FloatArray, Vec64};

use crate::errors::KernelError;
use crate::kernels::common::simd::{
    dense_univariate_kernel_f64_simd_to, masked_univariate_kernel_f64_simd_to,
};
use crate::kernels::shared::scalar::{ln_gamma_plus1, ln_gamma_simd};
use crate::utils::has_nulls;

/// Poisson log-PMF SIMD (zero-allocation variant).
///
/// Writes directly to caller-provided output buffer.
pub fn poisson_logpmf_simd_to(
    k: &[f64],
    lambda: f64,
    output: &mut [f64],
    null_mask: Option<&Bitmask>,
    null_count: Option<usize>,
) -> Result<(), KernelError> {
    // Allow λ == 0 (degenerate); forbid negatives / non-finite
    if lambda < 0.0 || !lambda.is_finite() {
        return Err(KernelError::InvalidArguments(
            "poisson_logpmf: λ must be non-negative and finite".into(),
        ));
    }
    if k.is_empty() {
        return Ok(());
    }

    const N: usize = W64;

    // Degenerate λ == 0 → log PMF(k) = 0 at k == 0, −∞ elsewhere
    if lambda == 0.0 {
        if !has_nulls(null_count, null_mask) {
            if is_simd_aligned(k) {
                let zero_f = Simd::<f64, N>::splat(0.0);
                let neg_inf = Simd::<f64, N>::splat(f64::NEG_INFINITY);
                let mut i = 0;
                while i + N <= k.len() {
                    let kv = Simd::<f64, N>::from_slice(&k[i..i + N]);
                    let is_zero = kv.simd_eq(zero_f);
                    let vals = is_zero.select(zero_f, neg_inf);
                    output[i..i + N].copy_from_slice(vals.as_array());
                    i += N;
                }
                for idx in i..k.len() {
                    output[idx] = if k[idx] == 0.0 { 0.0 } else { f64::NEG_INFINITY };
                }
            } else {
                for (i, &ki) in k.iter().enumerate() {
                    output[i] = if ki == 0.0 { 0.0 } else { f64::NEG_INFINITY };
                }
            }
            return Ok(());
        }

        // masked path
        let mask = null_mask.expect("poisson_logpmf: null_count > 0 requires null_mask");
        for idx in 0..k.len() {
            if !unsafe { mask.get_unchecked(idx) } {
                output[idx] = f64::NAN;
            } else {
                output[idx] = if k[idx] == 0.0 { 0.0 } else { f64::NEG_INFINITY };
            }
        }
        return Ok(());
    }

    // Regular path (λ > 0)
    let log_lambda = lambda.ln();
    let neg_lambda = -lambda;

    let scalar_body = move |ki: f64| -> f64 { neg_lambda + ki * log_lambda - ln_gamma_plus1(ki) };

    let simd_body = move |k_v: Simd<f64, N>| -> Simd<f64, N> {
        // lnΓ(k+1): Lanczos lanes are valid for k+1 ≥ 1, i.e. all counts
        let ln_kfact = ln_gamma_simd::<N>(k_v + Simd::splat(1.0));
        Simd::splat(neg_lambda) + k_v * Simd::splat(log_lambda) - ln_kfact
    };

    if !has_nulls(null_count, null_mask) {
        if is_simd_aligned(k) {
            dense_univariate_kernel_f64_simd_to::<N, _, _>(k, output, simd_body, scalar_body);
            return Ok(());
        }
        for (i, &ki) in k.iter().enumerate() {
            output[i] = scalar_body(ki);
        }
        return Ok(());
    }

    let mask_ref = null_mask.expect("poisson_logpmf: null_count > 0 requires null_mask");
    let mut out_mask = mask_ref.clone();
    if is_simd_aligned(k) {
        masked_univariate_kernel_f64_simd_to::<N, _, _>(
            k,
            mask_ref,
            output,
            &mut out_mask,
            simd_body,
            scalar_body,
        );
        return Ok(());
    }
    for idx in 0..k.len() {
        if !unsafe { mask_ref.get_unchecked(idx) } {
            output[idx] = f64::NAN;
            unsafe { out_mask.set_unchecked(idx, false) };
        } else {
            output[idx] = scalar_body(k[idx]);
            unsafe { out_mask.set_unchecked(idx, true) };
        }
    }
    Ok(())
}

/// Poisson log-PMF: ln P(K=k|λ) = k·ln(λ) − lnΓ(k+1) − λ, SIMD-accelerated.
///
/// Vectorised where alignment permits, with automatic scalar fallback for
/// unaligned data and tail lanes. Null lanes yield `NaN` with the input mask
/// propagated to the output array.
pub fn poisson_logpmf_simd(
    k: &[f64],
    lambda: f64,
    null_mask: Option<&Bitmask>,
    null_count: Option<usize>,
) -> Result<FloatArray<f64>, KernelError> {
    let len = k.len();
    if len == 0 {
        return Ok(FloatArray::from_slice(&[]));
    }

    let mut out = Vec64::with_capacity(len);
    unsafe { out.set_len(len) };

    poisson_logpmf_simd_to(k, lambda, out.as_mut_slice(), null_mask, null_count)?;

    Ok(FloatArray::from_vec64(out, null_mask.cloned()))
}

/// Poisson PMF SIMD (zero-allocation variant).
///
/// Fills the buffer via the log-PMF kernel, then exponentiates in place:
/// the PMF is purely derived, so the log-space kernel stays the single
/// source of the formula. Null lanes (`NaN`) and impossible outcomes (−∞)
/// map through `exp` verbatim to `NaN` and `0` respectively.
pub fn poisson_pmf_simd_to(
    k: &[f64],
    lambda: f64,
    output: &mut [f64],
    null_mask: Option<&Bitmask>,
    null_count: Option<usize>,
) -> Result<(), KernelError> {
    poisson_logpmf_simd_to(k, lambda, output, null_mask, null_count)?;

    const N: usize = W64;
    let len = output.len();
    let mut i = 0;
    if is_simd_aligned(&*output) {
        while i + N <= len {
            let v = Simd::<f64, N>::from_slice(&output[i..i + N]);
            output[i..i + N].copy_from_slice(v.exp().as_array());
            i += N;
        }
    }
    for idx in i..len {
        output[idx] = output[idx].exp();
    }
    Ok(())
}

/// Poisson PMF: P(K=k|λ) = e^{−λ} · λ^k / k!, SIMD-accelerated.
///
/// Computed as `exp(logpmf)` over the whole vector; see
/// [`poisson_pmf_simd_to`] for the in-place variant.
pub fn poisson_pmf_simd(
    k: &[f64],
    lambda: f64,
    null_mask: Option<&Bitmask>,
    null_count: Option<usize>,
) -> Result<FloatArray<f64>, KernelError> {
    let len = k.len();
    if len == 0 {
        return Ok(FloatArray::from_slice(&[]));
    }

    let mut out = Vec64::with_capacity(len);
    unsafe { out.set_len(len) };

    poisson_pmf_simd_to(k, lambda, out.as_mut_slice(), null_mask, null_count)?;

    Ok(FloatArray::from_vec64(out, null_mask.cloned()))
}
