// Copyright Peter Bower 2025. All Rights Reserved.
// Licensed under Mozilla Public License (MPL) 2.0.

//! # **Poisson Distribution Scalar Implementations** - *Discrete Event Computation*
//!
//! Scalar (non-SIMD) implementations of the Poisson kernels, generic over the
//! floating-point width and optimised for numerical stability. Every loop body
//! is independent per element and writes one disjoint output slot.

use minarrow::{Bitmask, FloatArray, Vec64};
use num_traits::Float;

use crate::errors::KernelError;
use crate::kernels::common::std::{dense_univariate_kernel_std, masked_univariate_kernel_std};
use crate::kernels::shared::scalar::{inv_std_normal_core, ln_gamma_plus1, reg_upper_gamma};
use crate::traits::float_scalar::FloatScalar;
use crate::utils::has_nulls;

/// Poisson log-PMF: ln P(K=k|λ) = k·ln(λ) − lnΓ(k+1) − λ
/// k: observed event counts (all ≥ 0, stored in the working float width)
/// λ: event rate (λ ≥ 0, finite)
///
/// The additive log-space form keeps large counts and rates exact where the
/// direct ratio λ^k·e^{−λ}/k! would overflow.
#[inline(always)]
pub fn poisson_logpmf_std<T: FloatScalar>(
    k: &[T],
    lambda: T,
    null_mask: Option<&Bitmask>,
    null_count: Option<usize>,
) -> Result<FloatArray<T>, KernelError> {
    // λ may be zero (degenerate at k=0); only forbid negatives / non-finite
    if lambda < T::zero() || !lambda.is_finite() {
        return Err(KernelError::InvalidArguments(
            "poisson_logpmf: λ must be non-negative and finite".into(),
        ));
    }
    if k.is_empty() {
        return Ok(FloatArray::from_slice(&[]));
    }

    // Degenerate distribution: λ == 0 → log PMF(k) = 0 at k == 0, −∞ elsewhere
    if lambda == T::zero() {
        let mut out = Vec64::with_capacity(k.len());
        if !has_nulls(null_count, null_mask) {
            for &ki in k {
                out.push(if ki == T::zero() {
                    T::zero()
                } else {
                    T::neg_infinity()
                });
            }
            return Ok(FloatArray::from_vec64(out, null_mask.cloned()));
        }
        let mask = null_mask.expect("poisson_logpmf: null_count > 0 requires null_mask");
        for i in 0..k.len() {
            if !unsafe { mask.get_unchecked(i) } {
                out.push(T::nan());
            } else {
                out.push(if k[i] == T::zero() {
                    T::zero()
                } else {
                    T::neg_infinity()
                });
            }
        }
        return Ok(FloatArray {
            data: out.into(),
            null_mask: Some(mask.clone()),
        });
    }

    // Regular path (λ > 0)
    let log_lambda = lambda.ln();
    let neg_lambda = -lambda;

    let scalar_body = move |ki: T| -> T { neg_lambda + ki * log_lambda - ln_gamma_plus1(ki) };

    if !has_nulls(null_count, null_mask) {
        let has_mask = null_mask.is_some();
        let (data, mask) = dense_univariate_kernel_std(k, has_mask, scalar_body);
        return Ok(FloatArray {
            data: data.into(),
            null_mask: mask,
        });
    }

    let mask_ref = null_mask.expect("poisson_logpmf: null_count > 0 requires null_mask");
    let (data, out_mask) = masked_univariate_kernel_std(k, mask_ref, scalar_body);
    Ok(FloatArray {
        data: data.into(),
        null_mask: Some(out_mask),
    })
}

/// Poisson PMF: P(K=k|λ) = e^{−λ} · λ^k / k!
///
/// Derived kernel: exponentiates the log-PMF kernel's output elementwise
/// rather than restating the formula, so any precision improvement there
/// carries over. Null lanes stay `NaN`; impossible outcomes (−∞) map to 0.
#[inline(always)]
pub fn poisson_pmf_std<T: FloatScalar>(
    k: &[T],
    lambda: T,
    null_mask: Option<&Bitmask>,
    null_count: Option<usize>,
) -> Result<FloatArray<T>, KernelError> {
    let log_arr = poisson_logpmf_std(k, lambda, null_mask, null_count)?;

    let mut out = Vec64::with_capacity(log_arr.data.len());
    for &v in log_arr.data.iter() {
        out.push(v.exp());
    }
    Ok(FloatArray {
        data: out.into(),
        null_mask: log_arr.null_mask,
    })
}

/// Poisson CDF: F(K=k|λ) = ∑_{i=0}^k PMF(i, λ)
/// Efficient and robust using the regularised upper incomplete gamma:
/// F(K=k|λ) = Q(k+1, λ)
///
/// λ == 0 is deliberately not special-cased: Q(k+1, 0) = 1 for k ≥ 0, which
/// is the degenerate distribution's CDF (covered by tests).
#[inline(always)]
pub fn poisson_cdf_std<T: FloatScalar>(
    k: &[T],
    lambda: T,
    null_mask: Option<&Bitmask>,
    null_count: Option<usize>,
) -> Result<FloatArray<T>, KernelError> {
    if lambda < T::zero() || !lambda.is_finite() {
        return Err(KernelError::InvalidArguments(
            "poisson_cdf: λ must be non-negative and finite".into(),
        ));
    }
    if k.is_empty() {
        return Ok(FloatArray::from_slice(&[]));
    }
    let len = k.len();
    let one = T::one();

    // Dense path: no nulls
    if !has_nulls(null_count, null_mask) {
        let mut out = Vec64::with_capacity(len);
        for &ki in k {
            out.push(reg_upper_gamma(ki + one, lambda));
        }
        return Ok(FloatArray::from_vec64(out, null_mask.cloned()));
    }

    // Null-aware path: propagate input nulls
    let mut out = Vec64::with_capacity(len);
    let mask = null_mask.expect("poisson_cdf: null_count > 0 requires null_mask");

    for idx in 0..len {
        if !unsafe { mask.get_unchecked(idx) } {
            out.push(T::nan());
        } else {
            out.push(reg_upper_gamma(k[idx] + one, lambda));
        }
    }
    Ok(FloatArray {
        data: out.into(),
        null_mask: Some(mask.clone()),
    })
}

/// Poisson quantile function (inverse CDF).
///
/// For probability `p` ∈ (0,1), returns the smallest integer `k` such that
///     Pr[X ≤ k] ≥ p, where X ~ Poisson(λ).
/// Returns error for λ < 0 or non-finite λ; `p` outside [0,1] yields NaN,
/// `p == 0` yields −1 and `p == 1` yields +∞ (SciPy conventions).
#[inline(always)]
pub fn poisson_quantile_std(
    p: &[f64],
    lambda: f64,
    null_mask: Option<&Bitmask>,
    null_count: Option<usize>,
) -> Result<FloatArray<f64>, KernelError> {
    if lambda < 0.0 || !lambda.is_finite() {
        return Err(KernelError::InvalidArguments(
            "poisson_quantile: λ must be non-negative and finite".into(),
        ));
    }
    if p.is_empty() {
        return Ok(FloatArray::from_slice(&[]));
    }

    // absolute tolerance to avoid off-by-one from tiny FP underestimation near 1
    const ABS_TOL: f64 = 1e-12;

    let compute_quantile = |pi: f64| -> f64 {
        if !(pi >= 0.0 && pi <= 1.0) || !pi.is_finite() {
            f64::NAN
        } else if pi == 0.0 {
            -1.0
        } else if pi == 1.0 {
            f64::INFINITY
        } else if lambda == 0.0 {
            0.0
        } else {
            // Cornish–Fisher start seeded by the Acklam inverse-normal core
            let mu = lambda;
            let sigma = lambda.sqrt();
            let g1 = 1.0 / sigma;
            let z = if pi == 0.5 {
                0.0
            } else if pi < 0.5 {
                inv_std_normal_core(pi)
            } else {
                -inv_std_normal_core(1.0 - pi)
            };
            let mut k_est = mu + sigma * (z + g1 * (z * z - 1.0) / 6.0);
            if k_est < 0.0 {
                k_est = 0.0;
            }
            let mut k = k_est.floor() as u64;

            // increase until CDF(k) ≥ p within tolerance
            let max_k = (lambda * 10.0).ceil() as u64 + 1000;
            let cdf_at = |kk: u64| -> f64 { reg_upper_gamma((kk as f64) + 1.0, lambda) };
            let cdf_before = |kk: u64| -> f64 {
                if kk == 0 {
                    0.0
                } else {
                    reg_upper_gamma(kk as f64, lambda)
                }
            };

            let mut cdf = cdf_at(k);
            while cdf + ABS_TOL < pi && k < max_k {
                k += 1;
                cdf = cdf_at(k);
            }

            // step down to ensure *minimal* k
            while k > 0 {
                let prev = cdf_before(k);
                if prev >= pi - ABS_TOL {
                    k -= 1;
                } else {
                    break;
                }
            }

            k as f64
        }
    };

    if !has_nulls(null_count, null_mask) {
        let mut out = Vec64::with_capacity(p.len());
        for &pi in p {
            out.push(compute_quantile(pi));
        }
        return Ok(FloatArray::from_vec64(out, null_mask.cloned()));
    }

    let mask = null_mask.expect("poisson_quantile: null_count > 0 requires null_mask");
    let mut out = Vec64::with_capacity(p.len());
    for i in 0..p.len() {
        if !unsafe { mask.get_unchecked(i) } {
            out.push(f64::NAN);
        } else {
            out.push(compute_quantile(p[i]));
        }
    }
    Ok(FloatArray {
        data: out.into(),
        null_mask: Some(mask.clone()),
    })
}
