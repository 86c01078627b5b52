// Copyright Peter Bower 2025. All Rights Reserved.
// Licensed under Mozilla Public License (MPL) 2.0.

use minarrow::{Bitmask, Vec64};
use num_traits::Float;

use crate::traits::float_scalar::FloatScalar;

/// Dense kernel helper, generic over the floating-point width.
///
/// ### Null handling
/// - A null mask appearing in the dense path means a mask was supplied
/// to the kernel function, with a null_count of `0`. This can reflect
/// a scenario where one knew there were no nulls for a whole vector, or
/// the supplied window, and therefore supplied `0` to ensure that the
/// dense path was used for the kernel.
/// - Any `NaN` or `inf` values generated in the kernel function
/// are kept verbatim, without `nulling` them in the (optional)
/// mask, given that:
/// 1. These values can represent additional data signal.
/// 2. Handling them requires additional CPU cycles on the hot path.
///
/// Therefore, one can treat them further if needed.
#[inline(always)]
pub fn dense_univariate_kernel_std<T, FScalar>(
    x: &[T],
    has_mask: bool,
    scalar_body: FScalar,
) -> (Vec64<T>, Option<Bitmask>)
where
    T: FloatScalar,
    FScalar: Fn(T) -> T,
{
    let len = x.len();
    let mut out = Vec64::with_capacity(len);

    for &xi in x {
        out.push(scalar_body(xi));
    }

    let out_mask = if has_mask {
        Some(Bitmask::new_set_all(len, true))
    } else {
        None
    };
    (out, out_mask)
}

/// Null-aware masked kernel helper, generic over the floating-point width.
///
/// ### Null handling
/// - Input mask is required and propagates nulls accordingly; null lanes
/// yield `NaN` output with a cleared validity bit.
/// - Any `NaN` or `inf` values generated in the kernel function for valid
/// lanes are kept verbatim, without `nulling` them in the mask.
///
/// # Safety
/// Uses unchecked access for performance within validated ranges.
#[inline(always)]
pub fn masked_univariate_kernel_std<T, FScalar>(
    x: &[T],
    mask: &Bitmask,
    scalar_body: FScalar,
) -> (Vec64<T>, Bitmask)
where
    T: FloatScalar,
    FScalar: Fn(T) -> T,
{
    let len = x.len();
    let mut out = Vec64::with_capacity(len);
    let mut out_mask = mask.clone();

    for idx in 0..len {
        if !unsafe { mask.get_unchecked(idx) } {
            out.push(T::nan());
            unsafe { out_mask.set_unchecked(idx, false) };
        } else {
            let xi = unsafe { *x.get_unchecked(idx) };
            out.push(scalar_body(xi));
            unsafe { out_mask.set_unchecked(idx, true) };
        }
    }

    (out, out_mask)
}
