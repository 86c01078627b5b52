// Copyright Peter Bower 2025. All Rights Reserved.
// Licensed under Mozilla Public License (MPL) 2.0.

//! # **Common Kernel Utilities** - *Shared Elementwise Evaluation Infrastructure*
//!
//! Reusable dense and null-masked elementwise evaluation loops shared by the
//! distribution kernels, plus small helpers used by their test suites.
//!
//! Each loop iterates independent elements with no cross-element state and
//! writes each output slot exactly once, so the bodies stay trivially
//! data-parallel; the `simd` module supplies the vectorised f64 variants.

#[cfg(feature = "simd")]
pub mod simd;
/// Scalar implementations of the common elementwise evaluation loops.
pub mod std;

use minarrow::{Buffer, FloatArray};

use crate::traits::float_scalar::FloatScalar;

/// Test Helper: unwrap `FloatArray`, assert *no* null mask, return data.
pub fn dense_data<T: FloatScalar>(arr: FloatArray<T>) -> Buffer<T> {
    assert!(arr.null_mask.is_none(), "unexpected mask on dense path");
    arr.data
}
