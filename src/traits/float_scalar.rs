// Copyright Peter Bower 2025. All Rights Reserved.
// Licensed under Mozilla Public License (MPL) 2.0.

//! # **Float Scalar Trait** - *Width-Generic Kernel Element Type*
//!
//! Unifies `minarrow`'s floating-point array element union with `num_traits`
//! float arithmetic so that each kernel is written once and monomorphised
//! per concrete width (`f32`, `f64`), with the width chosen by the rate
//! parameter's type. No runtime precision dispatch occurs; results carry
//! the same precision as the inputs.

use minarrow::traits::type_unions::Float as ArrowFloat;
use num_traits::Float;

/// Floating-point element type accepted by the distribution kernels.
///
/// Implemented for `f32` and `f64` via the blanket impl below; the bound
/// set is exactly what the kernels need: `minarrow` array storage plus
/// `num_traits` transcendental and comparison operations.
pub trait FloatScalar: ArrowFloat + Float + minarrow::Primitive {}

impl<T: ArrowFloat + Float + minarrow::Primitive> FloatScalar for T {}
