// Copyright Peter Bower 2025. All Rights Reserved.
// Licensed under the Mozilla Public License (MPL) 2.0.
// See LICENSE for details.

//! # **poisson-kernels** - *Vectorised Poisson Distribution Kernels*
//!
//! Numerically stable, data-parallel kernels for the discrete Poisson
//! distribution: log probability mass, probability mass, cumulative
//! distribution, quantile, and random variate generation, evaluated over
//! `minarrow` arrays with Arrow-style null-mask propagation.
//!
//! The elementwise kernels are generic over the floating-point width
//! (`f32`, `f64`) and compiled once per concrete width. With the `simd`
//! feature enabled, the `f64` log-PMF and PMF take a portable-SIMD fast
//! path with lane counts resolved per target architecture at build time.

// At the time of writing this unlocks extra std::simd that the developers
// intend on stabilising but haven't yet.
#![cfg_attr(feature = "simd", feature(portable_simd))]

// compile with RUSTFLAGS="-C target-cpu=native" cargo +nightly build --features simd

pub mod errors;

pub mod kernels {
    pub mod common;
    pub mod poisson;
    pub mod shared {
        pub mod constants;
        pub mod sampler;
        pub mod scalar;
    }
}

pub mod traits {
    pub mod float_scalar;
}

pub mod utils;
