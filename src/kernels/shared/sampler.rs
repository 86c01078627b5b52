// Copyright Peter Bower 2025. All Rights Reserved.
// Licensed under Mozilla Public License (MPL) 2.0.

//! # Statistical Sampling Module — Poisson Pseudorandom Variate Generation
//!
//! Pseudorandom number generation for the variate kernel, built on an
//! injectable generator context rather than a hidden process-wide global.
//! The default construction draws from the thread-local generator (ambient
//! entropy); [`Sampler::seeded`] yields a deterministic, reproducible stream.

use minarrow::Vec64;
use rand::rngs::{StdRng, ThreadRng};
use rand::{rng, Rng, SeedableRng};
use rand_distr::{Distribution, Poisson};

use crate::errors::KernelError;

/// Statistical distribution sampler over an injectable PRNG.
///
/// Generator state advances on every draw. Callers that need concurrent
/// reproducible streams should hold one seeded sampler per stream rather
/// than sharing a single instance; nothing here touches global state beyond
/// the thread-local generator of the default construction.
pub struct Sampler<R: Rng = ThreadRng> {
    rng: R,
}

impl Sampler<ThreadRng> {
    /// Creates a sampler backed by the thread-local pseudorandom generator.
    /// Draws are not reproducible across calls or processes.
    #[inline]
    pub fn new() -> Self {
        Sampler { rng: rng() }
    }
}

impl Default for Sampler<ThreadRng> {
    fn default() -> Self {
        Self::new()
    }
}

impl Sampler<StdRng> {
    /// Creates a deterministically seeded sampler: equal seeds yield equal
    /// draw sequences.
    #[inline]
    pub fn seeded(seed: u64) -> Self {
        Sampler {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl<R: Rng> Sampler<R> {
    /// Single draw from Poisson(λ). Precondition: λ > 0, finite.
    #[inline]
    pub fn poisson(&mut self, lambda: f64) -> Result<i64, KernelError> {
        let dist = Poisson::new(lambda)
            .map_err(|e| KernelError::Sampling(format!("poisson sampler: {e}")))?;
        let draw: f64 = dist.sample(&mut self.rng);
        Ok(draw as i64)
    }

    /// Vector of `size` iid draws from Poisson(λ) as 64-bit signed integers.
    ///
    /// The distribution object is constructed once and sampled across the
    /// whole vector. Precondition: λ > 0, finite.
    #[inline]
    pub fn poisson_vec(&mut self, lambda: f64, size: usize) -> Result<Vec64<i64>, KernelError> {
        let dist = Poisson::new(lambda)
            .map_err(|e| KernelError::Sampling(format!("poisson sampler: {e}")))?;
        let mut out = Vec64::with_capacity(size);
        for _ in 0..size {
            let draw: f64 = dist.sample(&mut self.rng);
            out.push(draw as i64);
        }
        Ok(out)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn seeded_streams_repeat() {
        let a = Sampler::seeded(7).poisson_vec(3.0, 256).unwrap();
        let b = Sampler::seeded(7).poisson_vec(3.0, 256).unwrap();
        assert_eq!(&a[..], &b[..]);
    }

    #[test]
    fn seeded_streams_diverge_across_seeds() {
        let a = Sampler::seeded(1).poisson_vec(3.0, 256).unwrap();
        let b = Sampler::seeded(2).poisson_vec(3.0, 256).unwrap();
        assert_ne!(&a[..], &b[..]);
    }

    #[test]
    fn single_draw_matches_stream_head() {
        let mut s = Sampler::seeded(11);
        let first = s.poisson(3.0).unwrap();
        let stream = Sampler::seeded(11).poisson_vec(3.0, 1).unwrap();
        assert_eq!(first, stream[0]);
    }

    #[test]
    fn sample_mean_tracks_rate() {
        let draws = Sampler::seeded(42).poisson_vec(4.0, 20_000).unwrap();
        let mean = draws.iter().map(|&x| x as f64).sum::<f64>() / draws.len() as f64;
        assert!((mean - 4.0).abs() < 0.1, "sample mean {mean} too far from 4.0");
        assert!(draws.iter().all(|&x| x >= 0));
    }

    #[test]
    fn invalid_rate_is_a_sampling_error() {
        assert!(Sampler::seeded(0).poisson_vec(0.0, 4).is_err());
    }
}
