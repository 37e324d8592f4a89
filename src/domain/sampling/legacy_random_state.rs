//! Legacy Gaussian random stream.
//!
//! Produces normal variates with Marsaglia's polar method on top of a 32-bit
//! word generator, caching the second value of each accepted pair. Combined
//! with [`Mt19937`] this is draw-for-draw compatible with the legacy NumPy
//! `RandomState(seed).normal(loc, scale, size)` primitive.

use rand::RngCore;

use super::Mt19937;

/// 2^26, the weight of the high word in a 53-bit double.
const HIGH_WORD_SCALE: f64 = 67_108_864.0;
/// 2^53.
const DOUBLE_DENOMINATOR: f64 = 9_007_199_254_740_992.0;

/// A seeded random stream with a one-value Gaussian cache.
///
/// Owned exclusively by one generation run; draws are order-dependent, so two
/// callers interleaving on the same instance break reproducibility.
#[derive(Debug, Clone)]
pub struct LegacyRandomState<R: RngCore = Mt19937> {
    rng: R,
    cached_gauss: Option<f64>,
}

impl LegacyRandomState<Mt19937> {
    /// Creates a stream backed by MT19937 seeded with `seed`.
    pub fn new(seed: u32) -> Self {
        Self::from_rng(Mt19937::new(seed))
    }
}

impl<R: RngCore> LegacyRandomState<R> {
    /// Wraps an arbitrary word source.
    pub fn from_rng(rng: R) -> Self {
        Self {
            rng,
            cached_gauss: None,
        }
    }

    /// Returns a uniform double in `[0, 1)` with 53 bits of precision.
    pub fn next_double(&mut self) -> f64 {
        let a = self.rng.next_u32() >> 5;
        let b = self.rng.next_u32() >> 6;
        (f64::from(a) * HIGH_WORD_SCALE + f64::from(b)) / DOUBLE_DENOMINATOR
    }

    /// Returns a standard normal variate.
    pub fn standard_normal(&mut self) -> f64 {
        if let Some(cached) = self.cached_gauss.take() {
            return cached;
        }

        loop {
            let x1 = 2.0 * self.next_double() - 1.0;
            let x2 = 2.0 * self.next_double() - 1.0;
            let r2 = x1 * x1 + x2 * x2;
            if r2 < 1.0 && r2 != 0.0 {
                let f = (-2.0 * r2.ln() / r2).sqrt();
                self.cached_gauss = Some(f * x1);
                return f * x2;
            }
        }
    }

    /// Returns `loc + scale * z` for a standard normal `z`.
    ///
    /// The variate is drawn even when `scale` is zero so the stream advances
    /// the same way regardless of the distribution parameters.
    pub fn normal(&mut self, loc: f64, scale: f64) -> f64 {
        loc + scale * self.standard_normal()
    }

    /// Draws `n` values from Normal(`loc`, `scale`) in stream order.
    pub fn normal_vec(&mut self, loc: f64, scale: f64, n: usize) -> Vec<f64> {
        (0..n).map(|_| self.normal(loc, scale)).collect()
    }

    /// True when the next Gaussian will be served from the cache.
    pub fn has_cached_gauss(&self) -> bool {
        self.cached_gauss.is_some()
    }
}
