//! Rayleigh distribution.
//!
//! The magnitude of a two-dimensional vector whose components are
//! independent zero-mean normals of standard deviation `sigma`. The
//! canonical sampler is the closed-form inverse CDF
//! `sigma * sqrt(-2 ln(1 - u))` applied to one uniform draw.

use crate::distributions::Distribution;
use crate::generators::Xorshift128;
use crate::registry;
use crate::{Error, Generator, Result};
use std::f64::consts::{LN_2, PI};

/// Returns whether `sigma` is a valid Rayleigh scale.
pub fn is_valid_sigma(sigma: f64) -> bool {
    sigma.is_finite() && sigma > 0.0
}

/// Canonical Rayleigh sampler.
///
/// Inverse CDF of one uniform draw. The draw lies in [0, 1), so
/// `1 - u` never reaches zero and the logarithm stays finite.
pub fn sample(generator: &mut dyn Generator, sigma: f64) -> f64 {
    sigma * (-2.0 * (1.0 - generator.next_f64()).ln()).sqrt()
}

/// Rayleigh distribution with scale `sigma`.
#[derive(Debug, Clone)]
pub struct Rayleigh<G = Xorshift128> {
    generator: G,
    sigma: f64,
}

impl Rayleigh<Xorshift128> {
    /// Creates a distribution with an entropy-seeded default generator.
    ///
    /// # Errors
    /// Fails with [`Error::OutOfRange`] when `sigma` is not finite and
    /// positive.
    pub fn new(sigma: f64) -> Result<Self> {
        Self::with_generator(Xorshift128::default(), sigma)
    }

    /// Creates a distribution with a seeded default generator.
    ///
    /// # Errors
    /// Fails with [`Error::OutOfRange`] when `sigma` is not finite and
    /// positive.
    pub fn with_seed(seed: u64, sigma: f64) -> Result<Self> {
        Self::with_generator(Xorshift128::new(seed), sigma)
    }
}

impl<G: Generator> Rayleigh<G> {
    /// Creates a distribution over an explicit generator.
    ///
    /// # Errors
    /// Fails with [`Error::OutOfRange`] when `sigma` is not finite and
    /// positive.
    pub fn with_generator(generator: G, sigma: f64) -> Result<Self> {
        if !is_valid_sigma(sigma) {
            return Err(Error::OutOfRange("sigma"));
        }
        Ok(Rayleigh { generator, sigma })
    }

    /// Returns the scale parameter.
    pub fn sigma(&self) -> f64 {
        self.sigma
    }

    /// Sets the scale parameter.
    ///
    /// # Errors
    /// Fails with [`Error::OutOfRange`] when `sigma` is not finite and
    /// positive; the previous value is kept in that case.
    pub fn set_sigma(&mut self, sigma: f64) -> Result<()> {
        if !is_valid_sigma(sigma) {
            return Err(Error::OutOfRange("sigma"));
        }
        self.sigma = sigma;
        Ok(())
    }
}

impl<G: Generator> Distribution for Rayleigh<G> {
    fn minimum(&self) -> f64 {
        0.0
    }

    fn maximum(&self) -> f64 {
        f64::INFINITY
    }

    fn mean(&self) -> Result<f64> {
        Ok(self.sigma * (PI / 2.0).sqrt())
    }

    fn median(&self) -> Result<f64> {
        Ok(self.sigma * (2.0 * LN_2).sqrt())
    }

    fn variance(&self) -> Result<f64> {
        Ok((2.0 - PI / 2.0) * self.sigma * self.sigma)
    }

    fn mode(&self) -> Result<Vec<f64>> {
        Ok(vec![self.sigma])
    }

    fn next_double(&mut self) -> f64 {
        let sample = registry::rayleigh_sampler();
        sample(&mut self.generator, self.sigma)
    }

    fn can_reset(&self) -> bool {
        self.generator.can_reset()
    }

    fn reset(&mut self, seed: u64) -> Result<()> {
        self.generator.reset(seed)
    }
}
