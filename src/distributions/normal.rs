//! Normal (Gaussian) distribution.
//!
//! Mean `mu`, standard deviation `sigma`. The canonical sampler is the
//! polar variant of the Box–Muller transform (Marsaglia's polar method):
//! two uniform draws give a point in the square [-1, 1)^2, points outside
//! the unit disc are rejected, and an accepted point is transformed into a
//! standard normal variate. The sampler is stateless, so the second
//! variate of the transform is discarded rather than cached.

use crate::distributions::Distribution;
use crate::generators::Xorshift128;
use crate::registry;
use crate::{Error, Generator, Result};

/// Returns whether `mu` and `sigma` are valid normal parameters.
///
/// Both must be finite and `sigma` positive.
pub fn are_valid_params(mu: f64, sigma: f64) -> bool {
    mu.is_finite() && sigma.is_finite() && sigma > 0.0
}

/// Canonical normal sampler (polar Box–Muller).
pub fn sample_polar(generator: &mut dyn Generator, mu: f64, sigma: f64) -> f64 {
    loop {
        let v1 = 2.0 * generator.next_f64() - 1.0;
        let v2 = 2.0 * generator.next_f64() - 1.0;
        let s = v1 * v1 + v2 * v2;
        if s > 0.0 && s < 1.0 {
            return mu + sigma * v1 * (-2.0 * s.ln() / s).sqrt();
        }
    }
}

/// Normal distribution with mean `mu` and standard deviation `sigma`.
///
/// # Examples
/// ```
/// use rng_toolbox::distributions::{Distribution, Normal};
///
/// let mut normal = Normal::with_seed(42, 10.0, 0.5).unwrap();
/// let sample = normal.next_double();
/// assert!(sample.is_finite());
/// assert_eq!(normal.mean().unwrap(), 10.0);
/// ```
#[derive(Debug, Clone)]
pub struct Normal<G = Xorshift128> {
    generator: G,
    mu: f64,
    sigma: f64,
}

impl Normal<Xorshift128> {
    /// Creates a distribution with an entropy-seeded default generator.
    ///
    /// # Errors
    /// Fails with [`Error::OutOfRange`] on parameters outside the domain.
    pub fn new(mu: f64, sigma: f64) -> Result<Self> {
        Self::with_generator(Xorshift128::default(), mu, sigma)
    }

    /// Creates a distribution with a seeded default generator.
    ///
    /// # Errors
    /// Fails with [`Error::OutOfRange`] on parameters outside the domain.
    pub fn with_seed(seed: u64, mu: f64, sigma: f64) -> Result<Self> {
        Self::with_generator(Xorshift128::new(seed), mu, sigma)
    }
}

impl<G: Generator> Normal<G> {
    /// Creates a distribution over an explicit generator.
    ///
    /// # Errors
    /// Fails with [`Error::OutOfRange`] on parameters outside the domain.
    pub fn with_generator(generator: G, mu: f64, sigma: f64) -> Result<Self> {
        if !are_valid_params(mu, sigma) {
            return Err(Error::OutOfRange("mu or sigma"));
        }
        Ok(Normal {
            generator,
            mu,
            sigma,
        })
    }

    /// Returns the mean parameter.
    pub fn mu(&self) -> f64 {
        self.mu
    }

    /// Returns the standard deviation parameter.
    pub fn sigma(&self) -> f64 {
        self.sigma
    }

    /// Sets the mean parameter.
    ///
    /// # Errors
    /// Fails with [`Error::OutOfRange`] when `mu` is not finite; the
    /// previous value is kept in that case.
    pub fn set_mu(&mut self, mu: f64) -> Result<()> {
        if !are_valid_params(mu, self.sigma) {
            return Err(Error::OutOfRange("mu"));
        }
        self.mu = mu;
        Ok(())
    }

    /// Sets the standard deviation parameter.
    ///
    /// # Errors
    /// Fails with [`Error::OutOfRange`] when `sigma` is not finite and
    /// positive; the previous value is kept in that case.
    pub fn set_sigma(&mut self, sigma: f64) -> Result<()> {
        if !are_valid_params(self.mu, sigma) {
            return Err(Error::OutOfRange("sigma"));
        }
        self.sigma = sigma;
        Ok(())
    }
}

impl<G: Generator> Distribution for Normal<G> {
    fn minimum(&self) -> f64 {
        f64::NEG_INFINITY
    }

    fn maximum(&self) -> f64 {
        f64::INFINITY
    }

    fn mean(&self) -> Result<f64> {
        Ok(self.mu)
    }

    fn median(&self) -> Result<f64> {
        Ok(self.mu)
    }

    fn variance(&self) -> Result<f64> {
        Ok(self.sigma * self.sigma)
    }

    fn mode(&self) -> Result<Vec<f64>> {
        Ok(vec![self.mu])
    }

    fn next_double(&mut self) -> f64 {
        // The sampler is read from the registry at draw time, so a global
        // override takes effect on existing instances.
        let sample = registry::normal_sampler();
        sample(&mut self.generator, self.mu, self.sigma)
    }

    fn can_reset(&self) -> bool {
        self.generator.can_reset()
    }

    fn reset(&mut self, seed: u64) -> Result<()> {
        self.generator.reset(seed)
    }
}
