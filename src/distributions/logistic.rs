//! Logistic distribution.
//!
//! Location `mu`, scale `sigma`. The canonical sampler is the closed-form
//! inverse CDF `mu + sigma * ln(u / (1 - u))` applied to one uniform
//! draw.

use crate::distributions::Distribution;
use crate::generators::Xorshift128;
use crate::registry;
use crate::{Error, Generator, Result};
use std::f64::consts::PI;

/// Returns whether `mu` and `sigma` are valid logistic parameters.
///
/// Both must be finite and `sigma` non-zero.
pub fn are_valid_params(mu: f64, sigma: f64) -> bool {
    mu.is_finite() && sigma.is_finite() && sigma != 0.0
}

/// Canonical logistic sampler.
///
/// Inverse CDF of one uniform draw; draws of exactly zero are rejected so
/// that the logit stays finite.
pub fn sample(generator: &mut dyn Generator, mu: f64, sigma: f64) -> f64 {
    loop {
        let u = generator.next_f64();
        if u > 0.0 {
            return mu + sigma * (u / (1.0 - u)).ln();
        }
    }
}

/// Logistic distribution with location `mu` and non-zero scale `sigma`.
#[derive(Debug, Clone)]
pub struct Logistic<G = Xorshift128> {
    generator: G,
    mu: f64,
    sigma: f64,
}

impl Logistic<Xorshift128> {
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

impl<G: Generator> Logistic<G> {
    /// Creates a distribution over an explicit generator.
    ///
    /// # Errors
    /// Fails with [`Error::OutOfRange`] on parameters outside the domain.
    pub fn with_generator(generator: G, mu: f64, sigma: f64) -> Result<Self> {
        if !are_valid_params(mu, sigma) {
            return Err(Error::OutOfRange("mu or sigma"));
        }
        Ok(Logistic {
            generator,
            mu,
            sigma,
        })
    }

    /// Returns the location parameter.
    pub fn mu(&self) -> f64 {
        self.mu
    }

    /// Returns the scale parameter.
    pub fn sigma(&self) -> f64 {
        self.sigma
    }

    /// Sets the location parameter.
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

    /// Sets the scale parameter.
    ///
    /// # Errors
    /// Fails with [`Error::OutOfRange`] when `sigma` is zero or not
    /// finite; the previous value is kept in that case.
    pub fn set_sigma(&mut self, sigma: f64) -> Result<()> {
        if !are_valid_params(self.mu, sigma) {
            return Err(Error::OutOfRange("sigma"));
        }
        self.sigma = sigma;
        Ok(())
    }
}

impl<G: Generator> Distribution for Logistic<G> {
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
        Ok(self.sigma * self.sigma * PI * PI / 3.0)
    }

    fn mode(&self) -> Result<Vec<f64>> {
        Ok(vec![self.mu])
    }

    fn next_double(&mut self) -> f64 {
        let sample = registry::logistic_sampler();
        sample(&mut self.generator, self.mu, self.sigma)
    }

    fn can_reset(&self) -> bool {
        self.generator.can_reset()
    }

    fn reset(&mut self, seed: u64) -> Result<()> {
        self.generator.reset(seed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn construction_validates_params() {
        assert!(Logistic::with_seed(1, 0.0, 1.0).is_ok());
        assert!(Logistic::with_seed(1, 0.0, -1.0).is_ok());
        assert!(Logistic::with_seed(1, 0.0, 0.0).is_err());
        assert!(Logistic::with_seed(1, f64::INFINITY, 1.0).is_err());
        assert!(Logistic::with_seed(1, 0.0, f64::NAN).is_err());
    }

    #[test]
    fn setters_reject_before_assigning() {
        let mut logistic = Logistic::with_seed(1, 2.0, 3.0).unwrap();
        assert!(logistic.set_sigma(0.0).is_err());
        assert!(logistic.set_mu(f64::NAN).is_err());
        assert_eq!(logistic.mu(), 2.0);
        assert_eq!(logistic.sigma(), 3.0);
    }

    #[test]
    fn statistics() {
        let logistic = Logistic::with_seed(1, 5.0, 2.0).unwrap();
        assert_eq!(logistic.mean().unwrap(), 5.0);
        assert_eq!(logistic.median().unwrap(), 5.0);
        assert_eq!(logistic.mode().unwrap(), vec![5.0]);
        assert!((logistic.variance().unwrap() - 4.0 * PI * PI / 3.0).abs() < 1e-12);
    }

    #[test]
    fn samples_are_finite() {
        let mut logistic = Logistic::with_seed(2, 0.0, 1.0).unwrap();
        for _ in 0..10_000 {
            assert!(logistic.next_double().is_finite());
        }
    }

    #[test]
    fn empirical_median() {
        // The median of the samples converges to mu.
        let mut logistic = Logistic::with_seed(3, 2.0, 1.0).unwrap();
        let n = 20_000;
        let above = (0..n).filter(|_| logistic.next_double() > 2.0).count();
        let freq = above as f64 / n as f64;
        assert!((freq - 0.5).abs() < 0.02, "frequency {freq} too far from 1/2");
    }
}
