//! Continuous uniform distribution.
//!
//! Uniform over the half-open interval [`alpha`, `beta`). The canonical
//! sampler is a linear remap of one uniform draw.

use crate::distributions::Distribution;
use crate::generators::Xorshift128;
use crate::registry;
use crate::{Error, Generator, Result};

/// Returns whether `alpha` and `beta` are valid interval bounds.
///
/// Both bounds and their span must be finite, with `alpha <= beta`.
pub fn are_valid_params(alpha: f64, beta: f64) -> bool {
    alpha.is_finite() && beta.is_finite() && alpha <= beta && (beta - alpha).is_finite()
}

/// Canonical continuous uniform sampler.
///
/// Linear remap of one uniform draw onto [`alpha`, `beta`).
pub fn sample(generator: &mut dyn Generator, alpha: f64, beta: f64) -> f64 {
    alpha + generator.next_f64() * (beta - alpha)
}

/// Continuous uniform distribution over [`alpha`, `beta`).
#[derive(Debug, Clone)]
pub struct ContinuousUniform<G = Xorshift128> {
    generator: G,
    alpha: f64,
    beta: f64,
}

impl ContinuousUniform<Xorshift128> {
    /// Creates a distribution with an entropy-seeded default generator.
    ///
    /// # Errors
    /// Fails with [`Error::OutOfRange`] on invalid bounds.
    pub fn new(alpha: f64, beta: f64) -> Result<Self> {
        Self::with_generator(Xorshift128::default(), alpha, beta)
    }

    /// Creates a distribution with a seeded default generator.
    ///
    /// # Errors
    /// Fails with [`Error::OutOfRange`] on invalid bounds.
    pub fn with_seed(seed: u64, alpha: f64, beta: f64) -> Result<Self> {
        Self::with_generator(Xorshift128::new(seed), alpha, beta)
    }
}

impl<G: Generator> ContinuousUniform<G> {
    /// Creates a distribution over an explicit generator.
    ///
    /// # Errors
    /// Fails with [`Error::OutOfRange`] on invalid bounds.
    pub fn with_generator(generator: G, alpha: f64, beta: f64) -> Result<Self> {
        if !are_valid_params(alpha, beta) {
            return Err(Error::OutOfRange("alpha or beta"));
        }
        Ok(ContinuousUniform {
            generator,
            alpha,
            beta,
        })
    }

    /// Returns the lower bound.
    pub fn alpha(&self) -> f64 {
        self.alpha
    }

    /// Returns the upper bound.
    pub fn beta(&self) -> f64 {
        self.beta
    }

    /// Sets the lower bound.
    ///
    /// # Errors
    /// Fails with [`Error::OutOfRange`] when the new bounds would be
    /// invalid; the previous value is kept in that case.
    pub fn set_alpha(&mut self, alpha: f64) -> Result<()> {
        if !are_valid_params(alpha, self.beta) {
            return Err(Error::OutOfRange("alpha"));
        }
        self.alpha = alpha;
        Ok(())
    }

    /// Sets the upper bound.
    ///
    /// # Errors
    /// Fails with [`Error::OutOfRange`] when the new bounds would be
    /// invalid; the previous value is kept in that case.
    pub fn set_beta(&mut self, beta: f64) -> Result<()> {
        if !are_valid_params(self.alpha, beta) {
            return Err(Error::OutOfRange("beta"));
        }
        self.beta = beta;
        Ok(())
    }
}

impl<G: Generator> Distribution for ContinuousUniform<G> {
    fn minimum(&self) -> f64 {
        self.alpha
    }

    fn maximum(&self) -> f64 {
        self.beta
    }

    fn mean(&self) -> Result<f64> {
        Ok(self.alpha / 2.0 + self.beta / 2.0)
    }

    fn median(&self) -> Result<f64> {
        self.mean()
    }

    fn variance(&self) -> Result<f64> {
        Ok((self.beta - self.alpha).powi(2) / 12.0)
    }

    fn mode(&self) -> Result<Vec<f64>> {
        Err(Error::UndefinedStatistic("mode"))
    }

    fn next_double(&mut self) -> f64 {
        let sample = registry::continuous_uniform_sampler();
        sample(&mut self.generator, self.alpha, self.beta)
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
    fn construction_validates_bounds() {
        assert!(ContinuousUniform::with_seed(1, -1.0, 1.0).is_ok());
        assert!(ContinuousUniform::with_seed(1, 2.0, 2.0).is_ok());
        assert!(ContinuousUniform::with_seed(1, 1.0, -1.0).is_err());
        assert!(ContinuousUniform::with_seed(1, f64::NEG_INFINITY, 0.0).is_err());
        assert!(ContinuousUniform::with_seed(1, 0.0, f64::NAN).is_err());
        assert!(ContinuousUniform::with_seed(1, f64::MIN, f64::MAX).is_err());
    }

    #[test]
    fn setters_reject_before_assigning() {
        let mut uniform = ContinuousUniform::with_seed(1, 0.0, 1.0).unwrap();
        assert!(uniform.set_alpha(2.0).is_err());
        assert!(uniform.set_beta(-1.0).is_err());
        assert_eq!(uniform.alpha(), 0.0);
        assert_eq!(uniform.beta(), 1.0);
        uniform.set_beta(5.0).unwrap();
        assert_eq!(uniform.beta(), 5.0);
    }

    #[test]
    fn statistics() {
        let uniform = ContinuousUniform::with_seed(1, 2.0, 6.0).unwrap();
        assert_eq!(uniform.mean().unwrap(), 4.0);
        assert_eq!(uniform.median().unwrap(), 4.0);
        assert!((uniform.variance().unwrap() - 16.0 / 12.0).abs() < 1e-12);
        assert_eq!(
            uniform.mode().err(),
            Some(Error::UndefinedStatistic("mode"))
        );
    }

    #[test]
    fn samples_in_interval() {
        let mut uniform = ContinuousUniform::with_seed(2, -3.0, 3.0).unwrap();
        for _ in 0..10_000 {
            let v = uniform.next_double();
            assert!((-3.0..3.0).contains(&v));
        }
    }

    #[test]
    fn empirical_mean() {
        let mut uniform = ContinuousUniform::with_seed(3, 0.0, 10.0).unwrap();
        let n = 50_000;
        let sum: f64 = (0..n).map(|_| uniform.next_double()).sum();
        let mean = sum / n as f64;
        assert!((mean - 5.0).abs() < 0.1, "mean {mean} too far from 5");
    }

    #[test]
    fn degenerate_interval() {
        let mut uniform = ContinuousUniform::with_seed(4, 2.5, 2.5).unwrap();
        for _ in 0..100 {
            assert_eq!(uniform.next_double(), 2.5);
        }
    }
}
