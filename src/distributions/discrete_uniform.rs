//! Discrete uniform distribution.
//!
//! Uniform over the integers of the closed interval [`alpha`, `beta`].
//! The canonical sampler is one bias-free bounded integer draw over
//! [`alpha`, `beta + 1`), which is why `beta` must stay below `i32::MAX`.

use crate::distributions::{DiscreteDistribution, Distribution};
use crate::generator::uniform_u32;
use crate::generators::Xorshift128;
use crate::registry;
use crate::{Error, Generator, Result};

/// Returns whether `alpha` and `beta` are valid interval bounds.
pub fn are_valid_params(alpha: i32, beta: i32) -> bool {
    alpha <= beta && beta < i32::MAX
}

/// Canonical discrete uniform sampler.
///
/// One rejection-based draw over [`alpha`, `beta + 1`), so every integer
/// of the interval is equally likely.
pub fn sample(generator: &mut dyn Generator, alpha: i32, beta: i32) -> i32 {
    let range = (beta as i64 - alpha as i64 + 1) as u32;
    (alpha as i64 + uniform_u32(generator, range) as i64) as i32
}

/// Discrete uniform distribution over the integers in [`alpha`, `beta`].
#[derive(Debug, Clone)]
pub struct DiscreteUniform<G = Xorshift128> {
    generator: G,
    alpha: i32,
    beta: i32,
}

impl DiscreteUniform<Xorshift128> {
    /// Creates a distribution with an entropy-seeded default generator.
    ///
    /// # Errors
    /// Fails with [`Error::OutOfRange`] on invalid bounds.
    pub fn new(alpha: i32, beta: i32) -> Result<Self> {
        Self::with_generator(Xorshift128::default(), alpha, beta)
    }

    /// Creates a distribution with a seeded default generator.
    ///
    /// # Errors
    /// Fails with [`Error::OutOfRange`] on invalid bounds.
    pub fn with_seed(seed: u64, alpha: i32, beta: i32) -> Result<Self> {
        Self::with_generator(Xorshift128::new(seed), alpha, beta)
    }
}

impl<G: Generator> DiscreteUniform<G> {
    /// Creates a distribution over an explicit generator.
    ///
    /// # Errors
    /// Fails with [`Error::OutOfRange`] on invalid bounds.
    pub fn with_generator(generator: G, alpha: i32, beta: i32) -> Result<Self> {
        if !are_valid_params(alpha, beta) {
            return Err(Error::OutOfRange("alpha or beta"));
        }
        Ok(DiscreteUniform {
            generator,
            alpha,
            beta,
        })
    }

    /// Returns the lower bound.
    pub fn alpha(&self) -> i32 {
        self.alpha
    }

    /// Returns the upper bound.
    pub fn beta(&self) -> i32 {
        self.beta
    }

    /// Sets the lower bound.
    ///
    /// # Errors
    /// Fails with [`Error::OutOfRange`] when the new bounds would be
    /// invalid; the previous value is kept in that case.
    pub fn set_alpha(&mut self, alpha: i32) -> Result<()> {
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
    pub fn set_beta(&mut self, beta: i32) -> Result<()> {
        if !are_valid_params(self.alpha, beta) {
            return Err(Error::OutOfRange("beta"));
        }
        self.beta = beta;
        Ok(())
    }
}

impl<G: Generator> Distribution for DiscreteUniform<G> {
    fn minimum(&self) -> f64 {
        self.alpha as f64
    }

    fn maximum(&self) -> f64 {
        self.beta as f64
    }

    fn mean(&self) -> Result<f64> {
        Ok((self.alpha as f64 + self.beta as f64) / 2.0)
    }

    fn median(&self) -> Result<f64> {
        self.mean()
    }

    fn variance(&self) -> Result<f64> {
        let count = self.beta as f64 - self.alpha as f64 + 1.0;
        Ok((count * count - 1.0) / 12.0)
    }

    fn mode(&self) -> Result<Vec<f64>> {
        Err(Error::UndefinedStatistic("mode"))
    }

    fn next_double(&mut self) -> f64 {
        self.next() as f64
    }

    fn can_reset(&self) -> bool {
        self.generator.can_reset()
    }

    fn reset(&mut self, seed: u64) -> Result<()> {
        self.generator.reset(seed)
    }
}

impl<G: Generator> DiscreteDistribution for DiscreteUniform<G> {
    fn next(&mut self) -> i32 {
        let sample = registry::discrete_uniform_sampler();
        sample(&mut self.generator, self.alpha, self.beta)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn construction_validates_bounds() {
        assert!(DiscreteUniform::with_seed(1, -5, 5).is_ok());
        assert!(DiscreteUniform::with_seed(1, 3, 3).is_ok());
        assert!(DiscreteUniform::with_seed(1, 5, -5).is_err());
        assert!(DiscreteUniform::with_seed(1, 0, i32::MAX).is_err());
        assert!(DiscreteUniform::with_seed(1, i32::MIN, i32::MAX - 1).is_ok());
    }

    #[test]
    fn setters_reject_before_assigning() {
        let mut uniform = DiscreteUniform::with_seed(1, 0, 10).unwrap();
        assert!(uniform.set_alpha(11).is_err());
        assert!(uniform.set_beta(-1).is_err());
        assert_eq!(uniform.alpha(), 0);
        assert_eq!(uniform.beta(), 10);
    }

    #[test]
    fn statistics() {
        let uniform = DiscreteUniform::with_seed(1, 1, 6).unwrap();
        assert_eq!(uniform.minimum(), 1.0);
        assert_eq!(uniform.maximum(), 6.0);
        assert_eq!(uniform.mean().unwrap(), 3.5);
        assert_eq!(uniform.median().unwrap(), 3.5);
        assert!((uniform.variance().unwrap() - 35.0 / 12.0).abs() < 1e-12);
        assert!(uniform.mode().is_err());
    }

    #[test]
    fn samples_in_support() {
        let mut uniform = DiscreteUniform::with_seed(2, -4, 4).unwrap();
        let mut seen = [false; 9];
        for _ in 0..5000 {
            let v = uniform.next();
            assert!((-4..=4).contains(&v));
            seen[(v + 4) as usize] = true;
        }
        assert!(seen.iter().all(|&s| s));
    }

    #[test]
    fn extreme_bounds_stay_in_support() {
        let mut uniform = DiscreteUniform::with_seed(3, i32::MIN, i32::MIN + 1).unwrap();
        for _ in 0..100 {
            let v = uniform.next();
            assert!(v == i32::MIN || v == i32::MIN + 1);
        }
    }

    #[test]
    fn die_roll_frequencies() {
        let mut die = DiscreteUniform::with_seed(4, 1, 6).unwrap();
        let n = 60_000;
        let mut counts = [0usize; 6];
        for _ in 0..n {
            counts[(die.next() - 1) as usize] += 1;
        }
        for &count in &counts {
            let freq = count as f64 / n as f64;
            assert!((freq - 1.0 / 6.0).abs() < 0.01);
        }
    }
}
