//! Binomial distribution.
//!
//! The number of successes in `beta` independent Bernoulli trials of
//! success probability `alpha`. The canonical sampler runs the trials and
//! counts, which costs `beta` uniform draws per sample.

use crate::distributions::{DiscreteDistribution, Distribution};
use crate::generators::Xorshift128;
use crate::registry;
use crate::{Error, Generator, Result};

/// Returns whether `alpha` and `beta` are valid binomial parameters.
pub fn are_valid_params(alpha: f64, beta: i32) -> bool {
    (0.0..=1.0).contains(&alpha) && beta >= 0
}

/// Canonical binomial sampler.
///
/// Counts the successes of `beta` Bernoulli trials, one uniform draw per
/// trial.
pub fn sample(generator: &mut dyn Generator, alpha: f64, beta: i32) -> i32 {
    let mut successes = 0;
    for _ in 0..beta {
        if generator.next_f64() < alpha {
            successes += 1;
        }
    }
    successes
}

/// Binomial distribution with success probability `alpha` in [0, 1] over
/// `beta >= 0` trials.
#[derive(Debug, Clone)]
pub struct Binomial<G = Xorshift128> {
    generator: G,
    alpha: f64,
    beta: i32,
}

impl Binomial<Xorshift128> {
    /// Creates a distribution with an entropy-seeded default generator.
    ///
    /// # Errors
    /// Fails with [`Error::OutOfRange`] on parameters outside the domain.
    pub fn new(alpha: f64, beta: i32) -> Result<Self> {
        Self::with_generator(Xorshift128::default(), alpha, beta)
    }

    /// Creates a distribution with a seeded default generator.
    ///
    /// # Errors
    /// Fails with [`Error::OutOfRange`] on parameters outside the domain.
    pub fn with_seed(seed: u64, alpha: f64, beta: i32) -> Result<Self> {
        Self::with_generator(Xorshift128::new(seed), alpha, beta)
    }
}

impl<G: Generator> Binomial<G> {
    /// Creates a distribution over an explicit generator.
    ///
    /// # Errors
    /// Fails with [`Error::OutOfRange`] on parameters outside the domain.
    pub fn with_generator(generator: G, alpha: f64, beta: i32) -> Result<Self> {
        if !are_valid_params(alpha, beta) {
            return Err(Error::OutOfRange("alpha or beta"));
        }
        Ok(Binomial {
            generator,
            alpha,
            beta,
        })
    }

    /// Returns the success probability.
    pub fn alpha(&self) -> f64 {
        self.alpha
    }

    /// Returns the number of trials.
    pub fn beta(&self) -> i32 {
        self.beta
    }

    /// Sets the success probability.
    ///
    /// # Errors
    /// Fails with [`Error::OutOfRange`] when `alpha` is not in [0, 1]; the
    /// previous value is kept in that case.
    pub fn set_alpha(&mut self, alpha: f64) -> Result<()> {
        if !are_valid_params(alpha, self.beta) {
            return Err(Error::OutOfRange("alpha"));
        }
        self.alpha = alpha;
        Ok(())
    }

    /// Sets the number of trials.
    ///
    /// # Errors
    /// Fails with [`Error::OutOfRange`] when `beta` is negative; the
    /// previous value is kept in that case.
    pub fn set_beta(&mut self, beta: i32) -> Result<()> {
        if !are_valid_params(self.alpha, beta) {
            return Err(Error::OutOfRange("beta"));
        }
        self.beta = beta;
        Ok(())
    }
}

impl<G: Generator> Distribution for Binomial<G> {
    fn minimum(&self) -> f64 {
        0.0
    }

    fn maximum(&self) -> f64 {
        self.beta as f64
    }

    fn mean(&self) -> Result<f64> {
        Ok(self.alpha * self.beta as f64)
    }

    fn median(&self) -> Result<f64> {
        Err(Error::UndefinedStatistic("median"))
    }

    fn variance(&self) -> Result<f64> {
        Ok(self.alpha * (1.0 - self.alpha) * self.beta as f64)
    }

    fn mode(&self) -> Result<Vec<f64>> {
        let mode = (self.alpha * (self.beta as f64 + 1.0)).floor();
        Ok(vec![mode.min(self.beta as f64)])
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

impl<G: Generator> DiscreteDistribution for Binomial<G> {
    fn next(&mut self) -> i32 {
        let sample = registry::binomial_sampler();
        sample(&mut self.generator, self.alpha, self.beta)
    }
}
