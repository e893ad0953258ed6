//! Poisson distribution.
//!
//! The number of events of a rate-`lambda` Poisson process observed in a
//! unit interval, supported on {0, 1, 2, ...}. The canonical sampler is
//! Knuth's product method: uniform draws are multiplied until the product
//! falls below `exp(-lambda)`. Large rates are handled by peeling the
//! exponential off in fixed-size chunks so the threshold never
//! underflows to zero.

use crate::distributions::{DiscreteDistribution, Distribution};
use crate::generators::Xorshift128;
use crate::registry;
use crate::{Error, Generator, Result};

/// Returns whether `lambda` is a valid event rate.
pub fn is_valid_lambda(lambda: f64) -> bool {
    lambda.is_finite() && lambda > 0.0
}

// Largest exponent chunk that exp() evaluates without underflow.
const STEP: f64 = 500.0;

/// Canonical Poisson sampler (Knuth's product method).
pub fn sample(generator: &mut dyn Generator, lambda: f64) -> i32 {
    let mut remaining = lambda;
    let mut product = 1.0;
    let mut count = 0i64;
    loop {
        count += 1;
        product *= generator.next_f64();
        while product < 1.0 && remaining > 0.0 {
            if remaining > STEP {
                product *= STEP.exp();
                remaining -= STEP;
            } else {
                product *= remaining.exp();
                remaining = 0.0;
            }
        }
        if product <= 1.0 && remaining == 0.0 {
            // The loop overshoots by one uniform draw.
            return (count - 1).min(i32::MAX as i64) as i32;
        }
    }
}

/// Poisson distribution with event rate `lambda`.
///
/// # Examples
/// ```
/// use rng_toolbox::distributions::{DiscreteDistribution, Distribution, Poisson};
///
/// let mut poisson = Poisson::with_seed(42, 4.0).unwrap();
/// assert!(poisson.next() >= 0);
/// assert_eq!(poisson.mean().unwrap(), 4.0);
/// ```
#[derive(Debug, Clone)]
pub struct Poisson<G = Xorshift128> {
    generator: G,
    lambda: f64,
}

impl Poisson<Xorshift128> {
    /// Creates a distribution with an entropy-seeded default generator.
    ///
    /// # Errors
    /// Fails with [`Error::OutOfRange`] when `lambda` is not finite and
    /// positive.
    pub fn new(lambda: f64) -> Result<Self> {
        Self::with_generator(Xorshift128::default(), lambda)
    }

    /// Creates a distribution with a seeded default generator.
    ///
    /// # Errors
    /// Fails with [`Error::OutOfRange`] when `lambda` is not finite and
    /// positive.
    pub fn with_seed(seed: u64, lambda: f64) -> Result<Self> {
        Self::with_generator(Xorshift128::new(seed), lambda)
    }
}

impl<G: Generator> Poisson<G> {
    /// Creates a distribution over an explicit generator.
    ///
    /// # Errors
    /// Fails with [`Error::OutOfRange`] when `lambda` is not finite and
    /// positive.
    pub fn with_generator(generator: G, lambda: f64) -> Result<Self> {
        if !is_valid_lambda(lambda) {
            return Err(Error::OutOfRange("lambda"));
        }
        Ok(Poisson { generator, lambda })
    }

    /// Returns the event rate.
    pub fn lambda(&self) -> f64 {
        self.lambda
    }

    /// Sets the event rate.
    ///
    /// # Errors
    /// Fails with [`Error::OutOfRange`] when `lambda` is not finite and
    /// positive; the previous value is kept in that case.
    pub fn set_lambda(&mut self, lambda: f64) -> Result<()> {
        if !is_valid_lambda(lambda) {
            return Err(Error::OutOfRange("lambda"));
        }
        self.lambda = lambda;
        Ok(())
    }
}

impl<G: Generator> Distribution for Poisson<G> {
    fn minimum(&self) -> f64 {
        0.0
    }

    fn maximum(&self) -> f64 {
        f64::INFINITY
    }

    fn mean(&self) -> Result<f64> {
        Ok(self.lambda)
    }

    fn median(&self) -> Result<f64> {
        Err(Error::UndefinedStatistic("median"))
    }

    fn variance(&self) -> Result<f64> {
        Ok(self.lambda)
    }

    fn mode(&self) -> Result<Vec<f64>> {
        Ok(vec![self.lambda.floor()])
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

impl<G: Generator> DiscreteDistribution for Poisson<G> {
    fn next(&mut self) -> i32 {
        let sample = registry::poisson_sampler();
        sample(&mut self.generator, self.lambda)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn construction_validates_lambda() {
        assert!(Poisson::with_seed(1, 4.0).is_ok());
        assert!(Poisson::with_seed(1, 0.01).is_ok());
        assert!(Poisson::with_seed(1, 0.0).is_err());
        assert!(Poisson::with_seed(1, -3.0).is_err());
        assert!(Poisson::with_seed(1, f64::INFINITY).is_err());
        assert!(Poisson::with_seed(1, f64::NAN).is_err());
    }

    #[test]
    fn statistics() {
        let poisson = Poisson::with_seed(1, 4.5).unwrap();
        assert_eq!(poisson.minimum(), 0.0);
        assert_eq!(poisson.maximum(), f64::INFINITY);
        assert_eq!(poisson.mean().unwrap(), 4.5);
        assert_eq!(poisson.variance().unwrap(), 4.5);
        assert_eq!(poisson.mode().unwrap(), vec![4.0]);
        assert!(poisson.median().is_err());
    }

    #[test]
    fn samples_are_non_negative() {
        let mut poisson = Poisson::with_seed(2, 3.0).unwrap();
        for _ in 0..5000 {
            assert!(poisson.next() >= 0);
        }
    }

    #[test]
    fn empirical_mean_and_variance() {
        let mut poisson = Poisson::with_seed(3, 4.0).unwrap();
        let n = 50_000;
        let samples: Vec<f64> = (0..n).map(|_| poisson.next() as f64).collect();
        let mean = samples.iter().sum::<f64>() / n as f64;
        let variance =
            samples.iter().map(|&x| (x - mean).powi(2)).sum::<f64>() / (n - 1) as f64;
        assert!((mean - 4.0).abs() < 0.1, "mean {mean} too far from 4");
        assert!((variance - 4.0).abs() < 0.2, "variance {variance} too far from 4");
    }

    #[test]
    fn large_rate_stays_finite() {
        // Rates beyond exp() underflow territory exercise the chunked
        // threshold rescaling.
        let mut poisson = Poisson::with_seed(4, 2000.0).unwrap();
        for _ in 0..20 {
            let v = poisson.next();
            assert!((1500..2500).contains(&v), "sample {v} implausible for rate 2000");
        }
    }
}
