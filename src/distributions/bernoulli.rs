//! Bernoulli distribution.
//!
//! A Bernoulli trial with success probability `alpha` produces 1 with
//! probability `alpha` and 0 otherwise. The canonical sampler compares one
//! uniform draw against `alpha`.

use crate::distributions::{DiscreteDistribution, Distribution};
use crate::generators::Xorshift128;
use crate::registry;
use crate::{Error, Generator, Result};

/// Returns whether `alpha` is a valid success probability.
pub fn is_valid_alpha(alpha: f64) -> bool {
    (0.0..=1.0).contains(&alpha)
}

/// Canonical Bernoulli sampler.
///
/// One uniform draw `u`; the sample is 1 if `u < alpha` and 0 otherwise.
pub fn sample(generator: &mut dyn Generator, alpha: f64) -> i32 {
    if generator.next_f64() < alpha {
        1
    } else {
        0
    }
}

/// Bernoulli distribution with success probability `alpha` in [0, 1].
///
/// # Examples
/// ```
/// use rng_toolbox::distributions::{Bernoulli, DiscreteDistribution};
///
/// let mut bernoulli = Bernoulli::with_seed(1, 1.0).unwrap();
/// assert_eq!(bernoulli.next(), 1);
/// ```
#[derive(Debug, Clone)]
pub struct Bernoulli<G = Xorshift128> {
    generator: G,
    alpha: f64,
}

impl Bernoulli<Xorshift128> {
    /// Creates a distribution with an entropy-seeded default generator.
    ///
    /// # Errors
    /// Fails with [`Error::OutOfRange`] when `alpha` is not in [0, 1].
    pub fn new(alpha: f64) -> Result<Self> {
        Self::with_generator(Xorshift128::default(), alpha)
    }

    /// Creates a distribution with a seeded default generator.
    ///
    /// # Errors
    /// Fails with [`Error::OutOfRange`] when `alpha` is not in [0, 1].
    pub fn with_seed(seed: u64, alpha: f64) -> Result<Self> {
        Self::with_generator(Xorshift128::new(seed), alpha)
    }
}

impl<G: Generator> Bernoulli<G> {
    /// Creates a distribution over an explicit generator.
    ///
    /// # Errors
    /// Fails with [`Error::OutOfRange`] when `alpha` is not in [0, 1].
    pub fn with_generator(generator: G, alpha: f64) -> Result<Self> {
        if !is_valid_alpha(alpha) {
            return Err(Error::OutOfRange("alpha"));
        }
        Ok(Bernoulli { generator, alpha })
    }

    /// Returns the success probability.
    pub fn alpha(&self) -> f64 {
        self.alpha
    }

    /// Sets the success probability.
    ///
    /// # Errors
    /// Fails with [`Error::OutOfRange`] when `alpha` is not in [0, 1]; the
    /// previous value is kept in that case.
    pub fn set_alpha(&mut self, alpha: f64) -> Result<()> {
        if !is_valid_alpha(alpha) {
            return Err(Error::OutOfRange("alpha"));
        }
        self.alpha = alpha;
        Ok(())
    }
}

impl<G: Generator> Distribution for Bernoulli<G> {
    fn minimum(&self) -> f64 {
        0.0
    }

    fn maximum(&self) -> f64 {
        1.0
    }

    fn mean(&self) -> Result<f64> {
        Ok(self.alpha)
    }

    fn median(&self) -> Result<f64> {
        Err(Error::UndefinedStatistic("median"))
    }

    fn variance(&self) -> Result<f64> {
        Ok(self.alpha * (1.0 - self.alpha))
    }

    fn mode(&self) -> Result<Vec<f64>> {
        Ok(if self.alpha < 0.5 {
            vec![0.0]
        } else if self.alpha > 0.5 {
            vec![1.0]
        } else {
            vec![0.0, 1.0]
        })
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

impl<G: Generator> DiscreteDistribution for Bernoulli<G> {
    fn next(&mut self) -> i32 {
        let sample = registry::bernoulli_sampler();
        sample(&mut self.generator, self.alpha)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn construction_validates_alpha() {
        assert!(Bernoulli::with_seed(1, 0.0).is_ok());
        assert!(Bernoulli::with_seed(1, 1.0).is_ok());
        assert_eq!(
            Bernoulli::with_seed(1, -0.1).err(),
            Some(Error::OutOfRange("alpha"))
        );
        assert_eq!(
            Bernoulli::with_seed(1, 1.1).err(),
            Some(Error::OutOfRange("alpha"))
        );
        assert!(Bernoulli::with_seed(1, f64::NAN).is_err());
    }

    #[test]
    fn setter_rejects_before_assigning() {
        let mut bernoulli = Bernoulli::with_seed(1, 0.25).unwrap();
        assert!(bernoulli.set_alpha(2.0).is_err());
        assert_eq!(bernoulli.alpha(), 0.25);
        bernoulli.set_alpha(0.75).unwrap();
        assert_eq!(bernoulli.alpha(), 0.75);
    }

    #[test]
    fn statistics() {
        let bernoulli = Bernoulli::with_seed(1, 0.3).unwrap();
        assert_eq!(bernoulli.minimum(), 0.0);
        assert_eq!(bernoulli.maximum(), 1.0);
        assert_eq!(bernoulli.mean().unwrap(), 0.3);
        assert_eq!(bernoulli.variance().unwrap(), 0.3 * 0.7);
        assert_eq!(
            bernoulli.median().err(),
            Some(Error::UndefinedStatistic("median"))
        );
        assert_eq!(bernoulli.mode().unwrap(), vec![0.0]);
        let balanced = Bernoulli::with_seed(1, 0.5).unwrap();
        assert_eq!(balanced.mode().unwrap(), vec![0.0, 1.0]);
    }

    #[test]
    fn degenerate_parameters() {
        let mut always = Bernoulli::with_seed(2, 1.0).unwrap();
        let mut never = Bernoulli::with_seed(2, 0.0).unwrap();
        for _ in 0..100 {
            assert_eq!(always.next(), 1);
            assert_eq!(never.next(), 0);
        }
    }

    #[test]
    fn empirical_frequency() {
        let mut bernoulli = Bernoulli::with_seed(3, 0.3).unwrap();
        let n = 50_000;
        let ones: i32 = (0..n).map(|_| bernoulli.next()).sum();
        let freq = ones as f64 / n as f64;
        assert!((freq - 0.3).abs() < 0.02, "frequency {freq} too far from 0.3");
    }

    #[test]
    fn reset_repeats_samples() {
        let mut bernoulli = Bernoulli::with_seed(4, 0.5).unwrap();
        let first: Vec<i32> = (0..32).map(|_| bernoulli.next()).collect();
        assert!(bernoulli.can_reset());
        bernoulli.reset(4).unwrap();
        let second: Vec<i32> = (0..32).map(|_| bernoulli.next()).collect();
        assert_eq!(first, second);
    }
}
