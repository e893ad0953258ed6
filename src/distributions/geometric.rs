//! Geometric distribution.
//!
//! The number of Bernoulli trials of success probability `alpha` needed to
//! obtain the first success, supported on {1, 2, 3, ...}. The canonical
//! sampler inverts the cumulative distribution function of the waiting
//! time, so it costs a single uniform draw regardless of `alpha`.

use crate::distributions::{DiscreteDistribution, Distribution};
use crate::generators::Xorshift128;
use crate::registry;
use crate::{Error, Generator, Result};
use std::f64::consts::LN_2;

/// Returns whether `alpha` is a valid success probability.
pub fn is_valid_alpha(alpha: f64) -> bool {
    alpha > 0.0 && alpha <= 1.0
}

/// Canonical geometric sampler.
///
/// Inverse CDF of the waiting time: `floor(ln(1 - u) / ln(1 - alpha)) + 1`
/// from one uniform draw `u`.
pub fn sample(generator: &mut dyn Generator, alpha: f64) -> i32 {
    if alpha == 1.0 {
        // Every trial succeeds; the draw is consumed for stream parity
        // with the general case.
        generator.next_f64();
        return 1;
    }
    let u = generator.next_f64();
    // The cast saturates, so extreme waiting times clip at i32::MAX
    // instead of overflowing.
    (((1.0 - u).ln() / (1.0 - alpha).ln()).floor() + 1.0) as i32
}

/// Geometric distribution with success probability `alpha` in (0, 1].
#[derive(Debug, Clone)]
pub struct Geometric<G = Xorshift128> {
    generator: G,
    alpha: f64,
}

impl Geometric<Xorshift128> {
    /// Creates a distribution with an entropy-seeded default generator.
    ///
    /// # Errors
    /// Fails with [`Error::OutOfRange`] when `alpha` is not in (0, 1].
    pub fn new(alpha: f64) -> Result<Self> {
        Self::with_generator(Xorshift128::default(), alpha)
    }

    /// Creates a distribution with a seeded default generator.
    ///
    /// # Errors
    /// Fails with [`Error::OutOfRange`] when `alpha` is not in (0, 1].
    pub fn with_seed(seed: u64, alpha: f64) -> Result<Self> {
        Self::with_generator(Xorshift128::new(seed), alpha)
    }
}

impl<G: Generator> Geometric<G> {
    /// Creates a distribution over an explicit generator.
    ///
    /// # Errors
    /// Fails with [`Error::OutOfRange`] when `alpha` is not in (0, 1].
    pub fn with_generator(generator: G, alpha: f64) -> Result<Self> {
        if !is_valid_alpha(alpha) {
            return Err(Error::OutOfRange("alpha"));
        }
        Ok(Geometric { generator, alpha })
    }

    /// Returns the success probability.
    pub fn alpha(&self) -> f64 {
        self.alpha
    }

    /// Sets the success probability.
    ///
    /// # Errors
    /// Fails with [`Error::OutOfRange`] when `alpha` is not in (0, 1];
    /// the previous value is kept in that case.
    pub fn set_alpha(&mut self, alpha: f64) -> Result<()> {
        if !is_valid_alpha(alpha) {
            return Err(Error::OutOfRange("alpha"));
        }
        self.alpha = alpha;
        Ok(())
    }
}

impl<G: Generator> Distribution for Geometric<G> {
    fn minimum(&self) -> f64 {
        1.0
    }

    fn maximum(&self) -> f64 {
        f64::INFINITY
    }

    fn mean(&self) -> Result<f64> {
        Ok(1.0 / self.alpha)
    }

    fn median(&self) -> Result<f64> {
        Ok(if self.alpha == 1.0 {
            1.0
        } else {
            (LN_2 / -(1.0 - self.alpha).ln()).ceil().max(1.0)
        })
    }

    fn variance(&self) -> Result<f64> {
        Ok((1.0 - self.alpha) / (self.alpha * self.alpha))
    }

    fn mode(&self) -> Result<Vec<f64>> {
        Ok(vec![1.0])
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

impl<G: Generator> DiscreteDistribution for Geometric<G> {
    fn next(&mut self) -> i32 {
        let sample = registry::geometric_sampler();
        sample(&mut self.generator, self.alpha)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn construction_validates_alpha() {
        assert!(Geometric::with_seed(1, 1.0).is_ok());
        assert!(Geometric::with_seed(1, 0.01).is_ok());
        assert!(Geometric::with_seed(1, 0.0).is_err());
        assert!(Geometric::with_seed(1, 1.5).is_err());
        assert!(Geometric::with_seed(1, f64::NAN).is_err());
    }

    #[test]
    fn statistics() {
        let geometric = Geometric::with_seed(1, 0.25).unwrap();
        assert_eq!(geometric.minimum(), 1.0);
        assert_eq!(geometric.maximum(), f64::INFINITY);
        assert_eq!(geometric.mean().unwrap(), 4.0);
        assert_eq!(geometric.variance().unwrap(), 12.0);
        assert_eq!(geometric.mode().unwrap(), vec![1.0]);
        // P(X <= 3) > 1/2 for alpha = 0.25.
        assert_eq!(geometric.median().unwrap(), 3.0);
        let certain = Geometric::with_seed(1, 1.0).unwrap();
        assert_eq!(certain.median().unwrap(), 1.0);
    }

    #[test]
    fn samples_are_positive() {
        let mut geometric = Geometric::with_seed(2, 0.3).unwrap();
        for _ in 0..5000 {
            assert!(geometric.next() >= 1);
        }
    }

    #[test]
    fn certain_success_is_always_one() {
        let mut geometric = Geometric::with_seed(3, 1.0).unwrap();
        for _ in 0..100 {
            assert_eq!(geometric.next(), 1);
        }
    }

    #[test]
    fn empirical_mean() {
        let mut geometric = Geometric::with_seed(4, 0.25).unwrap();
        let n = 50_000;
        let sum: i64 = (0..n).map(|_| geometric.next() as i64).sum();
        let mean = sum as f64 / n as f64;
        assert!((mean - 4.0).abs() < 0.2, "mean {mean} too far from 4");
    }
}
