//! Categorical distribution.
//!
//! A distribution over the indexes `0..weights.len()`, where index `i` is
//! produced with probability `weights[i] / total`. The weights are
//! arbitrary non-negative finite numbers, not all zero; they do not need
//! to be normalized. A cumulative-sum table is derived from the weights
//! and rebuilt whenever they change; the canonical sampler scales one
//! uniform draw to the total weight and locates the index in the table by
//! binary search.

use crate::distributions::{DiscreteDistribution, Distribution};
use crate::generators::Xorshift128;
use crate::registry;
use crate::{Error, Generator, Result};

/// Returns whether `weights` is a valid weight collection.
///
/// The collection must be non-empty, every weight finite and
/// non-negative, and at least one weight positive.
pub fn are_valid_weights(weights: &[f64]) -> bool {
    if weights.is_empty() || weights.iter().any(|&w| !w.is_finite() || w < 0.0) {
        return false;
    }
    let total: f64 = weights.iter().sum();
    total > 0.0 && total.is_finite()
}

/// Builds the cumulative-sum table of a weight collection.
pub(crate) fn cumulative(weights: &[f64]) -> Vec<f64> {
    let mut running = 0.0;
    weights
        .iter()
        .map(|&w| {
            running += w;
            running
        })
        .collect()
}

/// Canonical categorical sampler over a cumulative-sum table.
///
/// One uniform draw scaled to the total weight, located by binary search.
/// `cumulative` must be the non-empty running sum of a valid weight
/// collection.
pub fn sample(generator: &mut dyn Generator, cumulative: &[f64]) -> usize {
    let total = cumulative.last().copied().unwrap_or(0.0);
    let u = generator.next_f64() * total;
    // First index whose cumulative weight exceeds u; u < total, so one
    // always exists.
    cumulative
        .partition_point(|&c| c <= u)
        .min(cumulative.len().saturating_sub(1))
}

/// Categorical distribution over the indexes of a weight collection.
///
/// # Examples
/// ```
/// use rng_toolbox::distributions::{Categorical, DiscreteDistribution};
///
/// let mut categorical = Categorical::with_seed(7, &[1.0, 1.0, 2.0]).unwrap();
/// let index = categorical.next();
/// assert!((0..3).contains(&index));
/// ```
#[derive(Debug, Clone)]
pub struct Categorical<G = Xorshift128> {
    generator: G,
    weights: Vec<f64>,
    // Running sum of weights, rebuilt on every weight mutation.
    cumulative: Vec<f64>,
}

impl Categorical<Xorshift128> {
    /// Creates a distribution with an entropy-seeded default generator.
    ///
    /// # Errors
    /// Fails with [`Error::OutOfRange`] on an invalid weight collection.
    pub fn new(weights: &[f64]) -> Result<Self> {
        Self::with_generator(Xorshift128::default(), weights)
    }

    /// Creates a distribution with a seeded default generator.
    ///
    /// # Errors
    /// Fails with [`Error::OutOfRange`] on an invalid weight collection.
    pub fn with_seed(seed: u64, weights: &[f64]) -> Result<Self> {
        Self::with_generator(Xorshift128::new(seed), weights)
    }
}

impl<G: Generator> Categorical<G> {
    /// Creates a distribution over an explicit generator.
    ///
    /// # Errors
    /// Fails with [`Error::OutOfRange`] on an invalid weight collection.
    pub fn with_generator(generator: G, weights: &[f64]) -> Result<Self> {
        if !are_valid_weights(weights) {
            return Err(Error::OutOfRange("weights"));
        }
        Ok(Categorical {
            generator,
            weights: weights.to_vec(),
            cumulative: cumulative(weights),
        })
    }

    /// Returns the weight collection.
    pub fn weights(&self) -> &[f64] {
        &self.weights
    }

    /// Replaces the weight collection and rebuilds the cumulative table.
    ///
    /// # Errors
    /// Fails with [`Error::OutOfRange`] on an invalid weight collection;
    /// the previous weights are kept in that case.
    pub fn set_weights(&mut self, weights: &[f64]) -> Result<()> {
        if !are_valid_weights(weights) {
            return Err(Error::OutOfRange("weights"));
        }
        self.weights = weights.to_vec();
        self.cumulative = cumulative(weights);
        Ok(())
    }

    fn total(&self) -> f64 {
        // The weight collection is valid, so the total is positive.
        *self.cumulative.last().unwrap()
    }
}

impl<G: Generator> Distribution for Categorical<G> {
    fn minimum(&self) -> f64 {
        0.0
    }

    fn maximum(&self) -> f64 {
        (self.weights.len() - 1) as f64
    }

    fn mean(&self) -> Result<f64> {
        let total = self.total();
        Ok(self
            .weights
            .iter()
            .enumerate()
            .map(|(i, &w)| i as f64 * w / total)
            .sum())
    }

    fn median(&self) -> Result<f64> {
        let half = self.total() / 2.0;
        Ok(self.cumulative.partition_point(|&c| c < half) as f64)
    }

    fn variance(&self) -> Result<f64> {
        let total = self.total();
        let mean = self.mean()?;
        Ok(self
            .weights
            .iter()
            .enumerate()
            .map(|(i, &w)| (i as f64 - mean).powi(2) * w / total)
            .sum())
    }

    fn mode(&self) -> Result<Vec<f64>> {
        let max = self
            .weights
            .iter()
            .cloned()
            .fold(f64::NEG_INFINITY, f64::max);
        Ok(self
            .weights
            .iter()
            .enumerate()
            .filter(|&(_, &w)| w == max)
            .map(|(i, _)| i as f64)
            .collect())
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

impl<G: Generator> DiscreteDistribution for Categorical<G> {
    fn next(&mut self) -> i32 {
        let sample = registry::categorical_sampler();
        sample(&mut self.generator, &self.cumulative) as i32
    }
}
