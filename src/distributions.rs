//! Probability distribution sampling.
//!
//! This module contains parameterized distributions that transform the
//! uniform draws of a [`Generator`](crate::Generator) into samples of a
//! target probability law, together with the closed-form statistics of the
//! law. All distributions share one shape:
//!
//! - construction from default parameters, an explicit seed, or an
//!   externally supplied generator (which may be a `&mut` borrow, so
//!   several distributions can share one generator);
//! - parameters validated at construction and on every setter call with
//!   the same pure predicate, rejecting before assigning, so an invalid
//!   parameter state is never observable;
//! - statistics that fail with
//!   [`Error::UndefinedStatistic`](crate::Error::UndefinedStatistic) where
//!   the law has none (the Bernoulli median, for instance);
//! - draws routed through the process-wide sampler slot of
//!   [`registry`](crate::registry) for the distribution kind, read at draw
//!   time, so replacing a slot immediately affects every existing
//!   instance.
//!
//! Each submodule also exposes its canonical sampling algorithm as a plain
//! function with the registry slot signature.
//!
//! # Examples
//! ```
//! use rng_toolbox::distributions::{Bernoulli, DiscreteDistribution, Distribution};
//!
//! let mut bernoulli = Bernoulli::with_seed(42, 0.3).unwrap();
//! let sample = bernoulli.next();
//! assert!(sample == 0 || sample == 1);
//! assert_eq!(bernoulli.mean().unwrap(), 0.3);
//! assert_eq!(bernoulli.variance().unwrap(), 0.3 * 0.7);
//! ```

use crate::Result;

pub mod bernoulli;
pub mod binomial;
pub mod categorical;
pub mod continuous_uniform;
pub mod discrete_uniform;
pub mod geometric;
pub mod logistic;
pub mod normal;
pub mod poisson;
pub mod rayleigh;

pub use bernoulli::Bernoulli;
pub use binomial::Binomial;
pub use categorical::Categorical;
pub use continuous_uniform::ContinuousUniform;
pub use discrete_uniform::DiscreteUniform;
pub use geometric::Geometric;
pub use logistic::Logistic;
pub use normal::Normal;
pub use poisson::Poisson;
pub use rayleigh::Rayleigh;

/// Common interface of all distributions.
///
/// The statistics are recomputed from the current parameters on every
/// call; they can never go stale after a parameter mutation.
pub trait Distribution {
    /// Returns the smallest value the distribution can produce.
    fn minimum(&self) -> f64;

    /// Returns the largest value the distribution can produce.
    ///
    /// Unbounded laws return `f64::INFINITY`.
    fn maximum(&self) -> f64;

    /// Returns the mean of the distribution.
    ///
    /// # Errors
    /// Fails with [`Error::UndefinedStatistic`](crate::Error::UndefinedStatistic)
    /// when the law has no mean for the current parameters.
    fn mean(&self) -> Result<f64>;

    /// Returns the median of the distribution.
    ///
    /// # Errors
    /// Fails with [`Error::UndefinedStatistic`](crate::Error::UndefinedStatistic)
    /// when the law has no median for the current parameters.
    fn median(&self) -> Result<f64>;

    /// Returns the variance of the distribution.
    ///
    /// # Errors
    /// Fails with [`Error::UndefinedStatistic`](crate::Error::UndefinedStatistic)
    /// when the law has no variance for the current parameters.
    fn variance(&self) -> Result<f64>;

    /// Returns the modes of the distribution.
    ///
    /// # Errors
    /// Fails with [`Error::UndefinedStatistic`](crate::Error::UndefinedStatistic)
    /// when the law has no mode for the current parameters.
    fn mode(&self) -> Result<Vec<f64>>;

    /// Draws one sample as a double.
    fn next_double(&mut self) -> f64;

    /// Returns whether the underlying generator supports resetting.
    fn can_reset(&self) -> bool;

    /// Resets the underlying generator with `seed`.
    ///
    /// # Errors
    /// Fails with [`Error::CannotReset`](crate::Error::CannotReset) when
    /// the underlying generator cannot reset.
    fn reset(&mut self, seed: u64) -> Result<()>;
}

/// Interface of the integer-valued distributions.
pub trait DiscreteDistribution: Distribution {
    /// Draws one sample.
    fn next(&mut self) -> i32;
}
