//! One-generator sampling facade.
//!
//! [`Random`] binds a single generator to one convenience call per
//! distribution kind, for callers that want ad-hoc samples from varying
//! parameters without constructing a distribution value per parameter set.
//! Each call validates its parameters with the same predicate the
//! distribution type uses and then invokes the current
//! [`registry`](crate::registry) slot of the kind, so facade draws and
//! distribution draws follow the same algorithm at all times.
//!
//! `Random` also implements [`Generator`] by delegation, so the whole
//! derived surface of [`GeneratorExt`](crate::GeneratorExt) is available on
//! it directly and a `&mut Random` can feed any distribution.

use crate::distributions::{
    bernoulli, binomial, categorical, continuous_uniform, discrete_uniform, geometric, logistic,
    normal, poisson, rayleigh,
};
use crate::generators::Xorshift128;
use crate::registry;
use crate::{Error, Generator, Result};

/// Sampling facade over one owned generator.
///
/// # Examples
/// ```
/// use rng_toolbox::{GeneratorExt, Random};
///
/// let mut random = Random::with_seed(42);
/// let heads = random.bernoulli(0.5).unwrap();
/// assert!(heads == 0 || heads == 1);
/// let die = random.discrete_uniform(1, 6).unwrap();
/// assert!((1..=6).contains(&die));
/// let x = random.next_f64_range(-1.0, 1.0).unwrap();
/// assert!((-1.0..1.0).contains(&x));
/// ```
#[derive(Debug, Clone)]
pub struct Random<G = Xorshift128> {
    generator: G,
}

impl Random<Xorshift128> {
    /// Creates a facade over an entropy-seeded default generator.
    pub fn new() -> Self {
        Random {
            generator: Xorshift128::default(),
        }
    }

    /// Creates a facade over a seeded default generator.
    pub fn with_seed(seed: u64) -> Self {
        Random {
            generator: Xorshift128::new(seed),
        }
    }
}

impl Default for Random<Xorshift128> {
    fn default() -> Self {
        Self::new()
    }
}

impl<G: Generator> Random<G> {
    /// Creates a facade over an explicit generator.
    pub fn with_generator(generator: G) -> Self {
        Random { generator }
    }

    /// Consumes the facade and returns the owned generator.
    pub fn into_generator(self) -> G {
        self.generator
    }

    /// Draws one Bernoulli sample with success probability `alpha`.
    ///
    /// # Errors
    /// Fails with [`Error::OutOfRange`] when `alpha` is not in [0, 1].
    pub fn bernoulli(&mut self, alpha: f64) -> Result<i32> {
        if !bernoulli::is_valid_alpha(alpha) {
            return Err(Error::OutOfRange("alpha"));
        }
        Ok(registry::bernoulli_sampler()(&mut self.generator, alpha))
    }

    /// Draws one binomial sample over `beta` trials of success probability
    /// `alpha`.
    ///
    /// # Errors
    /// Fails with [`Error::OutOfRange`] on parameters outside the domain.
    pub fn binomial(&mut self, alpha: f64, beta: i32) -> Result<i32> {
        if !binomial::are_valid_params(alpha, beta) {
            return Err(Error::OutOfRange("alpha or beta"));
        }
        Ok(registry::binomial_sampler()(
            &mut self.generator,
            alpha,
            beta,
        ))
    }

    /// Draws one categorical index from a weight collection.
    ///
    /// The cumulative table is rebuilt per call; construct a
    /// [`Categorical`](crate::distributions::Categorical) to reuse it.
    ///
    /// # Errors
    /// Fails with [`Error::OutOfRange`] on an invalid weight collection.
    pub fn categorical(&mut self, weights: &[f64]) -> Result<usize> {
        if !categorical::are_valid_weights(weights) {
            return Err(Error::OutOfRange("weights"));
        }
        let cumulative = categorical::cumulative(weights);
        Ok(registry::categorical_sampler()(
            &mut self.generator,
            &cumulative,
        ))
    }

    /// Draws one uniform sample from [`alpha`, `beta`).
    ///
    /// # Errors
    /// Fails with [`Error::OutOfRange`] on invalid bounds.
    pub fn continuous_uniform(&mut self, alpha: f64, beta: f64) -> Result<f64> {
        if !continuous_uniform::are_valid_params(alpha, beta) {
            return Err(Error::OutOfRange("alpha or beta"));
        }
        Ok(registry::continuous_uniform_sampler()(
            &mut self.generator,
            alpha,
            beta,
        ))
    }

    /// Draws one uniform integer from the closed interval [`alpha`, `beta`].
    ///
    /// # Errors
    /// Fails with [`Error::OutOfRange`] on invalid bounds.
    pub fn discrete_uniform(&mut self, alpha: i32, beta: i32) -> Result<i32> {
        if !discrete_uniform::are_valid_params(alpha, beta) {
            return Err(Error::OutOfRange("alpha or beta"));
        }
        Ok(registry::discrete_uniform_sampler()(
            &mut self.generator,
            alpha,
            beta,
        ))
    }

    /// Draws one geometric sample with success probability `alpha`.
    ///
    /// # Errors
    /// Fails with [`Error::OutOfRange`] when `alpha` is not in (0, 1].
    pub fn geometric(&mut self, alpha: f64) -> Result<i32> {
        if !geometric::is_valid_alpha(alpha) {
            return Err(Error::OutOfRange("alpha"));
        }
        Ok(registry::geometric_sampler()(&mut self.generator, alpha))
    }

    /// Draws one logistic sample with location `mu` and scale `sigma`.
    ///
    /// # Errors
    /// Fails with [`Error::OutOfRange`] on parameters outside the domain.
    pub fn logistic(&mut self, mu: f64, sigma: f64) -> Result<f64> {
        if !logistic::are_valid_params(mu, sigma) {
            return Err(Error::OutOfRange("mu or sigma"));
        }
        Ok(registry::logistic_sampler()(&mut self.generator, mu, sigma))
    }

    /// Draws one normal sample with mean `mu` and standard deviation
    /// `sigma`.
    ///
    /// # Errors
    /// Fails with [`Error::OutOfRange`] on parameters outside the domain.
    pub fn normal(&mut self, mu: f64, sigma: f64) -> Result<f64> {
        if !normal::are_valid_params(mu, sigma) {
            return Err(Error::OutOfRange("mu or sigma"));
        }
        Ok(registry::normal_sampler()(&mut self.generator, mu, sigma))
    }

    /// Draws one Poisson sample with event rate `lambda`.
    ///
    /// # Errors
    /// Fails with [`Error::OutOfRange`] when `lambda` is not finite and
    /// positive.
    pub fn poisson(&mut self, lambda: f64) -> Result<i32> {
        if !poisson::is_valid_lambda(lambda) {
            return Err(Error::OutOfRange("lambda"));
        }
        Ok(registry::poisson_sampler()(&mut self.generator, lambda))
    }

    /// Draws one Rayleigh sample with scale `sigma`.
    ///
    /// # Errors
    /// Fails with [`Error::OutOfRange`] when `sigma` is not finite and
    /// positive.
    pub fn rayleigh(&mut self, sigma: f64) -> Result<f64> {
        if !rayleigh::is_valid_sigma(sigma) {
            return Err(Error::OutOfRange("sigma"));
        }
        Ok(registry::rayleigh_sampler()(&mut self.generator, sigma))
    }
}

impl<G: Generator> Generator for Random<G> {
    fn seed(&self) -> u64 {
        self.generator.seed()
    }

    fn can_reset(&self) -> bool {
        self.generator.can_reset()
    }

    fn reset(&mut self, seed: u64) -> Result<()> {
        self.generator.reset(seed)
    }

    fn next_u32(&mut self) -> u32 {
        self.generator.next_u32()
    }

    fn next_f64(&mut self) -> f64 {
        self.generator.next_f64()
    }

    fn next_i32(&mut self) -> i32 {
        self.generator.next_i32()
    }
}
