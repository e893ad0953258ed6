//! Process-wide registry of sampling algorithms.
//!
//! Every distribution kind owns one slot holding the function used to turn
//! uniform draws into domain samples. The slots start out pointing at the
//! canonical samplers of the [`distributions`](crate::distributions)
//! modules and can be replaced at runtime, for example to swap in a faster
//! approximation or a table-driven variant. Slots are read at draw time by
//! every live distribution instance and by [`Random`](crate::Random), so a
//! replacement takes effect immediately, process wide.
//!
//! The registry is shared state: two callers in the same process observe
//! each other's replacements. Whoever replaces a slot is responsible for
//! restoring it, either with the canonical `fn` re-exported by the kind's
//! module or through [`reset`]/[`reset_all`].
//!
//! # Examples
//! ```
//! use rng_toolbox::distributions::{Distribution, Normal};
//! use rng_toolbox::registry::{self, DistributionKind};
//! use rng_toolbox::Generator;
//!
//! fn degenerate(_: &mut dyn Generator, mu: f64, _: f64) -> f64 {
//!     mu
//! }
//!
//! let mut normal = Normal::with_seed(1, 3.0, 1.0).unwrap();
//! registry::set_normal_sampler(degenerate);
//! assert_eq!(normal.next_double(), 3.0);
//! registry::reset(DistributionKind::Normal);
//! ```

use crate::distributions::{
    bernoulli, binomial, categorical, continuous_uniform, discrete_uniform, geometric, logistic,
    normal, poisson, rayleigh,
};
use crate::Generator;
use enum_iterator::Sequence;
use std::sync::{PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

/// The distribution kinds with a registry slot.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash, Sequence)]
pub enum DistributionKind {
    /// [`Bernoulli`](crate::distributions::Bernoulli).
    Bernoulli,
    /// [`Binomial`](crate::distributions::Binomial).
    Binomial,
    /// [`Categorical`](crate::distributions::Categorical).
    Categorical,
    /// [`ContinuousUniform`](crate::distributions::ContinuousUniform).
    ContinuousUniform,
    /// [`DiscreteUniform`](crate::distributions::DiscreteUniform).
    DiscreteUniform,
    /// [`Geometric`](crate::distributions::Geometric).
    Geometric,
    /// [`Logistic`](crate::distributions::Logistic).
    Logistic,
    /// [`Normal`](crate::distributions::Normal).
    Normal,
    /// [`Poisson`](crate::distributions::Poisson).
    Poisson,
    /// [`Rayleigh`](crate::distributions::Rayleigh).
    Rayleigh,
}

/// Bernoulli sampler: success probability `alpha`, sample in {0, 1}.
pub type BernoulliSampler = fn(&mut dyn Generator, f64) -> i32;
/// Binomial sampler: success probability `alpha` and trial count `beta`.
pub type BinomialSampler = fn(&mut dyn Generator, f64, i32) -> i32;
/// Categorical sampler over the cumulative-sum table of the weights.
pub type CategoricalSampler = fn(&mut dyn Generator, &[f64]) -> usize;
/// Continuous uniform sampler over [`alpha`, `beta`).
pub type ContinuousUniformSampler = fn(&mut dyn Generator, f64, f64) -> f64;
/// Discrete uniform sampler over the integers in [`alpha`, `beta`].
pub type DiscreteUniformSampler = fn(&mut dyn Generator, i32, i32) -> i32;
/// Geometric sampler: success probability `alpha`, sample in {1, 2, ...}.
pub type GeometricSampler = fn(&mut dyn Generator, f64) -> i32;
/// Logistic sampler: location `mu` and scale `sigma`.
pub type LogisticSampler = fn(&mut dyn Generator, f64, f64) -> f64;
/// Normal sampler: mean `mu` and standard deviation `sigma`.
pub type NormalSampler = fn(&mut dyn Generator, f64, f64) -> f64;
/// Poisson sampler: event rate `lambda`, sample in {0, 1, ...}.
pub type PoissonSampler = fn(&mut dyn Generator, f64) -> i32;
/// Rayleigh sampler: scale `sigma`, non-negative sample.
pub type RayleighSampler = fn(&mut dyn Generator, f64) -> f64;

struct Registry {
    bernoulli: BernoulliSampler,
    binomial: BinomialSampler,
    categorical: CategoricalSampler,
    continuous_uniform: ContinuousUniformSampler,
    discrete_uniform: DiscreteUniformSampler,
    geometric: GeometricSampler,
    logistic: LogisticSampler,
    normal: NormalSampler,
    poisson: PoissonSampler,
    rayleigh: RayleighSampler,
}

const CANONICAL: Registry = Registry {
    bernoulli: bernoulli::sample,
    binomial: binomial::sample,
    categorical: categorical::sample,
    continuous_uniform: continuous_uniform::sample,
    discrete_uniform: discrete_uniform::sample,
    geometric: geometric::sample,
    logistic: logistic::sample,
    normal: normal::sample_polar,
    poisson: poisson::sample,
    rayleigh: rayleigh::sample,
};

static REGISTRY: RwLock<Registry> = RwLock::new(CANONICAL);

// The slots hold plain fn pointers, so a poisoned lock cannot leave the
// registry in a torn state and the poison flag is ignored.
fn read() -> RwLockReadGuard<'static, Registry> {
    REGISTRY.read().unwrap_or_else(PoisonError::into_inner)
}

fn write() -> RwLockWriteGuard<'static, Registry> {
    REGISTRY.write().unwrap_or_else(PoisonError::into_inner)
}

/// Returns the current Bernoulli sampler.
pub fn bernoulli_sampler() -> BernoulliSampler {
    read().bernoulli
}

/// Replaces the Bernoulli sampler.
pub fn set_bernoulli_sampler(sampler: BernoulliSampler) {
    write().bernoulli = sampler;
}

/// Returns the current binomial sampler.
pub fn binomial_sampler() -> BinomialSampler {
    read().binomial
}

/// Replaces the binomial sampler.
pub fn set_binomial_sampler(sampler: BinomialSampler) {
    write().binomial = sampler;
}

/// Returns the current categorical sampler.
pub fn categorical_sampler() -> CategoricalSampler {
    read().categorical
}

/// Replaces the categorical sampler.
pub fn set_categorical_sampler(sampler: CategoricalSampler) {
    write().categorical = sampler;
}

/// Returns the current continuous uniform sampler.
pub fn continuous_uniform_sampler() -> ContinuousUniformSampler {
    read().continuous_uniform
}

/// Replaces the continuous uniform sampler.
pub fn set_continuous_uniform_sampler(sampler: ContinuousUniformSampler) {
    write().continuous_uniform = sampler;
}

/// Returns the current discrete uniform sampler.
pub fn discrete_uniform_sampler() -> DiscreteUniformSampler {
    read().discrete_uniform
}

/// Replaces the discrete uniform sampler.
pub fn set_discrete_uniform_sampler(sampler: DiscreteUniformSampler) {
    write().discrete_uniform = sampler;
}

/// Returns the current geometric sampler.
pub fn geometric_sampler() -> GeometricSampler {
    read().geometric
}

/// Replaces the geometric sampler.
pub fn set_geometric_sampler(sampler: GeometricSampler) {
    write().geometric = sampler;
}

/// Returns the current logistic sampler.
pub fn logistic_sampler() -> LogisticSampler {
    read().logistic
}

/// Replaces the logistic sampler.
pub fn set_logistic_sampler(sampler: LogisticSampler) {
    write().logistic = sampler;
}

/// Returns the current normal sampler.
pub fn normal_sampler() -> NormalSampler {
    read().normal
}

/// Replaces the normal sampler.
pub fn set_normal_sampler(sampler: NormalSampler) {
    write().normal = sampler;
}

/// Returns the current Poisson sampler.
pub fn poisson_sampler() -> PoissonSampler {
    read().poisson
}

/// Replaces the Poisson sampler.
pub fn set_poisson_sampler(sampler: PoissonSampler) {
    write().poisson = sampler;
}

/// Returns the current Rayleigh sampler.
pub fn rayleigh_sampler() -> RayleighSampler {
    read().rayleigh
}

/// Replaces the Rayleigh sampler.
pub fn set_rayleigh_sampler(sampler: RayleighSampler) {
    write().rayleigh = sampler;
}

/// Restores the canonical sampler of one kind.
pub fn reset(kind: DistributionKind) {
    let mut registry = write();
    match kind {
        DistributionKind::Bernoulli => registry.bernoulli = CANONICAL.bernoulli,
        DistributionKind::Binomial => registry.binomial = CANONICAL.binomial,
        DistributionKind::Categorical => registry.categorical = CANONICAL.categorical,
        DistributionKind::ContinuousUniform => {
            registry.continuous_uniform = CANONICAL.continuous_uniform
        }
        DistributionKind::DiscreteUniform => {
            registry.discrete_uniform = CANONICAL.discrete_uniform
        }
        DistributionKind::Geometric => registry.geometric = CANONICAL.geometric,
        DistributionKind::Logistic => registry.logistic = CANONICAL.logistic,
        DistributionKind::Normal => registry.normal = CANONICAL.normal,
        DistributionKind::Poisson => registry.poisson = CANONICAL.poisson,
        DistributionKind::Rayleigh => registry.rayleigh = CANONICAL.rayleigh,
    }
}

/// Restores the canonical samplers of every kind.
pub fn reset_all() {
    for kind in enum_iterator::all::<DistributionKind>() {
        reset(kind);
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use crate::distributions::{Distribution, Normal};
    use crate::Random;
    use std::sync::{Mutex, MutexGuard};

    static TEST_LOCK: Mutex<()> = Mutex::new(());

    /// Serializes tests that read or replace the process-wide slots.
    pub(crate) fn lock_registry() -> MutexGuard<'static, ()> {
        TEST_LOCK.lock().unwrap_or_else(PoisonError::into_inner)
    }

    fn degenerate_normal(_: &mut dyn Generator, mu: f64, _: f64) -> f64 {
        mu
    }

    #[test]
    fn defaults_are_the_canonical_samplers() {
        let _guard = lock_registry();
        assert!(bernoulli_sampler() == bernoulli::sample as BernoulliSampler);
        assert!(binomial_sampler() == binomial::sample as BinomialSampler);
        assert!(categorical_sampler() == categorical::sample as CategoricalSampler);
        assert!(
            continuous_uniform_sampler() == continuous_uniform::sample as ContinuousUniformSampler
        );
        assert!(discrete_uniform_sampler() == discrete_uniform::sample as DiscreteUniformSampler);
        assert!(geometric_sampler() == geometric::sample as GeometricSampler);
        assert!(logistic_sampler() == logistic::sample as LogisticSampler);
        assert!(normal_sampler() == normal::sample_polar as NormalSampler);
        assert!(poisson_sampler() == poisson::sample as PoissonSampler);
        assert!(rayleigh_sampler() == rayleigh::sample as RayleighSampler);
    }

    #[test]
    fn override_reaches_existing_instances_and_facade() {
        let _guard = lock_registry();
        let mut existing = Normal::with_seed(1, 5.0, 1.0).unwrap();
        let mut random = Random::with_seed(1);
        set_normal_sampler(degenerate_normal);
        assert_eq!(existing.next_double(), 5.0);
        assert_eq!(random.normal(7.0, 2.0).unwrap(), 7.0);
        reset(DistributionKind::Normal);
        assert!(normal_sampler() == normal::sample_polar as NormalSampler);
        assert_ne!(existing.next_double(), 5.0);
    }

    #[test]
    fn reset_all_restores_every_kind() {
        let _guard = lock_registry();
        set_normal_sampler(degenerate_normal);
        reset_all();
        assert!(normal_sampler() == normal::sample_polar as NormalSampler);
        assert!(bernoulli_sampler() == bernoulli::sample as BernoulliSampler);
        assert!(rayleigh_sampler() == rayleigh::sample as RayleighSampler);
    }

    #[test]
    fn kinds_are_enumerable() {
        assert_eq!(enum_iterator::all::<DistributionKind>().count(), 10);
    }
}
