//! Wrapper over the standard generator of the [rand] crate.
//!
//! This module adapts [`rand::rngs::StdRng`] to the
//! [`Generator`](crate::Generator) contract so that callers who want the
//! platform ecosystem default can use it through the same interface as the
//! algorithms of this crate.

use crate::{Generator, Result};
use rand::rngs::StdRng;
use rand_core::{RngCore, SeedableRng};

/// Thin wrapper over [`rand::rngs::StdRng`].
///
/// This generator has the weakest reproducibility guarantees of the crate:
/// `StdRng` is documented by the [rand] crate as *not* portable across
/// `rand` versions, so a seeded stream is only reproducible when the
/// version of `rand` is pinned. Within one build it honours the full
/// seeding and reset contract. Prefer one of the named algorithms when
/// streams must be stable across toolchains.
///
/// # Examples
/// ```
/// use rng_toolbox::generators::StandardGenerator;
/// use rng_toolbox::Generator;
///
/// let mut a = StandardGenerator::new(1);
/// let mut b = StandardGenerator::new(1);
/// assert_eq!(a.next_u32(), b.next_u32());
/// ```
#[derive(Debug, Clone)]
pub struct StandardGenerator {
    rng: StdRng,
    seed: u64,
}

impl StandardGenerator {
    /// Creates a new generator from a seed.
    pub fn new(seed: u64) -> StandardGenerator {
        StandardGenerator {
            rng: StdRng::seed_from_u64(seed),
            seed,
        }
    }
}

impl Default for StandardGenerator {
    /// Creates a generator with an entropy-derived seed.
    fn default() -> StandardGenerator {
        StandardGenerator::new(rand::random())
    }
}

impl Generator for StandardGenerator {
    fn seed(&self) -> u64 {
        self.seed
    }

    fn reset(&mut self, seed: u64) -> Result<()> {
        *self = StandardGenerator::new(seed);
        Ok(())
    }

    fn next_u32(&mut self) -> u32 {
        self.rng.next_u32()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::generators::tests::check_reset_contract;

    #[test]
    fn reset_contract() {
        check_reset_contract(StandardGenerator::new(11), 11);
    }

    #[test]
    fn f64_in_unit_interval() {
        let mut rng = StandardGenerator::new(2);
        for _ in 0..10_000 {
            let v = rng.next_f64();
            assert!((0.0..1.0).contains(&v));
        }
    }
}
