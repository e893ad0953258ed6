//! Concrete uniform generator algorithms.
//!
//! This module contains the bit-stream algorithms implementing the
//! [`Generator`](crate::Generator) trait. Each algorithm follows its
//! canonical published recurrence:
//!
//! - [`Xorshift128`]: Marsaglia's 128-bit xorshift register.
//! - [`Mt19937`]: the Mersenne Twister.
//! - [`Ran`], [`Ranq1`], [`Ranq2`]: the *Numerical Recipes* combined
//!   generators; `Ran` is the full-quality variant, `Ranq1` and `Ranq2`
//!   the cheaper quick variants.
//! - [`LaggedFibonacci`]: an additive lagged Fibonacci generator.
//! - [`StandardGenerator`]: a thin wrapper over the [rand] crate's
//!   standard generator.
//!
//! Constructing a generator with an explicit seed is fully deterministic;
//! the `Default` implementations pick an entropy-derived seed. All
//! algorithms here support [`reset`](crate::Generator::reset).

pub mod fibonacci;
pub mod mersenne;
pub mod recipes;
pub mod standard;
pub mod xorshift;

pub use fibonacci::LaggedFibonacci;
pub use mersenne::Mt19937;
pub use recipes::{Ran, Ranq1, Ranq2};
pub use standard::StandardGenerator;
pub use xorshift::Xorshift128;

/// Advances a splitmix64 state and returns the next output.
///
/// Used to expand a 64-bit seed into the wider state vectors of the
/// concrete algorithms, following the seeding practice of the xoshiro
/// family. Distinct seeds give well-decorrelated state words even when the
/// seeds themselves differ in few bits.
pub(crate) fn splitmix64(state: &mut u64) -> u64 {
    *state = state.wrapping_add(0x9e3779b97f4a7c15);
    let mut z = *state;
    z = (z ^ (z >> 30)).wrapping_mul(0xbf58476d1ce4e5b9);
    z = (z ^ (z >> 27)).wrapping_mul(0x94d049bb133111eb);
    z ^ (z >> 31)
}

#[cfg(test)]
mod tests {
    use crate::Generator;

    /// Checks the fresh-construction/reset contract for one algorithm.
    pub(crate) fn check_reset_contract<G: Generator>(mut generator: G, seed: u64) {
        assert!(generator.can_reset());
        let fresh: Vec<u32> = (0..50).map(|_| generator.next_u32()).collect();
        // Disturb the state before resetting.
        for _ in 0..123 {
            generator.next_u32();
        }
        generator.reset(seed).unwrap();
        assert_eq!(generator.seed(), seed);
        let replay: Vec<u32> = (0..50).map(|_| generator.next_u32()).collect();
        assert_eq!(fresh, replay);
    }
}
