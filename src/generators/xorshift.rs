//! 128-bit xorshift generator.
//!
//! This implements the xor128 generator from *Marsaglia, G. (2003).
//! "Xorshift RNGs". Journal of Statistical Software, 8(14)*. The generator
//! keeps four 32-bit words of state and combines two xorshifted words per
//! output. It has full period 2^128 - 1 over the non-zero states, passes
//! the usual statistical test batteries, and is one of the cheapest
//! generators of this quality, which makes it the default generator of
//! this crate.

use super::splitmix64;
use crate::{Generator, Result};

// Marsaglia's recommended initial state; used as a fallback so that the
// all-zero fixed point is never entered.
const DEFAULT_W: u32 = 88675123;

/// Marsaglia xor128 generator.
///
/// # Examples
/// ```
/// use rng_toolbox::generators::Xorshift128;
/// use rng_toolbox::Generator;
///
/// let mut a = Xorshift128::new(42);
/// let mut b = Xorshift128::new(42);
/// assert_eq!(a.next_u32(), b.next_u32());
/// ```
#[derive(Debug, Clone, Eq, PartialEq, Hash)]
pub struct Xorshift128 {
    x: u32,
    y: u32,
    z: u32,
    w: u32,
    seed: u64,
}

impl Xorshift128 {
    /// Creates a new generator from a seed.
    ///
    /// The four state words are expanded from the seed with splitmix64.
    pub fn new(seed: u64) -> Xorshift128 {
        let mut state = seed;
        let a = splitmix64(&mut state);
        let b = splitmix64(&mut state);
        let mut generator = Xorshift128 {
            x: a as u32,
            y: (a >> 32) as u32,
            z: b as u32,
            w: (b >> 32) as u32,
            seed,
        };
        if generator.x | generator.y | generator.z | generator.w == 0 {
            generator.w = DEFAULT_W;
        }
        generator
    }

    /// Creates a generator directly from the four raw state words.
    ///
    /// The words are, in order, Marsaglia's `x`, `y`, `z` and `w`. This is
    /// mainly useful to reproduce published test vectors. The reported
    /// [`seed`](Generator::seed) of such a generator is zero.
    ///
    /// # Errors
    /// Fails with [`crate::Error::OutOfRange`] on the all-zero state, which
    /// is a fixed point of the recurrence.
    pub fn from_state(state: [u32; 4]) -> Result<Xorshift128> {
        if state == [0; 4] {
            return Err(crate::Error::OutOfRange("state"));
        }
        let [x, y, z, w] = state;
        Ok(Xorshift128 { x, y, z, w, seed: 0 })
    }
}

impl Default for Xorshift128 {
    /// Creates a generator with an entropy-derived seed.
    fn default() -> Xorshift128 {
        Xorshift128::new(rand::random())
    }
}

impl Generator for Xorshift128 {
    fn seed(&self) -> u64 {
        self.seed
    }

    fn reset(&mut self, seed: u64) -> Result<()> {
        *self = Xorshift128::new(seed);
        Ok(())
    }

    fn next_u32(&mut self) -> u32 {
        let t = self.x ^ (self.x << 11);
        self.x = self.y;
        self.y = self.z;
        self.z = self.w;
        self.w = (self.w ^ (self.w >> 19)) ^ (t ^ (t >> 8));
        self.w
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::generators::tests::check_reset_contract;

    #[test]
    fn reset_contract() {
        check_reset_contract(Xorshift128::new(42), 42);
        check_reset_contract(Xorshift128::new(0), 0);
        check_reset_contract(Xorshift128::new(u64::MAX), u64::MAX);
    }

    #[test]
    fn seeds_give_distinct_streams() {
        let mut a = Xorshift128::new(1);
        let mut b = Xorshift128::new(2);
        let stream_a: Vec<u32> = (0..16).map(|_| a.next_u32()).collect();
        let stream_b: Vec<u32> = (0..16).map(|_| b.next_u32()).collect();
        assert_ne!(stream_a, stream_b);
    }

    #[test]
    fn from_state_rejects_zero() {
        assert!(Xorshift128::from_state([0; 4]).is_err());
        assert!(Xorshift128::from_state([0, 0, 0, 1]).is_ok());
    }

    #[test]
    fn state_never_all_zero() {
        let mut rng = Xorshift128::new(3);
        for _ in 0..1000 {
            rng.next_u32();
            assert_ne!(rng.x | rng.y | rng.z | rng.w, 0);
        }
    }

    #[test]
    fn f64_mean_near_half() {
        let mut rng = Xorshift128::new(4);
        let n = 100_000;
        let sum: f64 = (0..n).map(|_| rng.next_f64()).sum();
        assert!((sum / n as f64 - 0.5).abs() < 0.01);
    }
}
