//! Mersenne Twister generator.
//!
//! This implements MT19937 as described in *Matsumoto, M. and Nishimura,
//! T. (1998). "Mersenne Twister: a 623-dimensionally equidistributed
//! uniform pseudo-random number generator". ACM Transactions on Modeling
//! and Computer Simulation, 8(1)*, with the constants of the reference
//! `mt19937ar.c` implementation. The generator keeps a 624-word state
//! vector, regenerates it in blocks, and tempers every output word.

use crate::{Generator, Result};
use std::fmt;

const N: usize = 624;
const M: usize = 397;
const MATRIX_A: u32 = 0x9908_b0df;
const UPPER_MASK: u32 = 0x8000_0000;
const LOWER_MASK: u32 = 0x7fff_ffff;

/// MT19937 Mersenne Twister generator.
///
/// Seeding follows the reference `init_genrand` routine, which takes a
/// 32-bit value; the low 32 bits of the seed are used. With the reference
/// seed 5489 this generator reproduces the published output sequence.
///
/// # Examples
/// ```
/// use rng_toolbox::generators::Mt19937;
/// use rng_toolbox::Generator;
///
/// let mut rng = Mt19937::new(5489);
/// assert_eq!(rng.next_u32(), 3499211612);
/// ```
#[derive(Clone)]
pub struct Mt19937 {
    state: [u32; N],
    index: usize,
    seed: u64,
}

impl Mt19937 {
    /// Creates a new generator from a seed.
    pub fn new(seed: u64) -> Mt19937 {
        let mut state = [0u32; N];
        state[0] = seed as u32;
        for i in 1..N {
            state[i] = 1_812_433_253u32
                .wrapping_mul(state[i - 1] ^ (state[i - 1] >> 30))
                .wrapping_add(i as u32);
        }
        Mt19937 {
            state,
            // Force a twist on the first draw.
            index: N,
            seed,
        }
    }

    fn twist(&mut self) {
        for i in 0..N {
            let y = (self.state[i] & UPPER_MASK) | (self.state[(i + 1) % N] & LOWER_MASK);
            let mut next = self.state[(i + M) % N] ^ (y >> 1);
            if y & 1 != 0 {
                next ^= MATRIX_A;
            }
            self.state[i] = next;
        }
        self.index = 0;
    }
}

impl Default for Mt19937 {
    /// Creates a generator with an entropy-derived seed.
    fn default() -> Mt19937 {
        Mt19937::new(rand::random())
    }
}

impl Generator for Mt19937 {
    fn seed(&self) -> u64 {
        self.seed
    }

    fn reset(&mut self, seed: u64) -> Result<()> {
        *self = Mt19937::new(seed);
        Ok(())
    }

    fn next_u32(&mut self) -> u32 {
        if self.index >= N {
            self.twist();
        }
        let mut y = self.state[self.index];
        self.index += 1;
        y ^= y >> 11;
        y ^= (y << 7) & 0x9d2c_5680;
        y ^= (y << 15) & 0xefc6_0000;
        y ^ (y >> 18)
    }
}

impl fmt::Debug for Mt19937 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Mt19937")
            .field("seed", &self.seed)
            .field("index", &self.index)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::generators::tests::check_reset_contract;

    #[test]
    fn reference_outputs_seed_5489() {
        // First outputs of the reference mt19937ar.c with init_genrand(5489).
        let mut rng = Mt19937::new(5489);
        assert_eq!(rng.next_u32(), 3499211612);
        assert_eq!(rng.next_u32(), 581869302);
    }

    #[test]
    fn reset_contract() {
        check_reset_contract(Mt19937::new(5489), 5489);
        check_reset_contract(Mt19937::new(0), 0);
    }

    #[test]
    fn twist_boundary_is_seamless() {
        // Drawing across the 624-word block boundary must match an
        // uninterrupted same-seed stream.
        let mut a = Mt19937::new(7);
        let mut b = Mt19937::new(7);
        let stream: Vec<u32> = (0..2 * N).map(|_| a.next_u32()).collect();
        for &word in &stream {
            assert_eq!(word, b.next_u32());
        }
    }

    #[test]
    fn f64_in_unit_interval() {
        let mut rng = Mt19937::new(1);
        for _ in 0..10_000 {
            let v = rng.next_f64();
            assert!((0.0..1.0).contains(&v));
        }
    }
}
