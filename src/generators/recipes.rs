//! Numerical Recipes combined generators.
//!
//! This implements the `Ran`, `Ranq1` and `Ranq2` generators from *Press,
//! W.H., Teukolsky, S.A., Vetterling, W.T. and Flannery, B.P. (2007).
//! Numerical Recipes: The Art of Scientific Computing, 3rd ed., §7.1*.
//! All three are 64-bit generators built from the same building blocks: a
//! linear congruential step, a 64-bit xorshift step and a
//! multiply-with-carry step.
//!
//! [`Ran`] combines all three and is the recommended full-quality variant.
//! [`Ranq1`] is a single xorshift state with a multiplicative output hash,
//! the fastest of the family, adequate up to about 10^12 draws. [`Ranq2`]
//! combines a xorshift and a multiply-with-carry state and is a good
//! middle ground. The quick variants trade statistical headroom for speed.
//!
//! The 32-bit primitive truncates the native 64-bit word, and the double
//! primitive uses its top 53 bits so that the [0, 1) interval is strict.

use crate::{Generator, Result};

// Shared recurrence constants from Numerical Recipes §7.1.
const LCG_MUL: u64 = 2_862_933_555_777_941_757;
const LCG_ADD: u64 = 7_046_029_254_386_353_087;
const MWC_MUL: u64 = 4_294_957_665;
const HASH_MUL: u64 = 2_685_821_657_736_338_717;
const SEED_XOR: u64 = 4_101_842_887_655_102_017;

// 2^-53; converts the top 53 bits of a word to a double in [0, 1).
const DOUBLE_SCALE: f64 = 1.0 / 9_007_199_254_740_992.0;

fn f64_from_u64(word: u64) -> f64 {
    (word >> 11) as f64 * DOUBLE_SCALE
}

/// Full-quality Numerical Recipes generator (`Ran`).
///
/// Combines a 64-bit linear congruential generator, a 64-bit xorshift and
/// a multiply-with-carry generator. Its period is about 3.138e57.
#[derive(Debug, Clone, Eq, PartialEq, Hash)]
pub struct Ran {
    u: u64,
    v: u64,
    w: u64,
    seed: u64,
}

impl Ran {
    /// Creates a new generator from a seed.
    pub fn new(seed: u64) -> Ran {
        let mut generator = Ran {
            u: 0,
            v: SEED_XOR,
            w: 1,
            seed,
        };
        generator.u = seed ^ generator.v;
        generator.next_u64();
        generator.v = generator.u;
        generator.next_u64();
        generator.w = generator.v;
        generator.next_u64();
        generator
    }

    fn next_u64(&mut self) -> u64 {
        self.u = self.u.wrapping_mul(LCG_MUL).wrapping_add(LCG_ADD);
        self.v ^= self.v >> 17;
        self.v ^= self.v << 31;
        self.v ^= self.v >> 8;
        self.w = MWC_MUL
            .wrapping_mul(self.w & 0xffff_ffff)
            .wrapping_add(self.w >> 32);
        let mut x = self.u ^ (self.u << 21);
        x ^= x >> 35;
        x ^= x << 4;
        x.wrapping_add(self.v) ^ self.w
    }
}

impl Default for Ran {
    /// Creates a generator with an entropy-derived seed.
    fn default() -> Ran {
        Ran::new(rand::random())
    }
}

impl Generator for Ran {
    fn seed(&self) -> u64 {
        self.seed
    }

    fn reset(&mut self, seed: u64) -> Result<()> {
        *self = Ran::new(seed);
        Ok(())
    }

    fn next_u32(&mut self) -> u32 {
        self.next_u64() as u32
    }

    fn next_f64(&mut self) -> f64 {
        f64_from_u64(self.next_u64())
    }
}

/// Fastest Numerical Recipes quick generator (`Ranq1`).
///
/// A single 64-bit xorshift state with a multiplicative output hash.
/// Period 1.8e19; Numerical Recipes recommends it for up to about 10^12
/// draws.
#[derive(Debug, Clone, Eq, PartialEq, Hash)]
pub struct Ranq1 {
    v: u64,
    seed: u64,
}

impl Ranq1 {
    /// Creates a new generator from a seed.
    pub fn new(seed: u64) -> Ranq1 {
        let mut generator = Ranq1 {
            v: SEED_XOR ^ seed,
            seed,
        };
        if generator.v == 0 {
            // seed == SEED_XOR would reach the xorshift fixed point.
            generator.v = SEED_XOR;
        }
        generator.v = generator.next_u64();
        generator
    }

    fn next_u64(&mut self) -> u64 {
        self.v ^= self.v >> 21;
        self.v ^= self.v << 35;
        self.v ^= self.v >> 4;
        self.v.wrapping_mul(HASH_MUL)
    }
}

impl Default for Ranq1 {
    /// Creates a generator with an entropy-derived seed.
    fn default() -> Ranq1 {
        Ranq1::new(rand::random())
    }
}

impl Generator for Ranq1 {
    fn seed(&self) -> u64 {
        self.seed
    }

    fn reset(&mut self, seed: u64) -> Result<()> {
        *self = Ranq1::new(seed);
        Ok(())
    }

    fn next_u32(&mut self) -> u32 {
        self.next_u64() as u32
    }

    fn next_f64(&mut self) -> f64 {
        f64_from_u64(self.next_u64())
    }
}

/// Middle-ground Numerical Recipes quick generator (`Ranq2`).
///
/// Combines a 64-bit xorshift state with a multiply-with-carry state.
/// Period 8.5e37.
#[derive(Debug, Clone, Eq, PartialEq, Hash)]
pub struct Ranq2 {
    v: u64,
    w: u64,
    seed: u64,
}

impl Ranq2 {
    /// Creates a new generator from a seed.
    pub fn new(seed: u64) -> Ranq2 {
        let mut generator = Ranq2 {
            v: SEED_XOR ^ seed,
            w: 1,
            seed,
        };
        if generator.v == 0 {
            generator.v = SEED_XOR;
        }
        generator.w = generator.next_u64();
        generator.v = generator.next_u64();
        generator
    }

    fn next_u64(&mut self) -> u64 {
        self.v ^= self.v >> 17;
        self.v ^= self.v << 31;
        self.v ^= self.v >> 8;
        self.w = MWC_MUL
            .wrapping_mul(self.w & 0xffff_ffff)
            .wrapping_add(self.w >> 32);
        self.v ^ self.w
    }
}

impl Default for Ranq2 {
    /// Creates a generator with an entropy-derived seed.
    fn default() -> Ranq2 {
        Ranq2::new(rand::random())
    }
}

impl Generator for Ranq2 {
    fn seed(&self) -> u64 {
        self.seed
    }

    fn reset(&mut self, seed: u64) -> Result<()> {
        *self = Ranq2::new(seed);
        Ok(())
    }

    fn next_u32(&mut self) -> u32 {
        self.next_u64() as u32
    }

    fn next_f64(&mut self) -> f64 {
        f64_from_u64(self.next_u64())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::generators::tests::check_reset_contract;

    #[test]
    fn reset_contract() {
        check_reset_contract(Ran::new(17), 17);
        check_reset_contract(Ranq1::new(17), 17);
        check_reset_contract(Ranq2::new(17), 17);
        check_reset_contract(Ranq1::new(SEED_XOR), SEED_XOR);
    }

    #[test]
    fn doubles_in_unit_interval() {
        let mut ran = Ran::new(9);
        let mut ranq1 = Ranq1::new(9);
        let mut ranq2 = Ranq2::new(9);
        for _ in 0..10_000 {
            assert!((0.0..1.0).contains(&ran.next_f64()));
            assert!((0.0..1.0).contains(&ranq1.next_f64()));
            assert!((0.0..1.0).contains(&ranq2.next_f64()));
        }
    }

    #[test]
    fn variants_are_distinct_recurrences() {
        let mut ran = Ran::new(21);
        let mut ranq1 = Ranq1::new(21);
        let mut ranq2 = Ranq2::new(21);
        let a: Vec<u32> = (0..8).map(|_| ran.next_u32()).collect();
        let b: Vec<u32> = (0..8).map(|_| ranq1.next_u32()).collect();
        let c: Vec<u32> = (0..8).map(|_| ranq2.next_u32()).collect();
        assert_ne!(a, b);
        assert_ne!(a, c);
        assert_ne!(b, c);
    }

    #[test]
    fn f64_mean_near_half() {
        let mut rng = Ran::new(33);
        let n = 100_000;
        let sum: f64 = (0..n).map(|_| rng.next_f64()).sum();
        assert!((sum / n as f64 - 0.5).abs() < 0.01);
    }
}
