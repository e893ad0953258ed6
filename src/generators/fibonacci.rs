//! Additive lagged Fibonacci generator.
//!
//! This implements the additive lagged Fibonacci recurrence
//!
//! ```text
//! x[n] = (x[n - 24] + x[n - 55]) mod 2^32
//! ```
//!
//! with the classic lag pair (24, 55) of the Mitchell–Moore generator
//! described in *Knuth, D.E. (1997). The Art of Computer Programming,
//! vol. 2, 3rd ed., §3.2.2*. The state is a ring of the 55 most recent
//! outputs; as long as at least one state word is odd, the low-order bits
//! have period 2^55 - 1 and the full words have period (2^55 - 1) * 2^31.
//!
//! The state ring is filled from the seed with splitmix64 and a fixed
//! number of initial outputs is discarded to decorrelate the seeded state
//! from the seeding recurrence.

use super::splitmix64;
use crate::{Generator, Result};
use std::fmt;

const LONG_LAG: usize = 55;
const SHORT_LAG: usize = 24;
const WARMUP: usize = 220;

/// Additive lagged Fibonacci generator with lags (24, 55).
///
/// # Examples
/// ```
/// use rng_toolbox::generators::LaggedFibonacci;
/// use rng_toolbox::Generator;
///
/// let mut rng = LaggedFibonacci::new(7);
/// let first = rng.next_u32();
/// rng.reset(7).unwrap();
/// assert_eq!(rng.next_u32(), first);
/// ```
#[derive(Clone, Eq, PartialEq, Hash)]
pub struct LaggedFibonacci {
    ring: [u32; LONG_LAG],
    // Positions of x[n - 24] and x[n - 55] in the ring.
    short_index: usize,
    long_index: usize,
    seed: u64,
}

impl LaggedFibonacci {
    /// Creates a new generator from a seed.
    pub fn new(seed: u64) -> LaggedFibonacci {
        let mut state = seed;
        let mut ring = [0u32; LONG_LAG];
        for word in ring.iter_mut() {
            *word = splitmix64(&mut state) as u32;
        }
        if ring.iter().all(|w| w & 1 == 0) {
            // An all-even state would collapse the low bit to a constant.
            ring[0] |= 1;
        }
        let mut generator = LaggedFibonacci {
            ring,
            short_index: SHORT_LAG - 1,
            long_index: LONG_LAG - 1,
            seed,
        };
        for _ in 0..WARMUP {
            generator.next_u32();
        }
        generator
    }
}

impl Default for LaggedFibonacci {
    /// Creates a generator with an entropy-derived seed.
    fn default() -> LaggedFibonacci {
        LaggedFibonacci::new(rand::random())
    }
}

impl Generator for LaggedFibonacci {
    fn seed(&self) -> u64 {
        self.seed
    }

    fn reset(&mut self, seed: u64) -> Result<()> {
        *self = LaggedFibonacci::new(seed);
        Ok(())
    }

    fn next_u32(&mut self) -> u32 {
        let x = self.ring[self.short_index].wrapping_add(self.ring[self.long_index]);
        self.ring[self.long_index] = x;
        self.short_index = self.short_index.checked_sub(1).unwrap_or(LONG_LAG - 1);
        self.long_index = self.long_index.checked_sub(1).unwrap_or(LONG_LAG - 1);
        x
    }
}

impl fmt::Debug for LaggedFibonacci {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LaggedFibonacci")
            .field("seed", &self.seed)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::generators::tests::check_reset_contract;

    #[test]
    fn reset_contract() {
        check_reset_contract(LaggedFibonacci::new(42), 42);
        check_reset_contract(LaggedFibonacci::new(0), 0);
    }

    #[test]
    fn lag_distance_is_preserved() {
        let mut rng = LaggedFibonacci::new(5);
        for _ in 0..LONG_LAG * 3 {
            rng.next_u32();
            let distance =
                (rng.long_index + LONG_LAG - rng.short_index) % LONG_LAG;
            assert_eq!(distance, LONG_LAG - SHORT_LAG);
        }
    }

    #[test]
    fn recurrence_matches_history() {
        // Collect outputs and check x[n] = x[n-24] + x[n-55] directly.
        let mut rng = LaggedFibonacci::new(13);
        let outputs: Vec<u32> = (0..300).map(|_| rng.next_u32()).collect();
        for n in LONG_LAG..outputs.len() {
            assert_eq!(
                outputs[n],
                outputs[n - SHORT_LAG].wrapping_add(outputs[n - LONG_LAG])
            );
        }
    }

    #[test]
    fn f64_mean_near_half() {
        let mut rng = LaggedFibonacci::new(6);
        let n = 100_000;
        let sum: f64 = (0..n).map(|_| rng.next_f64()).sum();
        assert!((sum / n as f64 - 0.5).abs() < 0.01);
    }
}
