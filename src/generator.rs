//! Uniform generator interface and derived operations.
//!
//! This module contains the [`Generator`] trait, which is the minimal
//! capability interface that every concrete algorithm in [`generators`](crate::generators)
//! implements, and the [`GeneratorExt`] extension trait, which derives all
//! higher-level operations (ranged integers and doubles, booleans, byte
//! filling, lazy sequences, uniform choice) from the three primitives of
//! `Generator`. A new algorithm only needs to implement the primitives to
//! obtain the whole derived surface.
//!
//! Ranged integer draws use a rejection zone rather than a bare modulo
//! reduction, so every value of the requested range is equally likely.

use crate::sequences::{Booleans, ByteBuffers, Choices, Doubles, Integers, UnsignedIntegers};
use crate::{Error, Result};

/// Deterministic source of uniform pseudorandom numbers.
///
/// A generator is identified by its algorithm and its seed: the output
/// stream is a pure function of both. [`reset`](Generator::reset) with a
/// given seed must restore the exact internal state that a fresh
/// construction with that seed would have, so that the stream repeats bit
/// for bit. Algorithms that cannot honour this (such as wrappers over
/// opaque platform sources) report it through
/// [`can_reset`](Generator::can_reset).
///
/// Generators are mutable values and are not synchronized; sharing one
/// across threads requires external locking.
///
/// Only the three primitive draws are required. [`next_f64`](Generator::next_f64)
/// and [`next_i32`](Generator::next_i32) have default derivations from
/// [`next_u32`](Generator::next_u32) that an algorithm with a wider native
/// word may override, as long as the half-open interval contracts hold.
pub trait Generator {
    /// Returns the seed that started the current output stream.
    fn seed(&self) -> u64;

    /// Returns whether the generator supports [`reset`](Generator::reset).
    fn can_reset(&self) -> bool {
        true
    }

    /// Restores the state of a fresh construction with seed `seed`.
    ///
    /// # Errors
    /// Fails with [`Error::CannotReset`] when the algorithm cannot restore
    /// its state (see [`can_reset`](Generator::can_reset)).
    fn reset(&mut self, seed: u64) -> Result<()>;

    /// Returns a uniform `u32` over the whole type range.
    fn next_u32(&mut self) -> u32;

    /// Returns a uniform `f64` in the half-open interval [0, 1).
    fn next_f64(&mut self) -> f64 {
        // 2^-32; the largest result is (2^32 - 1) / 2^32 < 1.
        self.next_u32() as f64 * (1.0 / 4294967296.0)
    }

    /// Returns a uniform `i32` in the closed interval [0, `i32::MAX`].
    fn next_i32(&mut self) -> i32 {
        (self.next_u32() >> 1) as i32
    }
}

impl<R: Generator + ?Sized> Generator for &mut R {
    fn seed(&self) -> u64 {
        (**self).seed()
    }

    fn can_reset(&self) -> bool {
        (**self).can_reset()
    }

    fn reset(&mut self, seed: u64) -> Result<()> {
        (**self).reset(seed)
    }

    fn next_u32(&mut self) -> u32 {
        (**self).next_u32()
    }

    fn next_f64(&mut self) -> f64 {
        (**self).next_f64()
    }

    fn next_i32(&mut self) -> i32 {
        (**self).next_i32()
    }
}

/// Returns a uniform value in [0, `range`) by rejection.
///
/// Draws are rejected when they fall outside the largest prefix of the
/// `u32` range whose size is a multiple of `range`, so the reduction has no
/// modulo bias. `range` must be greater than zero.
pub(crate) fn uniform_u32<G: Generator + ?Sized>(generator: &mut G, range: u32) -> u32 {
    debug_assert!(range > 0);
    // zone + 1 is the largest multiple of range that fits in 2^32.
    let zone = u32::MAX - (u32::MAX - range + 1) % range;
    loop {
        let v = generator.next_u32();
        if v <= zone {
            return v % range;
        }
    }
}

/// Operations derived from the [`Generator`] primitives.
///
/// This trait has a blanket implementation for every [`Generator`], so all
/// concrete algorithms obtain these operations for free. All ranged draws
/// are over half-open intervals, and for each scalar operation there is a
/// lazy infinite iterator counterpart in [`sequences`](crate::sequences)
/// that produces exactly the values the scalar calls would.
pub trait GeneratorExt: Generator {
    /// Returns a uniform boolean derived from one bit of one `u32` draw.
    fn next_bool(&mut self) -> bool {
        self.next_u32() >> 31 != 0
    }

    /// Returns a uniform integer in [0, `i32::MAX`).
    ///
    /// This is the half-open counterpart of
    /// [`next_i32`](Generator::next_i32); draws equal to `i32::MAX` are
    /// rejected and retried.
    fn next_int(&mut self) -> i32 {
        loop {
            let v = self.next_i32();
            if v != i32::MAX {
                return v;
            }
        }
    }

    /// Returns a uniform integer in [0, `max`).
    ///
    /// A `max` of zero returns zero.
    ///
    /// # Errors
    /// Fails with [`Error::OutOfRange`] when `max` is negative.
    fn next_int_max(&mut self, max: i32) -> Result<i32> {
        if max < 0 {
            return Err(Error::OutOfRange("max"));
        }
        Ok(if max == 0 {
            0
        } else {
            uniform_u32(self, max as u32) as i32
        })
    }

    /// Returns a uniform integer in [`min`, `max`).
    ///
    /// An empty range (`min == max`) returns `min`.
    ///
    /// # Errors
    /// Fails with [`Error::OutOfRange`] when `min > max`.
    fn next_int_range(&mut self, min: i32, max: i32) -> Result<i32> {
        if min > max {
            return Err(Error::OutOfRange("min"));
        }
        // The span of [min, max) fits in a u32 even for the extreme i32
        // bounds, so the arithmetic is done in i64.
        let range = (max as i64 - min as i64) as u32;
        Ok(if range == 0 {
            min
        } else {
            (min as i64 + uniform_u32(self, range) as i64) as i32
        })
    }

    /// Returns a uniform double in [0, `max`).
    ///
    /// # Errors
    /// Fails with [`Error::OutOfRange`] when `max` is negative and with
    /// [`Error::NonFinite`] when `max` is infinite or NaN.
    fn next_f64_max(&mut self, max: f64) -> Result<f64> {
        if !max.is_finite() {
            return Err(Error::NonFinite("max"));
        }
        if max < 0.0 {
            return Err(Error::OutOfRange("max"));
        }
        Ok(self.next_f64() * max)
    }

    /// Returns a uniform double in [`min`, `max`).
    ///
    /// # Errors
    /// Fails with [`Error::OutOfRange`] when `min > max` and with
    /// [`Error::NonFinite`] when a bound, or the span `max - min`, is
    /// infinite or NaN.
    fn next_f64_range(&mut self, min: f64, max: f64) -> Result<f64> {
        let span = check_f64_range(min, max)?;
        Ok(min + self.next_f64() * span)
    }

    /// Returns a uniform unsigned integer in [0, `u32::MAX`).
    ///
    /// Draws equal to `u32::MAX` are rejected and retried.
    fn next_uint(&mut self) -> u32 {
        loop {
            let v = self.next_u32();
            if v != u32::MAX {
                return v;
            }
        }
    }

    /// Returns a uniform unsigned integer in [0, `max`).
    ///
    /// A `max` of zero returns zero.
    fn next_uint_max(&mut self, max: u32) -> u32 {
        if max == 0 {
            0
        } else {
            uniform_u32(self, max)
        }
    }

    /// Returns a uniform unsigned integer in [`min`, `max`).
    ///
    /// An empty range (`min == max`) returns `min`.
    ///
    /// # Errors
    /// Fails with [`Error::OutOfRange`] when `min > max`.
    fn next_uint_range(&mut self, min: u32, max: u32) -> Result<u32> {
        if min > max {
            return Err(Error::OutOfRange("min"));
        }
        let range = max - min;
        Ok(if range == 0 {
            min
        } else {
            min + uniform_u32(self, range)
        })
    }

    /// Fills `buffer` with bytes from the generator word stream.
    ///
    /// One `u32` draw fills four bytes in little-endian order; a trailing
    /// chunk shorter than four bytes consumes one more draw.
    fn fill_bytes(&mut self, buffer: &mut [u8]) {
        let mut chunks = buffer.chunks_exact_mut(4);
        for chunk in &mut chunks {
            chunk.copy_from_slice(&self.next_u32().to_le_bytes());
        }
        let remainder = chunks.into_remainder();
        if !remainder.is_empty() {
            let bytes = self.next_u32().to_le_bytes();
            remainder.copy_from_slice(&bytes[..remainder.len()]);
        }
    }

    /// Returns an infinite iterator of uniform booleans.
    ///
    /// The iterator produces exactly the values that repeated
    /// [`next_bool`](GeneratorExt::next_bool) calls would, one element per
    /// pull.
    fn booleans(&mut self) -> Booleans<'_, Self> {
        Booleans::new(self)
    }

    /// Returns an infinite iterator of uniform doubles in [0, 1).
    fn doubles(&mut self) -> Doubles<'_, Self> {
        Doubles::new(self, 0.0, 1.0)
    }

    /// Returns an infinite iterator of uniform doubles in [0, `max`).
    ///
    /// # Errors
    /// Same bound checks as [`next_f64_max`](GeneratorExt::next_f64_max).
    fn doubles_max(&mut self, max: f64) -> Result<Doubles<'_, Self>> {
        if !max.is_finite() {
            return Err(Error::NonFinite("max"));
        }
        if max < 0.0 {
            return Err(Error::OutOfRange("max"));
        }
        Ok(Doubles::new(self, 0.0, max))
    }

    /// Returns an infinite iterator of uniform doubles in [`min`, `max`).
    ///
    /// # Errors
    /// Same bound checks as [`next_f64_range`](GeneratorExt::next_f64_range).
    fn doubles_range(&mut self, min: f64, max: f64) -> Result<Doubles<'_, Self>> {
        let span = check_f64_range(min, max)?;
        Ok(Doubles::new(self, min, span))
    }

    /// Returns an infinite iterator of uniform integers in [0, `i32::MAX`).
    fn integers(&mut self) -> Integers<'_, Self> {
        Integers::new(self, 0, None)
    }

    /// Returns an infinite iterator of uniform integers in [0, `max`).
    ///
    /// # Errors
    /// Same bound checks as [`next_int_max`](GeneratorExt::next_int_max).
    fn integers_max(&mut self, max: i32) -> Result<Integers<'_, Self>> {
        if max < 0 {
            return Err(Error::OutOfRange("max"));
        }
        Ok(Integers::new(self, 0, Some(max as u32)))
    }

    /// Returns an infinite iterator of uniform integers in [`min`, `max`).
    ///
    /// # Errors
    /// Same bound checks as [`next_int_range`](GeneratorExt::next_int_range).
    fn integers_range(&mut self, min: i32, max: i32) -> Result<Integers<'_, Self>> {
        if min > max {
            return Err(Error::OutOfRange("min"));
        }
        let range = (max as i64 - min as i64) as u32;
        Ok(Integers::new(self, min, Some(range)))
    }

    /// Returns an infinite iterator of uniform unsigned integers in
    /// [0, `u32::MAX`).
    fn uints(&mut self) -> UnsignedIntegers<'_, Self> {
        UnsignedIntegers::new(self, 0, None)
    }

    /// Returns an infinite iterator of uniform unsigned integers in
    /// [0, `max`).
    ///
    /// A `max` of zero produces only zeros, like
    /// [`next_uint_max`](GeneratorExt::next_uint_max).
    fn uints_max(&mut self, max: u32) -> UnsignedIntegers<'_, Self> {
        UnsignedIntegers::new(self, 0, Some(max))
    }

    /// Returns an infinite iterator of uniform unsigned integers in
    /// [`min`, `max`).
    ///
    /// # Errors
    /// Same bound checks as
    /// [`next_uint_range`](GeneratorExt::next_uint_range).
    fn uints_range(&mut self, min: u32, max: u32) -> Result<UnsignedIntegers<'_, Self>> {
        if min > max {
            return Err(Error::OutOfRange("min"));
        }
        Ok(UnsignedIntegers::new(self, min, Some(max - min)))
    }

    /// Returns an infinite iterator of byte buffers of length `len`.
    ///
    /// Each element equals a fresh buffer filled with
    /// [`fill_bytes`](GeneratorExt::fill_bytes).
    fn byte_buffers(&mut self, len: usize) -> ByteBuffers<'_, Self> {
        ByteBuffers::new(self, len)
    }

    /// Picks one element of `items` uniformly.
    ///
    /// Exactly one [`next_f64`](Generator::next_f64) draw is consumed per
    /// pick, so every element has weight `1 / items.len()`.
    ///
    /// # Errors
    /// Fails with [`Error::EmptySequence`] when `items` is empty.
    fn choice<'a, T>(&mut self, items: &'a [T]) -> Result<&'a T> {
        if items.is_empty() {
            return Err(Error::EmptySequence);
        }
        let index = (self.next_f64() * items.len() as f64) as usize;
        Ok(&items[index])
    }

    /// Returns an infinite iterator sampling `items` uniformly with
    /// replacement.
    ///
    /// Each element consumes exactly one [`next_f64`](Generator::next_f64)
    /// draw and equals the value a [`choice`](GeneratorExt::choice) call
    /// would return at that point of the stream.
    ///
    /// # Errors
    /// Fails with [`Error::EmptySequence`] when `items` is empty.
    fn choices<'g, 'i, T>(&'g mut self, items: &'i [T]) -> Result<Choices<'g, 'i, Self, T>> {
        if items.is_empty() {
            return Err(Error::EmptySequence);
        }
        Ok(Choices::new(self, items))
    }
}

impl<G: Generator + ?Sized> GeneratorExt for G {}

/// Validates the bounds of a double range and returns its span.
fn check_f64_range(min: f64, max: f64) -> Result<f64> {
    if !min.is_finite() {
        return Err(Error::NonFinite("min"));
    }
    if !max.is_finite() {
        return Err(Error::NonFinite("max"));
    }
    if min > max {
        return Err(Error::OutOfRange("min"));
    }
    let span = max - min;
    if !span.is_finite() {
        return Err(Error::NonFinite("max - min"));
    }
    Ok(span)
}
