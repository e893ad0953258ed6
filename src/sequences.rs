//! Lazy infinite sequence producers.
//!
//! This module contains the iterator types returned by the sequence methods
//! of [`GeneratorExt`](crate::GeneratorExt). Every iterator borrows its
//! generator mutably, advances it by exactly one element per
//! [`Iterator::next`] call and never computes ahead of the consumer, so an
//! infinite sequence needs no memory beyond the generator state. Consuming
//! element *i* of a sequence yields the same value as calling the
//! corresponding scalar method for the *i*-th time on an equally-seeded
//! generator: the sequences are a different access pattern, not a different
//! algorithm.
//!
//! Range bounds are validated by the [`GeneratorExt`](crate::GeneratorExt)
//! constructors, so the iterators themselves are infallible.

use crate::generator::uniform_u32;
use crate::{Generator, GeneratorExt};

/// Infinite iterator of uniform booleans.
///
/// Returned by [`GeneratorExt::booleans`](crate::GeneratorExt::booleans).
#[derive(Debug)]
pub struct Booleans<'a, G: ?Sized> {
    generator: &'a mut G,
}

impl<'a, G: Generator + ?Sized> Booleans<'a, G> {
    pub(crate) fn new(generator: &'a mut G) -> Self {
        Booleans { generator }
    }
}

impl<G: Generator + ?Sized> Iterator for Booleans<'_, G> {
    type Item = bool;

    fn next(&mut self) -> Option<bool> {
        Some(self.generator.next_bool())
    }
}

/// Infinite iterator of uniform doubles over a half-open interval.
///
/// Returned by [`GeneratorExt::doubles`](crate::GeneratorExt::doubles) and
/// its bounded variants.
#[derive(Debug)]
pub struct Doubles<'a, G: ?Sized> {
    generator: &'a mut G,
    offset: f64,
    span: f64,
}

impl<'a, G: Generator + ?Sized> Doubles<'a, G> {
    pub(crate) fn new(generator: &'a mut G, offset: f64, span: f64) -> Self {
        Doubles {
            generator,
            offset,
            span,
        }
    }
}

impl<G: Generator + ?Sized> Iterator for Doubles<'_, G> {
    type Item = f64;

    fn next(&mut self) -> Option<f64> {
        // Same remap as the scalar ranged draw, so the streams agree bit
        // for bit.
        Some(self.offset + self.generator.next_f64() * self.span)
    }
}

/// Infinite iterator of uniform integers over a half-open interval.
///
/// Returned by [`GeneratorExt::integers`](crate::GeneratorExt::integers)
/// and [`GeneratorExt::integers_range`](crate::GeneratorExt::integers_range).
#[derive(Debug)]
pub struct Integers<'a, G: ?Sized> {
    generator: &'a mut G,
    min: i32,
    // None samples the full [0, i32::MAX) interval.
    range: Option<u32>,
}

impl<'a, G: Generator + ?Sized> Integers<'a, G> {
    pub(crate) fn new(generator: &'a mut G, min: i32, range: Option<u32>) -> Self {
        Integers {
            generator,
            min,
            range,
        }
    }
}

impl<G: Generator + ?Sized> Iterator for Integers<'_, G> {
    type Item = i32;

    fn next(&mut self) -> Option<i32> {
        Some(match self.range {
            None => self.generator.next_int(),
            Some(0) => self.min,
            Some(range) => (self.min as i64 + uniform_u32(self.generator, range) as i64) as i32,
        })
    }
}

/// Infinite iterator of uniform unsigned integers over a half-open
/// interval.
///
/// Returned by [`GeneratorExt::uints`](crate::GeneratorExt::uints) and
/// [`GeneratorExt::uints_range`](crate::GeneratorExt::uints_range).
#[derive(Debug)]
pub struct UnsignedIntegers<'a, G: ?Sized> {
    generator: &'a mut G,
    min: u32,
    // None samples the full [0, u32::MAX) interval.
    range: Option<u32>,
}

impl<'a, G: Generator + ?Sized> UnsignedIntegers<'a, G> {
    pub(crate) fn new(generator: &'a mut G, min: u32, range: Option<u32>) -> Self {
        UnsignedIntegers {
            generator,
            min,
            range,
        }
    }
}

impl<G: Generator + ?Sized> Iterator for UnsignedIntegers<'_, G> {
    type Item = u32;

    fn next(&mut self) -> Option<u32> {
        Some(match self.range {
            None => self.generator.next_uint(),
            Some(0) => self.min,
            Some(range) => self.min + uniform_u32(self.generator, range),
        })
    }
}

/// Infinite iterator of byte buffers of a fixed length.
///
/// Returned by
/// [`GeneratorExt::byte_buffers`](crate::GeneratorExt::byte_buffers).
#[derive(Debug)]
pub struct ByteBuffers<'a, G: ?Sized> {
    generator: &'a mut G,
    len: usize,
}

impl<'a, G: Generator + ?Sized> ByteBuffers<'a, G> {
    pub(crate) fn new(generator: &'a mut G, len: usize) -> Self {
        ByteBuffers { generator, len }
    }
}

impl<G: Generator + ?Sized> Iterator for ByteBuffers<'_, G> {
    type Item = Vec<u8>;

    fn next(&mut self) -> Option<Vec<u8>> {
        let mut buffer = vec![0u8; self.len];
        self.generator.fill_bytes(&mut buffer);
        Some(buffer)
    }
}

/// Infinite iterator of uniform picks from a slice, with replacement.
///
/// Returned by [`GeneratorExt::choices`](crate::GeneratorExt::choices).
/// The slice is guaranteed non-empty by the constructor.
#[derive(Debug)]
pub struct Choices<'g, 'i, G: ?Sized, T> {
    generator: &'g mut G,
    items: &'i [T],
}

impl<'g, 'i, G: Generator + ?Sized, T> Choices<'g, 'i, G, T> {
    pub(crate) fn new(generator: &'g mut G, items: &'i [T]) -> Self {
        Choices { generator, items }
    }
}

impl<'i, G: Generator + ?Sized, T> Iterator for Choices<'_, 'i, G, T> {
    type Item = &'i T;

    fn next(&mut self) -> Option<&'i T> {
        // One next_f64 draw per element, matching the scalar choice.
        let index = (self.generator.next_f64() * self.items.len() as f64) as usize;
        Some(&self.items[index])
    }
}

#[cfg(test)]
mod tests {
    use crate::generators::{Mt19937, Xorshift128};
    use crate::{Generator, GeneratorExt};

    #[test]
    fn booleans_match_scalar_calls() {
        let mut seq_rng = Xorshift128::new(11);
        let mut scalar_rng = Xorshift128::new(11);
        let from_seq: Vec<bool> = seq_rng.booleans().take(200).collect();
        let from_scalar: Vec<bool> = (0..200).map(|_| scalar_rng.next_bool()).collect();
        assert_eq!(from_seq, from_scalar);
    }

    #[test]
    fn doubles_match_scalar_calls() {
        let mut seq_rng = Mt19937::new(12);
        let mut scalar_rng = Mt19937::new(12);
        let from_seq: Vec<f64> = seq_rng.doubles_range(-4.0, 4.0).unwrap().take(200).collect();
        let from_scalar: Vec<f64> = (0..200)
            .map(|_| scalar_rng.next_f64_range(-4.0, 4.0).unwrap())
            .collect();
        assert_eq!(from_seq, from_scalar);

        let from_seq: Vec<f64> = seq_rng.doubles().take(200).collect();
        let from_scalar: Vec<f64> = (0..200).map(|_| scalar_rng.next_f64()).collect();
        assert_eq!(from_seq, from_scalar);
    }

    #[test]
    fn integers_match_scalar_calls() {
        let mut seq_rng = Xorshift128::new(13);
        let mut scalar_rng = Xorshift128::new(13);
        let from_seq: Vec<i32> = seq_rng.integers_range(-9, 9).unwrap().take(500).collect();
        let from_scalar: Vec<i32> = (0..500)
            .map(|_| scalar_rng.next_int_range(-9, 9).unwrap())
            .collect();
        assert_eq!(from_seq, from_scalar);

        let from_seq: Vec<i32> = seq_rng.integers().take(100).collect();
        let from_scalar: Vec<i32> = (0..100).map(|_| scalar_rng.next_int()).collect();
        assert_eq!(from_seq, from_scalar);

        let from_seq: Vec<i32> = seq_rng.integers_max(42).unwrap().take(200).collect();
        let from_scalar: Vec<i32> = (0..200)
            .map(|_| scalar_rng.next_int_max(42).unwrap())
            .collect();
        assert_eq!(from_seq, from_scalar);
    }

    #[test]
    fn uints_match_scalar_calls() {
        let mut seq_rng = Xorshift128::new(14);
        let mut scalar_rng = Xorshift128::new(14);
        let from_seq: Vec<u32> = seq_rng.uints_range(5, 105).unwrap().take(500).collect();
        let from_scalar: Vec<u32> = (0..500)
            .map(|_| scalar_rng.next_uint_range(5, 105).unwrap())
            .collect();
        assert_eq!(from_seq, from_scalar);

        let from_seq: Vec<u32> = seq_rng.uints_max(64).take(200).collect();
        let from_scalar: Vec<u32> = (0..200).map(|_| scalar_rng.next_uint_max(64)).collect();
        assert_eq!(from_seq, from_scalar);
    }

    #[test]
    fn byte_buffers_match_fill_bytes() {
        let mut seq_rng = Mt19937::new(15);
        let mut scalar_rng = Mt19937::new(15);
        let buffers: Vec<Vec<u8>> = seq_rng.byte_buffers(7).take(20).collect();
        for buffer in buffers {
            let mut expected = [0u8; 7];
            scalar_rng.fill_bytes(&mut expected);
            assert_eq!(buffer, expected);
        }
    }

    #[test]
    fn choices_match_scalar_choice() {
        let items = ["a", "b", "c", "d", "e"];
        let mut seq_rng = Xorshift128::new(16);
        let mut scalar_rng = Xorshift128::new(16);
        let picks: Vec<&str> = seq_rng.choices(&items).unwrap().take(300).cloned().collect();
        for pick in picks {
            assert_eq!(pick, *scalar_rng.choice(&items).unwrap());
        }
    }

    #[test]
    fn sequences_are_pull_based() {
        // A sequence pulls nothing from the generator until consumed.
        let mut a = Xorshift128::new(17);
        {
            let _unused = a.integers();
        }
        let mut b = Xorshift128::new(17);
        assert_eq!(a.next_u32(), b.next_u32());
    }
}
