//! Uniform randomness seam for the challenge and game services.
//!
//! Production uses [`StdRandom`] (seeded from OS entropy); tests swap in
//! [`SeededRandom`] or a hand-rolled [`RandomSource`] to pin every
//! probability-dependent path.

use std::ops::RangeInclusive;

use rand::{rngs::StdRng, Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// Uniform generator abstraction consumed by challenges and games.
pub trait RandomSource: Send {
    /// Uniform integer in the inclusive range.
    fn int_in(&mut self, range: RangeInclusive<u64>) -> u64;

    /// Uniform index into a collection of `len` elements. `len` must be
    /// nonzero.
    fn pick_index(&mut self, len: usize) -> usize;

    /// Random string of `len` characters drawn uniformly from `alphabet`.
    fn challenge_text(&mut self, alphabet: &str, len: usize) -> String {
        let chars: Vec<char> = alphabet.chars().collect();
        (0..len).map(|_| chars[self.pick_index(chars.len())]).collect()
    }
}

/// Adapter making any `rand` generator a [`RandomSource`].
#[derive(Clone, Debug)]
pub struct EngineRng<R>(R);

impl<R: Rng + Send> RandomSource for EngineRng<R> {
    fn int_in(&mut self, range: RangeInclusive<u64>) -> u64 {
        self.0.gen_range(range)
    }

    fn pick_index(&mut self, len: usize) -> usize {
        self.0.gen_range(0..len)
    }
}

/// OS-entropy generator for production use.
pub type StdRandom = EngineRng<StdRng>;

impl StdRandom {
    pub fn from_entropy() -> Self {
        EngineRng(StdRng::from_entropy())
    }
}

impl Default for StdRandom {
    fn default() -> Self {
        Self::from_entropy()
    }
}

/// Deterministic generator for tests and replay.
pub type SeededRandom = EngineRng<ChaCha8Rng>;

impl SeededRandom {
    pub fn from_seed(seed: u64) -> Self {
        EngineRng(ChaCha8Rng::seed_from_u64(seed))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_seeded_source_is_reproducible() {
        let mut a = SeededRandom::from_seed(42);
        let mut b = SeededRandom::from_seed(42);
        for _ in 0..32 {
            assert_eq!(a.int_in(1..=6), b.int_in(1..=6));
        }
    }

    #[test]
    fn test_int_in_respects_inclusive_bounds() {
        let mut rng = SeededRandom::from_seed(7);
        for _ in 0..200 {
            let roll = rng.int_in(1..=6);
            assert!((1..=6).contains(&roll));
        }
    }

    #[test]
    fn test_challenge_text_draws_from_alphabet() {
        let mut rng = SeededRandom::from_seed(9);
        let text = rng.challenge_text("ABC23", 5);
        assert_eq!(text.len(), 5);
        assert!(text.chars().all(|c| "ABC23".contains(c)));
    }
}
