//! Deterministic [`RandomSource`] doubles for tests.

use std::collections::VecDeque;
use std::ops::RangeInclusive;

use crate::rng::RandomSource;

/// Always lands on `roll` (clamped into the requested range) and always
/// picks `index`.
pub struct FixedSource {
    pub roll: u64,
    pub index: usize,
}

impl RandomSource for FixedSource {
    fn int_in(&mut self, range: RangeInclusive<u64>) -> u64 {
        self.roll.clamp(*range.start(), *range.end())
    }

    fn pick_index(&mut self, len: usize) -> usize {
        self.index.min(len.saturating_sub(1))
    }
}

/// Pops scripted draws in order; falls back to the range minimum / index 0
/// when the script runs out.
pub struct ScriptedSource {
    ints: VecDeque<u64>,
    indices: VecDeque<usize>,
}

impl ScriptedSource {
    pub fn new(
        ints: impl IntoIterator<Item = u64>,
        indices: impl IntoIterator<Item = usize>,
    ) -> Self {
        Self {
            ints: ints.into_iter().collect(),
            indices: indices.into_iter().collect(),
        }
    }
}

impl RandomSource for ScriptedSource {
    fn int_in(&mut self, range: RangeInclusive<u64>) -> u64 {
        self.ints
            .pop_front()
            .unwrap_or(*range.start())
            .clamp(*range.start(), *range.end())
    }

    fn pick_index(&mut self, len: usize) -> usize {
        self.indices
            .pop_front()
            .unwrap_or(0)
            .min(len.saturating_sub(1))
    }
}
