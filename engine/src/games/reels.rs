//! Three-reel spin classification.
//!
//! Three independent uniform draws over the four-symbol alphabet:
//! - all three equal       -> Jackpot       (winnings = jackpot_multiplier * stake)
//! - exactly two equal     -> PartialMatch  (winnings = partial_multiplier * stake)
//! - all distinct          -> NoMatch       (loss = stake)

use piso_types::constants::REEL_COUNT;
use piso_types::{ReelSymbol, SpinClass};

pub fn classify(reels: &[ReelSymbol; REEL_COUNT]) -> SpinClass {
    let distinct = distinct_count(reels);
    match distinct {
        1 => SpinClass::Jackpot,
        2 => SpinClass::PartialMatch,
        _ => SpinClass::NoMatch,
    }
}

fn distinct_count(reels: &[ReelSymbol; REEL_COUNT]) -> usize {
    let mut seen: Vec<ReelSymbol> = Vec::with_capacity(REEL_COUNT);
    for reel in reels {
        if !seen.contains(reel) {
            seen.push(*reel);
        }
    }
    seen.len()
}

/// Net winnings for the class, or `None` on a losing spin.
pub fn winnings(
    class: SpinClass,
    stake: u64,
    jackpot_multiplier: u64,
    partial_multiplier: u64,
) -> Option<u64> {
    match class {
        SpinClass::Jackpot => Some(stake.saturating_mul(jackpot_multiplier)),
        SpinClass::PartialMatch => Some(stake.saturating_mul(partial_multiplier)),
        SpinClass::NoMatch => None,
    }
}
