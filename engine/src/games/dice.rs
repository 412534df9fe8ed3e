//! Parity dice evaluation.
//!
//! One uniform roll in `[1, sides]`; the guess wins when its parity matches
//! the roll. A winning stake is returned at `win_multiplier` total, so the
//! net credit applied to each balance is `stake * (win_multiplier - 1)`.

use piso_types::Parity;

/// Outcome of a single roll against a guess.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DiceRound {
    pub roll: u64,
    pub parity: Parity,
    pub won: bool,
}

pub fn evaluate(guess: Parity, roll: u64) -> DiceRound {
    let parity = Parity::of_roll(roll);
    DiceRound {
        roll,
        parity,
        won: parity == guess,
    }
}

/// Net winnings for a won round.
pub fn net_winnings(stake: u64, win_multiplier: u64) -> u64 {
    stake.saturating_mul(win_multiplier.saturating_sub(1))
}
