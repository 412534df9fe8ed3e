//! Result records handed back to the chat transport.
//!
//! The engine's contract with the transport is: take a parsed command,
//! return one of these records (or nothing, for the silent no-pending
//! case). Everything here is serde-serializable so a transport can render
//! it directly or forward it over the wire; none of it is persisted.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error as ThisError;

use crate::constants::REEL_COUNT;

/// Both balances of an account at a point in time.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BalanceReport {
    pub playable: u64,
    pub withdrawable: u64,
}

/// Outcome of asking for an earn-challenge.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum IssueOutcome {
    /// A fresh challenge was stored; `text` is what the user must retype
    /// (the transport may render it as an image instead).
    Challenge { text: String },
    /// Earning is suspended until the invite requirement is met. No
    /// challenge was issued and nothing was mutated.
    Gated {
        solved: u64,
        invites: u64,
        invites_required: u64,
    },
}

/// Outcome of submitting plain text while a challenge may be pending.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum VerifyOutcome {
    Correct {
        reward: u64,
        playable: u64,
        challenges_solved: u64,
    },
    Incorrect,
    /// No challenge was outstanding. The transport must not reply: this
    /// fires on every plain-text message, most of which are unrelated
    /// chatter.
    NoPending,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct InviteReport {
    pub invites_recorded: u64,
    pub playable: u64,
}

/// A parity guess (and the parity of a roll).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Parity {
    Odd,
    Even,
}

impl Parity {
    pub fn of_roll(roll: u64) -> Self {
        if roll % 2 == 0 {
            Parity::Even
        } else {
            Parity::Odd
        }
    }
}

impl fmt::Display for Parity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Parity::Odd => write!(f, "odd"),
            Parity::Even => write!(f, "even"),
        }
    }
}

#[derive(Debug, ThisError, PartialEq, Eq)]
#[error("guess must be \"odd\" or \"even\" (got {got:?})")]
pub struct ParseParityError {
    pub got: String,
}

impl FromStr for Parity {
    type Err = ParseParityError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "odd" => Ok(Parity::Odd),
            "even" => Ok(Parity::Even),
            _ => Err(ParseParityError { got: s.to_string() }),
        }
    }
}

/// Net effect of a settled game round on the account.
///
/// `winnings` / `lost` are the amounts the balances actually moved, not the
/// gross "returned" figure: a winning stake stays in `playable`, so a dice
/// win of stake S reports `winnings = S` even though 2S is at play.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameOutcome {
    Win { winnings: u64 },
    Loss { lost: u64 },
}

/// A game round was refused before any mutation.
#[derive(Clone, Copy, Debug, ThisError, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameRefusal {
    #[error("insufficient playable balance: have {available}, need {required}")]
    InsufficientFunds { available: u64, required: u64 },
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct DiceReport {
    pub guess: Parity,
    pub roll: u64,
    pub parity: Parity,
    pub outcome: GameOutcome,
    pub balances: BalanceReport,
}

/// The four-symbol reel alphabet.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ReelSymbol {
    Cherry,
    Seven,
    Star,
    Diamond,
}

impl ReelSymbol {
    pub const ALL: [ReelSymbol; 4] = [
        ReelSymbol::Cherry,
        ReelSymbol::Seven,
        ReelSymbol::Star,
        ReelSymbol::Diamond,
    ];

    /// The glyph the transport renders.
    pub fn glyph(&self) -> &'static str {
        match self {
            ReelSymbol::Cherry => "\u{1F352}",
            ReelSymbol::Seven => "7\u{FE0F}\u{20E3}",
            ReelSymbol::Star => "\u{2B50}",
            ReelSymbol::Diamond => "\u{1F48E}",
        }
    }
}

impl fmt::Display for ReelSymbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.glyph())
    }
}

/// Classification of a three-reel draw.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum SpinClass {
    /// All three reels equal.
    Jackpot,
    /// Exactly two of three reels equal.
    PartialMatch,
    /// All three reels distinct.
    NoMatch,
}

/// One presentational frame of a spin: reels revealed so far.
pub type SpinFrame = [Option<ReelSymbol>; REEL_COUNT];

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SpinReport {
    pub reels: [ReelSymbol; REEL_COUNT],
    pub class: SpinClass,
    pub outcome: GameOutcome,
    pub balances: BalanceReport,
}

impl SpinReport {
    /// Left-to-right incremental reveal of the already-settled reels, for
    /// transports that animate the spin. Purely presentational: a single
    /// settlement underlies every frame.
    pub fn reveal_frames(&self) -> Vec<SpinFrame> {
        (1..=REEL_COUNT)
            .map(|shown| {
                let mut frame: SpinFrame = [None; REEL_COUNT];
                for (slot, reel) in frame.iter_mut().zip(self.reels.iter()).take(shown) {
                    *slot = Some(*reel);
                }
                frame
            })
            .collect()
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum WithdrawOutcome {
    /// `withdrawable` was atomically zeroed; the transport follows up
    /// out-of-band to collect payout details.
    Initiated { amount: u64 },
    BelowThreshold { current: u64, required: u64 },
}

/// Everything the engine can hand back for rendering.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Reply {
    Balance(BalanceReport),
    Challenge(IssueOutcome),
    Verify(VerifyOutcome),
    Invite(InviteReport),
    Dice(Result<DiceReport, GameRefusal>),
    Spin(Result<SpinReport, GameRefusal>),
    Withdraw(WithdrawOutcome),
}
