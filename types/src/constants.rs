//! Tunable constants for the ledger and games.
//!
//! These are the reference values; the engine reads them through
//! `EngineConfig`, which defaults to everything below.

/// Minimum `withdrawable` balance required to initiate a payout.
pub const WITHDRAW_THRESHOLD: u64 = 888;

/// Flat `playable` credit per recorded invite.
pub const INVITE_REWARD: u64 = 77;

/// Solved-challenge count at which earning is suspended until the invite
/// requirement is met.
pub const GATE_SOLVED_THRESHOLD: u64 = 50;

/// Recorded invites required to keep earning past the gate.
pub const GATE_INVITES_REQUIRED: u64 = 5;

/// Inclusive bounds of the uniform reward for a solved challenge.
pub const CHALLENGE_REWARD_MIN: u64 = 1;
pub const CHALLENGE_REWARD_MAX: u64 = 10;

/// Length of a generated challenge string.
pub const CHALLENGE_LENGTH: usize = 5;

/// Challenge alphabet. Visually confusable characters (I, O, 0, 1) are
/// excluded so retyping from a rendered image is unambiguous.
pub const CHALLENGE_ALPHABET: &str = "ABCDEFGHJKLMNPQRSTUVWXYZ23456789";

/// Faces on the parity die.
pub const DICE_SIDES: u64 = 6;

/// Total returned on the money at risk for a winning parity guess; the net
/// balance credit is `stake * (DICE_WIN_MULTIPLIER - 1)`.
pub const DICE_WIN_MULTIPLIER: u64 = 2;

/// Net winnings multiplier when all three reels match.
pub const SPIN_JACKPOT_MULTIPLIER: u64 = 5;

/// Net winnings multiplier when exactly two reels match.
pub const SPIN_PARTIAL_MULTIPLIER: u64 = 2;

/// Reels per spin.
pub const REEL_COUNT: usize = 3;
