//! Runtime-tunable engine configuration.
//!
//! Every constant the command surface exposes as a tunable lives here;
//! services read the config, never the `piso-types` constants directly.

use piso_types::constants;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EngineConfig {
    /// Minimum `withdrawable` balance required to initiate a payout.
    pub withdraw_threshold: u64,
    /// Flat `playable` credit per recorded invite.
    pub invite_reward: u64,
    /// Solved-challenge count at which the invite gate engages.
    pub gate_solved_threshold: u64,
    /// Recorded invites required to earn past the gate.
    pub gate_invites_required: u64,
    /// Inclusive bounds of the uniform solved-challenge reward.
    pub challenge_reward_min: u64,
    pub challenge_reward_max: u64,
    /// Length of a generated challenge string.
    pub challenge_length: usize,
    /// Alphabet challenges are drawn from.
    pub challenge_alphabet: String,
    /// Faces on the parity die.
    pub dice_sides: u64,
    /// Total returned on the money at risk for a winning parity guess.
    pub dice_win_multiplier: u64,
    /// Net winnings multipliers for the three-reel spin.
    pub spin_jackpot_multiplier: u64,
    pub spin_partial_multiplier: u64,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            withdraw_threshold: constants::WITHDRAW_THRESHOLD,
            invite_reward: constants::INVITE_REWARD,
            gate_solved_threshold: constants::GATE_SOLVED_THRESHOLD,
            gate_invites_required: constants::GATE_INVITES_REQUIRED,
            challenge_reward_min: constants::CHALLENGE_REWARD_MIN,
            challenge_reward_max: constants::CHALLENGE_REWARD_MAX,
            challenge_length: constants::CHALLENGE_LENGTH,
            challenge_alphabet: constants::CHALLENGE_ALPHABET.to_string(),
            dice_sides: constants::DICE_SIDES,
            dice_win_multiplier: constants::DICE_WIN_MULTIPLIER,
            spin_jackpot_multiplier: constants::SPIN_JACKPOT_MULTIPLIER,
            spin_partial_multiplier: constants::SPIN_PARTIAL_MULTIPLIER,
        }
    }
}
