use std::fmt;
use std::time::Instant;

use serde::{Deserialize, Serialize};
use thiserror::Error as ThisError;

use crate::constants::{CHALLENGE_ALPHABET, CHALLENGE_LENGTH};

/// Opaque per-user identifier, assigned by the chat transport.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub struct UserId(pub u64);

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// The single outstanding challenge for an account, if any.
///
/// `answer` is stored uppercase; submissions are trimmed and compared
/// case-insensitively. `issued_at` is informational only -- challenges never
/// expire, they are only consumed or replaced.
#[derive(Clone, Debug)]
pub struct PendingChallenge {
    pub answer: String,
    pub issued_at: Instant,
}

#[derive(Debug, ThisError, PartialEq, Eq)]
pub enum AccountInvariantError {
    #[error("pending answer has wrong length (len={len}, expected={expected})")]
    AnswerWrongLength { len: usize, expected: usize },
    #[error("pending answer contains character outside challenge alphabet: {found:?}")]
    AnswerOutsideAlphabet { found: char },
}

/// Per-user ledger state.
///
/// Created lazily with zeroed fields on first interaction and kept for the
/// process lifetime. Balances are unsigned; the engine only debits after an
/// atomic sufficient-funds check, so they can never go negative.
#[derive(Clone, Debug, Default)]
pub struct Account {
    /// Currency usable as game stakes; not directly withdrawable.
    pub playable: u64,
    /// Currency eligible for payout once the withdrawal threshold is met.
    pub withdrawable: u64,
    /// Lifetime solved-challenge count. Never resets.
    pub challenges_solved: u64,
    /// Lifetime recorded-invite count. Never resets.
    pub invites_recorded: u64,
    /// At most one outstanding challenge per account.
    pub pending_challenge: Option<PendingChallenge>,
}

impl Account {
    pub fn validate_invariants(&self) -> Result<(), AccountInvariantError> {
        if let Some(pending) = &self.pending_challenge {
            if pending.answer.len() != CHALLENGE_LENGTH {
                return Err(AccountInvariantError::AnswerWrongLength {
                    len: pending.answer.len(),
                    expected: CHALLENGE_LENGTH,
                });
            }
            if let Some(found) = pending
                .answer
                .chars()
                .find(|c| !CHALLENGE_ALPHABET.contains(*c))
            {
                return Err(AccountInvariantError::AnswerOutsideAlphabet { found });
            }
        }
        Ok(())
    }
}
