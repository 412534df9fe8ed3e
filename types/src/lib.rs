//! Common types used throughout piso.
//!
//! This crate is pure data: the per-user [`Account`] record and its
//! invariants, the tunable constants, and the report records the engine
//! hands back to the chat transport for rendering. Nothing in here mutates
//! state or draws randomness; that all lives in `piso-engine`.

pub mod account;
pub mod constants;
pub mod report;

pub use account::{Account, AccountInvariantError, PendingChallenge, UserId};
pub use report::{
    BalanceReport, DiceReport, GameOutcome, GameRefusal, InviteReport, IssueOutcome, Parity,
    ReelSymbol, Reply, SpinClass, SpinReport, VerifyOutcome, WithdrawOutcome,
};
