//! Game settlement algorithms.
//!
//! Both games share one settlement shape: the handler checks the stake
//! against `playable` under the account lock, then applies a single
//! [`settle`] delta. The pure outcome evaluation lives in [`dice`] and
//! [`reels`] so it is testable without a store.

use piso_types::Account;

pub mod dice;
pub mod reels;

/// Apply a settled round to the account.
///
/// On a win the stake stays in `playable` and the net winnings flow to both
/// balances; on a loss the stake leaves `playable`. The caller has already
/// verified `playable >= stake` under the same lock.
pub fn settle(account: &mut Account, stake: u64, winnings: Option<u64>) {
    match winnings {
        Some(winnings) => {
            account.playable = account.playable.saturating_add(winnings);
            account.withdrawable = account.withdrawable.saturating_add(winnings);
        }
        None => {
            account.playable = account.playable.saturating_sub(stake);
        }
    }
}
