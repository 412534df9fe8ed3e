//! Per-user account storage with atomic read-modify-write access.

use std::collections::HashMap;
use std::sync::{Arc, Mutex, RwLock};

use piso_types::{Account, BalanceReport, UserId};

/// Owns every account record and serializes mutations per account.
///
/// The public contract is deliberately narrow: [`AccountStore::mutate`] is
/// the only way to touch an account, so a check-then-act sequence ("if
/// balance covers the stake, debit it") is always a single atomic step.
/// There is no separate read-then-write pair to misuse. Mutations on
/// different accounts proceed independently; no operation in this engine
/// touches two accounts, so no cross-account locking exists.
#[derive(Debug, Default)]
pub struct AccountStore {
    accounts: RwLock<HashMap<UserId, Arc<Mutex<Account>>>>,
}

impl AccountStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Fetch the lock for `user`, lazily creating a zeroed account.
    fn entry(&self, user: UserId) -> Arc<Mutex<Account>> {
        if let Some(entry) = self
            .accounts
            .read()
            .expect("account map lock poisoned")
            .get(&user)
        {
            return Arc::clone(entry);
        }
        let mut accounts = self.accounts.write().expect("account map lock poisoned");
        Arc::clone(accounts.entry(user).or_default())
    }

    /// Apply `f` to the account atomically with respect to all other
    /// mutations on the same user. The account lock is held for the whole
    /// closure, never across a call that could block.
    pub fn mutate<R>(&self, user: UserId, f: impl FnOnce(&mut Account) -> R) -> R {
        let entry = self.entry(user);
        let mut account = entry.lock().expect("account lock poisoned");
        f(&mut account)
    }

    /// Point-in-time view of both balances (creates the account if absent).
    pub fn snapshot(&self, user: UserId) -> BalanceReport {
        self.mutate(user, |account| BalanceReport {
            playable: account.playable,
            withdrawable: account.withdrawable,
        })
    }

    /// Number of accounts ever touched.
    pub fn len(&self) -> usize {
        self.accounts
            .read()
            .expect("account map lock poisoned")
            .len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
