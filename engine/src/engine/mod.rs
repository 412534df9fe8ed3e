//! The engine facade: one struct owning the store, config, and randomness,
//! with each service's handlers in a sibling file.

mod challenge;
mod games;
mod invite;
mod withdraw;

use std::sync::Mutex;

use piso_types::{BalanceReport, Reply, UserId, VerifyOutcome};

use crate::command::Command;
use crate::config::EngineConfig;
use crate::rng::{RandomSource, StdRandom};
use crate::store::AccountStore;

/// Ledger and game settlement engine.
///
/// `Engine` is shared across however many transport tasks are in flight;
/// every method takes `&self`. Account state is serialized per account by
/// the store, randomness by its own lock, and the two are never held
/// together: draws happen before the account lock is taken.
pub struct Engine<R: RandomSource = StdRandom> {
    store: AccountStore,
    config: EngineConfig,
    rng: Mutex<R>,
}

impl Engine<StdRandom> {
    /// Engine with the default config and an OS-entropy generator.
    pub fn with_entropy(config: EngineConfig) -> Self {
        Self::new(config, StdRandom::from_entropy())
    }
}

impl Default for Engine<StdRandom> {
    fn default() -> Self {
        Self::with_entropy(EngineConfig::default())
    }
}

impl<R: RandomSource> Engine<R> {
    pub fn new(config: EngineConfig, rng: R) -> Self {
        Self {
            store: AccountStore::new(),
            config,
            rng: Mutex::new(rng),
        }
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    pub fn store(&self) -> &AccountStore {
        &self.store
    }

    /// Current balances (lazily creating the account, like every command).
    pub fn balance(&self, user: UserId) -> BalanceReport {
        self.store.snapshot(user)
    }

    /// Draw from the engine's randomness. Never called while an account
    /// lock is held.
    pub(crate) fn draw<T>(&self, f: impl FnOnce(&mut R) -> T) -> T {
        let mut rng = self.rng.lock().expect("rng lock poisoned");
        f(&mut rng)
    }

    /// Route one parsed command to exactly one service.
    ///
    /// Returns `None` only for plain text with no pending challenge, which
    /// the transport must not answer.
    pub fn handle(&self, user: UserId, command: Command) -> Option<Reply> {
        match command {
            Command::Balance => Some(Reply::Balance(self.balance(user))),
            Command::EarnChallenge => Some(Reply::Challenge(self.issue_challenge(user))),
            Command::SubmitText(text) => match self.submit_text(user, &text) {
                VerifyOutcome::NoPending => None,
                outcome => Some(Reply::Verify(outcome)),
            },
            Command::Invite => Some(Reply::Invite(self.record_invite(user))),
            Command::Dice { guess, stake } => {
                Some(Reply::Dice(self.play_dice(user, guess, stake)))
            }
            Command::ScatterSpin { stake } => Some(Reply::Spin(self.play_spin(user, stake))),
            Command::Withdraw => Some(Reply::Withdraw(self.request_withdrawal(user))),
        }
    }
}
