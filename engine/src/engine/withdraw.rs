use piso_types::{UserId, WithdrawOutcome};
use tracing::debug;

use super::Engine;
use crate::rng::RandomSource;

impl<R: RandomSource> Engine<R> {
    /// Initiate a payout if the withdrawable balance meets the threshold.
    ///
    /// Reading the amount and zeroing the balance happen under the account
    /// lock together with producing the outcome; once `Initiated` is
    /// returned the funds are out of the engine's custody and there is no
    /// refund path.
    pub fn request_withdrawal(&self, user: UserId) -> WithdrawOutcome {
        let required = self.config.withdraw_threshold;
        self.store.mutate(user, |account| {
            if account.withdrawable < required {
                return WithdrawOutcome::BelowThreshold {
                    current: account.withdrawable,
                    required,
                };
            }

            let amount = account.withdrawable;
            account.withdrawable = 0;
            debug!(%user, amount, "withdrawal initiated");
            WithdrawOutcome::Initiated { amount }
        })
    }
}
