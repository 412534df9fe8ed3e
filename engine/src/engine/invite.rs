use piso_types::{InviteReport, UserId};
use tracing::debug;

use super::Engine;
use crate::rng::RandomSource;

impl<R: RandomSource> Engine<R> {
    /// Record a self-reported referral and credit the flat reward.
    ///
    /// There is no upper bound and no verification that a distinct referred
    /// user exists; the counter feeds the challenge gate as-is. That trust
    /// model is inherited deliberately.
    pub fn record_invite(&self, user: UserId) -> InviteReport {
        let reward = self.config.invite_reward;
        self.store.mutate(user, |account| {
            account.invites_recorded += 1;
            account.playable = account.playable.saturating_add(reward);
            debug!(
                %user,
                invites = account.invites_recorded,
                reward,
                "invite recorded"
            );
            InviteReport {
                invites_recorded: account.invites_recorded,
                playable: account.playable,
            }
        })
    }
}
