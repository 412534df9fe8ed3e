use std::time::Instant;

use piso_types::{IssueOutcome, PendingChallenge, UserId, VerifyOutcome};
use tracing::{debug, trace};

use super::Engine;
use crate::rng::RandomSource;

impl<R: RandomSource> Engine<R> {
    /// Issue an earn-challenge, or report the invite gate.
    ///
    /// Issuing while a challenge is already pending silently replaces it;
    /// the old answer becomes unverifiable. The gated path mutates nothing.
    pub fn issue_challenge(&self, user: UserId) -> IssueOutcome {
        let solved_threshold = self.config.gate_solved_threshold;
        let invites_required = self.config.gate_invites_required;

        // Drawn up front so the account lock never nests the rng lock. A
        // draw discarded on the gated path is harmless.
        let text = self.draw(|rng| {
            rng.challenge_text(&self.config.challenge_alphabet, self.config.challenge_length)
        });

        self.store.mutate(user, |account| {
            if account.challenges_solved >= solved_threshold
                && account.invites_recorded < invites_required
            {
                debug!(
                    %user,
                    solved = account.challenges_solved,
                    invites = account.invites_recorded,
                    "challenge issue gated"
                );
                return IssueOutcome::Gated {
                    solved: account.challenges_solved,
                    invites: account.invites_recorded,
                    invites_required,
                };
            }

            account.pending_challenge = Some(PendingChallenge {
                answer: text.clone(),
                issued_at: Instant::now(),
            });
            debug!(%user, "challenge issued");
            IssueOutcome::Challenge { text }
        })
    }

    /// Verify a plain-text submission against the pending challenge.
    ///
    /// The pending challenge is consumed unconditionally -- matched or not --
    /// before the outcome is produced, so an answer can never be replayed.
    /// With nothing pending this is a silent no-op: the handler fires on
    /// every non-command message.
    pub fn submit_text(&self, user: UserId, text: &str) -> VerifyOutcome {
        let reward = self.draw(|rng| {
            rng.int_in(self.config.challenge_reward_min..=self.config.challenge_reward_max)
        });

        self.store.mutate(user, |account| {
            let Some(pending) = account.pending_challenge.take() else {
                trace!(%user, "text ignored, no pending challenge");
                return VerifyOutcome::NoPending;
            };

            if text.trim().eq_ignore_ascii_case(&pending.answer) {
                account.playable = account.playable.saturating_add(reward);
                account.challenges_solved += 1;
                debug!(
                    %user,
                    reward,
                    solved = account.challenges_solved,
                    "challenge solved"
                );
                VerifyOutcome::Correct {
                    reward,
                    playable: account.playable,
                    challenges_solved: account.challenges_solved,
                }
            } else {
                debug!(%user, "challenge answer incorrect");
                VerifyOutcome::Incorrect
            }
        })
    }
}
