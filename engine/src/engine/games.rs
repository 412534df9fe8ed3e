use piso_types::constants::REEL_COUNT;
use piso_types::{
    BalanceReport, DiceReport, GameOutcome, GameRefusal, Parity, ReelSymbol, SpinReport, UserId,
};
use tracing::debug;

use super::Engine;
use crate::games::{self, dice, reels};
use crate::rng::RandomSource;

impl<R: RandomSource> Engine<R> {
    /// Settle one parity-dice round.
    ///
    /// The sufficient-funds check and the settlement delta are one atomic
    /// step under the account lock; two rapid-fire bets from the same user
    /// serialize and cannot drive the balance negative. The stake is only
    /// capped by the current playable balance.
    pub fn play_dice(
        &self,
        user: UserId,
        guess: Parity,
        stake: u64,
    ) -> Result<DiceReport, GameRefusal> {
        let roll = self.draw(|rng| rng.int_in(1..=self.config.dice_sides));
        let round = dice::evaluate(guess, roll);
        let winnings = round
            .won
            .then(|| dice::net_winnings(stake, self.config.dice_win_multiplier));

        self.store.mutate(user, |account| {
            if account.playable < stake {
                return Err(GameRefusal::InsufficientFunds {
                    available: account.playable,
                    required: stake,
                });
            }

            games::settle(account, stake, winnings);
            debug!(
                %user,
                stake,
                roll = round.roll,
                parity = %round.parity,
                won = round.won,
                "dice settled"
            );
            Ok(DiceReport {
                guess,
                roll: round.roll,
                parity: round.parity,
                outcome: match winnings {
                    Some(winnings) => GameOutcome::Win { winnings },
                    None => GameOutcome::Loss { lost: stake },
                },
                balances: BalanceReport {
                    playable: account.playable,
                    withdrawable: account.withdrawable,
                },
            })
        })
    }

    /// Settle one three-reel spin.
    ///
    /// The final reels are drawn and settled before any rendering happens;
    /// a transport that animates the spin derives its frames from
    /// `SpinReport::reveal_frames`, never from extra draws.
    pub fn play_spin(&self, user: UserId, stake: u64) -> Result<SpinReport, GameRefusal> {
        let symbols = ReelSymbol::ALL;
        let spun: [ReelSymbol; REEL_COUNT] = self.draw(|rng| {
            [(); REEL_COUNT].map(|()| symbols[rng.pick_index(symbols.len())])
        });
        let class = reels::classify(&spun);
        let winnings = reels::winnings(
            class,
            stake,
            self.config.spin_jackpot_multiplier,
            self.config.spin_partial_multiplier,
        );

        self.store.mutate(user, |account| {
            if account.playable < stake {
                return Err(GameRefusal::InsufficientFunds {
                    available: account.playable,
                    required: stake,
                });
            }

            games::settle(account, stake, winnings);
            debug!(%user, stake, ?spun, ?class, "spin settled");
            Ok(SpinReport {
                reels: spun,
                class,
                outcome: match winnings {
                    Some(winnings) => GameOutcome::Win { winnings },
                    None => GameOutcome::Loss { lost: stake },
                },
                balances: BalanceReport {
                    playable: account.playable,
                    withdrawable: account.withdrawable,
                },
            })
        })
    }
}
