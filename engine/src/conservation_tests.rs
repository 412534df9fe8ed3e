//! Conservation of funds: for any sequence of game rounds, the final
//! balances equal the initial balances plus the sum of the reported
//! per-round deltas. No round may leak or fabricate currency.

use piso_types::{GameOutcome, GameRefusal, Parity, SpinClass, UserId};
use proptest::prelude::*;

use crate::rng::SeededRandom;
use crate::{Engine, EngineConfig};

const STARTING_PLAYABLE: u64 = 500;

#[derive(Clone, Debug)]
enum Round {
    Dice { even: bool, stake: u64 },
    Spin { stake: u64 },
}

fn round_strategy() -> impl Strategy<Value = Round> {
    prop_oneof![
        (any::<bool>(), 1u64..=120).prop_map(|(even, stake)| Round::Dice { even, stake }),
        (1u64..=120).prop_map(|stake| Round::Spin { stake }),
    ]
}

fn apply_outcome(outcome: GameOutcome, playable: &mut u64, withdrawable: &mut u64) {
    match outcome {
        GameOutcome::Win { winnings } => {
            *playable += winnings;
            *withdrawable += winnings;
        }
        GameOutcome::Loss { lost } => {
            *playable -= lost;
        }
    }
}

proptest! {
    #[test]
    fn conservation_holds_over_mixed_sequences(
        seed in any::<u64>(),
        rounds in proptest::collection::vec(round_strategy(), 1..64),
    ) {
        let engine = Engine::new(EngineConfig::default(), SeededRandom::from_seed(seed));
        let user = UserId(1);
        engine
            .store()
            .mutate(user, |account| account.playable = STARTING_PLAYABLE);

        let mut playable = STARTING_PLAYABLE;
        let mut withdrawable = 0u64;

        for round in &rounds {
            match round {
                Round::Dice { even, stake } => {
                    let guess = if *even { Parity::Even } else { Parity::Odd };
                    match engine.play_dice(user, guess, *stake) {
                        Ok(report) => {
                            // A dice win credits exactly the stake to each balance.
                            if let GameOutcome::Win { winnings } = report.outcome {
                                prop_assert_eq!(winnings, *stake);
                            }
                            apply_outcome(report.outcome, &mut playable, &mut withdrawable);
                        }
                        Err(GameRefusal::InsufficientFunds { available, required }) => {
                            prop_assert_eq!(available, playable);
                            prop_assert_eq!(required, *stake);
                            prop_assert!(available < required);
                        }
                    }
                }
                Round::Spin { stake } => {
                    match engine.play_spin(user, *stake) {
                        Ok(report) => {
                            // Winnings follow the class multiplier exactly.
                            match (report.class, report.outcome) {
                                (SpinClass::Jackpot, GameOutcome::Win { winnings }) => {
                                    prop_assert_eq!(winnings, stake * 5)
                                }
                                (SpinClass::PartialMatch, GameOutcome::Win { winnings }) => {
                                    prop_assert_eq!(winnings, stake * 2)
                                }
                                (SpinClass::NoMatch, GameOutcome::Loss { lost }) => {
                                    prop_assert_eq!(lost, *stake)
                                }
                                (class, outcome) => {
                                    return Err(TestCaseError::fail(format!(
                                        "impossible class/outcome pair: {class:?} / {outcome:?}"
                                    )))
                                }
                            }
                            apply_outcome(report.outcome, &mut playable, &mut withdrawable);
                        }
                        Err(GameRefusal::InsufficientFunds { available, required }) => {
                            prop_assert_eq!(available, playable);
                            prop_assert_eq!(required, *stake);
                            prop_assert!(available < required);
                        }
                    }
                }
            }

            // After every round the engine's view matches the replayed ledger,
            // and unsigned balances can never have gone negative.
            let balances = engine.balance(user);
            prop_assert_eq!(balances.playable, playable);
            prop_assert_eq!(balances.withdrawable, withdrawable);
        }
    }
}
