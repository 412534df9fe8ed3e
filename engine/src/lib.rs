//! piso execution engine.
//!
//! This crate contains the ledger and game settlement logic behind the chat
//! transport: the per-user [`store::AccountStore`], the challenge / invite /
//! game / withdrawal services on [`engine::Engine`], and the
//! [`rng::RandomSource`] seam that makes every probability-dependent path
//! deterministic under test.
//!
//! ## Concurrency requirements
//! - Every account mutation goes through `AccountStore::mutate`, which holds
//!   that account's lock for the whole check-then-act sequence. Two
//!   simultaneous bets can therefore never drive a balance negative.
//! - No operation touches two accounts, so no cross-account locking exists.
//! - All randomness for an operation is drawn *before* the account lock is
//!   taken; the engine never nests locks and never blocks inside one.
//!
//! The primary entrypoint is [`engine::Engine::handle`].

pub mod command;
pub mod config;
pub mod engine;
pub mod games;
pub mod rng;
pub mod store;

pub use command::{Command, CommandError};
pub use config::EngineConfig;
pub use engine::Engine;
pub use rng::{RandomSource, SeededRandom, StdRandom};
pub use store::AccountStore;

#[cfg(test)]
mod mocks;

#[cfg(test)]
mod conservation_tests;
