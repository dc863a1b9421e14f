//! Single-spin roulette resolution engine.
//!
//! The engine turns a list of placed bets plus one weighted wheel draw into a
//! settled balance: a [`Wheel`] with per-pocket weights, a validated [`Bet`]
//! taxonomy with the standard payout table, a [`Player`] ledger that escrows
//! stakes at placement, and a [`Game`] that drives one spin-and-settle cycle.
//!
//! ## Determinism requirements
//! - No wall-clock time inside the engine.
//! - No global randomness: every draw takes a caller-supplied [`rand::Rng`],
//!   so sessions and simulation trials are reproducible under a seeded
//!   generator.
//! - Target sets iterate in a fixed order; no hash-based collection order
//!   influences settlement.
//!
//! ## Ownership model
//! Each session (or simulation trial) owns a private `Wheel`/`Player`/`Game`.
//! Nothing is shared, so concurrent sessions need no locking, and a fresh
//! ledger plus fresh bets per trial guarantees no state bleeds across trials.
//!
//! ## Accounting invariant
//! Stakes are escrowed when a bet is placed, so the balance always reflects
//! outstanding risk. Settlement only credits winners, and for any spin:
//! `balance after == balance before placements + winnings`.

pub mod bet;
pub mod game;
pub mod outcomes;
pub mod player;
pub mod wheel;

#[cfg(test)]
mod settlement_tests;

pub use bet::{Bet, BetError, BetKind, BetRequest, Choice, Choices, Target};
pub use game::{Game, Spin};
pub use outcomes::{Column, Dozen};
pub use player::{InsufficientFunds, Player};
pub use wheel::{Color, Wheel, POCKETS};
