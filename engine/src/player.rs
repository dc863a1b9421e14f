//! Player ledger: a balance plus the bets pending the next spin.

use crate::bet::Bet;
use thiserror::Error;

/// Rejected placement: the stake exceeds the available balance.
///
/// An expected outcome, not an engine failure. Callers decide how to report
/// it; a typical transport layer rejects the whole bet batch.
#[derive(Clone, Copy, Debug, Error, PartialEq)]
#[error("insufficient funds: stake {stake} exceeds balance {balance}")]
pub struct InsufficientFunds {
    pub stake: f64,
    pub balance: f64,
}

/// A player's session ledger.
///
/// The stake of every accepted bet is escrowed immediately, so the balance
/// at any moment already reflects all outstanding risk. Placement is the
/// sole funds-sufficiency gate; settlement never re-checks it.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Player {
    balance: f64,
    bets: Vec<Bet>,
}

impl Player {
    /// A ledger seeded with a starting balance, no bets pending.
    pub fn new(balance: f64) -> Self {
        Self {
            balance,
            bets: Vec::new(),
        }
    }

    /// Escrow the stake and queue the bet for the next spin.
    ///
    /// A rejected placement leaves both the balance and the pending list
    /// untouched; the balance never goes negative through placement.
    pub fn place_bet(&mut self, bet: Bet) -> Result<(), InsufficientFunds> {
        if bet.amount() > self.balance {
            return Err(InsufficientFunds {
                stake: bet.amount(),
                balance: self.balance,
            });
        }
        self.balance -= bet.amount();
        self.bets.push(bet);
        Ok(())
    }

    /// Drop all pending bets. The balance is untouched; escrowed stakes of
    /// losing bets are simply not returned.
    pub fn clear_bets(&mut self) {
        self.bets.clear();
    }

    pub fn balance(&self) -> f64 {
        self.balance
    }

    pub fn pending_bets(&self) -> &[Bet] {
        &self.bets
    }

    /// Settlement credit: winnings plus returned stakes.
    pub(crate) fn credit(&mut self, amount: f64) {
        self.balance += amount;
    }
}
