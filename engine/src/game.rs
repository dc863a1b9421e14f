//! One spin-and-settle cycle.

use crate::player::Player;
use crate::wheel::{Color, Wheel};
use rand::Rng;
use tracing::debug;

/// The outcome of one spin.
///
/// `winnings` is the net reporting value for the spin: the summed profit of
/// winning bets minus the stakes of losing bets. The balance mutation happens
/// during settlement, and the two stay synchronized:
/// `balance after the spin == balance before placements + winnings`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Spin {
    pub number: u8,
    pub color: Color,
    pub winnings: f64,
}

/// A single-player roulette game: one wheel, one ledger.
///
/// Stateless beyond composing the two; each call to [`Game::spin_wheel`]
/// drives exactly one full spin-and-settle cycle.
#[derive(Clone, Debug)]
pub struct Game {
    wheel: Wheel,
    player: Player,
}

impl Game {
    pub fn new(player: Player, wheel: Wheel) -> Self {
        Self { wheel, player }
    }

    /// Draw a pocket and settle every pending bet against it.
    ///
    /// Winning bets are credited their profit plus the returned stake.
    /// Losing bets forfeit the stake escrowed at placement, so they only
    /// affect the reported winnings, not the balance. The pending list is
    /// cleared unconditionally, win or lose.
    pub fn spin_wheel<R: Rng>(&mut self, rng: &mut R) -> Spin {
        let number = self.wheel.spin(rng);
        let color = Wheel::color(number);

        let mut winnings = 0.0;
        let mut returned = 0.0;
        for bet in self.player.pending_bets() {
            if bet.is_win(number, color) {
                let payout = bet.payout();
                returned += payout + bet.amount();
                winnings += payout;
            } else {
                winnings -= bet.amount();
            }
        }
        self.player.credit(returned);
        self.player.clear_bets();

        debug!(
            number,
            %color,
            winnings,
            balance = self.player.balance(),
            "spin settled"
        );
        Spin {
            number,
            color,
            winnings,
        }
    }

    /// Replace the wheel between spins, e.g. when stored weights change.
    pub fn set_wheel(&mut self, wheel: Wheel) {
        self.wheel = wheel;
    }

    pub fn wheel(&self) -> &Wheel {
        &self.wheel
    }

    pub fn player(&self) -> &Player {
        &self.player
    }

    pub fn player_mut(&mut self) -> &mut Player {
        &mut self.player
    }
}
