//! Cross-module settlement tests: concrete payout cases, the accounting
//! invariants, and the statistical behavior of the fallback draw.

use crate::bet::Bet;
use crate::game::Game;
use crate::outcomes::Dozen;
use crate::player::Player;
use crate::wheel::{Color, Wheel, POCKETS};
use proptest::prelude::*;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

/// A wheel that always lands on `number`.
fn forced(number: u8) -> Wheel {
    let mut weights = [0.0; POCKETS];
    weights[number as usize] = 1.0;
    Wheel::with_weights(&weights)
}

fn rng() -> ChaCha8Rng {
    ChaCha8Rng::seed_from_u64(0xD1CE)
}

#[test]
fn test_straight_win_pays_35_to_1() {
    let mut player = Player::new(100.0);
    player.place_bet(Bet::straight(17, 10.0).unwrap()).unwrap();
    assert_eq!(player.balance(), 90.0);

    let mut game = Game::new(player, forced(17));
    let spin = game.spin_wheel(&mut rng());
    assert_eq!(spin.number, 17);
    assert_eq!(spin.color, Color::Black);
    assert_eq!(spin.winnings, 350.0);
    // Profit plus returned stake: 90 + 350 + 10.
    assert_eq!(game.player().balance(), 450.0);
}

#[test]
fn test_straight_loss_forfeits_stake() {
    let mut player = Player::new(100.0);
    player.place_bet(Bet::straight(5, 10.0).unwrap()).unwrap();

    let mut game = Game::new(player, forced(17));
    let spin = game.spin_wheel(&mut rng());
    assert_eq!(spin.winnings, -10.0);
    assert_eq!(game.player().balance(), 90.0);
}

#[test]
fn test_color_win_pays_even_money() {
    let mut player = Player::new(100.0);
    player
        .place_bet(Bet::color(Color::Red, 20.0).unwrap())
        .unwrap();

    let mut game = Game::new(player, forced(1));
    let spin = game.spin_wheel(&mut rng());
    assert_eq!(spin.color, Color::Red);
    assert_eq!(spin.winnings, 20.0);
    // 80 escrowed balance plus 20 profit plus 20 returned stake.
    assert_eq!(game.player().balance(), 120.0);
}

#[test]
fn test_zero_loses_every_dozen() {
    let mut player = Player::new(100.0);
    player
        .place_bet(Bet::dozen(Dozen::First, 5.0).unwrap())
        .unwrap();

    let mut game = Game::new(player, forced(0));
    let spin = game.spin_wheel(&mut rng());
    assert_eq!(spin.number, 0);
    assert_eq!(spin.color, Color::Green);
    assert_eq!(spin.winnings, -5.0);
    assert_eq!(game.player().balance(), 95.0);
}

#[test]
fn test_mixed_bets_settle_in_one_pass() {
    let mut player = Player::new(100.0);
    player.place_bet(Bet::straight(17, 10.0).unwrap()).unwrap();
    player
        .place_bet(Bet::color(Color::Black, 20.0).unwrap())
        .unwrap();
    player
        .place_bet(Bet::dozen(Dozen::First, 5.0).unwrap())
        .unwrap();
    assert_eq!(player.balance(), 65.0);

    // 17 is black and sits in the second dozen.
    let mut game = Game::new(player, forced(17));
    let spin = game.spin_wheel(&mut rng());
    assert_eq!(spin.winnings, 350.0 + 20.0 - 5.0);
    assert_eq!(game.player().balance(), 100.0 + spin.winnings);
    assert!(game.player().pending_bets().is_empty());
}

proptest! {
    /// For any accepted bet list and any spin,
    /// `final_balance == starting_balance + winnings`.
    #[test]
    fn balance_is_conserved(
        seed in any::<u64>(),
        bets in proptest::collection::vec(arb_bet(), 0..20),
    ) {
        let starting_balance = 1_000.0;
        let mut player = Player::new(starting_balance);
        for bet in bets {
            // Amounts are capped so the full list always fits the balance.
            player.place_bet(bet).unwrap();
        }

        let mut game = Game::new(player, Wheel::uniform());
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        let spin = game.spin_wheel(&mut rng);

        let expected = starting_balance + spin.winnings;
        prop_assert!((game.player().balance() - expected).abs() < 1e-6);
        prop_assert!(game.player().pending_bets().is_empty());
    }
}

fn arb_bet() -> impl Strategy<Value = Bet> {
    prop_oneof![
        (0u8..=36, 1u32..=50).prop_map(|(n, a)| Bet::straight(n, a as f64).unwrap()),
        (1u32..=50).prop_map(|a| Bet::even(a as f64).unwrap()),
        (1u32..=50).prop_map(|a| Bet::low(a as f64).unwrap()),
        (1u8..=3, 1u32..=50)
            .prop_map(|(d, a)| Bet::dozen(Dozen::from_index(d).unwrap(), a as f64).unwrap()),
        (1u32..=50).prop_map(|a| Bet::color(Color::Red, a as f64).unwrap()),
    ]
}

#[test]
fn test_all_zero_weights_draw_uniformly() {
    // Chi-square goodness of fit against the uniform distribution over the
    // 37 pockets. With 1,000 expected hits per pocket the statistic has mean
    // 36 for a healthy generator; 100 is far beyond any plausible value.
    let wheel = Wheel::with_weights(&[0.0; POCKETS]);
    let mut rng = ChaCha8Rng::seed_from_u64(7);

    let spins = 37_000usize;
    let mut counts = [0u32; POCKETS];
    for _ in 0..spins {
        counts[wheel.spin(&mut rng) as usize] += 1;
    }

    let expected = spins as f64 / POCKETS as f64;
    let chi_square: f64 = counts
        .iter()
        .map(|&count| {
            let delta = count as f64 - expected;
            delta * delta / expected
        })
        .sum();
    assert!(
        chi_square < 100.0,
        "chi-square {} exceeds tolerance",
        chi_square
    );
    assert!(counts.iter().all(|&count| count > 0));
}

#[test]
fn test_weighted_draw_tracks_weights() {
    // Pocket 7 carries nine times the weight of every other pocket, so it
    // should land roughly 9/45ths of the time.
    let mut weights = [1.0; POCKETS];
    weights[7] = 9.0;
    let wheel = Wheel::with_weights(&weights);
    let mut rng = ChaCha8Rng::seed_from_u64(11);

    let spins = 45_000usize;
    let mut hits = 0usize;
    for _ in 0..spins {
        if wheel.spin(&mut rng) == 7 {
            hits += 1;
        }
    }

    let expected = spins as f64 * 9.0 / 45.0;
    let tolerance = expected * 0.10;
    assert!(
        (hits as f64 - expected).abs() < tolerance,
        "pocket 7 hit {} times, expected ~{}",
        hits,
        expected
    );
}
