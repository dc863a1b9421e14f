use criterion::{black_box, criterion_group, criterion_main, Criterion};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use rondo_engine::{Bet, Game, Player, Wheel};

fn full_board(c: &mut Criterion) {
    c.bench_function("spin_full_board", |b| {
        let mut rng = ChaCha8Rng::seed_from_u64(42);
        b.iter(|| {
            let mut player = Player::new(10_000.0);
            for number in 0..=36 {
                player
                    .place_bet(Bet::straight(number, 1.0).unwrap())
                    .unwrap();
            }
            let mut game = Game::new(player, Wheel::uniform());
            black_box(game.spin_wheel(&mut rng))
        })
    });
}

fn weighted_spin(c: &mut Criterion) {
    c.bench_function("weighted_spin", |b| {
        let mut weights = [1.0; 37];
        weights[17] = 5.0;
        let wheel = Wheel::with_weights(&weights);
        let mut rng = ChaCha8Rng::seed_from_u64(42);
        b.iter(|| black_box(wheel.spin(&mut rng)))
    });
}

criterion_group!(benches, full_board, weighted_spin);
criterion_main!(benches);
