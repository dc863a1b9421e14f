//! Estimate the house edge of the standard bet types on a uniform wheel.
//!
//! Usage:
//!   cargo run --release --example house_edge [scenario.json]
//!
//! Without an argument, sweeps one representative bet of every kind. With a
//! scenario file, runs that scenario and prints a single row.

use anyhow::Result;
use rondo_engine::{outcomes, BetRequest, Choice, Choices, Color, Column, Dozen};
use rondo_simulator::{run_scenario, Scenario, Stats};

const TRIALS: u64 = 50_000;
const BASE_BET: f64 = 100.0;
const SEED: u64 = 7;

fn request(bet_type: &str, amount: f64, choices: Choices) -> BetRequest {
    BetRequest {
        bet_type: bet_type.to_string(),
        amount,
        choices,
    }
}

fn numbers(numbers: &[u8]) -> Choices {
    Choices::Many(numbers.iter().map(|n| Choice::Number(*n)).collect())
}

fn print_row(label: &str, stats: &Stats) {
    // Edge and its standard error, both per unit wagered.
    let edge = stats.house_edge();
    let edge_err = if stats.mean_wagered() == 0.0 {
        0.0
    } else {
        stats.stderr() / stats.mean_wagered()
    };
    println!(
        "{label:<22} {edge:>8.4} ± {edge_err:.4}  ({} trials)",
        stats.trials()
    );
}

fn main() -> Result<()> {
    tracing_subscriber::fmt::init();

    if let Some(path) = std::env::args().nth(1) {
        let scenario = Scenario::from_json(&std::fs::read_to_string(&path)?)?;
        let stats = run_scenario(&scenario, SEED)?;
        print_row(&path, &stats);
        return Ok(());
    }

    let sweeps = vec![
        (
            "straight 17",
            request("straight", BASE_BET, Choices::One(Choice::Number(17))),
        ),
        ("split 14/17", request("split", BASE_BET, numbers(&[14, 17]))),
        (
            "street 16-18",
            request("street", BASE_BET, numbers(&[16, 17, 18])),
        ),
        (
            "corner 16/17/19/20",
            request("corner", BASE_BET, numbers(&[16, 17, 19, 20])),
        ),
        (
            "line 13-18",
            request("line", BASE_BET, numbers(&[13, 14, 15, 16, 17, 18])),
        ),
        (
            "dozen first",
            request("dozen", BASE_BET, numbers(&outcomes::dozen(Dozen::First))),
        ),
        (
            "column first",
            request(
                "column",
                BASE_BET,
                numbers(&outcomes::column(Column::First)),
            ),
        ),
        (
            "even",
            request("even_odd", BASE_BET, numbers(&outcomes::even())),
        ),
        (
            "low",
            request("high_low", BASE_BET, numbers(&outcomes::low())),
        ),
        (
            "red",
            request("color", BASE_BET, Choices::One(Choice::Color(Color::Red))),
        ),
    ];

    println!("house edge per unit wagered (uniform wheel, seed {SEED})");
    for (label, bet) in sweeps {
        let scenario = Scenario {
            starting_balance: BASE_BET * 10.0,
            weights: None,
            bets: vec![bet],
            trials: TRIALS,
        };
        let stats = run_scenario(&scenario, SEED)?;
        print_row(label, &stats);
    }

    Ok(())
}
