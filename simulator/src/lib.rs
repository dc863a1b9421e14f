//! Batch-trial simulation harness for the roulette engine.
//!
//! A [`Scenario`] describes the shape of a single trial: a starting balance,
//! an optional per-pocket weight vector, and a list of bet requests. Each
//! trial constructs a fresh ledger and fresh bets, spins once, and reports
//! the outcome; no state survives from one trial to the next.
//!
//! Batches run in parallel. Every trial derives its own generator from the
//! batch seed and the trial index, so results are reproducible and
//! independent of scheduling order.

use rand::Rng;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use rayon::prelude::*;
use rondo_engine::{Bet, BetError, BetRequest, Color, Game, InsufficientFunds, Player, Wheel};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::info;

/// A trial failed before the wheel was spun.
#[derive(Clone, Debug, Error, PartialEq)]
pub enum TrialError {
    /// A bet request was malformed; nothing was placed.
    #[error(transparent)]
    Bet(#[from] BetError),
    /// One placement was rejected, so the whole trial is rejected.
    #[error(transparent)]
    Placement(#[from] InsufficientFunds),
    /// The scenario file could not be parsed.
    #[error("invalid scenario: {0}")]
    InvalidScenario(String),
}

/// One simulation scenario: the shape of a single trial.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Scenario {
    pub starting_balance: f64,
    /// Optional per-pocket weight vector; `None` means a uniform wheel.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub weights: Option<Vec<f64>>,
    pub bets: Vec<BetRequest>,
    pub trials: u64,
}

impl Scenario {
    /// Parse a scenario from JSON.
    pub fn from_json(json: &str) -> Result<Self, TrialError> {
        serde_json::from_str(json).map_err(|err| TrialError::InvalidScenario(err.to_string()))
    }

    /// The wheel this scenario spins.
    pub fn wheel(&self) -> Wheel {
        match &self.weights {
            Some(weights) => Wheel::with_weights(weights),
            None => Wheel::uniform(),
        }
    }

    /// Total stake per trial.
    pub fn wagered(&self) -> f64 {
        self.bets.iter().map(|bet| bet.amount).sum()
    }
}

/// The result of one trial.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TrialOutcome {
    pub number: u8,
    pub color: Color,
    pub winnings: f64,
    pub ending_balance: f64,
}

/// Run one trial: fresh ledger, fresh bets, one spin.
///
/// Pure with respect to the scenario: identical inputs and an identical
/// generator state produce an identical outcome.
pub fn run_trial<R: Rng>(
    scenario: &Scenario,
    wheel: &Wheel,
    rng: &mut R,
) -> Result<TrialOutcome, TrialError> {
    let mut player = Player::new(scenario.starting_balance);
    for request in &scenario.bets {
        player.place_bet(Bet::from_request(request)?)?;
    }

    let mut game = Game::new(player, wheel.clone());
    let spin = game.spin_wheel(rng);
    Ok(TrialOutcome {
        number: spin.number,
        color: spin.color,
        winnings: spin.winnings,
        ending_balance: game.player().balance(),
    })
}

/// Accumulated batch statistics.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Stats {
    trials: u64,
    total_net: f64,
    total_net_sq: f64,
    total_wagered: f64,
}

impl Stats {
    pub fn add(&mut self, net: f64, wagered: f64) {
        self.trials += 1;
        self.total_net += net;
        self.total_net_sq += net * net;
        self.total_wagered += wagered;
    }

    pub fn merge(&mut self, other: &Stats) {
        self.trials += other.trials;
        self.total_net += other.total_net;
        self.total_net_sq += other.total_net_sq;
        self.total_wagered += other.total_wagered;
    }

    pub fn trials(&self) -> u64 {
        self.trials
    }

    pub fn mean_net(&self) -> f64 {
        if self.trials == 0 {
            0.0
        } else {
            self.total_net / self.trials as f64
        }
    }

    pub fn mean_wagered(&self) -> f64 {
        if self.trials == 0 {
            0.0
        } else {
            self.total_wagered / self.trials as f64
        }
    }

    /// Expected player loss per unit wagered.
    pub fn house_edge(&self) -> f64 {
        let mean_wagered = self.mean_wagered();
        if mean_wagered == 0.0 {
            0.0
        } else {
            -self.mean_net() / mean_wagered
        }
    }

    /// Standard error of the mean net result.
    pub fn stderr(&self) -> f64 {
        if self.trials <= 1 {
            return 0.0;
        }
        let mean = self.mean_net();
        let variance = (self.total_net_sq / self.trials as f64) - mean * mean;
        let variance = variance.max(0.0);
        (variance / self.trials as f64).sqrt()
    }
}

/// Derive the generator for one trial from the batch seed and trial index.
fn trial_rng(seed: u64, index: u64) -> ChaCha8Rng {
    let mut rng_seed = [0u8; 32];
    rng_seed[..8].copy_from_slice(&seed.to_be_bytes());
    rng_seed[8..16].copy_from_slice(&index.to_be_bytes());
    ChaCha8Rng::from_seed(rng_seed)
}

/// Run a scenario's trials in parallel and fold the statistics.
///
/// Trials are independent: each owns a private ledger, private bets, and a
/// private generator keyed by `(seed, index)`, so the fold is deterministic
/// regardless of how rayon schedules the work.
pub fn run_scenario(scenario: &Scenario, seed: u64) -> Result<Stats, TrialError> {
    info!(trials = scenario.trials, seed, "running scenario");
    let wheel = scenario.wheel();
    let wagered = scenario.wagered();

    // Collect per-trial nets in index order and fold sequentially: folding
    // f64 sums inside the parallel reduction would make the totals depend on
    // rayon's split points.
    let nets = (0..scenario.trials)
        .into_par_iter()
        .map(|index| {
            let mut rng = trial_rng(seed, index);
            run_trial(scenario, &wheel, &mut rng).map(|outcome| outcome.winnings)
        })
        .collect::<Result<Vec<f64>, TrialError>>()?;

    let mut stats = Stats::default();
    for net in nets {
        stats.add(net, wagered);
    }
    Ok(stats)
}
