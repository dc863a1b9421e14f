//! Weighted roulette wheel.
//!
//! A European wheel holds pockets 0..=36. Each pocket carries a non-negative
//! draw weight and spins sample a pocket with probability proportional to its
//! weight. Weights are relative; they need not sum to one.
//!
//! Malformed weight configuration is never fatal at this layer: a vector of
//! the wrong shape normalizes to a uniform wheel, and an all-zero vector
//! (for which a weighted draw is undefined) degrades to a uniform draw.

use rand::distributions::{Distribution, WeightedIndex};
use rand::Rng;
use serde::{Deserialize, Serialize};
use std::fmt;
use tracing::warn;

/// Number of pockets on a European wheel (0 through 36).
pub const POCKETS: usize = 37;

/// Red numbers on a roulette wheel.
const RED_NUMBERS: [u8; 18] = [1, 3, 5, 7, 9, 12, 14, 16, 18, 19, 21, 23, 25, 27, 30, 32, 34, 36];

/// Pocket colors.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Color {
    Green,
    Red,
    Black,
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Green => write!(f, "green"),
            Self::Red => write!(f, "red"),
            Self::Black => write!(f, "black"),
        }
    }
}

/// A roulette wheel with per-pocket draw weights.
///
/// The weight vector always holds exactly [`POCKETS`] entries; the length
/// invariant is enforced once at construction, never re-checked mid-draw.
#[derive(Clone, Debug, PartialEq)]
pub struct Wheel {
    weights: [f64; POCKETS],
}

impl Default for Wheel {
    fn default() -> Self {
        Self::uniform()
    }
}

impl Wheel {
    /// A fair wheel: every pocket weighted 1.0.
    pub fn uniform() -> Self {
        Self {
            weights: [1.0; POCKETS],
        }
    }

    /// Build a wheel from a caller-supplied weight vector.
    ///
    /// The vector must contain exactly 37 finite, non-negative entries.
    /// Anything else normalizes to a uniform wheel with a warning; stored
    /// per-account configuration must never brick a session.
    pub fn with_weights(weights: &[f64]) -> Self {
        if weights.len() != POCKETS {
            warn!(
                len = weights.len(),
                "weight vector has wrong length, using uniform weights"
            );
            return Self::uniform();
        }
        if weights.iter().any(|w| !w.is_finite() || *w < 0.0) {
            warn!("weight vector has negative or non-finite entries, using uniform weights");
            return Self::uniform();
        }
        let mut array = [0.0; POCKETS];
        array.copy_from_slice(weights);
        Self { weights: array }
    }

    /// Build a wheel from optional stored configuration.
    pub fn from_config(weights: Option<&[f64]>) -> Self {
        match weights {
            Some(weights) => Self::with_weights(weights),
            None => Self::uniform(),
        }
    }

    /// The color of a pocket. `number` must be a valid pocket (0..=36),
    /// which every draw from this wheel is.
    pub fn color(number: u8) -> Color {
        if number == 0 {
            Color::Green
        } else if RED_NUMBERS.contains(&number) {
            Color::Red
        } else {
            Color::Black
        }
    }

    /// Draw one pocket with probability proportional to its weight.
    ///
    /// If every weight is zero the weighted draw is undefined and the spin
    /// falls back to a uniform draw over all pockets.
    pub fn spin<R: Rng>(&self, rng: &mut R) -> u8 {
        match WeightedIndex::new(&self.weights) {
            Ok(dist) => dist.sample(rng) as u8,
            Err(_) => rng.gen_range(0..POCKETS as u8),
        }
    }

    /// The current weight vector.
    pub fn weights(&self) -> &[f64; POCKETS] {
        &self.weights
    }
}
