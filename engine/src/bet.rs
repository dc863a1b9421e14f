//! Bets and the fixed payout table.
//!
//! A bet pairs a kind (which fixes the payout multiplier) with the set of
//! outcomes it covers. All validation happens at construction, so the
//! settlement loop never sees an unknown kind or an unresolvable target.
//!
//! Payout multipliers (profit per unit staked; the stake is returned
//! separately on a win):
//!
//! | kind     | covers          | pays |
//! |----------|-----------------|------|
//! | straight | 1 number        | 35   |
//! | split    | 2 numbers       | 17   |
//! | street   | 3 numbers       | 11   |
//! | corner   | 4 numbers       | 8    |
//! | line     | 6 numbers       | 5    |
//! | dozen    | 12 numbers      | 2    |
//! | column   | 12 numbers      | 2    |
//! | even_odd | parity set      | 1    |
//! | high_low | 1-18 / 19-36    | 1    |
//! | color    | red/black/green | 1    |

use crate::outcomes::{self, Column, Dozen};
use crate::wheel::Color;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Errors raised while constructing a bet.
#[derive(Clone, Debug, Error, PartialEq)]
pub enum BetError {
    #[error("unknown bet type \"{0}\"")]
    UnknownKind(String),
    #[error("bet amount must be positive and finite (got {0})")]
    InvalidAmount(f64),
    #[error("bet covers no outcomes")]
    EmptyTarget,
    #[error("pocket {0} is not on the wheel")]
    NumberOutOfRange(u8),
    #[error("{kind} bets cover exactly {expected} pockets (got {got})")]
    WrongArity {
        kind: BetKind,
        expected: usize,
        got: usize,
    },
    #[error("{kind} bets take {expected} as their target")]
    TargetMismatch {
        kind: BetKind,
        expected: &'static str,
    },
}

/// Roulette bet kinds.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BetKind {
    Straight,
    Split,
    Street,
    Corner,
    Line,
    Dozen,
    Column,
    EvenOdd,
    HighLow,
    Color,
}

impl BetKind {
    /// Profit multiplier on a win. The stake is returned separately.
    pub fn payout_multiplier(&self) -> f64 {
        match self {
            Self::Straight => 35.0,
            Self::Split => 17.0,
            Self::Street => 11.0,
            Self::Corner => 8.0,
            Self::Line => 5.0,
            Self::Dozen | Self::Column => 2.0,
            Self::EvenOdd | Self::HighLow | Self::Color => 1.0,
        }
    }

    /// The exact pocket count, for kinds where the layout fixes it.
    fn fixed_arity(&self) -> Option<usize> {
        match self {
            Self::Straight => Some(1),
            Self::Split => Some(2),
            Self::Street => Some(3),
            Self::Corner => Some(4),
            Self::Line => Some(6),
            _ => None,
        }
    }

    /// The snake_case wire name, matching [`FromStr`] and serde.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Straight => "straight",
            Self::Split => "split",
            Self::Street => "street",
            Self::Corner => "corner",
            Self::Line => "line",
            Self::Dozen => "dozen",
            Self::Column => "column",
            Self::EvenOdd => "even_odd",
            Self::HighLow => "high_low",
            Self::Color => "color",
        }
    }
}

impl fmt::Display for BetKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for BetKind {
    type Err = BetError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "straight" => Ok(Self::Straight),
            "split" => Ok(Self::Split),
            "street" => Ok(Self::Street),
            "corner" => Ok(Self::Corner),
            "line" => Ok(Self::Line),
            "dozen" => Ok(Self::Dozen),
            "column" => Ok(Self::Column),
            "even_odd" => Ok(Self::EvenOdd),
            "high_low" => Ok(Self::HighLow),
            "color" => Ok(Self::Color),
            other => Err(BetError::UnknownKind(other.to_string())),
        }
    }
}

/// The set of outcomes a bet covers.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Target {
    /// Pockets covered by a numeric bet.
    Numbers(BTreeSet<u8>),
    /// Colors covered by a color bet.
    Colors(BTreeSet<Color>),
}

/// One outcome selector in a caller-supplied request: a pocket number or a
/// color name.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Choice {
    Number(u8),
    Color(Color),
}

/// Caller-supplied choices: a single selector or a list. A scalar is
/// normalized into a one-element set.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Choices {
    One(Choice),
    Many(Vec<Choice>),
}

impl Choices {
    fn iter(&self) -> std::slice::Iter<'_, Choice> {
        match self {
            Self::One(choice) => std::slice::from_ref(choice).iter(),
            Self::Many(choices) => choices.iter(),
        }
    }
}

/// A caller-supplied `(bet_type, amount, choices)` tuple: the in-process
/// surface an outer transport layer (or a simulation scenario) submits.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct BetRequest {
    pub bet_type: String,
    pub amount: f64,
    pub choices: Choices,
}

/// A single validated wager.
#[derive(Clone, Debug, PartialEq)]
pub struct Bet {
    kind: BetKind,
    amount: f64,
    target: Target,
}

impl Bet {
    /// Construct a validated bet.
    ///
    /// The amount must be positive and finite, the target non-empty, and
    /// every pocket on the wheel. Fixed-arity kinds (straight through line)
    /// must cover exactly their layout arity. Group kinds (dozen, column,
    /// even_odd, high_low) accept any non-empty pocket set: callers normally
    /// pass the canonical sets from [`outcomes`], but custom house-rule
    /// groupings remain expressible.
    pub fn new(kind: BetKind, amount: f64, target: Target) -> Result<Self, BetError> {
        if !amount.is_finite() || amount <= 0.0 {
            return Err(BetError::InvalidAmount(amount));
        }
        match (&kind, &target) {
            (BetKind::Color, Target::Colors(colors)) => {
                if colors.is_empty() {
                    return Err(BetError::EmptyTarget);
                }
            }
            (BetKind::Color, Target::Numbers(_)) => {
                return Err(BetError::TargetMismatch {
                    kind,
                    expected: "colors",
                });
            }
            (_, Target::Colors(_)) => {
                return Err(BetError::TargetMismatch {
                    kind,
                    expected: "pocket numbers",
                });
            }
            (_, Target::Numbers(numbers)) => {
                if numbers.is_empty() {
                    return Err(BetError::EmptyTarget);
                }
                if let Some(&number) = numbers.iter().find(|number| **number > 36) {
                    return Err(BetError::NumberOutOfRange(number));
                }
                if let Some(expected) = kind.fixed_arity() {
                    if numbers.len() != expected {
                        return Err(BetError::WrongArity {
                            kind,
                            expected,
                            got: numbers.len(),
                        });
                    }
                }
            }
        }
        Ok(Self {
            kind,
            amount,
            target,
        })
    }

    /// Validate and convert a caller-supplied request.
    ///
    /// Fails fast on an unknown bet type, a non-positive amount, or choices
    /// of the wrong family for the kind, so a malformed request never
    /// reaches placement.
    pub fn from_request(request: &BetRequest) -> Result<Self, BetError> {
        let kind: BetKind = request.bet_type.parse()?;
        let target = if kind == BetKind::Color {
            let mut colors = BTreeSet::new();
            for choice in request.choices.iter() {
                match choice {
                    Choice::Color(color) => {
                        colors.insert(*color);
                    }
                    Choice::Number(_) => {
                        return Err(BetError::TargetMismatch {
                            kind,
                            expected: "colors",
                        })
                    }
                }
            }
            Target::Colors(colors)
        } else {
            let mut numbers = BTreeSet::new();
            for choice in request.choices.iter() {
                match choice {
                    Choice::Number(number) => {
                        numbers.insert(*number);
                    }
                    Choice::Color(_) => {
                        return Err(BetError::TargetMismatch {
                            kind,
                            expected: "pocket numbers",
                        })
                    }
                }
            }
            Target::Numbers(numbers)
        };
        Self::new(kind, request.amount, target)
    }

    /// A straight bet on a single pocket.
    pub fn straight(number: u8, amount: f64) -> Result<Self, BetError> {
        Self::numeric(BetKind::Straight, amount, &[number])
    }

    /// A split bet on two adjacent pockets.
    pub fn split(numbers: [u8; 2], amount: f64) -> Result<Self, BetError> {
        Self::numeric(BetKind::Split, amount, &numbers)
    }

    /// A street bet on a row of three.
    pub fn street(numbers: [u8; 3], amount: f64) -> Result<Self, BetError> {
        Self::numeric(BetKind::Street, amount, &numbers)
    }

    /// A corner bet on a block of four.
    pub fn corner(numbers: [u8; 4], amount: f64) -> Result<Self, BetError> {
        Self::numeric(BetKind::Corner, amount, &numbers)
    }

    /// A line bet on two adjacent rows.
    pub fn line(numbers: [u8; 6], amount: f64) -> Result<Self, BetError> {
        Self::numeric(BetKind::Line, amount, &numbers)
    }

    /// A dozen bet with its canonical pocket set.
    pub fn dozen(dozen: Dozen, amount: f64) -> Result<Self, BetError> {
        Self::numeric(BetKind::Dozen, amount, &outcomes::dozen(dozen))
    }

    /// A column bet with its canonical pocket set.
    pub fn column(column: Column, amount: f64) -> Result<Self, BetError> {
        Self::numeric(BetKind::Column, amount, &outcomes::column(column))
    }

    /// An even-parity bet.
    pub fn even(amount: f64) -> Result<Self, BetError> {
        Self::numeric(BetKind::EvenOdd, amount, &outcomes::even())
    }

    /// An odd-parity bet.
    pub fn odd(amount: f64) -> Result<Self, BetError> {
        Self::numeric(BetKind::EvenOdd, amount, &outcomes::odd())
    }

    /// A low bet (1-18).
    pub fn low(amount: f64) -> Result<Self, BetError> {
        Self::numeric(BetKind::HighLow, amount, &outcomes::low())
    }

    /// A high bet (19-36).
    pub fn high(amount: f64) -> Result<Self, BetError> {
        Self::numeric(BetKind::HighLow, amount, &outcomes::high())
    }

    /// A color bet on a single color.
    pub fn color(color: Color, amount: f64) -> Result<Self, BetError> {
        let mut colors = BTreeSet::new();
        colors.insert(color);
        Self::new(BetKind::Color, amount, Target::Colors(colors))
    }

    fn numeric(kind: BetKind, amount: f64, numbers: &[u8]) -> Result<Self, BetError> {
        Self::new(
            kind,
            amount,
            Target::Numbers(numbers.iter().copied().collect()),
        )
    }

    /// Whether this bet wins against a drawn pocket.
    ///
    /// A pure membership test: color membership for color bets, pocket
    /// membership for everything else.
    pub fn is_win(&self, number: u8, color: Color) -> bool {
        match &self.target {
            Target::Colors(colors) => colors.contains(&color),
            Target::Numbers(numbers) => numbers.contains(&number),
        }
    }

    /// Profit on a win, stake excluded.
    pub fn payout(&self) -> f64 {
        self.amount * self.kind.payout_multiplier()
    }

    pub fn kind(&self) -> BetKind {
        self.kind
    }

    pub fn amount(&self) -> f64 {
        self.amount
    }

    pub fn target(&self) -> &Target {
        &self.target
    }
}
