//! Canonical outcome sets for the standard bet groupings.
//!
//! Every helper excludes 0: the green pocket belongs to no dozen, column,
//! parity, or range group, so all even-money and two-to-one bets lose when
//! the ball lands on zero.

use serde::{Deserialize, Serialize};

/// One of the three dozens on the layout.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Dozen {
    First,
    Second,
    Third,
}

impl Dozen {
    /// From the 1-based table index (1..=3), the way layouts label them.
    pub fn from_index(index: u8) -> Option<Self> {
        match index {
            1 => Some(Self::First),
            2 => Some(Self::Second),
            3 => Some(Self::Third),
            _ => None,
        }
    }

    fn offset(self) -> u8 {
        match self {
            Self::First => 0,
            Self::Second => 12,
            Self::Third => 24,
        }
    }
}

/// One of the three vertical columns on the layout.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Column {
    First,
    Second,
    Third,
}

impl Column {
    /// From the 1-based column index (1..=3).
    pub fn from_index(index: u8) -> Option<Self> {
        match index {
            1 => Some(Self::First),
            2 => Some(Self::Second),
            3 => Some(Self::Third),
            _ => None,
        }
    }

    fn start(self) -> u8 {
        match self {
            Self::First => 1,
            Self::Second => 2,
            Self::Third => 3,
        }
    }
}

/// The twelve pockets of a dozen: 1..=12, 13..=24, or 25..=36.
pub fn dozen(dozen: Dozen) -> [u8; 12] {
    let mut numbers = [0u8; 12];
    for (i, slot) in numbers.iter_mut().enumerate() {
        *slot = dozen.offset() + i as u8 + 1;
    }
    numbers
}

/// The twelve pockets of a vertical column: start, start + 3, ..., start + 33.
pub fn column(column: Column) -> [u8; 12] {
    let mut numbers = [0u8; 12];
    for (i, slot) in numbers.iter_mut().enumerate() {
        *slot = column.start() + 3 * i as u8;
    }
    numbers
}

/// Even pockets 2, 4, ..., 36.
pub fn even() -> [u8; 18] {
    let mut numbers = [0u8; 18];
    for (i, slot) in numbers.iter_mut().enumerate() {
        *slot = 2 * (i as u8 + 1);
    }
    numbers
}

/// Odd pockets 1, 3, ..., 35.
pub fn odd() -> [u8; 18] {
    let mut numbers = [0u8; 18];
    for (i, slot) in numbers.iter_mut().enumerate() {
        *slot = 2 * i as u8 + 1;
    }
    numbers
}

/// Low pockets 1..=18.
pub fn low() -> [u8; 18] {
    let mut numbers = [0u8; 18];
    for (i, slot) in numbers.iter_mut().enumerate() {
        *slot = i as u8 + 1;
    }
    numbers
}

/// High pockets 19..=36.
pub fn high() -> [u8; 18] {
    let mut numbers = [0u8; 18];
    for (i, slot) in numbers.iter_mut().enumerate() {
        *slot = i as u8 + 19;
    }
    numbers
}
