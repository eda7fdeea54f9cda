//! Dice-roll specifications.
//!
//! A [`RollSpec`] is the typed form of a roll expression such as `2d6+1d4-3`:
//! an ordered, non-empty list of signed terms. A term whose die is `1` is a
//! flat modifier; it contributes its count directly.

use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// The sign a roll term contributes with.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Sign {
    /// Added to the total.
    Plus,
    /// Subtracted from the total.
    Minus,
}

impl Sign {
    /// Parses a sign from its source character.
    #[must_use]
    pub const fn from_char(c: char) -> Option<Self> {
        match c {
            '+' => Some(Self::Plus),
            '-' => Some(Self::Minus),
            _ => None,
        }
    }

    /// Returns the source character for this sign.
    #[must_use]
    pub const fn as_char(self) -> char {
        match self {
            Self::Plus => '+',
            Self::Minus => '-',
        }
    }

    /// Applies the sign to a magnitude.
    #[must_use]
    pub const fn apply(self, value: i64) -> i64 {
        match self {
            Self::Plus => value,
            Self::Minus => -value,
        }
    }
}

impl fmt::Display for Sign {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_char())
    }
}

/// One signed term of a roll: `count` dice with `die` faces.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct RollTerm {
    /// Number of dice (or the flat value when `die == 1`).
    pub count: u32,
    /// Number of faces; `1` marks a flat modifier.
    pub die: u32,
    /// Whether the term is added or subtracted.
    pub sign: Sign,
}

impl RollTerm {
    /// Face counts the roll grammar accepts after `d`.
    pub const FACES: [u32; 7] = [4, 6, 8, 10, 12, 20, 100];

    /// Creates a term of `count` dice with `die` faces.
    #[must_use]
    pub const fn new(count: u32, die: u32, sign: Sign) -> Self {
        Self { count, die, sign }
    }

    /// Creates a flat modifier term.
    #[must_use]
    pub const fn flat(value: u32, sign: Sign) -> Self {
        Self::new(value, 1, sign)
    }

    /// Returns true if this term is a flat modifier rather than a die.
    #[must_use]
    pub const fn is_flat(&self) -> bool {
        self.die == 1
    }

    /// Signed contribution when every die shows `face`.
    fn contribution_with(&self, face: u32) -> i64 {
        self.sign.apply(i64::from(self.count) * i64::from(face))
    }
}

impl fmt::Display for RollTerm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_flat() {
            write!(f, "{}", self.count)
        } else if self.count == 1 {
            write!(f, "d{}", self.die)
        } else {
            write!(f, "{}d{}", self.count, self.die)
        }
    }
}

/// A complete roll expression.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct RollSpec {
    terms: Vec<RollTerm>,
}

impl RollSpec {
    /// Creates a roll from its terms. Returns `None` for an empty list.
    #[must_use]
    pub fn from_terms(terms: Vec<RollTerm>) -> Option<Self> {
        if terms.is_empty() {
            None
        } else {
            Some(Self { terms })
        }
    }

    /// The default check roll, a single `d20`.
    #[must_use]
    pub fn d20() -> Self {
        Self {
            terms: vec![RollTerm::new(1, 20, Sign::Plus)],
        }
    }

    /// Returns the terms in source order.
    #[must_use]
    pub fn terms(&self) -> &[RollTerm] {
        &self.terms
    }

    /// Total number of physical dice (flat modifiers excluded).
    #[must_use]
    pub fn dice_count(&self) -> u64 {
        self.terms
            .iter()
            .filter(|t| !t.is_flat())
            .map(|t| u64::from(t.count))
            .sum()
    }

    /// Total when every die shows its lowest face.
    #[must_use]
    pub fn lowest_roll_total(&self) -> i64 {
        self.terms.iter().map(|t| t.contribution_with(1)).sum()
    }

    /// Total when every die shows its highest face.
    #[must_use]
    pub fn highest_roll_total(&self) -> i64 {
        self.terms.iter().map(|t| t.contribution_with(t.die)).sum()
    }
}

impl fmt::Display for RollSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, term) in self.terms.iter().enumerate() {
            if i > 0 || term.sign == Sign::Minus {
                write!(f, "{}", term.sign)?;
            }
            write!(f, "{term}")?;
        }
        Ok(())
    }
}
