//! Stake amount type.
//!
//! Amounts are represented as fixed-point integers (u128) to avoid
//! floating-point errors. The smallest unit is 1 raw; one whole token is
//! [`STAKE_UNIT`] raw (6 decimal places).

use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::Add;
use thiserror::Error;

/// Raw units per whole stake token.
pub const STAKE_UNIT: u128 = 1_000_000;

/// Why a stake string failed to parse.
///
/// The two cases are deliberately distinct: callers report "not a number"
/// and "not positive" as separate user-facing failures.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
pub enum StakeParseError {
    #[error("stake amount must be a number, not text or symbols")]
    NotANumber,

    #[error("stake amount must be a positive number")]
    NotPositive,
}

/// A staked token amount — endorsement collateral and the skill score unit.
///
/// Internally stored as raw units (u128) for precision.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct StakeAmount(u128);

impl StakeAmount {
    pub const ZERO: Self = Self(0);

    pub fn new(raw: u128) -> Self {
        Self(raw)
    }

    /// Whole tokens to raw units.
    pub fn from_tokens(tokens: u128) -> Self {
        Self(tokens.saturating_mul(STAKE_UNIT))
    }

    pub fn raw(&self) -> u128 {
        self.0
    }

    pub fn is_zero(&self) -> bool {
        self.0 == 0
    }

    pub fn checked_add(self, other: Self) -> Option<Self> {
        self.0.checked_add(other.0).map(Self)
    }

    pub fn saturating_add(self, other: Self) -> Self {
        Self(self.0.saturating_add(other.0))
    }

    /// Parse a positive decimal amount (`"10"`, `"10.5"`, `".5"`).
    ///
    /// Accepts an optional sign and at most one decimal point; fraction
    /// digits beyond the fixed-point scale are truncated. A well-formed
    /// number that is zero or negative parses as [`StakeParseError::NotPositive`],
    /// anything else as [`StakeParseError::NotANumber`].
    pub fn parse(text: &str) -> Result<Self, StakeParseError> {
        let trimmed = text.trim();
        let (negative, digits) = match trimmed.as_bytes().first() {
            Some(&b'-') => (true, &trimmed[1..]),
            Some(&b'+') => (false, &trimmed[1..]),
            _ => (false, trimmed),
        };

        let (int_part, frac_part) = match digits.split_once('.') {
            Some((i, f)) => (i, f),
            None => (digits, ""),
        };
        if int_part.is_empty() && frac_part.is_empty() {
            return Err(StakeParseError::NotANumber);
        }
        if !int_part.bytes().all(|b| b.is_ascii_digit())
            || !frac_part.bytes().all(|b| b.is_ascii_digit())
        {
            return Err(StakeParseError::NotANumber);
        }

        let mut raw: u128 = 0;
        for b in int_part.bytes() {
            raw = raw
                .saturating_mul(10)
                .saturating_add(u128::from(b - b'0'));
        }
        raw = raw.saturating_mul(STAKE_UNIT);

        // Fraction digits past the scale are truncated, matching the
        // permissive numeric input this replaces.
        let mut scale = STAKE_UNIT;
        for b in frac_part.bytes().take(6) {
            scale /= 10;
            raw = raw.saturating_add(u128::from(b - b'0') * scale);
        }

        if negative || raw == 0 {
            return Err(StakeParseError::NotPositive);
        }
        Ok(Self(raw))
    }
}

impl Add for StakeAmount {
    type Output = Self;
    fn add(self, rhs: Self) -> Self {
        Self(self.0 + rhs.0)
    }
}

impl fmt::Display for StakeAmount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let whole = self.0 / STAKE_UNIT;
        let frac = self.0 % STAKE_UNIT;
        if frac == 0 {
            write!(f, "{whole}")
        } else {
            let digits = format!("{frac:06}");
            write!(f, "{whole}.{}", digits.trim_end_matches('0'))
        }
    }
}
