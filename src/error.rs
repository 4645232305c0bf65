//! Error types for configuration boundaries.
//!
//! The engine itself never fails: illegal decisions downgrade and an
//! exhausted shoe reshuffles. These errors only surface where rules cross a
//! trust boundary, such as CLI input.

use std::num::ParseIntError;

use thiserror::Error;

/// Errors reported when validating table rules.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum RulesError {
    /// The shoe must hold at least one deck.
    #[error("shoe must hold at least one deck")]
    NoDecks,
    /// Blackjack payout denominator is zero.
    #[error("blackjack payout denominator is zero")]
    ZeroDenominator,
}

/// Errors that can occur when parsing a payout ratio from text.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParsePayoutError {
    /// Input is not of the form `N:D`.
    #[error("expected a ratio of the form N:D, e.g. 3:2")]
    MissingSeparator,
    /// Numerator or denominator is not a number.
    #[error("invalid number in payout ratio: {0}")]
    InvalidNumber(#[from] ParseIntError),
    /// Denominator is zero.
    #[error("payout denominator is zero")]
    ZeroDenominator,
}
