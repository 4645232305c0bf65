//! A single-player blackjack rules engine.
//!
//! The crate deals rounds from a seeded multi-deck [`Shoe`], drives the
//! player with a pluggable [`Strategy`], plays the dealer out per the table
//! [`Rules`], and settles every round in integer minor units. A batch
//! harness, [`simulate`], replays rounds against one persistent shoe and
//! accumulates [`SimStats`].
//!
//! # Example
//!
//! ```
//! use soft17::{Rules, simulate};
//!
//! let rules = Rules::default();
//! let stats = simulate(1_000, &rules, 42, 100, None);
//! assert_eq!(stats.rounds, 1_000);
//! ```

pub mod card;
pub mod error;
pub mod hand;
pub mod result;
pub mod round;
pub mod rules;
pub mod shoe;
pub mod sim;
pub mod strategy;

// Re-export main types
pub use card::{Card, DECK_SIZE, Rank, Suit};
pub use error::{ParsePayoutError, RulesError};
pub use hand::Hand;
pub use result::{Outcome, RoundResult};
pub use round::Round;
pub use rules::{PayoutRatio, Rules};
pub use shoe::Shoe;
pub use sim::{SimStats, simulate};
pub use strategy::{BasicStrategy, Decision, NaiveStrategy, Situation, Strategy};
