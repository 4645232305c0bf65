//! Decision policies.

use crate::card::Card;
use crate::hand::Hand;
use crate::rules::Rules;

/// A player decision for the current hand.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Decision {
    /// Take another card.
    Hit,
    /// Keep the current total.
    Stand,
    /// Double the stake, take exactly one card, and stand.
    Double,
    /// Forfeit half the stake and end the round.
    Surrender,
}

/// Everything a strategy may look at when deciding.
///
/// Only the dealer's first card is visible; the hole card stays hidden until
/// the dealer plays.
#[derive(Debug, Clone, Copy)]
pub struct Situation<'a> {
    /// The player's hand so far.
    pub player: &'a Hand,
    /// The dealer's visible card.
    pub upcard: Card,
    /// The table rules in effect.
    pub rules: &'a Rules,
    /// Whether doubling down is still legal for this hand.
    pub can_double: bool,
}

/// A decision policy queried once per player action.
///
/// Implementations may carry mutable state, counters or scripted sequences
/// for instance, so [`decide`](Self::decide) takes `&mut self`. The trait is
/// object safe; a round holds a `&mut dyn Strategy`.
///
/// # Example
///
/// ```
/// use soft17::{Decision, Situation, Strategy};
///
/// struct AlwaysStand;
///
/// impl Strategy for AlwaysStand {
///     fn decide(&mut self, _situation: &Situation<'_>) -> Decision {
///         Decision::Stand
///     }
/// }
/// ```
pub trait Strategy {
    /// Picks the next action for the situation.
    fn decide(&mut self, situation: &Situation<'_>) -> Decision;
}

/// Naive baseline policy: double a two-card 9 to 11 when legal, hit under
/// 17, otherwise stand. Never surrenders.
#[derive(Debug, Clone, Copy, Default)]
pub struct NaiveStrategy;

impl Strategy for NaiveStrategy {
    fn decide(&mut self, situation: &Situation<'_>) -> Decision {
        let total = situation.player.hard_total();

        if situation.rules.double_allowed
            && situation.can_double
            && situation.player.len() == 2
            && (9..=11).contains(&total)
        {
            return Decision::Double;
        }
        if total < 17 {
            return Decision::Hit;
        }
        Decision::Stand
    }
}

/// Totals-based basic strategy.
///
/// Covers hit, stand, double, and surrender; with no split support, pair
/// hands fall into the ordinary total rows.
#[derive(Debug, Clone, Copy, Default)]
pub struct BasicStrategy;

impl Strategy for BasicStrategy {
    fn decide(&mut self, situation: &Situation<'_>) -> Decision {
        let player = situation.player;
        let total = player.hard_total();
        let soft = player.is_soft();
        let up = situation.upcard.rank.value();

        // Hard 16 against 9 through ace and hard 15 against a ten are the
        // classic late-surrender spots.
        if situation.rules.surrender && player.len() == 2 && !soft {
            if total == 16 && up >= 9 {
                return Decision::Surrender;
            }
            if total == 15 && up == 10 {
                return Decision::Surrender;
            }
        }

        if situation.can_double {
            let double = if soft {
                (total == 19 && up == 6)
                    || (total == 18 && (2..=6).contains(&up))
                    || (total == 17 && (3..=6).contains(&up))
                    || ((15..=16).contains(&total) && (4..=6).contains(&up))
                    || ((13..=14).contains(&total) && (5..=6).contains(&up))
            } else {
                total == 11
                    || (total == 10 && up <= 9)
                    || (total == 9 && (3..=6).contains(&up))
            };
            if double {
                return Decision::Double;
            }
        }

        if soft {
            if total >= 19 {
                return Decision::Stand;
            }
            if total == 18 && up < 9 {
                return Decision::Stand;
            }
            return Decision::Hit;
        }

        if total >= 17 {
            return Decision::Stand;
        }
        if (13..=16).contains(&total) && (2..=6).contains(&up) {
            return Decision::Stand;
        }
        if total == 12 && (4..=6).contains(&up) {
            return Decision::Stand;
        }
        Decision::Hit
    }
}
