//! Round outcome and settlement types.

/// How a round ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Outcome {
    /// Player dealt a natural the dealer does not match.
    PlayerBlackjack,
    /// Dealer dealt a natural the player does not match.
    DealerBlackjack,
    /// Player went over 21.
    PlayerBust,
    /// Dealer went over 21.
    DealerBust,
    /// Player total beats the dealer's.
    PlayerWin,
    /// Dealer total beats the player's.
    DealerWin,
    /// Equal totals.
    Push,
    /// Player surrendered on the first decision.
    PlayerSurrender,
}

/// Result of a settled round.
///
/// `payout` is the total returned to the player in minor units, stake
/// included when the round is won or pushed. The stake was collected up
/// front, so a lost round pays zero.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RoundResult {
    /// How the round ended.
    pub outcome: Outcome,
    /// The player's final total.
    pub player_total: u8,
    /// The dealer's final total.
    pub dealer_total: u8,
    /// Amount returned to the player in minor units.
    pub payout: u64,
}
