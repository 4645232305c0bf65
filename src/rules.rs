//! Table rules and payout configuration.

use std::fmt;
use std::str::FromStr;

use crate::error::{ParsePayoutError, RulesError};

/// Blackjack payout expressed as an integer ratio.
///
/// Payouts are computed in integer minor units with truncating division, so
/// a 3:2 natural on a 101 stake profits 151.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PayoutRatio {
    /// Profit numerator.
    pub num: u32,
    /// Profit denominator.
    pub den: u32,
}

impl PayoutRatio {
    /// The standard 3:2 natural payout.
    pub const THREE_TO_TWO: Self = Self { num: 3, den: 2 };
    /// The short 6:5 payout found on many single-deck tables.
    pub const SIX_TO_FIVE: Self = Self { num: 6, den: 5 };
    /// Even money.
    pub const EVEN_MONEY: Self = Self { num: 1, den: 1 };

    /// Creates a ratio.
    ///
    /// # Errors
    ///
    /// Returns [`RulesError::ZeroDenominator`] if `den` is zero.
    ///
    /// # Example
    ///
    /// ```
    /// use soft17::PayoutRatio;
    ///
    /// let ratio = PayoutRatio::new(2, 1).unwrap();
    /// assert_eq!(ratio.payout_on(100), 200);
    /// assert!(PayoutRatio::new(1, 0).is_err());
    /// ```
    pub const fn new(num: u32, den: u32) -> Result<Self, RulesError> {
        if den == 0 {
            return Err(RulesError::ZeroDenominator);
        }
        Ok(Self { num, den })
    }

    /// Profit on a winning natural for the given stake, truncated toward zero.
    ///
    /// # Panics
    ///
    /// Panics if the denominator is zero. Ratios built with
    /// [`new`](Self::new) always have a nonzero denominator.
    #[must_use]
    pub const fn payout_on(self, bet: u64) -> u64 {
        (bet as u128 * self.num as u128 / self.den as u128) as u64
    }
}

impl fmt::Display for PayoutRatio {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.num, self.den)
    }
}

impl FromStr for PayoutRatio {
    type Err = ParsePayoutError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (num, den) = s
            .split_once(':')
            .ok_or(ParsePayoutError::MissingSeparator)?;
        let num = num.trim().parse()?;
        let den = den.trim().parse()?;
        Self::new(num, den).map_err(|_| ParsePayoutError::ZeroDenominator)
    }
}

/// Table rules for a single-player game.
///
/// Pure configuration: every component reads it and none mutates it. The
/// engine performs no validation of its own; callers taking rules across a
/// trust boundary can check them with [`validate`](Self::validate) first.
///
/// Use the builder pattern to customize rules:
///
/// ```
/// use soft17::{PayoutRatio, Rules};
///
/// let rules = Rules::default()
///     .with_decks(8)
///     .with_dealer_hits_soft_17(false)
///     .with_blackjack_payout(PayoutRatio::SIX_TO_FIVE);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rules {
    /// Number of decks in the shoe.
    pub decks: u8,
    /// Whether the dealer hits soft 17 (H17) rather than standing (S17).
    pub dealer_hits_soft_17: bool,
    /// Whether doubling down is allowed.
    pub double_allowed: bool,
    /// Whether doubling after a split would be allowed. Reserved: there is
    /// no split support, so nothing reads this yet.
    pub double_after_split: bool,
    /// Whether late surrender is offered on the first decision.
    pub surrender: bool,
    /// Whether the dealer checks the hole card for a natural before play.
    pub dealer_peeks: bool,
    /// Payout ratio for a player natural.
    pub blackjack_payout: PayoutRatio,
}

impl Default for Rules {
    fn default() -> Self {
        Self {
            decks: 6,
            dealer_hits_soft_17: true,
            double_allowed: true,
            double_after_split: true,
            surrender: false,
            dealer_peeks: true,
            blackjack_payout: PayoutRatio::THREE_TO_TWO,
        }
    }
}

impl Rules {
    /// European-style table: the dealer stands on soft 17 and takes no hole
    /// card peek, and surrender is not offered.
    #[must_use]
    pub const fn european() -> Self {
        Self {
            decks: 6,
            dealer_hits_soft_17: false,
            double_allowed: true,
            double_after_split: false,
            surrender: false,
            dealer_peeks: false,
            blackjack_payout: PayoutRatio::THREE_TO_TWO,
        }
    }

    /// Single-deck table with the common 6:5 natural payout.
    #[must_use]
    pub const fn single_deck() -> Self {
        Self {
            decks: 1,
            dealer_hits_soft_17: true,
            double_allowed: true,
            double_after_split: false,
            surrender: false,
            dealer_peeks: true,
            blackjack_payout: PayoutRatio::SIX_TO_FIVE,
        }
    }

    /// Sets the number of decks.
    ///
    /// # Example
    ///
    /// ```
    /// use soft17::Rules;
    ///
    /// let rules = Rules::default().with_decks(8);
    /// assert_eq!(rules.decks, 8);
    /// ```
    #[must_use]
    pub const fn with_decks(mut self, decks: u8) -> Self {
        self.decks = decks;
        self
    }

    /// Sets whether the dealer hits soft 17.
    ///
    /// # Example
    ///
    /// ```
    /// use soft17::Rules;
    ///
    /// let rules = Rules::default().with_dealer_hits_soft_17(false);
    /// assert!(!rules.dealer_hits_soft_17);
    /// ```
    #[must_use]
    pub const fn with_dealer_hits_soft_17(mut self, hits: bool) -> Self {
        self.dealer_hits_soft_17 = hits;
        self
    }

    /// Sets whether doubling down is allowed.
    ///
    /// # Example
    ///
    /// ```
    /// use soft17::Rules;
    ///
    /// let rules = Rules::default().with_double_allowed(false);
    /// assert!(!rules.double_allowed);
    /// ```
    #[must_use]
    pub const fn with_double_allowed(mut self, allowed: bool) -> Self {
        self.double_allowed = allowed;
        self
    }

    /// Sets whether doubling after a split would be allowed.
    ///
    /// # Example
    ///
    /// ```
    /// use soft17::Rules;
    ///
    /// let rules = Rules::default().with_double_after_split(false);
    /// assert!(!rules.double_after_split);
    /// ```
    #[must_use]
    pub const fn with_double_after_split(mut self, allowed: bool) -> Self {
        self.double_after_split = allowed;
        self
    }

    /// Sets whether late surrender is offered.
    ///
    /// # Example
    ///
    /// ```
    /// use soft17::Rules;
    ///
    /// let rules = Rules::default().with_surrender(true);
    /// assert!(rules.surrender);
    /// ```
    #[must_use]
    pub const fn with_surrender(mut self, offered: bool) -> Self {
        self.surrender = offered;
        self
    }

    /// Sets whether the dealer peeks for a natural.
    ///
    /// # Example
    ///
    /// ```
    /// use soft17::Rules;
    ///
    /// let rules = Rules::default().with_dealer_peeks(false);
    /// assert!(!rules.dealer_peeks);
    /// ```
    #[must_use]
    pub const fn with_dealer_peeks(mut self, peeks: bool) -> Self {
        self.dealer_peeks = peeks;
        self
    }

    /// Sets the natural payout ratio.
    ///
    /// # Example
    ///
    /// ```
    /// use soft17::{PayoutRatio, Rules};
    ///
    /// let rules = Rules::default().with_blackjack_payout(PayoutRatio::SIX_TO_FIVE);
    /// assert_eq!(rules.blackjack_payout, PayoutRatio::SIX_TO_FIVE);
    /// ```
    #[must_use]
    pub const fn with_blackjack_payout(mut self, payout: PayoutRatio) -> Self {
        self.blackjack_payout = payout;
        self
    }

    /// Checks the rules for values the engine cannot operate on.
    ///
    /// The engine never calls this itself; run it at the boundary before
    /// building a shoe from untrusted configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if `decks` is zero or the payout denominator is zero.
    pub const fn validate(&self) -> Result<(), RulesError> {
        if self.decks == 0 {
            return Err(RulesError::NoDecks);
        }
        if self.blackjack_payout.den == 0 {
            return Err(RulesError::ZeroDenominator);
        }
        Ok(())
    }
}
