//! Hand representation and evaluation.

use crate::card::{Card, Rank};

fn evaluate_cards(cards: &[Card]) -> (u8, bool) {
    let mut value: u8 = 0;
    let mut aces: u8 = 0;

    for card in cards {
        if card.rank == Rank::Ace {
            aces += 1;
        }
        value = value.saturating_add(card.rank.value());
    }

    while value > 21 && aces > 0 {
        value -= 10;
        aces -= 1;
    }

    let is_soft = aces > 0 && value <= 21;
    (value, is_soft)
}

/// One participant's cards for a single round.
///
/// Hands are created empty by the round and never reused. Cards are only
/// ever appended; the doubled and surrendered flags feed settlement.
#[derive(Debug, Clone, Default)]
pub struct Hand {
    /// Cards in the hand.
    cards: Vec<Card>,
    /// Whether the hand was doubled down.
    doubled: bool,
    /// Whether the hand was surrendered.
    surrendered: bool,
}

impl Hand {
    /// Creates an empty hand.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            cards: Vec::new(),
            doubled: false,
            surrendered: false,
        }
    }

    /// Adds a card to the hand.
    pub fn add_card(&mut self, card: Card) {
        self.cards.push(card);
    }

    /// Best total with aces counted as 11 where that does not bust.
    ///
    /// Every ace starts at 11 and drops to 1 one at a time while the total
    /// is over 21.
    ///
    /// # Example
    ///
    /// ```
    /// use soft17::{Card, Hand, Rank, Suit};
    ///
    /// let mut hand = Hand::new();
    /// hand.add_card(Card::new(Rank::Ace, Suit::Spades));
    /// hand.add_card(Card::new(Rank::Ace, Suit::Hearts));
    /// hand.add_card(Card::new(Rank::Nine, Suit::Clubs));
    /// assert_eq!(hand.hard_total(), 21);
    /// ```
    #[must_use]
    pub fn hard_total(&self) -> u8 {
        evaluate_cards(&self.cards).0
    }

    /// Returns whether an ace still counts as 11 in the best total.
    #[must_use]
    pub fn is_soft(&self) -> bool {
        evaluate_cards(&self.cards).1
    }

    /// Returns whether the hand is a natural: exactly two cards totaling 21.
    #[must_use]
    pub fn is_blackjack(&self) -> bool {
        self.cards.len() == 2 && self.hard_total() == 21
    }

    /// Returns whether the hand is over 21.
    #[must_use]
    pub fn is_bust(&self) -> bool {
        self.hard_total() > 21
    }

    /// Returns the cards in the hand.
    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// Returns the number of cards in the hand.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Returns whether the hand is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Returns whether the hand was doubled down.
    #[must_use]
    pub const fn is_doubled(&self) -> bool {
        self.doubled
    }

    /// Returns whether the hand was surrendered.
    #[must_use]
    pub const fn is_surrendered(&self) -> bool {
        self.surrendered
    }

    pub(crate) const fn mark_doubled(&mut self) {
        self.doubled = true;
    }

    pub(crate) const fn mark_surrendered(&mut self) {
        self.surrendered = true;
    }
}
