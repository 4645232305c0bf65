//! Multi-deck shoe with a seeded random number generator.

use rand::SeedableRng;
use rand::seq::SliceRandom;
use rand_chacha::ChaCha8Rng;

use crate::card::{Card, DECK_SIZE, Rank, Suit};

/// A multi-deck dealing shoe.
///
/// Cards are dealt in order from a shuffled sequence. When the sequence is
/// exhausted the shoe reshuffles the same cards in place and keeps dealing,
/// so [`draw`](Self::draw) never fails. The RNG is seeded once at
/// construction and persists across reshuffles: a fixed seed reproduces the
/// full draw sequence, however long.
#[derive(Debug, Clone)]
pub struct Shoe {
    /// Cards in deal order.
    cards: Vec<Card>,
    /// Index of the next card to deal.
    cursor: usize,
    /// Random number generator.
    rng: ChaCha8Rng,
}

impl Shoe {
    /// Creates a shuffled shoe holding `decks` standard decks.
    ///
    /// # Example
    ///
    /// ```
    /// use soft17::{DECK_SIZE, Shoe};
    ///
    /// let mut shoe = Shoe::new(6, 42);
    /// assert_eq!(shoe.remaining(), 6 * DECK_SIZE);
    /// let _ = shoe.draw();
    /// assert_eq!(shoe.remaining(), 6 * DECK_SIZE - 1);
    /// ```
    #[must_use]
    pub fn new(decks: u8, seed: u64) -> Self {
        let mut shoe = Self {
            cards: Vec::new(),
            cursor: 0,
            rng: ChaCha8Rng::seed_from_u64(seed),
        };
        shoe.reset(decks);
        shoe
    }

    /// Creates a shoe that deals `cards` front to back.
    ///
    /// Useful for scripted deals. The seed only matters once the stacked
    /// cards run out and the shoe reshuffles.
    #[must_use]
    pub fn stacked(cards: Vec<Card>, seed: u64) -> Self {
        Self {
            cards,
            cursor: 0,
            rng: ChaCha8Rng::seed_from_u64(seed),
        }
    }

    /// Rebuilds the full deck set and shuffles it.
    pub fn reset(&mut self, decks: u8) {
        self.cards.clear();
        self.cards.reserve(decks as usize * DECK_SIZE);

        for _ in 0..decks {
            for suit in Suit::ALL {
                for rank in Rank::ALL {
                    self.cards.push(Card::new(rank, suit));
                }
            }
        }

        self.shuffle();
        self.cursor = 0;
    }

    /// Shuffles the entire card sequence with the shoe's own RNG.
    pub fn shuffle(&mut self) {
        self.cards.shuffle(&mut self.rng);
    }

    /// Deals the next card.
    ///
    /// When every card has been dealt, the shoe reshuffles in place and
    /// deals from the top of the new order.
    ///
    /// # Panics
    ///
    /// Panics if the shoe holds no cards at all.
    pub fn draw(&mut self) -> Card {
        if self.cursor >= self.cards.len() {
            log::debug!("shoe exhausted after {} cards, reshuffling", self.cards.len());
            self.shuffle();
            self.cursor = 0;
        }

        let card = self.cards[self.cursor];
        self.cursor += 1;
        card
    }

    /// Number of cards left before the next reshuffle.
    #[must_use]
    pub fn remaining(&self) -> usize {
        self.cards.len() - self.cursor
    }

    /// Total number of cards in the shoe.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Returns whether the shoe holds no cards at all.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }
}
