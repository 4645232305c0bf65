//! Single-round state machine.

use std::cmp::Ordering;

use crate::hand::Hand;
use crate::result::{Outcome, RoundResult};
use crate::rules::Rules;
use crate::shoe::Shoe;
use crate::strategy::{Decision, Situation, Strategy};

/// A single player-versus-dealer round.
///
/// The round borrows the table rules, the shoe, and the strategy for its
/// lifetime and owns the two hands it deals. Drive it with
/// [`play`](Self::play), then read the hands back for stake accounting.
///
/// # Example
///
/// ```
/// use soft17::{NaiveStrategy, Round, Rules, Shoe};
///
/// let rules = Rules::default();
/// let mut shoe = Shoe::new(rules.decks, 42);
/// let mut strategy = NaiveStrategy;
///
/// let mut round = Round::new(&rules, &mut shoe, &mut strategy, 100);
/// let result = round.play();
/// assert!(result.payout <= 400);
/// ```
pub struct Round<'a> {
    /// Table rules in effect.
    rules: &'a Rules,
    /// Card source, shared across rounds by the caller.
    shoe: &'a mut Shoe,
    /// The player's decision policy.
    strategy: &'a mut dyn Strategy,
    /// Stake in minor units.
    bet: u64,
    /// The player's hand.
    player: Hand,
    /// The dealer's hand, hole card included.
    dealer: Hand,
}

impl<'a> Round<'a> {
    /// Creates a round for one stake in minor units.
    #[must_use]
    pub fn new(
        rules: &'a Rules,
        shoe: &'a mut Shoe,
        strategy: &'a mut dyn Strategy,
        bet: u64,
    ) -> Self {
        Self {
            rules,
            shoe,
            strategy,
            bet,
            player: Hand::new(),
            dealer: Hand::new(),
        }
    }

    /// Plays the round to completion and settles it.
    ///
    /// Deals two cards each in player, dealer, player, dealer order, resolves
    /// naturals (with a hole card peek when the rules say so), runs the
    /// player's decisions, plays the dealer out, and settles on totals.
    #[must_use]
    pub fn play(&mut self) -> RoundResult {
        self.player = Hand::new();
        self.dealer = Hand::new();

        self.player.add_card(self.shoe.draw());
        self.dealer.add_card(self.shoe.draw());
        self.player.add_card(self.shoe.draw());
        self.dealer.add_card(self.shoe.draw());

        if self.rules.dealer_peeks && self.dealer.is_blackjack() {
            if self.player.is_blackjack() {
                return self.settle(Outcome::Push);
            }
            return self.settle(Outcome::DealerBlackjack);
        }

        if self.player.is_blackjack() {
            return self.settle(Outcome::PlayerBlackjack);
        }

        if let Some(outcome) = self.player_turn() {
            return self.settle(outcome);
        }

        self.dealer_turn();

        if self.dealer.is_bust() {
            return self.settle(Outcome::DealerBust);
        }
        let outcome = match self.player.hard_total().cmp(&self.dealer.hard_total()) {
            Ordering::Greater => Outcome::PlayerWin,
            Ordering::Less => Outcome::DealerWin,
            Ordering::Equal => Outcome::Push,
        };
        self.settle(outcome)
    }

    /// The player's hand as dealt and played.
    #[must_use]
    pub const fn player(&self) -> &Hand {
        &self.player
    }

    /// The dealer's hand, hole card included.
    #[must_use]
    pub const fn dealer(&self) -> &Hand {
        &self.dealer
    }

    /// Runs player decisions until the hand stands, doubles, busts, or
    /// surrenders. Returns the outcome if the round ended here.
    fn player_turn(&mut self) -> Option<Outcome> {
        let upcard = self.dealer.cards()[0];
        let mut can_double = self.rules.double_allowed;

        loop {
            // Surrender is probed separately and only while the hand is
            // still two cards.
            if self.rules.surrender && self.player.len() == 2 {
                let situation = Situation {
                    player: &self.player,
                    upcard,
                    rules: self.rules,
                    can_double,
                };
                if self.strategy.decide(&situation) == Decision::Surrender {
                    self.player.mark_surrendered();
                    return Some(Outcome::PlayerSurrender);
                }
            }

            let situation = Situation {
                player: &self.player,
                upcard,
                rules: self.rules,
                can_double,
            };
            match self.strategy.decide(&situation) {
                Decision::Double if can_double => {
                    self.player.mark_doubled();
                    self.player.add_card(self.shoe.draw());
                    // One card, then stand.
                    return None;
                }
                Decision::Hit => {
                    self.player.add_card(self.shoe.draw());
                    if self.player.is_bust() {
                        return Some(Outcome::PlayerBust);
                    }
                    // Doubling is only offered on the first action.
                    can_double = false;
                }
                // Stand, an illegal Double, or a stray Surrender all stand.
                _ => return None,
            }
        }
    }

    /// Dealer draws to 17, hitting soft 17 when the rules say so.
    fn dealer_turn(&mut self) {
        loop {
            let total = self.dealer.hard_total();
            if total < 17 {
                self.dealer.add_card(self.shoe.draw());
                continue;
            }
            if total == 17 && self.rules.dealer_hits_soft_17 && self.dealer.is_soft() {
                self.dealer.add_card(self.shoe.draw());
                continue;
            }
            break;
        }
    }

    fn settle(&self, outcome: Outcome) -> RoundResult {
        let payout = match outcome {
            Outcome::PlayerBlackjack => {
                self.bet + self.rules.blackjack_payout.payout_on(self.bet)
            }
            Outcome::DealerBlackjack | Outcome::PlayerBust | Outcome::DealerWin => 0,
            Outcome::DealerBust | Outcome::PlayerWin => {
                if self.player.is_doubled() {
                    self.bet * 4
                } else {
                    self.bet * 2
                }
            }
            Outcome::Push => {
                if self.player.is_doubled() {
                    self.bet * 2
                } else {
                    self.bet
                }
            }
            Outcome::PlayerSurrender => self.bet / 2,
        };

        RoundResult {
            outcome,
            player_total: self.player.hard_total(),
            dealer_total: self.dealer.hard_total(),
            payout,
        }
    }
}
