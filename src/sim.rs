//! Batch simulation over a persistent shoe.

use std::fmt;

use crate::result::Outcome;
use crate::round::Round;
use crate::rules::Rules;
use crate::shoe::Shoe;
use crate::strategy::{NaiveStrategy, Strategy};

/// Counters accumulated over a batch of rounds.
///
/// Naturals count toward the matching win counter as well as their own, and
/// either side busting bumps the shared bust counter. `bankroll` is the net
/// profit or loss in minor units over the whole batch.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SimStats {
    /// Rounds played.
    pub rounds: u64,
    /// Rounds the player won, naturals and dealer busts included.
    pub player_wins: u64,
    /// Rounds the dealer won, naturals and player busts included.
    pub dealer_wins: u64,
    /// Tied rounds.
    pub pushes: u64,
    /// Player naturals.
    pub player_blackjacks: u64,
    /// Dealer naturals.
    pub dealer_blackjacks: u64,
    /// Rounds either side went over 21.
    pub busts: u64,
    /// Rounds the player surrendered.
    pub surrenders: u64,
    /// Net result in minor units.
    pub bankroll: i64,
}

impl SimStats {
    /// Folds one settled round into the counters.
    ///
    /// `staked` is what the round cost the player up front, twice the bet
    /// when the hand was doubled.
    pub fn record(&mut self, outcome: Outcome, payout: u64, staked: u64) {
        self.rounds += 1;
        #[expect(clippy::cast_possible_wrap, reason = "stakes fit in i64")]
        let net = payout as i64 - staked as i64;
        self.bankroll += net;

        match outcome {
            Outcome::PlayerBlackjack => {
                self.player_blackjacks += 1;
                self.player_wins += 1;
            }
            Outcome::DealerBlackjack => {
                self.dealer_blackjacks += 1;
                self.dealer_wins += 1;
            }
            Outcome::DealerBust => {
                self.player_wins += 1;
                self.busts += 1;
            }
            Outcome::PlayerBust => {
                self.dealer_wins += 1;
                self.busts += 1;
            }
            Outcome::PlayerWin => self.player_wins += 1,
            Outcome::DealerWin => self.dealer_wins += 1,
            Outcome::Push => self.pushes += 1,
            Outcome::PlayerSurrender => self.surrenders += 1,
        }
    }
}

impl fmt::Display for SimStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "rounds             {:>12}", self.rounds)?;
        writeln!(f, "player wins        {:>12}", self.player_wins)?;
        writeln!(f, "dealer wins        {:>12}", self.dealer_wins)?;
        writeln!(f, "pushes             {:>12}", self.pushes)?;
        writeln!(f, "player blackjacks  {:>12}", self.player_blackjacks)?;
        writeln!(f, "dealer blackjacks  {:>12}", self.dealer_blackjacks)?;
        writeln!(f, "busts              {:>12}", self.busts)?;
        writeln!(f, "surrenders         {:>12}", self.surrenders)?;
        write!(f, "bankroll           {:>+12}", self.bankroll)
    }
}

/// Plays `n` rounds against one shoe and accumulates the results.
///
/// The shoe is built once from `rules.decks` and `seed` and persists across
/// rounds, reshuffling in place only when it runs out of cards, so a fixed
/// seed makes the whole batch reproducible. Passing `None` for `strategy`
/// falls back to [`NaiveStrategy`].
#[must_use]
pub fn simulate(
    n: u64,
    rules: &Rules,
    seed: u64,
    bet: u64,
    strategy: Option<&mut dyn Strategy>,
) -> SimStats {
    let mut shoe = Shoe::new(rules.decks, seed);
    let mut fallback = NaiveStrategy;
    let strategy: &mut dyn Strategy = match strategy {
        Some(strategy) => strategy,
        None => &mut fallback,
    };

    let mut stats = SimStats::default();
    for _ in 0..n {
        let mut round = Round::new(rules, &mut shoe, &mut *strategy, bet);
        let result = round.play();
        let staked = if round.player().is_doubled() {
            bet * 2
        } else {
            bet
        };
        stats.record(result.outcome, result.payout, staked);
    }

    log::debug!("simulated {n} rounds, net {} minor units", stats.bankroll);
    stats
}
