//! Command-line dispatcher for the blackjack engine.
//!
//! The engine itself lives in the library; this binary only parses flags,
//! builds [`Rules`], and prints results.

use std::process;

use clap::{Args, Parser, Subcommand, ValueEnum};
use soft17::{BasicStrategy, NaiveStrategy, PayoutRatio, Rules, Strategy, simulate};

#[derive(Parser)]
#[command(name = "soft17", about = "Single-player blackjack rules engine", version)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Play an interactive round at the terminal.
    Play,
    /// Replay many rounds against one shoe and print the totals.
    Simulate(SimulateArgs),
}

#[derive(Args)]
struct SimulateArgs {
    /// Number of rounds to play.
    #[arg(long, default_value_t = 10_000)]
    rounds: u64,

    /// Number of decks in the shoe.
    #[arg(long, default_value_t = 6)]
    decks: u8,

    /// Shoe seed; the same seed replays the same batch.
    #[arg(long, default_value_t = 42)]
    seed: u64,

    /// Bet per round in minor units.
    #[arg(long, default_value_t = 100)]
    bet: u64,

    /// Decision policy for the player.
    #[arg(long, value_enum, default_value = "naive")]
    strategy: StrategyKind,

    /// Dealer stands on soft 17 instead of hitting it.
    #[arg(long)]
    stand_on_soft_17: bool,

    /// Offer late surrender on the first decision.
    #[arg(long)]
    surrender: bool,

    /// Skip the dealer's hole card peek.
    #[arg(long)]
    no_peek: bool,

    /// Disallow doubling down.
    #[arg(long)]
    no_double: bool,

    /// Blackjack payout ratio, e.g. 3:2 or 6:5.
    #[arg(long, default_value = "3:2")]
    blackjack_payout: String,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum StrategyKind {
    /// Double 9 to 11, hit under 17, stand otherwise.
    Naive,
    /// Totals-based basic strategy.
    Basic,
}

fn main() {
    env_logger::init();

    match Cli::parse().command {
        Command::Play => play(),
        Command::Simulate(args) => run_simulate(&args),
    }
}

/// Boundary stub: the terminal table is a separate surface and is not wired
/// up here.
fn play() {
    println!("interactive play is not wired up yet; try `soft17 simulate`");
}

fn run_simulate(args: &SimulateArgs) {
    let payout: PayoutRatio = args.blackjack_payout.parse().unwrap_or_else(|err| {
        eprintln!(
            "invalid --blackjack-payout '{}': {err}",
            args.blackjack_payout
        );
        process::exit(1);
    });

    let rules = Rules::default()
        .with_decks(args.decks)
        .with_dealer_hits_soft_17(!args.stand_on_soft_17)
        .with_double_allowed(!args.no_double)
        .with_surrender(args.surrender)
        .with_dealer_peeks(!args.no_peek)
        .with_blackjack_payout(payout);

    if let Err(err) = rules.validate() {
        eprintln!("invalid rules: {err}");
        process::exit(1);
    }

    let mut strategy: Box<dyn Strategy> = match args.strategy {
        StrategyKind::Naive => Box::new(NaiveStrategy),
        StrategyKind::Basic => Box::new(BasicStrategy),
    };

    let stats = simulate(
        args.rounds,
        &rules,
        args.seed,
        args.bet,
        Some(strategy.as_mut()),
    );
    println!("{stats}");
}
