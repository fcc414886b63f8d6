//! cribbage: score hands, peg plays and suggest discards
//!
//! # Usage
//!
//! ```bash
//! cribbage score --lead 5H --hand JH,5C,5D,5S
//! cribbage peg --history "4C 6D" --next 5H
//! cribbage suggest --hand 5H,5C,JD,6S,4C,KH --focus crib
//! cribbage build-cache --output scores.bin --threads 8
//! cribbage suggest --hand 5H,5C,JD,6S,4C,KH --cache scores.bin --all
//! ```
//!
//! # Exit Codes
//!
//! - 0: Success
//! - 1: Invalid cards or arguments rejected by the engine
//! - 2: I/O error (cache artifact missing, unreadable or malformed)

use clap::{Parser, Subcommand, ValueEnum};
use crib_cache::{BuildConfig, ScoreCache};
use crib_core::{format_cards, parse_cards, Card, CardSet, HAND_SIZE};
use crib_score::{breakdown, points_for_card, running_total, Kind};
use crib_suggest::{Advisor, Calculator, Focus, Objective, PointSource, DEFAULT_EPSILON};
use std::error::Error;
use std::fmt;
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use std::time::Instant;

#[derive(Parser)]
#[command(name = "cribbage")]
#[command(about = "Cribbage scoring and discard suggestions", long_about = None)]
struct Cli {
    /// Log debug detail to stderr
    #[arg(short = 'v', long = "verbose", global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Count a hand or crib with its lead card
    Score {
        /// The lead (starter) card, e.g. 5H
        #[arg(short = 'l', long = "lead")]
        lead: String,

        /// Four cards, e.g. JH,5C,5D,5S (a crib may hold fewer)
        #[arg(short = 'H', long = "hand")]
        hand: String,

        /// Count as a crib (flush needs all five cards)
        #[arg(long = "crib")]
        crib: bool,
    },

    /// Points for playing a card after the cards already pegged
    Peg {
        /// Cards played so far in this sequence, oldest first
        #[arg(long = "history", default_value = "")]
        history: String,

        /// Card being played
        #[arg(short = 'n', long = "next")]
        next: String,
    },

    /// Suggest which cards to keep from a dealt hand
    Suggest {
        /// Five or six dealt cards
        #[arg(short = 'H', long = "hand")]
        hand: String,

        /// Cards to keep (4) or to toss (dealt cards minus 4)
        #[arg(short = 'k', long = "keep", default_value = "4")]
        keep: usize,

        /// Judge candidates by hand or by crib points
        #[arg(short = 'f', long = "focus", value_enum, default_value = "hand")]
        focus: FocusArg,

        /// Prefer high points (own hand or crib) or low points (opponent's crib)
        #[arg(short = 'o', long = "objective", value_enum, default_value = "highest")]
        objective: ObjectiveArg,

        /// Medians and averages closer than this are tied
        #[arg(short = 'e', long = "epsilon", default_value_t = DEFAULT_EPSILON)]
        epsilon: f64,

        /// Cards known to be out of play
        #[arg(long = "known", default_value = "")]
        known: String,

        /// Score cache artifact produced by build-cache
        #[arg(short = 'c', long = "cache")]
        cache: Option<PathBuf>,

        /// Print every candidate, not just the best
        #[arg(short = 'a', long = "all")]
        all: bool,
    },

    /// Precompute every hand and crib count and write the cache artifact
    BuildCache {
        /// Where to write the artifact
        #[arg(short = 'o', long = "output")]
        output: PathBuf,

        /// Worker threads (0 = one per core)
        #[arg(short = 't', long = "threads", default_value = "0")]
        threads: usize,
    },
}

#[derive(Clone, Copy, ValueEnum)]
enum FocusArg {
    Hand,
    Crib,
}

impl From<FocusArg> for Focus {
    fn from(arg: FocusArg) -> Self {
        match arg {
            FocusArg::Hand => Focus::Hand,
            FocusArg::Crib => Focus::Crib,
        }
    }
}

#[derive(Clone, Copy, ValueEnum)]
enum ObjectiveArg {
    Highest,
    Lowest,
}

impl From<ObjectiveArg> for Objective {
    fn from(arg: ObjectiveArg) -> Self {
        match arg {
            ObjectiveArg::Highest => Objective::HighestIsBetter,
            ObjectiveArg::Lowest => Objective::LowestIsBetter,
        }
    }
}

/// Why a command failed, mapped to the exit code
#[derive(Debug)]
enum Failure {
    /// Input rejected by the engine
    Invalid(Box<dyn Error>),
    /// Artifact could not be read or written
    Io(Box<dyn Error>),
}

impl Failure {
    fn invalid(err: impl Into<Box<dyn Error>>) -> Self {
        Failure::Invalid(err.into())
    }

    fn io(err: impl Into<Box<dyn Error>>) -> Self {
        Failure::Io(err.into())
    }

    fn exit_code(&self) -> u8 {
        match self {
            Failure::Invalid(_) => 1,
            Failure::Io(_) => 2,
        }
    }
}

impl fmt::Display for Failure {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Failure::Invalid(err) => write!(f, "{}", err),
            Failure::Io(err) => write!(f, "{}", err),
        }
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match run(cli.command) {
        Ok(()) => ExitCode::SUCCESS,
        Err(failure) => {
            log::error!("{}", failure);
            ExitCode::from(failure.exit_code())
        }
    }
}

fn init_logging(verbose: bool) {
    let level = if verbose {
        log::LevelFilter::Debug
    } else {
        log::LevelFilter::Info
    };
    let config = simplelog::ConfigBuilder::new()
        .set_location_level(log::LevelFilter::Off)
        .set_target_level(log::LevelFilter::Off)
        .set_thread_level(log::LevelFilter::Off)
        .build();
    // results go to stdout, so every log line goes to stderr
    let logger = simplelog::TermLogger::init(
        level,
        config,
        simplelog::TerminalMode::Stderr,
        simplelog::ColorChoice::Auto,
    );
    if let Err(err) = logger {
        eprintln!("Logging disabled: {}", err);
    }
}

fn run(command: Command) -> Result<(), Failure> {
    match command {
        Command::Score { lead, hand, crib } => score(&lead, &hand, crib),
        Command::Peg { history, next } => peg(&history, &next),
        Command::Suggest {
            hand,
            keep,
            focus,
            objective,
            epsilon,
            known,
            cache,
            all,
        } => {
            let advisor = Advisor::new(focus.into(), objective.into())
                .with_epsilon(epsilon)
                .with_known(parse_cards(&known).map_err(Failure::invalid)?);
            let hand = parse_cards(&hand).map_err(Failure::invalid)?;
            match cache {
                Some(path) => {
                    let cache = ScoreCache::load(&path).map_err(Failure::io)?;
                    if !cache.is_complete() {
                        log::warn!(
                            "Cache {} holds {} of 52 leads; scoring the rest directly",
                            path.display(),
                            cache.lead_count()
                        );
                    }
                    suggest(&advisor, &cache, &hand, keep, all)
                }
                None => suggest(&advisor, &Calculator, &hand, keep, all),
            }
        }
        Command::BuildCache { output, threads } => build_cache(&output, threads),
    }
}

fn score(lead: &str, hand: &str, crib: bool) -> Result<(), Failure> {
    let lead: Card = lead.parse().map_err(Failure::invalid)?;
    let cards = parse_cards(hand).map_err(Failure::invalid)?;
    let cards = counted_cards(lead, cards, crib)?;

    let kind = if crib { Kind::Crib } else { Kind::Hand };
    let points = breakdown(lead, &cards, kind);
    println!("{} with {}", format_cards(&cards), lead);
    println!("  fifteens {:>2}", points.fifteens);
    println!("  pairs    {:>2}", points.pairs);
    println!("  runs     {:>2}", points.runs);
    println!("  flush    {:>2}", points.flush);
    println!("  nobs     {:>2}", points.nobs);
    println!("  total    {:>2}", points.total());
    Ok(())
}

/// Distinct cards, none of them the lead: exactly four for a hand, at most
/// four for a crib
fn counted_cards(lead: Card, cards: Vec<Card>, crib: bool) -> Result<Vec<Card>, Failure> {
    let fits = if crib {
        cards.len() <= HAND_SIZE
    } else {
        cards.len() == HAND_SIZE
    };
    if !fits {
        return Err(Failure::invalid(format!(
            "A {} {} cards, got {}",
            if crib { "crib holds at most" } else { "hand holds" },
            HAND_SIZE,
            cards.len()
        )));
    }
    if let Some(card) = CardSet::first_duplicate(cards.iter().chain([&lead])) {
        return Err(Failure::invalid(format!("Card {} appears twice", card)));
    }
    Ok(cards)
}

fn peg(history: &str, next: &str) -> Result<(), Failure> {
    let history = parse_cards(history).map_err(Failure::invalid)?;
    let next: Card = next.parse().map_err(Failure::invalid)?;

    let points = points_for_card(&history, next).map_err(Failure::invalid)?;
    let mut played = history;
    played.push(next);
    println!("{} pegs {}", next, points);
    println!("running total {}", running_total(&played));
    Ok(())
}

fn suggest<S: PointSource + ?Sized>(
    advisor: &Advisor,
    source: &S,
    hand: &[Card],
    keep: usize,
    all: bool,
) -> Result<(), Failure> {
    let start = Instant::now();
    let summary = if all {
        let summaries = advisor
            .summarize_all(source, hand, keep)
            .map_err(Failure::invalid)?;
        for summary in &summaries {
            println!("{}", summary);
        }
        advisor
            .best(summaries)
            .ok_or_else(|| Failure::invalid("No way to split the hand"))?
    } else {
        let (_, summary) = advisor
            .suggest_discard(source, hand, keep)
            .map_err(Failure::invalid)?;
        summary
    };
    println!(
        "keep {}  toss {}",
        format_cards(&summary.kept),
        format_cards(&summary.tossed)
    );
    println!("  hand {}", summary.hand);
    println!("  crib {}", summary.crib);
    log::debug!("suggestion took {:.2?}", start.elapsed());
    Ok(())
}

fn build_cache(output: &Path, threads: usize) -> Result<(), Failure> {
    let start = Instant::now();
    let cache =
        ScoreCache::build(&BuildConfig::with_threads(threads)).map_err(Failure::invalid)?;
    cache.save(output).map_err(Failure::io)?;
    log::info!("Wrote {} in {:.1?}", output.display(), start.elapsed());
    Ok(())
}
