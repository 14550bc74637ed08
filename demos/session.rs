//! Scripted walk through every chapter with a simulated learner.
//!
//! Run with:
//!   cargo run --example session
//!   cargo run --example session -- --config path/to/drill.toml --verbose
//!
//! The simulated child answers correctly 85 % of the time, so the addition
//! chapter shows the tier climbing (and sometimes slipping back). All output
//! is deterministic: the config seed drives the questions and a second fixed
//! seed drives the learner.

use std::path::PathBuf;

use clap::Parser;
use number_drill_gen::{Chapter, EngineConfig, PracticeSession, Prompt};
use rand::{rngs::StdRng, Rng, SeedableRng};
use tracing::Level;
use tracing_subscriber::FmtSubscriber;

const LEARNER_ACCURACY: f64 = 0.85;

#[derive(Parser)]
#[command(name = "session")]
#[command(about = "Walk every practice chapter with a simulated learner")]
struct Cli {
    /// Optional TOML engine configuration
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Verbose output
    #[arg(short, long)]
    verbose: bool,
}

fn setup_logging(verbose: bool) {
    let level = if verbose { Level::DEBUG } else { Level::INFO };
    let subscriber = FmtSubscriber::builder()
        .with_max_level(level)
        .with_target(false)
        .compact()
        .finish();
    if tracing::subscriber::set_global_default(subscriber).is_err() {
        eprintln!("a tracing subscriber was already installed");
    }
}

/// Pick the right answer most of the time, otherwise the first wrong option.
fn learner_choice(learner: &mut StdRng, prompt: &Prompt) -> u32 {
    let correct = prompt.correct_answer();
    if learner.gen_bool(LEARNER_ACCURACY) {
        return correct;
    }
    prompt.options().into_iter().find(|&o| o != correct).unwrap_or(correct)
}

fn run_chapter(chapter: Chapter, config: &EngineConfig, learner: &mut StdRng) {
    println!("━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━");
    println!("  {chapter}");
    println!("━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━");

    let mut session = PracticeSession::new(chapter, config.clone());
    let mut prompt = session.start().clone();
    loop {
        let choice = learner_choice(learner, &prompt);
        let outcome = match session.select_option(choice) {
            Ok(outcome) => outcome,
            Err(e) => {
                eprintln!("  session error: {e}");
                return;
            }
        };
        let mark = if outcome.correct { "✓" } else { "✗" };
        let level = if chapter.is_arithmetic() {
            session.performance_stats().current_tier.display_name()
        } else {
            ""
        };
        println!(
            "  {:<18} options {:?}  picked {:>2} {mark}  {level}",
            prompt.text(),
            prompt.options(),
            choice
        );
        if let Some(line) = session.encouragement() {
            println!("      {line}");
        }

        match session.advance() {
            Ok(Some(next)) => prompt = next.clone(),
            Ok(None) => break,
            Err(e) => {
                eprintln!("  session error: {e}");
                return;
            }
        }
    }

    if let Some(summary) = session.summary() {
        println!();
        println!(
            "  Score {}/{} ({}%)  celebration: {:?}  time: {}",
            summary.correct, summary.total, summary.percent, summary.celebration, summary.time_spent
        );
        if let Some(tier) = summary.final_tier {
            println!("  Finished at the {} level ({tier})", tier.display_name());
        }
    }
    if matches!(chapter, Chapter::NumberPairs) {
        let pairs = session.number_pairs();
        println!(
            "  Pairs found: {} of {}",
            pairs.discovered().len(),
            pairs.rule().completion_target()
        );
    }
    println!();
}

fn main() {
    let cli = Cli::parse();
    setup_logging(cli.verbose);

    let mut config = match cli.config {
        Some(path) => match EngineConfig::from_file(&path) {
            Ok(config) => config,
            Err(e) => {
                eprintln!("{e}");
                std::process::exit(1);
            }
        },
        None => EngineConfig::default(),
    };
    if config.session.rng_seed.is_none() {
        config.session.rng_seed = Some(2024);
    }

    let mut learner = StdRng::seed_from_u64(7);
    for chapter in [
        Chapter::Addition,
        Chapter::Subtraction,
        Chapter::MakingTen,
        Chapter::NumberPairs,
        Chapter::PuzzlePairs,
    ] {
        run_chapter(chapter, &config, &mut learner);
    }
}
