//! Tic-Tac-Toe AI strength analyzer
//!
//! Without a subcommand this runs the default session: the heuristic AI
//! playing O against every possible opponent, once with the opponent moving
//! first and once with the AI moving first.

use anyhow::Result;
use clap::{Parser, Subcommand};
use tictactoe_ai::{
    cli::commands::{analyze, compare, duel, evaluate},
    utils::init_logging,
};

#[derive(Parser)]
#[command(name = "tictactoe")]
#[command(version, about = "Measure Tic-Tac-Toe AI strategies against every opponent", long_about = None)]
struct Cli {
    /// Enable debug logging
    #[arg(long, short = 'v', global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Enumerate every opponent line against one strategy
    Evaluate(evaluate::EvaluateArgs),

    /// Compare strategies side-by-side
    Compare(compare::CompareArgs),

    /// Inspect both strategies on a single position
    Analyze(analyze::AnalyzeArgs),

    /// Play one game between two strategies
    Duel(duel::DuelArgs),
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match cli.command {
        None => evaluate::execute(evaluate::EvaluateArgs::default()),
        Some(Commands::Evaluate(args)) => evaluate::execute(args),
        Some(Commands::Compare(args)) => compare::execute(args),
        Some(Commands::Analyze(args)) => analyze::execute(args),
        Some(Commands::Duel(args)) => duel::execute(args),
    }
}
