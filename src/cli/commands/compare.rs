//! Compare command - Run the strength session for several strategies

use anyhow::{Result, anyhow};
use clap::Parser;

use crate::{
    cli::output::{create_spinner, format_number, format_percentage, print_section},
    session::{Session, SessionConfig, SessionReport},
    strategy::StrategyKind,
    tictactoe::Player,
};

#[derive(Parser, Debug)]
#[command(about = "Compare strategies side-by-side")]
pub struct CompareArgs {
    /// Strategies to compare (defaults to all)
    #[arg(value_enum)]
    pub strategies: Vec<StrategyKind>,

    /// Mark played by the AI (`x` or `o`)
    #[arg(long, default_value = "o")]
    pub ai_player: Player,

    /// Seed for randomized strategies
    #[arg(long, default_value_t = 0)]
    pub seed: u64,

    /// Split enumeration across worker threads
    #[arg(long)]
    pub parallel: bool,
}

pub fn execute(args: CompareArgs) -> Result<()> {
    let strategies = if args.strategies.is_empty() {
        StrategyKind::ALL.to_vec()
    } else {
        args.strategies.clone()
    };
    if strategies.len() < 2 {
        return Err(anyhow!("Need at least 2 strategies to compare"));
    }

    let mut reports = Vec::with_capacity(strategies.len());
    for strategy in strategies {
        let config = SessionConfig::default()
            .with_strategy(strategy)
            .with_ai_player(args.ai_player)
            .with_seed(args.seed)
            .with_parallel(args.parallel);
        let spinner = create_spinner(&format!("Evaluating {strategy}..."));
        let report = Session::new(config).run();
        spinner.finish_and_clear();
        reports.push(report?);
    }

    print_section(&format!("Strategy comparison (AI plays {})", args.ai_player));
    println!(
        "{:<20} {:>16} {:>16} {:>8} {:>10} {:>7}",
        "Strategy", "Player starts", "AI starts", "Games", "Win rate", "Losses"
    );
    for report in &reports {
        print_row(report);
    }

    Ok(())
}

fn print_row(report: &SessionReport) {
    let column = |index: usize| {
        report
            .runs
            .get(index)
            .map(|run| format!("{}-{}-{}", run.tally.win, run.tally.tie, run.tally.lose))
            .unwrap_or_default()
    };
    println!(
        "{:<20} {:>16} {:>16} {:>8} {:>10} {:>7}",
        report.strategy.as_str(),
        column(0),
        column(1),
        format_number(report.total_games()),
        format_percentage(report.win_rate()),
        report.total_losses()
    );
}
