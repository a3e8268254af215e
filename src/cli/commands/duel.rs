//! Duel command - Play one game between two strategies

use anyhow::Result;
use clap::Parser;

use crate::{
    analysis::play_match,
    cli::output::{print_kv, print_subsection},
    strategy::StrategyKind,
    tictactoe::{BoardStatus, Player},
};

#[derive(Parser, Debug)]
#[command(about = "Play a single game between two strategies")]
pub struct DuelArgs {
    /// Strategy playing X
    #[arg(long = "x", value_enum, default_value = "minimax")]
    pub x_strategy: StrategyKind,

    /// Strategy playing O
    #[arg(long = "o", value_enum, default_value = "heuristic")]
    pub o_strategy: StrategyKind,

    /// Which mark moves first (`x` or `o`)
    #[arg(long, default_value = "x")]
    pub first: Player,

    /// Seed for randomized strategies
    #[arg(long, default_value_t = 0)]
    pub seed: u64,
}

pub fn execute(args: DuelArgs) -> Result<()> {
    let x = args.x_strategy.build(args.seed);
    // Distinct seed so two randomized players do not mirror each other
    let o = args.o_strategy.build(args.seed.wrapping_add(1));

    let record = play_match(&x, &o, args.first)?;

    for (turn, mv) in record.moves.iter().enumerate() {
        print_subsection(&format!(
            "Move {}: {} plays {} (row {}, col {})",
            turn + 1,
            mv.player,
            mv.position,
            mv.position / 3,
            mv.position % 3
        ));
    }
    println!("\n{}\n", record.final_board);

    let result = match record.status {
        BoardStatus::Won(player) => {
            let strategy = match player {
                Player::X => args.x_strategy,
                Player::O => args.o_strategy,
            };
            format!("{player} wins ({strategy})")
        }
        BoardStatus::Tie => "It's a tie".to_string(),
        BoardStatus::Ongoing => "Unfinished".to_string(),
    };
    print_kv("Result", &result);
    Ok(())
}
