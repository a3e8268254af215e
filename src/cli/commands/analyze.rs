//! Analyze command - Inspect both strategies on a single position

use anyhow::{Result, bail};
use clap::Parser;

use crate::{
    cli::output::{print_kv, print_section},
    strategy::{Heuristic, Minimax, MoveSelector},
    tictactoe::{Board, Player},
};

#[derive(Parser, Debug)]
#[command(about = "Show heuristic and minimax choices for a position")]
pub struct AnalyzeArgs {
    /// Board cells, row by row (`.` or space for empty), e.g. "OO.XX...."
    #[arg(long, short = 'b', default_value = ".........")]
    pub board: String,

    /// Mark the AI moves for (`x` or `o`)
    #[arg(long, default_value = "o")]
    pub ai: Player,
}

pub fn execute(args: AnalyzeArgs) -> Result<()> {
    let board = Board::from_string(&args.board)?;

    print_section(&format!("Position analysis ({} to move)", args.ai));
    println!("{board}\n");

    if board.is_terminal() {
        bail!("board '{}' is already finished", board.encode());
    }

    let heuristic = Heuristic.select_move(&board, args.ai)?;
    let minimax = Minimax.select_move(&board, args.ai)?;
    print_kv("Heuristic move", &describe(heuristic));
    print_kv("Minimax move", &describe(minimax));

    println!("\nMinimax value per move ({} perspective):", args.ai);
    for mv in Minimax::move_values(&board, args.ai)? {
        let verdict = match mv.value {
            1 => "win",
            0 => "draw",
            _ => "loss",
        };
        println!("  - {} -> {:+} ({verdict})", describe(mv.position), mv.value);
    }

    Ok(())
}

fn describe(position: usize) -> String {
    format!("position {} (row {}, col {})", position, position / 3, position % 3)
}
