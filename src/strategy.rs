//! Move selection strategies for the AI player
//!
//! Every strategy is a pure function of the board and the player it moves
//! for, so a single selector can be shared across enumeration threads.

pub mod heuristic;
pub mod minimax;

use std::fmt;

use clap::ValueEnum;
use serde::{Deserialize, Serialize};

pub use heuristic::Heuristic;
pub use minimax::{Minimax, MoveValue, RandomizedMinimax};

use crate::{
    Error, Result,
    tictactoe::{Board, Player},
};

/// Chooses one move for the AI on a non-full board
pub trait MoveSelector: Send + Sync {
    /// Select the position (0-8) where `ai` places its mark.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidState`] when the board has no empty cell.
    fn select_move(&self, board: &Board, ai: Player) -> Result<usize>;

    /// Human-readable strategy name
    fn name(&self) -> &str;
}

impl<S: MoveSelector + ?Sized> MoveSelector for Box<S> {
    fn select_move(&self, board: &Board, ai: Player) -> Result<usize> {
        (**self).select_move(board, ai)
    }

    fn name(&self) -> &str {
        (**self).name()
    }
}

/// Available strategies, selectable from configuration and the command line
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "kebab-case")]
pub enum StrategyKind {
    /// Priority-rule heuristic
    #[default]
    Heuristic,
    /// Exhaustive minimax, lowest index among equally valued moves
    Minimax,
    /// Exhaustive minimax, seeded random choice among equally valued moves
    RandomizedMinimax,
}

impl StrategyKind {
    pub const ALL: [StrategyKind; 3] = [
        StrategyKind::Heuristic,
        StrategyKind::Minimax,
        StrategyKind::RandomizedMinimax,
    ];

    /// Instantiate the selector; `seed` only affects randomized strategies
    pub fn build(self, seed: u64) -> Box<dyn MoveSelector> {
        match self {
            StrategyKind::Heuristic => Box::new(Heuristic),
            StrategyKind::Minimax => Box::new(Minimax),
            StrategyKind::RandomizedMinimax => Box::new(RandomizedMinimax::new(seed)),
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            StrategyKind::Heuristic => "heuristic",
            StrategyKind::Minimax => "minimax",
            StrategyKind::RandomizedMinimax => "randomized-minimax",
        }
    }
}

impl fmt::Display for StrategyKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Shared guard for selectors invoked on a board without empty cells
pub(crate) fn ensure_move_available(board: &Board, strategy: &str) -> Result<()> {
    if board.is_full() {
        return Err(Error::invalid_state(format!(
            "{strategy} selector called on full board '{}'",
            board.encode()
        )));
    }
    Ok(())
}
