//! Exhaustive minimax player
//!
//! Searches the full game tree with no pruning and no transposition table.
//! A 3x3 board has fewer than 9! move sequences, so the plain search is
//! fast enough for the enumerator.

use rand::{Rng, SeedableRng, rngs::StdRng};
use serde::Serialize;

use super::{MoveSelector, ensure_move_available};
use crate::{
    Result,
    tictactoe::{Board, Cell, Player, heuristic_value},
};

/// Minimax value of a single candidate move
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct MoveValue {
    pub position: usize,
    pub value: i32,
}

/// Value of `board` for `perspective` under perfect play.
///
/// `maximizing` tells whose turn it is: `perspective` when true, the
/// opponent when false. The board is mutated during the search and restored
/// before returning.
pub fn minimax(perspective: Player, board: &mut Board, maximizing: bool) -> Result<i32> {
    if board.is_terminal() {
        return heuristic_value(board, perspective);
    }

    let mover = if maximizing {
        perspective
    } else {
        perspective.opposite()
    };
    // Values are confined to -1..=1, so the worst case seeds the search
    let mut best = if maximizing { -1 } else { 1 };

    for pos in 0..9 {
        if board.cells[pos] != Cell::Empty {
            continue;
        }
        board.place(pos, mover)?;
        let value = minimax(perspective, board, !maximizing);
        board.clear(pos)?;
        let value = value?;

        if (maximizing && value > best) || (!maximizing && value < best) {
            best = value;
        }
    }

    Ok(best)
}

/// Deterministic minimax strategy
#[derive(Debug, Clone, Copy, Default)]
pub struct Minimax;

impl Minimax {
    /// Minimax value of every legal move for `ai`, in ascending position order.
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::InvalidState`] when the board is full.
    pub fn move_values(board: &Board, ai: Player) -> Result<Vec<MoveValue>> {
        ensure_move_available(board, "minimax")?;

        let mut scratch = *board;
        let mut values = Vec::with_capacity(9);
        for position in board.moves_available() {
            scratch.place(position, ai)?;
            // The opponent replies next, which is the minimizing side
            let value = minimax(ai, &mut scratch, false);
            scratch.clear(position)?;
            values.push(MoveValue {
                position,
                value: value?,
            });
        }
        Ok(values)
    }

    /// All positions sharing the best value, ascending
    pub fn best_moves(board: &Board, ai: Player) -> Result<Vec<usize>> {
        let values = Self::move_values(board, ai)?;
        let best = values.iter().map(|mv| mv.value).max();
        Ok(values
            .iter()
            .filter(|mv| Some(mv.value) == best)
            .map(|mv| mv.position)
            .collect())
    }
}

impl MoveSelector for Minimax {
    fn select_move(&self, board: &Board, ai: Player) -> Result<usize> {
        let values = Self::move_values(board, ai)?;

        // Strictly greater keeps the lowest index among ties
        let mut best: Option<MoveValue> = None;
        for candidate in values {
            if best.is_none_or(|current| candidate.value > current.value) {
                best = Some(candidate);
            }
        }

        best.map(|mv| mv.position)
            .ok_or_else(|| crate::Error::invalid_state("minimax found no legal move"))
    }

    fn name(&self) -> &str {
        "minimax"
    }
}

/// Minimax strategy that picks uniformly among all best moves.
///
/// The random source is reseeded from the configured seed and the board
/// contents on every call, so the same board always yields the same move.
#[derive(Debug, Clone, Copy)]
pub struct RandomizedMinimax {
    seed: u64,
}

impl RandomizedMinimax {
    pub fn new(seed: u64) -> Self {
        Self { seed }
    }

    fn board_seed(&self, board: &Board, ai: Player) -> u64 {
        let code = board
            .cells
            .iter()
            .fold(0u64, |acc, &cell| acc * 3 + cell as u64);
        let player_bit = match ai {
            Player::X => 0,
            Player::O => 1u64 << 63,
        };
        self.seed ^ code.wrapping_mul(0x9E37_79B9_7F4A_7C15) ^ player_bit
    }
}

impl MoveSelector for RandomizedMinimax {
    fn select_move(&self, board: &Board, ai: Player) -> Result<usize> {
        let best = Minimax::best_moves(board, ai)?;
        if best.is_empty() {
            return Err(crate::Error::invalid_state("minimax found no legal move"));
        }
        let mut rng = StdRng::seed_from_u64(self.board_seed(board, ai));
        Ok(best[rng.random_range(0..best.len())])
    }

    fn name(&self) -> &str {
        "randomized-minimax"
    }
}
