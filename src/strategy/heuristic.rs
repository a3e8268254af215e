//! Priority-rule heuristic player
//!
//! Rules are tried in order and the first one producing a move wins:
//!
//! 1. complete a line of the AI's own mark, otherwise block the opponent's
//! 2. when the AI holds the center, answer the opponent's corner and edge
//!    patterns
//! 3. take the first free cell among center, corners, sides
//!
//! The heuristic is not optimal in general; the outcome enumerator exists to
//! expose the positions where it goes wrong.

use super::{MoveSelector, ensure_move_available};
use crate::{
    Result,
    tictactoe::{Board, Cell, LineAnalyzer, Player},
};

const CENTER: usize = 4;

/// Fallback scan order: center, corners, then sides
pub const PRIORITY_ORDER: [usize; 9] = [4, 0, 2, 6, 8, 1, 3, 5, 7];

const SIDES: [usize; 4] = [1, 3, 5, 7];

/// (opponent corner, reply) pairs
const OPPOSITE_CORNERS: [(usize, usize); 4] = [(8, 0), (6, 2), (2, 6), (0, 8)];

/// (opponent side, opponent side, reply corner)
const ADJACENT_CORNERS: [(usize, usize, usize); 4] = [(1, 3, 0), (1, 5, 2), (3, 7, 6), (5, 7, 8)];

/// Opponent diagonals that call for a side reply
const DIAGONAL_CORNERS: [(usize, usize); 2] = [(0, 8), (2, 6)];

/// Rule-chain strategy
#[derive(Debug, Clone, Copy, Default)]
pub struct Heuristic;

impl Heuristic {
    /// Rule 1: finish an own line, otherwise block the opponent
    pub fn win_or_block(board: &Board, ai: Player) -> Option<usize> {
        LineAnalyzer::completing_move(&board.cells, ai)
            .or_else(|| LineAnalyzer::completing_move(&board.cells, ai.opposite()))
    }

    /// Rule 2: responses available once the AI owns the center
    pub fn center_strategy(board: &Board, ai: Player) -> Option<usize> {
        if board.get(CENTER) != ai.to_cell() {
            return None;
        }
        let human = ai.opposite().to_cell();

        Self::opposite_corner(board, human)
            .or_else(|| Self::adjacent_corner(board, human))
            .or_else(|| Self::side(board, human))
    }

    fn opposite_corner(board: &Board, human: Cell) -> Option<usize> {
        OPPOSITE_CORNERS
            .iter()
            .find(|&&(corner, reply)| board.get(corner) == human && board.is_empty(reply))
            .map(|&(_, reply)| reply)
    }

    fn adjacent_corner(board: &Board, human: Cell) -> Option<usize> {
        ADJACENT_CORNERS
            .iter()
            .find(|&&(a, b, reply)| {
                board.get(a) == human && board.get(b) == human && board.is_empty(reply)
            })
            .map(|&(_, _, reply)| reply)
    }

    fn side(board: &Board, human: Cell) -> Option<usize> {
        let holds_diagonal = DIAGONAL_CORNERS
            .iter()
            .any(|&(a, b)| board.get(a) == human && board.get(b) == human);
        if !holds_diagonal {
            return None;
        }
        SIDES.iter().copied().find(|&pos| board.is_empty(pos))
    }

    /// Rule 3: first free cell in [`PRIORITY_ORDER`]
    pub fn fallback(board: &Board) -> Option<usize> {
        PRIORITY_ORDER.iter().copied().find(|&pos| board.is_empty(pos))
    }
}

impl MoveSelector for Heuristic {
    fn select_move(&self, board: &Board, ai: Player) -> Result<usize> {
        ensure_move_available(board, self.name())?;

        let chosen = Self::win_or_block(board, ai)
            .or_else(|| Self::center_strategy(board, ai))
            .or_else(|| Self::fallback(board));

        // A non-full board always has a fallback cell
        chosen.ok_or_else(|| crate::Error::invalid_state("heuristic found no empty cell"))
    }

    fn name(&self) -> &str {
        "heuristic"
    }
}
