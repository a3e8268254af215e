//! Terminal-state detection and outcome classification

use serde::{Deserialize, Serialize};

use super::{Board, Player, lines::LineAnalyzer};
use crate::{Error, Result};

/// Result of a finished game from one player's point of view
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Outcome {
    Win,
    Tie,
    Lose,
}

impl Outcome {
    pub const ALL: [Outcome; 3] = [Outcome::Win, Outcome::Tie, Outcome::Lose];

    /// Minimax value: Win = +1, Tie = 0, Lose = -1
    pub fn value(self) -> i32 {
        match self {
            Outcome::Win => 1,
            Outcome::Tie => 0,
            Outcome::Lose => -1,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Outcome::Win => "win",
            Outcome::Tie => "tie",
            Outcome::Lose => "lose",
        }
    }
}

/// Perspective-free status of a board
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BoardStatus {
    Ongoing,
    Won(Player),
    Tie,
}

impl Board {
    /// Owner of the first completed winning line, if any
    pub fn winner(&self) -> Option<Player> {
        LineAnalyzer::first_completed_line(&self.cells)
    }

    /// Check if the game is over (a completed line or a full board)
    pub fn is_terminal(&self) -> bool {
        self.winner().is_some() || self.is_full()
    }

    pub fn status(&self) -> BoardStatus {
        match self.winner() {
            Some(player) => BoardStatus::Won(player),
            None if self.is_full() => BoardStatus::Tie,
            None => BoardStatus::Ongoing,
        }
    }
}

/// Classify a finished board relative to `perspective`.
///
/// # Errors
///
/// Returns [`Error::InvalidState`] if the board is not terminal.
pub fn classify(board: &Board, perspective: Player) -> Result<Outcome> {
    match board.status() {
        BoardStatus::Won(player) if player == perspective => Ok(Outcome::Win),
        BoardStatus::Won(_) => Ok(Outcome::Lose),
        BoardStatus::Tie => Ok(Outcome::Tie),
        BoardStatus::Ongoing => Err(Error::invalid_state(format!(
            "cannot classify non-terminal board '{}'",
            board.encode()
        ))),
    }
}

/// Terminal value of a board for `perspective`: -1, 0 or +1.
///
/// # Errors
///
/// Returns [`Error::InvalidState`] if the board is not terminal.
pub fn heuristic_value(board: &Board, perspective: Player) -> Result<i32> {
    classify(board, perspective).map(Outcome::value)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn board(s: &str) -> Board {
        Board::from_string(s).unwrap()
    }

    #[test]
    fn test_win_detection() {
        assert!(board("XXX.OO...").is_terminal());
        assert!(board("O..O..O.X").is_terminal());
        assert!(board("X...X...X").is_terminal());
        assert!(board("..O.O.O..").is_terminal());
    }

    #[test]
    fn test_full_board_is_terminal_tie() {
        let tie = board("XOXXOOOXX");
        assert!(tie.is_terminal());
        assert_eq!(tie.status(), BoardStatus::Tie);
        assert_eq!(classify(&tie, Player::X).unwrap(), Outcome::Tie);
        assert_eq!(heuristic_value(&tie, Player::O).unwrap(), 0);
    }

    #[test]
    fn test_non_terminal() {
        let open = board("XO.......");
        assert!(!open.is_terminal());
        assert_eq!(open.status(), BoardStatus::Ongoing);
        assert!(!Board::new().is_terminal());
    }

    #[test]
    fn test_classify_perspective() {
        let x_wins = board("XXXOO....");
        assert_eq!(classify(&x_wins, Player::X).unwrap(), Outcome::Win);
        assert_eq!(classify(&x_wins, Player::O).unwrap(), Outcome::Lose);
        assert_eq!(heuristic_value(&x_wins, Player::X).unwrap(), 1);
        assert_eq!(heuristic_value(&x_wins, Player::O).unwrap(), -1);
    }

    #[test]
    fn test_full_board_with_winner_is_not_a_tie() {
        // X completes the diagonal with the last mark
        let full_win = board("XOOOXXOXX");
        assert_eq!(full_win.status(), BoardStatus::Won(Player::X));
        assert_eq!(classify(&full_win, Player::O).unwrap(), Outcome::Lose);
    }

    #[test]
    fn test_classify_rejects_non_terminal() {
        let err = classify(&Board::new(), Player::X).unwrap_err();
        assert!(matches!(err, Error::InvalidState { .. }));
        assert!(heuristic_value(&board("X........"), Player::O).is_err());
    }
}
