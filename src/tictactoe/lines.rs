//! Winning line analysis for Tic-Tac-Toe

use super::{Cell, Player};

/// Winning line indices on the 3x3 board, in scan order
pub const WINNING_LINES: [[usize; 3]; 8] = [
    [0, 1, 2],
    [3, 4, 5],
    [6, 7, 8], // rows
    [0, 3, 6],
    [1, 4, 7],
    [2, 5, 8], // columns
    [0, 4, 8],
    [2, 4, 6], // diagonals
];

/// Utility for analyzing winning lines in Tic-Tac-Toe
pub struct LineAnalyzer;

impl LineAnalyzer {
    /// Owner of the first completed line in [`WINNING_LINES`] order
    pub fn first_completed_line(cells: &[Cell; 9]) -> Option<Player> {
        WINNING_LINES.iter().find_map(|&[a, b, c]| {
            if cells[a] != Cell::Empty && cells[a] == cells[b] && cells[b] == cells[c] {
                cells[a].to_player()
            } else {
                None
            }
        })
    }

    /// First empty cell that would complete a line of `player`'s mark.
    ///
    /// Lines are scanned in [`WINNING_LINES`] order; within a line the empty
    /// cell is looked for at the first, then second, then third position.
    pub fn completing_move(cells: &[Cell; 9], player: Player) -> Option<usize> {
        let mark = player.to_cell();
        WINNING_LINES
            .iter()
            .find_map(|line| Self::completing_move_in_line(cells, mark, line))
    }

    fn completing_move_in_line(cells: &[Cell; 9], mark: Cell, line: &[usize; 3]) -> Option<usize> {
        let [a, b, c] = *line;
        if cells[b] == mark && cells[c] == mark && cells[a] == Cell::Empty {
            return Some(a);
        }
        if cells[a] == mark && cells[c] == mark && cells[b] == Cell::Empty {
            return Some(b);
        }
        if cells[a] == mark && cells[b] == mark && cells[c] == Cell::Empty {
            return Some(c);
        }
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lines_cover_every_cell() {
        let mut hits = [0usize; 9];
        for line in WINNING_LINES {
            for idx in line {
                hits[idx] += 1;
            }
        }
        // corners sit on 3 lines, sides on 2, the center on 4
        assert_eq!(hits, [3, 2, 3, 2, 4, 2, 3, 2, 3]);
    }

    #[test]
    fn test_completed_row() {
        let mut cells = [Cell::Empty; 9];
        cells[0] = Cell::X;
        cells[1] = Cell::X;
        cells[2] = Cell::X;

        assert_eq!(LineAnalyzer::first_completed_line(&cells), Some(Player::X));
    }

    #[test]
    fn test_completed_column() {
        let mut cells = [Cell::Empty; 9];
        cells[0] = Cell::O;
        cells[3] = Cell::O;
        cells[6] = Cell::O;

        assert_eq!(LineAnalyzer::first_completed_line(&cells), Some(Player::O));
    }

    #[test]
    fn test_first_completed_line_follows_scan_order() {
        // O on the middle column and X on the bottom row; rows are scanned first
        let mut cells = [Cell::Empty; 9];
        for idx in [1, 4] {
            cells[idx] = Cell::O;
        }
        cells[7] = Cell::X;
        cells[6] = Cell::X;
        cells[8] = Cell::X;
        assert_eq!(LineAnalyzer::first_completed_line(&cells), Some(Player::X));

        assert_eq!(LineAnalyzer::first_completed_line(&[Cell::Empty; 9]), None);
    }

    #[test]
    fn test_completing_move_positions() {
        // X.X
        let mut cells = [Cell::Empty; 9];
        cells[0] = Cell::X;
        cells[2] = Cell::X;
        assert_eq!(LineAnalyzer::completing_move(&cells, Player::X), Some(1));
        assert_eq!(LineAnalyzer::completing_move(&cells, Player::O), None);

        // .OO
        let mut cells = [Cell::Empty; 9];
        cells[1] = Cell::O;
        cells[2] = Cell::O;
        assert_eq!(LineAnalyzer::completing_move(&cells, Player::O), Some(0));
    }

    #[test]
    fn test_completing_move_blocked_line() {
        let mut cells = [Cell::Empty; 9];
        cells[0] = Cell::X;
        cells[1] = Cell::X;
        cells[2] = Cell::O;
        assert_eq!(LineAnalyzer::completing_move(&cells, Player::X), None);
    }
}
