//! Board state representation and basic operations

use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

use crate::{Error, Result};

/// A cell on the Tic-Tac-Toe board
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Cell {
    Empty,
    X,
    O,
}

impl Cell {
    pub fn to_char(self) -> char {
        match self {
            Cell::Empty => '.',
            Cell::X => 'X',
            Cell::O => 'O',
        }
    }

    pub fn from_char(c: char) -> Option<Cell> {
        match c {
            '.' | ' ' => Some(Cell::Empty),
            'X' | 'x' => Some(Cell::X),
            'O' | 'o' | '0' => Some(Cell::O),
            _ => None,
        }
    }

    /// The player owning this mark, if any
    pub fn to_player(self) -> Option<Player> {
        match self {
            Cell::X => Some(Player::X),
            Cell::O => Some(Player::O),
            Cell::Empty => None,
        }
    }
}

/// A player in the game
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Player {
    X,
    O,
}

impl Player {
    /// Get the opposite player
    pub fn opposite(self) -> Player {
        match self {
            Player::X => Player::O,
            Player::O => Player::X,
        }
    }

    /// Convert player to cell
    pub fn to_cell(self) -> Cell {
        match self {
            Player::X => Cell::X,
            Player::O => Cell::O,
        }
    }

    pub fn to_char(self) -> char {
        self.to_cell().to_char()
    }
}

impl fmt::Display for Player {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_char())
    }
}

impl FromStr for Player {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim() {
            "X" | "x" => Ok(Player::X),
            "O" | "o" => Ok(Player::O),
            other => Err(Error::InvalidPlayerString {
                player: other.to_string(),
            }),
        }
    }
}

/// Nine cells laid out as three rows of three (index = row * 3 + col).
///
/// The board does not track whose turn it is and does not validate turn
/// alternation; callers that mutate it with [`Board::place`] must undo with
/// [`Board::clear`] before handing it back.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Board {
    pub cells: [Cell; 9],
}

impl Board {
    /// Create a new empty board
    pub fn new() -> Self {
        Board {
            cells: [Cell::Empty; 9],
        }
    }

    pub fn from_cells(cells: [Cell; 9]) -> Self {
        Board { cells }
    }

    /// Create a board from a string representation.
    ///
    /// Whitespace other than a plain space and `|` separators are ignored, so
    /// `"XO. / .X. / ..O"` style input works as well as `"XO..X...O"`.
    ///
    /// # Errors
    ///
    /// Returns error unless exactly 9 cell characters are present, or if any
    /// character is not a valid cell representation.
    pub fn from_string(s: &str) -> Result<Self> {
        let chars: Vec<char> = s
            .chars()
            .filter(|&c| !matches!(c, '\t' | '\n' | '\r' | '|' | '/'))
            .collect();
        let chars: Vec<char> = if chars.len() > 9 {
            // Spaces used as separators rather than as empty cells
            chars.into_iter().filter(|&c| c != ' ').collect()
        } else {
            chars
        };

        if chars.len() != 9 {
            return Err(Error::InvalidBoardLength {
                expected: 9,
                got: chars.len(),
                context: s.to_string(),
            });
        }

        let mut cells = [Cell::Empty; 9];
        for (i, &c) in chars.iter().enumerate() {
            cells[i] = Cell::from_char(c).ok_or_else(|| Error::InvalidCellCharacter {
                character: c,
                position: i,
                context: s.to_string(),
            })?;
        }

        Ok(Board { cells })
    }

    /// Whether `pos` addresses a cell of the board
    pub fn is_legal_index(pos: usize) -> bool {
        pos < 9
    }

    /// Get cell at position (0-8)
    pub fn get(&self, pos: usize) -> Cell {
        self.cells[pos]
    }

    /// Check if a position is empty
    pub fn is_empty(&self, pos: usize) -> bool {
        self.cells[pos] == Cell::Empty
    }

    /// Empty positions in ascending order
    pub fn moves_available(&self) -> Vec<usize> {
        self.cells
            .iter()
            .enumerate()
            .filter(|&(_, &cell)| cell == Cell::Empty)
            .map(|(i, _)| i)
            .collect()
    }

    pub fn is_full(&self) -> bool {
        !self.cells.contains(&Cell::Empty)
    }

    /// Number of cells holding `cell`
    pub fn count(&self, cell: Cell) -> usize {
        self.cells.iter().filter(|&&c| c == cell).count()
    }

    /// Put `player`'s mark on an empty cell.
    ///
    /// # Errors
    ///
    /// Returns error if `pos` is out of range or already occupied.
    pub fn place(&mut self, pos: usize, player: Player) -> Result<()> {
        if !Self::is_legal_index(pos) {
            return Err(Error::InvalidPosition { position: pos });
        }
        if !self.is_empty(pos) {
            return Err(Error::InvalidMove { position: pos });
        }
        self.cells[pos] = player.to_cell();
        Ok(())
    }

    /// Undo a [`Board::place`], leaving the cell empty.
    ///
    /// # Errors
    ///
    /// Returns error if `pos` is out of range.
    pub fn clear(&mut self, pos: usize) -> Result<()> {
        if !Self::is_legal_index(pos) {
            return Err(Error::InvalidPosition { position: pos });
        }
        self.cells[pos] = Cell::Empty;
        Ok(())
    }

    /// Return a copy of the board with `player`'s mark at `pos`
    #[must_use = "with_move returns a new board; the original is unchanged"]
    pub fn with_move(&self, pos: usize, player: Player) -> Result<Board> {
        let mut next = *self;
        next.place(pos, player)?;
        Ok(next)
    }

    /// Compact 9-character encoding with `.` for empty cells
    pub fn encode(&self) -> String {
        self.cells.iter().map(|&c| c.to_char()).collect()
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl FromStr for Board {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Board::from_string(s)
    }
}

/// Renders the 3x3 grid with `" | "` column separators and a `---+---+---`
/// line between rows. Empty cells are shown as spaces.
impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in 0..3 {
            let mark = |col: usize| match self.cells[row * 3 + col] {
                Cell::Empty => ' ',
                cell => cell.to_char(),
            };
            write!(f, " {} | {} | {}", mark(0), mark(1), mark(2))?;
            if row < 2 {
                writeln!(f)?;
                writeln!(f, "---+---+---")?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_board() {
        let board = Board::new();
        for i in 0..9 {
            assert_eq!(board.cells[i], Cell::Empty);
        }
        assert_eq!(board.moves_available(), (0..9).collect::<Vec<_>>());
    }

    #[test]
    fn test_opposite_is_involution() {
        for player in [Player::X, Player::O] {
            assert_ne!(player.opposite(), player);
            assert_eq!(player.opposite().opposite(), player);
        }
    }

    #[test]
    fn test_legal_index() {
        assert!(Board::is_legal_index(0));
        assert!(Board::is_legal_index(8));
        assert!(!Board::is_legal_index(9));
    }

    #[test]
    fn test_place_and_clear() {
        let mut board = Board::new();
        board.place(4, Player::X).unwrap();
        assert_eq!(board.get(4), Cell::X);
        assert_eq!(board.moves_available().len(), 8);
        assert!(!board.moves_available().contains(&4));

        // Occupied cell
        let err = board.place(4, Player::O).unwrap_err();
        assert!(err.to_string().contains("occupied"));

        board.clear(4).unwrap();
        assert_eq!(board, Board::new());
    }

    #[test]
    fn test_place_out_of_range() {
        let mut board = Board::new();
        assert!(matches!(
            board.place(9, Player::X),
            Err(Error::InvalidPosition { position: 9 })
        ));
        assert!(board.clear(12).is_err());
    }

    #[test]
    fn test_moves_available_ascending() {
        let board = Board::from_string("X.O.X.O..").unwrap();
        assert_eq!(board.moves_available(), vec![1, 3, 5, 7, 8]);
    }

    #[test]
    fn test_from_string() {
        let board = Board::from_string("XOX......").unwrap();
        assert_eq!(board.cells[0], Cell::X);
        assert_eq!(board.cells[1], Cell::O);
        assert_eq!(board.cells[2], Cell::X);

        // Spaces as empty cells
        let spaced = Board::from_string("OO XX    ").unwrap();
        assert_eq!(spaced.encode(), "OO.XX....");

        // Separators
        let grid = Board::from_string("XO. / .X. / ..O").unwrap();
        assert_eq!(grid.encode(), "XO..X...O");

        assert!(Board::from_string("XO").is_err());
        assert!(matches!(
            Board::from_string("XOXOXOXOXO"),
            Err(Error::InvalidBoardLength { expected: 9, got: 10, .. })
        ));
        assert!(Board::from_string("XOX|OXO|XOX|O").is_err());
        assert!(Board::from_string("XOZ......").is_err());
    }

    #[test]
    fn test_display_grid() {
        let board = Board::from_string("XO.....OX").unwrap();
        let expected = " X | O |  \n---+---+---\n   |   |  \n---+---+---\n   | O | X";
        assert_eq!(format!("{board}"), expected);
    }

    #[test]
    fn test_player_parse() {
        assert_eq!("x".parse::<Player>().unwrap(), Player::X);
        assert_eq!("O".parse::<Player>().unwrap(), Player::O);
        assert!("Z".parse::<Player>().is_err());
    }
}
