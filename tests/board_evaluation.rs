//! Terminal-state and outcome invariants checked over every 3x3 board

use tictactoe_ai::{
    Board, Cell, Outcome, Player,
    tictactoe::{BoardStatus, WINNING_LINES, classify, heuristic_value},
};

/// All 3^9 cell assignments, legal or not
fn enumerate_boards() -> Vec<Board> {
    let mut boards = Vec::with_capacity(3usize.pow(9));
    for index in 0..3usize.pow(9) {
        let mut n = index;
        let mut cells = [Cell::Empty; 9];
        for slot in (0..9).rev() {
            cells[slot] = match n % 3 {
                0 => Cell::Empty,
                1 => Cell::X,
                2 => Cell::O,
                _ => unreachable!(),
            };
            n /= 3;
        }
        boards.push(Board::from_cells(cells));
    }
    boards
}

fn has_completed_line(board: &Board) -> bool {
    WINNING_LINES.iter().any(|&[a, b, c]| {
        board.cells[a] != Cell::Empty
            && board.cells[a] == board.cells[b]
            && board.cells[b] == board.cells[c]
    })
}

#[test]
fn terminal_iff_line_or_full() {
    for board in enumerate_boards() {
        let expected = has_completed_line(&board) || !board.cells.contains(&Cell::Empty);
        assert_eq!(
            board.is_terminal(),
            expected,
            "terminal mismatch for {}",
            board.encode()
        );
    }
}

#[test]
fn classification_is_defined_exactly_on_terminal_boards() {
    for board in enumerate_boards() {
        for player in [Player::X, Player::O] {
            let outcome = classify(&board, player);
            assert_eq!(outcome.is_ok(), board.is_terminal(), "{}", board.encode());
            assert_eq!(heuristic_value(&board, player).is_ok(), board.is_terminal());
        }
    }
}

#[test]
fn outcomes_are_symmetric_between_players() {
    for board in enumerate_boards().into_iter().filter(Board::is_terminal) {
        let x = classify(&board, Player::X).unwrap();
        let o = classify(&board, Player::O).unwrap();
        assert!(!(x == Outcome::Win && o == Outcome::Win));
        match x {
            Outcome::Win => assert_eq!(o, Outcome::Lose),
            Outcome::Lose => assert_eq!(o, Outcome::Win),
            Outcome::Tie => assert_eq!(o, Outcome::Tie),
        }
        assert_eq!(
            heuristic_value(&board, Player::X).unwrap(),
            -heuristic_value(&board, Player::O).unwrap()
        );
    }
}

#[test]
fn status_agrees_with_classification() {
    for board in enumerate_boards() {
        match board.status() {
            BoardStatus::Ongoing => assert!(!board.is_terminal()),
            BoardStatus::Tie => {
                assert_eq!(classify(&board, Player::X).unwrap(), Outcome::Tie);
            }
            BoardStatus::Won(player) => {
                assert_eq!(classify(&board, player).unwrap(), Outcome::Win);
            }
        }
    }
}

#[test]
fn moves_available_lists_empty_cells_ascending() {
    for board in enumerate_boards().into_iter().step_by(37) {
        let moves = board.moves_available();
        assert!(moves.windows(2).all(|pair| pair[0] < pair[1]));
        assert_eq!(moves.len(), board.count(Cell::Empty));
        assert!(moves.iter().all(|&pos| board.is_empty(pos)));
    }
}
