//! Single games between two strategies

use log::debug;
use serde::Serialize;

use crate::{
    Result,
    strategy::MoveSelector,
    tictactoe::{Board, BoardStatus, Player},
};

/// A move made during a match
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PlayedMove {
    pub player: Player,
    pub position: usize,
}

/// Complete record of one match
#[derive(Debug, Clone, Serialize)]
pub struct MatchRecord {
    pub first_player: Player,
    pub moves: Vec<PlayedMove>,
    pub final_board: Board,
    pub status: BoardStatus,
}

impl MatchRecord {
    pub fn winner(&self) -> Option<Player> {
        match self.status {
            BoardStatus::Won(player) => Some(player),
            _ => None,
        }
    }
}

/// Play one game from the empty board, `x` moving for X and `o` for O
pub fn play_match<X, O>(x: &X, o: &O, first_player: Player) -> Result<MatchRecord>
where
    X: MoveSelector + ?Sized,
    O: MoveSelector + ?Sized,
{
    let mut board = Board::new();
    let mut to_move = first_player;
    let mut moves = Vec::with_capacity(9);

    while !board.is_terminal() {
        let position = match to_move {
            Player::X => x.select_move(&board, Player::X)?,
            Player::O => o.select_move(&board, Player::O)?,
        };
        board.place(position, to_move)?;
        debug!("{to_move} plays {position}");
        moves.push(PlayedMove {
            player: to_move,
            position,
        });
        to_move = to_move.opposite();
    }

    Ok(MatchRecord {
        first_player,
        moves,
        final_board: board,
        status: board.status(),
    })
}
