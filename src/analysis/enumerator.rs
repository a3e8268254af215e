//! Exhaustive enumeration of every opponent line against a fixed strategy

use std::thread;

use log::debug;

use super::tally::{LosingBoardSet, ResultTally};
use crate::{
    Error, Result,
    strategy::MoveSelector,
    tictactoe::{Board, Outcome, Player, classify},
};

/// Plays one AI strategy against every possible sequence of opponent moves.
///
/// On AI turns the selector picks a single move; on opponent turns every
/// empty cell is tried in ascending order. Terminal boards are classified
/// from the AI's point of view and counted in the caller's accumulators.
pub struct Enumerator<'a, S: MoveSelector + ?Sized> {
    selector: &'a S,
    ai_player: Player,
}

impl<'a, S: MoveSelector + ?Sized> Enumerator<'a, S> {
    pub fn new(selector: &'a S, ai_player: Player) -> Self {
        Self {
            selector,
            ai_player,
        }
    }

    /// Enumerate all games from the empty board with `initial_player` to move
    pub fn enumerate(
        &self,
        initial_player: Player,
        tally: &mut ResultTally,
        losing_boards: &mut LosingBoardSet,
    ) -> Result<()> {
        debug!(
            "enumerating {} as {} with {} moving first",
            self.selector.name(),
            self.ai_player,
            initial_player
        );
        let mut board = Board::new();
        self.enumerate_from(&mut board, initial_player, tally, losing_boards)?;
        debug!("enumeration finished: {tally}");
        Ok(())
    }

    /// Enumerate all games continuing from `board` with `to_move` to move.
    ///
    /// The board is mutated during the walk and is identical to its entry
    /// state when this returns, including on error.
    pub fn enumerate_from(
        &self,
        board: &mut Board,
        to_move: Player,
        tally: &mut ResultTally,
        losing_boards: &mut LosingBoardSet,
    ) -> Result<()> {
        if board.is_terminal() {
            let outcome = classify(board, self.ai_player)?;
            tally.record(outcome);
            if outcome == Outcome::Lose {
                losing_boards.insert(*board);
            }
            return Ok(());
        }

        if to_move == self.ai_player {
            let pos = self.selector.select_move(board, self.ai_player)?;
            self.visit(board, pos, to_move, tally, losing_boards)
        } else {
            for pos in board.moves_available() {
                self.visit(board, pos, to_move, tally, losing_boards)?;
            }
            Ok(())
        }
    }

    fn visit(
        &self,
        board: &mut Board,
        pos: usize,
        mover: Player,
        tally: &mut ResultTally,
        losing_boards: &mut LosingBoardSet,
    ) -> Result<()> {
        board.place(pos, mover)?;
        let result = self.enumerate_from(board, mover.opposite(), tally, losing_boards);
        board.clear(pos)?;
        result
    }

    /// Same results as [`Enumerator::enumerate`], with one thread per
    /// opponent opening move.
    ///
    /// Each worker walks its own board copy and fills private accumulators
    /// that are merged into the caller's once every worker has joined.
    pub fn enumerate_parallel(
        &self,
        initial_player: Player,
        tally: &mut ResultTally,
        losing_boards: &mut LosingBoardSet,
    ) -> Result<()> {
        let mut board = Board::new();
        let mut to_move = initial_player;

        // The AI's opening is deterministic, so branching starts one ply later
        if to_move == self.ai_player {
            let pos = self.selector.select_move(&board, self.ai_player)?;
            board.place(pos, self.ai_player)?;
            to_move = to_move.opposite();
        }

        let branches = board.moves_available();
        debug!(
            "enumerating {} as {} across {} worker threads",
            self.selector.name(),
            self.ai_player,
            branches.len()
        );

        let results: Vec<Result<(ResultTally, LosingBoardSet)>> = thread::scope(|scope| {
            let handles: Vec<_> = branches
                .iter()
                .map(|&pos| {
                    let mut branch = board;
                    scope.spawn(move || -> Result<(ResultTally, LosingBoardSet)> {
                        let mut local_tally = ResultTally::new();
                        let mut local_losing = LosingBoardSet::new();
                        branch.place(pos, to_move)?;
                        self.enumerate_from(
                            &mut branch,
                            to_move.opposite(),
                            &mut local_tally,
                            &mut local_losing,
                        )?;
                        Ok((local_tally, local_losing))
                    })
                })
                .collect();

            handles
                .into_iter()
                .map(|handle| {
                    handle
                        .join()
                        .unwrap_or_else(|_| Err(Error::invalid_state("enumeration worker panicked")))
                })
                .collect()
        });

        for result in results {
            let (local_tally, local_losing) = result?;
            tally.merge(&local_tally);
            losing_boards.merge(local_losing);
        }
        debug!("parallel enumeration finished: {tally}");
        Ok(())
    }
}
