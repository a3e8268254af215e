//! Common test utilities shared by the integration tests.

use rand::{Rng, SeedableRng, rngs::StdRng};
use tictactoe_ai::{Board, Player};

/// Sample reachable, non-terminal positions by random play.
///
/// Each sample pairs the board with the player to move. Games start from
/// the empty board with either player first, so both parities appear.
pub fn sample_positions(seed: u64, count: usize) -> Vec<(Board, Player)> {
    let mut rng = StdRng::seed_from_u64(seed);
    let mut samples = Vec::with_capacity(count);

    while samples.len() < count {
        let mut board = Board::new();
        let mut to_move = if rng.random_bool(0.5) {
            Player::X
        } else {
            Player::O
        };
        let stop_after = rng.random_range(0..8);

        for _ in 0..stop_after {
            let moves = board.moves_available();
            let pos = moves[rng.random_range(0..moves.len())];
            board
                .place(pos, to_move)
                .expect("sampled move is an empty cell");
            to_move = to_move.opposite();
            if board.is_terminal() {
                break;
            }
        }

        if !board.is_terminal() {
            samples.push((board, to_move));
        }
    }

    samples
}
