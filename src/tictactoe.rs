//! Tic-Tac-Toe board model and terminal-state evaluation

pub mod board;
pub mod evaluation;
pub mod lines;

pub use board::{Board, Cell, Player};
pub use evaluation::{BoardStatus, Outcome, classify, heuristic_value};
pub use lines::{LineAnalyzer, WINNING_LINES};
