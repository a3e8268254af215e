//! Tic-Tac-Toe engine and AI strength analyzer
//!
//! This crate provides:
//! - A 3x3 board model with terminal-state evaluation
//! - Two move strategies: a priority-rule heuristic and exhaustive minimax
//! - An enumerator that plays a strategy against every possible opponent line
//! - A session driver and CLI reporting win/tie/lose statistics

pub mod analysis;
pub mod cli;
pub mod error;
pub mod session;
pub mod strategy;
pub mod tictactoe;
pub mod utils;

pub use analysis::{Enumerator, LosingBoardSet, ResultTally};
pub use error::{Error, Result};
pub use session::{Session, SessionConfig, SessionReport};
pub use strategy::{Heuristic, Minimax, MoveSelector, RandomizedMinimax, StrategyKind};
pub use tictactoe::{Board, Cell, Outcome, Player};
