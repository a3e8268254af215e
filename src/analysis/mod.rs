//! Strength analysis for AI strategies
//!
//! The enumerator plays a fixed strategy against every possible sequence of
//! opponent moves; the tally and losing-board set collect what it finds.

pub mod duel;
pub mod enumerator;
pub mod tally;

pub use duel::{MatchRecord, play_match};
pub use enumerator::Enumerator;
pub use tally::{LosingBoardSet, ResultTally};
