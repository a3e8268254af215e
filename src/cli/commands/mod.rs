//! CLI subcommands

pub mod analyze;
pub mod compare;
pub mod duel;
pub mod evaluate;
