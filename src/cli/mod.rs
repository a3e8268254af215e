//! Command-line interface for the strength analyzer
//!
//! Running the binary without a subcommand reproduces the classic report:
//! the heuristic AI playing O, both starting configurations, and every board
//! it lost on.

pub mod commands;
pub mod output;
