//! Output formatting and progress spinners for CLI

use std::time::Duration;

use indicatif::{ProgressBar, ProgressStyle};

use crate::{analysis::LosingBoardSet, session::SessionReport, tictactoe::Board};

/// Create a spinner for long-running enumerations
pub fn create_spinner(message: &str) -> ProgressBar {
    let pb = ProgressBar::new_spinner();
    match ProgressStyle::default_spinner().template("{spinner:.green} {msg}") {
        Ok(style) => pb.set_style(style),
        Err(err) => log::warn!("spinner template rejected: {err}"),
    }
    pb.set_message(message.to_string());
    pb.enable_steady_tick(Duration::from_millis(100));
    pb
}

/// Print a section header
pub fn print_section(title: &str) {
    println!("\n{}", "=".repeat(60));
    println!("{title}");
    println!("{}", "=".repeat(60));
}

/// Print a subsection header
pub fn print_subsection(title: &str) {
    println!("\n{title}");
    println!("{}", "-".repeat(40));
}

/// Format a number with thousands separators
pub fn format_number(n: usize) -> String {
    let s = n.to_string();
    let mut result = String::new();
    for (i, c) in s.chars().rev().enumerate() {
        if i > 0 && i % 3 == 0 {
            result.insert(0, ',');
        }
        result.insert(0, c);
    }
    result
}

/// Two-decimal percentage, e.g. `72.19 %`
pub fn format_percentage(rate: f64) -> String {
    format!("{rate:.2} %")
}

/// Print a key-value pair
pub fn print_kv(key: &str, value: &str) {
    println!("  {:20} {}", format!("{}:", key), value);
}

/// Render a board the way the report prints it, followed by a blank line
pub fn render_board(board: &Board) -> String {
    format!("{board}\n")
}

/// Print every losing board, numbered from 1
pub fn print_losing_boards(boards: &LosingBoardSet) {
    for (i, board) in boards.iter().enumerate() {
        println!("Losing Board {}:", i + 1);
        println!("{}", render_board(board));
    }
}

/// Print the per-run tallies, totals and win rate of a session
pub fn print_session_report(report: &SessionReport) {
    for run in &report.runs {
        println!("{}:\t {}", run.label, run.tally);
    }
    println!("Total games:\t {}", format_number(report.total_games()));
    println!("Win rate: {}", format_percentage(report.win_rate()));
    print_losing_boards(&report.losing_boards);
}
