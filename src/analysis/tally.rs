//! Accumulators filled by an enumeration run

use std::{collections::BTreeSet, fmt};

use serde::{Deserialize, Serialize, Serializer};

use crate::tictactoe::{Board, Outcome};

/// Number of finished games per outcome, from the AI's point of view
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResultTally {
    pub win: usize,
    pub tie: usize,
    pub lose: usize,
}

impl ResultTally {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record(&mut self, outcome: Outcome) {
        *self.slot(outcome) += 1;
    }

    pub fn get(&self, outcome: Outcome) -> usize {
        match outcome {
            Outcome::Win => self.win,
            Outcome::Tie => self.tie,
            Outcome::Lose => self.lose,
        }
    }

    /// Total number of games counted
    pub fn total(&self) -> usize {
        self.win + self.tie + self.lose
    }

    pub fn merge(&mut self, other: &ResultTally) {
        self.win += other.win;
        self.tie += other.tie;
        self.lose += other.lose;
    }

    fn slot(&mut self, outcome: Outcome) -> &mut usize {
        match outcome {
            Outcome::Win => &mut self.win,
            Outcome::Tie => &mut self.tie,
            Outcome::Lose => &mut self.lose,
        }
    }
}

impl fmt::Display for ResultTally {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, outcome) in Outcome::ALL.into_iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{}: {}", outcome.as_str(), self.get(outcome))?;
        }
        Ok(())
    }
}

/// Distinct terminal boards on which the AI lost.
///
/// Boards reached through different move orders are stored once. Iteration
/// order is the board ordering, so reports number boards reproducibly.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LosingBoardSet {
    boards: BTreeSet<Board>,
}

impl LosingBoardSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns true if the board was not recorded before
    pub fn insert(&mut self, board: Board) -> bool {
        self.boards.insert(board)
    }

    pub fn contains(&self, board: &Board) -> bool {
        self.boards.contains(board)
    }

    pub fn len(&self) -> usize {
        self.boards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.boards.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Board> {
        self.boards.iter()
    }

    pub fn merge(&mut self, other: LosingBoardSet) {
        self.boards.extend(other.boards);
    }
}

impl Serialize for LosingBoardSet {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_seq(self.boards.iter().map(Board::encode))
    }
}

impl<'a> IntoIterator for &'a LosingBoardSet {
    type Item = &'a Board;
    type IntoIter = std::collections::btree_set::Iter<'a, Board>;

    fn into_iter(self) -> Self::IntoIter {
        self.boards.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tally_records_and_merges() {
        let mut tally = ResultTally::new();
        tally.record(Outcome::Win);
        tally.record(Outcome::Win);
        tally.record(Outcome::Lose);
        assert_eq!(tally.get(Outcome::Win), 2);
        assert_eq!(tally.get(Outcome::Tie), 0);
        assert_eq!(tally.total(), 3);

        let mut other = ResultTally::new();
        other.record(Outcome::Tie);
        tally.merge(&other);
        assert_eq!(tally, ResultTally { win: 2, tie: 1, lose: 1 });
        assert_eq!(tally.to_string(), "win: 2, tie: 1, lose: 1");
    }

    #[test]
    fn tally_display_lists_every_outcome_in_order() {
        assert_eq!(ResultTally::new().to_string(), "win: 0, tie: 0, lose: 0");
        let tally = ResultTally { win: 408, tie: 177, lose: 3 };
        let labels: Vec<_> = Outcome::ALL.iter().map(|o| o.as_str()).collect();
        assert_eq!(labels, ["win", "tie", "lose"]);
        assert_eq!(tally.to_string(), "win: 408, tie: 177, lose: 3");
    }

    #[test]
    fn losing_boards_have_set_semantics() {
        let board = Board::from_string("XXXOO.O..").unwrap();
        let mut set = LosingBoardSet::new();
        assert!(set.insert(board));
        assert!(!set.insert(board));
        assert_eq!(set.len(), 1);
        assert!(set.contains(&board));

        let mut other = LosingBoardSet::new();
        other.insert(board);
        other.insert(Board::from_string("OOOXX.X.X").unwrap());
        set.merge(other);
        assert_eq!(set.len(), 2);
    }

    #[test]
    fn losing_boards_serialize_as_encodings() {
        let mut set = LosingBoardSet::new();
        set.insert(Board::from_string("XXXOO.O..").unwrap());
        let json = serde_json::to_string(&set).unwrap();
        assert_eq!(json, "[\"XXXOO.O..\"]");
    }
}
