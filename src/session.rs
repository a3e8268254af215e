//! Two-configuration strength session
//!
//! A session runs the enumerator once with the human moving first and once
//! with the AI moving first, then aggregates both tallies.

use std::{fs, path::Path};

use log::debug;
use serde::{Deserialize, Serialize};

use crate::{
    Error, Result,
    analysis::{Enumerator, LosingBoardSet, ResultTally},
    strategy::{MoveSelector, StrategyKind},
    tictactoe::Player,
};

/// Configuration for a strength session.
///
/// # Examples
///
/// ```
/// use tictactoe_ai::{session::SessionConfig, strategy::StrategyKind, tictactoe::Player};
///
/// let config = SessionConfig::default()
///     .with_strategy(StrategyKind::Minimax)
///     .with_ai_player(Player::X)
///     .with_parallel(true);
/// assert_eq!(config.strategy, StrategyKind::Minimax);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SessionConfig {
    /// Mark played by the AI
    pub ai_player: Player,
    /// Strategy under test
    pub strategy: StrategyKind,
    /// Split each enumeration across worker threads
    pub parallel: bool,
    /// Seed for randomized strategies
    pub seed: u64,
}

impl SessionConfig {
    pub fn with_ai_player(mut self, ai_player: Player) -> Self {
        self.ai_player = ai_player;
        self
    }

    pub fn with_strategy(mut self, strategy: StrategyKind) -> Self {
        self.strategy = strategy;
        self
    }

    pub fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// Load a configuration from a JSON file; missing fields take defaults
    pub fn from_json_file(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path).map_err(|source| Error::Io {
            operation: format!("read session config {}", path.display()),
            source,
        })?;
        Ok(serde_json::from_str(&contents)?)
    }
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            ai_player: Player::O,
            strategy: StrategyKind::Heuristic,
            parallel: false,
            seed: 0,
        }
    }
}

/// Tally of one enumeration run
#[derive(Debug, Clone, Serialize)]
pub struct RunReport {
    pub label: &'static str,
    pub first_player: Player,
    pub tally: ResultTally,
}

/// Aggregated result of a session
#[derive(Debug, Clone, Serialize)]
pub struct SessionReport {
    pub ai_player: Player,
    pub strategy: StrategyKind,
    pub runs: Vec<RunReport>,
    pub losing_boards: LosingBoardSet,
}

impl SessionReport {
    pub fn total_games(&self) -> usize {
        self.runs.iter().map(|run| run.tally.total()).sum()
    }

    pub fn total_wins(&self) -> usize {
        self.runs.iter().map(|run| run.tally.win).sum()
    }

    pub fn total_losses(&self) -> usize {
        self.runs.iter().map(|run| run.tally.lose).sum()
    }

    /// Wins across every run as a percentage of all games (0 with no games)
    pub fn win_rate(&self) -> f64 {
        let total = self.total_games();
        if total == 0 {
            0.0
        } else {
            self.total_wins() as f64 / total as f64 * 100.0
        }
    }
}

/// Runs both starting configurations for one strategy
pub struct Session {
    config: SessionConfig,
    selector: Box<dyn MoveSelector>,
}

impl Session {
    pub fn new(config: SessionConfig) -> Self {
        let selector = config.strategy.build(config.seed);
        Self { config, selector }
    }

    pub fn config(&self) -> &SessionConfig {
        &self.config
    }

    /// Run "player starts" then "AI starts".
    ///
    /// Each run gets a fresh tally; losing boards from both runs are
    /// collected in one set owned by the returned report.
    pub fn run(&self) -> Result<SessionReport> {
        let ai = self.config.ai_player;
        let enumerator = Enumerator::new(self.selector.as_ref(), ai);
        let mut losing_boards = LosingBoardSet::new();
        let mut runs = Vec::with_capacity(2);

        for (label, first_player) in [("Player starts", ai.opposite()), ("AI starts", ai)] {
            let mut tally = ResultTally::new();
            if self.config.parallel {
                enumerator.enumerate_parallel(first_player, &mut tally, &mut losing_boards)?;
            } else {
                enumerator.enumerate(first_player, &mut tally, &mut losing_boards)?;
            }
            debug!("{label} ({}): {tally}", self.config.strategy);
            runs.push(RunReport {
                label,
                first_player,
                tally,
            });
        }

        Ok(SessionReport {
            ai_player: ai,
            strategy: self.config.strategy,
            runs,
            losing_boards,
        })
    }
}
