//! Evaluate command - Enumerate every opponent line against one strategy

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;

use crate::{
    cli::output::{create_spinner, print_section, print_session_report},
    session::{Session, SessionConfig},
    strategy::StrategyKind,
    tictactoe::Player,
};

#[derive(Parser, Debug, Default)]
#[command(about = "Measure a strategy against every possible opponent")]
pub struct EvaluateArgs {
    /// Strategy under test
    #[arg(long, short = 's', value_enum)]
    pub strategy: Option<StrategyKind>,

    /// Mark played by the AI (`x` or `o`)
    #[arg(long)]
    pub ai_player: Option<Player>,

    /// Split enumeration across worker threads
    #[arg(long)]
    pub parallel: bool,

    /// Seed for randomized strategies
    #[arg(long)]
    pub seed: Option<u64>,

    /// JSON session configuration; flags override its values
    #[arg(long, short = 'c')]
    pub config: Option<PathBuf>,

    /// Print the report as JSON instead of text
    #[arg(long)]
    pub json: bool,
}

impl EvaluateArgs {
    /// Resolve the session configuration from file and flags
    pub fn session_config(&self) -> Result<SessionConfig> {
        let mut config = match &self.config {
            Some(path) => SessionConfig::from_json_file(path)
                .with_context(|| format!("loading config from {}", path.display()))?,
            None => SessionConfig::default(),
        };
        if let Some(strategy) = self.strategy {
            config = config.with_strategy(strategy);
        }
        if let Some(ai_player) = self.ai_player {
            config = config.with_ai_player(ai_player);
        }
        if let Some(seed) = self.seed {
            config = config.with_seed(seed);
        }
        if self.parallel {
            config = config.with_parallel(true);
        }
        Ok(config)
    }
}

pub fn execute(args: EvaluateArgs) -> Result<()> {
    let config = args.session_config()?;
    log::debug!("session config: {config:?}");

    let session = Session::new(config);
    let spinner = (!args.json).then(|| {
        create_spinner(&format!(
            "Enumerating opponent lines against {}...",
            session.config().strategy
        ))
    });
    let report = session.run();
    if let Some(spinner) = spinner {
        spinner.finish_and_clear();
    }
    let report = report?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    if args.config.is_some() || args.strategy.is_some() || args.ai_player.is_some() {
        print_section(&format!(
            "{} playing {}",
            session.config().strategy,
            session.config().ai_player
        ));
    }
    print_session_report(&report);
    Ok(())
}
