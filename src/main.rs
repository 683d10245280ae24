//! Reversi AI Engine CLI
//!
//! Reads a position, searches it on a worker thread, and prints the chosen
//! move with search statistics.

use std::path::PathBuf;
use std::sync::{Arc, Mutex};
use std::thread;

use anyhow::{Context, Result};
use clap::Parser;

use reversi::{
    CaptureRule, CornerTerm, Engine, EngineConfig, EngineError, GameState, Geometry, Player,
};

#[derive(Parser, Debug)]
#[command(name = "reversi")]
#[command(about = "Pick a Reversi move with time-bounded alpha-beta search")]
struct Cli {
    /// Board file: 8 rows of `.`, `W`, `B` (standard opening when omitted)
    #[arg(long)]
    board: Option<PathBuf>,

    /// Side to move
    #[arg(long, value_enum, ignore_case = true, default_value_t = Player::Black)]
    to_move: Player,

    /// Search budget in seconds (overrides the config file)
    #[arg(long)]
    time: Option<f64>,

    /// Cutoff depth (overrides the config file)
    #[arg(long)]
    max_depth: Option<u32>,

    /// TOML configuration file
    #[arg(long, default_value = "reversi.toml")]
    config: PathBuf,

    /// Disc flipping rule (overrides the config file)
    #[arg(long, value_enum)]
    capture_rule: Option<CaptureRule>,

    /// Corner scoring (overrides the config file)
    #[arg(long, value_enum)]
    corner_term: Option<CornerTerm>,

    /// Log level when RUST_LOG is not set
    #[arg(long, default_value = "info")]
    log_level: String,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    env_logger::Builder::from_env(
        env_logger::Env::default().filter_or(env_logger::DEFAULT_FILTER_ENV, &cli.log_level),
    )
    .init();

    let mut config = EngineConfig::load_or_default(&cli.config)?;
    if let Some(secs) = cli.time {
        config.time_budget_secs = secs;
    }
    if let Some(depth) = cli.max_depth {
        config.max_depth = depth;
    }
    if let Some(rule) = cli.capture_rule {
        config.capture_rule = rule;
    }
    if let Some(term) = cli.corner_term {
        config.corner_term = term;
    }

    let state = match &cli.board {
        Some(path) => {
            let text = std::fs::read_to_string(path)
                .with_context(|| format!("failed to read board file {}", path.display()))?;
            GameState::parse(Geometry::STANDARD, cli.to_move, &text)?
        }
        None => GameState::opening(Geometry::STANDARD, cli.to_move),
    };

    let lock = Arc::new(Mutex::new(()));
    let engine = Arc::new(Engine::with_config(
        Arc::clone(&lock),
        state.cells(),
        cli.to_move,
        config,
    )?);

    {
        let _guard = lock
            .lock()
            .map_err(|_| anyhow::anyhow!("board lock poisoned"))?;
        println!("{} to move", cli.to_move);
        print!("{state}");
    }

    let worker = {
        let engine = Arc::clone(&engine);
        thread::spawn(move || engine.select_move_with_stats())
    };
    let outcome = worker
        .join()
        .map_err(|_| anyhow::anyhow!("search thread panicked"))?;

    match outcome {
        Ok(outcome) => {
            println!("Best move: {}", outcome.best_move);
            println!("Score: {}", outcome.score);
            println!("Nodes: {} ({} cutoffs)", outcome.nodes, outcome.cutoffs);
            println!("Time: {}ms", outcome.elapsed.as_millis());
            Ok(())
        }
        Err(EngineError::NoLegalMoves { player }) => {
            anyhow::bail!("{player} has no legal moves: pass or game over")
        }
        Err(e) => Err(e.into()),
    }
}
