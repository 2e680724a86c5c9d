//! Strictly MNK - Unified CLI
//!
//! Play m,n,k tic-tac-toe in the terminal or ask the engine about a position.

#![warn(missing_docs)]

mod cli;

use anyhow::{Context, Result};
use clap::Parser;
use cli::{Cli, Command};
use std::io;
use std::path::PathBuf;
use strictly_mnk::{Board, GameConfig, GameOutcome, Orchestrator, PlayMode, SearchEngine, Symbol};
use tracing::{info, instrument};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match cli.command {
        Command::Play {
            config,
            size,
            win_length,
            mode,
            human_symbol,
            first,
            no_pruning,
        } => {
            let config = load_game_config(
                config,
                size,
                win_length,
                mode,
                human_symbol,
                first,
                no_pruning,
            )?;
            run_play(&config).map(|_| ())
        }
        Command::Suggest {
            position,
            to_move,
            win_length,
            no_pruning,
        } => run_suggest(&position, to_move, win_length, no_pruning),
    }
}

/// Logs go to stderr so they never interleave with the board on stdout.
fn init_tracing(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .with_writer(io::stderr)
        .init();
}

/// Merge the optional config file with command-line overrides.
#[instrument(skip_all, fields(config_path = ?path))]
fn load_game_config(
    path: Option<PathBuf>,
    size: Option<usize>,
    win_length: Option<usize>,
    mode: Option<PlayMode>,
    human_symbol: Option<Symbol>,
    first: Option<Symbol>,
    no_pruning: bool,
) -> Result<GameConfig> {
    let mut config = match path {
        Some(path) => GameConfig::from_file(&path)
            .with_context(|| format!("Failed to load config from {}", path.display()))?,
        None => GameConfig::default(),
    };

    if let Some(size) = size {
        config = config.with_size(size);
    }
    if let Some(win_length) = win_length {
        config = config.with_win_length(win_length);
    }
    if let Some(mode) = mode {
        config = config.with_mode(mode);
    }
    if let Some(symbol) = human_symbol {
        config = config.with_human_symbol(symbol);
    }
    if let Some(symbol) = first {
        config = config.with_first(symbol);
    }
    if no_pruning {
        config = config.with_pruning(false);
    }

    info!(?config, "Game configuration ready");
    Ok(config)
}

/// Run one game on stdin/stdout
fn run_play(config: &GameConfig) -> Result<GameOutcome> {
    let stdin = io::stdin();
    let mut orchestrator = Orchestrator::from_config(config, stdin.lock(), io::stdout())?;
    orchestrator.run()
}

/// Print the engine's choice for a position
#[instrument(skip(position), fields(position = %position))]
fn run_suggest(
    position: &str,
    to_move: Symbol,
    win_length: Option<usize>,
    no_pruning: bool,
) -> Result<()> {
    let size = position.split('/').count();
    let mut board = Board::parse(position, win_length.unwrap_or(size))
        .context("Failed to read position")?;

    let engine = SearchEngine::new().with_pruning(!no_pruning);
    let result = engine
        .search(&mut board, to_move, to_move.opponent())
        .context("Cannot search this position")?;

    let (row, col) = result.best_move.one_based();
    print!("{}", board);
    println!(
        "{} to move: play row {} column {} (score {}, {} nodes)",
        to_move, row, col, result.score, result.nodes
    );
    Ok(())
}
