//! Command-line interface for strictly_mnk.

use clap::{Parser, Subcommand};
use std::path::PathBuf;
use strictly_mnk::{PlayMode, Symbol};

/// Strictly MNK - generalized tic-tac-toe against an exhaustive search
#[derive(Parser, Debug)]
#[command(name = "strictly_mnk")]
#[command(about = "m,n,k tic-tac-toe with an alpha-beta opponent", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Log at debug level unless RUST_LOG says otherwise
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Subcommand to run
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Play a game in the terminal
    Play {
        /// TOML file with game settings; flags below override it
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// Board side length (N)
        #[arg(short, long)]
        size: Option<usize>,

        /// Marks in a row needed to win (K)
        #[arg(short = 'k', long)]
        win_length: Option<usize>,

        /// Who plays each side
        #[arg(short, long, value_enum)]
        mode: Option<PlayMode>,

        /// Mark played by the human in human-vs-bot games (x or o)
        #[arg(long)]
        human_symbol: Option<Symbol>,

        /// Mark that moves first (x or o)
        #[arg(long)]
        first: Option<Symbol>,

        /// Disable alpha-beta pruning in the engine
        #[arg(long)]
        no_pruning: bool,
    },

    /// Print the engine's move for a position
    Suggest {
        /// Rows separated by '/', cells as X, O or '.' (e.g. "XX./.O./...")
        #[arg(short, long)]
        position: String,

        /// Mark to move (x or o)
        #[arg(short, long)]
        to_move: Symbol,

        /// Marks in a row needed to win (K); defaults to the board size
        #[arg(short = 'k', long)]
        win_length: Option<usize>,

        /// Disable alpha-beta pruning in the engine
        #[arg(long)]
        no_pruning: bool,
    },
}
