//! Command-line interface for the console game.

use clap::Parser;
use tictactoe_mvp::Difficulty;

/// Tic-tac-toe against a computer opponent, played in the terminal
#[derive(Parser, Debug)]
#[command(name = "tictactoe")]
#[command(about = "Play tic-tac-toe against the computer", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to the game configuration file
    #[arg(short, long, default_value = "tictactoe.toml")]
    pub config: std::path::PathBuf,

    /// Let the computer take the first move (`--opponent-first=false` overrides the config file)
    #[arg(long, num_args = 0..=1, require_equals = true, default_missing_value = "true")]
    pub opponent_first: Option<bool>,

    /// Opponent difficulty (overrides the config file)
    #[arg(short, long, value_enum)]
    pub difficulty: Option<Difficulty>,

    /// Seed for the opponent's random choices
    #[arg(long)]
    pub seed: Option<u64>,
}
