//! Console tic-tac-toe against the computer.

#![warn(missing_docs)]

mod cli;
mod console;

use anyhow::{Context, Result};
use clap::Parser;
use cli::Cli;
use console::{Command, ConsoleView};
use std::io::BufRead;
use tictactoe_mvp::{GameConfig, Handled, Presenter};
use tracing::{debug, info, instrument};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let config = GameConfig::load_or_default(&cli.config)
        .with_context(|| format!("Failed to load {}", cli.config.display()))?
        .with_overrides(cli.opponent_first, cli.difficulty, cli.seed);

    run(config)
}

/// Reads commands from stdin until `quit` or end of input.
#[instrument(skip_all)]
fn run(config: GameConfig) -> Result<()> {
    info!(?config, "Starting console game");

    let view = ConsoleView::new(config.settings());
    let mut presenter = Presenter::new(view, *config.seed());

    println!("Welcome to Tic Tac Toe! You are X.");
    presenter.view().print_help();
    presenter.start_game().context("Failed to start game")?;

    let stdin = std::io::stdin().lock();
    for line in stdin.lines() {
        let line = line.context("Failed to read input")?;
        let Some(command) = Command::parse(&line) else {
            println!("Unrecognised input: {:?} (type 'help')", line.trim());
            continue;
        };

        match command {
            Command::New => {
                presenter.start_game().context("Failed to start game")?;
            }
            Command::Cell(row, col) => {
                if !presenter.view().accepts_input() {
                    println!("The game is over. Type 'new' to play again.");
                    continue;
                }
                match presenter.cell_chosen(row, col).context("Turn failed")? {
                    Handled::Applied(_) => {}
                    Handled::Ignored(rejection) => {
                        debug!(%rejection, "Move ignored");
                        println!("{}", rejection);
                    }
                }
            }
            Command::First => presenter.view_mut().toggle_first_mover(),
            Command::Difficulty(difficulty) => presenter.view_mut().set_difficulty(difficulty),
            Command::Help => presenter.view().print_help(),
            Command::Quit => break,
        }
    }

    info!("Goodbye");
    Ok(())
}
