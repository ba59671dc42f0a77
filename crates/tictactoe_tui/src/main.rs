//! Tic Tac Toe in the terminal.

#![warn(missing_docs)]

use anyhow::Result;
use clap::Parser;
use tictactoe_tui::{Cli, init_tracing, resolve_config, run};

fn main() -> Result<()> {
    // Load .env file (RUST_LOG may live there)
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    let config = resolve_config(&cli)?;
    init_tracing(&config)?;

    run(&config)
}
