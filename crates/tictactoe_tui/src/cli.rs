//! Command-line interface.

use clap::Parser;
use std::path::PathBuf;

/// Tic Tac Toe in the terminal for two players sharing a keyboard or mouse
#[derive(Parser, Debug)]
#[command(name = "tictactoe")]
#[command(about = "Two-player tic-tac-toe in the terminal", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to a TOML config file (ignored if it does not exist)
    #[arg(short, long, default_value = "tictactoe.toml")]
    pub config: PathBuf,

    /// Write logs to this file instead of the configured one
    #[arg(long)]
    pub log_file: Option<PathBuf>,

    /// Default log filter (RUST_LOG takes precedence)
    #[arg(long)]
    pub log_filter: Option<String>,

    /// Disable mouse input
    #[arg(long)]
    pub no_mouse: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let cli = Cli::parse_from(["tictactoe"]);
        assert_eq!(cli.config, PathBuf::from("tictactoe.toml"));
        assert!(cli.log_file.is_none());
        assert!(!cli.no_mouse);
    }

    #[test]
    fn test_flags() {
        let cli = Cli::parse_from([
            "tictactoe",
            "--config",
            "custom.toml",
            "--log-file",
            "game.log",
            "--log-filter",
            "debug",
            "--no-mouse",
        ]);
        assert_eq!(cli.config, PathBuf::from("custom.toml"));
        assert_eq!(cli.log_file, Some(PathBuf::from("game.log")));
        assert_eq!(cli.log_filter.as_deref(), Some("debug"));
        assert!(cli.no_mouse);
    }
}
