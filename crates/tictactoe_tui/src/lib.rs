//! Terminal front end for tic-tac-toe.
//!
//! # Architecture
//!
//! - **App**: owns the [`GameState`](tictactoe::GameState) and the keyboard
//!   cursor, and turns user actions into move requests.
//! - **UI**: stateless `ratatui` rendering plus mouse hit-testing.
//! - **Input**: key mapping and cursor movement.
//! - **Config/CLI**: TOML settings with `clap` overrides.
//!
//! The event loop is synchronous: block on the next terminal event, update
//! the app, redraw.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod accessibility;
mod app;
mod cli;
mod config;
mod input;
mod terminal;
mod ui;

pub use accessibility::{BOARD_HELP, cell_label, describe};
pub use app::{App, Flow};
pub use cli::Cli;
pub use config::{ConfigError, TuiConfig};
pub use input::{Action, action_for_key, move_cursor};
pub use ui::{CURSOR_BG, O_COLOR, WIN_BG, X_COLOR, cell_areas, cell_at, draw};

use anyhow::{Context, Result};
use crossterm::event::{self, Event, KeyEventKind, MouseButton, MouseEvent, MouseEventKind};
use ratatui::{Terminal, backend::CrosstermBackend, layout::Rect};
use std::io::{self, Stdout};
use tracing::{debug, error, info, instrument};
use tracing_subscriber::EnvFilter;

/// Resolves the effective configuration: file (or defaults), then CLI flags.
#[instrument(skip(cli), fields(config = %cli.config.display()))]
pub fn resolve_config(cli: &Cli) -> Result<TuiConfig, ConfigError> {
    let mut config = TuiConfig::load_or_default(&cli.config)?;
    if let Some(log_file) = &cli.log_file {
        config = config.with_log_file(log_file);
    }
    if let Some(log_filter) = &cli.log_filter {
        config = config.with_log_filter(log_filter);
    }
    if cli.no_mouse {
        config = config.with_mouse(false);
    }
    Ok(config)
}

/// Sends logs to the configured file so they don't interfere with the UI.
///
/// `RUST_LOG` overrides the configured filter.
pub fn init_tracing(config: &TuiConfig) -> Result<()> {
    let log_file = std::fs::File::create(config.log_file()).with_context(|| {
        format!("Failed to create log file {}", config.log_file().display())
    })?;

    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(config.log_filter())),
        )
        .with_writer(std::sync::Arc::new(log_file))
        .with_ansi(false)
        .try_init(); // Don't panic if already initialized

    Ok(())
}

/// Applies one terminal event to the app.
///
/// `area` is the frame area the board was last drawn into, used to map
/// mouse clicks onto squares.
pub fn handle_event(app: &mut App, event: Event, area: Rect, mouse: bool) -> Flow {
    match event {
        Event::Key(key) if key.kind == KeyEventKind::Press => {
            match input::action_for_key(key.code) {
                Some(action) => app.handle(action),
                None => Flow::Continue,
            }
        }
        Event::Mouse(MouseEvent {
            kind: MouseEventKind::Down(MouseButton::Left),
            column,
            row,
            ..
        }) if mouse => match ui::cell_at(area, column, row) {
            Some(pos) => app.handle(Action::Select(pos)),
            None => Flow::Continue,
        },
        _ => Flow::Continue,
    }
}

/// Runs the terminal UI until the user quits.
///
/// The terminal is restored on every exit path, including errors and panics.
pub fn run(config: &TuiConfig) -> Result<()> {
    info!(?config, "Starting Tic Tac Toe");

    let mut guard = terminal::TerminalGuard::enter(*config.mouse())
        .context("Failed to prepare terminal")?;
    let res = Terminal::new(CrosstermBackend::new(io::stdout()))
        .context("Failed to create terminal")
        .and_then(|mut terminal| run_app(&mut terminal, App::new(), *config.mouse()));
    let restored = guard.restore().context("Failed to restore terminal");

    match &res {
        Ok(()) => info!("Shutting down"),
        Err(e) => error!(error = ?e, "Event loop error"),
    }
    res.and(restored)
}

fn run_app(
    terminal: &mut Terminal<CrosstermBackend<Stdout>>,
    mut app: App,
    mouse: bool,
) -> Result<()> {
    loop {
        let area = terminal.draw(|f| ui::draw(f, &app))?.area;

        let event = event::read()?;
        debug!(?event, "Terminal event");
        if handle_event(&mut app, event, area, mouse) == Flow::Quit {
            return Ok(());
        }
    }
}
