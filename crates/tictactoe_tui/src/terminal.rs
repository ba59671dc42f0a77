//! Terminal mode setup and teardown.

use crossterm::{
    cursor::Show,
    event::{DisableMouseCapture, EnableMouseCapture},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use std::io;
use tracing::{debug, error, warn};

type RestoreStep = Box<dyn FnOnce() -> io::Result<()>>;

fn step(
    name: &'static str,
    f: impl FnOnce() -> io::Result<()> + 'static,
) -> (&'static str, RestoreStep) {
    (name, Box::new(f))
}

/// Runs every step even if earlier ones fail, returning the first error.
fn run_all(steps: Vec<(&'static str, RestoreStep)>) -> io::Result<()> {
    let mut first_err = None;
    for (name, step) in steps {
        if let Err(e) = step() {
            warn!(step = name, error = %e, "Terminal restore step failed");
            first_err.get_or_insert(e);
        }
    }
    first_err.map_or(Ok(()), Err)
}

/// Holds the terminal in raw mode on the alternate screen.
///
/// Dropping the guard restores the terminal, including on early returns
/// and panics.
pub struct TerminalGuard {
    restored: bool,
}

impl TerminalGuard {
    /// Enters raw mode and the alternate screen, capturing the mouse if asked.
    pub fn enter(mouse: bool) -> io::Result<Self> {
        enable_raw_mode()?;
        // From here on a failed step drops the guard, which undoes the rest.
        let guard = Self { restored: false };
        execute!(io::stdout(), EnterAlternateScreen)?;
        if mouse {
            execute!(io::stdout(), EnableMouseCapture)?;
        }
        debug!(mouse, "Terminal prepared");
        Ok(guard)
    }

    /// Restores the terminal. Later calls do nothing.
    pub fn restore(&mut self) -> io::Result<()> {
        if std::mem::replace(&mut self.restored, true) {
            return Ok(());
        }
        run_all(vec![
            step("disable raw mode", disable_raw_mode),
            step("leave alternate screen", || {
                execute!(io::stdout(), LeaveAlternateScreen)
            }),
            step("disable mouse capture", || {
                execute!(io::stdout(), DisableMouseCapture)
            }),
            step("show cursor", || execute!(io::stdout(), Show)),
        ])
    }
}

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        if let Err(e) = self.restore() {
            error!(error = %e, "Failed to restore terminal");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;
    use std::rc::Rc;

    fn counting(
        name: &'static str,
        count: &Rc<Cell<u32>>,
        fail: Option<&'static str>,
    ) -> (&'static str, RestoreStep) {
        let count = Rc::clone(count);
        step(name, move || {
            count.set(count.get() + 1);
            match fail {
                Some(msg) => Err(io::Error::other(msg)),
                None => Ok(()),
            }
        })
    }

    #[test]
    fn test_run_all_continues_after_failure() {
        let count = Rc::new(Cell::new(0));
        let err = run_all(vec![
            counting("a", &count, None),
            counting("b", &count, Some("first")),
            counting("c", &count, Some("second")),
            counting("d", &count, None),
        ])
        .unwrap_err();

        assert_eq!(count.get(), 4);
        assert_eq!(err.to_string(), "first");
    }

    #[test]
    fn test_run_all_ok() {
        let count = Rc::new(Cell::new(0));
        let steps = vec![counting("a", &count, None), counting("b", &count, None)];
        assert!(run_all(steps).is_ok());
        assert_eq!(count.get(), 2);
    }

    #[test]
    fn test_restore_is_idempotent() {
        // Already restored, so no terminal calls are made.
        let mut guard = TerminalGuard { restored: true };
        assert!(guard.restore().is_ok());
        assert!(guard.restore().is_ok());
    }
}
