use std::{
    io::{self, Stdout, stdout},
    panic,
};

use crossterm::terminal::{
    EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode,
};
use ratatui::{Terminal, backend::CrosstermBackend};

use crate::error::Result;

pub type AppTerminal = Terminal<CrosstermBackend<Stdout>>;

/// Raw mode plus alternate screen for as long as the session lives.
///
/// The terminal is handed back to the shell by [`TerminalSession::finish`],
/// on drop, or from the panic hook installed by [`TerminalSession::start`],
/// whichever comes first.
pub struct TerminalSession {
    terminal: AppTerminal,
    active: bool,
}

impl TerminalSession {
    pub fn start() -> Result<Self> {
        install_panic_hook();
        enable_raw_mode()?;
        let mut stdout = stdout();
        crossterm::execute!(stdout, EnterAlternateScreen)?;
        let mut terminal = Terminal::new(CrosstermBackend::new(stdout))?;
        terminal.clear()?;
        tracing::debug!("terminal session started");
        Ok(Self {
            terminal,
            active: true,
        })
    }

    pub fn terminal(&mut self) -> &mut AppTerminal {
        &mut self.terminal
    }

    /// Restores the shell and reports any failure doing so.
    pub fn finish(mut self) -> Result<()> {
        self.leave()
    }

    fn leave(&mut self) -> Result<()> {
        if !self.active {
            return Ok(());
        }
        self.active = false;
        disable_raw_mode()?;
        crossterm::execute!(self.terminal.backend_mut(), LeaveAlternateScreen)?;
        self.terminal.show_cursor()?;
        tracing::debug!("terminal session finished");
        Ok(())
    }
}

impl Drop for TerminalSession {
    fn drop(&mut self) {
        if let Err(err) = self.leave() {
            tracing::warn!("terminal restore failed: {err}");
        }
    }
}

/// Leaves the alternate screen before the default hook prints the panic, so
/// the message lands in the normal scrollback.
fn install_panic_hook() {
    let previous = panic::take_hook();
    panic::set_hook(Box::new(move |info| {
        let _restored: io::Result<()> = disable_raw_mode()
            .and_then(|()| crossterm::execute!(stdout(), LeaveAlternateScreen));
        previous(info);
    }));
}
