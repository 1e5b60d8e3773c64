use std::{io, panic};

use crossterm::{
    event::{DisableMouseCapture, EnableMouseCapture},
    execute,
    terminal::{
        EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode,
        enable_raw_mode,
    },
};
use ratatui::{DefaultTerminal, Terminal, prelude::CrosstermBackend};

use anyhow::Result;

/// Initializes the terminal in raw mode and alternate screen, with mouse
/// capture on.
///
/// Returns a [`DefaultTerminal`] that must later be passed to [`restore`].
/// A panic hook restores the terminal if the program panics first.
pub fn init() -> Result<DefaultTerminal> {
    install_panic_hook();

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let terminal = Terminal::new(backend)?;
    Ok(terminal)
}

/// Restores the terminal to its normal mode and leaves the alternate screen.
pub fn restore(mut terminal: DefaultTerminal) -> Result<()> {
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;
    Ok(())
}

fn install_panic_hook() {
    let hook = panic::take_hook();
    panic::set_hook(Box::new(move |info| {
        // best effort, the previous hook still reports the panic
        let _ = disable_raw_mode();
        let _ =
            execute!(io::stdout(), LeaveAlternateScreen, DisableMouseCapture);
        hook(info);
    }));
}
