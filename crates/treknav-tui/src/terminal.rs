//! Terminal setup and restoration

use std::io::stdout;

use crossterm::event::{DisableMouseCapture, EnableMouseCapture};
use crossterm::execute;
use treknav_core::prelude::*;

/// Install a panic hook that restores the terminal
pub fn install_panic_hook() {
    let original_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |panic_info| {
        let _ = execute!(stdout(), DisableMouseCapture);
        ratatui::restore();
        original_hook(panic_info);
    }));
}

/// Enter the alternate screen with mouse reporting on
pub fn init() -> Result<ratatui::DefaultTerminal> {
    let terminal = ratatui::try_init().map_err(|e| Error::TerminalInit(e.to_string()))?;
    execute!(stdout(), EnableMouseCapture)
        .map_err(|e| Error::TerminalInit(format!("mouse capture: {e}")))?;
    Ok(terminal)
}

/// Leave the alternate screen and stop mouse reporting
pub fn restore() -> Result<()> {
    execute!(stdout(), DisableMouseCapture)
        .map_err(|e| Error::TerminalRestore(format!("mouse capture: {e}")))?;
    ratatui::try_restore().map_err(|e| Error::TerminalRestore(e.to_string()))
}
