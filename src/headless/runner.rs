//! Headless mode runner - NDJSON command loop without a TUI

use std::io::{BufRead, Write};
use std::sync::Arc;

use tokio::sync::mpsc;
use tracing::{error, info, warn};

use treknav_app::config::Settings;
use treknav_app::message::Message;
use treknav_app::{Navbar, Router};
use treknav_core::prelude::Result;
use treknav_core::NavTree;

use super::{HeadlessCommand, HeadlessEvent};

/// One mounted navbar driven by headless commands
pub struct HeadlessSession<'r> {
    navbar: Navbar,
    router: &'r Router,
}

impl<'r> HeadlessSession<'r> {
    pub fn new(tree: Arc<NavTree>, settings: Settings, router: &'r Router) -> Self {
        Self {
            navbar: Navbar::mount(tree, settings, router),
            router,
        }
    }

    pub fn navbar(&self) -> &Navbar {
        &self.navbar
    }

    /// Handle one input line, writing the resulting events to `out`.
    ///
    /// Returns `false` once a `quit` command has been seen.
    pub fn handle_line<W: Write>(&mut self, line: &str, out: &mut W) -> Result<bool> {
        let line = line.trim();
        if line.is_empty() {
            return Ok(true);
        }

        let command = match serde_json::from_str::<HeadlessCommand>(line) {
            Ok(command) => command,
            Err(e) => {
                warn!("Unparseable headless command {:?}: {}", line, e);
                HeadlessEvent::error(format!("invalid command: {e}"), false).write_to(out)?;
                return Ok(true);
            }
        };

        if command == HeadlessCommand::Quit {
            info!("Headless: quit requested");
            return Ok(false);
        }

        let before = self.navbar.state().route.clone();
        self.apply(command);

        let state = self.navbar.state();
        if state.route != before {
            HeadlessEvent::route_changed(before.as_str(), state.route.as_str()).write_to(out)?;
        }
        if let Some(error) = &state.last_error {
            HeadlessEvent::error(error.clone(), false).write_to(out)?;
        }
        HeadlessEvent::state(state).write_to(out)?;
        Ok(true)
    }

    fn apply(&mut self, command: HeadlessCommand) {
        // Errors are reported once, for the command that caused them
        self.navbar.state_mut().last_error = None;

        match command {
            HeadlessCommand::ToggleTop { label } => {
                if !self.navbar.state_mut().toggle_top_level_by_label(&label) {
                    info!("Headless: no top-level entry {:?}", label);
                }
            }
            HeadlessCommand::ToggleSub { label } => {
                if !self.navbar.state_mut().toggle_sub_level_by_label(&label) {
                    info!("Headless: no open submenu entry {:?}", label);
                }
            }
            HeadlessCommand::ToggleDrawer => {
                self.navbar.dispatch(Message::ToggleMobileDrawer, self.router)
            }
            HeadlessCommand::CloseAll => self.navbar.dispatch(Message::CloseAll, self.router),
            HeadlessCommand::Navigate { path } => {
                self.navbar.dispatch(Message::Navigate { path }, self.router)
            }
            HeadlessCommand::SetPresentation { presentation } => self
                .navbar
                .dispatch(Message::SetPresentation(presentation), self.router),
            HeadlessCommand::State | HeadlessCommand::Quit => {}
        }
    }
}

/// Run a whole script from `reader`, writing events to `writer`
pub fn run_script<R: BufRead, W: Write>(
    tree: Arc<NavTree>,
    settings: Settings,
    router: &Router,
    reader: R,
    writer: &mut W,
) -> Result<()> {
    let mut session = HeadlessSession::new(tree, settings, router);
    for line in reader.lines() {
        if !session.handle_line(&line?, writer)? {
            break;
        }
    }
    Ok(())
}

/// Run in headless mode - read commands from stdin, emit NDJSON to stdout
pub async fn run_headless(tree: Arc<NavTree>, settings: Settings, router: &Router) -> Result<()> {
    info!("Trek Nav starting in HEADLESS mode");

    let (line_tx, mut line_rx) = mpsc::channel::<String>(64);
    std::thread::spawn(move || spawn_stdin_reader_blocking(line_tx));

    let mut session = HeadlessSession::new(tree, settings, router);
    let mut stdout = std::io::stdout();

    // Initial snapshot so scripts know where they start
    HeadlessEvent::state(session.navbar().state()).write_to(&mut stdout)?;

    while let Some(line) = line_rx.recv().await {
        if !session.handle_line(&line, &mut stdout)? {
            break;
        }
    }

    info!("Trek Nav headless mode exiting");
    Ok(())
}

/// Forward stdin lines to the command loop (blocking, runs on its own thread)
fn spawn_stdin_reader_blocking(line_tx: mpsc::Sender<String>) {
    let stdin = std::io::stdin();
    for line in stdin.lock().lines() {
        match line {
            Ok(line) => {
                if line_tx.blocking_send(line).is_err() {
                    break;
                }
            }
            Err(e) => {
                error!("Failed to read stdin: {}", e);
                break;
            }
        }
    }
    info!("Stdin reader exiting");
}
