//! Main TUI runner - entry point and event loop

use std::sync::Arc;

use ratatui::layout::Rect;
use tokio::sync::mpsc;

use treknav_app::config::Settings;
use treknav_app::message::Message;
use treknav_app::signals;
use treknav_app::{Navbar, Router};
use treknav_core::prelude::*;
use treknav_core::NavTree;

use crate::event::{self, TermEvent};
use crate::{hit_test, render, terminal};

/// Run the interactive menu until the user quits
pub async fn run(tree: Arc<NavTree>, settings: Settings, router: &Router) -> Result<()> {
    terminal::install_panic_hook();

    let mut term = terminal::init()?;

    let (msg_tx, msg_rx) = mpsc::channel::<Message>(16);
    let signal_task = signals::spawn_signal_handler(msg_tx);

    let mut navbar = Navbar::mount(tree, settings, router);

    // Pick the presentation for the starting width before the first frame
    let size = term.size()?;
    navbar.dispatch(Message::Resize { width: size.width }, router);

    let result = run_loop(&mut term, &mut navbar, router, msg_rx);

    signal_task.abort();
    drop(navbar);

    if let Err(e) = terminal::restore() {
        error!("{}", e);
    }
    result
}

/// Main event loop
fn run_loop(
    terminal: &mut ratatui::DefaultTerminal,
    navbar: &mut Navbar,
    router: &Router,
    mut msg_rx: mpsc::Receiver<Message>,
) -> Result<()> {
    let mut area = Rect::default();

    while !navbar.state().should_quit() {
        // Process external messages (from signal handler)
        while let Ok(msg) = msg_rx.try_recv() {
            navbar.dispatch(msg, router);
        }

        // Route changes published by anyone else
        navbar.sync_route();

        terminal.draw(|frame| {
            area = frame.area();
            render::view(frame, navbar.state());
        })?;

        match event::poll()? {
            Some(TermEvent::Message(message)) => navbar.dispatch(message, router),
            Some(TermEvent::Mouse(mouse)) => {
                if let Some(message) = hit_test::message_for_mouse(navbar.state(), area, mouse) {
                    navbar.dispatch(message, router);
                }
            }
            None => {}
        }
    }

    info!("Leaving at {}", navbar.state().route);
    Ok(())
}
