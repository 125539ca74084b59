//! OS signal forwarding
//!
//! SIGINT and SIGTERM arrive on a tokio task and are turned into
//! [`Message::Quit`] on the event loop's channel, so the terminal is always
//! restored by the loop itself.

use tokio::sync::mpsc;
use tokio::task::JoinHandle;

use crate::message::Message;
use treknav_core::prelude::*;

/// Spawn a task that sends [`Message::Quit`] when a termination signal arrives.
///
/// The task ends after the first signal; abort the handle to stop listening.
pub fn spawn_signal_handler(tx: mpsc::Sender<Message>) -> JoinHandle<()> {
    tokio::spawn(async move {
        match wait_for_signal().await {
            Ok(name) => {
                info!("Received {}, shutting down", name);
                if tx.send(Message::Quit).await.is_err() {
                    debug!("Event loop already gone");
                }
            }
            Err(e) => error!("Signal handler error: {}", e),
        }
    })
}

#[cfg(unix)]
async fn wait_for_signal() -> Result<&'static str> {
    use tokio::signal::unix::{signal, SignalKind};

    let mut sigint = signal(SignalKind::interrupt())
        .map_err(|e| Error::terminal(format!("Failed to install SIGINT handler: {e}")))?;
    let mut sigterm = signal(SignalKind::terminate())
        .map_err(|e| Error::terminal(format!("Failed to install SIGTERM handler: {e}")))?;

    tokio::select! {
        _ = sigint.recv() => Ok("SIGINT"),
        _ = sigterm.recv() => Ok("SIGTERM"),
    }
}

#[cfg(not(unix))]
async fn wait_for_signal() -> Result<&'static str> {
    tokio::signal::ctrl_c()
        .await
        .map_err(|e| Error::terminal(format!("Failed to listen for Ctrl+C: {e}")))?;
    Ok("Ctrl+C")
}
