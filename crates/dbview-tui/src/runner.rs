//! Main TUI runner - entry point and event loop

use std::sync::Arc;

use tokio::sync::mpsc;

use dbview_api::TableApi;
use dbview_app::message::Message;
use dbview_app::process::process_message;
use dbview_app::signals;
use dbview_app::AppState;
use dbview_core::prelude::*;

use super::{event, render, terminal};

/// Capacity of the message channel shared by background tasks
const MESSAGE_CHANNEL_CAPACITY: usize = 256;

/// Run the TUI against an API client until the user quits
pub async fn run<C>(mut state: AppState, api: C) -> Result<()>
where
    C: TableApi + Send + Sync + 'static,
{
    // Install panic hook for terminal restoration
    terminal::install_panic_hook();

    let mut term = ratatui::init();
    let api = Arc::new(api);

    // Unified message channel for fetch results and the signal handler
    let (msg_tx, msg_rx) = mpsc::channel::<Message>(MESSAGE_CHANNEL_CAPACITY);
    signals::spawn_signal_handler(msg_tx.clone());

    // Database info and table list are requested before the first frame
    process_message(&mut state, Message::Startup, &msg_tx, &api);

    let result = run_loop(&mut term, &mut state, msg_rx, msg_tx, &api);

    ratatui::restore();

    if let Err(ref e) = result {
        error!("TUI loop failed: {}", e);
    }
    result
}

/// Main event loop
fn run_loop<C>(
    terminal: &mut ratatui::DefaultTerminal,
    state: &mut AppState,
    mut msg_rx: mpsc::Receiver<Message>,
    msg_tx: mpsc::Sender<Message>,
    api: &Arc<C>,
) -> Result<()>
where
    C: TableApi + Send + Sync + 'static,
{
    while !state.should_quit() {
        // Fetch results and signals
        while let Ok(msg) = msg_rx.try_recv() {
            process_message(state, msg, &msg_tx, api);
        }

        terminal
            .draw(|frame| render::view(frame, state))
            .map_err(|e| Error::terminal(e.to_string()))?;

        if let Some(message) = event::poll()? {
            process_message(state, message, &msg_tx, api);
        }
    }

    info!("Quit requested");
    Ok(())
}
