//! Background worker thread that processes actions through middleware
//!
//! - The main thread handles rendering and user input only
//! - The background thread runs all middleware (API calls, file IO)
//! - Communication happens via channels
//!
//! Actions dispatched by middleware via `Dispatcher` re-enter the chain,
//! so a pager event can fan out into further loads.

use crate::actions::{Action, GlobalAction};
use crate::dispatcher::Dispatcher;
use crate::middleware::Middleware;
use crate::state::AppState;
use std::sync::mpsc::{Receiver, Sender};
use std::sync::{Arc, RwLock};
use std::thread;
use std::time::{Duration, Instant};

/// Shared state the background worker reads (main thread writes after
/// reducing)
pub type SharedState = Arc<RwLock<AppState>>;

const TICK_RATE: Duration = Duration::from_millis(250);

/// Spawn the background worker thread
///
/// - `action_rx`: receives actions from the main thread and from
///   `Dispatcher` re-entry
/// - `action_tx`: used to create the `Dispatcher`
/// - `result_tx`: unconsumed actions forwarded to the reducer
/// - `state`: shared state snapshot source for middleware
pub fn spawn_background_worker(
    action_rx: Receiver<Action>,
    action_tx: Sender<Action>,
    result_tx: Sender<Action>,
    state: SharedState,
    middleware: Vec<Box<dyn Middleware + Send>>,
) -> thread::JoinHandle<()> {
    thread::spawn(move || {
        background_loop(action_rx, action_tx, result_tx, state, middleware);
    })
}

fn background_loop(
    action_rx: Receiver<Action>,
    action_tx: Sender<Action>,
    result_tx: Sender<Action>,
    state: SharedState,
    mut middleware: Vec<Box<dyn Middleware + Send>>,
) {
    log::info!("Background worker started");

    let dispatcher = Dispatcher::new(action_tx);

    // Ticks drive the loading spinner and transient-error expiry.
    let mut last_tick = Instant::now();

    loop {
        // recv_timeout keeps tick generation alive while idle
        match action_rx.recv_timeout(Duration::from_millis(10)) {
            Ok(action) => {
                if matches!(action, Action::Global(GlobalAction::Quit)) {
                    log::info!("Background worker received shutdown signal");
                    if result_tx.send(action).is_err() {
                        log::error!("Failed to send quit action to main thread");
                    }
                    break;
                }

                let current_state = match state.read() {
                    Ok(s) => s.clone(),
                    Err(e) => {
                        log::error!("Failed to read shared state: {}", e);
                        continue;
                    }
                };

                let mut should_forward = true;
                for mw in &mut middleware {
                    if !mw.handle(&action, &current_state, &dispatcher) {
                        should_forward = false;
                        break;
                    }
                }

                if should_forward && result_tx.send(action).is_err() {
                    log::error!("Result channel disconnected, shutting down");
                    break;
                }
            }
            Err(std::sync::mpsc::RecvTimeoutError::Timeout) => {}
            Err(std::sync::mpsc::RecvTimeoutError::Disconnected) => {
                log::info!("Action channel disconnected, shutting down");
                break;
            }
        }

        if last_tick.elapsed() >= TICK_RATE {
            if result_tx.send(Action::Global(GlobalAction::Tick)).is_err() {
                log::error!("Result channel disconnected during tick");
                break;
            }
            last_tick = Instant::now();
        }
    }

    log::info!("Background worker stopped");
}
