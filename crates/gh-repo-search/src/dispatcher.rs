//! Dispatcher for middleware action dispatch
//!
//! When middleware needs to dispatch actions that should re-enter the
//! middleware chain, it uses the Dispatcher. This enables patterns like:
//! - a pager event forwarder turning `PageEvent`s into search actions
//! - the search middleware chaining `Refresh` into a keyed reload

use crate::actions::Action;
use std::sync::mpsc::Sender;

/// Dispatcher for sending actions through the middleware chain
///
/// Actions dispatched here re-enter the chain from the beginning, so
/// every middleware can observe and react to them.
#[derive(Clone)]
pub struct Dispatcher {
    action_tx: Sender<Action>,
}

impl Dispatcher {
    /// Create a new dispatcher with the action channel
    ///
    /// `action_tx` should be a clone of the channel feeding the
    /// background worker, so dispatched actions re-enter the chain.
    pub fn new(action_tx: Sender<Action>) -> Self {
        Self { action_tx }
    }

    /// Dispatch an action to be processed through the middleware chain
    pub fn dispatch(&self, action: Action) {
        if let Err(e) = self.action_tx.send(action) {
            log::error!("Dispatcher: failed to send action: {}", e);
        }
    }
}
