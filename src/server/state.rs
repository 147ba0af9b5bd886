// src/server/state.rs

//! Application state for the HTTP server.
//!
//! Holds the message service used to publish, the random source for match
//! generation, and the address of the background listener actor so handlers
//! can report on it.

use std::sync::{Mutex, MutexGuard, PoisonError};

use actix::Addr;
use rand::rngs::StdRng;

use crate::listener::MessageListener;
use crate::service::MessageService;

/// Shared application state, injected into HTTP handlers.
pub struct AppState {
    /// Publishes messages on the broker channel.
    pub message_service: MessageService,
    /// Address of the background listener actor.
    pub listener: Addr<MessageListener>,
    /// Random source for generated matches; seedable for reproducible runs.
    rng: Mutex<StdRng>,
}

impl AppState {
    pub fn new(
        message_service: MessageService,
        listener: Addr<MessageListener>,
        rng: StdRng,
    ) -> Self {
        AppState {
            message_service,
            listener,
            rng: Mutex::new(rng),
        }
    }

    /// Lock the shared random source. Hold the guard only while drawing.
    pub fn rng(&self) -> MutexGuard<'_, StdRng> {
        self.rng.lock().unwrap_or_else(PoisonError::into_inner)
    }
}
