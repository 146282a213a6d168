//! HTTP API for the trivia game
//!
//! Exposes the transcript and score, plus the two player actions:
//! send a message and start a new game.

mod handlers;
mod types;

pub use handlers::create_router;
#[allow(unused_imports)] // Public API re-exports
pub use types::*;

use crate::runtime::GameRuntime;
use std::sync::Arc;

/// Application state shared across handlers
#[derive(Clone)]
pub struct AppState {
    pub runtime: Arc<GameRuntime>,
}

impl AppState {
    pub fn new(runtime: GameRuntime) -> Self {
        Self {
            runtime: Arc::new(runtime),
        }
    }
}
