//! API request and response types

use crate::game::{GameSnapshot, Judgment};
use serde::{Deserialize, Serialize};

/// Request to send a chat message
#[derive(Debug, Deserialize)]
pub struct ChatRequest {
    pub text: String,
}

/// Response for a processed turn
#[derive(Debug, Serialize)]
pub struct ChatResponse {
    pub reply: String,
    /// Verdict read from the reply, if an answer was pending
    pub judgment: Option<Judgment>,
    pub game: GameSnapshot,
}

/// Response for a failed turn. The game still reflects the recorded
/// user message.
#[derive(Debug, Serialize)]
pub struct TurnErrorResponse {
    pub error: String,
    pub kind: &'static str,
    pub game: GameSnapshot,
}
