//! Turn failure taxonomy

use crate::llm::{ConfigError, LlmError, LlmErrorKind};
use thiserror::Error;

/// Why a turn produced no assistant reply.
///
/// Both variants end the turn, never the session.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum TurnError {
    /// The generator cannot be used at all (e.g. missing credential)
    #[error("{0}")]
    Configuration(String),
    /// The generation call itself failed
    #[error("{0}")]
    Generation(String),
}

impl TurnError {
    pub fn kind(&self) -> &'static str {
        match self {
            TurnError::Configuration(_) => "configuration",
            TurnError::Generation(_) => "generation",
        }
    }

    /// Text to show the player
    pub fn user_message(&self) -> String {
        match self {
            TurnError::Configuration(reason) => reason.clone(),
            TurnError::Generation(reason) => {
                format!("Sorry, I'm having trouble. Try again!\nMore details: {reason}")
            }
        }
    }
}

impl From<ConfigError> for TurnError {
    fn from(e: ConfigError) -> Self {
        TurnError::Configuration(e.to_string())
    }
}

impl From<LlmError> for TurnError {
    fn from(e: LlmError) -> Self {
        match e.kind {
            LlmErrorKind::Auth => TurnError::Configuration(e.message),
            _ => TurnError::Generation(e.message),
        }
    }
}
