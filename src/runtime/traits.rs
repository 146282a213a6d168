//! The response generator seam
//!
//! The runtime only knows this trait, so tests drive it with mocks and
//! production plugs in an LLM.

use super::TurnError;
use crate::game::{Role, Turn};
use crate::llm::{ConfigError, LlmMessage, LlmRequest, LlmService};
use crate::system_prompt::SYSTEM_PROMPT;
use async_trait::async_trait;
use std::sync::Arc;

/// Produces the host's reply to the latest user message.
///
/// `history` already ends with the turn for `latest_user_message`.
#[async_trait]
pub trait ResponseGenerator: Send + Sync {
    async fn generate(&self, latest_user_message: &str, history: &[Turn])
        -> Result<String, TurnError>;
}

#[async_trait]
impl<T: ResponseGenerator + ?Sized> ResponseGenerator for Arc<T> {
    async fn generate(
        &self,
        latest_user_message: &str,
        history: &[Turn],
    ) -> Result<String, TurnError> {
        (**self).generate(latest_user_message, history).await
    }
}

// ============================================================================
// Production Adapters
// ============================================================================

/// Generates replies with an LLM playing Quizzy
pub struct LlmGenerator {
    llm: Arc<dyn LlmService>,
    temperature: f32,
}

impl LlmGenerator {
    pub fn new(llm: Arc<dyn LlmService>, temperature: f32) -> Self {
        Self { llm, temperature }
    }

    pub fn build_request(&self, latest_user_message: &str, history: &[Turn]) -> LlmRequest {
        let mut messages: Vec<LlmMessage> = history
            .iter()
            .map(|turn| match turn.role {
                Role::User => LlmMessage::user(&turn.content),
                Role::Assistant => LlmMessage::assistant(&turn.content),
            })
            .collect();

        let ends_with_latest = history
            .last()
            .is_some_and(|t| t.role == Role::User && t.content == latest_user_message);
        if !ends_with_latest {
            messages.push(LlmMessage::user(latest_user_message));
        }

        LlmRequest {
            system: Some(SYSTEM_PROMPT.to_string()),
            messages,
            temperature: Some(self.temperature),
            max_tokens: None,
        }
    }
}

#[async_trait]
impl ResponseGenerator for LlmGenerator {
    async fn generate(
        &self,
        latest_user_message: &str,
        history: &[Turn],
    ) -> Result<String, TurnError> {
        let request = self.build_request(latest_user_message, history);
        let response = self.llm.complete(&request).await?;
        Ok(response.text)
    }
}

/// Stands in when no usable backend could be built; every turn fails
/// with the configuration problem.
pub struct UnconfiguredGenerator {
    reason: ConfigError,
}

impl UnconfiguredGenerator {
    pub fn new(reason: ConfigError) -> Self {
        Self { reason }
    }
}

#[async_trait]
impl ResponseGenerator for UnconfiguredGenerator {
    async fn generate(
        &self,
        _latest_user_message: &str,
        _history: &[Turn],
    ) -> Result<String, TurnError> {
        Err(self.reason.clone().into())
    }
}
