//! Mock implementations for testing
//!
//! These mocks enable turn-processing tests without a real LLM.

use super::traits::*;
use super::TurnError;
use crate::game::Turn;
use async_trait::async_trait;
use std::collections::VecDeque;
use std::sync::Mutex;

// ============================================================================
// Mock Response Generator
// ============================================================================

/// A recorded call to the generator
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerateCall {
    pub latest_user_message: String,
    pub history: Vec<Turn>,
}

/// Mock generator that returns queued replies
pub struct MockGenerator {
    replies: Mutex<VecDeque<Result<String, TurnError>>>,
    /// Record of all calls made
    pub calls: Mutex<Vec<GenerateCall>>,
}

impl MockGenerator {
    pub fn new() -> Self {
        Self {
            replies: Mutex::new(VecDeque::new()),
            calls: Mutex::new(Vec::new()),
        }
    }

    /// Queue a successful reply
    pub fn queue_reply(&self, reply: impl Into<String>) {
        self.replies.lock().unwrap().push_back(Ok(reply.into()));
    }

    /// Queue a failure
    pub fn queue_error(&self, error: TurnError) {
        self.replies.lock().unwrap().push_back(Err(error));
    }

    pub fn recorded_calls(&self) -> Vec<GenerateCall> {
        self.calls.lock().unwrap().clone()
    }
}

impl Default for MockGenerator {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ResponseGenerator for MockGenerator {
    async fn generate(
        &self,
        latest_user_message: &str,
        history: &[Turn],
    ) -> Result<String, TurnError> {
        self.calls.lock().unwrap().push(GenerateCall {
            latest_user_message: latest_user_message.to_string(),
            history: history.to_vec(),
        });
        self.replies
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| Err(TurnError::Generation("No mock reply queued".to_string())))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::{GameState, Judgment, KeywordClassifier, Role, Session, WELCOME_MESSAGE};
    use crate::llm::{
        ConfigError, LlmError, LlmErrorKind, LlmRequest, LlmResponse, LlmService, MessageRole,
        Usage,
    };
    use crate::runtime::{process_turn, GameRuntime};
    use std::sync::Arc;

    async fn turn(
        session: &mut Session,
        generator: &MockGenerator,
        text: &str,
    ) -> Result<crate::runtime::TurnReply, TurnError> {
        process_turn(session, text, generator, &KeywordClassifier).await
    }

    #[tokio::test]
    async fn test_topic_choice_poses_question() {
        let generator = MockGenerator::new();
        generator.queue_reply("Great choice! Here's a question: What is H2O?");
        let mut session = Session::new();

        let reply = turn(&mut session, &generator, "science").await.unwrap();

        assert_eq!(reply.reply, "Great choice! Here's a question: What is H2O?");
        assert!(session.awaiting_answer());
        assert_eq!(session.score(), 0);
        assert_eq!(session.questions_asked(), 0);
        assert_eq!(session.history().len(), 3);
    }

    #[tokio::test]
    async fn test_correct_answer_scores() {
        let generator = MockGenerator::new();
        generator.queue_reply("Great choice! Here's a question: What is H2O?");
        generator.queue_reply("CORRECT! Well done. Want to keep playing?");
        let mut session = Session::new();

        turn(&mut session, &generator, "science").await.unwrap();
        let reply = turn(&mut session, &generator, "water").await.unwrap();

        assert_eq!(reply.outcome.judgment, Some(Judgment::Correct));
        assert_eq!(session.score(), 1);
        assert_eq!(session.questions_asked(), 1);
        assert!(!session.awaiting_answer());
    }

    #[tokio::test]
    async fn test_correct_with_follow_up_question_keeps_awaiting() {
        let generator = MockGenerator::new();
        generator.queue_reply("Here's a question: What is H2O?");
        generator.queue_reply("CORRECT! Well done. Want another question?");
        let mut session = Session::new();

        turn(&mut session, &generator, "science").await.unwrap();
        let reply = turn(&mut session, &generator, "water").await.unwrap();

        assert_eq!(reply.outcome.from, GameState::AwaitingAnswer);
        assert_eq!(reply.outcome.to, GameState::AwaitingAnswer);
        assert_eq!(session.score(), 1);
        assert_eq!(session.questions_asked(), 1);
    }

    #[tokio::test]
    async fn test_generator_failure_records_user_turn_only() {
        let generator = MockGenerator::new();
        generator.queue_reply("Here's a question: What is H2O?");
        generator.queue_error(TurnError::Generation("network timeout".to_string()));
        let mut session = Session::new();

        turn(&mut session, &generator, "science").await.unwrap();
        let before_len = session.history().len();

        let err = turn(&mut session, &generator, "water").await.unwrap_err();

        assert_eq!(err, TurnError::Generation("network timeout".to_string()));
        assert_eq!(session.history().len(), before_len + 1);
        assert_eq!(session.history().last(), Some(&Turn::user("water")));
        assert_eq!(session.score(), 0);
        assert_eq!(session.questions_asked(), 0);
        assert!(session.awaiting_answer());
    }

    #[tokio::test]
    async fn test_generator_sees_full_history() {
        let generator = MockGenerator::new();
        generator.queue_reply("Pick a topic!");
        let mut session = Session::new();

        turn(&mut session, &generator, "hello").await.unwrap();

        let calls = generator.recorded_calls();
        assert_eq!(calls.len(), 1);
        assert_eq!(calls[0].latest_user_message, "hello");
        assert_eq!(
            calls[0].history,
            vec![Turn::assistant(WELCOME_MESSAGE), Turn::user("hello")]
        );
    }

    #[tokio::test]
    async fn test_session_survives_failure() {
        let generator = MockGenerator::new();
        generator.queue_error(TurnError::Configuration("missing key".to_string()));
        generator.queue_reply("Here's a question about space?");
        let mut session = Session::new();

        assert!(turn(&mut session, &generator, "space").await.is_err());
        turn(&mut session, &generator, "space please").await.unwrap();

        let roles: Vec<Role> = session.history().iter().map(|t| t.role).collect();
        assert_eq!(
            roles,
            vec![Role::Assistant, Role::User, Role::User, Role::Assistant]
        );
        assert!(session.awaiting_answer());
    }

    #[tokio::test]
    async fn test_runtime_submit_and_new_game() {
        let generator = Arc::new(MockGenerator::new());
        generator.queue_reply("Here's a question: What is H2O?");
        generator.queue_reply("INCORRECT. The correct answer is water.");
        let runtime = GameRuntime::new(generator.clone(), Arc::new(KeywordClassifier));

        let first = runtime.submit_message("science").await;
        assert!(first.result.is_ok());
        assert!(first.game.awaiting_answer);

        let second = runtime.submit_message("fire").await;
        assert_eq!(
            second.result.unwrap().outcome.judgment,
            Some(Judgment::Incorrect)
        );
        assert_eq!(second.game.score, 0);
        assert_eq!(second.game.questions_asked, 1);
        assert_eq!(second.game.messages.len(), 5);

        let fresh = runtime.new_game().await;
        assert_ne!(fresh.game_id, second.game.game_id);
        assert_eq!(fresh.messages, vec![Turn::assistant(WELCOME_MESSAGE)]);
        assert_eq!(fresh.questions_asked, 0);
        assert!(!fresh.awaiting_answer);
        assert_eq!(runtime.snapshot().await.game_id, fresh.game_id);
    }

    #[tokio::test]
    async fn test_runtime_failure_snapshot_includes_user_turn() {
        let generator = Arc::new(MockGenerator::new());
        generator.queue_error(TurnError::Generation("network timeout".to_string()));
        let runtime = GameRuntime::new(generator, Arc::new(KeywordClassifier));

        let submission = runtime.submit_message("science").await;

        assert!(submission.result.is_err());
        assert_eq!(submission.game.messages.len(), 2);
        assert_eq!(submission.game.messages[1], Turn::user("science"));
    }

    #[tokio::test]
    async fn test_unconfigured_generator_reports_configuration_error() {
        let generator = UnconfiguredGenerator::new(ConfigError::MissingApiKey);
        let mut session = Session::new();

        let err = process_turn(&mut session, "hi", &generator, &KeywordClassifier)
            .await
            .unwrap_err();

        assert!(matches!(err, TurnError::Configuration(_)));
        assert!(err.user_message().contains("GEMINI_API_KEY"));
        assert_eq!(session.history().len(), 2);
    }

    // ------------------------------------------------------------------
    // LlmGenerator against a canned service
    // ------------------------------------------------------------------

    struct CannedLlm {
        reply: Result<&'static str, LlmErrorKind>,
        requests: Mutex<Vec<LlmRequest>>,
    }

    #[async_trait]
    impl LlmService for CannedLlm {
        async fn complete(&self, request: &LlmRequest) -> Result<LlmResponse, LlmError> {
            self.requests.lock().unwrap().push(request.clone());
            match self.reply {
                Ok(text) => Ok(LlmResponse {
                    text: text.to_string(),
                    finish_reason: None,
                    usage: Usage::default(),
                }),
                Err(kind) => Err(LlmError::new(kind, "network timeout")),
            }
        }

        fn model_id(&self) -> &str {
            "canned"
        }
    }

    #[tokio::test]
    async fn test_llm_generator_sends_history_once() {
        let llm = Arc::new(CannedLlm {
            reply: Ok("Pick a topic!"),
            requests: Mutex::new(Vec::new()),
        });
        let generator = LlmGenerator::new(llm.clone(), 0.7);
        let history = vec![Turn::assistant(WELCOME_MESSAGE), Turn::user("hello")];

        let reply = generator.generate("hello", &history).await.unwrap();
        assert_eq!(reply, "Pick a topic!");

        let requests = llm.requests.lock().unwrap();
        let request = &requests[0];
        assert_eq!(request.messages.len(), 2);
        assert_eq!(request.messages[0].role, MessageRole::Assistant);
        assert_eq!(request.messages[1].role, MessageRole::User);
        assert_eq!(request.messages[1].text, "hello");
        assert!(request.system.as_deref().unwrap().contains("Quizzy"));
        assert!(request
            .temperature
            .is_some_and(|t| (t - 0.7).abs() < f32::EPSILON));
    }

    #[test]
    fn test_llm_generator_appends_missing_latest() {
        let llm = Arc::new(CannedLlm {
            reply: Ok("unused"),
            requests: Mutex::new(Vec::new()),
        });
        let generator = LlmGenerator::new(llm, 0.7);

        let request = generator.build_request("hello", &[Turn::assistant(WELCOME_MESSAGE)]);
        assert_eq!(request.messages.len(), 2);
        assert_eq!(request.messages[1].text, "hello");

        let request = generator.build_request("hello", &[]);
        assert_eq!(request.messages.len(), 1);
    }

    #[tokio::test]
    async fn test_llm_generator_maps_errors() {
        let llm = Arc::new(CannedLlm {
            reply: Err(LlmErrorKind::Network),
            requests: Mutex::new(Vec::new()),
        });
        let generator = LlmGenerator::new(llm, 0.7);

        let err = generator.generate("hi", &[Turn::user("hi")]).await.unwrap_err();
        assert_eq!(err, TurnError::Generation("network timeout".to_string()));
    }

    #[tokio::test]
    async fn test_mock_generator_runs_dry() {
        let generator = MockGenerator::new();
        let result = generator.generate("hi", &[]).await;
        assert!(matches!(result, Err(TurnError::Generation(_))));
    }
}
