//! Turn processing and the live game

use super::traits::ResponseGenerator;
use super::TurnError;
use crate::game::{apply_reply, GameSnapshot, ReplyClassifier, ReplyOutcome, Session};
use std::sync::Arc;
use tokio::sync::Mutex;

/// A successful turn
#[derive(Debug, Clone)]
pub struct TurnReply {
    pub reply: String,
    pub outcome: ReplyOutcome,
}

/// Process one user message against `session`.
///
/// The user turn is recorded before the generator runs and stays recorded
/// if generation fails; counters and the awaiting flag only move on
/// success.
pub async fn process_turn(
    session: &mut Session,
    user_message: &str,
    generator: &dyn ResponseGenerator,
    classifier: &dyn ReplyClassifier,
) -> Result<TurnReply, TurnError> {
    session.record_user_turn(user_message);

    let reply = match generator.generate(user_message, session.history()).await {
        Ok(reply) => reply,
        Err(e) => {
            tracing::warn!(
                game_id = %session.game_id(),
                kind = e.kind(),
                error = %e,
                "Turn failed"
            );
            return Err(e);
        }
    };

    let outcome = apply_reply(session, &reply, classifier);
    tracing::debug!(
        game_id = %session.game_id(),
        from = ?outcome.from,
        to = ?outcome.to,
        judgment = ?outcome.judgment,
        posed_question = outcome.posed_question,
        score = session.score(),
        questions_asked = session.questions_asked(),
        "Turn processed"
    );

    Ok(TurnReply { reply, outcome })
}

/// Result of submitting a message: the turn result plus the session as it
/// stands afterwards (which includes the user turn even on failure)
#[derive(Debug, Clone)]
pub struct Submission {
    pub result: Result<TurnReply, TurnError>,
    pub game: GameSnapshot,
}

/// Owns the one live session.
///
/// The lock is held across the generator call, so a turn and a reset can
/// never interleave.
pub struct GameRuntime {
    session: Mutex<Session>,
    generator: Arc<dyn ResponseGenerator>,
    classifier: Arc<dyn ReplyClassifier>,
}

impl GameRuntime {
    pub fn new(
        generator: Arc<dyn ResponseGenerator>,
        classifier: Arc<dyn ReplyClassifier>,
    ) -> Self {
        Self {
            session: Mutex::new(Session::new()),
            generator,
            classifier,
        }
    }

    /// Entry point: the player sent a message
    pub async fn submit_message(&self, text: &str) -> Submission {
        let mut session = self.session.lock().await;
        let result = process_turn(
            &mut session,
            text,
            self.generator.as_ref(),
            self.classifier.as_ref(),
        )
        .await;

        Submission {
            result,
            game: session.snapshot(),
        }
    }

    /// Entry point: the player asked for a new game
    pub async fn new_game(&self) -> GameSnapshot {
        let mut session = self.session.lock().await;
        session.reset();
        tracing::info!(game_id = %session.game_id(), "New game started");
        session.snapshot()
    }

    pub async fn snapshot(&self) -> GameSnapshot {
        self.session.lock().await.snapshot()
    }
}
