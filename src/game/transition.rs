//! Applying a generated reply to a session
//!
//! No I/O happens here: given the same session and reply, the result is
//! always the same.

use super::classify::{Judgment, ReplyClassifier};
use super::session::{GameState, Session};
use serde::Serialize;

/// What a reply did to the session
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ReplyOutcome {
    pub from: GameState,
    pub to: GameState,
    /// `None` when no answer was pending, so nothing was judged
    pub judgment: Option<Judgment>,
    pub posed_question: bool,
}

/// Fold a successful reply into the session.
///
/// While awaiting an answer the reply is judged and the flag is cleared,
/// whatever the verdict. A reply carrying a question marker then sets the
/// flag again, so `AwaitingAnswer -> AwaitingAnswer` is possible in one
/// turn. The reply is appended last.
pub fn apply_reply(
    session: &mut Session,
    reply: &str,
    classifier: &dyn ReplyClassifier,
) -> ReplyOutcome {
    let from = session.state();

    let judgment = if session.awaiting_answer() {
        let judgment = classifier.classify_judgment(reply);
        session.record_judgment(judgment);
        session.set_awaiting_answer(false);
        Some(judgment)
    } else {
        None
    };

    let posed_question = classifier.contains_question_marker(reply);
    if posed_question {
        session.set_awaiting_answer(true);
    }

    session.record_assistant_turn(reply);

    ReplyOutcome {
        from,
        to: session.state(),
        judgment,
        posed_question,
    }
}
