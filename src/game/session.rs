//! Session state for one game

use super::classify::Judgment;
use super::turn::Turn;
use chrono::{DateTime, Utc};
use serde::Serialize;
use uuid::Uuid;

/// Greeting seeded into every fresh session
pub const WELCOME_MESSAGE: &str =
    "Hi! I'm Quizzy, your trivia host. Pick a topic (history, science, movies, etc.) to start!";

/// The two states of the turn-taking machine
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum GameState {
    /// No question is pending
    Idle,
    /// The last assistant turn posed a question that has not been judged
    AwaitingAnswer,
}

/// Full mutable state of one ongoing game.
///
/// Counters only move through [`Session::record_judgment`], which keeps
/// `score <= questions_asked`.
#[derive(Debug, Clone)]
pub struct Session {
    game_id: Uuid,
    started_at: DateTime<Utc>,
    history: Vec<Turn>,
    score: u32,
    questions_asked: u32,
    awaiting_answer: bool,
}

impl Session {
    /// Start a new game: one welcome turn, zeroed counters, not awaiting.
    pub fn new() -> Self {
        Self {
            game_id: Uuid::new_v4(),
            started_at: Utc::now(),
            history: vec![Turn::assistant(WELCOME_MESSAGE)],
            score: 0,
            questions_asked: 0,
            awaiting_answer: false,
        }
    }

    /// Discard this game and start over
    pub fn reset(&mut self) {
        *self = Self::new();
    }

    pub fn game_id(&self) -> Uuid {
        self.game_id
    }

    pub fn history(&self) -> &[Turn] {
        &self.history
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn questions_asked(&self) -> u32 {
        self.questions_asked
    }

    pub fn awaiting_answer(&self) -> bool {
        self.awaiting_answer
    }

    pub fn state(&self) -> GameState {
        if self.awaiting_answer {
            GameState::AwaitingAnswer
        } else {
            GameState::Idle
        }
    }

    pub(crate) fn record_user_turn(&mut self, content: impl Into<String>) {
        self.history.push(Turn::user(content));
    }

    pub(crate) fn record_assistant_turn(&mut self, content: impl Into<String>) {
        self.history.push(Turn::assistant(content));
    }

    pub(crate) fn record_judgment(&mut self, judgment: Judgment) {
        match judgment {
            Judgment::Correct => {
                self.score += 1;
                self.questions_asked += 1;
            }
            Judgment::Incorrect => self.questions_asked += 1,
            Judgment::Inconclusive => {}
        }
    }

    pub(crate) fn set_awaiting_answer(&mut self, awaiting: bool) {
        self.awaiting_answer = awaiting;
    }

    /// Render-ready copy of the session for the presentation layer
    pub fn snapshot(&self) -> GameSnapshot {
        GameSnapshot {
            game_id: self.game_id,
            started_at: self.started_at,
            messages: self.history.clone(),
            score: self.score,
            questions_asked: self.questions_asked,
            awaiting_answer: self.awaiting_answer,
            state: self.state(),
        }
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}

/// Serializable view of a session
#[derive(Debug, Clone, Serialize)]
pub struct GameSnapshot {
    pub game_id: Uuid,
    pub started_at: DateTime<Utc>,
    pub messages: Vec<Turn>,
    pub score: u32,
    pub questions_asked: u32,
    pub awaiting_answer: bool,
    pub state: GameState,
}
