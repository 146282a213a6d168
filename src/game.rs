//! Trivia game core
//!
//! Pure session state plus the reply classification that drives the
//! `Idle` / `AwaitingAnswer` state machine. Nothing in here performs I/O;
//! the generator call lives in [`crate::runtime`].

mod classify;
mod session;
mod transition;
mod turn;


pub use classify::{Judgment, KeywordClassifier, ReplyClassifier};
pub use session::{GameSnapshot, GameState, Session, WELCOME_MESSAGE};
pub use transition::{apply_reply, ReplyOutcome};
pub use turn::{Role, Turn};
