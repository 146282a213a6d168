//! Game runtime
//!
//! Runs one turn at a time against the single live session: record the
//! user turn, call the response generator, fold the reply into the
//! session through [`crate::game::apply_reply`].

mod error;
mod executor;
pub mod traits;

#[cfg(test)]
pub mod testing;

pub use error::TurnError;
pub use executor::{process_turn, GameRuntime, Submission, TurnReply};
pub use traits::*;
