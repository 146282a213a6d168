//! Reply classification
//!
//! The host model is asked to mark its verdicts with the literal tokens
//! `CORRECT` / `INCORRECT` and we read them back out of free text. This is
//! a substring heuristic, kept behind [`ReplyClassifier`] so it can be
//! swapped for something smarter without touching the state machine.

use serde::Serialize;

/// Verdict read out of a host reply
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Judgment {
    Correct,
    Incorrect,
    /// Neither marker found
    Inconclusive,
}

/// Reads verdicts and question markers out of generated text
pub trait ReplyClassifier: Send + Sync {
    fn classify_judgment(&self, reply: &str) -> Judgment;

    fn contains_question_marker(&self, reply: &str) -> bool;
}

const CORRECT_MARKER: &str = "CORRECT";
const INCORRECT_MARKER: &str = "INCORRECT";

/// Words that signal a new question, per supported script.
/// Latin entries are compared lowercase; Hebrew and Arabic are caseless.
const QUESTION_MARKERS: &[&str] = &[
    "question", // English
    "שאלה",     // Hebrew
    "سؤال",     // Arabic
];

/// Case-insensitive substring matching on the markers above.
///
/// `INCORRECT` wins over `CORRECT`: every `INCORRECT` also contains
/// `CORRECT`, and wrong-answer replies routinely go on to mention "the
/// correct answer".
#[derive(Debug, Clone, Copy, Default)]
pub struct KeywordClassifier;

impl ReplyClassifier for KeywordClassifier {
    fn classify_judgment(&self, reply: &str) -> Judgment {
        let upper = reply.to_uppercase();
        if upper.contains(INCORRECT_MARKER) {
            Judgment::Incorrect
        } else if upper.contains(CORRECT_MARKER) {
            Judgment::Correct
        } else {
            Judgment::Inconclusive
        }
    }

    fn contains_question_marker(&self, reply: &str) -> bool {
        let lower = reply.to_lowercase();
        QUESTION_MARKERS.iter().any(|marker| lower.contains(marker))
    }
}
