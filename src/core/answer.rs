//! Answer records kept in the session history.

use serde::{Deserialize, Serialize};

use super::team::TeamId;

/// Result shown during the feedback lock.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FeedbackKind {
    Correct,
    Wrong,
}

impl FeedbackKind {
    #[must_use]
    pub fn from_correct(correct: bool) -> Self {
        if correct {
            FeedbackKind::Correct
        } else {
            FeedbackKind::Wrong
        }
    }

    #[must_use]
    pub fn is_correct(self) -> bool {
        self == FeedbackKind::Correct
    }
}

/// One submitted answer.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct AnswerRecord {
    /// Team whose turn it was.
    pub team: TeamId,
    /// Round the answer belongs to (0-based).
    pub round: usize,
    /// Glyph the team picked.
    pub answer: String,
    pub feedback: FeedbackKind,
}

impl AnswerRecord {
    #[must_use]
    pub fn is_correct(&self) -> bool {
        self.feedback.is_correct()
    }
}
