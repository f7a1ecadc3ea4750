//! Letter quiz: find the glyph that matches a letter name.
//!
//! Each team answers `rounds_per_player` questions in round-robin order.
//! Questions come from the local alphabet table or from the AI content
//! gateway, per `QuestionSource`.

mod game;
mod question;
mod source;

pub use game::{QuizGame, QuizGameBuilder};
pub use question::{fallback_questions, RoundQuestion, OPTION_COUNT};
pub use source::{generated_questions, prepare_questions, select_letters, static_questions, QuestionOrigin};
