//! # alif-arena
//!
//! Game logic for a children's Arabic alphabet app: flashcards, a letter
//! quiz and the Glyph Galaxy matching game, with team scoring.
//!
//! ## Design Principles
//!
//! 1. **State, not pixels**: the crate exposes view and session state;
//!    hosts draw it.
//!
//! 2. **One round engine**: both mini-games share the `RoundEngine`
//!    trait, so scoring, turn rotation and the feedback lock behave the
//!    same everywhere.
//!
//! 3. **Never block on the network**: every AI request has a static
//!    fallback, and a failed request never stops a game.
//!
//! 4. **Reproducible**: all randomness flows through a seeded `GameRng`.
//!
//! ## Modules
//!
//! - `alphabet`: the 28-letter table and similarity groups
//! - `core`: teams, session state, answers, RNG, configuration
//! - `rules`: `RoundEngine` trait and `GameResult`
//! - `games`: the quiz and Glyph Galaxy engines
//! - `gateway`: AI content gateway (Gemini or offline), audio clips, request slots
//! - `flashcard`: lesson cards with mnemonic and pronunciation requests
//! - `session`: live engine plus feedback timer
//! - `app`: top-level view state and game catalog

pub mod alphabet;
pub mod core;
pub mod rules;
pub mod games;
pub mod gateway;
pub mod flashcard;
pub mod session;
pub mod app;

// Re-export commonly used types
pub use crate::alphabet::{AlphabetTable, LetterRecord, Palette, SimilarityGroup, ALPHABET, SIMILARITY_GROUPS};

pub use crate::core::{
    AnswerRecord, ArenaConfig, ConfigError, FeedbackKind, GameMode, GameRng, GameType,
    GatewayConfig, Phase, QuestionSource, Roster, RoundAdvance, SessionState,
    Team, TeamColor, TeamId,
};

pub use crate::rules::{AnswerOutcome, GameResult, RoundEngine};

pub use crate::games::matching::{MatchingGame, MatchingGameBuilder, MatchingRound};
pub use crate::games::quiz::{QuestionOrigin, QuizGame, QuizGameBuilder, RoundQuestion};

pub use crate::gateway::{
    AnyGateway, AudioClip, ContentGateway, GatewayError, GeminiGateway, OfflineGateway,
    RequestSlot, RequestState,
};

pub use crate::flashcard::LetterCard;
pub use crate::session::Session;
pub use crate::app::{AppState, View};
