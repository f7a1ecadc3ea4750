//! Core session types: teams, session state, answers, RNG, configuration.
//!
//! These building blocks are shared by both mini-games. Games configure
//! them via `ArenaConfig` rather than modifying the core.

pub mod team;
pub mod rng;
pub mod config;
pub mod answer;
pub mod state;

pub use team::{Team, TeamId, TeamColor, TeamNaming, Roster, MAX_TEAMS, POINTS_PER_CORRECT};
pub use rng::GameRng;
pub use config::{ArenaConfig, ConfigError, GameMode, GameType, GatewayConfig, QuestionSource};
pub use answer::{AnswerRecord, FeedbackKind};
pub use state::{Phase, RoundAdvance, SessionState};
