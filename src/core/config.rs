//! Game and gateway configuration.
//!
//! - `GameMode` / `GameType`: what the player picked on the games screen
//! - `QuestionSource`: where the quiz gets its questions
//! - `ArenaConfig`: round counts and feedback delays
//! - `GatewayConfig`: credentials and model names for the AI content gateway
//!
//! Everything has a sensible default; hosts override with the `with_*`
//! builders or load an `ArenaConfig` from JSON.

use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Errors raised while loading or validating configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("invalid config JSON: {0}")]
    Json(#[from] serde_json::Error),
    #[error("invalid config: {0}")]
    Invalid(String),
    #[error("environment variable {0} is not set")]
    MissingVar(&'static str),
}

/// How many teams take part.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum GameMode {
    Solo,
    #[serde(rename = "TEAMS_2")]
    Teams2,
    #[serde(rename = "TEAMS_3")]
    Teams3,
}

impl GameMode {
    /// Number of teams for this mode.
    #[must_use]
    pub const fn team_count(self) -> usize {
        match self {
            GameMode::Solo => 1,
            GameMode::Teams2 => 2,
            GameMode::Teams3 => 3,
        }
    }
}

/// Which mini-game to play.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum GameType {
    /// Multiple-choice letter identification.
    Quiz,
    /// Pick the target among visually similar glyphs.
    GlyphGalaxy,
}

/// Where the quiz engine gets its questions.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum QuestionSource {
    /// Built locally from the alphabet table.
    #[default]
    Static,
    /// Requested from the AI content gateway, with a static fallback.
    Generated,
}

/// Round counts and feedback timings for both mini-games.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ArenaConfig {
    /// Quiz questions each team answers.
    pub rounds_per_player: usize,

    /// Quiz feedback lock, in milliseconds.
    pub quiz_feedback_ms: u64,

    /// Total Glyph Galaxy rounds, shared between all teams.
    pub matching_rounds: usize,

    /// Glyph Galaxy feedback lock, in milliseconds.
    pub matching_feedback_ms: u64,

    /// Options shown per Glyph Galaxy round.
    pub matching_pool_size: usize,

    /// Quiz question source.
    pub question_source: QuestionSource,
}

impl Default for ArenaConfig {
    fn default() -> Self {
        Self {
            rounds_per_player: 5,
            quiz_feedback_ms: 1500,
            matching_rounds: 10,
            matching_feedback_ms: 1200,
            matching_pool_size: 12,
            question_source: QuestionSource::Static,
        }
    }
}

impl ArenaConfig {
    /// Parse a config from JSON. Missing fields take their defaults.
    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Reject configs that cannot produce a playable session.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.rounds_per_player == 0 {
            return Err(ConfigError::Invalid("rounds_per_player must be at least 1".into()));
        }
        if self.matching_rounds == 0 {
            return Err(ConfigError::Invalid("matching_rounds must be at least 1".into()));
        }
        if self.matching_pool_size == 0 {
            return Err(ConfigError::Invalid("matching_pool_size must be at least 1".into()));
        }
        Ok(())
    }

    #[must_use]
    pub fn with_rounds_per_player(mut self, rounds: usize) -> Self {
        self.rounds_per_player = rounds;
        self
    }

    #[must_use]
    pub fn with_matching_rounds(mut self, rounds: usize) -> Self {
        self.matching_rounds = rounds;
        self
    }

    #[must_use]
    pub fn with_question_source(mut self, source: QuestionSource) -> Self {
        self.question_source = source;
        self
    }

    /// Set both feedback locks at once (handy for fast tests).
    #[must_use]
    pub fn with_feedback_ms(mut self, quiz: u64, matching: u64) -> Self {
        self.quiz_feedback_ms = quiz;
        self.matching_feedback_ms = matching;
        self
    }

    /// Quiz feedback lock duration.
    #[must_use]
    pub fn quiz_feedback(&self) -> Duration {
        Duration::from_millis(self.quiz_feedback_ms)
    }

    /// Glyph Galaxy feedback lock duration.
    #[must_use]
    pub fn matching_feedback(&self) -> Duration {
        Duration::from_millis(self.matching_feedback_ms)
    }
}

/// Default text model for mnemonics and question batches.
pub const DEFAULT_TEXT_MODEL: &str = "gemini-3-flash-preview";

/// Default speech model.
pub const DEFAULT_TTS_MODEL: &str = "gemini-2.5-flash-preview-tts";

/// Default Generative Language API endpoint.
pub const DEFAULT_BASE_URL: &str = "https://generativelanguage.googleapis.com";

/// Credentials and model names for the AI content gateway.
#[derive(Clone, Serialize, Deserialize)]
pub struct GatewayConfig {
    pub api_key: String,
    pub text_model: String,
    pub tts_model: String,
    pub base_url: String,
    /// Prebuilt voice used for speech synthesis.
    pub voice: String,
}

impl std::fmt::Debug for GatewayConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GatewayConfig")
            .field("api_key", &"<redacted>")
            .field("text_model", &self.text_model)
            .field("tts_model", &self.tts_model)
            .field("base_url", &self.base_url)
            .field("voice", &self.voice)
            .finish()
    }
}

impl GatewayConfig {
    /// Config with default models for the given key.
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            text_model: DEFAULT_TEXT_MODEL.to_string(),
            tts_model: DEFAULT_TTS_MODEL.to_string(),
            base_url: DEFAULT_BASE_URL.to_string(),
            voice: "Kore".to_string(),
        }
    }

    /// Load from the process environment (after reading a `.env` file if one exists).
    ///
    /// The key comes from `GEMINI_API_KEY`, falling back to `API_KEY`.
    /// `GEMINI_TEXT_MODEL`, `GEMINI_TTS_MODEL` and `GEMINI_BASE_URL` override
    /// the defaults.
    pub fn from_env() -> Result<Self, ConfigError> {
        let _ = dotenvy::dotenv();

        let api_key = std::env::var("GEMINI_API_KEY")
            .or_else(|_| std::env::var("API_KEY"))
            .map_err(|_| ConfigError::MissingVar("GEMINI_API_KEY"))?;
        if api_key.trim().is_empty() {
            return Err(ConfigError::MissingVar("GEMINI_API_KEY"));
        }

        let mut config = Self::new(api_key);
        if let Ok(model) = std::env::var("GEMINI_TEXT_MODEL") {
            config.text_model = model;
        }
        if let Ok(model) = std::env::var("GEMINI_TTS_MODEL") {
            config.tts_model = model;
        }
        if let Ok(url) = std::env::var("GEMINI_BASE_URL") {
            config.base_url = url.trim_end_matches('/').to_string();
        }
        Ok(config)
    }

    #[must_use]
    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }
}
