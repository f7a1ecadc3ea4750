//! AI content gateway.
//!
//! The only external boundary of the arena. Three request types:
//!
//! - **Mnemonic**: one shape-based sentence for a letter
//! - **Quiz questions**: a batch of `RoundQuestion`s for some letter names
//! - **Speech**: synthesized audio for an arbitrary prompt
//!
//! Every request is attempted once. Callers never block game progress on
//! the gateway: on any `GatewayError` they substitute a static fallback.

pub mod error;
pub mod audio;
pub mod slot;
pub mod gemini;

pub use error::GatewayError;
pub use audio::{AudioClip, SPEECH_SAMPLE_RATE};
pub use slot::{RequestSlot, RequestState};
pub use gemini::GeminiGateway;

use crate::alphabet::LetterRecord;
use crate::games::quiz::RoundQuestion;

/// Shown in place of a mnemonic when the gateway fails.
pub const MNEMONIC_FALLBACK: &str = "Oops! AI had a nap. Try again.";

/// Generative-AI content provider.
///
/// Implementations perform exactly one attempt per call.
#[allow(async_fn_in_trait)]
pub trait ContentGateway {
    /// One short sentence tying the letter's shape to something familiar.
    async fn mnemonic(&self, letter: &LetterRecord) -> Result<String, GatewayError>;

    /// Quiz questions focused on the given letter names.
    ///
    /// Records are returned as parsed; callers validate them.
    async fn quiz_questions(&self, letter_names: &[&str]) -> Result<Vec<RoundQuestion>, GatewayError>;

    /// Spoken audio for `prompt`.
    async fn speech(&self, prompt: &str) -> Result<AudioClip, GatewayError>;
}

/// Gateway for hosts without credentials. Every request fails as unavailable,
/// so every caller takes its static fallback.
#[derive(Clone, Copy, Debug, Default)]
pub struct OfflineGateway;

impl ContentGateway for OfflineGateway {
    async fn mnemonic(&self, _letter: &LetterRecord) -> Result<String, GatewayError> {
        Err(GatewayError::Unavailable("offline".into()))
    }

    async fn quiz_questions(&self, _letter_names: &[&str]) -> Result<Vec<RoundQuestion>, GatewayError> {
        Err(GatewayError::Unavailable("offline".into()))
    }

    async fn speech(&self, _prompt: &str) -> Result<AudioClip, GatewayError> {
        Err(GatewayError::Unavailable("offline".into()))
    }
}

/// Either a live Gemini gateway or the offline stand-in, picked at startup.
#[derive(Clone, Debug)]
pub enum AnyGateway {
    Gemini(GeminiGateway),
    Offline(OfflineGateway),
}

impl AnyGateway {
    /// Gemini when `GEMINI_API_KEY` is configured, offline otherwise.
    #[must_use]
    pub fn from_env() -> Self {
        match GeminiGateway::from_env() {
            Ok(gateway) => AnyGateway::Gemini(gateway),
            Err(err) => {
                log::warn!("AI gateway disabled: {}", err);
                AnyGateway::Offline(OfflineGateway)
            }
        }
    }

    #[must_use]
    pub fn is_online(&self) -> bool {
        matches!(self, AnyGateway::Gemini(_))
    }
}

impl ContentGateway for AnyGateway {
    async fn mnemonic(&self, letter: &LetterRecord) -> Result<String, GatewayError> {
        match self {
            AnyGateway::Gemini(g) => g.mnemonic(letter).await,
            AnyGateway::Offline(g) => g.mnemonic(letter).await,
        }
    }

    async fn quiz_questions(&self, letter_names: &[&str]) -> Result<Vec<RoundQuestion>, GatewayError> {
        match self {
            AnyGateway::Gemini(g) => g.quiz_questions(letter_names).await,
            AnyGateway::Offline(g) => g.quiz_questions(letter_names).await,
        }
    }

    async fn speech(&self, prompt: &str) -> Result<AudioClip, GatewayError> {
        match self {
            AnyGateway::Gemini(g) => g.speech(prompt).await,
            AnyGateway::Offline(g) => g.speech(prompt).await,
        }
    }
}
