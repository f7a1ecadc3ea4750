//! Gemini-backed content gateway.
//!
//! Talks to the Generative Language REST API with `reqwest`:
//! `POST {base_url}/v1beta/models/{model}:generateContent?key=...`.
//! Every call is attempted exactly once.

use log::debug;
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};

use super::audio::{AudioClip, SPEECH_SAMPLE_RATE};
use super::error::GatewayError;
use super::ContentGateway;
use crate::alphabet::LetterRecord;
use crate::core::config::GatewayConfig;
use crate::games::quiz::RoundQuestion;

/// Gateway backed by Gemini models.
#[derive(Clone, Debug)]
pub struct GeminiGateway {
    client: reqwest::Client,
    config: GatewayConfig,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerateRequest {
    contents: Vec<Content>,
    #[serde(skip_serializing_if = "Option::is_none")]
    generation_config: Option<Value>,
}

#[derive(Serialize, Deserialize, Default)]
struct Content {
    #[serde(default)]
    parts: Vec<Part>,
}

#[derive(Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
struct Part {
    #[serde(skip_serializing_if = "Option::is_none")]
    text: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    inline_data: Option<InlineData>,
}

#[derive(Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct InlineData {
    #[serde(default)]
    mime_type: String,
    data: String,
}

#[derive(Deserialize)]
struct GenerateResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Deserialize)]
struct Candidate {
    #[serde(default)]
    content: Content,
}

impl GenerateResponse {
    /// Concatenated text of the first candidate.
    fn text(&self) -> Option<String> {
        let parts = &self.candidates.first()?.content.parts;
        let text: String = parts.iter().filter_map(|p| p.text.as_deref()).collect();
        (!text.trim().is_empty()).then_some(text)
    }

    /// First inline payload of the first candidate.
    fn inline_data(&self) -> Option<&InlineData> {
        self.candidates
            .first()?
            .content
            .parts
            .iter()
            .find_map(|p| p.inline_data.as_ref())
    }
}

/// Prompt for a shape-based mnemonic.
pub fn mnemonic_prompt(letter: &LetterRecord) -> String {
    format!(
        "You are a world-class Arabic teacher for 5-year-old children. \
         Generate a \"Memory Magic\" visual mnemonic for the Arabic letter \"{glyph}\" (called {name}). \
         Your mnemonic MUST be relevant to the SHAPE of the letter. \
         For example, 'Ba' (ب) looks like a boat with a dot below it, or 'Ta' (ت) looks like a smiley face with two eyes. \
         Use simple, fun, and encouraging language. \
         Keep it to exactly one short, memorable sentence.",
        glyph = letter.glyph,
        name = letter.name,
    )
}

/// Prompt for a batch of quiz questions.
pub fn quiz_prompt(letter_names: &[&str]) -> String {
    format!(
        "Generate {count} extremely simple quiz questions for children learning Arabic. \
         Focus on these letters: {letters}. \
         The 'question' field should be just the name of the letter in capital letters (e.g., \"ALIF\" or \"BA\"). \
         The 'options' should be 4 Arabic characters. \
         The 'correctAnswer' must be the character corresponding to the name in 'question'. \
         The 'letter' field should be the name of the letter for TTS purposes. \
         Format as JSON.",
        count = letter_names.len(),
        letters = letter_names.join(", "),
    )
}

fn quiz_schema() -> Value {
    json!({
        "type": "ARRAY",
        "items": {
            "type": "OBJECT",
            "properties": {
                "question": { "type": "STRING", "description": "Just the letter name, e.g. 'BA'" },
                "options": { "type": "ARRAY", "items": { "type": "STRING" } },
                "correctAnswer": { "type": "STRING" },
                "letter": { "type": "STRING" }
            },
            "required": ["question", "options", "correctAnswer", "letter"]
        }
    })
}

/// Parse the question array the model produced.
pub fn parse_questions(text: &str) -> Result<Vec<RoundQuestion>, GatewayError> {
    let trimmed = text
        .trim()
        .trim_start_matches("```json")
        .trim_start_matches("```")
        .trim_end_matches("```")
        .trim();
    Ok(serde_json::from_str(trimmed)?)
}

impl GeminiGateway {
    #[must_use]
    pub fn new(config: GatewayConfig) -> Self {
        Self {
            client: reqwest::Client::new(),
            config,
        }
    }

    /// Gateway configured from the environment.
    pub fn from_env() -> Result<Self, crate::core::ConfigError> {
        Ok(Self::new(GatewayConfig::from_env()?))
    }

    #[must_use]
    pub fn config(&self) -> &GatewayConfig {
        &self.config
    }

    fn endpoint(&self, model: &str) -> String {
        format!("{}/v1beta/models/{}:generateContent", self.config.base_url, model)
    }

    async fn generate(
        &self,
        model: &str,
        prompt: String,
        generation_config: Option<Value>,
    ) -> Result<GenerateResponse, GatewayError> {
        let request = GenerateRequest {
            contents: vec![Content {
                parts: vec![Part {
                    text: Some(prompt),
                    inline_data: None,
                }],
            }],
            generation_config,
        };

        debug!("gateway request to {}", model);
        let response = self
            .client
            .post(self.endpoint(model))
            .query(&[("key", self.config.api_key.as_str())])
            .json(&request)
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(GatewayError::Unavailable(format!("HTTP {}", response.status())));
        }

        let body = response.text().await?;
        Ok(serde_json::from_str(&body)?)
    }
}

impl ContentGateway for GeminiGateway {
    async fn mnemonic(&self, letter: &LetterRecord) -> Result<String, GatewayError> {
        let response = self
            .generate(&self.config.text_model, mnemonic_prompt(letter), None)
            .await?;
        response
            .text()
            .map(|t| t.trim().to_string())
            .ok_or_else(|| GatewayError::ParseFailure("empty mnemonic".into()))
    }

    async fn quiz_questions(&self, letter_names: &[&str]) -> Result<Vec<RoundQuestion>, GatewayError> {
        let generation_config = json!({
            "responseMimeType": "application/json",
            "responseSchema": quiz_schema(),
        });
        let response = self
            .generate(&self.config.text_model, quiz_prompt(letter_names), Some(generation_config))
            .await?;
        let text = response
            .text()
            .ok_or_else(|| GatewayError::ParseFailure("empty question batch".into()))?;
        parse_questions(&text)
    }

    async fn speech(&self, prompt: &str) -> Result<AudioClip, GatewayError> {
        let generation_config = json!({
            "responseModalities": ["AUDIO"],
            "speechConfig": {
                "voiceConfig": {
                    "prebuiltVoiceConfig": { "voiceName": self.config.voice }
                }
            }
        });
        let response = self
            .generate(&self.config.tts_model, prompt.to_string(), Some(generation_config))
            .await?;
        let inline = response
            .inline_data()
            .ok_or_else(|| GatewayError::ParseFailure("no audio in response".into()))?;
        debug!("speech payload {} ({} bytes base64)", inline.mime_type, inline.data.len());
        AudioClip::from_base64_pcm(&inline.data, SPEECH_SAMPLE_RATE, 1)
    }
}
