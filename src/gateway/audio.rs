//! Decoded speech clips.
//!
//! The speech service returns raw PCM (signed 16-bit little-endian, mono,
//! 24 kHz) wrapped in base64. `AudioClip` holds the decoded samples; hosts
//! hand them to whatever audio device they have.

use std::time::Duration;

use base64::Engine;

use super::error::GatewayError;

/// Sample rate of synthesized speech.
pub const SPEECH_SAMPLE_RATE: u32 = 24_000;

/// Mono PCM audio.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AudioClip {
    pub sample_rate: u32,
    pub channels: u16,
    /// Interleaved samples.
    pub samples: Vec<i16>,
}

impl AudioClip {
    /// Decode a base64 payload of 16-bit little-endian PCM.
    pub fn from_base64_pcm(data: &str, sample_rate: u32, channels: u16) -> Result<Self, GatewayError> {
        let bytes = base64::engine::general_purpose::STANDARD.decode(data.trim())?;
        Self::from_pcm_bytes(&bytes, sample_rate, channels)
    }

    /// Build a clip from raw 16-bit little-endian PCM bytes.
    pub fn from_pcm_bytes(bytes: &[u8], sample_rate: u32, channels: u16) -> Result<Self, GatewayError> {
        if channels == 0 {
            return Err(GatewayError::ParseFailure("audio payload: zero channels".into()));
        }
        if bytes.len() % 2 != 0 {
            return Err(GatewayError::ParseFailure(format!(
                "audio payload: odd byte count {}",
                bytes.len()
            )));
        }

        let samples = bytes
            .chunks_exact(2)
            .map(|pair| i16::from_le_bytes([pair[0], pair[1]]))
            .collect();

        Ok(Self {
            sample_rate,
            channels,
            samples,
        })
    }

    /// Frames per channel.
    #[must_use]
    pub fn frame_count(&self) -> usize {
        self.samples.len() / self.channels as usize
    }

    #[must_use]
    pub fn duration(&self) -> Duration {
        Duration::from_secs_f64(self.frame_count() as f64 / f64::from(self.sample_rate))
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_samples() {
        // 1, -1, 256 as little-endian i16
        let bytes = [0x01, 0x00, 0xFF, 0xFF, 0x00, 0x01];
        let encoded = base64::engine::general_purpose::STANDARD.encode(bytes);

        let clip = AudioClip::from_base64_pcm(&encoded, SPEECH_SAMPLE_RATE, 1).unwrap();
        assert_eq!(clip.samples, vec![1, -1, 256]);
        assert_eq!(clip.frame_count(), 3);
    }

    #[test]
    fn test_duration() {
        let clip = AudioClip::from_pcm_bytes(&vec![0u8; 48_000], SPEECH_SAMPLE_RATE, 1).unwrap();
        assert_eq!(clip.duration(), Duration::from_secs(1));
    }

    #[test]
    fn test_rejects_odd_length() {
        let err = AudioClip::from_pcm_bytes(&[1, 2, 3], SPEECH_SAMPLE_RATE, 1).unwrap_err();
        assert!(matches!(err, GatewayError::ParseFailure(_)));
    }

    #[test]
    fn test_rejects_bad_base64() {
        let err = AudioClip::from_base64_pcm("not base64!!", SPEECH_SAMPLE_RATE, 1).unwrap_err();
        assert!(matches!(err, GatewayError::ParseFailure(_)));
    }
}
