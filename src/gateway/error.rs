//! Gateway error taxonomy.
//!
//! Callers handle both variants the same way and substitute a static
//! fallback; the split only shows up in logs and tests.

/// Why a gateway request produced nothing usable.
#[derive(Debug, thiserror::Error)]
pub enum GatewayError {
    /// Network, service or credential failure.
    #[error("AI gateway unavailable: {0}")]
    Unavailable(String),
    /// The service answered but the payload was malformed.
    #[error("AI gateway returned a malformed response: {0}")]
    ParseFailure(String),
}

impl GatewayError {
    #[must_use]
    pub fn is_unavailable(&self) -> bool {
        matches!(self, GatewayError::Unavailable(_))
    }
}

impl From<reqwest::Error> for GatewayError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_decode() {
            GatewayError::ParseFailure(err.to_string())
        } else {
            GatewayError::Unavailable(err.to_string())
        }
    }
}

impl From<serde_json::Error> for GatewayError {
    fn from(err: serde_json::Error) -> Self {
        GatewayError::ParseFailure(err.to_string())
    }
}

impl From<base64::DecodeError> for GatewayError {
    fn from(err: base64::DecodeError) -> Self {
        GatewayError::ParseFailure(format!("audio payload: {err}"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_json_errors_are_parse_failures() {
        let err: GatewayError = serde_json::from_str::<Vec<u8>>("{").unwrap_err().into();
        assert!(matches!(err, GatewayError::ParseFailure(_)));
        assert!(!err.is_unavailable());
    }

    #[test]
    fn test_display() {
        let err = GatewayError::Unavailable("HTTP 503".into());
        assert_eq!(err.to_string(), "AI gateway unavailable: HTTP 503");
    }
}
