//! Error types for pokedex-core
//!
//! This module defines the error taxonomy for the whole crate.
//! All public APIs return `Result<T, Error>` where Error is defined here.

use thiserror::Error;

/// The main error type for pokedex-core
#[derive(Error, Debug)]
pub enum Error {
    // ============================================================================
    // Transport Errors
    // ============================================================================
    #[error("transport error: {message}")]
    Transport { message: String },

    #[error("request timeout after {timeout_ms}ms")]
    Timeout { timeout_ms: u64 },

    // ============================================================================
    // HTTP Errors
    // ============================================================================
    #[error("HTTP {status}: {body}")]
    HttpStatus { status: u16, body: String },

    #[error("invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    // ============================================================================
    // Decoding Errors
    // ============================================================================
    #[error("failed to decode response: {message}")]
    Decode { message: String },

    // ============================================================================
    // Configuration Errors
    // ============================================================================
    #[error("configuration error: {message}")]
    Config { message: String },
}

impl Error {
    /// Create a transport error
    pub fn transport(message: impl Into<String>) -> Self {
        Self::Transport {
            message: message.into(),
        }
    }

    /// Create an HTTP status error
    pub fn http_status(status: u16, body: impl Into<String>) -> Self {
        Self::HttpStatus {
            status,
            body: body.into(),
        }
    }

    /// Create a decode error
    pub fn decode(message: impl Into<String>) -> Self {
        Self::Decode {
            message: message.into(),
        }
    }

    /// Create a config error
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config {
            message: message.into(),
        }
    }

    /// The HTTP status code carried by this error, if any
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::HttpStatus { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// Check if this error is transient and worth retrying by the caller.
    ///
    /// The crate itself never retries; this is a hint for callers that do.
    pub fn is_transient(&self) -> bool {
        match self {
            Error::Transport { .. } | Error::Timeout { .. } => true,
            Error::HttpStatus { status, .. } => is_transient_status(*status),
            _ => false,
        }
    }
}

/// Check if an HTTP status code indicates a transient failure
fn is_transient_status(status: u16) -> bool {
    matches!(status, 429 | 500 | 502 | 503 | 504)
}

impl From<reqwest::Error> for Error {
    fn from(err: reqwest::Error) -> Self {
        // Non-2xx statuses are classified by the HTTP layer before reaching
        // this conversion, so anything left is transport-level.
        if err.is_timeout() {
            return Self::Timeout { timeout_ms: 0 };
        }
        if err.is_decode() {
            return Self::Decode {
                message: err.to_string(),
            };
        }
        Self::Transport {
            message: err.to_string(),
        }
    }
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Self::Decode {
            message: err.to_string(),
        }
    }
}

/// Result type alias for pokedex-core
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = Error::transport("connection refused");
        assert_eq!(err.to_string(), "transport error: connection refused");

        let err = Error::http_status(404, "Not found");
        assert_eq!(err.to_string(), "HTTP 404: Not found");

        let err = Error::decode("missing field `id`");
        assert_eq!(
            err.to_string(),
            "failed to decode response: missing field `id`"
        );
    }

    #[test]
    fn test_status_accessor() {
        assert_eq!(Error::http_status(500, "").status(), Some(500));
        assert_eq!(Error::transport("down").status(), None);
    }

    #[test]
    fn test_is_transient() {
        assert!(Error::transport("reset").is_transient());
        assert!(Error::Timeout { timeout_ms: 1000 }.is_transient());
        assert!(Error::http_status(429, "").is_transient());
        assert!(Error::http_status(500, "").is_transient());
        assert!(Error::http_status(503, "").is_transient());

        assert!(!Error::http_status(400, "").is_transient());
        assert!(!Error::http_status(404, "").is_transient());
        assert!(!Error::decode("bad json").is_transient());
        assert!(!Error::config("bad base url").is_transient());
    }

    #[test]
    fn test_from_serde_json() {
        let json_err = serde_json::from_str::<u32>("not a number").unwrap_err();
        let err: Error = json_err.into();
        assert!(matches!(err, Error::Decode { .. }));
    }
}
