//! Client and configuration errors.

use thiserror::Error;

/// Errors that can occur when calling the Display service.
#[derive(Debug, Error)]
pub enum KioskError {
    /// HTTP request failed (network error, timeout, etc.).
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// Failed to deserialize the response body.
    #[error("JSON deserialization failed: {0}")]
    Json(#[from] serde_json::Error),

    /// The service returned a non-2xx status code.
    #[error("API error (status {status}): {body}")]
    ApiError {
        /// HTTP status code from the response.
        status: u16,
        /// Response body text.
        body: String,
    },

    /// The client configuration is invalid.
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// A callable's future was cancelled before it resolved.
    #[error("call to {rpc} was cancelled")]
    Cancelled {
        /// RPC name of the cancelled call.
        rpc: &'static str,
    },

    /// The task driving a callable's future panicked.
    #[error("call to {rpc} failed: {message}")]
    TaskFailed {
        rpc: &'static str,
        message: String,
    },
}

impl KioskError {
    /// Returns the HTTP status code if the service answered with an error.
    pub fn status_code(&self) -> Option<u16> {
        match self {
            Self::ApiError { status, .. } => Some(*status),
            Self::Http(e) => e.status().map(|s| s.as_u16()),
            _ => None,
        }
    }
}

/// Errors in client configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Base URL could not be parsed.
    #[error("Invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    /// Base URL uses a scheme other than http or https.
    #[error("Unsupported URL scheme '{0}'")]
    UnsupportedScheme(String),

    /// A port value is not a valid u16.
    #[error("Invalid port '{value}' in {var}")]
    InvalidPort { var: &'static str, value: String },

    /// A timeout value is not a whole number of seconds.
    #[error("Invalid timeout '{value}' in {var}")]
    InvalidTimeout { var: &'static str, value: String },

    /// A boolean flag has an unrecognized value.
    #[error("Invalid flag '{value}' in {var} (expected true/false/1/0)")]
    InvalidFlag { var: &'static str, value: String },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn api_error_exposes_status() {
        let err = KioskError::ApiError {
            status: 404,
            body: "kiosk not found".to_string(),
        };
        assert_eq!(err.status_code(), Some(404));
        assert_eq!(err.to_string(), "API error (status 404): kiosk not found");
    }

    #[test]
    fn cancelled_has_no_status() {
        let err = KioskError::Cancelled { rpc: "GetKiosk" };
        assert_eq!(err.status_code(), None);
        assert_eq!(err.to_string(), "call to GetKiosk was cancelled");
    }

    #[test]
    fn config_errors_are_transparent() {
        let err: KioskError = ConfigError::InvalidPort {
            var: "KIOSK_PORT",
            value: "http".to_string(),
        }
        .into();
        assert_eq!(err.to_string(), "Invalid port 'http' in KIOSK_PORT");
    }
}
