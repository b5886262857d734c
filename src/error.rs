//! Error types for the Prosper API client.
//!
//! A single [`Error`] enum covers transport failures, configuration and
//! credential problems, and the typed-decoding failures raised while
//! materializing API responses into records.

use serde_json::Value;
use thiserror::Error;

/// A specialized `Result` type for Prosper operations.
pub type Result<T> = std::result::Result<T, Error>;

/// The main error type for all Prosper API operations.
#[derive(Error, Debug)]
pub enum Error {
    /// HTTP request failed
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// The payload was not valid JSON
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// A field's raw value does not match its declared wire format
    #[error("Invalid {expected} value {value:?} for field '{field}'")]
    Format {
        /// Name of the field being converted
        field: String,
        /// The raw wire value
        value: String,
        /// Description of the expected format
        expected: &'static str,
    },

    /// A materialized value could not be converted into the requested type
    #[error("Decode error: {0}")]
    Decode(String),

    /// A required credential is neither configured nor in the credential store
    #[error("Missing credential '{field}'; set it in the config file or the credential store")]
    MissingCredentials {
        /// The config key of the missing credential
        field: &'static str,
    },

    /// Authentication failed (grant rejected, or no token available)
    #[error("Authentication failed: {0}")]
    Authentication(String),

    /// API returned an error response
    #[error("API error: status={status}, message={message}")]
    Api {
        /// HTTP status code
        status: u16,
        /// Human-readable error message
        message: String,
        /// Raw response body for debugging
        body: Value,
    },

    /// Rate limited by the API
    #[error("Rate limited; retry after {retry_after_secs} seconds")]
    RateLimited {
        /// Number of seconds to wait before retrying
        retry_after_secs: u64,
    },

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Filesystem error (token cache, config file)
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// The platform credential store could not be queried
    #[error("Credential store error: {0}")]
    SecretStore(String),

    /// URL parsing error
    #[error("URL parse error: {0}")]
    UrlParse(#[from] url::ParseError),

    /// Invalid input provided to a function
    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

impl Error {
    /// Returns `true` if this error is potentially transient and the
    /// operation could be retried.
    ///
    /// # Example
    ///
    /// ```
    /// use prosper_rs::Error;
    ///
    /// fn handle_error(err: Error) {
    ///     if err.is_retryable() {
    ///         println!("Retrying operation...");
    ///     }
    /// }
    /// ```
    pub fn is_retryable(&self) -> bool {
        match self {
            Error::Http(_) | Error::RateLimited { .. } => true,
            Error::Api { status, .. } => *status >= 500,
            _ => false,
        }
    }

    /// Returns `true` if this is an authentication-related error.
    pub fn is_auth_error(&self) -> bool {
        match self {
            Error::Authentication(_) | Error::MissingCredentials { .. } => true,
            Error::Api { status, .. } => *status == 401 || *status == 403,
            _ => false,
        }
    }

    /// Returns `true` if this error indicates a client-side issue
    /// (invalid input, bad configuration, rejected request).
    pub fn is_client_error(&self) -> bool {
        match self {
            Error::Api { status, .. } => *status >= 400 && *status < 500,
            Error::InvalidInput(_) | Error::Config(_) | Error::MissingCredentials { .. } => true,
            _ => false,
        }
    }

    /// Returns `true` if this error indicates a server-side issue.
    pub fn is_server_error(&self) -> bool {
        match self {
            Error::Api { status, .. } => *status >= 500,
            _ => false,
        }
    }

    /// Create an API error from a response body.
    ///
    /// Prosper reports failures either as `{"message": ...}` or as an
    /// OAuth-style `{"error": ..., "error_description": ...}` object.
    pub(crate) fn from_api_response(status: u16, body: Value) -> Self {
        let message = body
            .get("message")
            .or_else(|| body.get("error_description"))
            .or_else(|| body.get("error"))
            .and_then(|m| m.as_str())
            .unwrap_or("Unknown API error")
            .to_string();

        Error::Api {
            status,
            message,
            body,
        }
    }

    pub(crate) fn format(field: &str, value: impl Into<String>, expected: &'static str) -> Self {
        Error::Format {
            field: field.to_string(),
            value: value.into(),
            expected,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_retryable() {
        assert!(Error::RateLimited { retry_after_secs: 30 }.is_retryable());
        assert!(Error::from_api_response(503, Value::Null).is_retryable());
        assert!(!Error::InvalidInput("bad".into()).is_retryable());
        assert!(!Error::format("listing_start_date", "yesterday", "date").is_retryable());
    }

    #[test]
    fn test_error_auth() {
        assert!(Error::Authentication("failed".into()).is_auth_error());
        assert!(Error::MissingCredentials { field: "credentials.password" }.is_auth_error());
        assert!(Error::from_api_response(401, Value::Null).is_auth_error());
        assert!(!Error::Decode("nope".into()).is_auth_error());
    }

    #[test]
    fn test_from_api_response() {
        let body = serde_json::json!({
            "code": "ORD0019",
            "message": "Listing is not biddable"
        });

        match Error::from_api_response(400, body) {
            Error::Api {
                status, message, ..
            } => {
                assert_eq!(status, 400);
                assert_eq!(message, "Listing is not biddable");
            }
            other => panic!("Expected Api error, got {other:?}"),
        }
    }

    #[test]
    fn test_from_oauth_error_response() {
        let body = serde_json::json!({
            "error": "invalid_grant",
            "error_description": "Bad credentials"
        });

        let err = Error::from_api_response(400, body);
        assert!(err.is_client_error());
        assert!(err.to_string().contains("Bad credentials"));
    }

    #[test]
    fn test_format_error_message() {
        let err = Error::format("origination_date", "19-08-2008", "date (YYYY-MM-DD)");
        assert_eq!(
            err.to_string(),
            "Invalid date (YYYY-MM-DD) value \"19-08-2008\" for field 'origination_date'"
        );
    }
}
