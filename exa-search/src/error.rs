//! # Error module
//!
//! Possible errors.

use reqwest::StatusCode;
use thiserror::Error;

/// Possible errors.
#[derive(Debug, Error)]
pub enum ExaError {
    /// No API key was given and `EXA_API_KEY` is not set.
    #[error("API key must be provided as an argument or via the EXA_API_KEY environment variable")]
    MissingApiKey,
    /// The API key cannot be sent as a header value.
    #[error("API key contains characters that are not allowed in an HTTP header")]
    InvalidApiKey,
    /// Content retrieval was asked for an empty list of ids.
    #[error("must provide at least one id")]
    EmptyIds,
    /// The service answered with a non-success status.
    #[error("request failed with status {}{}", .status.as_u16(), format_message(.message))]
    Request {
        /// HTTP status code of the response.
        status: StatusCode,
        /// The `error` field of the response body, if any.
        message: Option<String>,
    },
    /// A result is missing a content field that was requested.
    #[error("result `{id}` is missing requested field `{field}`")]
    MissingContent {
        /// Id of the offending result.
        id: String,
        /// Name of the missing field.
        field: &'static str,
    },
    /// Transport or decoding failure from the HTTP client.
    #[error(transparent)]
    Http(#[from] reqwest::Error),
}

fn format_message(message: &Option<String>) -> String {
    message
        .as_deref()
        .map_or_else(String::new, |message| format!(": {message}"))
}

/// Result type used throughout the crate.
pub type Result<T> = std::result::Result<T, ExaError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn request_error_message() {
        let error = ExaError::Request {
            status: StatusCode::UNAUTHORIZED,
            message: Some("bad key".to_owned()),
        };
        assert_eq!(error.to_string(), "request failed with status 401: bad key");
    }

    #[test]
    fn request_error_without_message() {
        let error = ExaError::Request {
            status: StatusCode::INTERNAL_SERVER_ERROR,
            message: None,
        };
        assert_eq!(error.to_string(), "request failed with status 500");
    }
}
