//! HTTP-specific error types for the Shop AppStore SDK.
//!
//! - [`HttpResponseError`]: Non-2xx HTTP responses from the API
//! - [`MaxHttpRetriesExceededError`]: When retry attempts are exhausted
//! - [`HttpError`]: Unified error type returned by every transport
//!
//! # Example
//!
//! ```rust,ignore
//! use shop_appstore::clients::{BulkTransport, HttpError};
//!
//! match client.bulk_request(&calls).await {
//!     Ok(response) => println!("Items: {}", response.data.items.len()),
//!     Err(HttpError::Response(e)) => println!("API error {}: {}", e.code, e.message),
//!     Err(HttpError::MaxRetries(e)) => println!("Retries exhausted after {} tries", e.tries),
//!     Err(HttpError::InvalidResponse { reason }) => println!("Bad payload: {reason}"),
//!     Err(HttpError::Network(e)) => println!("Network error: {e}"),
//! }
//! ```

use thiserror::Error;

/// Error returned when an HTTP request receives a non-successful response.
///
/// `message` holds the serialized `error` / `error_description` fields of the
/// response, `body` the full parsed response body.
///
/// # Example
///
/// ```rust
/// use shop_appstore::clients::HttpResponseError;
///
/// let error = HttpResponseError {
///     code: 404,
///     message: r#"{"error":"Not found"}"#.to_string(),
///     body: serde_json::json!({"error": "Not found"}),
///     error_reference: None,
/// };
///
/// assert_eq!(error.to_string(), r#"{"error":"Not found"}"#);
/// ```
#[derive(Debug, Error)]
#[error("{message}")]
pub struct HttpResponseError {
    /// The HTTP status code of the response.
    pub code: u16,
    /// Serialized error message in JSON format.
    pub message: String,
    /// The parsed response body.
    pub body: serde_json::Value,
    /// Reference ID for error reporting (from X-Request-Id header).
    pub error_reference: Option<String>,
}

/// Error returned when maximum retry attempts have been exhausted.
#[derive(Debug, Error)]
#[error("Exceeded maximum retry count of {tries}. Last message: {}", .last_response.message)]
pub struct MaxHttpRetriesExceededError {
    /// The number of tries that were attempted.
    pub tries: u32,
    /// The last non-successful response.
    pub last_response: HttpResponseError,
}

/// Unified error type for all transport errors.
///
/// Only [`HttpError::Response`] and [`HttpError::MaxRetries`] carry an
/// HTTP-level cause; see [`HttpError::response`].
#[derive(Debug, Error)]
pub enum HttpError {
    /// An HTTP response error (non-2xx status code).
    #[error(transparent)]
    Response(#[from] HttpResponseError),

    /// Maximum retry attempts exhausted.
    #[error(transparent)]
    MaxRetries(#[from] MaxHttpRetriesExceededError),

    /// A successful response whose body could not be interpreted.
    #[error("Invalid response from shop API: {reason}")]
    InvalidResponse {
        /// What was wrong with the payload.
        reason: String,
    },

    /// Network or connection error.
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),
}

impl HttpError {
    /// Returns the underlying HTTP response, if this error has one.
    #[must_use]
    pub const fn response(&self) -> Option<&HttpResponseError> {
        match self {
            Self::Response(e) => Some(e),
            Self::MaxRetries(e) => Some(&e.last_response),
            Self::InvalidResponse { .. } | Self::Network(_) => None,
        }
    }

    /// Returns the HTTP status code of the underlying response, if any.
    #[must_use]
    pub fn status(&self) -> Option<u16> {
        self.response().map(|r| r.code)
    }
}
