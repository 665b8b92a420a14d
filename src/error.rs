//! Error types for the Shop AppStore SDK.
//!
//! This module contains error types used throughout the SDK for configuration
//! and validation errors.
//!
//! # Error Handling
//!
//! All configuration constructors return `Result<T, ConfigError>` to enable
//! fail-fast validation. Error messages are designed to be clear and actionable.
//!
//! # Example
//!
//! ```rust
//! use shop_appstore::{AccessToken, ConfigError};
//!
//! let result = AccessToken::new("");
//! assert!(matches!(result, Err(ConfigError::EmptyAccessToken)));
//! ```

use thiserror::Error;

/// Errors that can occur during SDK configuration.
///
/// Each variant provides a clear, actionable error message.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// Access token cannot be empty.
    #[error("Access token cannot be empty. Please provide a valid shop access token.")]
    EmptyAccessToken,

    /// Shop URL is invalid.
    #[error("Invalid shop URL '{url}'. Please provide a valid URL with scheme (e.g., 'https://example.shoparena.pl').")]
    InvalidShopUrl {
        /// The invalid URL that was provided.
        url: String,
    },

    /// Retry count is out of range.
    #[error("Invalid retry count {tries}. At least one try is required.")]
    InvalidTries {
        /// The rejected number of tries.
        tries: u32,
    },

    /// A required field is missing.
    #[error("Missing required field: '{field}'. This field must be set before building the configuration.")]
    MissingRequiredField {
        /// The name of the missing field.
        field: &'static str,
    },
}
