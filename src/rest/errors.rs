//! Resource-level error types.
//!
//! Failures of resource operations surface as a single tagged
//! [`ResourceError`] whose [`ResourceErrorKind`] is derived from the HTTP
//! status code of the underlying response:
//!
//! - **400**: [`ResourceErrorKind::Validation`]
//! - **401**: [`ResourceErrorKind::Permissions`]
//! - **404**: [`ResourceErrorKind::NotFound`]
//! - **405**: [`ResourceErrorKind::MethodUnsupported`]
//! - **409**: [`ResourceErrorKind::ObjectLocked`]
//! - **Other**: [`ResourceErrorKind::Communication`]
//!
//! A bulk response reporting a failure in its own payload yields
//! [`ResourceErrorKind::Resource`]. Transport failures without an HTTP
//! response are passed through untouched as [`BulkError::Transport`].
//!
//! # Example
//!
//! ```rust,ignore
//! use shop_appstore::rest::{BulkError, ResourceErrorKind};
//!
//! match aggregator.get(resources).await {
//!     Ok(lists) => println!("{} lists", lists.len()),
//!     Err(BulkError::Resource(e)) if e.kind == ResourceErrorKind::NotFound => {
//!         println!("Missing: {}", e.message);
//!     }
//!     Err(e) => println!("Other error: {e}"),
//! }
//! ```

use std::fmt;

use serde_json::Value;
use thiserror::Error;

use crate::clients::{HttpError, HttpResponseError};

/// Classification of a [`ResourceError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ResourceErrorKind {
    /// The request was rejected as invalid (HTTP 400).
    Validation,
    /// The token lacks the required permissions (HTTP 401).
    Permissions,
    /// The resource does not exist (HTTP 404).
    NotFound,
    /// The resource does not support the method (HTTP 405).
    MethodUnsupported,
    /// The object is locked by another operation (HTTP 409).
    ObjectLocked,
    /// Any other HTTP failure.
    Communication,
    /// The bulk payload reported a failure for the batch or one of its items.
    Resource,
}

impl ResourceErrorKind {
    /// Maps an HTTP status code to an error kind.
    ///
    /// # Example
    ///
    /// ```rust
    /// use shop_appstore::rest::ResourceErrorKind;
    ///
    /// assert_eq!(ResourceErrorKind::from_status(404), ResourceErrorKind::NotFound);
    /// assert_eq!(ResourceErrorKind::from_status(503), ResourceErrorKind::Communication);
    /// ```
    #[must_use]
    pub const fn from_status(code: u16) -> Self {
        match code {
            400 => Self::Validation,
            401 => Self::Permissions,
            404 => Self::NotFound,
            405 => Self::MethodUnsupported,
            409 => Self::ObjectLocked,
            _ => Self::Communication,
        }
    }
}

impl fmt::Display for ResourceErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Validation => "Validation",
            Self::Permissions => "Permissions",
            Self::NotFound => "Not found",
            Self::MethodUnsupported => "Method unsupported",
            Self::ObjectLocked => "Object locked",
            Self::Communication => "Communication",
            Self::Resource => "Resource",
        };
        f.write_str(name)
    }
}

/// Error raised by resource operations.
#[derive(Debug, Error)]
#[error("{kind} error: {message}")]
pub struct ResourceError {
    /// What went wrong.
    pub kind: ResourceErrorKind,
    /// The status code reported for the failure, when known.
    pub code: Option<u16>,
    /// The raw error payload (HTTP body or bulk error data).
    pub body: Value,
    /// Human-readable form of `body`.
    pub message: String,
    /// The transport error this was mapped from.
    pub source: Option<HttpError>,
}

impl ResourceError {
    /// Builds an error from an HTTP-level failure, chaining the original error.
    pub(crate) fn from_http(kind: ResourceErrorKind, response: &HttpResponseError) -> Self {
        Self {
            kind,
            code: Some(response.code),
            body: response.body.clone(),
            message: response.message.clone(),
            source: None,
        }
    }

    /// Builds a [`ResourceErrorKind::Resource`] error from a bulk payload.
    #[must_use]
    pub fn resource(payload: Value, code: Option<u16>) -> Self {
        let message = match &payload {
            Value::String(s) => s.clone(),
            other => other.to_string(),
        };
        Self {
            kind: ResourceErrorKind::Resource,
            code,
            body: payload,
            message,
            source: None,
        }
    }

    #[must_use]
    pub(crate) fn with_source(mut self, source: HttpError) -> Self {
        self.source = Some(source);
        self
    }
}

/// Error returned by [`BulkAggregator::get`](crate::rest::BulkAggregator::get).
#[derive(Debug, Error)]
pub enum BulkError {
    /// A mapped resource failure.
    #[error(transparent)]
    Resource(#[from] ResourceError),

    /// A transport failure without an HTTP response, returned unchanged.
    #[error(transparent)]
    Transport(HttpError),
}

impl BulkError {
    /// Returns the resource error kind, or `None` for pass-through transport errors.
    #[must_use]
    pub const fn kind(&self) -> Option<ResourceErrorKind> {
        match self {
            Self::Resource(e) => Some(e.kind),
            Self::Transport(_) => None,
        }
    }
}

/// Error raised when building query criteria with out-of-range values.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CriteriaError {
    /// Pages are numbered from 1.
    #[error("Invalid page {page}. Pages are numbered from 1.")]
    InvalidPage {
        /// The rejected page number.
        page: u64,
    },

    /// The API returns at most 50 rows per page.
    #[error("Invalid limit {limit}. Expected a value between 1 and {max}.", max = crate::rest::MAX_LIMIT)]
    InvalidLimit {
        /// The rejected limit.
        limit: u64,
    },
}
