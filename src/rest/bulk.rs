//! Bulk retrieval of several resources in a single round trip.
//!
//! [`BulkAggregator`] packs N keyed resource queries into one bulk request
//! and fans the single response back out into N [`ResourceList`]s keyed by
//! the id each response item echoes back.
//!
//! The batch is all-or-nothing: if the overall status or any item status is
//! outside 200–299, the whole call fails with a
//! [`ResourceErrorKind::Resource`] error and no partial result is returned.
//!
//! # Example
//!
//! ```rust,ignore
//! use shop_appstore::rest::{resources, BulkAggregator};
//! use shop_appstore::HttpClient;
//!
//! let aggregator = BulkAggregator::new(HttpClient::new(&config));
//!
//! let lists = aggregator
//!     .get([
//!         ("subscribers", resources::subscribers().limit(10)?),
//!         ("webhooks", resources::webhooks()),
//!     ])
//!     .await?;
//!
//! for subscriber in &lists["subscribers"] {
//!     println!("{subscriber}");
//! }
//! ```

use std::borrow::Borrow;
use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

use crate::clients::{BulkCall, BulkResponse, BulkTransport, HttpError};
use crate::rest::{BulkError, Resource, ResourceError, ResourceErrorKind, ResourceList};

/// Receives diagnostics about failures that could not be mapped to a
/// specific [`ResourceErrorKind`].
pub trait FailureLogger: Send + Sync {
    /// Records a stringified transport failure.
    fn log_failure(&self, message: &str);
}

/// A [`FailureLogger`] that discards everything.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopLogger;

impl FailureLogger for NoopLogger {
    fn log_failure(&self, _message: &str) {}
}

impl BulkCall {
    /// Creates the call for one keyed resource.
    ///
    /// Criteria become `params`; empty criteria leave `params` unset.
    #[must_use]
    pub fn from_resource(id: impl Into<String>, resource: &Resource) -> Self {
        let params = (!resource.criteria().is_empty()).then(|| resource.criteria().clone());
        Self::new(id, resource.name(), params)
    }
}

/// Executes several resource queries as one bulk request.
///
/// The aggregator holds only its transport and an optional logger override,
/// so one instance can be reused and shared between tasks when the
/// transport allows it.
pub struct BulkAggregator<T> {
    transport: T,
    logger: Option<Arc<dyn FailureLogger>>,
}

impl<T: BulkTransport> BulkAggregator<T> {
    /// Creates an aggregator that logs unmapped failures through `tracing`.
    #[must_use]
    pub const fn new(transport: T) -> Self {
        Self {
            transport,
            logger: None,
        }
    }

    /// Routes unmapped failures to `logger` instead of `tracing`.
    ///
    /// Pass [`NoopLogger`] to silence them.
    #[must_use]
    pub fn with_logger(mut self, logger: Arc<dyn FailureLogger>) -> Self {
        self.logger = Some(logger);
        self
    }

    /// Returns the underlying transport.
    #[must_use]
    pub const fn transport(&self) -> &T {
        &self.transport
    }

    /// Fetches every resource in one bulk request.
    ///
    /// Each `(key, resource)` pair becomes one call whose id is `key`. The
    /// result is keyed by the ids echoed back in the response. An empty
    /// input still issues a request.
    ///
    /// # Errors
    ///
    /// - [`BulkError::Resource`] with kind [`ResourceErrorKind::Resource`] if the
    ///   overall status or any item status is outside 200–299
    /// - [`BulkError::Resource`] with a status-derived kind if the transport
    ///   failed with an HTTP response
    /// - [`BulkError::Transport`] with the original error if the transport
    ///   failed without an HTTP response
    pub async fn get<K, R, I>(
        &self,
        resources: I,
    ) -> Result<HashMap<String, ResourceList>, BulkError>
    where
        I: IntoIterator<Item = (K, R)>,
        K: Into<String>,
        R: Borrow<Resource>,
    {
        let calls = build_calls(resources);
        tracing::debug!(calls = calls.len(), "Dispatching bulk request");

        match self.transport.bulk_request(&calls).await {
            Ok(response) => translate_response(response).map_err(BulkError::from),
            Err(error) => Err(self.dispatch_error(error)),
        }
    }

    /// Maps a transport failure to the error returned to the caller.
    fn dispatch_error(&self, error: HttpError) -> BulkError {
        let mapped = match error.response() {
            None => return BulkError::Transport(error),
            Some(response) => {
                ResourceError::from_http(ResourceErrorKind::from_status(response.code), response)
            }
        };

        if mapped.kind == ResourceErrorKind::Communication {
            let cause = error.to_string();
            match &self.logger {
                Some(logger) => logger.log_failure(&cause),
                None => tracing::error!(
                    status = ?mapped.code,
                    error = %cause,
                    "Unmapped shop API failure"
                ),
            }
        }

        BulkError::Resource(mapped.with_source(error))
    }
}

impl<T: fmt::Debug> fmt::Debug for BulkAggregator<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BulkAggregator")
            .field("transport", &self.transport)
            .field("custom_logger", &self.logger.is_some())
            .finish()
    }
}

/// Builds one call per keyed resource, preserving input order.
pub fn build_calls<K, R, I>(resources: I) -> Vec<BulkCall>
where
    I: IntoIterator<Item = (K, R)>,
    K: Into<String>,
    R: Borrow<Resource>,
{
    resources
        .into_iter()
        .map(|(key, resource)| BulkCall::from_resource(key, resource.borrow()))
        .collect()
}

const fn is_success(code: Option<u16>) -> bool {
    matches!(code, Some(200..=299))
}

/// Splits a bulk response into per-id resource lists.
///
/// # Errors
///
/// Returns a [`ResourceErrorKind::Resource`] error carrying `data.error` (or
/// the whole response when absent) and the overall code if the overall code
/// or any item code is missing or outside 200–299.
pub fn translate_response(
    response: BulkResponse,
) -> Result<HashMap<String, ResourceList>, ResourceError> {
    let code = response.headers.code;
    let failed = !is_success(code)
        || response
            .data
            .items
            .iter()
            .any(|item| !is_success(item.code));

    if failed {
        let payload = response
            .data
            .error
            .clone()
            .unwrap_or_else(|| serde_json::to_value(&response).unwrap_or_default());
        tracing::debug!(status = ?code, "Bulk response reported a failure");
        return Err(ResourceError::resource(payload, code));
    }

    Ok(response
        .data
        .items
        .into_iter()
        .map(|item| {
            let list = ResourceList::from_body(&item.body);
            (item.id, list)
        })
        .collect())
}
