//! Transport layer for shop API communication.
//!
//! # Overview
//!
//! - [`BulkTransport`]: The contract every bulk transport implements
//! - [`BulkCall`] / [`BulkResponse`]: Wire types of the bulk endpoint
//! - [`HttpClient`]: The reqwest-backed transport
//! - [`HttpError`]: Unified transport error type
//!
//! # Retry Behavior
//!
//! [`HttpClient`] retries transient failures:
//!
//! - **429 (Rate Limited)**: Retries using `Retry-After` header value, or 1 second if not present
//! - **500 (Server Error)**: Retries with fixed 1-second delay
//! - **Other errors (4xx)**: Returns immediately without retry
//!
//! The default `tries` is 1, meaning no automatic retries. Configure via
//! [`ShopConfigBuilder::tries`](crate::ShopConfigBuilder::tries).

mod bulk;
mod errors;
mod http_client;

pub use bulk::{
    BulkCall, BulkItem, BulkResponse, BulkResponseData, BulkResponseHeaders, BulkTransport,
};
pub use errors::{HttpError, HttpResponseError, MaxHttpRetriesExceededError};
pub use http_client::{HttpClient, API_PATH, RETRY_WAIT_TIME, SDK_VERSION};
