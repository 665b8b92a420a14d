//! Wire types and the transport contract for bulk requests.
//!
//! A bulk request bundles several resource queries into one round trip. Each
//! sub-request is a [`BulkCall`]; the transport answers with a single
//! [`BulkResponse`] whose items echo back the call ids.
//!
//! Any type implementing [`BulkTransport`] can drive a
//! [`BulkAggregator`](crate::rest::BulkAggregator). The SDK ships
//! [`HttpClient`](crate::clients::HttpClient) as the reqwest-backed transport.

use std::future::Future;

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Map, Value};

use crate::clients::HttpError;

/// One sub-request of a bulk request.
///
/// `params` is omitted from the serialized form when absent, so transports
/// never see an empty-but-present parameter object.
///
/// # Example
///
/// ```rust
/// use shop_appstore::clients::BulkCall;
///
/// let call = BulkCall::new("orders", "orders", None);
/// let json = serde_json::to_value(&call).unwrap();
/// assert_eq!(json, serde_json::json!({"id": "orders", "name": "orders"}));
/// ```
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BulkCall {
    /// Caller-supplied key, echoed back in the matching response item.
    pub id: String,
    /// Resource collection name (e.g. `subscribers`).
    pub name: String,
    /// Query parameters for the call.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub params: Option<Map<String, Value>>,
}

impl BulkCall {
    /// Creates a new bulk call.
    #[must_use]
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        params: Option<Map<String, Value>>,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            params,
        }
    }
}

/// Structured result of a bulk request.
///
/// ```text
/// { headers: { Code: int },
///   data: { items: [ { id, code, body } ], error?: any } }
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BulkResponse {
    /// Response metadata.
    #[serde(default)]
    pub headers: BulkResponseHeaders,
    /// Response payload.
    #[serde(default)]
    pub data: BulkResponseData,
}

impl BulkResponse {
    /// Creates a response with the given overall status code and items.
    #[must_use]
    pub fn new(code: u16, items: Vec<BulkItem>) -> Self {
        Self {
            headers: BulkResponseHeaders { code: Some(code) },
            data: BulkResponseData { items, error: None },
        }
    }
}

/// Headers of a bulk response.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BulkResponseHeaders {
    /// Overall HTTP status code, when known.
    #[serde(rename = "Code", default, skip_serializing_if = "Option::is_none")]
    pub code: Option<u16>,
}

/// Payload of a bulk response.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BulkResponseData {
    /// One item per answered call.
    #[serde(default)]
    pub items: Vec<BulkItem>,
    /// Server-reported error for the whole batch.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<Value>,
}

/// The answer to a single [`BulkCall`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BulkItem {
    /// The id of the call this item answers.
    #[serde(deserialize_with = "deserialize_item_id")]
    pub id: String,
    /// Status code of the sub-request.
    #[serde(default)]
    pub code: Option<u16>,
    /// Body of the sub-request.
    #[serde(default)]
    pub body: Value,
}

impl BulkItem {
    /// Creates a new response item.
    #[must_use]
    pub fn new(id: impl Into<String>, code: u16, body: Value) -> Self {
        Self {
            id: id.into(),
            code: Some(code),
            body,
        }
    }
}

/// The platform echoes numeric ids back as JSON integers.
fn deserialize_item_id<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum RawId {
        Text(String),
        Number(i64),
    }

    Ok(match RawId::deserialize(deserializer)? {
        RawId::Text(s) => s,
        RawId::Number(n) => n.to_string(),
    })
}

/// A transport able to execute bulk requests.
///
/// Implementations own connection handling, timeouts and retries. Errors
/// carrying an HTTP response must use [`HttpError::Response`] or
/// [`HttpError::MaxRetries`] so callers can map them by status code.
pub trait BulkTransport: Send + Sync {
    /// Executes all `calls` in a single round trip.
    fn bulk_request(
        &self,
        calls: &[BulkCall],
    ) -> impl Future<Output = Result<BulkResponse, HttpError>> + Send;
}
