//! HTTP client for shop API communication.
//!
//! This module provides the [`HttpClient`] type, the reqwest-backed
//! [`BulkTransport`] with automatic retry handling.

use std::collections::HashMap;
use std::time::Duration;

use serde::Serialize;
use serde_json::{Map, Value};

use crate::clients::bulk::{
    BulkCall, BulkResponse, BulkResponseData, BulkResponseHeaders, BulkTransport,
};
use crate::clients::errors::{HttpError, HttpResponseError, MaxHttpRetriesExceededError};
use crate::config::ShopConfig;

/// Fixed retry wait time in seconds.
pub const RETRY_WAIT_TIME: u64 = 1;

/// SDK version from Cargo.toml.
pub const SDK_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Path prefix of the REST API on every shop.
pub const API_PATH: &str = "/webapi/rest";

/// HTTP client for making requests to the shop REST API.
///
/// The client handles:
/// - URL construction from the configured shop URL
/// - Default headers including User-Agent and bearer token
/// - Automatic retry logic for 429 and 500 responses
///
/// # Thread Safety
///
/// `HttpClient` is `Send + Sync`, making it safe to share across async tasks.
///
/// # Example
///
/// ```rust,ignore
/// use shop_appstore::{AccessToken, HttpClient, ShopConfig, ShopUrl};
/// use shop_appstore::clients::{BulkCall, BulkTransport};
///
/// let config = ShopConfig::builder()
///     .shop_url(ShopUrl::new("https://example.shoparena.pl")?)
///     .access_token(AccessToken::new("token")?)
///     .build()?;
///
/// let client = HttpClient::new(&config);
/// let response = client.bulk_request(&[BulkCall::new("a", "orders", None)]).await?;
/// ```
#[derive(Debug)]
pub struct HttpClient {
    client: reqwest::Client,
    /// Shop URL without trailing slash.
    base_uri: String,
    default_headers: HashMap<String, String>,
    tries: u32,
}

// Verify HttpClient is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<HttpClient>();
};

/// Wire form of a single bulk sub-request.
#[derive(Debug, Serialize)]
struct WireCall<'a> {
    id: &'a str,
    path: String,
    method: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    params: Option<&'a Map<String, Value>>,
}

impl HttpClient {
    /// Creates a new HTTP client for the configured shop.
    ///
    /// # Panics
    ///
    /// Panics if the underlying reqwest client cannot be created. This should
    /// only happen in extremely unusual circumstances (e.g., TLS initialization failure).
    #[must_use]
    pub fn new(config: &ShopConfig) -> Self {
        let user_agent_prefix = config
            .user_agent_prefix()
            .map_or(String::new(), |prefix| format!("{prefix} | "));
        let rust_version = env!("CARGO_PKG_RUST_VERSION");
        let user_agent =
            format!("{user_agent_prefix}Shop AppStore Library v{SDK_VERSION} | Rust {rust_version}");

        let mut default_headers = HashMap::new();
        default_headers.insert("User-Agent".to_string(), user_agent);
        default_headers.insert("Accept".to_string(), "application/json".to_string());
        default_headers.insert(
            "Authorization".to_string(),
            format!("Bearer {}", config.access_token().as_ref()),
        );

        let client = reqwest::Client::builder()
            .use_rustls_tls()
            .build()
            .expect("Failed to create HTTP client");

        Self {
            client,
            base_uri: config.shop_url().as_ref().to_string(),
            default_headers,
            tries: config.tries(),
        }
    }

    /// Returns the base URI for this client.
    #[must_use]
    pub fn base_uri(&self) -> &str {
        &self.base_uri
    }

    /// Returns the default headers for this client.
    #[must_use]
    pub const fn default_headers(&self) -> &HashMap<String, String> {
        &self.default_headers
    }

    /// Returns the configured number of attempts per request.
    #[must_use]
    pub const fn tries(&self) -> u32 {
        self.tries
    }

    /// Returns the full URL for an API path such as `bulk` or `orders`.
    #[must_use]
    pub fn endpoint(&self, path: &str) -> String {
        format!("{}{API_PATH}/{}", self.base_uri, path.trim_start_matches('/'))
    }

    /// Posts a JSON body to an API path and returns the status and parsed body.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] if:
    /// - Network error occurs, including a body that fails to arrive in full (`Network`)
    /// - Non-2xx response received (`Response`)
    /// - Max retries exceeded (`MaxRetries`)
    pub async fn post_json<T: Serialize + Sync>(
        &self,
        path: &str,
        body: &T,
    ) -> Result<(u16, Value), HttpError> {
        let url = self.endpoint(path);

        let mut tries: u32 = 0;
        loop {
            tries += 1;

            let mut req_builder = self.client.post(&url).json(body);
            for (key, value) in &self.default_headers {
                req_builder = req_builder.header(key, value);
            }

            tracing::debug!(url = %url, attempt = tries, "Sending request to shop API");
            let res = req_builder.send().await?;

            let code = res.status().as_u16();
            let retry_after = res
                .headers()
                .get("retry-after")
                .and_then(|v| v.to_str().ok())
                .and_then(|v| v.trim().parse::<f64>().ok());
            let request_id = res
                .headers()
                .get("x-request-id")
                .and_then(|v| v.to_str().ok())
                .map(String::from);
            let body_text = res.text().await?;

            if (200..300).contains(&code) {
                let body = if body_text.is_empty() {
                    serde_json::json!({})
                } else {
                    serde_json::from_str(&body_text).map_err(|e| HttpError::InvalidResponse {
                        reason: e.to_string(),
                    })?
                };
                return Ok((code, body));
            }

            let body = if body_text.is_empty() {
                serde_json::json!({})
            } else {
                serde_json::from_str(&body_text).unwrap_or_else(|_| {
                    if code >= 500 {
                        serde_json::json!({ "raw_body": body_text })
                    } else {
                        serde_json::json!({})
                    }
                })
            };

            let error = HttpResponseError {
                code,
                message: Self::serialize_error(&body, request_id.as_deref()),
                body,
                error_reference: request_id,
            };

            let should_retry = code == 429 || code == 500;
            if !should_retry || tries >= self.tries {
                if should_retry && self.tries > 1 {
                    return Err(HttpError::MaxRetries(MaxHttpRetriesExceededError {
                        tries: self.tries,
                        last_response: error,
                    }));
                }
                return Err(HttpError::Response(error));
            }

            let delay = Self::calculate_retry_delay(retry_after, code);
            tracing::warn!(
                status = code,
                attempt = tries,
                delay_ms = u64::try_from(delay.as_millis()).unwrap_or(u64::MAX),
                "Retrying shop API request"
            );
            tokio::time::sleep(delay).await;
        }
    }

    /// Builds the bulk endpoint payload for the given calls.
    fn bulk_payload(calls: &[BulkCall]) -> Vec<WireCall<'_>> {
        calls
            .iter()
            .map(|call| WireCall {
                id: &call.id,
                path: format!("{API_PATH}/{}", call.name),
                method: "GET",
                params: call.params.as_ref(),
            })
            .collect()
    }

    /// For 429 use `Retry-After` when it is a representable delay; anything
    /// else uses the fixed delay.
    fn calculate_retry_delay(retry_after: Option<f64>, status: u16) -> Duration {
        retry_after
            .filter(|_| status == 429)
            .and_then(|seconds| Duration::try_from_secs_f64(seconds).ok())
            .unwrap_or(Duration::from_secs(RETRY_WAIT_TIME))
    }

    /// Serializes the error fields of a response body to a JSON string.
    fn serialize_error(body: &Value, request_id: Option<&str>) -> String {
        let mut error_body = Map::new();

        if let Some(errors) = body.get("errors") {
            error_body.insert("errors".to_string(), errors.clone());
        }
        if let Some(error) = body.get("error") {
            error_body.insert("error".to_string(), error.clone());
            if let Some(desc) = body.get("error_description") {
                error_body.insert("error_description".to_string(), desc.clone());
            }
        }
        if let Some(raw) = body.get("raw_body") {
            error_body.insert("raw_body".to_string(), raw.clone());
        }

        if let Some(request_id) = request_id {
            error_body.insert(
                "error_reference".to_string(),
                serde_json::json!(format!(
                    "If you report this error, please include this id: {request_id}."
                )),
            );
        }

        serde_json::to_string(&error_body).unwrap_or_else(|_| "{}".to_string())
    }
}

impl BulkTransport for HttpClient {
    async fn bulk_request(&self, calls: &[BulkCall]) -> Result<BulkResponse, HttpError> {
        let payload = Self::bulk_payload(calls);
        let (code, body) = self.post_json("bulk", &payload).await?;

        let data: BulkResponseData =
            serde_json::from_value(body).map_err(|e| HttpError::InvalidResponse {
                reason: e.to_string(),
            })?;

        Ok(BulkResponse {
            headers: BulkResponseHeaders { code: Some(code) },
            data,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{AccessToken, ShopUrl};

    fn create_test_config() -> ShopConfig {
        ShopConfig::builder()
            .shop_url(ShopUrl::new("https://example.shoparena.pl/").unwrap())
            .access_token(AccessToken::new("test-access-token").unwrap())
            .build()
            .unwrap()
    }

    #[test]
    fn test_client_construction_with_config() {
        let client = HttpClient::new(&create_test_config());

        assert_eq!(client.base_uri(), "https://example.shoparena.pl");
        assert_eq!(client.tries(), 1);
        assert_eq!(
            client.endpoint("bulk"),
            "https://example.shoparena.pl/webapi/rest/bulk"
        );
    }

    #[test]
    fn test_bearer_token_header_injection() {
        let client = HttpClient::new(&create_test_config());

        assert_eq!(
            client.default_headers().get("Authorization"),
            Some(&"Bearer test-access-token".to_string())
        );
        assert_eq!(
            client.default_headers().get("Accept"),
            Some(&"application/json".to_string())
        );
    }

    #[test]
    fn test_user_agent_with_prefix() {
        let config = ShopConfig::builder()
            .shop_url(ShopUrl::new("https://example.shoparena.pl").unwrap())
            .access_token(AccessToken::new("token").unwrap())
            .user_agent_prefix("MyApp/1.0")
            .build()
            .unwrap();
        let client = HttpClient::new(&config);

        let user_agent = client.default_headers().get("User-Agent").unwrap();
        assert!(user_agent.starts_with("MyApp/1.0 | "));
        assert!(user_agent.contains("Shop AppStore Library v"));
    }

    #[test]
    fn test_bulk_payload_maps_names_to_paths() {
        let mut params = Map::new();
        params.insert("limit".to_string(), serde_json::json!(5));
        let calls = vec![
            BulkCall::new("a", "orders", None),
            BulkCall::new("b", "subscribers", Some(params)),
        ];

        let payload = serde_json::to_value(HttpClient::bulk_payload(&calls)).unwrap();
        assert_eq!(
            payload,
            serde_json::json!([
                {"id": "a", "path": "/webapi/rest/orders", "method": "GET"},
                {"id": "b", "path": "/webapi/rest/subscribers", "method": "GET", "params": {"limit": 5}}
            ])
        );
    }

    #[test]
    fn test_retry_delay_honours_retry_after_for_429_only() {
        assert_eq!(
            HttpClient::calculate_retry_delay(Some(2.5), 429),
            Duration::from_secs_f64(2.5)
        );
        assert_eq!(
            HttpClient::calculate_retry_delay(Some(2.5), 500),
            Duration::from_secs(RETRY_WAIT_TIME)
        );
        assert_eq!(
            HttpClient::calculate_retry_delay(None, 429),
            Duration::from_secs(RETRY_WAIT_TIME)
        );
    }

    #[test]
    fn test_retry_delay_ignores_unrepresentable_retry_after() {
        for seconds in [1e30, f64::INFINITY, f64::NAN, -1.0] {
            assert_eq!(
                HttpClient::calculate_retry_delay(Some(seconds), 429),
                Duration::from_secs(RETRY_WAIT_TIME),
                "Retry-After: {seconds}"
            );
        }
    }

    #[test]
    fn test_serialize_error_keeps_error_fields() {
        let body = serde_json::json!({
            "error": "invalid_request",
            "error_description": "Bad filter",
            "ignored": true
        });
        let message = HttpClient::serialize_error(&body, Some("req-1"));
        let parsed: Value = serde_json::from_str(&message).unwrap();

        assert_eq!(parsed["error"], "invalid_request");
        assert_eq!(parsed["error_description"], "Bad filter");
        assert!(parsed.get("ignored").is_none());
        assert!(parsed["error_reference"].as_str().unwrap().contains("req-1"));
    }
}
