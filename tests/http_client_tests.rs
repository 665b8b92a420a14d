//! Integration tests for the HTTP transport.
//!
//! These tests run [`HttpClient`] against a local mock server to verify
//! request shape, response parsing, retries and error mapping.

use std::io::{Read, Write};
use std::net::TcpListener;
use std::thread;

use serde_json::json;
use shop_appstore::clients::{BulkTransport, HttpClient};
use shop_appstore::{AccessToken, BulkCall, HttpError, ShopConfig, ShopUrl};
use tokio_test::{assert_err, assert_ok};
use wiremock::matchers::{body_json, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

/// Creates a client pointing at the given server URI.
fn create_client(uri: &str, tries: u32) -> HttpClient {
    let config = ShopConfig::builder()
        .shop_url(ShopUrl::new(uri).unwrap())
        .access_token(AccessToken::new("test-token").unwrap())
        .tries(tries)
        .build()
        .unwrap();
    HttpClient::new(&config)
}

#[tokio::test]
async fn test_bulk_request_posts_calls_and_parses_items() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/webapi/rest/bulk"))
        .and(header("Authorization", "Bearer test-token"))
        .and(body_json(json!([
            {"id": "a", "path": "/webapi/rest/orders", "method": "GET"}
        ])))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "errors": false,
            "items": [
                {"id": "a", "code": 200, "body": {"list": [{"order_id": 1}], "count": "1"}}
            ]
        })))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = create_client(&mock_server.uri(), 1);
    let response = assert_ok!(
        client
            .bulk_request(&[BulkCall::new("a", "orders", None)])
            .await
    );

    assert_eq!(response.headers.code, Some(200));
    assert_eq!(response.data.items.len(), 1);
    assert_eq!(response.data.items[0].id, "a");
    assert_eq!(response.data.items[0].code, Some(200));
    assert_eq!(response.data.items[0].body["count"], json!("1"));
}

#[tokio::test]
async fn test_error_status_maps_to_response_error() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/webapi/rest/bulk"))
        .respond_with(
            ResponseTemplate::new(404)
                .insert_header("X-Request-Id", "req-42")
                .set_body_json(json!({
                    "error": "not_found",
                    "error_description": "Unknown resource"
                })),
        )
        .mount(&mock_server)
        .await;

    let client = create_client(&mock_server.uri(), 3);
    let error = assert_err!(client.bulk_request(&[]).await);

    match error {
        HttpError::Response(e) => {
            assert_eq!(e.code, 404);
            assert_eq!(e.body["error_description"], json!("Unknown resource"));
            assert!(e.message.contains("not_found"));
            assert_eq!(e.error_reference.as_deref(), Some("req-42"));
        }
        other => panic!("expected response error, got {other:?}"),
    }
}

#[tokio::test]
async fn test_rate_limited_request_is_retried() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/webapi/rest/bulk"))
        .respond_with(ResponseTemplate::new(429).insert_header("Retry-After", "0"))
        .up_to_n_times(1)
        .expect(1)
        .mount(&mock_server)
        .await;

    Mock::given(method("POST"))
        .and(path("/webapi/rest/bulk"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"items": []})))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = create_client(&mock_server.uri(), 2);
    let response = assert_ok!(client.bulk_request(&[]).await);

    assert_eq!(response.headers.code, Some(200));
    assert!(response.data.items.is_empty());
}

#[tokio::test]
async fn test_exhausted_retries_report_max_retries() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/webapi/rest/bulk"))
        .respond_with(
            ResponseTemplate::new(429)
                .insert_header("Retry-After", "0")
                .set_body_json(json!({"error": "rate_limited"})),
        )
        .expect(2)
        .mount(&mock_server)
        .await;

    let client = create_client(&mock_server.uri(), 2);
    let error = assert_err!(client.bulk_request(&[]).await);

    match &error {
        HttpError::MaxRetries(e) => {
            assert_eq!(e.tries, 2);
            assert_eq!(e.last_response.code, 429);
        }
        other => panic!("expected max retries error, got {other:?}"),
    }
    assert_eq!(error.status(), Some(429));
}

#[tokio::test]
async fn test_oversized_retry_after_falls_back_to_fixed_delay() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/webapi/rest/bulk"))
        .respond_with(ResponseTemplate::new(429).insert_header("Retry-After", "1e30"))
        .expect(2)
        .mount(&mock_server)
        .await;

    let client = create_client(&mock_server.uri(), 2);
    let error = assert_err!(client.bulk_request(&[]).await);

    assert!(matches!(error, HttpError::MaxRetries(_)));
    assert_eq!(error.status(), Some(429));
}

/// Serves one response that promises more body bytes than it sends.
fn serve_truncated_body() -> String {
    let listener = TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = listener.local_addr().unwrap();

    thread::spawn(move || {
        let (mut stream, _) = listener.accept().unwrap();

        // Drain the whole request so closing the socket is a clean EOF.
        let mut request = Vec::new();
        let mut buf = [0_u8; 1024];
        loop {
            let n = stream.read(&mut buf).unwrap();
            if n == 0 {
                return;
            }
            request.extend_from_slice(&buf[..n]);

            let text = String::from_utf8_lossy(&request);
            if let Some(head_end) = text.find("\r\n\r\n") {
                let body_len = text[..head_end]
                    .lines()
                    .find_map(|line| {
                        let (name, value) = line.split_once(':')?;
                        name.eq_ignore_ascii_case("content-length")
                            .then(|| value.trim().parse::<usize>().ok())
                            .flatten()
                    })
                    .unwrap_or(0);
                if request.len() >= head_end + 4 + body_len {
                    break;
                }
            }
        }

        let response = concat!(
            "HTTP/1.1 200 OK\r\n",
            "Content-Type: application/json\r\n",
            "Content-Length: 512\r\n",
            "\r\n",
            r#"{"items": [{"id": "a", "code": 200"#
        );
        stream.write_all(response.as_bytes()).unwrap();
        stream.flush().unwrap();
    });

    format!("http://{addr}")
}

#[tokio::test]
async fn test_truncated_success_body_is_network_error() {
    let client = create_client(&serve_truncated_body(), 1);
    let error = assert_err!(
        client
            .bulk_request(&[BulkCall::new("a", "orders", None)])
            .await
    );

    assert!(matches!(error, HttpError::Network(_)));
    assert!(error.response().is_none());
}

#[tokio::test]
async fn test_unparseable_success_body_is_invalid_response() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/webapi/rest/bulk"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>maintenance</html>"))
        .mount(&mock_server)
        .await;

    let client = create_client(&mock_server.uri(), 1);
    let error = assert_err!(client.bulk_request(&[]).await);

    assert!(matches!(error, HttpError::InvalidResponse { .. }));
    assert!(error.response().is_none());
}

#[tokio::test]
async fn test_connection_failure_is_network_error() {
    // Nothing listens on port 1.
    let client = create_client("http://127.0.0.1:1", 1);
    let error = assert_err!(client.bulk_request(&[]).await);

    assert!(matches!(error, HttpError::Network(_)));
    assert!(error.status().is_none());
}
