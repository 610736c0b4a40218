use serde_json::json;
use wicket::backend::{HttpBackend, NO_REPLY, ReplyBackend, ReplyError};
use wiremock::matchers::{body_json, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

// ============================================================================
// Helper Functions
// ============================================================================

/// Mounts a /chat mock that returns the given JSON body with the given status
async fn mount_chat_reply(server: &MockServer, status: u16, body: serde_json::Value) {
    Mock::given(method("POST"))
        .and(path("/chat"))
        .respond_with(ResponseTemplate::new(status).set_body_json(body))
        .mount(server)
        .await;
}

// ============================================================================
// Request Shape
// ============================================================================

#[tokio::test]
async fn test_send_posts_message_as_json() {
    let mock_server = MockServer::start().await;

    // The matchers are the assertion: a request with the wrong path, body,
    // or content type never reaches this mock
    Mock::given(method("POST"))
        .and(path("/chat"))
        .and(header("content-type", "application/json"))
        .and(body_json(json!({"message": "Hello"})))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"reply": "Hi"})))
        .mount(&mock_server)
        .await;

    let backend = HttpBackend::new(&mock_server.uri());
    let result = backend.send("Hello").await;

    assert!(result.is_ok());
    assert_eq!(result.unwrap().into_text(), "Hi");
}

#[tokio::test]
async fn test_trailing_slash_in_base_url_is_normalized() {
    let mock_server = MockServer::start().await;
    mount_chat_reply(&mock_server, 200, json!({"reply": "ok"})).await;

    let backend = HttpBackend::new(&format!("{}/", mock_server.uri()));

    assert!(!backend.name().ends_with('/'));

    let result = backend.send("ping").await;
    assert_eq!(result.unwrap().into_text(), "ok");
}

// ============================================================================
// Reply Extraction
// ============================================================================

#[tokio::test]
async fn test_missing_reply_field_becomes_placeholder() {
    let mock_server = MockServer::start().await;
    mount_chat_reply(&mock_server, 200, json!({})).await;

    let backend = HttpBackend::new(&mock_server.uri());
    let reply = backend.send("hello").await.unwrap();

    assert_eq!(reply.into_text(), NO_REPLY);
}

#[tokio::test]
async fn test_null_reply_becomes_placeholder() {
    let mock_server = MockServer::start().await;
    mount_chat_reply(&mock_server, 200, json!({"reply": null})).await;

    let backend = HttpBackend::new(&mock_server.uri());
    let reply = backend.send("hello").await.unwrap();

    assert_eq!(reply.into_text(), NO_REPLY);
}

#[tokio::test]
async fn test_empty_reply_becomes_placeholder() {
    let mock_server = MockServer::start().await;
    mount_chat_reply(&mock_server, 200, json!({"reply": ""})).await;

    let backend = HttpBackend::new(&mock_server.uri());
    let reply = backend.send("hello").await.unwrap();

    assert_eq!(reply.into_text(), NO_REPLY);
}

#[tokio::test]
async fn test_whitespace_reply_is_shown_verbatim() {
    let mock_server = MockServer::start().await;
    mount_chat_reply(&mock_server, 200, json!({"reply": "   "})).await;

    let backend = HttpBackend::new(&mock_server.uri());
    let reply = backend.send("hello").await.unwrap();

    assert_eq!(reply.into_text(), "   ");
}

// ============================================================================
// Status Codes Are Not Inspected
// ============================================================================

#[tokio::test]
async fn test_error_status_body_is_still_parsed() {
    let mock_server = MockServer::start().await;

    // A typical backend failure: 500 with an error payload. The status is
    // ignored; the body parses to a missing reply
    mount_chat_reply(&mock_server, 500, json!({"error": "boom"})).await;

    let backend = HttpBackend::new(&mock_server.uri());
    let result = backend.send("hello").await;

    assert!(result.is_ok());
    assert_eq!(result.unwrap().into_text(), NO_REPLY);
}

#[tokio::test]
async fn test_error_status_with_reply_field_still_renders_it() {
    let mock_server = MockServer::start().await;
    mount_chat_reply(&mock_server, 503, json!({"reply": "try later"})).await;

    let backend = HttpBackend::new(&mock_server.uri());
    let reply = backend.send("hello").await.unwrap();

    assert_eq!(reply.into_text(), "try later");
}

// ============================================================================
// Failure Modes
// ============================================================================

#[tokio::test]
async fn test_non_json_body_is_a_decode_error() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/chat"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>oops</html>"))
        .mount(&mock_server)
        .await;

    let backend = HttpBackend::new(&mock_server.uri());
    let result = backend.send("hello").await;

    assert!(matches!(result, Err(ReplyError::Decode(_))));
}

#[tokio::test]
async fn test_non_string_reply_is_a_decode_error() {
    let mock_server = MockServer::start().await;
    mount_chat_reply(&mock_server, 200, json!({"reply": 42})).await;

    let backend = HttpBackend::new(&mock_server.uri());
    let result = backend.send("hello").await;

    assert!(matches!(result, Err(ReplyError::Decode(_))));
}

#[tokio::test]
async fn test_unreachable_endpoint_is_a_network_error() {
    // Port 1 is never listening
    let backend = HttpBackend::new("http://127.0.0.1:1");
    let result = backend.send("hello").await;

    assert!(matches!(result, Err(ReplyError::Network(_))));
}
