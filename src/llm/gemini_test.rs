use super::*;
use crate::llm::config::{DEFAULT_GEMINI_MODEL, LlmTimeouts};
use wiremock::matchers::{body_partial_json, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn make_response(parts: serde_json::Value) -> serde_json::Value {
    serde_json::json!({
        "candidates": [{
            "content": { "role": "model", "parts": parts },
            "finishReason": "STOP"
        }],
        "usageMetadata": { "promptTokenCount": 10, "candidatesTokenCount": 5 }
    })
}

fn test_config(base_url: &str) -> LlmConfig {
    LlmConfig {
        api_key: "test-key".into(),
        model: DEFAULT_GEMINI_MODEL.into(),
        base_url: base_url.into(),
        timeouts: LlmTimeouts { request_secs: Some(5), connect_secs: 1 },
    }
}

// =========================================================================
// parse_response
// =========================================================================

#[test]
fn parse_single_text_part() {
    let json = make_response(serde_json::json!([{ "text": "[]" }])).to_string();
    assert_eq!(parse_response(&json).unwrap(), "[]");
}

#[test]
fn parse_joins_multiple_parts() {
    let json = make_response(serde_json::json!([{ "text": "[{\"a\":" }, { "text": "1}]" }])).to_string();
    assert_eq!(parse_response(&json).unwrap(), "[{\"a\":1}]");
}

#[test]
fn parse_skips_non_text_parts() {
    let json = make_response(serde_json::json!([
        { "inlineData": { "mimeType": "image/png", "data": "AAAA" } },
        { "text": "hello" }
    ]))
    .to_string();
    assert_eq!(parse_response(&json).unwrap(), "hello");
}

#[test]
fn parse_no_candidates_is_empty_response() {
    let json = serde_json::json!({ "promptFeedback": { "blockReason": "SAFETY" } }).to_string();
    assert!(matches!(parse_response(&json), Err(LlmError::EmptyResponse)));
}

#[test]
fn parse_blank_text_is_empty_response() {
    let json = make_response(serde_json::json!([{ "text": "  \n" }])).to_string();
    assert!(matches!(parse_response(&json), Err(LlmError::EmptyResponse)));
}

#[test]
fn parse_invalid_json() {
    let err = parse_response("not json").unwrap_err();
    assert!(matches!(err, LlmError::ApiParse(_)));
}

// =========================================================================
// HTTP round trip
// =========================================================================

#[tokio::test]
async fn generate_posts_prompt_with_api_key_header() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path(format!("/models/{DEFAULT_GEMINI_MODEL}:generateContent")))
        .and(header("x-goog-api-key", "test-key"))
        .and(body_partial_json(serde_json::json!({
            "contents": [{ "role": "user", "parts": [{ "text": "split this" }] }]
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(make_response(serde_json::json!([{ "text": "ok" }]))))
        .expect(1)
        .mount(&server)
        .await;

    let client = GeminiClient::new(test_config(&server.uri())).unwrap();
    assert_eq!(client.model(), DEFAULT_GEMINI_MODEL);
    let text = client.generate("split this").await.unwrap();
    assert_eq!(text, "ok");
}

#[tokio::test]
async fn generate_non_200_is_api_response_error() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(403).set_body_string("API key not valid"))
        .mount(&server)
        .await;

    let client = GeminiClient::new(test_config(&server.uri())).unwrap();
    let err = client.generate("anything").await.unwrap_err();
    match err {
        LlmError::ApiResponse { status, body } => {
            assert_eq!(status, 403);
            assert!(body.contains("not valid"));
        }
        other => panic!("expected ApiResponse, got {other:?}"),
    }
}

#[tokio::test]
async fn generate_unreachable_host_is_api_request_error() {
    // Port 9 (discard) on localhost is expected to refuse connections.
    let client = GeminiClient::new(test_config("http://127.0.0.1:9")).unwrap();
    let err = client.generate("anything").await.unwrap_err();
    assert!(matches!(err, LlmError::ApiRequest(_)));
}
