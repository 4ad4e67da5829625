//! Mock HTTP server tests for `GeminiProvider` and `ShorthandService`.
//!
//! Uses [`wiremock`] to stand up a local server that emulates the
//! `generateContent` endpoint, exercising the full request/response path
//! without hitting a real API.
//!
//! Coverage:
//! - Successful decode with text response
//! - Request shape (instruction, inline image, generation config)
//! - Validated 2 MiB JPEG upload through to a decoded result
//! - API key sent as the `key` query parameter
//! - 403 and 500 status errors
//! - Malformed JSON response
//! - Empty candidates array
//! - Model export/import round trip

use std::sync::Arc;

use wiremock::matchers::{body_partial_json, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

use shorthand_llm::config::VisionConfig;
use shorthand_llm::error::ProviderError;
use shorthand_llm::gemini::GeminiProvider;
use shorthand_llm::provider::VisionProvider;
use shorthand_llm::scoring::PlaceholderScorer;
use shorthand_llm::service::ShorthandService;
use shorthand_core::image::{preprocess_image_for_ai, to_data_uri};
use shorthand_core::validate_image_for_shorthand;
use shorthand_llm::types::GenerateContentRequest;
use shorthand_types::{ImageFile, ShorthandSystem};
use shorthand_types::secret::ApiKey;

const ENDPOINT: &str = "/v1beta/models/gemini-pro-vision:generateContent";
const TEST_KEY: &str = "test-key-123";
const IMAGE: &str = "data:image/png;base64,iVBORw0KGgoAAAANSUhEUg==";

fn mock_config(server_url: &str) -> VisionConfig {
    VisionConfig {
        name: "mock-gemini".into(),
        base_url: format!("{server_url}{ENDPOINT}"),
        api_key_env: "MOCK_UNUSED_KEY".into(),
        timeout_secs: Some(5),
    }
}

fn mock_provider(server: &MockServer) -> GeminiProvider {
    GeminiProvider::with_api_key(mock_config(&server.uri()), ApiKey::new(TEST_KEY)).unwrap()
}

fn mock_service(server: &MockServer) -> ShorthandService<GeminiProvider> {
    ShorthandService::new(mock_provider(server)).with_scorer(Arc::new(PlaceholderScorer::seeded(5)))
}

fn text_response(text: &str) -> serde_json::Value {
    serde_json::json!({
        "candidates": [{
            "content": {"parts": [{"text": text}], "role": "model"},
            "finishReason": "STOP",
            "index": 0
        }]
    })
}

// ── Successful decode ──────────────────────────────────────────────────

#[tokio::test]
async fn decode_success() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path(ENDPOINT))
        .and(query_param("key", TEST_KEY))
        .respond_with(ResponseTemplate::new(200).set_body_json(text_response("Dear Sir, thank you")))
        .expect(1)
        .mount(&server)
        .await;

    let result = mock_service(&server)
        .decode_image(IMAGE, ShorthandSystem::Teeline, None)
        .await;

    let decoded = result.success().expect("decode should succeed");
    assert_eq!(decoded.decoded_text, "Dear Sir, thank you");
    assert!((70..95).contains(&decoded.confidence));
    assert_eq!(decoded.patterns.len(), 3);
}

#[tokio::test]
async fn decode_sends_expected_body() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path(ENDPOINT))
        .and(body_partial_json(serde_json::json!({
            "contents": [{
                "parts": [
                    {"text": "Analyze this PITMAN shorthand image and decode it to text. Consider the user's writing style and previous patterns. Provide confidence scores for each recognized element."},
                    {"inline_data": {"mime_type": "image/jpeg", "data": "iVBORw0KGgoAAAANSUhEUg=="}}
                ]
            }],
            "generationConfig": {
                "temperature": 0.1,
                "topK": 32,
                "topP": 1.0,
                "maxOutputTokens": 2048
            }
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(text_response("ok")))
        .expect(1)
        .mount(&server)
        .await;

    let result = mock_service(&server)
        .decode_image(IMAGE, ShorthandSystem::Pitman, None)
        .await;
    assert!(result.is_success(), "{:?}", result.error());
}

#[tokio::test]
async fn two_megabyte_jpeg_decodes() {
    let server = MockServer::start().await;

    let image = ImageFile::new("page.jpg", "image/jpeg", vec![0xFF; 2 * 1024 * 1024]);
    let validation = validate_image_for_shorthand(&image);
    assert!(validation.valid, "{:?}", validation.error);
    let data_uri = preprocess_image_for_ai(to_data_uri(&image));
    let (prefix, payload) = data_uri.split_once(',').unwrap();
    assert_eq!(prefix, "data:image/jpeg;base64");

    Mock::given(method("POST"))
        .and(path(ENDPOINT))
        .and(body_partial_json(serde_json::json!({
            "contents": [{
                "parts": [
                    {"text": "Analyze this GREGG shorthand image and decode it to text. Consider the user's writing style and previous patterns. Provide confidence scores for each recognized element."},
                    {"inline_data": {"mime_type": "image/jpeg", "data": payload}}
                ]
            }]
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(text_response("Meeting moved to Friday")))
        .expect(1)
        .mount(&server)
        .await;

    let result = mock_service(&server)
        .decode_image(&data_uri, ShorthandSystem::Gregg, None)
        .await;
    let decoded = result.success().expect("decode should succeed");
    assert_eq!(decoded.decoded_text, "Meeting moved to Friday");
    assert!(decoded.confidence <= 100);
    assert!((70..95).contains(&decoded.confidence));
}

// ── Status errors ──────────────────────────────────────────────────────

#[tokio::test]
async fn forbidden_maps_to_status_error() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path(ENDPOINT))
        .respond_with(ResponseTemplate::new(403).set_body_json(serde_json::json!({
            "error": {"code": 403, "message": "API key not valid", "status": "PERMISSION_DENIED"}
        })))
        .mount(&server)
        .await;

    let request = GenerateContentRequest::with_image("x", "image/jpeg", "AA==");
    let err = mock_provider(&server).generate(&request).await.unwrap_err();

    match err {
        ProviderError::Status { status, body } => {
            assert_eq!(status, 403);
            assert!(body.contains("API key not valid"));
        }
        other => panic!("expected Status, got {other:?}"),
    }
}

#[tokio::test]
async fn server_error_becomes_failure_without_payload() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path(ENDPOINT))
        .respond_with(ResponseTemplate::new(500).set_body_string("Internal Server Error"))
        .mount(&server)
        .await;

    let result = mock_service(&server)
        .decode_image(IMAGE, ShorthandSystem::Gregg, None)
        .await;

    assert!(!result.is_success());
    assert!(result.success().is_none());
    assert_eq!(result.error(), Some("HTTP error! status: 500"));

    let json = serde_json::to_value(&result).unwrap();
    assert_eq!(json["success"], false);
    assert!(json.get("decodedText").is_none());
}

#[tokio::test]
async fn failure_message_never_contains_key() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path(ENDPOINT))
        .respond_with(ResponseTemplate::new(401).set_body_string(TEST_KEY))
        .mount(&server)
        .await;

    let result = mock_service(&server)
        .decode_image(IMAGE, ShorthandSystem::Teeline, None)
        .await;
    assert!(!result.error().unwrap_or_default().contains(TEST_KEY));
}

// ── Malformed responses ────────────────────────────────────────────────

#[tokio::test]
async fn malformed_json_is_invalid_response() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path(ENDPOINT))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_string("this is not json")
                .insert_header("content-type", "application/json"),
        )
        .mount(&server)
        .await;

    let request = GenerateContentRequest::with_image("x", "image/jpeg", "AA==");
    let err = mock_provider(&server).generate(&request).await.unwrap_err();
    assert!(matches!(err, ProviderError::InvalidResponse(_)), "{err:?}");

    let result = mock_service(&server)
        .decode_image(IMAGE, ShorthandSystem::Teeline, None)
        .await;
    assert!(!result.is_success());
}

#[tokio::test]
async fn empty_candidates_is_failure() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path(ENDPOINT))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({"candidates": []})))
        .mount(&server)
        .await;

    let result = mock_service(&server)
        .decode_image(IMAGE, ShorthandSystem::Teeline, None)
        .await;
    assert!(!result.is_success());
    assert!(result.success().is_none());
}

// ── Model export/import ────────────────────────────────────────────────

#[tokio::test]
async fn model_round_trip_for_every_system() {
    let server = MockServer::start().await;
    let service = mock_service(&server);

    for system in ShorthandSystem::ALL {
        let json = service.export_user_model(system).await.to_json().unwrap();
        let imported = service.import_user_model(&json).await;
        let imported = imported.success().expect("import should succeed");
        assert_eq!(imported.system, system);
        assert_eq!(imported.version, "1.0");
    }

    // Export and import never touch the network.
    assert!(server.received_requests().await.unwrap_or_default().is_empty());
}
