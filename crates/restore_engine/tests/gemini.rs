use std::time::Duration;

use pretty_assertions::assert_eq;
use restore_core::ImageAsset;
use restore_engine::{
    Candidate, GeminiService, ImageService, ResponsePart, ServiceRequest, ServiceSettings,
};
use serde_json::{json, Value};
use wiremock::matchers::{header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

const ENDPOINT: &str = "/v1beta/models/test-model:generateContent";

fn settings(server: &MockServer) -> ServiceSettings {
    ServiceSettings {
        api_key: "test-key".to_string(),
        model: "test-model".to_string(),
        base_url: server.uri(),
        ..ServiceSettings::default()
    }
}

fn request() -> ServiceRequest {
    ServiceRequest {
        model: "test-model".to_string(),
        image: ImageAsset::new(vec![1, 2, 3], "image/jpeg"),
        instruction: "Restore this photo.".to_string(),
    }
}

#[tokio::test]
async fn posts_image_and_instruction_in_order() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path(ENDPOINT))
        .and(header("x-goog-api-key", "test-key"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "candidates": [{
                "content": {
                    "parts": [
                        {"text": "Done."},
                        {"inlineData": {"mimeType": "image/png", "data": "iVBORw=="}}
                    ]
                }
            }]
        })))
        .expect(1)
        .mount(&server)
        .await;

    let service = GeminiService::new(settings(&server)).unwrap();
    let candidates = service.generate(&request()).await.expect("generate ok");

    assert_eq!(
        candidates,
        vec![Candidate {
            parts: vec![
                ResponsePart::Text("Done.".to_string()),
                ResponsePart::InlineImage {
                    data: "iVBORw==".to_string(),
                    media_type: "image/png".to_string(),
                },
            ],
        }]
    );

    let received = server.received_requests().await.unwrap();
    assert_eq!(received.len(), 1);
    let body: Value = serde_json::from_slice(&received[0].body).unwrap();
    assert_eq!(
        body,
        json!({
            "contents": [{
                "parts": [
                    {"inlineData": {"mimeType": "image/jpeg", "data": "AQID"}},
                    {"text": "Restore this photo."}
                ]
            }]
        })
    );
}

#[tokio::test]
async fn http_error_surfaces_service_message() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path(ENDPOINT))
        .respond_with(ResponseTemplate::new(400).set_body_json(json!({
            "error": {
                "code": 400,
                "message": "API key not valid. Please pass a valid API key.",
                "status": "INVALID_ARGUMENT"
            }
        })))
        .mount(&server)
        .await;

    let service = GeminiService::new(settings(&server)).unwrap();
    let err = service.generate(&request()).await.unwrap_err();

    assert_eq!(err.status, Some(400));
    assert_eq!(
        err.message,
        "400 Bad Request: API key not valid. Please pass a valid API key. (INVALID_ARGUMENT)"
    );
}

#[tokio::test]
async fn http_error_without_json_uses_status() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path(ENDPOINT))
        .respond_with(ResponseTemplate::new(503).set_body_string("upstream down"))
        .mount(&server)
        .await;

    let service = GeminiService::new(settings(&server)).unwrap();
    let err = service.generate(&request()).await.unwrap_err();

    assert_eq!(err.status, Some(503));
    assert_eq!(err.message, "503 Service Unavailable");
}

#[tokio::test]
async fn malformed_body_is_an_error() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path(ENDPOINT))
        .respond_with(ResponseTemplate::new(200).set_body_string("not json"))
        .mount(&server)
        .await;

    let service = GeminiService::new(settings(&server)).unwrap();
    let err = service.generate(&request()).await.unwrap_err();

    assert_eq!(err.status, None);
    assert!(err.message.starts_with("malformed response"), "{}", err.message);
}

#[tokio::test]
async fn oversized_response_is_rejected() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path(ENDPOINT))
        .respond_with(ResponseTemplate::new(200).set_body_string("x".repeat(64)))
        .mount(&server)
        .await;

    let service = GeminiService::new(ServiceSettings {
        max_response_bytes: 16,
        ..settings(&server)
    })
    .unwrap();
    let err = service.generate(&request()).await.unwrap_err();

    assert!(err.message.contains("too large"), "{}", err.message);
}

#[tokio::test]
async fn slow_service_times_out() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path(ENDPOINT))
        .respond_with(
            ResponseTemplate::new(200)
                .set_delay(Duration::from_millis(250))
                .set_body_json(json!({"candidates": []})),
        )
        .mount(&server)
        .await;

    let service = GeminiService::new(ServiceSettings {
        request_timeout: Duration::from_millis(50),
        ..settings(&server)
    })
    .unwrap();
    let err = service.generate(&request()).await.unwrap_err();

    assert!(err.message.starts_with("request timed out"), "{}", err.message);
}
