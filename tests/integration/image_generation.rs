//! Integration tests for the generation call

use super::*;
use openai_imagegen::errors::ValidationError;
use wiremock::matchers::body_partial_json;

#[tokio::test]
async fn test_generation_returns_urls_in_order() {
    let server = setup_mock_server().await;

    generation_mock()
        .and(body_partial_json(json!({
            "prompt": "A watercolour fox",
            "n": 3,
            "size": "256x256",
            "model": "dall-e-2",
            "response_format": "url"
        })))
        .respond_with(generation_response(&server, 3))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server);
    let request = ImageGenerationRequest::new("A watercolour fox")
        .with_n(3)
        .with_size(ImageSize::Size256);

    let urls = client.images().generate(request).await.unwrap().urls().unwrap();

    assert_eq!(
        urls,
        vec![
            format!("{}/files/1.png", server.uri()),
            format!("{}/files/2.png", server.uri()),
            format!("{}/files/3.png", server.uri()),
        ]
    );
}

#[tokio::test]
async fn test_invalid_api_key_is_authentication_error() {
    let server = setup_mock_server().await;

    generation_mock()
        .respond_with(error_response(
            401,
            "Incorrect API key provided: test-api-key.",
            "invalid_api_key",
        ))
        .mount(&server)
        .await;

    let client = client_for(&server);
    let err = client
        .images()
        .generate(ImageGenerationRequest::new("A fox"))
        .await
        .unwrap_err();

    assert!(err.is_authentication_error());
}

#[tokio::test]
async fn test_server_error_is_api_error() {
    let server = setup_mock_server().await;

    generation_mock()
        .respond_with(error_response(500, "The server had an error", "server_error"))
        .mount(&server)
        .await;

    let client = client_for(&server);
    let err = client
        .images()
        .generate(ImageGenerationRequest::new("A fox"))
        .await
        .unwrap_err();

    assert!(err.is_api_error());
}

#[tokio::test]
async fn test_content_policy_rejection_is_api_error() {
    let server = setup_mock_server().await;

    generation_mock()
        .respond_with(error_response(
            400,
            "Your request was rejected as a result of our safety system.",
            "content_policy_violation",
        ))
        .mount(&server)
        .await;

    let client = client_for(&server);
    let err = client
        .images()
        .generate(ImageGenerationRequest::new("Something disallowed"))
        .await
        .unwrap_err();

    assert!(err.is_api_error());
    assert_eq!(err.status_code(), Some(400));
    assert_eq!(err.error_code(), Some("content_policy_violation"));
}

#[tokio::test]
async fn test_rate_limit_is_request_error() {
    let server = setup_mock_server().await;

    generation_mock()
        .respond_with(error_response(429, "Rate limit reached", "rate_limit_exceeded"))
        .mount(&server)
        .await;

    let client = client_for(&server);
    let err = client
        .images()
        .generate(ImageGenerationRequest::new("A fox"))
        .await
        .unwrap_err();

    assert_eq!(err.status_code(), Some(429));
    assert_eq!(err.error_code(), Some("rate_limit_exceeded"));
}

#[tokio::test]
async fn test_invalid_count_never_reaches_server() {
    let server = setup_mock_server().await;

    generation_mock()
        .respond_with(generation_response(&server, 1))
        .expect(0)
        .mount(&server)
        .await;

    let client = client_for(&server);
    let err = client
        .images()
        .generate(ImageGenerationRequest::new("A fox").with_n(11))
        .await
        .unwrap_err();

    assert!(matches!(
        err,
        ImageGenError::Validation(ValidationError::ValueOutOfRange { .. })
    ));
}
