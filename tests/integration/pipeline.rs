//! Integration tests for generate, download and decode

use super::*;
use openai_imagegen::errors::{DecodeError, DownloadError};
use std::path::Path;
use tempfile::TempDir;

async fn generate_and_fetch(
    server: &MockServer,
    count: u32,
    output_dir: &Path,
) -> ImageGenResult<Vec<std::path::PathBuf>> {
    let client = client_for(server);
    let response = client
        .images()
        .generate(ImageGenerationRequest::new("A lighthouse at dusk").with_n(count))
        .await?;
    let urls = response.urls()?;

    FetchAndRender::new(client.transport(), output_dir)
        .run(&urls, &mut NullRenderer)
        .await
}

fn file_names(dir: &Path) -> Vec<String> {
    let mut names: Vec<String> = std::fs::read_dir(dir)
        .unwrap()
        .map(|entry| entry.unwrap().file_name().to_string_lossy().into_owned())
        .collect();
    names.sort();
    names
}

#[tokio::test]
async fn test_k_urls_produce_k_files() {
    let server = setup_mock_server().await;
    let dir = TempDir::new().unwrap();

    generation_mock()
        .respond_with(generation_response(&server, 3))
        .mount(&server)
        .await;
    serve_image(&server, 1, png(8, 8, [255, 0, 0])).await;
    serve_image(&server, 2, png(8, 8, [0, 255, 0])).await;
    serve_image(&server, 3, png(8, 8, [0, 0, 255])).await;

    let paths = generate_and_fetch(&server, 3, dir.path()).await.unwrap();

    assert_eq!(paths.len(), 3);
    assert_eq!(
        file_names(dir.path()),
        vec!["image_1.png", "image_2.png", "image_3.png"]
    );

    let second = image::open(dir.path().join("image_2.png")).unwrap().to_rgb8();
    assert_eq!(second.get_pixel(0, 0).0, [0, 255, 0]);
}

#[tokio::test]
async fn test_invalid_credential_writes_no_files() {
    let server = setup_mock_server().await;
    let dir = TempDir::new().unwrap();

    generation_mock()
        .respond_with(error_response(401, "Incorrect API key provided", "invalid_api_key"))
        .mount(&server)
        .await;

    let err = generate_and_fetch(&server, 2, dir.path()).await.unwrap_err();

    assert!(err.is_authentication_error());
    assert!(file_names(dir.path()).is_empty());
}

#[tokio::test]
async fn test_non_image_body_stops_the_loop() {
    let server = setup_mock_server().await;
    let dir = TempDir::new().unwrap();

    generation_mock()
        .respond_with(generation_response(&server, 2))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/files/1.png"))
        .respond_with(
            ResponseTemplate::new(200)
                .insert_header("content-type", "text/html")
                .set_body_string("<html>expired</html>"),
        )
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/files/2.png"))
        .respond_with(ResponseTemplate::new(200).set_body_bytes(png(4, 4, [0, 0, 0])))
        .expect(0)
        .mount(&server)
        .await;

    let err = generate_and_fetch(&server, 2, dir.path()).await.unwrap_err();

    assert!(matches!(
        err,
        ImageGenError::Decode(DecodeError::InvalidImage { .. })
    ));
    assert!(!dir.path().join("image_2.png").exists());
}

#[tokio::test]
async fn test_missing_image_is_download_error() {
    let server = setup_mock_server().await;
    let dir = TempDir::new().unwrap();

    generation_mock()
        .respond_with(generation_response(&server, 1))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/files/1.png"))
        .respond_with(ResponseTemplate::new(404))
        .mount(&server)
        .await;

    let err = generate_and_fetch(&server, 1, dir.path()).await.unwrap_err();

    assert!(matches!(
        err,
        ImageGenError::Download(DownloadError::HttpStatus { status: 404, .. })
    ));
}

#[tokio::test]
async fn test_rerun_overwrites_previous_files() {
    let dir = TempDir::new().unwrap();

    for colour in [[10, 20, 30], [200, 100, 50]] {
        let server = setup_mock_server().await;
        generation_mock()
            .respond_with(generation_response(&server, 2))
            .mount(&server)
            .await;
        serve_image(&server, 1, png(4, 4, colour)).await;
        serve_image(&server, 2, png(4, 4, colour)).await;

        generate_and_fetch(&server, 2, dir.path()).await.unwrap();
    }

    assert_eq!(file_names(dir.path()), vec!["image_1.png", "image_2.png"]);
    let first = image::open(dir.path().join("image_1.png")).unwrap().to_rgb8();
    assert_eq!(first.get_pixel(0, 0).0, [200, 100, 50]);
}
