use crate::errors::{DownloadError, ErrorMapper, ImageGenError, ImageGenResult};
use bytes::Bytes;
use reqwest::Response;
use serde::de::DeserializeOwned;

pub struct ResponseParser;

impl ResponseParser {
    pub async fn parse_response<T: DeserializeOwned>(response: Response) -> ImageGenResult<T> {
        let status = response.status();
        let body = response.bytes().await?;

        if status.is_success() {
            Self::parse_json(&body)
        } else {
            Err(ErrorMapper::from_response(status.as_u16(), &body))
        }
    }

    /// Reads a download body; failures here are download errors, never API errors.
    pub async fn parse_download(url: &str, response: Response) -> ImageGenResult<Bytes> {
        let status = response.status();

        if !status.is_success() {
            return Err(ImageGenError::Download(DownloadError::HttpStatus {
                url: url.to_string(),
                status: status.as_u16(),
            }));
        }

        response.bytes().await.map_err(|e| {
            ImageGenError::Download(DownloadError::Unreachable {
                url: url.to_string(),
                reason: e.to_string(),
            })
        })
    }

    pub fn parse_json<T: DeserializeOwned>(data: &[u8]) -> ImageGenResult<T> {
        serde_json::from_slice(data).map_err(|e| {
            ImageGenError::Deserialization(format!(
                "Failed to deserialize response: {}. Body: {}",
                e,
                String::from_utf8_lossy(data)
            ))
        })
    }
}
