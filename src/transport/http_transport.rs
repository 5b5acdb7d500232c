use crate::client::ImageGenConfig;
use crate::errors::{DownloadError, ImageGenError, ImageGenResult, NetworkError};
use crate::transport::{HttpTransport, ResponseParser};
use async_trait::async_trait;
use bytes::Bytes;
use http::{HeaderMap, Method};
use reqwest::Client;
use tracing::instrument;
use url::Url;

/// HTTP transport implementation using reqwest
pub struct ReqwestTransport {
    client: Client,
    base_url: Url,
}

impl ReqwestTransport {
    /// Creates a new ReqwestTransport from configuration
    pub fn new(config: &ImageGenConfig) -> ImageGenResult<Self> {
        let mut client_builder = Client::builder().user_agent(&config.user_agent);

        if let Some(timeout) = config.timeout {
            client_builder = client_builder.timeout(timeout);
        }

        let client = client_builder.build().map_err(|e| {
            ImageGenError::Network(NetworkError::ConnectionFailed(format!(
                "Failed to build HTTP client: {}",
                e
            )))
        })?;

        Ok(Self {
            client,
            base_url: config.base_url.clone(),
        })
    }

    /// Builds a full URL from a path
    fn build_url(&self, path: &str) -> String {
        let path = path.trim_start_matches('/');
        format!("{}/{}", self.base_url.as_str().trim_end_matches('/'), path)
    }
}

#[async_trait]
impl HttpTransport for ReqwestTransport {
    #[instrument(skip(self, method, body, headers), fields(method = %method))]
    async fn request_json(
        &self,
        method: Method,
        path: &str,
        body: Option<serde_json::Value>,
        headers: Option<HeaderMap>,
    ) -> ImageGenResult<serde_json::Value> {
        let url = self.build_url(path);

        let mut request = match method {
            Method::GET => self.client.get(&url),
            Method::POST => self.client.post(&url),
            _ => {
                return Err(ImageGenError::Network(NetworkError::RequestFailed(
                    format!("Unsupported HTTP method: {}", method),
                )))
            }
        };

        request = request.headers(headers.unwrap_or_default());

        if let Some(body) = body {
            request = request.json(&body);
        }

        let response = request.send().await?;
        tracing::debug!(status = response.status().as_u16(), "API response received");
        ResponseParser::parse_response(response).await
    }

    #[instrument(skip(self))]
    async fn download(&self, url: &str) -> ImageGenResult<Bytes> {
        let parsed = Url::parse(url).map_err(|e| {
            ImageGenError::Download(DownloadError::InvalidUrl(format!("{}: {}", url, e)))
        })?;

        let response = self.client.get(parsed).send().await.map_err(|e| {
            ImageGenError::Download(DownloadError::Unreachable {
                url: url.to_string(),
                reason: e.to_string(),
            })
        })?;

        ResponseParser::parse_download(url, response).await
    }
}
