use crate::auth::AuthManager;
use crate::errors::{ImageGenError, ImageGenResult};
use crate::services::images::{ImageGenerationRequest, ImageRequestValidator, ImageResponse};
use crate::transport::HttpTransport;
use async_trait::async_trait;
use http::Method;
use std::sync::Arc;
use tracing::instrument;

#[async_trait]
pub trait ImageService: Send + Sync {
    async fn generate(&self, request: ImageGenerationRequest) -> ImageGenResult<ImageResponse>;
}

pub struct ImageServiceImpl {
    transport: Arc<dyn HttpTransport>,
    auth_manager: Arc<dyn AuthManager>,
}

impl ImageServiceImpl {
    pub fn new(transport: Arc<dyn HttpTransport>, auth_manager: Arc<dyn AuthManager>) -> Self {
        Self {
            transport,
            auth_manager,
        }
    }
}

#[async_trait]
impl ImageService for ImageServiceImpl {
    #[instrument(skip(self, request), fields(n = ?request.n, size = ?request.size))]
    async fn generate(&self, request: ImageGenerationRequest) -> ImageGenResult<ImageResponse> {
        ImageRequestValidator::validate(&request)?;

        let mut headers = http::HeaderMap::new();
        self.auth_manager.apply_auth(&mut headers).await?;

        let body = serde_json::to_value(&request)
            .map_err(|e| ImageGenError::Serialization(e.to_string()))?;

        let value = self
            .transport
            .request_json(Method::POST, "/images/generations", Some(body), Some(headers))
            .await?;

        let response: ImageResponse = serde_json::from_value(value)
            .map_err(|e| ImageGenError::Deserialization(format!("Invalid image response: {}", e)))?;

        tracing::info!(images = response.data.len(), "Image generation completed");
        Ok(response)
    }
}
