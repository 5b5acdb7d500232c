use crate::auth::{ApiKeyProvider, AuthProvider};
use crate::client::ImageGenConfig;
use crate::errors::{AuthenticationError, ImageGenError, ImageGenResult};
use async_trait::async_trait;
use http::HeaderMap;
use std::sync::Arc;

/// Trait for managing authentication in requests
#[async_trait]
pub trait AuthManager: Send + Sync {
    /// Applies authentication headers to the request
    async fn apply_auth(&self, headers: &mut HeaderMap) -> ImageGenResult<()>;

    /// Validates the authentication configuration
    fn validate(&self) -> ImageGenResult<()>;
}

/// Bearer key plus the optional `OpenAI-Organization` header.
pub struct OpenAIAuthManager {
    provider: Arc<dyn AuthProvider>,
    organization_id: Option<String>,
}

impl OpenAIAuthManager {
    /// Creates a new OpenAIAuthManager from configuration
    pub fn new(config: &ImageGenConfig) -> Self {
        Self {
            provider: Arc::new(ApiKeyProvider::from_secret(config.api_key.clone())),
            organization_id: config.organization_id.clone(),
        }
    }
}

#[async_trait]
impl AuthManager for OpenAIAuthManager {
    async fn apply_auth(&self, headers: &mut HeaderMap) -> ImageGenResult<()> {
        self.provider.authenticate(headers).await?;

        if let Some(org_id) = &self.organization_id {
            headers.insert(
                "OpenAI-Organization",
                org_id.parse().map_err(|_| {
                    ImageGenError::Authentication(AuthenticationError::InvalidOrganizationId(
                        "Invalid organization ID format".to_string(),
                    ))
                })?,
            );
        }

        Ok(())
    }

    fn validate(&self) -> ImageGenResult<()> {
        if !self.provider.is_valid() {
            return Err(ImageGenError::Authentication(
                AuthenticationError::InvalidApiKey("API key validation failed".to_string()),
            ));
        }
        Ok(())
    }
}
