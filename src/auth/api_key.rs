use crate::auth::AuthProvider;
use crate::errors::{AuthenticationError, ConfigurationError, ImageGenError, ImageGenResult};
use async_trait::async_trait;
use http::header::AUTHORIZATION;
use http::{HeaderMap, HeaderValue};
use secrecy::{ExposeSecret, SecretString};

/// API key provider for bearer authentication
pub struct ApiKeyProvider {
    api_key: SecretString,
}

impl ApiKeyProvider {
    /// Creates a new ApiKeyProvider from a plain string
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: SecretString::new(api_key.into()),
        }
    }

    /// Creates a new ApiKeyProvider from an existing SecretString
    pub fn from_secret(api_key: SecretString) -> Self {
        Self { api_key }
    }

    /// Validates the API key format
    pub fn validate(&self) -> ImageGenResult<()> {
        let key = self.api_key.expose_secret();

        if key.is_empty() {
            return Err(ImageGenError::Configuration(
                ConfigurationError::MissingApiKey("API key is empty".to_string()),
            ));
        }

        if !Self::validate_key_format(key) {
            return Err(ImageGenError::Configuration(
                ConfigurationError::InvalidApiKeyFormat(
                    "API key must not contain whitespace or control characters".to_string(),
                ),
            ));
        }

        if !key.starts_with("sk-") {
            tracing::warn!("API key does not match expected OpenAI format (sk-*)");
        }

        Ok(())
    }

    fn validate_key_format(key: &str) -> bool {
        !key.is_empty() && !key.chars().any(|c| c.is_whitespace() || c.is_control())
    }
}

#[async_trait]
impl AuthProvider for ApiKeyProvider {
    async fn authenticate(&self, headers: &mut HeaderMap) -> ImageGenResult<()> {
        let api_key = self.api_key.expose_secret();

        if !Self::validate_key_format(api_key) {
            return Err(ImageGenError::Authentication(
                AuthenticationError::InvalidApiKey(
                    "API key is empty or contains whitespace".to_string(),
                ),
            ));
        }

        let mut value = HeaderValue::from_str(&format!("Bearer {}", api_key)).map_err(|_| {
            ImageGenError::Authentication(AuthenticationError::InvalidApiKey(
                "Failed to create Authorization header".to_string(),
            ))
        })?;
        value.set_sensitive(true);
        headers.insert(AUTHORIZATION, value);

        Ok(())
    }

    fn is_valid(&self) -> bool {
        Self::validate_key_format(self.api_key.expose_secret())
    }
}
