use crate::auth::AuthManager;
use crate::client::{ImageGenClient, ImageGenClientImpl, ImageGenConfig};
use crate::errors::{ConfigurationError, ImageGenError, ImageGenResult};
use crate::transport::HttpTransport;
use std::sync::Arc;

#[derive(Default)]
pub struct ImageGenClientBuilder {
    config: Option<ImageGenConfig>,
    transport: Option<Arc<dyn HttpTransport>>,
    auth_manager: Option<Arc<dyn AuthManager>>,
}

impl ImageGenClientBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(mut self, config: ImageGenConfig) -> Self {
        self.config = Some(config);
        self
    }

    pub fn with_api_key(mut self, api_key: impl Into<String>) -> Self {
        self.config = Some(ImageGenConfig::new(api_key));
        self
    }

    pub fn with_transport(mut self, transport: Arc<dyn HttpTransport>) -> Self {
        self.transport = Some(transport);
        self
    }

    pub fn with_auth_manager(mut self, auth_manager: Arc<dyn AuthManager>) -> Self {
        self.auth_manager = Some(auth_manager);
        self
    }

    pub fn build(self) -> ImageGenResult<Arc<dyn ImageGenClient>> {
        let config = self.config.ok_or_else(|| {
            ImageGenError::Configuration(ConfigurationError::MissingApiKey(
                "API key must be provided".to_string(),
            ))
        })?;
        config.validate()?;

        let transport = match self.transport {
            Some(transport) => transport,
            None => Arc::new(crate::transport::ReqwestTransport::new(&config)?),
        };

        let auth_manager = self
            .auth_manager
            .unwrap_or_else(|| Arc::new(crate::auth::OpenAIAuthManager::new(&config)));
        auth_manager.validate()?;

        Ok(Arc::new(ImageGenClientImpl::new(
            config,
            transport,
            auth_manager,
        )))
    }
}
