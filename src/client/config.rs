use crate::auth::{load_api_key, ApiKeyProvider};
use crate::errors::{ConfigurationError, ImageGenError, ImageGenResult};
use secrecy::{ExposeSecret, SecretString};
use std::path::Path;
use std::time::Duration;
use url::Url;

pub const DEFAULT_BASE_URL: &str = "https://api.openai.com/v1";

#[derive(Debug, Clone)]
pub struct ImageGenConfig {
    pub api_key: SecretString,

    pub base_url: Url,

    pub organization_id: Option<String>,

    /// Applies to both the generation call and image downloads. `None` waits indefinitely.
    pub timeout: Option<Duration>,

    pub user_agent: String,
}

impl ImageGenConfig {
    /// Creates a new ImageGenConfig with the given API key
    pub fn new(api_key: impl Into<String>) -> Self {
        Self::from_secret(SecretString::new(api_key.into()))
    }

    pub fn from_secret(api_key: SecretString) -> Self {
        Self {
            api_key,
            base_url: default_base_url(),
            organization_id: None,
            timeout: None,
            user_agent: default_user_agent(),
        }
    }

    /// Creates a config whose API key is read from a key file
    pub fn from_key_file(path: impl AsRef<Path>) -> ImageGenResult<Self> {
        Ok(Self::from_secret(load_api_key(path)?))
    }

    /// Overlays settings from environment variables
    ///
    /// Reads the following environment variables:
    /// - OPENAI_BASE_URL (optional, defaults to https://api.openai.com/v1)
    /// - OPENAI_ORGANIZATION_ID (optional)
    pub fn apply_env(mut self) -> ImageGenResult<Self> {
        if let Ok(base_url) = std::env::var("OPENAI_BASE_URL") {
            self.base_url = parse_base_url(&base_url)?;
        }

        if let Ok(org_id) = std::env::var("OPENAI_ORGANIZATION_ID") {
            self.organization_id = Some(org_id);
        }

        Ok(self)
    }

    /// Validates the configuration
    pub fn validate(&self) -> ImageGenResult<()> {
        ApiKeyProvider::from_secret(self.api_key.clone()).validate()?;

        if matches!(self.timeout, Some(t) if t.is_zero()) {
            return Err(ImageGenError::Configuration(
                ConfigurationError::InvalidTimeout(
                    "Timeout must be greater than 0".to_string(),
                ),
            ));
        }

        if !matches!(self.base_url.scheme(), "http" | "https") {
            return Err(ImageGenError::Configuration(
                ConfigurationError::InvalidBaseUrl(format!(
                    "unsupported scheme '{}'",
                    self.base_url.scheme()
                )),
            ));
        }

        Ok(())
    }

    pub fn with_base_url(mut self, base_url: Url) -> Self {
        self.base_url = base_url;
        self
    }

    pub fn with_organization_id(mut self, org_id: impl Into<String>) -> Self {
        self.organization_id = Some(org_id.into());
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    pub fn api_key(&self) -> &str {
        self.api_key.expose_secret()
    }
}

pub fn parse_base_url(raw: &str) -> ImageGenResult<Url> {
    Url::parse(raw).map_err(|e| {
        ImageGenError::Configuration(ConfigurationError::InvalidBaseUrl(format!(
            "{}: {}",
            raw, e
        )))
    })
}

fn default_base_url() -> Url {
    Url::parse(DEFAULT_BASE_URL).expect("default base URL is valid")
}

fn default_user_agent() -> String {
    format!("openai-imagegen/{}", env!("CARGO_PKG_VERSION"))
}
