//! Mock authentication manager for testing

use crate::auth::AuthManager;
use crate::errors::{AuthenticationError, ImageGenError, ImageGenResult};
use async_trait::async_trait;
use http::HeaderMap;
use std::sync::{Arc, Mutex};

#[derive(Clone, Default)]
pub struct MockAuthManager {
    error: Option<String>,
    calls: Arc<Mutex<usize>>,
}

impl MockAuthManager {
    pub fn new() -> Self {
        Self::default()
    }

    /// Fail every `apply_auth` call with an invalid-key error
    pub fn with_error(mut self, message: impl Into<String>) -> Self {
        self.error = Some(message.into());
        self
    }

    pub fn call_count(&self) -> usize {
        *self.calls.lock().unwrap()
    }
}

#[async_trait]
impl AuthManager for MockAuthManager {
    async fn apply_auth(&self, headers: &mut HeaderMap) -> ImageGenResult<()> {
        *self.calls.lock().unwrap() += 1;

        if let Some(message) = &self.error {
            return Err(ImageGenError::Authentication(
                AuthenticationError::InvalidApiKey(message.clone()),
            ));
        }

        headers.insert(
            http::header::AUTHORIZATION,
            http::HeaderValue::from_static("Bearer sk-mock-key"),
        );
        Ok(())
    }

    fn validate(&self) -> ImageGenResult<()> {
        match &self.error {
            Some(message) => Err(ImageGenError::Authentication(
                AuthenticationError::InvalidApiKey(message.clone()),
            )),
            None => Ok(()),
        }
    }
}
