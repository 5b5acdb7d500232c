mod api_key;
mod auth_manager;
mod credential_file;

pub use api_key::ApiKeyProvider;
pub use auth_manager::{AuthManager, OpenAIAuthManager};
pub use credential_file::{load_api_key, DEFAULT_KEY_FILE};

use crate::errors::ImageGenResult;
use async_trait::async_trait;
use http::HeaderMap;

/// Trait for authentication providers
#[async_trait]
pub trait AuthProvider: Send + Sync {
    /// Authenticates the request by adding appropriate headers
    async fn authenticate(&self, headers: &mut HeaderMap) -> ImageGenResult<()>;

    /// Checks if the authentication credentials are valid
    fn is_valid(&self) -> bool;
}
