mod http_transport;
mod response_parser;

pub use http_transport::ReqwestTransport;
pub use response_parser::ResponseParser;

use crate::errors::ImageGenResult;
use async_trait::async_trait;
use bytes::Bytes;
use http::{HeaderMap, Method};

#[async_trait]
pub trait HttpTransport: Send + Sync {
    /// Sends a JSON request to `path` under the API base URL.
    async fn request_json(
        &self,
        method: Method,
        path: &str,
        body: Option<serde_json::Value>,
        headers: Option<HeaderMap>,
    ) -> ImageGenResult<serde_json::Value>;

    /// Fetches an absolute URL without API credentials.
    async fn download(&self, url: &str) -> ImageGenResult<Bytes>;
}
