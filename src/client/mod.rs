mod client_impl;
mod config;
mod factory;

pub use client_impl::ImageGenClientImpl;
pub use config::{parse_base_url, ImageGenConfig, DEFAULT_BASE_URL};
pub use factory::ImageGenClientBuilder;

use crate::services::images::ImageService;
use crate::transport::HttpTransport;
use std::sync::Arc;

pub trait ImageGenClient: Send + Sync {
    fn config(&self) -> &ImageGenConfig;
    fn images(&self) -> &dyn ImageService;

    /// Transport used for fetching generated images.
    fn transport(&self) -> Arc<dyn HttpTransport>;
}
