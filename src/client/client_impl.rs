use crate::auth::AuthManager;
use crate::client::{ImageGenClient, ImageGenConfig};
use crate::services::images::{ImageService, ImageServiceImpl};
use crate::transport::HttpTransport;
use std::sync::Arc;

pub struct ImageGenClientImpl {
    config: ImageGenConfig,
    transport: Arc<dyn HttpTransport>,
    images_service: ImageServiceImpl,
}

impl ImageGenClientImpl {
    pub fn new(
        config: ImageGenConfig,
        transport: Arc<dyn HttpTransport>,
        auth_manager: Arc<dyn AuthManager>,
    ) -> Self {
        let images_service = ImageServiceImpl::new(transport.clone(), auth_manager);

        Self {
            config,
            transport,
            images_service,
        }
    }
}

impl ImageGenClient for ImageGenClientImpl {
    fn config(&self) -> &ImageGenConfig {
        &self.config
    }

    fn images(&self) -> &dyn ImageService {
        &self.images_service
    }

    fn transport(&self) -> Arc<dyn HttpTransport> {
        self.transport.clone()
    }
}
