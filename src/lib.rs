pub mod auth;
pub mod client;
pub mod errors;
pub mod pipeline;
pub mod prompt;
pub mod services;
pub mod transport;

#[cfg(test)]
pub mod mocks;
#[cfg(test)]
pub mod fixtures;

pub use client::{ImageGenClient, ImageGenClientBuilder, ImageGenClientImpl, ImageGenConfig};
pub use errors::{ImageGenError, ImageGenResult};

pub use pipeline::{FetchAndRender, FetchedImage, NullRenderer, Renderer, TerminalRenderer};
pub use prompt::{GenerationParameters, ParameterCollector, Presets};
pub use services::images::{
    ImageData, ImageGenerationRequest, ImageResponse, ImageResponseFormat, ImageService,
    ImageSize,
};

pub mod prelude {
    pub use crate::client::{ImageGenClient, ImageGenClientBuilder, ImageGenConfig};
    pub use crate::errors::{ImageGenError, ImageGenResult};
    pub use crate::pipeline::{FetchAndRender, NullRenderer, Renderer, TerminalRenderer};
    pub use crate::prompt::{GenerationParameters, ParameterCollector, Presets};
    pub use crate::services::images::{ImageGenerationRequest, ImageService, ImageSize};
}
