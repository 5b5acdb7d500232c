mod service;
mod types;
mod validation;


pub use service::{ImageService, ImageServiceImpl};
pub use types::{
    ImageData, ImageGenerationRequest, ImageResponse, ImageResponseFormat, ImageSize,
    DEFAULT_MODEL, MAX_IMAGES, MIN_IMAGES,
};
pub use validation::ImageRequestValidator;
