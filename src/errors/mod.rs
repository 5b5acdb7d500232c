mod categories;
mod error;
mod mapping;

pub use categories::{
    AuthenticationError, ConfigurationError, DecodeError, DownloadError, NetworkError,
    ServerError, ValidationError,
};
pub use error::{ImageGenError, ImageGenResult};
pub use mapping::{ApiErrorDetail, ApiErrorResponse, ErrorMapper};
