use crate::errors::categories::{
    AuthenticationError, ConfigurationError, DecodeError, DownloadError, NetworkError,
    ServerError, ValidationError,
};
use std::path::PathBuf;
use thiserror::Error;

pub type ImageGenResult<T> = Result<T, ImageGenError>;

#[derive(Error, Debug)]
pub enum ImageGenError {
    #[error("Configuration error: {0}")]
    Configuration(#[from] ConfigurationError),

    #[error("I/O error on {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Authentication error: {0}")]
    Authentication(#[from] AuthenticationError),

    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),

    #[error("Network error: {0}")]
    Network(#[from] NetworkError),

    #[error("Server error: {0}")]
    Server(#[from] ServerError),

    #[error("Request error: {status_code} - {message}")]
    Request {
        status_code: u16,
        message: String,
        error_type: Option<String>,
        error_code: Option<String>,
    },

    #[error("Download error: {0}")]
    Download(#[from] DownloadError),

    #[error("Decode error: {0}")]
    Decode(#[from] DecodeError),

    #[error("Render error: {0}")]
    Render(String),

    #[error("Serialization error: {0}")]
    Serialization(String),

    #[error("Deserialization error: {0}")]
    Deserialization(String),

    #[error("Cancelled by user")]
    Cancelled,
}

impl ImageGenError {
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        ImageGenError::Io {
            path: path.into(),
            source,
        }
    }

    pub fn is_authentication_error(&self) -> bool {
        matches!(self, ImageGenError::Authentication(_))
    }

    pub fn is_validation_error(&self) -> bool {
        matches!(self, ImageGenError::Validation(_))
    }

    /// True for failures reported by the image API itself (non-auth, non-validation).
    pub fn is_api_error(&self) -> bool {
        matches!(self, ImageGenError::Request { .. } | ImageGenError::Server(_))
    }

    pub fn is_cancelled(&self) -> bool {
        matches!(self, ImageGenError::Cancelled)
    }

    pub fn error_code(&self) -> Option<&str> {
        match self {
            ImageGenError::Request { error_code, .. } => error_code.as_deref(),
            _ => None,
        }
    }

    pub fn status_code(&self) -> Option<u16> {
        match self {
            ImageGenError::Request { status_code, .. } => Some(*status_code),
            ImageGenError::Authentication(_) => Some(401),
            ImageGenError::Server(ServerError::InternalError(_)) => Some(500),
            ImageGenError::Server(ServerError::ServiceUnavailable(_)) => Some(503),
            _ => None,
        }
    }
}

impl From<reqwest::Error> for ImageGenError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            ImageGenError::Network(NetworkError::ConnectionTimeout(err.to_string()))
        } else if err.is_connect() {
            ImageGenError::Network(NetworkError::ConnectionFailed(err.to_string()))
        } else {
            ImageGenError::Network(NetworkError::RequestFailed(err.to_string()))
        }
    }
}

impl From<serde_json::Error> for ImageGenError {
    fn from(err: serde_json::Error) -> Self {
        if err.is_data() || err.is_syntax() || err.is_eof() {
            ImageGenError::Deserialization(err.to_string())
        } else {
            ImageGenError::Serialization(err.to_string())
        }
    }
}

impl From<url::ParseError> for ImageGenError {
    fn from(err: url::ParseError) -> Self {
        ImageGenError::Configuration(ConfigurationError::InvalidBaseUrl(err.to_string()))
    }
}
