use thiserror::Error;

#[derive(Error, Debug, Clone)]
pub enum ConfigurationError {
    #[error("Missing API key: {0}")]
    MissingApiKey(String),

    #[error("Invalid API key format: {0}")]
    InvalidApiKeyFormat(String),

    #[error("Invalid base URL: {0}")]
    InvalidBaseUrl(String),

    #[error("Invalid timeout: {0}")]
    InvalidTimeout(String),

    #[error("Invalid output directory: {0}")]
    InvalidOutputDir(String),
}

#[derive(Error, Debug, Clone)]
pub enum AuthenticationError {
    #[error("Invalid API key: {0}")]
    InvalidApiKey(String),

    #[error("Expired API key: {0}")]
    ExpiredApiKey(String),

    #[error("Insufficient permissions: {0}")]
    InsufficientPermissions(String),

    #[error("Invalid organization ID: {0}")]
    InvalidOrganizationId(String),

    #[error("Unauthorized: {0}")]
    Unauthorized(String),
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Missing required field: {0}")]
    MissingRequiredField(String),

    #[error("Invalid request: {0}")]
    InvalidRequest(String),

    #[error("Value out of range: {field} must be between {min} and {max}, got {value}")]
    ValueOutOfRange {
        field: String,
        min: String,
        max: String,
        value: String,
    },

    #[error("Unsupported {field}: {value} (expected one of {allowed})")]
    UnsupportedValue {
        field: String,
        value: String,
        allowed: String,
    },

    #[error("No valid {field} after {attempts} attempts")]
    AttemptsExhausted { field: String, attempts: u32 },
}

#[derive(Error, Debug, Clone)]
pub enum NetworkError {
    #[error("Connection failed: {0}")]
    ConnectionFailed(String),

    #[error("Request failed: {0}")]
    RequestFailed(String),

    #[error("Connection timeout: {0}")]
    ConnectionTimeout(String),
}

#[derive(Error, Debug, Clone)]
pub enum ServerError {
    #[error("Internal server error: {0}")]
    InternalError(String),

    #[error("Service unavailable: {0}")]
    ServiceUnavailable(String),

    #[error("Bad gateway: {0}")]
    BadGateway(String),

    #[error("Gateway timeout: {0}")]
    GatewayTimeout(String),
}

#[derive(Error, Debug, Clone)]
pub enum DownloadError {
    #[error("Image URL unreachable: {url} ({reason})")]
    Unreachable { url: String, reason: String },

    #[error("Image download failed: {url} returned HTTP {status}")]
    HttpStatus { url: String, status: u16 },

    #[error("Invalid image URL: {0}")]
    InvalidUrl(String),

    #[error("Failed to write {path}: {reason}")]
    WriteFailed { path: String, reason: String },
}

#[derive(Error, Debug, Clone)]
pub enum DecodeError {
    #[error("{path} is not a valid image: {reason}")]
    InvalidImage { path: String, reason: String },

    #[error("{path} is empty")]
    Empty { path: String },
}
