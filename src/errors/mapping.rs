use crate::errors::{AuthenticationError, ImageGenError, ServerError};
use serde::{Deserialize, Serialize};

#[derive(Debug, Deserialize, Serialize)]
pub struct ApiErrorResponse {
    pub error: ApiErrorDetail,
}

#[derive(Debug, Deserialize, Serialize)]
pub struct ApiErrorDetail {
    pub message: String,
    #[serde(rename = "type")]
    pub error_type: Option<String>,
    pub code: Option<String>,
    pub param: Option<String>,
}

pub struct ErrorMapper;

impl ErrorMapper {
    /// Maps HTTP status code and error response to ImageGenError
    pub fn map_status_code(
        status_code: u16,
        error_response: Option<ApiErrorResponse>,
    ) -> ImageGenError {
        let error_detail = error_response.map(|r| r.error);
        let message = error_detail
            .as_ref()
            .map(|d| d.message.clone())
            .unwrap_or_else(|| format!("HTTP error: {}", status_code));
        let error_type = error_detail.as_ref().and_then(|d| d.error_type.clone());
        let error_code = error_detail.as_ref().and_then(|d| d.code.clone());

        match status_code {
            401 => {
                if message.contains("expired") {
                    ImageGenError::Authentication(AuthenticationError::ExpiredApiKey(message))
                } else {
                    ImageGenError::Authentication(AuthenticationError::InvalidApiKey(message))
                }
            }
            403 => {
                if message.contains("permission") {
                    ImageGenError::Authentication(AuthenticationError::InsufficientPermissions(
                        message,
                    ))
                } else {
                    ImageGenError::Authentication(AuthenticationError::Unauthorized(message))
                }
            }
            500 => ImageGenError::Server(ServerError::InternalError(message)),
            502 => ImageGenError::Server(ServerError::BadGateway(message)),
            503 => ImageGenError::Server(ServerError::ServiceUnavailable(message)),
            504 => ImageGenError::Server(ServerError::GatewayTimeout(message)),
            _ => ImageGenError::Request {
                status_code,
                message,
                error_type,
                error_code,
            },
        }
    }

    /// Parses error response from JSON body
    pub fn parse_error_response(body: &[u8]) -> Option<ApiErrorResponse> {
        serde_json::from_slice(body).ok()
    }

    /// Creates an error from response components
    pub fn from_response(status: u16, body: &[u8]) -> ImageGenError {
        Self::map_status_code(status, Self::parse_error_response(body))
    }
}
