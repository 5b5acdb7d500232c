//! Error response fixtures

use serde_json::json;

/// Sample 401 authentication error response
pub fn error_401_invalid_api_key() -> serde_json::Value {
    json!({
        "error": {
            "message": "Incorrect API key provided: sk-bad. You can find your API key at https://platform.openai.com/account/api-keys.",
            "type": "invalid_request_error",
            "param": null,
            "code": "invalid_api_key"
        }
    })
}

/// Sample 400 content policy rejection
pub fn error_400_content_policy_violation() -> serde_json::Value {
    json!({
        "error": {
            "message": "Your request was rejected as a result of our safety system.",
            "type": "invalid_request_error",
            "param": "prompt",
            "code": "content_policy_violation"
        }
    })
}

/// Sample 500 internal server error response
pub fn error_500_internal_server_error() -> serde_json::Value {
    json!({
        "error": {
            "message": "The server had an error while processing your request. Sorry about that!",
            "type": "server_error",
            "param": null,
            "code": null
        }
    })
}
