// --- File: crates/slotbook_api/src/error.rs ---
use slotbook_common::{external_service_error, ApiError, SlotbookError};
use thiserror::Error;

/// Errors raised while talking to the booking API over HTTP.
#[derive(Error, Debug)]
pub enum ClientError {
    /// Error occurred while sending the request or reading the body
    #[error("Booking API request failed: {0}")]
    RequestError(#[from] reqwest::Error),

    /// The API answered with a non-success HTTP status
    #[error("Booking API returned status {status_code}")]
    StatusError { status_code: u16 },

    /// Error parsing the response envelope
    #[error("Failed to parse booking API response: {0}")]
    ParseError(#[from] serde_json::Error),

    /// The configured base URL cannot be used to build endpoint URLs
    #[error("Invalid booking API base URL: {0}")]
    InvalidBaseUrl(String),
}

/// The UI only distinguishes transport-class failures from rejections, which
/// are produced from the envelope itself.
impl From<ClientError> for ApiError {
    fn from(err: ClientError) -> Self {
        match err {
            ClientError::RequestError(e) => ApiError::Transport(e.to_string()),
            ClientError::StatusError { status_code } => ApiError::Status(status_code),
            ClientError::ParseError(e) => ApiError::Decode(e.to_string()),
            ClientError::InvalidBaseUrl(url) => {
                ApiError::Transport(format!("invalid base URL {url}"))
            }
        }
    }
}

impl From<ClientError> for SlotbookError {
    fn from(err: ClientError) -> Self {
        match err {
            ClientError::RequestError(e) => {
                SlotbookError::HttpError(format!("Booking API request error: {}", e))
            }
            ClientError::StatusError { status_code } => {
                external_service_error("booking API", format!("Status: {}", status_code))
            }
            ClientError::ParseError(e) => {
                SlotbookError::ParseError(format!("Booking API response parse error: {}", e))
            }
            ClientError::InvalidBaseUrl(url) => {
                SlotbookError::ConfigError(format!("Invalid booking API base URL: {}", url))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_error_maps_to_status_api_error() {
        let err: ApiError = ClientError::StatusError { status_code: 503 }.into();
        assert_eq!(err, ApiError::Status(503));
        assert!(!err.is_rejection());
    }

    #[test]
    fn test_invalid_base_url_is_a_config_error() {
        let err: SlotbookError = ClientError::InvalidBaseUrl("nope".into()).into();
        assert!(matches!(err, SlotbookError::ConfigError(_)));
    }

    #[test]
    fn test_upstream_failures_are_not_rejections() {
        let err: SlotbookError = ClientError::StatusError { status_code: 404 }.into();
        assert!(matches!(err, SlotbookError::ExternalServiceError { .. }));

        let parse = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let err: ApiError = ClientError::ParseError(parse).into();
        assert!(matches!(err, ApiError::Decode(_)));
        assert!(!err.is_rejection());
    }
}
