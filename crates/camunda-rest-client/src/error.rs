//! Error types for the Camunda REST client

use std::fmt;

use reqwest::StatusCode;
use serde::Deserialize;
use thiserror::Error;

/// Error body returned by the engine for failed requests
///
/// The engine reports failures as `{"type": ..., "message": ...}`
/// where `type` names the Java exception class.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ErrorDetails {
    #[serde(rename = "type")]
    pub error_type: Option<String>,
    pub message: Option<String>,
}

impl fmt::Display for ErrorDetails {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match (&self.error_type, &self.message) {
            (Some(error_type), Some(message)) => write!(f, "{error_type}: {message}"),
            (Some(error_type), None) => write!(f, "{error_type}"),
            (None, Some(message)) => write!(f, "{message}"),
            (None, None) => write!(f, "no details"),
        }
    }
}

/// Errors that can occur when talking to the engine
#[derive(Debug, Error)]
pub enum CamundaError {
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("JSON serialization error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("URL parsing error: {0}")]
    Url(#[from] url::ParseError),

    #[error("API contract error: {0}")]
    Contract(#[from] camunda_api_contract::ApiContractError),

    #[error("authentication error: {0}")]
    Auth(String),

    #[error("bad request: {0}")]
    BadRequest(ErrorDetails),

    #[error("resource not found: {0}")]
    NotFound(ErrorDetails),

    #[error("server returned error status {status}: {details}")]
    Server {
        status: StatusCode,
        details: ErrorDetails,
    },

    #[error("response body is not valid JSON: {0}")]
    MalformedEntity(String),

    #[error("response JSON does not match the expected entity: {0}")]
    InvalidEntity(#[source] serde_json::Error),
}

/// Result type alias for Camunda client operations
pub type CamundaResult<T> = Result<T, CamundaError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_details_parse_the_engine_shape() {
        let details: ErrorDetails = serde_json::from_str(
            r#"{"type": "InvalidRequestException", "message": "Deployment with id 'x' does not exist"}"#,
        )
        .unwrap();

        assert_eq!(
            details.to_string(),
            "InvalidRequestException: Deployment with id 'x' does not exist"
        );
    }

    #[test]
    fn error_details_tolerate_missing_fields() {
        let details: ErrorDetails = serde_json::from_str("{}").unwrap();
        assert_eq!(details.to_string(), "no details");
    }
}
