//! Contract-level error types

use thiserror::Error;

/// Errors raised while validating or decoding API contract types
#[derive(Debug, Error)]
pub enum ApiContractError {
    #[error("request validation failed: {0}")]
    Validation(#[from] validator::ValidationErrors),

    #[error("unknown {kind} code {value}")]
    UnknownCode { kind: &'static str, value: i32 },

    #[error("a deployment needs at least one resource file")]
    EmptyDeployment,
}
