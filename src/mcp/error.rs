//! Error types for the leave manager MCP implementation.
//!
//! Domain outcomes such as "employee not found" or "cannot take a leave" are
//! ordinary tool results. `LeaveError` only covers the cases that must reach
//! the client as MCP protocol errors, and converts into RMCP's `ErrorData`.

use rmcp::ErrorData;
use rmcp::model::ErrorCode;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum LeaveError {
    #[error("Invalid parameters: {0}")]
    InvalidParams(String),

    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("Resource not found: {0}")]
    ResourceNotFound(String),

    #[error("Leave ledger is unavailable after a failed request")]
    LedgerUnavailable,

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl From<LeaveError> for ErrorData {
    fn from(err: LeaveError) -> Self {
        match err {
            LeaveError::InvalidParams(msg) => Self::new(ErrorCode::INVALID_PARAMS, msg, None),
            LeaveError::InvalidConfig(msg) => Self::new(ErrorCode::INTERNAL_ERROR, msg, None),
            LeaveError::ResourceNotFound(uri) => Self::new(
                ErrorCode::RESOURCE_NOT_FOUND,
                format!("Resource not found: {uri}"),
                Some(serde_json::json!({ "uri": uri })),
            ),
            err @ LeaveError::LedgerUnavailable => {
                Self::new(ErrorCode::INTERNAL_ERROR, err.to_string(), None)
            }
            LeaveError::Serialization(e) => {
                Self::new(ErrorCode::INTERNAL_ERROR, e.to_string(), None)
            }
        }
    }
}
