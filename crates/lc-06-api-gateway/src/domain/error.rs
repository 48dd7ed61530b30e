//! API Gateway error types with JSON-RPC 2.0 error codes.
//!
//! Codes follow the Ethereum JSON-RPC convention (EIP-1474).

use lc_05_state_transition::{ErrorKind, TransitionError};
use serde::{Deserialize, Serialize};
use shared_types::EncodingError;
use std::fmt;

/// Standard JSON-RPC 2.0 error codes
pub mod codes {
    // JSON-RPC 2.0 standard errors (-32700 to -32600)
    pub const PARSE_ERROR: i32 = -32700;
    pub const INVALID_REQUEST: i32 = -32600;
    pub const METHOD_NOT_FOUND: i32 = -32601;
    pub const INVALID_PARAMS: i32 = -32602;
    pub const INTERNAL_ERROR: i32 = -32603;

    // Server errors (-32000 to -32099)
    pub const RESOURCE_NOT_FOUND: i32 = -32001;
    pub const RESOURCE_UNAVAILABLE: i32 = -32002;
    pub const TRANSACTION_REJECTED: i32 = -32003;
}

pub type ApiResult<T> = Result<T, ApiError>;

/// API error with JSON-RPC code
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApiError {
    pub code: i32,
    pub message: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data: Option<serde_json::Value>,
}

impl ApiError {
    pub fn new(code: i32, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
            data: None,
        }
    }

    pub fn with_data(code: i32, message: impl Into<String>, data: serde_json::Value) -> Self {
        Self {
            code,
            message: message.into(),
            data: Some(data),
        }
    }

    /// Parse error - invalid JSON
    pub fn parse_error(details: impl Into<String>) -> Self {
        Self::new(
            codes::PARSE_ERROR,
            format!("Parse error: {}", details.into()),
        )
    }

    pub fn invalid_request(details: impl Into<String>) -> Self {
        Self::new(
            codes::INVALID_REQUEST,
            format!("Invalid request: {}", details.into()),
        )
    }

    pub fn method_not_found(method: &str) -> Self {
        Self::new(
            codes::METHOD_NOT_FOUND,
            format!("Method not found: {}", method),
        )
    }

    pub fn invalid_params(details: impl Into<String>) -> Self {
        Self::new(
            codes::INVALID_PARAMS,
            format!("Invalid params: {}", details.into()),
        )
    }

    pub fn internal(details: impl Into<String>) -> Self {
        Self::new(
            codes::INTERNAL_ERROR,
            format!("Internal error: {}", details.into()),
        )
    }

    /// Resource not found (block, transaction, etc.)
    pub fn resource_not_found(resource: impl Into<String>) -> Self {
        Self::new(
            codes::RESOURCE_NOT_FOUND,
            format!("Resource not found: {}", resource.into()),
        )
    }

    pub fn resource_unavailable(details: impl Into<String>) -> Self {
        Self::new(
            codes::RESOURCE_UNAVAILABLE,
            format!("Resource unavailable: {}", details.into()),
        )
    }

    pub fn transaction_rejected(reason: impl Into<String>) -> Self {
        Self::new(
            codes::TRANSACTION_REJECTED,
            format!("Transaction rejected: {}", reason.into()),
        )
    }
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {}", self.code, self.message)
    }
}

impl std::error::Error for ApiError {}

// Conversions from domain errors

impl From<TransitionError> for ApiError {
    fn from(e: TransitionError) -> Self {
        let kind = e.kind();
        let base = match kind {
            ErrorKind::InvalidSignature
            | ErrorKind::InvalidNonce
            | ErrorKind::InsufficientBalance
            | ErrorKind::BalanceOverflow => ApiError::transaction_rejected(e.to_string()),
            ErrorKind::NotFound => ApiError::resource_not_found(e.to_string()),
            ErrorKind::NotInitialized => ApiError::resource_unavailable(e.to_string()),
            ErrorKind::BrokenLinkage | ErrorKind::AlreadyInitialized => {
                ApiError::internal(e.to_string())
            }
        };
        ApiError::with_data(
            base.code,
            base.message,
            serde_json::json!({
                "kind": format!("{:?}", kind),
                "retryable": e.is_retryable(),
            }),
        )
    }
}

impl From<EncodingError> for ApiError {
    fn from(e: EncodingError) -> Self {
        ApiError::invalid_params(e.to_string())
    }
}

impl From<serde_json::Error> for ApiError {
    fn from(e: serde_json::Error) -> Self {
        if e.is_syntax() || e.is_eof() {
            ApiError::parse_error(e.to_string())
        } else {
            ApiError::invalid_request(e.to_string())
        }
    }
}
