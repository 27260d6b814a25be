//! Response types for the request/response pattern

use serde::{Deserialize, Serialize};

// =============================================================================
// Response Result
// =============================================================================

/// Result of a request operation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum ResponseResult {
    /// Operation succeeded
    Success {
        /// Optional data payload (varies by request type)
        #[serde(default, skip_serializing_if = "Option::is_none")]
        data: Option<serde_json::Value>,
    },
    /// Operation failed
    Error {
        /// Error classification code
        code: ErrorCode,
        /// Human-readable error message
        message: String,
    },
    /// Unknown response type for forward compatibility
    #[serde(other)]
    Unknown,
}

impl ResponseResult {
    /// Create a success response with data
    pub fn success<T: Serialize>(data: T) -> Self {
        ResponseResult::Success {
            data: Some(serde_json::to_value(data).unwrap_or_default()),
        }
    }

    /// Create a success response without data
    pub fn success_empty() -> Self {
        ResponseResult::Success { data: None }
    }

    /// Create an error response
    pub fn error(code: ErrorCode, message: impl Into<String>) -> Self {
        ResponseResult::Error {
            code,
            message: message.into(),
        }
    }

    pub fn is_success(&self) -> bool {
        matches!(self, ResponseResult::Success { .. })
    }

    pub fn is_error(&self) -> bool {
        matches!(self, ResponseResult::Error { .. })
    }

    /// Error code of a failed response.
    pub fn error_code(&self) -> Option<ErrorCode> {
        match self {
            ResponseResult::Error { code, .. } => Some(*code),
            _ => None,
        }
    }

    /// Data payload of a successful response.
    pub fn data(&self) -> Option<&serde_json::Value> {
        match self {
            ResponseResult::Success { data } => data.as_ref(),
            _ => None,
        }
    }
}

// =============================================================================
// Error Codes
// =============================================================================

/// Error classification codes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorCode {
    /// Request was malformed (bad ids, unknown request type)
    BadRequest,
    /// Requested record or item not found
    NotFound,
    /// Operation conflicts with current state (locked items)
    Conflict,
    /// Request data failed validation
    ValidationError,
    /// Store or roll failure
    InternalError,

    /// Unknown variant for forward compatibility
    #[serde(other)]
    Unknown,
}
