//! Mapping of sheet errors to wire responses.
//!
//! Internal details (store messages) are logged server-side and replaced by a
//! generic message for the client.

use gearsheet_shared::{ErrorCode, ResponseResult};

use crate::infrastructure::ports::RollError;
use crate::use_cases::SheetError;

pub(super) fn error_response(err: &SheetError, request_type: &str) -> ResponseResult {
    match err {
        SheetError::NotFound { .. } => {
            tracing::warn!(error = %err, request_type, "Sheet request target not found");
            ResponseResult::error(ErrorCode::NotFound, err.to_string())
        }
        SheetError::Locked(_) => {
            tracing::debug!(error = %err, request_type, "Sheet request rejected for locked item");
            ResponseResult::error(ErrorCode::Conflict, err.to_string())
        }
        SheetError::Validation(_) | SheetError::InvalidPayload(_) => {
            tracing::debug!(error = %err, request_type, "Sheet request failed validation");
            ResponseResult::error(ErrorCode::ValidationError, err.to_string())
        }
        SheetError::TransferResolution(_) => {
            tracing::warn!(error = %err, request_type, "Drag source could not be resolved");
            ResponseResult::error(ErrorCode::NotFound, err.to_string())
        }
        SheetError::Persistence(_) => {
            tracing::error!(error = %err, request_type, "Store error");
            ResponseResult::error(
                ErrorCode::InternalError,
                format!("Failed to {} - please try again", request_type),
            )
        }
        SheetError::Roll(RollError::InvalidFormula(_)) => {
            tracing::debug!(error = %err, request_type, "Roll formula rejected");
            ResponseResult::error(ErrorCode::ValidationError, err.to_string())
        }
        SheetError::Roll(RollError::Publish(_)) => {
            tracing::error!(error = %err, request_type, "Roll could not be published");
            ResponseResult::error(
                ErrorCode::InternalError,
                "Failed to publish roll - please try again",
            )
        }
    }
}
