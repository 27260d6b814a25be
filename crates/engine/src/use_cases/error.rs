//! Sheet operation errors.

use gearsheet_domain::{DomainError, ItemId, RecordId};
use gearsheet_shared::TransferDecodeError;

use crate::infrastructure::ports::{RepoError, RollError};

/// Errors that can occur during sheet operations.
///
/// None of these leave partial state behind: every check runs before the
/// single write of an operation.
#[derive(Debug, thiserror::Error)]
pub enum SheetError {
    #[error("{entity_type} not found: {id}")]
    NotFound {
        entity_type: &'static str,
        id: String,
    },

    #[error("Item is locked: {0}")]
    Locked(ItemId),

    #[error("Could not resolve dragged item: {0}")]
    TransferResolution(String),

    #[error("Persistence error: {0}")]
    Persistence(#[from] RepoError),

    #[error("Validation failed: {0}")]
    Validation(#[from] DomainError),

    #[error("Invalid transfer payload: {0}")]
    InvalidPayload(String),

    #[error("Roll failed: {0}")]
    Roll(#[from] RollError),
}

impl SheetError {
    pub fn record_not_found(id: RecordId) -> Self {
        Self::NotFound {
            entity_type: "CharacterRecord",
            id: id.to_string(),
        }
    }

    pub fn item_not_found(id: ItemId) -> Self {
        Self::NotFound {
            entity_type: "Item",
            id: id.to_string(),
        }
    }

    pub fn tab_not_found(id: ItemId) -> Self {
        Self::NotFound {
            entity_type: "Tab",
            id: id.to_string(),
        }
    }
}

impl From<TransferDecodeError> for SheetError {
    fn from(err: TransferDecodeError) -> Self {
        Self::InvalidPayload(err.to_string())
    }
}
