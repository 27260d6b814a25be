//! Drag-and-drop transfer payload
//!
//! When a row is picked up, the sheet writes a [`TransferPayload`] as JSON
//! text into the drag data. The drop handler on the receiving sheet decodes
//! it and decides between a same-owner move and a cross-owner clone.
//!
//! Keys are camelCase. Optional context keys (`sceneId`, `tokenId`,
//! `packId`) may be missing and unknown keys are ignored, so payloads written
//! by older or newer sheets still decode.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use gearsheet_domain::{CharacterRecord, Item, ItemId, RecordId, SceneId, TokenId};

/// The only entity kind a sheet accepts on drop.
pub const ITEM_ENTITY_KIND: &str = "Item";

#[derive(Debug, Error)]
pub enum TransferDecodeError {
    #[error("Malformed transfer payload: {0}")]
    Malformed(#[from] serde_json::Error),

    #[error("Unsupported entity kind: {0}")]
    UnsupportedKind(String),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TransferPayload {
    /// Owner of the dragged item; absent for unowned catalog entries.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source_record_id: Option<RecordId>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub scene_id: Option<SceneId>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub token_id: Option<TokenId>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pack_id: Option<String>,
    pub entity_kind: String,
    pub item_id: ItemId,
    /// Copy of the item at drag time, used when the source can no longer be resolved.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub item_snapshot: Option<Item>,
}

impl TransferPayload {
    /// Payload for an item owned by `record`, carrying the record's token and
    /// pack context so the receiver can find the same copy.
    pub fn for_record_item(record: &CharacterRecord, item: &Item) -> Self {
        let token = record.token();
        Self {
            source_record_id: Some(record.id()),
            scene_id: token.map(|binding| binding.scene_id),
            token_id: token.map(|binding| binding.token_id),
            pack_id: record.pack().map(str::to_string),
            entity_kind: ITEM_ENTITY_KIND.to_string(),
            item_id: item.id,
            item_snapshot: Some(item.clone()),
        }
    }

    /// Payload for an unowned catalog entry, optionally from a compendium pack.
    pub fn for_catalog_item(pack_id: Option<String>, item: &Item) -> Self {
        Self {
            source_record_id: None,
            scene_id: None,
            token_id: None,
            pack_id,
            entity_kind: ITEM_ENTITY_KIND.to_string(),
            item_id: item.id,
            item_snapshot: Some(item.clone()),
        }
    }

    pub fn encode(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }

    /// Decode drag data. Anything that is not an item payload is rejected.
    pub fn decode(text: &str) -> Result<Self, TransferDecodeError> {
        let payload: Self = serde_json::from_str(text)?;
        if payload.entity_kind != ITEM_ENTITY_KIND {
            return Err(TransferDecodeError::UnsupportedKind(payload.entity_kind));
        }
        Ok(payload)
    }

    /// Whether the payload came from `record_id`.
    pub fn is_from(&self, record_id: RecordId) -> bool {
        self.source_record_id == Some(record_id)
    }
}
