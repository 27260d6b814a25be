//! Partial updates to items and records.
//!
//! Every mutation of an existing item is expressed as a [`Differential`]; a
//! user action gathers its differentials into one [`UpdateBatch`] so the
//! store sees a single write.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::ids::ItemId;
use crate::value_objects::{FieldPath, FieldValue};

/// Field changes for one existing item.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Differential {
    pub id: ItemId,
    pub changes: BTreeMap<FieldPath, FieldValue>,
}

impl Differential {
    pub fn new(id: ItemId) -> Self {
        Self {
            id,
            changes: BTreeMap::new(),
        }
    }

    /// Builder-style setter.
    pub fn set(mut self, path: FieldPath, value: impl Into<FieldValue>) -> Self {
        self.changes.insert(path, value.into());
        self
    }

    /// Fold another differential for the same item into this one; its values win.
    pub fn merge(&mut self, other: Differential) {
        debug_assert_eq!(self.id, other.id);
        self.changes.extend(other.changes);
    }

    pub fn get(&self, path: &FieldPath) -> Option<&FieldValue> {
        self.changes.get(path)
    }

    pub fn is_empty(&self) -> bool {
        self.changes.is_empty()
    }
}

/// Changes to the record itself (not its items).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecordPatch {
    /// New default gear tab; `None` leaves it unchanged.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default_gear_tab: Option<ItemId>,
}

impl RecordPatch {
    pub fn is_empty(&self) -> bool {
        self.default_gear_tab.is_none()
    }
}

/// One multi-item write.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct UpdateBatch {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub record: Option<RecordPatch>,
    #[serde(default)]
    pub items: Vec<Differential>,
}

impl UpdateBatch {
    pub fn is_empty(&self) -> bool {
        self.items.is_empty() && self.record.as_ref().map_or(true, RecordPatch::is_empty)
    }

    pub fn item_ids(&self) -> impl Iterator<Item = ItemId> + '_ {
        self.items.iter().map(|diff| diff.id)
    }

    pub fn differential(&self, id: ItemId) -> Option<&Differential> {
        self.items.iter().find(|diff| diff.id == id)
    }
}
