//! Drop item use case.

use std::sync::Arc;

use serde::Serialize;

use gearsheet_domain::{
    CharacterRecord, Differential, FieldPath, FieldValue, Item, ItemId, RecordId, DEFAULT_KEY,
    INDEX_KEY, SENTINEL_INDEX, TAB_KEY,
};
use gearsheet_shared::TransferPayload;

use crate::infrastructure::ports::{CatalogLookup, ContextResolver, RecordStore, SourceRef};
use crate::use_cases::{load_record, DifferentialApplier, SheetError};

/// What a drop did to the receiving record.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum DropOutcome {
    /// Nothing to do (no target tab, the item's own tab, or a non-gear item).
    Ignored,
    /// Gear moved to another tab of the same record.
    Moved { item_id: ItemId, tab_id: ItemId },
    /// A copy of a foreign item was created on the receiving record.
    Cloned { item: Item },
}

/// Apply a transfer payload dropped on a record, optionally over one of its tabs.
pub struct DropItem {
    store: Arc<dyn RecordStore>,
    catalog: Arc<dyn CatalogLookup>,
    resolver: Arc<dyn ContextResolver>,
    applier: Arc<DifferentialApplier>,
}

impl DropItem {
    pub fn new(
        store: Arc<dyn RecordStore>,
        catalog: Arc<dyn CatalogLookup>,
        resolver: Arc<dyn ContextResolver>,
        applier: Arc<DifferentialApplier>,
    ) -> Self {
        Self {
            store,
            catalog,
            resolver,
            applier,
        }
    }

    pub async fn execute(
        &self,
        receiver: RecordId,
        payload_text: &str,
        target_tab: Option<ItemId>,
    ) -> Result<DropOutcome, SheetError> {
        let payload = TransferPayload::decode(payload_text)?;
        let record = load_record(&self.store, receiver).await?;

        if payload.is_from(receiver) {
            self.move_within(&record, payload.item_id, target_tab).await
        } else {
            self.clone_onto(&record, &payload, target_tab).await
        }
    }

    async fn move_within(
        &self,
        record: &CharacterRecord,
        item_id: ItemId,
        target_tab: Option<ItemId>,
    ) -> Result<DropOutcome, SheetError> {
        let Some(tab_id) = target_tab else {
            return Ok(DropOutcome::Ignored);
        };
        let item = record
            .item(item_id)
            .ok_or_else(|| SheetError::item_not_found(item_id))?;
        if record.tab(tab_id).is_none() {
            return Err(SheetError::tab_not_found(tab_id));
        }
        if !item.is_gear() || item.tab() == Some(tab_id) {
            return Ok(DropOutcome::Ignored);
        }

        let diff = Differential::new(item_id)
            .set(FieldPath::Tab, tab_id.to_string())
            .set(FieldPath::Index, SENTINEL_INDEX);
        self.applier.commit(record.id(), vec![diff], None).await?;

        tracing::info!(
            record_id = %record.id(),
            item_id = %item_id,
            tab_id = %tab_id,
            "Gear moved to tab"
        );
        Ok(DropOutcome::Moved { item_id, tab_id })
    }

    async fn clone_onto(
        &self,
        record: &CharacterRecord,
        payload: &TransferPayload,
        target_tab: Option<ItemId>,
    ) -> Result<DropOutcome, SheetError> {
        let source = self.resolve_source(payload).await?;

        let mut new_item = source.to_new_item();
        if source.is_tab() {
            // The receiver keeps its own default tab.
            new_item
                .data
                .insert(DEFAULT_KEY.to_string(), FieldValue::Boolean(false));
        }
        if source.is_gear() {
            let is_tab = |id: &ItemId| record.tab(*id).is_some();
            let tab = target_tab
                .filter(is_tab)
                .or_else(|| record.default_gear_tab().filter(is_tab));
            match tab {
                Some(tab_id) => {
                    new_item
                        .data
                        .insert(TAB_KEY.to_string(), FieldValue::Text(tab_id.to_string()));
                }
                None => {
                    new_item.data.remove(TAB_KEY);
                }
            }
            new_item
                .data
                .insert(INDEX_KEY.to_string(), FieldValue::Integer(SENTINEL_INDEX));
        }

        let item = self.store.create_item(record.id(), new_item).await?;
        tracing::info!(
            record_id = %record.id(),
            source_record_id = ?payload.source_record_id,
            source_item_id = %payload.item_id,
            item_id = %item.id,
            "Item cloned onto record"
        );
        Ok(DropOutcome::Cloned { item })
    }

    /// The live item if its owner (or catalog entry) still has it, else the snapshot.
    async fn resolve_source(&self, payload: &TransferPayload) -> Result<Item, SheetError> {
        let live = match payload.source_record_id {
            Some(record_id) => {
                let source = SourceRef {
                    record_id,
                    scene_id: payload.scene_id,
                    token_id: payload.token_id,
                    pack_id: payload.pack_id.clone(),
                };
                self.resolver
                    .resolve_record(source)
                    .await?
                    .and_then(|owner| owner.item(payload.item_id).cloned())
            }
            None => {
                self.catalog
                    .get_item(payload.pack_id.clone(), payload.item_id)
                    .await?
            }
        };

        if let Some(item) = live {
            return Ok(item);
        }
        match &payload.item_snapshot {
            Some(snapshot) => {
                tracing::warn!(
                    item_id = %payload.item_id,
                    "Drag source unavailable, using payload snapshot"
                );
                Ok(snapshot.clone())
            }
            None => Err(SheetError::TransferResolution(format!(
                "item {} has no live source and no snapshot",
                payload.item_id
            ))),
        }
    }
}
