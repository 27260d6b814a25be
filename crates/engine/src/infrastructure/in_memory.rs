//! In-memory adapters for the record store, the catalog and source resolution.
//!
//! Used by the engine binary (seeded from a JSON file) and by the end-to-end
//! tests. Every write publishes a [`RecordChanged`] notification.

use std::collections::HashMap;

use async_trait::async_trait;
use tokio::sync::{broadcast, RwLock};

use gearsheet_domain::{CharacterRecord, Item, ItemId, NewItem, RecordId, UpdateBatch};

use crate::infrastructure::ports::{CatalogLookup, ContextResolver, RecordStore, RepoError, SourceRef};

const CHANGE_CHANNEL_CAPACITY: usize = 64;

/// Change notification for a record whose items were written.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RecordChanged {
    pub record_id: RecordId,
}

// =============================================================================
// Record Store
// =============================================================================

pub struct InMemoryRecordStore {
    records: RwLock<HashMap<RecordId, CharacterRecord>>,
    changes: broadcast::Sender<RecordChanged>,
}

impl InMemoryRecordStore {
    pub fn new() -> Self {
        Self::with_records(Vec::new())
    }

    pub fn with_records(records: impl IntoIterator<Item = CharacterRecord>) -> Self {
        let (changes, _) = broadcast::channel(CHANGE_CHANNEL_CAPACITY);
        Self {
            records: RwLock::new(
                records
                    .into_iter()
                    .map(|record| (record.id(), record))
                    .collect(),
            ),
            changes,
        }
    }

    pub fn subscribe(&self) -> broadcast::Receiver<RecordChanged> {
        self.changes.subscribe()
    }

    fn notify(&self, record_id: RecordId) {
        // Sending only fails when nobody is listening.
        let _ = self.changes.send(RecordChanged { record_id });
    }
}

impl Default for InMemoryRecordStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl RecordStore for InMemoryRecordStore {
    async fn get_record(&self, id: RecordId) -> Result<Option<CharacterRecord>, RepoError> {
        Ok(self.records.read().await.get(&id).cloned())
    }

    async fn create_item(&self, owner: RecordId, item: NewItem) -> Result<Item, RepoError> {
        let created = {
            let mut records = self.records.write().await;
            let record = records
                .get_mut(&owner)
                .ok_or_else(|| RepoError::not_found("CharacterRecord", owner))?;
            let created = item.into_item(ItemId::new());
            record.insert_item(created.clone());
            created
        };
        self.notify(owner);
        Ok(created)
    }

    async fn update_items(&self, owner: RecordId, batch: UpdateBatch) -> Result<(), RepoError> {
        {
            let mut records = self.records.write().await;
            let record = records
                .get_mut(&owner)
                .ok_or_else(|| RepoError::not_found("CharacterRecord", owner))?;
            record.apply(&batch)?;
        }
        self.notify(owner);
        Ok(())
    }

    async fn delete_items(&self, owner: RecordId, ids: Vec<ItemId>) -> Result<(), RepoError> {
        {
            let mut records = self.records.write().await;
            let record = records
                .get_mut(&owner)
                .ok_or_else(|| RepoError::not_found("CharacterRecord", owner))?;
            record.remove_items(&ids)?;
        }
        self.notify(owner);
        Ok(())
    }
}

#[async_trait]
impl ContextResolver for InMemoryRecordStore {
    /// A token context selects the token-bound copy; otherwise the record id
    /// does, and a pack context must match the record's pack.
    async fn resolve_record(
        &self,
        source: SourceRef,
    ) -> Result<Option<CharacterRecord>, RepoError> {
        let records = self.records.read().await;

        if let (Some(scene_id), Some(token_id)) = (source.scene_id, source.token_id) {
            let token_copy = records.values().find(|record| {
                record
                    .token()
                    .is_some_and(|binding| binding.scene_id == scene_id && binding.token_id == token_id)
            });
            if let Some(record) = token_copy {
                return Ok(Some(record.clone()));
            }
        }

        Ok(records
            .get(&source.record_id)
            .filter(|record| match source.pack_id.as_deref() {
                Some(pack) => record.pack() == Some(pack),
                None => true,
            })
            .cloned())
    }
}

// =============================================================================
// Catalog
// =============================================================================

/// World and compendium item templates.
pub struct InMemoryCatalog {
    entries: RwLock<HashMap<(Option<String>, ItemId), Item>>,
}

impl InMemoryCatalog {
    pub fn new() -> Self {
        Self::with_items(Vec::new())
    }

    pub fn with_items(items: impl IntoIterator<Item = (Option<String>, Item)>) -> Self {
        Self {
            entries: RwLock::new(
                items
                    .into_iter()
                    .map(|(pack, item)| ((pack, item.id), item))
                    .collect(),
            ),
        }
    }
}

impl Default for InMemoryCatalog {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl CatalogLookup for InMemoryCatalog {
    async fn get_item(
        &self,
        pack_id: Option<String>,
        item_id: ItemId,
    ) -> Result<Option<Item>, RepoError> {
        Ok(self.entries.read().await.get(&(pack_id, item_id)).cloned())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use gearsheet_domain::{
        Differential, FieldPath, ItemKind, RecordKind, SceneId, TokenBinding, TokenId,
    };

    fn record() -> CharacterRecord {
        CharacterRecord::new("Brannoc", RecordKind::Pc)
            .with_item(Item::new(ItemKind::Tab, "Backpack"))
    }

    #[tokio::test]
    async fn create_item_assigns_id_and_notifies() {
        let record = record();
        let store = InMemoryRecordStore::with_records([record.clone()]);
        let mut changes = store.subscribe();

        let created = store
            .create_item(record.id(), NewItem::new(ItemKind::Gear, "Rope"))
            .await
            .unwrap();

        let stored = store.get_record(record.id()).await.unwrap().unwrap();
        assert_eq!(stored.item(created.id), Some(&created));
        assert_eq!(
            changes.recv().await.unwrap(),
            RecordChanged {
                record_id: record.id()
            }
        );
    }

    #[tokio::test]
    async fn update_with_unknown_id_changes_nothing() {
        let record = record();
        let tab_id = record.tabs()[0].id;
        let store = InMemoryRecordStore::with_records([record.clone()]);

        let batch = UpdateBatch {
            record: None,
            items: vec![
                Differential::new(tab_id).set(FieldPath::Name, "Satchel"),
                Differential::new(ItemId::new()).set(FieldPath::Name, "Ghost"),
            ],
        };
        let err = store.update_items(record.id(), batch).await.unwrap_err();

        assert!(err.is_not_found());
        assert_eq!(store.get_record(record.id()).await.unwrap().unwrap(), record);
    }

    #[tokio::test]
    async fn writes_to_missing_record_fail() {
        let store = InMemoryRecordStore::new();
        let result = store.delete_items(RecordId::new(), vec![ItemId::new()]).await;
        assert!(matches!(result, Err(RepoError::NotFound { entity_type: "CharacterRecord", .. })));
    }

    #[tokio::test]
    async fn resolver_prefers_token_copy() {
        let binding = TokenBinding {
            scene_id: SceneId::new(),
            token_id: TokenId::new(),
        };
        let base = record();
        let token_copy = CharacterRecord::new("Brannoc (token)", RecordKind::Pc).with_token(binding);
        let store = InMemoryRecordStore::with_records([base.clone(), token_copy.clone()]);

        let resolved = store
            .resolve_record(SourceRef {
                record_id: base.id(),
                scene_id: Some(binding.scene_id),
                token_id: Some(binding.token_id),
                pack_id: None,
            })
            .await
            .unwrap();
        assert_eq!(resolved.map(|r| r.id()), Some(token_copy.id()));
    }

    #[tokio::test]
    async fn resolver_checks_pack() {
        let packed = record().with_pack("world.heroes");
        let store = InMemoryRecordStore::with_records([packed.clone()]);
        let source = |pack: Option<&str>| SourceRef {
            record_id: packed.id(),
            scene_id: None,
            token_id: None,
            pack_id: pack.map(str::to_string),
        };

        assert!(store.resolve_record(source(Some("world.heroes"))).await.unwrap().is_some());
        assert!(store.resolve_record(source(Some("world.villains"))).await.unwrap().is_none());
        assert!(store.resolve_record(source(None)).await.unwrap().is_some());
    }

    #[tokio::test]
    async fn catalog_is_keyed_by_pack() {
        let spear = Item::new(ItemKind::Weapon, "Spear");
        let catalog = InMemoryCatalog::with_items([(Some("world.weapons".to_string()), spear.clone())]);

        assert_eq!(
            catalog
                .get_item(Some("world.weapons".into()), spear.id)
                .await
                .unwrap(),
            Some(spear.clone())
        );
        assert!(catalog.get_item(None, spear.id).await.unwrap().is_none());
    }
}
