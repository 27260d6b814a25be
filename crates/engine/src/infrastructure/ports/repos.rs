//! Repository port traits for record storage and drag source resolution.

use async_trait::async_trait;
use gearsheet_domain::{
    CharacterRecord, Item, ItemId, NewItem, RecordId, SceneId, TokenId, UpdateBatch,
};

use super::error::RepoError;

// =============================================================================
// Record Storage
// =============================================================================

/// The document store holding character records and their items.
///
/// Reads see every completed write. `update_items` and `delete_items` are
/// atomic: a batch naming an id the record does not own fails as a whole.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait RecordStore: Send + Sync {
    async fn get_record(&self, id: RecordId) -> Result<Option<CharacterRecord>, RepoError>;

    /// Attach a new item to `owner`; the store assigns its id.
    async fn create_item(&self, owner: RecordId, item: NewItem) -> Result<Item, RepoError>;

    async fn update_items(&self, owner: RecordId, batch: UpdateBatch) -> Result<(), RepoError>;

    async fn delete_items(&self, owner: RecordId, ids: Vec<ItemId>) -> Result<(), RepoError>;
}

// =============================================================================
// Drag Source Resolution
// =============================================================================

/// Where a dragged item came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceRef {
    pub record_id: RecordId,
    pub scene_id: Option<SceneId>,
    pub token_id: Option<TokenId>,
    pub pack_id: Option<String>,
}

/// Unowned item templates, world-level or inside compendium packs.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CatalogLookup: Send + Sync {
    /// Look up a template; `pack_id` of `None` means the world catalog.
    async fn get_item(
        &self,
        pack_id: Option<String>,
        item_id: ItemId,
    ) -> Result<Option<Item>, RepoError>;
}

/// Finds the live record a drag started from, honouring token and pack context.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ContextResolver: Send + Sync {
    async fn resolve_record(&self, source: SourceRef)
        -> Result<Option<CharacterRecord>, RepoError>;
}
