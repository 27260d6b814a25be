//! Seed data for the in-memory adapters.
//!
//! ```json
//! {
//!   "records": [{ "id": "...", "name": "Brannoc", "kind": "pc", "items": [] }],
//!   "catalog": [{ "packId": "world.gear", "item": { "id": "...", "name": "Rope", "type": "gear" } }]
//! }
//! ```

use std::path::Path;

use serde::{Deserialize, Serialize};

use gearsheet_domain::{CharacterRecord, Item};

use crate::infrastructure::in_memory::{InMemoryCatalog, InMemoryRecordStore};
use crate::infrastructure::ports::RepoError;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SeedData {
    #[serde(default)]
    pub records: Vec<CharacterRecord>,
    #[serde(default)]
    pub catalog: Vec<CatalogEntry>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CatalogEntry {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pack_id: Option<String>,
    pub item: Item,
}

impl SeedData {
    pub fn parse(text: &str) -> Result<Self, RepoError> {
        serde_json::from_str(text).map_err(RepoError::serialization)
    }

    pub async fn load(path: &Path) -> Result<Self, RepoError> {
        let text = tokio::fs::read_to_string(path)
            .await
            .map_err(|e| RepoError::database("load_seed", format!("{}: {}", path.display(), e)))?;
        Self::parse(&text)
    }

    /// Split into the record store and catalog adapters.
    pub fn into_adapters(self) -> (InMemoryRecordStore, InMemoryCatalog) {
        let store = InMemoryRecordStore::with_records(self.records);
        let catalog = InMemoryCatalog::with_items(
            self.catalog
                .into_iter()
                .map(|entry| (entry.pack_id, entry.item)),
        );
        (store, catalog)
    }
}
