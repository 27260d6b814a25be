//! Delete item use case.

use std::sync::Arc;

use gearsheet_domain::{ItemId, RecordId};

use crate::infrastructure::ports::RecordStore;
use crate::use_cases::{load_record, SheetError};

/// Delete items that are not locked.
pub struct DeleteItem {
    store: Arc<dyn RecordStore>,
}

impl DeleteItem {
    pub fn new(store: Arc<dyn RecordStore>) -> Self {
        Self { store }
    }

    pub async fn execute(&self, owner: RecordId, item_id: ItemId) -> Result<(), SheetError> {
        self.execute_many(owner, vec![item_id]).await.map(|_| ())
    }

    /// Delete several items in one write. Any unknown or locked id aborts
    /// the whole request. Returns the deleted ids.
    pub async fn execute_many(
        &self,
        owner: RecordId,
        item_ids: Vec<ItemId>,
    ) -> Result<Vec<ItemId>, SheetError> {
        let mut ids: Vec<ItemId> = Vec::with_capacity(item_ids.len());
        for id in item_ids {
            if !ids.contains(&id) {
                ids.push(id);
            }
        }
        if ids.is_empty() {
            return Ok(ids);
        }

        let record = load_record(&self.store, owner).await?;
        for id in &ids {
            let item = record
                .item(*id)
                .ok_or_else(|| SheetError::item_not_found(*id))?;
            if item.locked {
                tracing::debug!(record_id = %owner, item_id = %id, "Delete of locked item ignored");
                return Err(SheetError::Locked(*id));
            }
        }

        self.store.delete_items(owner, ids.clone()).await?;
        tracing::info!(record_id = %owner, count = ids.len(), "Items deleted");
        Ok(ids)
    }
}
