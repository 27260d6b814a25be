//! Delete tab use case.

use std::sync::Arc;

use gearsheet_domain::{ItemId, RecordId};

use crate::infrastructure::ports::RecordStore;
use crate::use_cases::{load_record, SheetError};

/// Delete a tab together with the gear filed under it.
///
/// The record's default gear tab is not cleared when it names the deleted
/// tab; readers only honour a default that still exists.
pub struct DeleteTab {
    store: Arc<dyn RecordStore>,
}

impl DeleteTab {
    pub fn new(store: Arc<dyn RecordStore>) -> Self {
        Self { store }
    }

    /// Returns every deleted id, the tab first.
    pub async fn execute(&self, owner: RecordId, tab_id: ItemId) -> Result<Vec<ItemId>, SheetError> {
        let record = load_record(&self.store, owner).await?;
        let tab = record
            .tab(tab_id)
            .ok_or_else(|| SheetError::tab_not_found(tab_id))?;
        if tab.locked {
            tracing::debug!(record_id = %owner, tab_id = %tab_id, "Delete of locked tab ignored");
            return Err(SheetError::Locked(tab_id));
        }

        let ids: Vec<ItemId> = std::iter::once(tab_id)
            .chain(
                record
                    .items()
                    .iter()
                    .filter(|item| item.is_gear() && item.tab() == Some(tab_id))
                    .map(|item| item.id),
            )
            .collect();

        self.store.delete_items(owner, ids.clone()).await?;
        tracing::info!(
            record_id = %owner,
            tab_id = %tab_id,
            gear_count = ids.len() - 1,
            "Gear tab deleted"
        );
        Ok(ids)
    }
}
