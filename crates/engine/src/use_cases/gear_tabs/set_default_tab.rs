//! Set default tab use case.

use std::sync::Arc;

use gearsheet_domain::{Differential, FieldPath, ItemId, RecordId, RecordPatch, UpdateBatch};

use crate::infrastructure::ports::RecordStore;
use crate::use_cases::{load_record, DifferentialApplier, SheetError};

/// Make one tab the record's default gear tab.
///
/// The default flag of every tab is rewritten from the record's current tab
/// set, so exactly one tab is default afterwards even if earlier writes left
/// several flagged.
pub struct SetDefaultTab {
    store: Arc<dyn RecordStore>,
    applier: Arc<DifferentialApplier>,
}

impl SetDefaultTab {
    pub fn new(store: Arc<dyn RecordStore>, applier: Arc<DifferentialApplier>) -> Self {
        Self { store, applier }
    }

    pub async fn execute(
        &self,
        owner: RecordId,
        tab_id: ItemId,
    ) -> Result<Option<UpdateBatch>, SheetError> {
        let record = load_record(&self.store, owner).await?;
        if record.tab(tab_id).is_none() {
            return Err(SheetError::tab_not_found(tab_id));
        }

        let differentials = record
            .tabs()
            .into_iter()
            .map(|tab| Differential::new(tab.id).set(FieldPath::Default, tab.id == tab_id))
            .collect();
        let patch = RecordPatch {
            default_gear_tab: Some(tab_id),
        };

        let written = self
            .applier
            .commit(owner, differentials, Some(patch))
            .await?;
        tracing::info!(record_id = %owner, tab_id = %tab_id, "Default gear tab set");
        Ok(written)
    }
}
