//! Reindex use case - renumbers rows after a sort.

use std::sync::Arc;

use gearsheet_domain::{Differential, FieldPath, ItemId, RecordId, UpdateBatch};

use crate::infrastructure::ports::RecordStore;
use crate::use_cases::{load_record, DifferentialApplier, SheetError};

/// Write `index = position` for each id, in the order given.
///
/// Always a full renumbering, so repeating it with the same list writes the
/// same values.
pub struct Reindex {
    store: Arc<dyn RecordStore>,
    applier: Arc<DifferentialApplier>,
}

impl Reindex {
    pub fn new(store: Arc<dyn RecordStore>, applier: Arc<DifferentialApplier>) -> Self {
        Self { store, applier }
    }

    pub async fn execute(
        &self,
        owner: RecordId,
        ordered_ids: Vec<ItemId>,
    ) -> Result<Option<UpdateBatch>, SheetError> {
        if ordered_ids.is_empty() {
            return Ok(None);
        }

        let record = load_record(&self.store, owner).await?;
        if let Some(missing) = ordered_ids.iter().find(|id| !record.contains(**id)) {
            return Err(SheetError::item_not_found(*missing));
        }

        let differentials = ordered_ids
            .into_iter()
            .zip(0_i64..)
            .map(|(id, index)| Differential::new(id).set(FieldPath::Index, index))
            .collect();
        self.applier.commit(owner, differentials, None).await
    }
}
