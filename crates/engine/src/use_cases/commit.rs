//! Differential update applier.
//!
//! Collapses the differentials of one user action into a single
//! [`UpdateBatch`] and hands it to the store in one write.

use std::sync::Arc;

use gearsheet_domain::{Differential, RecordId, RecordPatch, UpdateBatch};

use crate::infrastructure::ports::RecordStore;

use super::error::SheetError;

pub struct DifferentialApplier {
    store: Arc<dyn RecordStore>,
}

impl DifferentialApplier {
    pub fn new(store: Arc<dyn RecordStore>) -> Self {
        Self { store }
    }

    /// Commit one user action.
    ///
    /// Differentials for the same item are merged (first-seen order, later
    /// values win). Returns the batch that was written, or `None` when there
    /// was nothing to write.
    pub async fn commit(
        &self,
        owner: RecordId,
        differentials: Vec<Differential>,
        record_patch: Option<RecordPatch>,
    ) -> Result<Option<UpdateBatch>, SheetError> {
        let batch = UpdateBatch {
            record: record_patch.filter(|patch| !patch.is_empty()),
            items: merge(differentials),
        };

        if batch.is_empty() {
            tracing::debug!(record_id = %owner, "Nothing to commit");
            return Ok(None);
        }

        let item_count = batch.items.len();
        self.store.update_items(owner, batch.clone()).await?;

        tracing::debug!(
            record_id = %owner,
            item_count,
            record_patched = batch.record.is_some(),
            "Committed update batch"
        );
        Ok(Some(batch))
    }
}

fn merge(differentials: Vec<Differential>) -> Vec<Differential> {
    let mut merged: Vec<Differential> = Vec::with_capacity(differentials.len());
    for diff in differentials.into_iter().filter(|diff| !diff.is_empty()) {
        match merged.iter_mut().find(|existing| existing.id == diff.id) {
            Some(existing) => existing.merge(diff),
            None => merged.push(diff),
        }
    }
    merged
}
