//! Toggle field use case.

use std::sync::Arc;

use gearsheet_domain::{
    Differential, DomainError, FieldPath, FieldType, FieldValue, ItemId, RecordId,
};

use crate::infrastructure::ports::RecordStore;
use crate::use_cases::{load_record, DifferentialApplier, SheetError};

use super::check_field_write;

/// Flip a boolean field. A missing value reads as `false`.
pub struct ToggleField {
    store: Arc<dyn RecordStore>,
    applier: Arc<DifferentialApplier>,
}

impl ToggleField {
    pub fn new(store: Arc<dyn RecordStore>, applier: Arc<DifferentialApplier>) -> Self {
        Self { store, applier }
    }

    /// Returns the new value.
    pub async fn execute(
        &self,
        owner: RecordId,
        item_id: ItemId,
        path: FieldPath,
    ) -> Result<bool, SheetError> {
        let record = load_record(&self.store, owner).await?;
        let item = record
            .item(item_id)
            .ok_or_else(|| SheetError::item_not_found(item_id))?;

        if !matches!(path.field_type(), FieldType::Boolean | FieldType::Any) {
            return Err(DomainError::validation(format!("{} is not a boolean field", path)).into());
        }

        let current = item
            .field(&path)
            .and_then(|value| value.as_bool())
            .unwrap_or(false);
        let toggled = FieldValue::Boolean(!current);
        check_field_write(&record, item.kind, &path, &toggled)?;

        self.applier
            .commit(owner, vec![Differential::new(item_id).set(path, toggled)], None)
            .await?;
        Ok(!current)
    }
}
