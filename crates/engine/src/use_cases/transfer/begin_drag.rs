//! Begin drag use case.

use std::sync::Arc;

use gearsheet_domain::{ItemId, RecordId};
use gearsheet_shared::TransferPayload;

use crate::infrastructure::ports::RecordStore;
use crate::use_cases::{load_record, SheetError};

/// Serialize a row of a record for dragging.
pub struct BeginDrag {
    store: Arc<dyn RecordStore>,
}

impl BeginDrag {
    pub fn new(store: Arc<dyn RecordStore>) -> Self {
        Self { store }
    }

    /// Returns the payload text to place in the drag data.
    pub async fn execute(&self, owner: RecordId, item_id: ItemId) -> Result<String, SheetError> {
        let record = load_record(&self.store, owner).await?;
        let item = record
            .item(item_id)
            .ok_or_else(|| SheetError::item_not_found(item_id))?;
        if item.locked {
            tracing::debug!(record_id = %owner, item_id = %item_id, "Drag of locked item ignored");
            return Err(SheetError::Locked(item_id));
        }

        TransferPayload::for_record_item(&record, item)
            .encode()
            .map_err(|e| SheetError::InvalidPayload(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_fixtures::{sheet, store_returning};

    #[tokio::test]
    async fn payload_names_source_and_snapshot() {
        let fixture = sheet();
        let owner = fixture.record.id();
        let rope = fixture.record.item(fixture.rope).cloned();

        let text = BeginDrag::new(Arc::new(store_returning(fixture.record)))
            .execute(owner, fixture.rope)
            .await
            .unwrap();

        let payload = TransferPayload::decode(&text).unwrap();
        assert!(payload.is_from(owner));
        assert_eq!(payload.item_id, fixture.rope);
        assert_eq!(payload.item_snapshot, rope);
        assert!(payload.scene_id.is_none());
    }

    #[tokio::test]
    async fn locked_rows_cannot_be_dragged() {
        let fixture = sheet();
        let owner = fixture.record.id();

        let result = BeginDrag::new(Arc::new(store_returning(fixture.record)))
            .execute(owner, fixture.sword)
            .await;
        assert!(matches!(result, Err(SheetError::Locked(_))));
    }
}
