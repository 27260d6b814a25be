//! Edit field use case.

use std::sync::Arc;

use gearsheet_domain::{Differential, FieldPath, FieldValue, ItemId, RawValue, RecordId};

use crate::infrastructure::ports::RecordStore;
use crate::use_cases::{load_record, DifferentialApplier, SheetError};

use super::check_field_write;

/// Write one field of one item from an input control.
pub struct EditField {
    store: Arc<dyn RecordStore>,
    applier: Arc<DifferentialApplier>,
}

impl EditField {
    pub fn new(store: Arc<dyn RecordStore>, applier: Arc<DifferentialApplier>) -> Self {
        Self { store, applier }
    }

    /// Checkbox values are stored as strict booleans; anything else is
    /// stored as given once the path's type accepts it. Returns the stored value.
    pub async fn execute(
        &self,
        owner: RecordId,
        item_id: ItemId,
        path: FieldPath,
        raw: RawValue,
    ) -> Result<FieldValue, SheetError> {
        let record = load_record(&self.store, owner).await?;
        let item = record
            .item(item_id)
            .ok_or_else(|| SheetError::item_not_found(item_id))?;

        let value = path.coerce(raw)?;
        check_field_write(&record, item.kind, &path, &value)?;

        self.applier
            .commit(
                owner,
                vec![Differential::new(item_id).set(path, value.clone())],
                None,
            )
            .await?;
        Ok(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_fixtures::{sheet, store_returning};

    fn use_case(store: crate::infrastructure::ports::MockRecordStore) -> EditField {
        let store: Arc<dyn RecordStore> = Arc::new(store);
        EditField::new(store.clone(), Arc::new(DifferentialApplier::new(store)))
    }

    #[tokio::test]
    async fn checkbox_is_stored_as_boolean() {
        let fixture = sheet();
        let owner = fixture.record.id();
        let rope = fixture.rope;

        let mut store = store_returning(fixture.record);
        store
            .expect_update_items()
            .times(1)
            .withf(move |_, batch| {
                batch.items.len() == 1
                    && batch.items[0].id == rope
                    && batch.items[0].get(&FieldPath::data("equipped").unwrap())
                        == Some(&FieldValue::Boolean(false))
            })
            .returning(|_, _| Ok(()));

        let value = use_case(store)
            .execute(
                owner,
                rope,
                FieldPath::data("equipped").unwrap(),
                RawValue::Checkbox(false),
            )
            .await
            .unwrap();

        assert_eq!(value, FieldValue::Boolean(false));
    }

    #[tokio::test]
    async fn text_passes_through_for_free_form_keys() {
        let fixture = sheet();
        let owner = fixture.record.id();

        let mut store = store_returning(fixture.record);
        store
            .expect_update_items()
            .times(1)
            .returning(|_, _| Ok(()));

        let value = use_case(store)
            .execute(
                owner,
                fixture.torch,
                FieldPath::data("weight").unwrap(),
                RawValue::Text("1/2".into()),
            )
            .await
            .unwrap();

        assert_eq!(value, FieldValue::from("1/2"));
    }

    #[tokio::test]
    async fn unknown_item_writes_nothing() {
        let fixture = sheet();
        let owner = fixture.record.id();

        let mut store = store_returning(fixture.record);
        store.expect_update_items().never();

        let result = use_case(store)
            .execute(owner, ItemId::new(), FieldPath::Name, RawValue::Text("x".into()))
            .await;

        assert!(matches!(result, Err(SheetError::NotFound { entity_type: "Item", .. })));
    }

    #[tokio::test]
    async fn index_must_be_an_integer() {
        let fixture = sheet();
        let owner = fixture.record.id();

        let mut store = store_returning(fixture.record);
        store.expect_update_items().never();

        let result = use_case(store)
            .execute(owner, fixture.rope, FieldPath::Index, RawValue::Text("first".into()))
            .await;

        assert!(matches!(result, Err(SheetError::Validation(_))));
    }

    #[tokio::test]
    async fn default_flag_is_not_directly_editable() {
        let fixture = sheet();
        let owner = fixture.record.id();

        let mut store = store_returning(fixture.record);
        store.expect_update_items().never();

        let result = use_case(store)
            .execute(owner, fixture.belt, FieldPath::Default, RawValue::Checkbox(true))
            .await;

        assert!(matches!(result, Err(SheetError::Validation(_))));
    }

    #[tokio::test]
    async fn moving_gear_to_missing_tab_is_not_found() {
        let fixture = sheet();
        let owner = fixture.record.id();

        let mut store = store_returning(fixture.record);
        store.expect_update_items().never();

        let result = use_case(store)
            .execute(
                owner,
                fixture.rope,
                FieldPath::Tab,
                RawValue::Text(fixture.sword.to_string()),
            )
            .await;

        assert!(matches!(result, Err(SheetError::NotFound { entity_type: "Tab", .. })));
    }
}
