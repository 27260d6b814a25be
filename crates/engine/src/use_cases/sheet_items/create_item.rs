//! Create item use case.

use std::collections::BTreeMap;
use std::sync::Arc;

use gearsheet_domain::{FieldPath, FieldValue, Item, ItemKind, RawValue, RecordId};

use crate::infrastructure::ports::RecordStore;
use crate::use_cases::{load_record, SheetError};

use super::check_field_write;

/// Create item use case.
///
/// Attaches a new item to a record and returns it so the sheet can focus
/// its name input.
pub struct CreateItem {
    store: Arc<dyn RecordStore>,
}

impl CreateItem {
    pub fn new(store: Arc<dyn RecordStore>) -> Self {
        Self { store }
    }

    /// # Arguments
    /// * `owner` - The record receiving the item
    /// * `kind` - Item type
    /// * `name` - Name; defaults to the capitalized type name
    /// * `fields` - Initial values keyed by field path (`data.tab`, `data.weight`, ...)
    pub async fn execute(
        &self,
        owner: RecordId,
        kind: ItemKind,
        name: Option<String>,
        fields: BTreeMap<String, FieldValue>,
    ) -> Result<Item, SheetError> {
        let record = load_record(&self.store, owner).await?;

        let name = name
            .filter(|name| !name.trim().is_empty())
            .unwrap_or_else(|| kind.display_name().to_string());
        let mut draft = Item::new(kind, name);
        for (raw_path, raw_value) in fields {
            let path = FieldPath::parse(&raw_path)?;
            let value = path.coerce(RawValue::Value(raw_value))?;
            check_field_write(&record, kind, &path, &value)?;
            draft.set_field(&path, value);
        }

        let item = self.store.create_item(owner, draft.to_new_item()).await?;

        tracing::info!(
            record_id = %owner,
            item_id = %item.id,
            item_type = %item.kind,
            "Item created"
        );
        Ok(item)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_fixtures::{sheet, store_returning};
    use gearsheet_domain::{ItemId, NewItem};

    #[tokio::test]
    async fn defaults_name_to_capitalized_type() {
        let fixture = sheet();
        let owner = fixture.record.id();

        let mut store = store_returning(fixture.record);
        store
            .expect_create_item()
            .withf(move |id, item: &NewItem| {
                *id == owner && item.name == "Gear" && item.kind == ItemKind::Gear
            })
            .times(1)
            .returning(|_, item| Ok(item.into_item(ItemId::new())));

        let use_case = CreateItem::new(Arc::new(store));
        let item = use_case
            .execute(owner, ItemKind::Gear, None, BTreeMap::new())
            .await
            .unwrap();

        assert_eq!(item.name, "Gear");
    }

    #[tokio::test]
    async fn initial_tab_must_exist() {
        let fixture = sheet();
        let owner = fixture.record.id();

        let mut store = store_returning(fixture.record);
        store.expect_create_item().never();

        let use_case = CreateItem::new(Arc::new(store));
        let fields = BTreeMap::from([(
            "data.tab".to_string(),
            FieldValue::from(ItemId::new().to_string()),
        )]);
        let result = use_case.execute(owner, ItemKind::Gear, None, fields).await;

        assert!(matches!(
            result,
            Err(SheetError::NotFound {
                entity_type: "Tab",
                ..
            })
        ));
    }

    #[tokio::test]
    async fn initial_fields_are_stored() {
        let fixture = sheet();
        let owner = fixture.record.id();
        let backpack = fixture.backpack;

        let mut store = store_returning(fixture.record);
        store
            .expect_create_item()
            .times(1)
            .returning(|_, item| Ok(item.into_item(ItemId::new())));

        let use_case = CreateItem::new(Arc::new(store));
        let fields = BTreeMap::from([
            ("data.tab".to_string(), FieldValue::from(backpack.to_string())),
            ("data.weight".to_string(), FieldValue::from(2)),
        ]);
        let item = use_case
            .execute(owner, ItemKind::Gear, Some("Lantern".into()), fields)
            .await
            .unwrap();

        assert_eq!(item.name, "Lantern");
        assert_eq!(item.tab(), Some(backpack));
        assert_eq!(item.data.get("weight"), Some(&FieldValue::Integer(2)));
    }

    #[tokio::test]
    async fn gear_paths_are_rejected_on_weapons() {
        let fixture = sheet();
        let owner = fixture.record.id();

        let mut store = store_returning(fixture.record);
        store.expect_create_item().never();

        let use_case = CreateItem::new(Arc::new(store));
        let fields = BTreeMap::from([("data.index".to_string(), FieldValue::from(0))]);
        let result = use_case.execute(owner, ItemKind::Weapon, None, fields).await;

        assert!(matches!(result, Err(SheetError::Validation(_))));
    }

    #[tokio::test]
    async fn unknown_record_is_not_found() {
        let fixture = sheet();
        let store = store_returning(fixture.record);

        let use_case = CreateItem::new(Arc::new(store));
        let result = use_case
            .execute(RecordId::new(), ItemKind::Tab, None, BTreeMap::new())
            .await;

        assert!(matches!(
            result,
            Err(SheetError::NotFound {
                entity_type: "CharacterRecord",
                ..
            })
        ));
    }
}
