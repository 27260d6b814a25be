//! Item store use cases: create, edit, toggle and delete sheet items.

use std::sync::Arc;

use gearsheet_domain::{CharacterRecord, DomainError, FieldPath, FieldValue, ItemId, ItemKind};

mod create_item;
mod delete_item;
mod edit_field;
mod toggle_field;

pub use create_item::CreateItem;
pub use delete_item::DeleteItem;
pub use edit_field::EditField;
pub use toggle_field::ToggleField;

use super::error::SheetError;

/// Container for item use cases.
pub struct SheetItemUseCases {
    pub create: Arc<CreateItem>,
    pub edit: Arc<EditField>,
    pub toggle: Arc<ToggleField>,
    pub delete: Arc<DeleteItem>,
}

impl SheetItemUseCases {
    pub fn new(
        create: Arc<CreateItem>,
        edit: Arc<EditField>,
        toggle: Arc<ToggleField>,
        delete: Arc<DeleteItem>,
    ) -> Self {
        Self {
            create,
            edit,
            toggle,
            delete,
        }
    }
}

/// Check that `value` may be written at `path` on an item of `kind` owned by `record`.
fn check_field_write(
    record: &CharacterRecord,
    kind: ItemKind,
    path: &FieldPath,
    value: &FieldValue,
) -> Result<(), SheetError> {
    if *path == FieldPath::Default {
        return Err(DomainError::validation(
            "data.default is managed by the default tab action",
        )
        .into());
    }
    if !path.applies_to(kind) {
        return Err(
            DomainError::validation(format!("{} does not apply to {} items", path, kind)).into(),
        );
    }
    if *path == FieldPath::Tab {
        if let Some(raw) = value.as_str() {
            let tab_id: ItemId = raw.parse()?;
            if record.tab(tab_id).is_none() {
                return Err(SheetError::tab_not_found(tab_id));
            }
        }
    }
    Ok(())
}
