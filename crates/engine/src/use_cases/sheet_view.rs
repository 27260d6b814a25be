//! Sheet view - the read side of the character sheet.
//!
//! [`Renderable`] is what a sheet front end needs from the engine: a view
//! model to draw, and the control bindings to attach once it is mounted.

use std::collections::BTreeMap;
use std::sync::Arc;

use async_trait::async_trait;

use gearsheet_domain::{CharacterRecord, FieldValue, ItemKind, RecordId, RecordKind};
use gearsheet_shared::{ControlBindings, ItemRow, SheetChoices, SheetControl, SheetView, TabView};

use crate::infrastructure::ports::RecordStore;
use crate::use_cases::{load_record, SheetError};

const ENCUMBRANCE_KEY: &str = "currentEncumbrance";

#[async_trait]
pub trait Renderable: Send + Sync {
    type ViewModel: Send;

    async fn view_model(&self, owner: RecordId) -> Result<Self::ViewModel, SheetError>;

    /// Register the controls the sheet attaches after rendering.
    fn on_mount(&self, bindings: &mut ControlBindings);
}

pub struct SheetViewModel {
    store: Arc<dyn RecordStore>,
}

impl SheetViewModel {
    pub fn new(store: Arc<dyn RecordStore>) -> Self {
        Self { store }
    }
}

#[async_trait]
impl Renderable for SheetViewModel {
    type ViewModel = SheetView;

    async fn view_model(&self, owner: RecordId) -> Result<SheetView, SheetError> {
        let record = load_record(&self.store, owner).await?;
        Ok(build_view(&record))
    }

    fn on_mount(&self, bindings: &mut ControlBindings) {
        for control in SheetControl::ALL {
            bindings.bind(control, control.request_type());
        }
    }
}

fn build_view(record: &CharacterRecord) -> SheetView {
    let default_tab = record.default_tab().map(|tab| tab.id);

    let tabs = record
        .tabs()
        .into_iter()
        .map(|tab| TabView {
            id: tab.id.to_string(),
            name: tab.name.clone(),
            locked: tab.locked,
            is_default: Some(tab.id) == default_tab,
            gear: record
                .gear_in_tab(tab.id)
                .into_iter()
                .map(ItemRow::from)
                .collect(),
        })
        .collect();

    let mut items_by_type: BTreeMap<String, Vec<ItemRow>> = BTreeMap::new();
    for kind in [ItemKind::Weapon, ItemKind::Ability, ItemKind::Unknown] {
        let rows: Vec<ItemRow> = record
            .items_of_kind(kind)
            .into_iter()
            .map(ItemRow::from)
            .collect();
        if !rows.is_empty() {
            items_by_type.insert(kind.to_string(), rows);
        }
    }

    SheetView {
        record_id: record.id().to_string(),
        name: record.name().to_string(),
        kind: record.kind(),
        tabs,
        unassigned_gear: record
            .unassigned_gear()
            .into_iter()
            .map(ItemRow::from)
            .collect(),
        items_by_type,
        default_tab: default_tab.map(|id| id.to_string()),
        roll_data: record.roll_data(),
        current_encumbrance: record
            .attribute(ENCUMBRANCE_KEY)
            .filter(|value| !value.is_null())
            .map(FieldValue::to_string),
        choices: (record.kind() == RecordKind::Pc).then(SheetChoices::player_character),
    }
}
