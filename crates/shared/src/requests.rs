//! Sheet requests
//!
//! One variant per sheet interaction. Ids travel as strings and are parsed
//! by the engine, which answers malformed ids with `bad_request`.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use gearsheet_domain::{FieldValue, ItemKind, RawValue};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum SheetRequest {
    /// Create an item; `fields` maps field paths (`name`, `data.tab`, ...) to initial values.
    CreateItem {
        item_type: ItemKind,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        name: Option<String>,
        #[serde(default)]
        fields: BTreeMap<String, FieldValue>,
    },
    EditField {
        item_id: String,
        field: String,
        value: RawValue,
    },
    ToggleField {
        item_id: String,
        field: String,
    },
    DeleteItem {
        item_id: String,
    },
    DeleteItems {
        item_ids: Vec<String>,
    },
    SetDefaultTab {
        tab_id: String,
    },
    DeleteTab {
        tab_id: String,
    },
    /// Renumber rows after a sort, in their new display order.
    Reindex {
        item_ids: Vec<String>,
    },
    BeginDrag {
        item_id: String,
    },
    /// Drop transfer text on the sheet, optionally onto a tab.
    Drop {
        payload: String,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        target_tab: Option<String>,
    },
    Roll {
        formula: String,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        label: Option<String>,
    },
    ViewModel,
    /// Control bindings the sheet attaches when it mounts.
    Mount,
    /// Unknown request type for forward compatibility
    #[serde(other)]
    Unknown,
}

impl SheetRequest {
    /// Wire name of the request type, for logging.
    pub fn type_name(&self) -> &'static str {
        match self {
            Self::CreateItem { .. } => "CreateItem",
            Self::EditField { .. } => "EditField",
            Self::ToggleField { .. } => "ToggleField",
            Self::DeleteItem { .. } => "DeleteItem",
            Self::DeleteItems { .. } => "DeleteItems",
            Self::SetDefaultTab { .. } => "SetDefaultTab",
            Self::DeleteTab { .. } => "DeleteTab",
            Self::Reindex { .. } => "Reindex",
            Self::BeginDrag { .. } => "BeginDrag",
            Self::Drop { .. } => "Drop",
            Self::Roll { .. } => "Roll",
            Self::ViewModel => "ViewModel",
            Self::Mount => "Mount",
            Self::Unknown => "Unknown",
        }
    }
}

/// One line of input for the engine binary.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SheetEnvelope {
    pub record_id: String,
    pub request: SheetRequest,
}
