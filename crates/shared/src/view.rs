//! Sheet view DTOs
//!
//! What a front end needs to draw a character sheet: tabs with their gear in
//! display order, the other items grouped by type, roll data, and for player
//! characters the choice lists of the sheet's select inputs.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use gearsheet_domain::{Item, ItemData, ItemKind, RecordKind};

// =============================================================================
// View Model
// =============================================================================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SheetView {
    pub record_id: String,
    pub name: String,
    pub kind: RecordKind,
    pub tabs: Vec<TabView>,
    pub unassigned_gear: Vec<ItemRow>,
    /// Non-gear, non-tab items keyed by item type (`weapon`, `ability`, ...).
    pub items_by_type: BTreeMap<String, Vec<ItemRow>>,
    /// Default gear tab, present only while that tab exists.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default_tab: Option<String>,
    pub roll_data: BTreeMap<String, i64>,
    /// Key of the encumbrance row to highlight.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub current_encumbrance: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub choices: Option<SheetChoices>,
}

impl SheetView {
    pub fn tab(&self, id: &str) -> Option<&TabView> {
        self.tabs.iter().find(|tab| tab.id == id)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TabView {
    pub id: String,
    pub name: String,
    pub locked: bool,
    pub is_default: bool,
    pub gear: Vec<ItemRow>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ItemRow {
    pub id: String,
    pub name: String,
    #[serde(rename = "type")]
    pub kind: ItemKind,
    pub locked: bool,
    pub data: ItemData,
}

impl From<&Item> for ItemRow {
    fn from(item: &Item) -> Self {
        Self {
            id: item.id.to_string(),
            name: item.name.clone(),
            kind: item.kind,
            locked: item.locked,
            data: item.data.clone(),
        }
    }
}

// =============================================================================
// Choice Lists
// =============================================================================

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Choice {
    pub value: String,
    pub label: String,
}

impl Choice {
    fn same(value: &str) -> Self {
        Self {
            value: value.to_string(),
            label: value.to_string(),
        }
    }

    fn labelled(value: &str, label: &str) -> Self {
        Self {
            value: value.to_string(),
            label: label.to_string(),
        }
    }
}

const ALIGNMENTS: [&str; 10] = [
    "(choose one)",
    "Lawful Good",
    "Lawful Neutral",
    "Lawful Evil",
    "Neutral Good",
    "Neutral Neutral",
    "Neutral Evil",
    "Chaotic Good",
    "Chaotic Neutral",
    "Chaotic Evil",
];

const HIT_DICE: [&str; 5] = ["d4", "d6", "d8", "d10", "d12"];

const STATS: [&str; 8] = ["None", "STR", "DEX", "CON", "INT", "WIS", "CHA", "PER"];

const ATTACK_TYPES: [&str; 4] = ["", "Melee", "Missile", "Thrown"];

const DAMAGE_TYPES: [(&str, &str); 3] = [
    ("Bludgeoning", "Bludg."),
    ("Slashing", "Slash."),
    ("Piercing", "Pierc."),
];

/// Options of the player character sheet's select inputs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SheetChoices {
    pub alignments: Vec<Choice>,
    pub hit_dice: Vec<Choice>,
    pub stats: Vec<Choice>,
    pub attack_types: Vec<Choice>,
    pub damage_types: Vec<Choice>,
}

impl SheetChoices {
    pub fn player_character() -> Self {
        Self {
            alignments: ALIGNMENTS.iter().copied().map(Choice::same).collect(),
            hit_dice: HIT_DICE.iter().copied().map(Choice::same).collect(),
            stats: STATS.iter().copied().map(Choice::same).collect(),
            attack_types: ATTACK_TYPES.iter().copied().map(Choice::same).collect(),
            damage_types: DAMAGE_TYPES
                .iter()
                .map(|(value, label)| Choice::labelled(value, label))
                .collect(),
        }
    }
}

// =============================================================================
// Control Bindings
// =============================================================================

/// Interactive controls of a sheet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SheetControl {
    ItemCreate,
    ItemEdit,
    ItemToggle,
    ItemDelete,
    Rollable,
    GearTabDelete,
    GearTabDefault,
    ItemTableSort,
    ItemDrag,
    ItemDrop,
}

impl SheetControl {
    pub const ALL: [SheetControl; 10] = [
        Self::ItemCreate,
        Self::ItemEdit,
        Self::ItemToggle,
        Self::ItemDelete,
        Self::Rollable,
        Self::GearTabDelete,
        Self::GearTabDefault,
        Self::ItemTableSort,
        Self::ItemDrag,
        Self::ItemDrop,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Self::ItemCreate => "item-create",
            Self::ItemEdit => "item-edit",
            Self::ItemToggle => "item-toggle",
            Self::ItemDelete => "item-delete",
            Self::Rollable => "rollable",
            Self::GearTabDelete => "gear-tab-delete",
            Self::GearTabDefault => "gear-tab-default",
            Self::ItemTableSort => "item-table-sort",
            Self::ItemDrag => "item-drag",
            Self::ItemDrop => "item-drop",
        }
    }

    /// The request type the control sends.
    pub fn request_type(&self) -> &'static str {
        match self {
            Self::ItemCreate => "CreateItem",
            Self::ItemEdit => "EditField",
            Self::ItemToggle => "ToggleField",
            Self::ItemDelete => "DeleteItem",
            Self::Rollable => "Roll",
            Self::GearTabDelete => "DeleteTab",
            Self::GearTabDefault => "SetDefaultTab",
            Self::ItemTableSort => "Reindex",
            Self::ItemDrag => "BeginDrag",
            Self::ItemDrop => "Drop",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ControlBinding {
    pub control: SheetControl,
    pub request_type: String,
}

/// Controls registered by a mounted sheet, in registration order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ControlBindings {
    bindings: Vec<ControlBinding>,
}

impl ControlBindings {
    pub fn new() -> Self {
        Self::default()
    }

    /// Bind a control to a request type, replacing an earlier binding.
    pub fn bind(&mut self, control: SheetControl, request_type: impl Into<String>) {
        let request_type = request_type.into();
        match self.bindings.iter_mut().find(|b| b.control == control) {
            Some(existing) => existing.request_type = request_type,
            None => self.bindings.push(ControlBinding {
                control,
                request_type,
            }),
        }
    }

    pub fn request_type(&self, control: SheetControl) -> Option<&str> {
        self.bindings
            .iter()
            .find(|b| b.control == control)
            .map(|b| b.request_type.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = &ControlBinding> {
        self.bindings.iter()
    }

    pub fn len(&self) -> usize {
        self.bindings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bindings.is_empty()
    }
}
