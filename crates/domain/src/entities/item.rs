//! Item entity - gear, weapons, abilities, and the tabs that group gear
//!
//! Every item carries a free-form data bag. A few keys have meaning to the
//! sheet and are read through typed accessors:
//!
//! - gear: `tab` (owning tab id) and `index` (ordering key within the tab)
//! - tab: `default` (whether new gear lands here)

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::value_objects::{FieldPath, FieldValue};
use gearsheet_domain::ItemId;

pub const TAB_KEY: &str = "tab";
pub const INDEX_KEY: &str = "index";
pub const DEFAULT_KEY: &str = "default";

/// Data bag of an item, keyed by field name.
pub type ItemData = BTreeMap<String, FieldValue>;

/// Type of an item.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ItemKind {
    Gear,
    Weapon,
    Ability,
    Tab,
    /// Unknown type for forward compatibility
    #[serde(other)]
    Unknown,
}

impl ItemKind {
    /// Default name given to freshly created items of this kind.
    pub fn display_name(&self) -> &'static str {
        match self {
            Self::Gear => "Gear",
            Self::Weapon => "Weapon",
            Self::Ability => "Ability",
            Self::Tab => "Tab",
            Self::Unknown => "Item",
        }
    }
}

impl std::fmt::Display for ItemKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Gear => write!(f, "gear"),
            Self::Weapon => write!(f, "weapon"),
            Self::Ability => write!(f, "ability"),
            Self::Tab => write!(f, "tab"),
            Self::Unknown => write!(f, "unknown"),
        }
    }
}

impl std::str::FromStr for ItemKind {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "gear" => Ok(Self::Gear),
            "weapon" => Ok(Self::Weapon),
            "ability" => Ok(Self::Ability),
            "tab" => Ok(Self::Tab),
            _ => Ok(Self::Unknown),
        }
    }
}

/// An item owned by a character record, or an unowned catalog template.
///
/// This is a data-carrying struct: the invariants that span several items
/// (one default tab, gear pointing at real tabs) live on
/// [`crate::aggregates::CharacterRecord`] and in the engine's use cases.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Item {
    pub id: ItemId,
    pub name: String,
    #[serde(rename = "type")]
    pub kind: ItemKind,
    #[serde(default)]
    pub locked: bool,
    #[serde(default)]
    pub data: ItemData,
}

impl Item {
    pub fn new(kind: ItemKind, name: impl Into<String>) -> Self {
        Self {
            id: ItemId::new(),
            name: name.into(),
            kind,
            locked: false,
            data: ItemData::new(),
        }
    }

    pub fn with_locked(mut self, locked: bool) -> Self {
        self.locked = locked;
        self
    }

    pub fn with_data(mut self, key: impl Into<String>, value: impl Into<FieldValue>) -> Self {
        self.data.insert(key.into(), value.into());
        self
    }

    /// Gear filed under `tab` at position `index`.
    pub fn with_placement(self, tab: ItemId, index: i64) -> Self {
        self.with_data(TAB_KEY, tab.to_string())
            .with_data(INDEX_KEY, index)
    }

    pub fn is_gear(&self) -> bool {
        self.kind == ItemKind::Gear
    }

    pub fn is_tab(&self) -> bool {
        self.kind == ItemKind::Tab
    }

    /// Owning tab of a gear item. Unset or unparsable values read as unassigned.
    pub fn tab(&self) -> Option<ItemId> {
        self.data
            .get(TAB_KEY)
            .and_then(FieldValue::as_str)
            .and_then(|raw| raw.parse().ok())
    }

    pub fn index(&self) -> Option<i64> {
        self.data.get(INDEX_KEY).and_then(FieldValue::as_i64)
    }

    pub fn is_default(&self) -> bool {
        self.is_tab()
            && self
                .data
                .get(DEFAULT_KEY)
                .and_then(FieldValue::as_bool)
                .unwrap_or(false)
    }

    /// Current value at a field path.
    pub fn field(&self, path: &FieldPath) -> Option<FieldValue> {
        match path {
            FieldPath::Name => Some(FieldValue::Text(self.name.clone())),
            FieldPath::Locked => Some(FieldValue::Boolean(self.locked)),
            other => other
                .data_key()
                .and_then(|key| self.data.get(key))
                .cloned(),
        }
    }

    /// Write a value at a field path.
    ///
    /// A null tab clears the assignment rather than storing null.
    pub fn set_field(&mut self, path: &FieldPath, value: FieldValue) {
        match path {
            FieldPath::Name => {
                self.name = match value {
                    FieldValue::Text(text) => text,
                    other => other.to_string(),
                }
            }
            FieldPath::Locked => self.locked = value.as_bool().unwrap_or(false),
            FieldPath::Tab if value.is_null() => {
                self.data.remove(TAB_KEY);
            }
            other => {
                if let Some(key) = other.data_key() {
                    self.data.insert(key.to_string(), value);
                }
            }
        }
    }

    /// Creation payload carrying this item's name, type, lock and data.
    pub fn to_new_item(&self) -> NewItem {
        NewItem {
            name: self.name.clone(),
            kind: self.kind,
            locked: self.locked,
            data: self.data.clone(),
        }
    }
}

/// An item about to be created; the store assigns the id.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewItem {
    pub name: String,
    #[serde(rename = "type")]
    pub kind: ItemKind,
    #[serde(default)]
    pub locked: bool,
    #[serde(default)]
    pub data: ItemData,
}

impl NewItem {
    pub fn new(kind: ItemKind, name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            kind,
            locked: false,
            data: ItemData::new(),
        }
    }

    pub fn into_item(self, id: ItemId) -> Item {
        Item {
            id,
            name: self.name,
            kind: self.kind,
            locked: self.locked,
            data: self.data,
        }
    }
}
