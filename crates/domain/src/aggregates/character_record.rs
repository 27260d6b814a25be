//! CharacterRecord aggregate - a character sheet and the items it owns
//!
//! # Rustic DDD Design
//!
//! - **Private fields**: the roster is only changed through whole batches
//! - **Valid by construction**: `apply` and `remove_items` check every id
//!   before touching anything, so a batch lands completely or not at all
//! - **Builder pattern**: Fluent API for optional fields

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::entities::{Item, ItemKind};
use crate::error::DomainError;
use crate::value_objects::{sort_for_display, FieldValue, UpdateBatch};
use gearsheet_domain::{ItemId, RecordId, SceneId, TokenId};

/// Kind of character record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum RecordKind {
    #[default]
    Pc,
    Npc,
    /// Unknown kind for forward compatibility
    #[serde(other)]
    Unknown,
}

/// Placement of a token-bound record (a per-token copy of a character).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TokenBinding {
    pub scene_id: SceneId,
    pub token_id: TokenId,
}

/// A character record and its roster of items.
///
/// # Invariants
///
/// - Item ids are unique within the roster
/// - The roster keeps insertion order; display order is derived from it
///
/// # Example
///
/// ```
/// use gearsheet_domain::{CharacterRecord, Item, ItemKind, RecordKind};
///
/// let pack = Item::new(ItemKind::Tab, "Backpack");
/// let rope = Item::new(ItemKind::Gear, "Rope").with_placement(pack.id, 0);
/// let record = CharacterRecord::new("Brannoc", RecordKind::Pc)
///     .with_item(pack.clone())
///     .with_item(rope);
///
/// assert_eq!(record.tabs().len(), 1);
/// assert_eq!(record.gear_in_tab(pack.id)[0].name, "Rope");
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CharacterRecord {
    id: RecordId,
    name: String,
    #[serde(default)]
    kind: RecordKind,
    #[serde(default)]
    attributes: BTreeMap<String, FieldValue>,
    #[serde(default)]
    default_gear_tab: Option<ItemId>,
    #[serde(default)]
    items: Vec<Item>,
    #[serde(default)]
    token: Option<TokenBinding>,
    #[serde(default)]
    pack: Option<String>,
}

impl CharacterRecord {
    // =========================================================================
    // Constructor
    // =========================================================================

    pub fn new(name: impl Into<String>, kind: RecordKind) -> Self {
        Self {
            id: RecordId::new(),
            name: name.into(),
            kind,
            attributes: BTreeMap::new(),
            default_gear_tab: None,
            items: Vec::new(),
            token: None,
            pack: None,
        }
    }

    // =========================================================================
    // Builder Methods
    // =========================================================================

    pub fn with_attribute(mut self, key: impl Into<String>, value: impl Into<FieldValue>) -> Self {
        self.attributes.insert(key.into(), value.into());
        self
    }

    pub fn with_item(mut self, item: Item) -> Self {
        self.insert_item(item);
        self
    }

    pub fn with_default_gear_tab(mut self, tab_id: ItemId) -> Self {
        self.default_gear_tab = Some(tab_id);
        self
    }

    pub fn with_token(mut self, binding: TokenBinding) -> Self {
        self.token = Some(binding);
        self
    }

    pub fn with_pack(mut self, pack: impl Into<String>) -> Self {
        self.pack = Some(pack.into());
        self
    }

    // =========================================================================
    // Accessors
    // =========================================================================

    #[inline]
    pub fn id(&self) -> RecordId {
        self.id
    }

    #[inline]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[inline]
    pub fn kind(&self) -> RecordKind {
        self.kind
    }

    #[inline]
    pub fn attributes(&self) -> &BTreeMap<String, FieldValue> {
        &self.attributes
    }

    pub fn attribute(&self, key: &str) -> Option<&FieldValue> {
        self.attributes.get(key)
    }

    /// The stored default gear tab id, which may be stale.
    ///
    /// Use [`Self::default_tab`] when the tab must exist.
    #[inline]
    pub fn default_gear_tab(&self) -> Option<ItemId> {
        self.default_gear_tab
    }

    #[inline]
    pub fn items(&self) -> &[Item] {
        &self.items
    }

    #[inline]
    pub fn token(&self) -> Option<TokenBinding> {
        self.token
    }

    #[inline]
    pub fn pack(&self) -> Option<&str> {
        self.pack.as_deref()
    }

    // =========================================================================
    // Roster Queries
    // =========================================================================

    pub fn item(&self, id: ItemId) -> Option<&Item> {
        self.items.iter().find(|item| item.id == id)
    }

    pub fn contains(&self, id: ItemId) -> bool {
        self.item(id).is_some()
    }

    /// A tab of this record.
    pub fn tab(&self, id: ItemId) -> Option<&Item> {
        self.item(id).filter(|item| item.is_tab())
    }

    /// Tabs in display order.
    pub fn tabs(&self) -> Vec<&Item> {
        sort_for_display(self.items.iter().filter(|item| item.is_tab()))
    }

    /// The default gear tab, if it is set and still exists.
    pub fn default_tab(&self) -> Option<&Item> {
        self.default_gear_tab.and_then(|id| self.tab(id))
    }

    /// Gear filed under a tab, in display order.
    pub fn gear_in_tab(&self, tab_id: ItemId) -> Vec<&Item> {
        sort_for_display(
            self.items
                .iter()
                .filter(|item| item.is_gear() && item.tab() == Some(tab_id)),
        )
    }

    /// Gear whose tab is unset or no longer exists.
    pub fn unassigned_gear(&self) -> Vec<&Item> {
        sort_for_display(self.items.iter().filter(|item| {
            item.is_gear() && item.tab().map_or(true, |tab| self.tab(tab).is_none())
        }))
    }

    pub fn items_of_kind(&self, kind: ItemKind) -> Vec<&Item> {
        sort_for_display(self.items.iter().filter(|item| item.kind == kind))
    }

    /// Numeric attributes, keyed by name, for evaluating roll formulas.
    pub fn roll_data(&self) -> BTreeMap<String, i64> {
        self.attributes
            .iter()
            .filter_map(|(key, value)| value.as_number().map(|n| (key.clone(), n)))
            .collect()
    }

    // =========================================================================
    // Roster Mutations (used by store adapters)
    // =========================================================================

    /// Attach an item, replacing any item with the same id in place.
    pub fn insert_item(&mut self, item: Item) {
        match self.items.iter_mut().find(|existing| existing.id == item.id) {
            Some(existing) => *existing = item,
            None => self.items.push(item),
        }
    }

    /// Apply a batch. Every differential must name an item of this record;
    /// otherwise nothing is applied.
    pub fn apply(&mut self, batch: &UpdateBatch) -> Result<(), DomainError> {
        if let Some(missing) = batch.item_ids().find(|id| !self.contains(*id)) {
            return Err(DomainError::not_found("Item", missing.to_string()));
        }

        for diff in &batch.items {
            if let Some(item) = self.items.iter_mut().find(|item| item.id == diff.id) {
                for (path, value) in &diff.changes {
                    item.set_field(path, value.clone());
                }
            }
        }
        if let Some(patch) = &batch.record {
            if let Some(tab_id) = patch.default_gear_tab {
                self.default_gear_tab = Some(tab_id);
            }
        }
        Ok(())
    }

    /// Remove items. Every id must name an item of this record; otherwise
    /// nothing is removed. Returns the removed items.
    pub fn remove_items(&mut self, ids: &[ItemId]) -> Result<Vec<Item>, DomainError> {
        if let Some(missing) = ids.iter().find(|id| !self.contains(**id)) {
            return Err(DomainError::not_found("Item", missing.to_string()));
        }

        let (removed, kept) = std::mem::take(&mut self.items)
            .into_iter()
            .partition(|item| ids.contains(&item.id));
        self.items = kept;
        Ok(removed)
    }
}
