//! Shared fixtures for use case and end-to-end tests.

use gearsheet_domain::{CharacterRecord, Item, ItemId, ItemKind, RecordKind};

use crate::infrastructure::ports::MockRecordStore;

/// A player character with two tabs, some gear and a weapon.
///
/// - `backpack`: tab at index 0, the default tab
/// - `belt`: locked tab at index 1
/// - `rope` (index 0) and `torch` (index 3) in the backpack
/// - `dagger` (index 0) in the belt
/// - `sword`: a locked weapon
pub struct SheetFixture {
    pub record: CharacterRecord,
    pub backpack: ItemId,
    pub belt: ItemId,
    pub rope: ItemId,
    pub torch: ItemId,
    pub dagger: ItemId,
    pub sword: ItemId,
}

pub fn sheet() -> SheetFixture {
    let backpack = Item::new(ItemKind::Tab, "Backpack")
        .with_data("index", 0)
        .with_data("default", true);
    let belt = Item::new(ItemKind::Tab, "Belt")
        .with_data("index", 1)
        .with_data("default", false)
        .with_locked(true);
    let rope = Item::new(ItemKind::Gear, "Rope").with_placement(backpack.id, 0);
    let torch = Item::new(ItemKind::Gear, "Torch").with_placement(backpack.id, 3);
    let dagger = Item::new(ItemKind::Gear, "Dagger").with_placement(belt.id, 0);
    let sword = Item::new(ItemKind::Weapon, "Sword")
        .with_data("damage", "1d8")
        .with_locked(true);

    let ids = (backpack.id, belt.id, rope.id, torch.id, dagger.id, sword.id);
    let record = CharacterRecord::new("Brannoc", RecordKind::Pc)
        .with_attribute("STR", 2)
        .with_attribute("DEX", 1)
        .with_default_gear_tab(backpack.id)
        .with_item(backpack)
        .with_item(belt)
        .with_item(rope)
        .with_item(torch)
        .with_item(dagger)
        .with_item(sword);

    SheetFixture {
        record,
        backpack: ids.0,
        belt: ids.1,
        rope: ids.2,
        torch: ids.3,
        dagger: ids.4,
        sword: ids.5,
    }
}

/// A mock store whose `get_record` returns `record` for its own id and `None` otherwise.
pub fn store_returning(record: CharacterRecord) -> MockRecordStore {
    let mut store = MockRecordStore::new();
    store.expect_get_record().returning(move |id| {
        Ok((id == record.id()).then(|| record.clone()))
    });
    store
}
