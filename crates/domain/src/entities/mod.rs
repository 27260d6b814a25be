//! Entities - items owned by character records

mod item;

pub use item::{Item, ItemData, ItemKind, NewItem, DEFAULT_KEY, INDEX_KEY, TAB_KEY};
