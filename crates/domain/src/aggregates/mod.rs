//! Aggregates - consistency boundaries

pub mod character_record;

pub use character_record::{CharacterRecord, RecordKind, TokenBinding};
