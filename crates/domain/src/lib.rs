extern crate self as gearsheet_domain;

pub mod aggregates;
pub mod entities;
pub mod error;
pub mod ids;
pub mod value_objects;

pub use aggregates::{CharacterRecord, RecordKind, TokenBinding};
pub use entities::{Item, ItemData, ItemKind, NewItem, DEFAULT_KEY, INDEX_KEY, TAB_KEY};
pub use error::DomainError;
pub use ids::{ItemId, RecordId, SceneId, TokenId};
pub use value_objects::{
    sort_for_display, DieRoll, Differential, FieldPath, FieldType, FieldValue, FormulaError,
    FormulaResult, FormulaTerm, RawValue, RecordPatch, RollFormula, SignedTerm, UpdateBatch,
    SENTINEL_INDEX,
};
