//! Value objects - Immutable objects defined by their attributes

mod differential;
mod field_path;
mod field_value;
mod formula;
mod ordering;

pub use differential::{Differential, RecordPatch, UpdateBatch};
pub use field_path::{FieldPath, FieldType};
pub use field_value::{FieldValue, RawValue};
pub use formula::{DieRoll, FormulaError, FormulaResult, FormulaTerm, RollFormula, SignedTerm};
pub use ordering::{sort_for_display, SENTINEL_INDEX};
