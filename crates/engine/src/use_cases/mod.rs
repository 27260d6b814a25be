//! Use cases - one struct per sheet interaction.
//!
//! Every use case reads fresh state from the [`RecordStore`], validates ids
//! and lock status, and then issues at most one write. Item updates go
//! through the [`DifferentialApplier`].

use std::sync::Arc;

use gearsheet_domain::{CharacterRecord, RecordId};

use crate::infrastructure::ports::RecordStore;

pub mod commit;
pub mod error;
pub mod gear_tabs;
pub mod ordering;
pub mod rolls;
pub mod sheet_items;
pub mod sheet_view;
pub mod transfer;

pub use commit::DifferentialApplier;
pub use error::SheetError;
pub use gear_tabs::{DeleteTab, GearTabUseCases, SetDefaultTab};
pub use ordering::Reindex;
pub use rolls::RollRollable;
pub use sheet_items::{CreateItem, DeleteItem, EditField, SheetItemUseCases, ToggleField};
pub use sheet_view::{Renderable, SheetViewModel};
pub use transfer::{BeginDrag, DropItem, DropOutcome, TransferUseCases};

/// Read a record, failing with `NotFound` when it does not exist.
pub(crate) async fn load_record(
    store: &Arc<dyn RecordStore>,
    id: RecordId,
) -> Result<CharacterRecord, SheetError> {
    store
        .get_record(id)
        .await?
        .ok_or_else(|| SheetError::record_not_found(id))
}
