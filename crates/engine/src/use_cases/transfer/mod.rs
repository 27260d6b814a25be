//! Drag-and-drop transfer use cases.
//!
//! A drag serializes the row into a [`gearsheet_shared::TransferPayload`].
//! A drop on the same record moves gear between tabs; a drop from anywhere
//! else clones the item onto the receiving record and leaves the source alone.

use std::sync::Arc;

mod begin_drag;
mod drop_item;

pub use begin_drag::BeginDrag;
pub use drop_item::{DropItem, DropOutcome};

/// Container for transfer use cases.
pub struct TransferUseCases {
    pub begin_drag: Arc<BeginDrag>,
    pub drop_item: Arc<DropItem>,
}

impl TransferUseCases {
    pub fn new(begin_drag: Arc<BeginDrag>, drop_item: Arc<DropItem>) -> Self {
        Self {
            begin_drag,
            drop_item,
        }
    }
}
