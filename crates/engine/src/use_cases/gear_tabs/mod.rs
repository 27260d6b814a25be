//! Gear tab use cases: default tab selection and cascading tab deletion.

use std::sync::Arc;

mod delete_tab;
mod set_default_tab;

pub use delete_tab::DeleteTab;
pub use set_default_tab::SetDefaultTab;

/// Container for gear tab use cases.
pub struct GearTabUseCases {
    pub set_default: Arc<SetDefaultTab>,
    pub delete: Arc<DeleteTab>,
}

impl GearTabUseCases {
    pub fn new(set_default: Arc<SetDefaultTab>, delete: Arc<DeleteTab>) -> Self {
        Self {
            set_default,
            delete,
        }
    }
}
