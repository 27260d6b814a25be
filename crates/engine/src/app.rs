//! Application state and composition.

use std::sync::Arc;

use crate::infrastructure::ports::{CatalogLookup, ContextResolver, RecordStore, RollPort};
use crate::use_cases::{
    BeginDrag, CreateItem, DeleteItem, DeleteTab, DifferentialApplier, DropItem, EditField,
    GearTabUseCases, Reindex, RollRollable, SetDefaultTab, SheetItemUseCases, SheetViewModel,
    ToggleField, TransferUseCases,
};

/// Main application state.
///
/// Holds every sheet use case, wired against the injected ports.
pub struct App {
    pub use_cases: UseCases,
}

/// Container for all use cases.
pub struct UseCases {
    pub items: SheetItemUseCases,
    pub tabs: GearTabUseCases,
    pub reindex: Arc<Reindex>,
    pub transfer: TransferUseCases,
    pub roll: Arc<RollRollable>,
    pub view: Arc<SheetViewModel>,
}

impl App {
    /// Create a new App with all dependencies wired up.
    pub fn new(
        store: Arc<dyn RecordStore>,
        catalog: Arc<dyn CatalogLookup>,
        resolver: Arc<dyn ContextResolver>,
        roller: Arc<dyn RollPort>,
    ) -> Self {
        let applier = Arc::new(DifferentialApplier::new(store.clone()));

        let items = SheetItemUseCases::new(
            Arc::new(CreateItem::new(store.clone())),
            Arc::new(EditField::new(store.clone(), applier.clone())),
            Arc::new(ToggleField::new(store.clone(), applier.clone())),
            Arc::new(DeleteItem::new(store.clone())),
        );

        let tabs = GearTabUseCases::new(
            Arc::new(SetDefaultTab::new(store.clone(), applier.clone())),
            Arc::new(DeleteTab::new(store.clone())),
        );

        let transfer = TransferUseCases::new(
            Arc::new(BeginDrag::new(store.clone())),
            Arc::new(DropItem::new(
                store.clone(),
                catalog,
                resolver,
                applier.clone(),
            )),
        );

        let use_cases = UseCases {
            items,
            tabs,
            reindex: Arc::new(Reindex::new(store.clone(), applier)),
            transfer,
            roll: Arc::new(RollRollable::new(store.clone(), roller)),
            view: Arc::new(SheetViewModel::new(store)),
        };

        Self { use_cases }
    }
}
