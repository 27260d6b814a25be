//! End-to-end sheet tests.
//!
//! These drive the fully wired [`App`] (and the request dispatcher) against
//! the in-memory record store, catalog and a dice roller with fixed random
//! and clock ports.
//!
//! ```bash
//! cargo test -p gearsheet-engine --lib e2e_tests
//! ```

mod transfer_flow_tests;

use std::sync::Arc;

use chrono::{TimeZone, Utc};
use gearsheet_domain::{CharacterRecord, Item, RecordId};

use crate::api::SheetDispatcher;
use crate::app::App;
use crate::infrastructure::clock::{FixedClock, FixedRandom};
use crate::infrastructure::dice::DiceRoller;
use crate::infrastructure::in_memory::{InMemoryCatalog, InMemoryRecordStore};

/// Every die in these tests lands on this face.
pub const DIE_FACE: i32 = 4;

/// A fully wired app over in-memory adapters.
pub struct SheetHarness {
    pub store: Arc<InMemoryRecordStore>,
    pub roller: Arc<DiceRoller>,
    pub app: Arc<App>,
    pub dispatcher: SheetDispatcher,
}

impl SheetHarness {
    pub fn new(records: Vec<CharacterRecord>) -> Self {
        Self::with_catalog(records, Vec::new())
    }

    pub fn with_catalog(
        records: Vec<CharacterRecord>,
        catalog: Vec<(Option<String>, Item)>,
    ) -> Self {
        let store = Arc::new(InMemoryRecordStore::with_records(records));
        let catalog = Arc::new(InMemoryCatalog::with_items(catalog));
        let now = Utc
            .with_ymd_and_hms(2026, 3, 14, 12, 0, 0)
            .single()
            .expect("valid timestamp");
        let roller = Arc::new(DiceRoller::new(
            Arc::new(FixedRandom(DIE_FACE)),
            Arc::new(FixedClock(now)),
            20,
        ));

        let app = Arc::new(App::new(
            store.clone(),
            catalog,
            store.clone(),
            roller.clone(),
        ));
        let dispatcher = SheetDispatcher::new(app.clone());

        Self {
            store,
            roller,
            app,
            dispatcher,
        }
    }

    /// Current stored state of a record.
    pub async fn record(&self, id: RecordId) -> CharacterRecord {
        use crate::infrastructure::ports::RecordStore;

        self.store
            .get_record(id)
            .await
            .expect("store read")
            .expect("record exists")
    }
}
