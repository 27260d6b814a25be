//! Roll a sheet rollable against the record's roll data.

use std::sync::Arc;

use gearsheet_domain::RecordId;

use crate::infrastructure::ports::{RecordStore, RollOutcome, RollPort, RollRequest};
use crate::use_cases::{load_record, SheetError};

pub struct RollRollable {
    store: Arc<dyn RecordStore>,
    roller: Arc<dyn RollPort>,
}

impl RollRollable {
    pub fn new(store: Arc<dyn RecordStore>, roller: Arc<dyn RollPort>) -> Self {
        Self { store, roller }
    }

    /// Roll `formula` as `owner`. An empty formula rolls nothing.
    pub async fn execute(
        &self,
        owner: RecordId,
        formula: String,
        label: Option<String>,
    ) -> Result<Option<RollOutcome>, SheetError> {
        if formula.trim().is_empty() {
            return Ok(None);
        }

        let record = load_record(&self.store, owner).await?;
        let request = RollRequest {
            speaker: owner,
            formula,
            context: record.roll_data(),
            flavor: label
                .filter(|label| !label.is_empty())
                .map(|label| format!("Rolling {}", label)),
        };

        let outcome = self.roller.roll_and_publish(request).await?;
        Ok(Some(outcome))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::ports::{MockRecordStore, MockRollPort, RollError};
    use crate::test_fixtures::{sheet, store_returning};
    use chrono::Utc;
    use gearsheet_domain::FormulaError;

    #[tokio::test]
    async fn passes_roll_data_and_flavor() {
        let fixture = sheet();
        let owner = fixture.record.id();

        let mut roller = MockRollPort::new();
        roller
            .expect_roll_and_publish()
            .withf(move |request| {
                request.speaker == owner
                    && request.formula == "1d20+@STR"
                    && request.context.get("STR") == Some(&2)
                    && request.flavor.as_deref() == Some("Rolling Strength")
            })
            .times(1)
            .returning(|request| {
                Ok(RollOutcome {
                    speaker: request.speaker,
                    formula: request.formula,
                    resolved: "1d20 + 2".into(),
                    dice: Vec::new(),
                    total: 14,
                    flavor: request.flavor,
                    rolled_at: Utc::now(),
                })
            });

        let use_case = RollRollable::new(Arc::new(store_returning(fixture.record)), Arc::new(roller));
        let outcome = use_case
            .execute(owner, "1d20+@STR".into(), Some("Strength".into()))
            .await
            .unwrap()
            .unwrap();

        assert_eq!(outcome.total, 14);
    }

    #[tokio::test]
    async fn no_label_means_no_flavor() {
        let fixture = sheet();
        let owner = fixture.record.id();

        let mut roller = MockRollPort::new();
        roller
            .expect_roll_and_publish()
            .withf(|request| request.flavor.is_none())
            .times(1)
            .returning(|_| Err(RollError::InvalidFormula(FormulaError::Empty)));

        let use_case = RollRollable::new(Arc::new(store_returning(fixture.record)), Arc::new(roller));
        let result = use_case.execute(owner, "1d".into(), None).await;

        assert!(matches!(result, Err(SheetError::Roll(_))));
    }

    #[tokio::test]
    async fn empty_formula_rolls_nothing() {
        let mut store = MockRecordStore::new();
        store.expect_get_record().never();
        let mut roller = MockRollPort::new();
        roller.expect_roll_and_publish().never();

        let use_case = RollRollable::new(Arc::new(store), Arc::new(roller));
        let outcome = use_case
            .execute(RecordId::new(), "  ".into(), Some("Nothing".into()))
            .await
            .unwrap();

        assert!(outcome.is_none());
    }
}
