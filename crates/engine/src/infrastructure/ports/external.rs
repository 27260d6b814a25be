//! External service ports: dice rolling and chat publishing.

use std::collections::BTreeMap;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use gearsheet_domain::{DieRoll, FormulaError, RecordId};

#[derive(Debug, Clone, thiserror::Error)]
pub enum RollError {
    #[error("Invalid roll formula: {0}")]
    InvalidFormula(#[from] FormulaError),
    #[error("Failed to publish roll: {0}")]
    Publish(String),
}

/// A roll to evaluate against a record's roll data and post to chat.
#[derive(Debug, Clone, PartialEq)]
pub struct RollRequest {
    pub speaker: RecordId,
    pub formula: String,
    pub context: BTreeMap<String, i64>,
    pub flavor: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RollOutcome {
    pub speaker: RecordId,
    pub formula: String,
    /// Formula with attributes substituted, e.g. `1d20 + 2`.
    pub resolved: String,
    pub dice: Vec<DieRoll>,
    pub total: i64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub flavor: Option<String>,
    pub rolled_at: DateTime<Utc>,
}

/// A published chat message.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChatMessage {
    pub speaker: RecordId,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub flavor: Option<String>,
    pub content: String,
    pub timestamp: DateTime<Utc>,
}

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait RollPort: Send + Sync {
    async fn roll_and_publish(&self, request: RollRequest) -> Result<RollOutcome, RollError>;
}
