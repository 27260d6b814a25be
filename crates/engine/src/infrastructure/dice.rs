//! Dice roller - evaluates roll formulas and posts the result to an in-memory chat log.

use std::collections::VecDeque;
use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::RwLock;

use gearsheet_domain::RollFormula;

use crate::infrastructure::ports::{
    ChatMessage, ClockPort, RandomPort, RollError, RollOutcome, RollPort, RollRequest,
};

pub struct DiceRoller {
    random: Arc<dyn RandomPort>,
    clock: Arc<dyn ClockPort>,
    chat_log: RwLock<VecDeque<ChatMessage>>,
    chat_log_limit: usize,
}

impl DiceRoller {
    pub fn new(random: Arc<dyn RandomPort>, clock: Arc<dyn ClockPort>, chat_log_limit: usize) -> Self {
        Self {
            random,
            clock,
            chat_log: RwLock::new(VecDeque::new()),
            chat_log_limit,
        }
    }

    /// Most recent chat messages, oldest first.
    pub async fn recent_messages(&self, limit: usize) -> Vec<ChatMessage> {
        let log = self.chat_log.read().await;
        let skip = log.len().saturating_sub(limit);
        log.iter().skip(skip).cloned().collect()
    }

    async fn publish(&self, message: ChatMessage) {
        let mut log = self.chat_log.write().await;
        log.push_back(message);
        while log.len() > self.chat_log_limit {
            log.pop_front();
        }
    }
}

#[async_trait]
impl RollPort for DiceRoller {
    async fn roll_and_publish(&self, request: RollRequest) -> Result<RollOutcome, RollError> {
        let formula = RollFormula::parse(&request.formula)?;
        let result = formula.evaluate(&request.context, |sides| {
            let max = i32::try_from(sides).unwrap_or(i32::MAX);
            u32::try_from(self.random.gen_range(1, max)).unwrap_or(1)
        })?;

        let rolled_at = self.clock.now();
        let outcome = RollOutcome {
            speaker: request.speaker,
            formula: request.formula,
            resolved: result.resolved,
            dice: result.dice,
            total: result.total,
            flavor: request.flavor,
            rolled_at,
        };

        self.publish(ChatMessage {
            speaker: outcome.speaker,
            flavor: outcome.flavor.clone(),
            content: format!("{} = {}", outcome.resolved, outcome.total),
            timestamp: rolled_at,
        })
        .await;

        tracing::info!(
            speaker = %outcome.speaker,
            formula = %outcome.formula,
            total = outcome.total,
            flavor = ?outcome.flavor,
            "Roll published"
        );

        Ok(outcome)
    }
}
