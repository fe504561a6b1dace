use serde::{Deserialize, Serialize};

/// One collected reward, as persisted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RewardEvent {
    pub session_id: String,
    pub word_id: String,
    pub value: i64,
    pub created_at: String,
}

/// Result of a claim attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ClaimOutcome {
    /// A new row was written and the total grew by the claimed value.
    Recorded,
    /// The pair already existed; nothing changed.
    AlreadyClaimed,
}

/// Everything a page needs on mount: running total plus the words that
/// should render as already collected.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EarningsSummary {
    pub session_id: String,
    pub total: i64,
    pub claimed: Vec<String>,
}
