//! Tauri commands for the reward ledger.
//!
//! Every command takes the session id explicitly; the frontend resolves it
//! once through `get_session_id` and passes it along.

use tauri::State;
use tracing::info;

use crate::ledger::{ClaimOutcome, EarningsSummary, RewardEvent};
use crate::state::LedgerState;

/// Total plus already-collected words for a session.
#[tauri::command]
pub fn get_earnings_summary(
    state: State<'_, LedgerState>,
    session_id: String,
) -> Result<EarningsSummary, String> {
    let summary = state.with_ledger(|ledger| ledger.summary(&session_id))?;
    info!(
        "Loaded summary for {}: total {}, {} claimed",
        session_id,
        summary.total,
        summary.claimed.len()
    );
    Ok(summary)
}

#[tauri::command]
pub fn get_earnings_total(state: State<'_, LedgerState>, session_id: String) -> Result<i64, String> {
    Ok(state.with_ledger(|ledger| ledger.total_for(&session_id))?)
}

#[tauri::command]
pub fn has_claimed(
    state: State<'_, LedgerState>,
    session_id: String,
    word_id: String,
) -> Result<bool, String> {
    Ok(state.with_ledger(|ledger| ledger.has_claimed(&session_id, &word_id))?)
}

/// Record a collected word. Duplicates come back as `already_claimed`.
#[tauri::command]
pub fn claim_reward(
    state: State<'_, LedgerState>,
    session_id: String,
    word_id: String,
    value: i64,
) -> Result<ClaimOutcome, String> {
    Ok(state.with_ledger(|ledger| ledger.claim(&session_id, &word_id, value))?)
}

/// Claim history for a session, oldest first.
#[tauri::command]
pub fn list_reward_events(
    state: State<'_, LedgerState>,
    session_id: String,
) -> Result<Vec<RewardEvent>, String> {
    Ok(state.with_ledger(|ledger| ledger.events_for(&session_id))?)
}
