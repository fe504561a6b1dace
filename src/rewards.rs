//! Click-to-earn coordinator shared by every page.
//!
//! Claims are applied to the display immediately and written to the ledger
//! in the background. When the write does not count the award is taken
//! back.

use std::collections::{HashMap, HashSet};

use leptos::prelude::*;
use wasm_bindgen_futures::spawn_local;

use crate::commands::{self, ClaimOutcome, EarningsSummary};
use crate::earnings::{EarningsDisplay, HEADER_REVEAL_MS};
use crate::timer;

/// Shown until the ledger answers, and kept if it never does.
pub const BASE_AMOUNT: i64 = 1000;

/// Words collected in this window and the optimistic awards the ledger has
/// not confirmed yet.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ClaimBook {
    claimed: HashSet<String>,
    awarded: HashMap<String, i64>,
    load_generation: u64,
}

impl ClaimBook {
    pub fn is_claimed(&self, source_id: &str) -> bool {
        self.claimed.contains(source_id)
    }

    /// Local guard. Returns true if the award should be shown and written.
    pub fn begin(&mut self, source_id: &str, value: i64) -> bool {
        if value <= 0 || self.claimed.contains(source_id) {
            return false;
        }
        self.claimed.insert(source_id.to_string());
        self.awarded.insert(source_id.to_string(), value);
        true
    }

    /// The ledger answered a claim. Returns the amount to take back from the
    /// display.
    ///
    /// An award a loaded summary already accounted for has left `awarded`,
    /// so it is never taken back twice.
    pub fn settle(&mut self, source_id: &str, result: &Result<ClaimOutcome, String>) -> i64 {
        match result {
            // Stays in `awarded` until a summary lists it
            Ok(ClaimOutcome::Recorded) => 0,
            // Counted by another window; the word stays collected here
            Ok(ClaimOutcome::AlreadyClaimed) => self.awarded.remove(source_id).unwrap_or(0),
            Err(_) => match self.awarded.remove(source_id) {
                Some(value) => {
                    self.claimed.remove(source_id);
                    value
                }
                None => 0,
            },
        }
    }

    pub fn start_load(&mut self) -> u64 {
        self.load_generation += 1;
        self.load_generation
    }

    /// Merge a ledger summary and return the settled total to show: the
    /// ledger's total plus awards it has not seen yet. `None` when a newer
    /// load has started since this one.
    pub fn adopt(&mut self, generation: u64, summary: &EarningsSummary) -> Option<i64> {
        if generation != self.load_generation {
            return None;
        }
        self.awarded.retain(|id, _| !summary.claimed.contains(id));
        self.claimed.extend(summary.claimed.iter().cloned());
        let unrecorded: i64 = self.awarded.values().sum();
        Some(summary.total + unrecorded)
    }
}

/// Put `settled` under whatever delta is still being revealed.
pub fn reconcile(display: &mut EarningsDisplay, settled: i64) {
    let pending = display.shown_delta();
    display.rebase(settled - pending);
}

#[derive(Clone, Copy)]
pub struct RewardsContext {
    pub session: RwSignal<Option<String>>,
    pub book: RwSignal<ClaimBook>,
    pub display: RwSignal<EarningsDisplay>,
    reveal_timer: StoredValue<Option<i32>>,
}

impl RewardsContext {
    pub fn new() -> Self {
        Self {
            session: RwSignal::new(None),
            book: RwSignal::new(ClaimBook::default()),
            display: RwSignal::new(EarningsDisplay::new(BASE_AMOUNT)),
            reveal_timer: StoredValue::new(None),
        }
    }

    pub fn is_claimed(&self, source_id: &str) -> bool {
        self.book.with(|b| b.is_claimed(source_id))
    }

    /// Collect `value` for `source_id`. Returns false when the source was
    /// already collected, in which case nothing happens.
    pub fn collect(&self, source_id: &str, value: i64) -> bool {
        let fresh = self
            .book
            .try_update(|b| b.begin(source_id, value))
            .unwrap_or(false);
        if !fresh {
            return false;
        }

        self.award(value);

        let ctx = *self;
        let source_id = source_id.to_string();
        spawn_local(async move {
            ctx.write_through(source_id, value).await;
        });
        true
    }

    /// Resolve the session and adopt the ledger's total and claimed words.
    /// Runs on every navigation, so claims from other windows show up.
    pub fn load(&self) {
        let ctx = *self;
        spawn_local(async move {
            let Some(generation) = ctx.book.try_update(|b| b.start_load()) else {
                return;
            };
            match ctx.resolve_session().await {
                Ok(session_id) => match commands::get_earnings_summary(&session_id).await {
                    Ok(summary) => ctx.adopt(generation, &summary),
                    Err(e) => log_warning(&format!("Failed to load earnings: {}", e)),
                },
                Err(e) => log_warning(&format!("Failed to resolve session: {}", e)),
            }
        });
    }

    fn award(&self, value: i64) {
        let reveal = self.display.try_update(|d| d.receive(value)).flatten();
        if reveal.is_none() {
            return;
        }

        // Started or extended: either way the reveal runs its full length
        // from the latest award.
        if let Some(id) = self.reveal_timer.get_value() {
            timer::clear_timeout(id);
        }
        let display = self.display;
        let reveal_timer = self.reveal_timer;
        let id = timer::set_timeout(
            move || {
                let _ = display.try_update(|d| d.complete());
                reveal_timer.set_value(None);
            },
            HEADER_REVEAL_MS,
        );
        self.reveal_timer.set_value(id);
    }

    async fn resolve_session(&self) -> Result<String, String> {
        if let Some(id) = self.session.try_get_untracked().flatten() {
            return Ok(id);
        }
        let id = commands::get_session_id().await?;
        let _ = self.session.try_set(Some(id.clone()));
        Ok(id)
    }

    async fn write_through(&self, source_id: String, value: i64) {
        let result = match self.resolve_session().await {
            Ok(session_id) => commands::claim_reward(&session_id, &source_id, value).await,
            Err(e) => Err(e),
        };
        if let Err(e) = &result {
            log_warning(&format!("Failed to record {}: {}", source_id, e));
        }

        let revoked = self
            .book
            .try_update(|b| b.settle(&source_id, &result))
            .unwrap_or(0);
        if revoked > 0 {
            let _ = self.display.try_update(|d| d.revoke(revoked));
        }
    }

    fn adopt(&self, generation: u64, summary: &EarningsSummary) {
        if let Some(Some(settled)) = self.book.try_update(|b| b.adopt(generation, summary)) {
            let _ = self.display.try_update(|d| reconcile(d, settled));
        }
    }
}

impl Default for RewardsContext {
    fn default() -> Self {
        Self::new()
    }
}

fn log_warning(message: &str) {
    web_sys::console::warn_1(&message.into());
}

#[cfg(test)]
mod tests {
    use super::*;

    fn summary(total: i64, claimed: &[&str]) -> EarningsSummary {
        EarningsSummary {
            session_id: "session_1_a".to_string(),
            total,
            claimed: claimed.iter().map(|s| s.to_string()).collect(),
        }
    }

    /// Collect on both the book and the display, as `collect` does.
    fn click(book: &mut ClaimBook, display: &mut EarningsDisplay, id: &str, value: i64) -> bool {
        if !book.begin(id, value) {
            return false;
        }
        display.receive(value);
        true
    }

    fn answer(
        book: &mut ClaimBook,
        display: &mut EarningsDisplay,
        id: &str,
        result: Result<ClaimOutcome, String>,
    ) {
        let revoked = book.settle(id, &result);
        display.revoke(revoked);
    }

    fn load(book: &mut ClaimBook, display: &mut EarningsDisplay, loaded: &EarningsSummary) {
        let generation = book.start_load();
        if let Some(settled) = book.adopt(generation, loaded) {
            reconcile(display, settled);
        }
    }

    #[test]
    fn test_double_click_claims_once() {
        let mut book = ClaimBook::default();
        let mut display = EarningsDisplay::new(BASE_AMOUNT);

        assert!(click(&mut book, &mut display, "hero-red-words", 500));
        assert!(!click(&mut book, &mut display, "hero-red-words", 500));
        assert!(book.is_claimed("hero-red-words"));
        assert_eq!(display.settled_total(), 1500);
    }

    #[test]
    fn test_non_positive_value_not_claimed() {
        let mut book = ClaimBook::default();
        assert!(!book.begin("free", 0));
        assert!(!book.is_claimed("free"));
    }

    #[test]
    fn test_recorded_keeps_award() {
        let mut book = ClaimBook::default();
        let mut display = EarningsDisplay::new(BASE_AMOUNT);
        click(&mut book, &mut display, "skills-table", 2500);

        answer(&mut book, &mut display, "skills-table", Ok(ClaimOutcome::Recorded));
        display.complete();
        assert_eq!(display.shown_total(), 3500);
        assert!(book.is_claimed("skills-table"));
    }

    #[test]
    fn test_already_claimed_revokes_but_stays_collected() {
        let mut book = ClaimBook::default();
        let mut display = EarningsDisplay::new(BASE_AMOUNT);
        click(&mut book, &mut display, "skills-table", 2500);

        answer(&mut book, &mut display, "skills-table", Ok(ClaimOutcome::AlreadyClaimed));
        assert_eq!(display.settled_total(), 1000);
        assert!(book.is_claimed("skills-table"));
        assert!(!click(&mut book, &mut display, "skills-table", 2500));
    }

    #[test]
    fn test_write_error_rolls_back() {
        let mut book = ClaimBook::default();
        let mut display = EarningsDisplay::new(BASE_AMOUNT);
        click(&mut book, &mut display, "hero-red-words", 500);

        answer(&mut book, &mut display, "hero-red-words", Err("database is locked".into()));
        assert_eq!(display.settled_total(), 1000);
        assert!(!book.is_claimed("hero-red-words"));

        // Clickable again
        assert!(click(&mut book, &mut display, "hero-red-words", 500));
        assert_eq!(display.settled_total(), 1500);
    }

    #[test]
    fn test_load_counts_writes_in_flight() {
        let mut book = ClaimBook::default();
        let mut display = EarningsDisplay::new(BASE_AMOUNT);
        click(&mut book, &mut display, "hero-red-words", 500);
        click(&mut book, &mut display, "skills-table", 2500);

        // hero-red-words already landed, skills-table is still being written
        load(&mut book, &mut display, &summary(1500, &["hero-red-words"]));
        assert_eq!(display.settled_total(), 4000);
        assert_eq!(display.shown_delta(), 3000);

        answer(&mut book, &mut display, "skills-table", Ok(ClaimOutcome::Recorded));
        display.complete();
        assert_eq!(display.shown_total(), 4000);
    }

    #[test]
    fn test_load_before_already_claimed_reply_not_revoked_twice() {
        let mut book = ClaimBook::default();
        let mut display = EarningsDisplay::new(BASE_AMOUNT);

        // Claimed in an earlier run; the summary arrives before the reply
        click(&mut book, &mut display, "hero-red-words", 500);
        load(&mut book, &mut display, &summary(1500, &["hero-red-words"]));
        answer(&mut book, &mut display, "hero-red-words", Ok(ClaimOutcome::AlreadyClaimed));
        display.complete();

        assert_eq!(display.shown_total(), 1500);
        assert!(book.is_claimed("hero-red-words"));
    }

    #[test]
    fn test_load_before_failed_write_keeps_ledger_claim() {
        let mut book = ClaimBook::default();
        let mut display = EarningsDisplay::new(BASE_AMOUNT);

        click(&mut book, &mut display, "hero-red-words", 500);
        load(&mut book, &mut display, &summary(1500, &["hero-red-words"]));
        answer(&mut book, &mut display, "hero-red-words", Err("timeout".into()));
        display.complete();

        assert_eq!(display.shown_total(), 1500);
        assert!(book.is_claimed("hero-red-words"));
    }

    #[test]
    fn test_reload_picks_up_other_windows() {
        let mut book = ClaimBook::default();
        let mut display = EarningsDisplay::new(BASE_AMOUNT);
        load(&mut book, &mut display, &summary(1000, &[]));
        assert_eq!(display.shown_total(), 1000);

        load(&mut book, &mut display, &summary(6000, &["all-projects-work"]));
        assert_eq!(display.shown_total(), 6000);
        assert!(book.is_claimed("all-projects-work"));
    }

    #[test]
    fn test_superseded_load_ignored() {
        let mut book = ClaimBook::default();
        let stale = book.start_load();
        let latest = book.start_load();

        assert_eq!(book.adopt(stale, &summary(1000, &[])), None);
        assert_eq!(book.adopt(latest, &summary(3500, &["skills-table"])), Some(3500));
    }
}
