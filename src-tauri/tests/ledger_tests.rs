use std::path::PathBuf;
use std::sync::{Arc, Barrier};
use std::thread;

use portfolio_tauri::config::{default_config, LedgerConfig};
use portfolio_tauri::session::{get_session_id, MemoryStore, SessionState};
use portfolio_tauri::{ClaimOutcome, RewardLedger};
use tempfile::TempDir;

fn db_path(dir: &TempDir) -> PathBuf {
    dir.path().join("nested").join("rewards.db")
}

fn open(dir: &TempDir) -> RewardLedger {
    RewardLedger::new(&db_path(dir), &default_config()).expect("Failed to open ledger")
}

#[test]
fn test_fresh_session_claims_500() {
    let dir = TempDir::new().unwrap();
    let ledger = open(&dir);
    let store = MemoryStore::new();
    let session = get_session_id(&store).unwrap();

    assert_eq!(ledger.total_for(&session).unwrap(), 1000);
    assert_eq!(
        ledger.claim(&session, "hero-red-words", 500).unwrap(),
        ClaimOutcome::Recorded
    );
    assert_eq!(ledger.total_for(&session).unwrap(), 1500);

    // Second click on the same word is a no-op
    assert_eq!(
        ledger.claim(&session, "hero-red-words", 500).unwrap(),
        ClaimOutcome::AlreadyClaimed
    );
    assert_eq!(ledger.total_for(&session).unwrap(), 1500);
}

#[test]
fn test_total_is_base_plus_sum_and_monotonic() {
    let dir = TempDir::new().unwrap();
    let ledger = open(&dir);
    let session = "session_1700000000000_monotonic";

    let claims = [
        ("project-calm-affordable", 1500),
        ("project-memory-falters", 1800),
        ("project-calm-affordable", 1500),
        ("swole-gym-performance", 1600),
        ("project-memory-falters", 1800),
        ("all-projects-work", 5000),
    ];

    let mut previous = ledger.total_for(session).unwrap();
    let mut expected = 1000;
    for (word, value) in claims {
        if ledger.claim(session, word, value).unwrap() == ClaimOutcome::Recorded {
            expected += value;
        }
        let total = ledger.total_for(session).unwrap();
        assert!(total >= previous, "total went down: {} -> {}", previous, total);
        assert_eq!(total, expected);
        previous = total;
    }
    assert_eq!(expected, 1000 + 1500 + 1800 + 1600 + 5000);
}

#[test]
fn test_reload_reproduces_session_and_claims() {
    let dir = TempDir::new().unwrap();
    let store = MemoryStore::new();

    let session = {
        let state = SessionState::new();
        let ledger = open(&dir);
        let session = state.resolve(&store).unwrap();
        ledger.claim(&session, "rover-rl-framework", 2000).unwrap();
        ledger.claim(&session, "rover-ros-systems", 1500).unwrap();
        session
    };

    // New process: fresh in-memory cache, same durable store and database
    let state = SessionState::new();
    let ledger = open(&dir);
    let reloaded = state.resolve(&store).unwrap();
    assert_eq!(reloaded, session);

    let summary = ledger.summary(&reloaded).unwrap();
    assert_eq!(summary.total, 4500);
    assert_eq!(
        summary.claimed,
        vec!["rover-rl-framework".to_string(), "rover-ros-systems".to_string()]
    );
    assert_eq!(
        ledger.claim(&reloaded, "rover-ros-systems", 1500).unwrap(),
        ClaimOutcome::AlreadyClaimed
    );
}

#[test]
fn test_concurrent_windows_claim_once() {
    let dir = TempDir::new().unwrap();
    // Create the schema before the racers start
    drop(open(&dir));

    let path = db_path(&dir);
    let racers = 4;
    let barrier = Arc::new(Barrier::new(racers));
    let handles: Vec<_> = (0..racers)
        .map(|_| {
            let path = path.clone();
            let barrier = barrier.clone();
            thread::spawn(move || {
                let ledger = RewardLedger::new(&path, &default_config()).unwrap();
                barrier.wait();
                // A busy database is a transient failure, not a second claim
                loop {
                    match ledger.claim("session_1_race", "all-projects-work", 5000) {
                        Ok(outcome) => break outcome,
                        Err(_) => thread::yield_now(),
                    }
                }
            })
        })
        .collect();

    let outcomes: Vec<ClaimOutcome> = handles.into_iter().map(|h| h.join().unwrap()).collect();
    let recorded = outcomes
        .iter()
        .filter(|o| **o == ClaimOutcome::Recorded)
        .count();
    assert_eq!(recorded, 1);

    let ledger = open(&dir);
    assert_eq!(ledger.total_for("session_1_race").unwrap(), 6000);
}

#[test]
fn test_custom_base_amount() {
    let dir = TempDir::new().unwrap();
    let config = LedgerConfig {
        base_amount: 0,
        max_claim_value: 100,
        database_file: "custom.db".to_string(),
    };
    let ledger = RewardLedger::new(&dir.path().join(&config.database_file), &config).unwrap();

    assert_eq!(ledger.base_amount(), 0);
    ledger.claim("session_1_a", "word", 100).unwrap();
    assert!(ledger.claim("session_1_a", "other", 101).is_err());
    assert_eq!(ledger.total_for("session_1_a").unwrap(), 100);
}
