use std::path::Path;
use std::time::Duration;

use rusqlite::{params, Connection, OptionalExtension};
use tracing::{info, warn};

use super::types::{ClaimOutcome, EarningsSummary, RewardEvent};
use crate::config::LedgerConfig;
use crate::error::{PortfolioError, Result};

/// SQLite store for collected rewards.
/// All operations are synchronous (rusqlite is blocking); the
/// host keeps one instance behind a mutex.
pub struct RewardLedger {
    conn: Connection,
    base_amount: i64,
    max_claim_value: i64,
}

impl RewardLedger {
    /// Create or open the rewards database.
    /// Typically called with: app.path().app_data_dir()?.join(config.database_file)
    pub fn new(db_path: &Path, config: &LedgerConfig) -> Result<Self> {
        if let Some(parent) = db_path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let conn = Connection::open(db_path)?;
        conn.busy_timeout(Duration::from_secs(5))?;

        // The unique constraint is what makes a claim happen at most once,
        // even with two windows racing on the same session.
        conn.execute_batch(
            "CREATE TABLE IF NOT EXISTS clicked_words (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                session_id TEXT NOT NULL,
                word_id TEXT NOT NULL,
                value INTEGER NOT NULL,
                created_at TEXT NOT NULL DEFAULT (strftime('%Y-%m-%dT%H:%M:%fZ', 'now')),
                UNIQUE(session_id, word_id)
            );
            CREATE INDEX IF NOT EXISTS idx_clicked_words_session ON clicked_words(session_id);",
        )?;

        info!("Opened rewards database at {:?}", db_path);
        Ok(Self {
            conn,
            base_amount: config.base_amount,
            max_claim_value: config.max_claim_value,
        })
    }

    pub fn base_amount(&self) -> i64 {
        self.base_amount
    }

    /// Whether this session already collected the given word.
    pub fn has_claimed(&self, session_id: &str, word_id: &str) -> Result<bool> {
        let found = self
            .conn
            .query_row(
                "SELECT 1 FROM clicked_words WHERE session_id = ?1 AND word_id = ?2",
                params![session_id, word_id],
                |_| Ok(()),
            )
            .optional()?;
        Ok(found.is_some())
    }

    /// Record a claim. A repeat of an existing (session, word) pair is a
    /// no-op reported as [`ClaimOutcome::AlreadyClaimed`].
    pub fn claim(&self, session_id: &str, word_id: &str, value: i64) -> Result<ClaimOutcome> {
        if session_id.trim().is_empty() {
            return Err(PortfolioError::InvalidClaim("empty session id".to_string()));
        }
        if word_id.trim().is_empty() {
            return Err(PortfolioError::InvalidClaim("empty word id".to_string()));
        }
        if value < 1 || value > self.max_claim_value {
            return Err(PortfolioError::InvalidClaim(format!(
                "value {} for '{}' outside 1..={}",
                value, word_id, self.max_claim_value
            )));
        }

        let inserted = self.conn.execute(
            "INSERT OR IGNORE INTO clicked_words (session_id, word_id, value)
             VALUES (?1, ?2, ?3)",
            params![session_id, word_id, value],
        )?;

        if inserted == 0 {
            warn!("Duplicate claim of '{}' by {}", word_id, session_id);
            Ok(ClaimOutcome::AlreadyClaimed)
        } else {
            info!("Recorded claim of '{}' ({}) by {}", word_id, value, session_id);
            Ok(ClaimOutcome::Recorded)
        }
    }

    /// Base amount plus every claimed value for the session.
    pub fn total_for(&self, session_id: &str) -> Result<i64> {
        let sum: i64 = self.conn.query_row(
            "SELECT COALESCE(SUM(value), 0) FROM clicked_words WHERE session_id = ?1",
            params![session_id],
            |row| row.get(0),
        )?;
        Ok(self.base_amount + sum)
    }

    /// Word ids already collected by the session, in claim order.
    pub fn claimed_sources(&self, session_id: &str) -> Result<Vec<String>> {
        let mut stmt = self
            .conn
            .prepare("SELECT word_id FROM clicked_words WHERE session_id = ?1 ORDER BY id")?;
        let rows = stmt.query_map(params![session_id], |row| row.get(0))?;
        Ok(rows.collect::<std::result::Result<Vec<String>, _>>()?)
    }

    /// Full claim history for the session, oldest first.
    pub fn events_for(&self, session_id: &str) -> Result<Vec<RewardEvent>> {
        let mut stmt = self.conn.prepare(
            "SELECT session_id, word_id, value, created_at
             FROM clicked_words
             WHERE session_id = ?1
             ORDER BY id",
        )?;
        let rows = stmt.query_map(params![session_id], |row| {
            Ok(RewardEvent {
                session_id: row.get(0)?,
                word_id: row.get(1)?,
                value: row.get(2)?,
                created_at: row.get(3)?,
            })
        })?;
        Ok(rows.collect::<std::result::Result<Vec<_>, _>>()?)
    }

    pub fn summary(&self, session_id: &str) -> Result<EarningsSummary> {
        Ok(EarningsSummary {
            session_id: session_id.to_string(),
            total: self.total_for(session_id)?,
            claimed: self.claimed_sources(session_id)?,
        })
    }
}
