use std::path::Path;
use std::sync::Mutex;

use tracing::{error, info};

use crate::config::LedgerConfig;
use crate::error::{PortfolioError, Result};
use crate::ledger::RewardLedger;

/// Shared handle to the reward ledger.
///
/// The ledger is opened once during setup. If that fails the app still
/// runs; ledger commands then report an error and the UI keeps its base
/// total.
pub struct LedgerState {
    ledger: Mutex<Option<RewardLedger>>,
}

impl LedgerState {
    pub fn new() -> Self {
        Self {
            ledger: Mutex::new(None),
        }
    }

    /// Open the ledger database inside `data_dir`.
    pub fn open(&self, data_dir: &Path, config: &LedgerConfig) -> Result<()> {
        let db_path = data_dir.join(&config.database_file);
        let ledger = match RewardLedger::new(&db_path, config) {
            Ok(ledger) => ledger,
            Err(e) => {
                error!("Failed to open rewards database {:?}: {}", db_path, e);
                return Err(e);
            }
        };
        *self.lock()? = Some(ledger);
        info!("Reward ledger ready (base {})", config.base_amount);
        Ok(())
    }

    pub fn is_open(&self) -> bool {
        self.lock().map(|l| l.is_some()).unwrap_or(false)
    }

    pub fn with_ledger<T>(&self, f: impl FnOnce(&RewardLedger) -> Result<T>) -> Result<T> {
        let guard = self.lock()?;
        match guard.as_ref() {
            Some(ledger) => f(ledger),
            None => Err(PortfolioError::Config(
                "reward ledger is not available".to_string(),
            )),
        }
    }

    fn lock(&self) -> Result<std::sync::MutexGuard<'_, Option<RewardLedger>>> {
        self.ledger
            .lock()
            .map_err(|_| PortfolioError::Config("ledger lock poisoned".to_string()))
    }
}

impl Default for LedgerState {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::default_config;
    use tempfile::TempDir;

    #[test]
    fn test_closed_state_reports_error() {
        let state = LedgerState::new();
        assert!(!state.is_open());

        let result = state.with_ledger(|l| l.total_for("session_1_a"));
        assert!(matches!(result, Err(PortfolioError::Config(_))));
    }

    #[test]
    fn test_open_then_use() {
        let dir = TempDir::new().unwrap();
        let state = LedgerState::new();
        state.open(dir.path(), &default_config()).unwrap();
        assert!(state.is_open());

        state
            .with_ledger(|l| l.claim("session_1_a", "hero-red-words", 500))
            .unwrap();
        let total = state.with_ledger(|l| l.total_for("session_1_a")).unwrap();
        assert_eq!(total, 1500);
        assert!(dir.path().join("rewards.db").exists());
    }
}
