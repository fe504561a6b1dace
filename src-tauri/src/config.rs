//! Ledger configuration loaded from TOML.
//!
//! Provides two loading methods:
//! - `default_config()` - Loads the defaults compiled into the binary
//! - `load_config(path)` - Loads an override file from a path

use std::path::Path;

use anyhow::Result;
use serde::{Deserialize, Serialize};
use tracing::{info, warn};

/// Defaults embedded in the binary at compile time.
/// These are loaded from `src-tauri/config/ledger.toml`.
const DEFAULT_CONFIG: &str = include_str!("../config/ledger.toml");

/// File name looked up in the app config directory for overrides.
pub const CONFIG_FILE: &str = "ledger.toml";

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct LedgerConfig {
    /// Starting balance added to every session total, in points.
    pub base_amount: i64,
    /// Largest single claim accepted, in points.
    pub max_claim_value: i64,
    /// SQLite file name inside the app data directory.
    pub database_file: String,
}

/// Partial override; any key left out keeps the embedded default.
#[derive(Debug, Default, Deserialize)]
struct ConfigOverride {
    base_amount: Option<i64>,
    max_claim_value: Option<i64>,
    database_file: Option<String>,
}

/// Get the defaults embedded in the binary.
///
/// # Panics
/// Panics if the embedded TOML is invalid (this would be a compile-time bug).
pub fn default_config() -> LedgerConfig {
    toml::from_str(DEFAULT_CONFIG).expect("embedded ledger.toml must be valid TOML")
}

/// Load an override file and merge it over the embedded defaults.
pub fn load_config(path: &Path) -> Result<LedgerConfig> {
    let content = std::fs::read_to_string(path)?;
    let overrides: ConfigOverride = toml::from_str(&content)?;
    let mut config = default_config();
    if let Some(base) = overrides.base_amount {
        config.base_amount = base;
    }
    if let Some(max) = overrides.max_claim_value {
        config.max_claim_value = max;
    }
    if let Some(file) = overrides.database_file.filter(|f| !f.trim().is_empty()) {
        config.database_file = file;
    }
    config.validate()?;
    Ok(config)
}

/// Resolve the effective config for a config directory.
///
/// A missing override file is normal. A broken one is logged and ignored.
pub fn resolve_config(config_dir: &Path) -> LedgerConfig {
    let path = config_dir.join(CONFIG_FILE);
    if !path.exists() {
        return default_config();
    }
    match load_config(&path) {
        Ok(config) => {
            info!("Loaded ledger config override from {:?}", path);
            config
        }
        Err(e) => {
            warn!("Ignoring invalid ledger config {:?}: {}", path, e);
            default_config()
        }
    }
}

impl LedgerConfig {
    fn validate(&self) -> Result<()> {
        if self.base_amount < 0 {
            anyhow::bail!("base_amount must not be negative, got {}", self.base_amount);
        }
        if self.max_claim_value < 1 {
            anyhow::bail!(
                "max_claim_value must be at least 1, got {}",
                self.max_claim_value
            );
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_default_config_loads() {
        let config = default_config();
        assert_eq!(config.base_amount, 1000);
        assert_eq!(config.max_claim_value, 10000);
        assert_eq!(config.database_file, "rewards.db");
    }

    #[test]
    fn test_partial_override_keeps_defaults() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join(CONFIG_FILE);
        std::fs::write(&path, "base_amount = 2500\n").unwrap();

        let config = load_config(&path).unwrap();
        assert_eq!(config.base_amount, 2500);
        assert_eq!(config.max_claim_value, 10000);
        assert_eq!(config.database_file, "rewards.db");
    }

    #[test]
    fn test_negative_base_rejected() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join(CONFIG_FILE);
        std::fs::write(&path, "base_amount = -5\n").unwrap();

        assert!(load_config(&path).is_err());
    }

    #[test]
    fn test_resolve_falls_back_on_garbage() {
        let dir = TempDir::new().unwrap();
        std::fs::write(dir.path().join(CONFIG_FILE), "base_amount = [").unwrap();

        assert_eq!(resolve_config(dir.path()), default_config());
    }

    #[test]
    fn test_resolve_without_override() {
        let dir = TempDir::new().unwrap();
        assert_eq!(resolve_config(dir.path()), default_config());
    }
}
