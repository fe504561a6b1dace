//! Session identity: one opaque token per installed profile.
//!
//! The token is created on first use, written to durable storage under
//! [`SESSION_KEY`] and returned unchanged on every later call. It never
//! expires and never rotates.

mod token;

use std::collections::HashMap;
use std::sync::Mutex;

use chrono::Utc;
use tracing::{info, warn};

use crate::error::{PortfolioError, Result};

pub use token::{generate_session_id, is_valid_session_id};

/// Durable key holding the session token.
pub const SESSION_KEY: &str = "portfolio_session_id";

/// Store file managed by the store plugin.
pub const SESSION_STORE_FILE: &str = "session.json";

/// Minimal string key-value storage the session token lives in.
pub trait KeyValueStore: Send + Sync {
    fn get(&self, key: &str) -> Result<Option<String>>;

    fn set(&self, key: &str, value: &str) -> Result<()>;
}

/// Return the stored session token, issuing and persisting a new one if
/// none exists or the stored value is garbled.
pub fn get_session_id(store: &dyn KeyValueStore) -> Result<String> {
    match store.get(SESSION_KEY)? {
        Some(existing) if is_valid_session_id(&existing) => return Ok(existing),
        Some(garbled) => {
            warn!(
                "Discarding malformed session token ({} chars), issuing a new one",
                garbled.len()
            );
        }
        None => {}
    }

    let token = generate_session_id(Utc::now().timestamp_millis(), &mut rand::rng());
    store.set(SESSION_KEY, &token)?;
    info!("Issued new session {}", token);
    Ok(token)
}

/// Caches the resolved token for the lifetime of the process so concurrent
/// first calls cannot issue two different tokens.
pub struct SessionState {
    current: Mutex<Option<String>>,
}

impl SessionState {
    pub fn new() -> Self {
        Self {
            current: Mutex::new(None),
        }
    }

    pub fn resolve(&self, store: &dyn KeyValueStore) -> Result<String> {
        let mut current = self
            .current
            .lock()
            .map_err(|_| PortfolioError::Session("session lock poisoned".to_string()))?;
        if let Some(token) = current.as_ref() {
            return Ok(token.clone());
        }
        let token = get_session_id(store)?;
        *current = Some(token.clone());
        Ok(token)
    }
}

impl Default for SessionState {
    fn default() -> Self {
        Self::new()
    }
}

/// In-memory store, used in tests and as a stand-in when no durable store
/// can be opened.
#[derive(Default)]
pub struct MemoryStore {
    values: Mutex<HashMap<String, String>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>> {
        let values = self
            .values
            .lock()
            .map_err(|_| PortfolioError::Session("memory store poisoned".to_string()))?;
        Ok(values.get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<()> {
        let mut values = self
            .values
            .lock()
            .map_err(|_| PortfolioError::Session("memory store poisoned".to_string()))?;
        values.insert(key.to_string(), value.to_string());
        Ok(())
    }
}
