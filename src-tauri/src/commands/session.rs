use std::sync::Arc;

use tauri::{AppHandle, Runtime, State};
use tauri_plugin_store::{Store, StoreExt};
use tracing::warn;

use crate::error::{self, PortfolioError};
use crate::session::{KeyValueStore, SessionState, SESSION_STORE_FILE};

/// Session storage backed by the store plugin's JSON file.
struct PluginStore<R: Runtime>(Arc<Store<R>>);

impl<R: Runtime> KeyValueStore for PluginStore<R> {
    fn get(&self, key: &str) -> error::Result<Option<String>> {
        Ok(self
            .0
            .get(key)
            .and_then(|v| v.as_str().map(|s| s.to_string())))
    }

    fn set(&self, key: &str, value: &str) -> error::Result<()> {
        self.0.set(key, serde_json::json!(value));
        self.0
            .save()
            .map_err(|e| PortfolioError::Session(format!("Failed to save session store: {}", e)))
    }
}

#[tauri::command]
pub fn get_session_id(app: AppHandle, state: State<'_, SessionState>) -> Result<String, String> {
    let store = app.store(SESSION_STORE_FILE).map_err(|e| {
        warn!("Failed to open session store: {}", e);
        e.to_string()
    })?;
    state.resolve(&PluginStore(store)).map_err(|e| {
        warn!("Failed to resolve session: {}", e);
        e.into()
    })
}
