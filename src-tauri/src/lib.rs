pub mod config;
mod commands;
pub mod error;
pub mod ledger;
pub mod session;
pub mod state;

pub use error::PortfolioError;
pub use ledger::{ClaimOutcome, EarningsSummary, RewardEvent, RewardLedger};

pub fn run() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    tauri::Builder::default()
        .plugin(tauri_plugin_store::Builder::new().build())
        .manage(session::SessionState::new())
        .manage(state::LedgerState::new())
        .invoke_handler(tauri::generate_handler![
            commands::session::get_session_id,
            commands::rewards::get_earnings_summary,
            commands::rewards::get_earnings_total,
            commands::rewards::has_claimed,
            commands::rewards::claim_reward,
            commands::rewards::list_reward_events,
        ])
        .setup(|app| {
            // Open the ledger; a failure leaves reward commands erroring
            // while the rest of the site keeps working.
            use tauri::Manager;
            let config = match app.path().app_config_dir() {
                Ok(dir) => config::resolve_config(&dir),
                Err(e) => {
                    tracing::warn!("No app config dir ({}), using default ledger config", e);
                    config::default_config()
                }
            };
            match app.path().app_data_dir() {
                Ok(data_dir) => {
                    let ledger = app.state::<state::LedgerState>();
                    if let Err(e) = ledger.open(&data_dir, &config) {
                        tracing::warn!("Rewards will not persist this run: {}", e);
                    }
                }
                Err(e) => tracing::warn!("No app data dir, rewards will not persist: {}", e),
            }
            Ok(())
        })
        .run(tauri::generate_context!())
        .expect("error while running tauri application");
}
