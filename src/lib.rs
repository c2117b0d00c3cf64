pub mod checker;
pub mod commands;
pub mod config;
pub mod core_state;
pub mod models;

use std::sync::Arc;

use tracing_subscriber::EnvFilter;

#[cfg_attr(mobile, tauri::mobile_entry_point)]
pub fn run() {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(config::default_log_filter())),
        )
        .init();

    tracing::info!("{} starting v{}", config::APP_NAME, config::APP_VERSION);

    tauri::Builder::default()
        .manage(Arc::new(core_state::CoreState::new()))
        .invoke_handler(tauri::generate_handler![
            commands::health_check,
            commands::checker::get_screen,
            commands::checker::update_draft_text,
            commands::checker::select_severity,
            commands::checker::add_symptom,
            commands::checker::analyze_symptoms,
            commands::checker::reset_screen,
        ])
        .run(tauri::generate_context!())
        .expect("error while running Symptom Checker");
}
