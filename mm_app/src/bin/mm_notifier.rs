use std::sync::Arc;

use mm_app::cli;
use mm_app::config_loader;
use mm_app::tracing_setup;
use mm_app::tracing_setup::LogOptions;
use mm_tg::EngineView;
use mm_tg::NotificationService;
use mm_tg::NotifierConfig;
use mm_tg::TelegramConnector;
use mm_types::Order;
use mm_types::Position;

/// Stand-in for the trading engine until one is attached
struct IdleEngine;

impl EngineView for IdleEngine {
    fn position(&self) -> Option<Position> {
        None
    }

    fn active_orders(&self) -> Vec<Order> {
        Vec::new()
    }

    fn is_running(&self) -> bool {
        false
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env before anything reads the environment
    dotenvy::dotenv().ok();

    let mut log_options = LogOptions::new("mm_notifier");
    if let Some(log_dir) = cli::get_log_dir() {
        log_options = log_options.with_log_dir(log_dir);
    }
    let _guard = tracing_setup::init(&log_options);

    let config_path = cli::get_config_path();
    let settings = Arc::new(config_loader::load_settings_or_default(config_path.as_deref()));
    tracing::debug!("Settings: {settings:?}");

    let mut notifier = NotificationService::connect(&NotifierConfig::from(settings.as_ref()), &TelegramConnector).await;
    notifier.register_engine_commands(settings.clone(), Arc::new(IdleEngine));
    let notifier = Arc::new(notifier);

    notifier.send_info(&format!("Notifier online for {}", settings.symbol)).await;

    if notifier.is_enabled() {
        mm_tg::run_command_listener(notifier.clone()).await;
    } else {
        tracing::info!("Notifications disabled, waiting for Ctrl+C");
        tokio::signal::ctrl_c().await?;
    }

    tracing::info!("Shutdown signal received");
    Ok(())
}
