pub mod api;
pub mod config;
pub mod domain;
pub mod error;
pub mod logging;
pub mod message;
pub mod notifier;
pub mod utils;
pub mod verdict;
pub mod watcher;

use std::sync::Arc;

use api::PraktikumClient;
use config::AppConfig;
use domain::Cursor;
use notifier::{ConsoleNotifier, NotifierHub, TelegramNotifier};
use utils::mask_secret;
use watcher::{HomeworkWatcher, Schedule};

use anyhow::Result;
use tracing::info;

pub async fn run(config: AppConfig) -> Result<()> {
    info!(
        "🔑 Homework API {} with token {}",
        config.api_url,
        mask_secret(&config.praktikum_token)
    );
    let source = PraktikumClient::new(
        config.praktikum_token.clone(),
        config.api_url.clone(),
        config.request_timeout,
    )?;

    let console = ConsoleNotifier::new();
    let telegram = TelegramNotifier::maybe_from_config(&config)?;
    if telegram.is_some() {
        info!("📱 Telegram notifications enabled");
    } else {
        info!("📱 Telegram notifications disabled (no credentials)");
    }
    let notifier = NotifierHub::new(console, telegram);

    let mut app = HomeworkWatcher::new(
        Arc::new(source),
        Arc::new(notifier),
        Schedule::from_config(&config),
        Cursor::now(),
    );
    app.run().await?;
    Ok(())
}
