use anyhow::Result;
use homework_watch::config::AppConfig;
use homework_watch::logging;
use tracing::{info, warn};

#[tokio::main]
async fn main() -> Result<()> {
    let dotenv_result = dotenv::dotenv();

    let config = AppConfig::from_env()?;
    let _log_guard = logging::init(config.log_dir.as_deref())?;

    match dotenv_result {
        Ok(path) => info!("📄 Loaded .env from {:?}", path),
        Err(e) => warn!("⚠️  Could not load .env file: {}", e),
    }

    info!("🏗️  Starting homework-watch");
    homework_watch::run(config).await
}
