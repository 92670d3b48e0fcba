mod console;
mod telegram;

pub use console::ConsoleNotifier;
pub use telegram::TelegramNotifier;

use crate::domain::Delivery;
use crate::error::NotifyError;
use async_trait::async_trait;

/// A place the bot can post text to.
#[async_trait]
pub trait Notifier: Send + Sync {
    async fn send(&self, text: &str) -> Result<Delivery, NotifyError>;
}

/// Echoes every message to the console and forwards it to Telegram when
/// credentials are configured.
pub struct NotifierHub {
    console: ConsoleNotifier,
    telegram: Option<TelegramNotifier>,
}

impl NotifierHub {
    pub fn new(console: ConsoleNotifier, telegram: Option<TelegramNotifier>) -> Self {
        Self { console, telegram }
    }
}

#[async_trait]
impl Notifier for NotifierHub {
    async fn send(&self, text: &str) -> Result<Delivery, NotifyError> {
        let echoed = self.console.send(text).await?;

        match &self.telegram {
            Some(telegram) => telegram.send(text).await,
            None => Ok(echoed),
        }
    }
}
