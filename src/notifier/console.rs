use crate::domain::Delivery;
use crate::error::NotifyError;
use async_trait::async_trait;
use tracing::info;

use super::Notifier;

#[derive(Debug, Clone, Default)]
pub struct ConsoleNotifier;

impl ConsoleNotifier {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl Notifier for ConsoleNotifier {
    async fn send(&self, text: &str) -> Result<Delivery, NotifyError> {
        println!("📨 {text}");
        info!("Message echoed to console ({} chars)", text.chars().count());
        Ok(Delivery {
            channel: "console".to_string(),
            message_id: None,
        })
    }
}
