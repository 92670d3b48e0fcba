use crate::config::AppConfig;
use crate::domain::Delivery;
use crate::error::NotifyError;
use async_trait::async_trait;
use serde::Deserialize;
use std::time::Duration;
use tracing::{info, warn};

use super::Notifier;

const API_URL: &str = "https://api.telegram.org";

#[derive(Debug, Clone)]
pub struct TelegramNotifier {
    bot_token: String,
    chat_id: String,
    base_url: String,
    client: reqwest::Client,
}

#[derive(Debug, Deserialize)]
struct Envelope {
    ok: bool,
    #[serde(default)]
    result: Option<SentMessage>,
    #[serde(default)]
    description: Option<String>,
}

#[derive(Debug, Deserialize)]
struct SentMessage {
    message_id: i64,
}

impl TelegramNotifier {
    pub fn new(bot_token: String, chat_id: String, timeout: Duration) -> Result<Self, NotifyError> {
        Self::with_base_url(bot_token, chat_id, API_URL.to_string(), timeout)
    }

    /// Points the notifier at a different Bot API host (useful for testing).
    pub fn with_base_url(
        bot_token: String,
        chat_id: String,
        base_url: String,
        timeout: Duration,
    ) -> Result<Self, NotifyError> {
        let client = reqwest::Client::builder()
            .connect_timeout(Duration::from_secs(10))
            .timeout(timeout)
            .build()
            .map_err(redact)?;
        Ok(Self {
            bot_token,
            chat_id,
            base_url,
            client,
        })
    }

    pub fn maybe_from_config(config: &AppConfig) -> Result<Option<Self>, NotifyError> {
        match (&config.telegram_bot_token, &config.telegram_chat_id) {
            (Some(token), Some(chat_id)) if !token.is_empty() && !chat_id.is_empty() => {
                Self::new(token.clone(), chat_id.clone(), config.request_timeout).map(Some)
            }
            _ => Ok(None),
        }
    }
}

// The request URL carries the bot token.
fn redact(err: reqwest::Error) -> NotifyError {
    NotifyError::Transport(err.without_url())
}

#[async_trait]
impl Notifier for TelegramNotifier {
    async fn send(&self, text: &str) -> Result<Delivery, NotifyError> {
        let url = format!("{}/bot{}/sendMessage", self.base_url, self.bot_token);
        let payload = serde_json::json!({
            "chat_id": self.chat_id,
            "text": text,
        });

        let response = self.client.post(&url).json(&payload).send().await.map_err(redact)?;
        let status = response.status();
        let body = response.text().await.map_err(redact)?;
        let envelope = serde_json::from_str::<Envelope>(&body).ok();

        match envelope {
            Some(Envelope {
                ok: true, result, ..
            }) if status.is_success() => {
                let delivery = Delivery {
                    channel: format!("telegram:{}", self.chat_id),
                    message_id: result.map(|m| m.message_id),
                };
                info!("Message sent to Telegram: {:?}", delivery);
                Ok(delivery)
            }
            other => {
                let description = other.and_then(|e| e.description).unwrap_or(body);
                warn!("Failed to send Telegram message: {}", description);
                Err(NotifyError::Rejected {
                    status: status.as_u16(),
                    description,
                })
            }
        }
    }
}
